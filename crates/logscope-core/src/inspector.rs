//! Single-node inspection: names, type, and JSON projection.
//!
//! The inspector is the generic path. It never consults the override of the
//! node it is given (the engine decides that before calling in); it does
//! honor overrides of nested values while building the JSON projection, so a
//! self-describing member is rendered by its own `describe()` body.
//!
//! # Visibility policy
//!
//! - Every declared member is listed in the names index.
//! - Only exposed, non-skipped members are classified and projected.
//! - Hidden members never reach the JSON body.

use serde_json::{Map, Value};

use crate::config::EngineConfig;
use crate::descriptor::{Member, Shape};
use crate::error::{Diagnostic, ProjectionError};
use crate::guard::PathGuard;
use crate::subject::Subject;

/// How the traversal engine treats a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    /// Hidden or skipped: named only.
    Unindexed,
    /// Exposed value that is not descended into.
    Leaf,
    /// Exposed composite whose descent is suppressed by `omit_nested`.
    Opaque,
    /// Exposed composite: classified and descended into.
    Composite,
}

impl MemberRole {
    /// Returns true if the member's type is recorded in the types index.
    #[must_use]
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unindexed)
    }

    /// Returns true if the engine descends into the member.
    #[must_use]
    pub const fn descends(self) -> bool {
        matches!(self, Self::Composite)
    }
}

/// Everything the inspector reports about one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeReport {
    /// Declared member names followed by the node's bare type name.
    pub names: Vec<String>,
    /// Formatted type of the node.
    pub type_name: String,
    /// JSON projection, or empty if it could not be encoded.
    pub json: String,
    /// Conditions met while projecting.
    pub diagnostics: Vec<Diagnostic>,
}

/// JSON body of a node plus the diagnostics raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Encoded body; empty on serialization failure.
    pub json: String,
    /// Conditions met while projecting.
    pub diagnostics: Vec<Diagnostic>,
}

/// Generic single-node inspector.
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'c> {
    config: &'c EngineConfig,
}

impl<'c> Inspector<'c> {
    /// Creates an inspector using `config` for type formatting and limits.
    #[must_use]
    pub const fn new(config: &'c EngineConfig) -> Self {
        Self { config }
    }

    /// Declared member names (exposed and hidden, in declaration order)
    /// followed by the subject's own bare type name.
    #[must_use]
    pub fn member_names(&self, subject: &dyn Subject) -> Vec<String> {
        let mut names = Vec::new();
        subject.visit_members(&mut |member| names.push(member.name.to_owned()));
        names.push(subject.descriptor().name().to_owned());
        names
    }

    /// Formatted type of the subject, with the configured indirection marker.
    #[must_use]
    pub fn type_of(&self, subject: &dyn Subject) -> String {
        subject
            .descriptor()
            .render(&self.config.indirection_marker)
    }

    /// Applies the visibility policy to a member.
    #[must_use]
    pub fn classify(&self, member: &Member<'_>) -> MemberRole {
        if !member.is_exposed() || member.options.skip {
            MemberRole::Unindexed
        } else if !member.value.is_composite() {
            MemberRole::Leaf
        } else if member.options.omit_nested {
            MemberRole::Opaque
        } else {
            MemberRole::Composite
        }
    }

    /// Builds the JSON projection of the subject.
    ///
    /// # Errors
    /// Returns the first value that could not be encoded, with its path.
    pub fn project(&self, subject: &dyn Subject) -> Result<(Value, Vec<Diagnostic>), ProjectionError> {
        let mut projector = Projector::new(self.config.max_depth);
        let label = subject.descriptor().name().to_owned();
        match projector.project_generic(subject, &label) {
            Ok(value) => Ok((value, projector.diagnostics)),
            Err(failure) => Err(failure.error),
        }
    }

    /// Encodes the subject's JSON body.
    ///
    /// Never fails: an encoding failure yields an empty body and a
    /// [`Diagnostic::SerializationFailure`].
    #[must_use]
    pub fn encode(&self, subject: &dyn Subject) -> Encoded {
        let type_name = subject.descriptor().name().to_owned();
        let mut projector = Projector::new(self.config.max_depth);
        let projected = projector.project_generic(subject, &type_name);
        let mut diagnostics = projector.diagnostics;

        let rendered = projected
            .map_err(|failure| format!("{}: {}", failure.path, failure.error))
            .and_then(|value| self.render(&value).map_err(|e| e.to_string()));

        let json = match rendered {
            Ok(json) => json,
            Err(message) => {
                diagnostics.push(Diagnostic::serialization(type_name, message));
                String::new()
            }
        };
        Encoded { json, diagnostics }
    }

    /// Inspects one node: names, type, and JSON body.
    #[must_use]
    pub fn examine(&self, subject: &dyn Subject) -> NodeReport {
        let Encoded { json, diagnostics } = self.encode(subject);
        NodeReport {
            names: self.member_names(subject),
            type_name: self.type_of(subject),
            json,
            diagnostics,
        }
    }

    fn render(&self, value: &Value) -> serde_json::Result<String> {
        if self.config.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

/// Checks that an override body is usable and parses it.
///
/// An empty body stands for `null`.
pub(crate) fn override_body(json: &str) -> Result<Value, String> {
    if json.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(json).map_err(|e| format!("body is not valid JSON: {e}"))
}

struct Failure {
    path: String,
    error: ProjectionError,
}

struct Projector {
    guard: PathGuard,
    diagnostics: Vec<Diagnostic>,
}

impl Projector {
    const fn new(max_depth: usize) -> Self {
        Self {
            guard: PathGuard::new(max_depth),
            diagnostics: Vec::new(),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Projects a nested value, letting its override speak for it.
    fn project(&mut self, subject: &dyn Subject, label: &str) -> Result<Value, Failure> {
        if let Some(triple) = subject.describe_override() {
            match override_body(&triple.json) {
                Ok(value) => return Ok(value),
                Err(reason) => self.report(Diagnostic::unsupported_override(
                    subject.descriptor().name(),
                    reason,
                )),
            }
        }
        self.project_generic(subject, label)
    }

    fn project_generic(&mut self, subject: &dyn Subject, label: &str) -> Result<Value, Failure> {
        let shape = subject.shape();
        if shape == Shape::Leaf {
            return subject.leaf_value().map_err(|error| Failure {
                path: self.guard.path_with(label),
                error,
            });
        }

        if let Err(diagnostic) = self.guard.enter(subject, label) {
            self.report(diagnostic);
            return Ok(Value::Null);
        }
        let projected = match shape {
            Shape::Record => self.project_record(subject),
            Shape::Sequence => self.project_sequence(subject),
            Shape::Map | Shape::Leaf => self.project_map(subject),
        };
        self.guard.leave();
        projected
    }

    fn project_record(&mut self, subject: &dyn Subject) -> Result<Value, Failure> {
        let mut object = Map::new();
        let mut failure = None;
        subject.visit_members(&mut |member| {
            if failure.is_some() || !member.is_projected() {
                return;
            }
            if member.options.omit_empty && member.value.is_zero() {
                return;
            }
            match self.project(member.value, member.name) {
                Ok(value) => {
                    object.insert(member.json_key().to_owned(), value);
                }
                Err(err) => failure = Some(err),
            }
        });
        failure.map_or(Ok(Value::Object(object)), Err)
    }

    fn project_sequence(&mut self, subject: &dyn Subject) -> Result<Value, Failure> {
        let mut items = Vec::new();
        let mut failure = None;
        subject.visit_elements(&mut |element| {
            if failure.is_some() {
                return;
            }
            let label = format!("[{}]", items.len());
            match self.project(element, &label) {
                Ok(value) => items.push(value),
                Err(err) => failure = Some(err),
            }
        });
        failure.map_or(Ok(Value::Array(items)), Err)
    }

    fn project_map(&mut self, subject: &dyn Subject) -> Result<Value, Failure> {
        let mut object = Map::new();
        let mut failure = None;
        subject.visit_entries(&mut |key, value| {
            if failure.is_some() {
                return;
            }
            match self.project(value, key) {
                Ok(value) => {
                    object.insert(key.to_owned(), value);
                }
                Err(err) => failure = Some(err),
            }
        });
        failure.map_or(Ok(Value::Object(object)), Err)
    }
}
