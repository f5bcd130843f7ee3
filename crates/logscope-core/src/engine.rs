//! Traversal engine: recursive descent, override precedence, flattening.
//!
//! # Algorithm (per node, depth-first, pre-order)
//!
//! 1. If the node supplies an override, its triple is the node's entire
//!    contribution and nothing beneath it is visited.
//! 2. Otherwise the inspector reports the node's names and its type.
//! 3. Each exposed, non-skipped member has its type recorded; composite
//!    members are then descended into and their names and types appended
//!    in declaration order.
//! 4. Only the root's JSON body is computed. Nested nodes contribute to the
//!    name and type indices only; the root body already renders exposed
//!    nested values through the inspector's projection.
//!
//! Every call is hermetic: the engine holds nothing but its configuration.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::emit;
use crate::error::{Diagnostic, DiagnosticKind, Result};
use crate::guard::PathGuard;
use crate::inspector::{Inspector, override_body};
use crate::subject::Subject;
use crate::triple::ResultTriple;

/// Outcome of one inspection: the triple plus out-of-band diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    /// The names, types, and JSON body.
    pub triple: ResultTriple,
    /// Non-fatal conditions met during the call, without duplicates.
    pub diagnostics: Vec<Diagnostic>,
}

impl Inspection {
    /// Returns true if no diagnostic was raised.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if a diagnostic of `kind` was raised.
    #[must_use]
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind() == kind)
    }

    /// The names index.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.triple.names
    }

    /// The types index.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.triple.types
    }

    /// The root JSON body.
    #[must_use]
    pub fn json(&self) -> &str {
        &self.triple.json
    }

    /// Splits into the triple and the diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (ResultTriple, Vec<Diagnostic>) {
        (self.triple, self.diagnostics)
    }
}

/// The traversal engine.
///
/// Stateless apart from its configuration; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a validated configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns an inspector sharing the engine configuration.
    #[must_use]
    pub const fn inspector(&self) -> Inspector<'_> {
        Inspector::new(&self.config)
    }

    /// Inspects `subject` and its whole object graph.
    #[must_use]
    pub fn inspect(&self, subject: &dyn Subject) -> Inspection {
        let mut walk = Walk::new(&self.config);
        let json = walk.root(subject);

        if self.config.log_diagnostics {
            for diagnostic in &walk.diagnostics {
                tracing::warn!(kind = ?diagnostic.kind(), "{diagnostic}");
            }
        }

        Inspection {
            triple: ResultTriple {
                names: walk.names,
                types: walk.types,
                json,
            },
            diagnostics: walk.diagnostics,
        }
    }

    /// Inspects `subject` and emits the result as one log event.
    pub fn log(&self, label: &str, subject: &dyn Subject) -> Inspection {
        let inspection = self.inspect(subject);
        emit::log_inspection(label, &inspection);
        inspection
    }
}

/// Inspects `subject` with the default configuration.
#[must_use]
pub fn inspect(subject: &dyn Subject) -> Inspection {
    Engine::new().inspect(subject)
}

/// State of one traversal call.
struct Walk<'c> {
    inspector: Inspector<'c>,
    guard: PathGuard,
    names: Vec<String>,
    types: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'c> Walk<'c> {
    fn new(config: &'c EngineConfig) -> Self {
        Self {
            inspector: Inspector::new(config),
            guard: PathGuard::new(config.max_depth),
            names: Vec::new(),
            types: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Walks from the root and returns the root's JSON body.
    fn root(&mut self, subject: &dyn Subject) -> String {
        if let Some(triple) = self.accepted_override(subject) {
            self.names.extend(triple.names);
            self.types.extend(triple.types);
            return triple.json;
        }

        let label = subject.descriptor().name().to_owned();
        self.generic(subject, &label);

        let encoded = self.inspector.encode(subject);
        for diagnostic in encoded.diagnostics {
            self.report(diagnostic);
        }
        encoded.json
    }

    /// Visits a nested composite member.
    fn nested(&mut self, subject: &dyn Subject, label: &str) {
        if let Some(triple) = self.accepted_override(subject) {
            self.names.extend(triple.names);
            self.types.extend(triple.types);
            return;
        }
        self.generic(subject, label);
    }

    /// Runs the override if the node has one whose body is usable.
    fn accepted_override(&mut self, subject: &dyn Subject) -> Option<ResultTriple> {
        let triple = subject.describe_override()?;
        match override_body(&triple.json) {
            Ok(_) => Some(triple),
            Err(reason) => {
                self.report(Diagnostic::unsupported_override(
                    subject.descriptor().name(),
                    reason,
                ));
                None
            }
        }
    }

    /// Generic path for one node.
    fn generic(&mut self, subject: &dyn Subject, label: &str) {
        if let Err(diagnostic) = self.guard.enter(subject, label) {
            self.report(diagnostic);
            return;
        }

        let inspector = self.inspector;
        self.names.extend(inspector.member_names(subject));
        self.types.push(inspector.type_of(subject));

        subject.visit_members(&mut |member| {
            let role = inspector.classify(&member);
            if !role.is_classified() {
                return;
            }
            self.types.push(inspector.type_of(member.value));
            if role.descends() {
                tracing::debug!(
                    member = member.name,
                    type_name = %member.value.descriptor(),
                    depth = self.guard.depth(),
                    "descending into member"
                );
                self.nested(member.value, member.name);
            }
        });

        self.guard.leave();
    }
}
