//! Property harness.
//!
//! # Toyota Way: Built-in Quality (品質の作り込み)
//! Each check states one property every inspection must satisfy and reports
//! the first observation that contradicts it.

use std::collections::BTreeSet;

use logscope::{Engine, EngineConfig, Inspection, Subject, Visibility};

use crate::error::{Result, TestError};

/// Runs inspections and checks their properties.
#[derive(Debug, Clone, Default)]
pub struct InspectionHarness {
    engine: Engine,
}

impl InspectionHarness {
    /// Creates a harness around the default engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a harness around an engine built from `config`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            engine: Engine::with_config(config)?,
        })
    }

    /// Returns the engine under test.
    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Inspects `subject` and checks every property that applies to it.
    ///
    /// # Errors
    /// Returns the first violated property.
    pub fn verify(&self, subject: &dyn Subject) -> Result<Inspection> {
        let inspection = self.check_idempotent(subject)?;
        if subject.has_override() {
            Self::check_override_verbatim(subject, &inspection)?;
        } else {
            Self::check_name_lower_bound(subject, &inspection)?;
            Self::check_hidden_not_projected(subject, &inspection)?;
        }
        tracing::debug!(
            names = inspection.names().len(),
            types = inspection.types().len(),
            "properties hold"
        );
        Ok(inspection)
    }

    /// Two inspections of an unmodified subject are identical.
    ///
    /// # Errors
    /// Returns a violation if the two runs differ.
    pub fn check_idempotent(&self, subject: &dyn Subject) -> Result<Inspection> {
        let first = self.engine.inspect(subject);
        let second = self.engine.inspect(subject);
        if first != second {
            return Err(TestError::property(
                "idempotence",
                format!("{:?} != {:?}", first.triple, second.triple),
            ));
        }
        Ok(first)
    }

    /// The names index holds at least every declared member plus the
    /// subject's own name.
    ///
    /// # Errors
    /// Returns a violation if the index is too short.
    pub fn check_name_lower_bound(subject: &dyn Subject, inspection: &Inspection) -> Result<()> {
        let mut declared = 0_usize;
        subject.visit_members(&mut |_| declared += 1);
        let minimum = declared + 1;
        if inspection.names().len() < minimum {
            return Err(TestError::property(
                "name lower bound",
                format!("{} names for {minimum} required", inspection.names().len()),
            ));
        }
        Ok(())
    }

    /// Hidden members of the root are named but never become JSON keys.
    ///
    /// # Errors
    /// Returns a violation if a hidden member is missing from the names
    /// index or present in the JSON body.
    pub fn check_hidden_not_projected(subject: &dyn Subject, inspection: &Inspection) -> Result<()> {
        let mut hidden = BTreeSet::new();
        let mut projected = BTreeSet::new();
        subject.visit_members(&mut |member| {
            if member.visibility == Visibility::Hidden {
                hidden.insert(member.name.to_owned());
            } else if member.is_projected() {
                projected.insert(member.json_key().to_owned());
            }
        });

        for name in &hidden {
            if !inspection.names().contains(name) {
                return Err(TestError::property(
                    "hidden members named",
                    format!("'{name}' missing from names index"),
                ));
            }
        }

        let keys: BTreeSet<String> = inspection
            .triple
            .json_value()
            .and_then(|body| body.as_object().map(|object| object.keys().cloned().collect()))
            .unwrap_or_default();
        if let Some(leaked) = hidden
            .iter()
            .find(|name| keys.contains(*name) && !projected.contains(*name))
        {
            return Err(TestError::property(
                "hidden members not projected",
                format!("'{leaked}' appears in {}", inspection.json()),
            ));
        }
        Ok(())
    }

    /// A self-describing subject is represented exactly by its override.
    ///
    /// # Errors
    /// Returns a violation if the engine added to or altered the override.
    pub fn check_override_verbatim(subject: &dyn Subject, inspection: &Inspection) -> Result<()> {
        let Some(expected) = subject.describe_override() else {
            return Err(TestError::property(
                "override verbatim",
                "subject reports an override but supplies none",
            ));
        };
        if inspection.triple != expected {
            return Err(TestError::property(
                "override verbatim",
                format!("{:?} != {expected:?}", inspection.triple),
            ));
        }
        Ok(())
    }
}
