//! Test error types.

/// Result type alias for harness checks.
pub type Result<T> = std::result::Result<T, TestError>;

/// Testing errors.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    /// A checked property does not hold for the subject.
    #[error("property '{property}' violated: {detail}")]
    Property {
        /// Short name of the property.
        property: &'static str,
        /// What was observed.
        detail: String,
    },

    /// The harness could not be configured.
    #[error("harness error: {0}")]
    Harness(#[from] logscope::InspectError),
}

impl TestError {
    /// Creates a property violation.
    #[must_use]
    pub fn property(property: &'static str, detail: impl Into<String>) -> Self {
        Self::Property {
            property,
            detail: detail.into(),
        }
    }

    /// Returns the violated property, if this is a property violation.
    #[must_use]
    pub const fn violated(&self) -> Option<&'static str> {
        match self {
            Self::Property { property, .. } => Some(property),
            Self::Harness(_) => None,
        }
    }
}
