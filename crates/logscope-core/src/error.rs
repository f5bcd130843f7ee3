//! Error and diagnostic types for logscope-core.
//!
//! Per Iron Lotus Framework: All errors are explicit, no panics allowed.
//! Inspection itself never fails; anything that goes wrong while walking a
//! subject is recorded as a [`Diagnostic`] next to the (possibly partial)
//! result.

use serde::{Deserialize, Serialize};

/// Result type alias for fallible logscope operations (configuration, I/O).
pub type Result<T> = std::result::Result<T, InspectError>;

/// Errors surfaced outside of an inspection call.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl InspectError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Failure to build the JSON projection of a value.
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// serde_json rejected the value.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The value has no JSON representation (e.g. a non-finite float).
    #[error("unsupported value: {0}")]
    Unsupported(String),
}

impl ProjectionError {
    /// Creates an unsupported-value error.
    #[must_use]
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

/// A non-fatal condition reported alongside an inspection result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The JSON body of a node could not be encoded; the body is empty.
    #[error("serialization failure at {type_name}: {message}")]
    SerializationFailure {
        /// Type of the node whose body failed.
        type_name: String,
        /// Encoder message.
        message: String,
    },

    /// Descent reached a node that is already on the current path.
    #[error("cycle detected at {type_name} (path: {path})")]
    CycleDetected {
        /// Type of the repeated node.
        type_name: String,
        /// Member path from the root to the repeated node.
        path: String,
    },

    /// A type offered an override whose output could not be used; the
    /// generic path was taken instead.
    #[error("unsupported override on {type_name}: {reason}")]
    UnsupportedOverride {
        /// Type carrying the override.
        type_name: String,
        /// Why the override output was rejected.
        reason: String,
    },

    /// Descent was cut off by the configured depth limit.
    #[error("depth limit {limit} exceeded at {type_name}")]
    DepthExceeded {
        /// Type of the first node past the limit.
        type_name: String,
        /// Configured limit.
        limit: usize,
    },
}

/// Discriminant of a [`Diagnostic`], convenient for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// See [`Diagnostic::SerializationFailure`].
    SerializationFailure,
    /// See [`Diagnostic::CycleDetected`].
    CycleDetected,
    /// See [`Diagnostic::UnsupportedOverride`].
    UnsupportedOverride,
    /// See [`Diagnostic::DepthExceeded`].
    DepthExceeded,
}

impl Diagnostic {
    /// Creates a serialization failure diagnostic.
    #[must_use]
    pub fn serialization(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SerializationFailure {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates a cycle diagnostic.
    #[must_use]
    pub fn cycle(type_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::CycleDetected {
            type_name: type_name.into(),
            path: path.into(),
        }
    }

    /// Creates an unsupported-override diagnostic.
    #[must_use]
    pub fn unsupported_override(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedOverride {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a depth-limit diagnostic.
    #[must_use]
    pub fn depth(type_name: impl Into<String>, limit: usize) -> Self {
        Self::DepthExceeded {
            type_name: type_name.into(),
            limit,
        }
    }

    /// Returns the diagnostic's kind.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::SerializationFailure { .. } => DiagnosticKind::SerializationFailure,
            Self::CycleDetected { .. } => DiagnosticKind::CycleDetected,
            Self::UnsupportedOverride { .. } => DiagnosticKind::UnsupportedOverride,
            Self::DepthExceeded { .. } => DiagnosticKind::DepthExceeded,
        }
    }

    /// Returns the type name the diagnostic refers to.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::SerializationFailure { type_name, .. }
            | Self::CycleDetected { type_name, .. }
            | Self::UnsupportedOverride { type_name, .. }
            | Self::DepthExceeded { type_name, .. } => type_name,
        }
    }

    /// Returns true if the diagnostic truncated descent (some of the graph
    /// is missing from the indices).
    #[must_use]
    pub const fn is_truncation(&self) -> bool {
        matches!(self, Self::CycleDetected { .. } | Self::DepthExceeded { .. })
    }
}
