//! logscope: Structural Introspection and Logging Encoder
//!
//! Part of the PAIML Sovereign AI Stack.
//!
//! Derive [`Inspect`] on a struct and every value of it can be turned into a
//! names index, a types index, and a JSON body, ready to be emitted as one
//! structured log event.
//!
//! # Quick Start
//!
//! ```rust
//! use logscope::prelude::*;
//!
//! #[derive(Inspect)]
//! pub struct Name {
//!     #[inspect(rename = "FullName")]
//!     pub full_name: String,
//!     first: String,
//!     last: String,
//! }
//!
//! let name = Name {
//!     full_name: "Jim Castillo".into(),
//!     first: "Jim".into(),
//!     last: "Castillo".into(),
//! };
//!
//! let inspection = inspect(&name);
//! assert_eq!(inspection.names(), &["full_name", "first", "last", "Name"]);
//! assert_eq!(inspection.json(), r#"{"FullName":"Jim Castillo"}"#);
//! ```

pub use logscope_core::*;
pub use logscope_derive::Inspect;

/// Prelude module for common imports.
pub mod prelude {
    pub use logscope_core::{
        Describe, Diagnostic, DiagnosticKind, Engine, EngineConfig, Inspection, JsonBody,
        ResultTriple, Subject, inspect,
    };
    pub use logscope_derive::Inspect;
}
