// Iron Lotus: Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # logscope-core
//!
//! Structural introspection engine behind logscope.
//!
//! Given any value implementing [`Subject`], the engine produces a
//! [`ResultTriple`]:
//!
//! - `names`: member names across the value and its nested records
//! - `types`: formatted runtime types encountered along the way
//! - `json`: JSON body of the root's exposed data
//!
//! so that application code can emit one structured log event per object.
//!
//! This crate provides:
//!
//! - [`Subject`] for runtime member enumeration (derived with
//!   `#[derive(Inspect)]` from `logscope-derive`)
//! - [`Describe`] for types that supply their own representation
//! - [`Inspector`] for single-node inspection
//! - [`Engine`] / [`inspect`] for whole-graph traversal
//! - [`EngineConfig`] for limits and formatting
//!
//! ## Iron Lotus Framework
//!
//! - **Jidoka**: Explicit error handling, no panics; inspection never fails,
//!   it reports [`Diagnostic`]s instead
//! - **Poka-Yoke**: Override presence is a type-level property
//! - **Muda**: Nested JSON is never computed only to be thrown away
//!
//! ## Example
//!
//! ```rust
//! use logscope_core::{Member, Shape, Subject, TypeDescriptor, inspect};
//!
//! struct Car {
//!     pub make: String,
//!     vin: String,
//! }
//!
//! impl Subject for Car {
//!     fn descriptor(&self) -> TypeDescriptor {
//!         TypeDescriptor::named("Car")
//!     }
//!
//!     fn shape(&self) -> Shape {
//!         Shape::Record
//!     }
//!
//!     fn visit_members(&self, visitor: &mut dyn FnMut(Member<'_>)) {
//!         visitor(Member::exposed("make", &self.make));
//!         visitor(Member::hidden("vin", &self.vin));
//!     }
//! }
//!
//! let car = Car { make: "Buick".into(), vin: "1G4".into() };
//! let inspection = inspect(&car);
//! assert_eq!(inspection.names(), &["make", "vin", "Car"]);
//! assert_eq!(inspection.json(), r#"{"make":"Buick"}"#);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod adapters;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod engine;
pub mod error;
mod guard;
mod impls;
pub mod inspector;
pub mod subject;
pub mod triple;

pub use adapters::{Displayed, Serialized, is_zero_value};
pub use config::EngineConfig;
pub use descriptor::{INDIRECTION_MARKER, Member, MemberOptions, Shape, TypeDescriptor, Visibility};
pub use emit::log_inspection;
pub use engine::{Engine, Inspection, inspect};
pub use error::{Diagnostic, DiagnosticKind, InspectError, ProjectionError, Result};
pub use inspector::{Encoded, Inspector, MemberRole, NodeReport};
pub use subject::{Describe, Subject, short_type_name};
pub use triple::{JsonBody, ResultTriple};
