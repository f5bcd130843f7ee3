// Iron Lotus: Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # logscope-test
//!
//! Testing infrastructure for logscope.
//!
//! This crate provides:
//! - **Fixtures**: a family of records with hidden members, nesting, and a
//!   self-describing type
//! - **Property harness**: checks every inspection must satisfy
//! - **Falsification tests**: Popperian tests for the engine's claims
//!
//! ## Iron Lotus Framework
//!
//! - **Built-in Quality** (品質の作り込み): Quality cannot be inspected in
//! - **Popperian Falsification**: Tests designed to refute claims
//!
//! ## Example
//!
//! ```rust
//! use logscope_test::{InspectionHarness, fixtures};
//!
//! let harness = InspectionHarness::new();
//! let inspection = harness.verify(&fixtures::family()).unwrap();
//! assert_eq!(inspection.names().last().map(String::as_str), Some("Car"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod fixtures;
pub mod harness;

pub use error::{Result, TestError};
pub use harness::InspectionHarness;
