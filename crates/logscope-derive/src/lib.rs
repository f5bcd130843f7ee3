//! Procedural macros for logscope
//!
//! This crate provides one macro:
//! - `#[derive(Inspect)]` - Generate the `Subject` descriptor table for a struct
//!
//! Field visibility is read from the declaration: `pub` fields are exposed,
//! every other field is hidden (listed in the names index, never projected).

use proc_macro::TokenStream;

mod attrs;
mod inspect;

/// Derive macro generating `logscope::Subject` for a struct.
///
/// Every field type must implement `Subject`, unless the field is annotated
/// with `serialize` or `display`.
///
/// # Attributes
///
/// Container:
/// - `#[inspect(describe)]` - The type implements `Describe`; its override
///   replaces generic traversal for the value and everything beneath it
/// - `#[inspect(name = "...")]` - Type name reported in the indices
/// - `#[inspect(crate = "...")]` - Path to the logscope crate (default `::logscope`)
///
/// Field:
/// - `#[inspect(skip)]` - Omit from the JSON body (still listed in names)
/// - `#[inspect(rename = "...")]` - JSON key to use instead of the field name
/// - `#[inspect(omit_empty)]` - Omit from the JSON body when zero
/// - `#[inspect(omit_nested)]` - Do not descend into the field for the indices
/// - `#[inspect(serialize)]` - Treat as a leaf projected through `serde::Serialize`
/// - `#[inspect(display)]` - Treat as a leaf projected as its `Display` string
///
/// # Example
///
/// ```ignore
/// #[derive(Inspect)]
/// pub struct Name {
///     #[inspect(rename = "FullName")]
///     pub full_name: String,
///     first: String,
///     last: String,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect_impl(input)
}
