//! Emission of inspections as structured log events.
//!
//! One `info` event per inspected object, carrying the two index fields and
//! the JSON body. The library installs no subscriber; where the events end
//! up is the application's choice.

use crate::engine::Inspection;

/// Separator used to flatten an index into one log field.
pub const INDEX_SEPARATOR: &str = ",";

/// Emits `inspection` as one `info` event labelled `subject`.
pub fn log_inspection(subject: &str, inspection: &Inspection) {
    let triple = &inspection.triple;
    tracing::info!(
        target: "logscope",
        subject,
        names = %join_index(&triple.names),
        types = %join_index(&triple.types),
        json = %triple.json,
        diagnostics = inspection.diagnostics.len(),
        "inspected"
    );
}

/// Flattens an index into a single field value.
#[must_use]
pub fn join_index(index: &[String]) -> String {
    index.join(INDEX_SEPARATOR)
}
