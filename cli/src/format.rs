//! Output formatting for the CLI.

use ward_constraint::ValidationResult;
use ward_core::DataKind;

/// One result line: code, message and the constraint that produced it.
pub fn format_result(result: &ValidationResult<'_>) -> String {
    match result.constraint_name() {
        Some(name) => format!("{} ({})", result, name),
        None => result.to_string(),
    }
}

/// Comma-separated kind names.
pub fn format_kinds(kinds: &[DataKind]) -> String {
    kinds
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}
