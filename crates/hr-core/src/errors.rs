//! Cross-cutting error types for HR Lens.
//!
//! Store and report errors (`DatabaseError`, `ReportError`) live in their
//! own crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any HR Lens crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A filter or input value failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A name did not match any known variant of a closed set.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
