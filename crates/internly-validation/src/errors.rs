//! Error types
//!
//! Field validation failures are ordinary values (`Option<String>`), not
//! errors. This module holds the error enum for the few abnormal conditions
//! the crate can hit, and the [`FieldErrors`] trait shared by every rule-set
//! result record.

use thiserror::Error;

// ============================================================================
// Field Result
// ============================================================================

/// Outcome of a single field validator
///
/// `None` means the value is valid, `Some(message)` carries the first
/// violated constraint.
pub type FieldResult = Option<String>;

// ============================================================================
// Form Error
// ============================================================================

/// Result type alias for fallible crate operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Abnormal conditions raised by the crate
///
/// These signal caller bugs or undecodable input, never a user typing an
/// invalid value into a form.
#[derive(Error, Debug)]
pub enum FormError {
    /// Number-to-words input outside `1..=1_000_000`
    #[error("Number must be between 1 and 1,000,000 (got {0})")]
    NumberOutOfRange(u64),

    /// A submission document could not be decoded
    #[error("Failed to decode form submission: {0}")]
    Decode(#[from] serde_json::Error),
}

// ============================================================================
// Field Errors
// ============================================================================

/// Common view over the per-form error records
///
/// Every record keeps one entry per field, valid or not, so callers can
/// clear stale messages as well as show new ones.
pub trait FieldErrors {
    /// `(field name, result)` pairs in the form's field order
    fn entries(&self) -> Vec<(&'static str, Option<&str>)>;

    /// True when no field failed
    fn is_valid(&self) -> bool {
        self.entries().iter().all(|(_, message)| message.is_none())
    }

    /// Number of failing fields
    fn error_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, message)| message.is_some())
            .count()
    }

    /// First failing field and its message, in field order
    fn first_error(&self) -> Option<(&'static str, &str)> {
        self.entries()
            .into_iter()
            .find_map(|(field, message)| message.map(|m| (field, m)))
    }
}
