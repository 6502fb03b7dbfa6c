//! Ordered rule chains
//!
//! Every field validator in this crate follows the same shape: run a fixed
//! sequence of checks and report the first one that fails. [`RuleChain`]
//! captures that control flow once, so each validator reads as a plain list
//! of `(check, message)` steps.
//!
//! # Example
//!
//! ```rust
//! use internly_validation::chain::RuleChain;
//!
//! let result = RuleChain::trimmed("  ab ")
//!     .required("Nickname")
//!     .min_chars("Nickname", 3)
//!     .finish();
//! assert_eq!(
//!     result.as_deref(),
//!     Some("Nickname is too short (minimum 3 characters)!")
//! );
//! ```

use crate::errors::FieldResult;
use crate::formats::{has_digit, has_letters, is_blank};

// ============================================================================
// Chain State
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// Still evaluating checks
    Open,
    /// An optional field was left empty; remaining checks are skipped
    Skipped,
    /// A check failed; remaining checks are skipped
    Failed(String),
}

// ============================================================================
// Rule Chain
// ============================================================================

/// First-failure-wins sequence of checks over one field value
#[derive(Debug, Clone)]
#[must_use = "a rule chain does nothing until `finish` is called"]
pub struct RuleChain<'a> {
    value: &'a str,
    state: State,
}

impl<'a> RuleChain<'a> {
    /// Start a chain over the raw value
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            state: State::Open,
        }
    }

    /// Start a chain over the value with surrounding whitespace removed
    pub fn trimmed(value: &'a str) -> Self {
        Self::new(value.trim())
    }

    /// Fail with "`label` is required." when the value is blank
    pub fn required(self, label: &str) -> Self {
        self.ensure_lazy(|v| !is_blank(v), || format!("{label} is required."))
    }

    /// Skip every later check when the value is blank
    pub fn optional(mut self) -> Self {
        if self.state == State::Open && is_blank(self.value) {
            self.state = State::Skipped;
        }
        self
    }

    /// Fail with `message` unless `passes` holds for the value
    pub fn ensure(self, passes: impl FnOnce(&str) -> bool, message: impl Into<String>) -> Self {
        self.ensure_lazy(passes, || message.into())
    }

    /// Run a diagnostic step that picks its own message
    ///
    /// Used where one failed pattern fans out into several more specific
    /// explanations.
    pub fn diagnose(mut self, step: impl FnOnce(&str) -> FieldResult) -> Self {
        if self.state == State::Open {
            if let Some(message) = step(self.value) {
                self.state = State::Failed(message);
            }
        }
        self
    }

    /// Fail unless the value has at least `min` characters
    pub fn min_chars(self, label: &str, min: usize) -> Self {
        self.ensure_lazy(
            |v| v.chars().count() >= min,
            || format!("{label} is too short (minimum {min} characters)!"),
        )
    }

    /// Fail unless the value has at most `max` characters
    pub fn max_chars(self, label: &str, max: usize) -> Self {
        self.ensure_lazy(
            |v| v.chars().count() <= max,
            || format!("{label} is too long (maximum {max} characters)!"),
        )
    }

    /// Fail if the value contains an ASCII digit
    pub fn no_digits(self, label: &str) -> Self {
        self.ensure_lazy(|v| !has_digit(v), || format!("{label} cannot contain numbers!"))
    }

    /// Fail if the value is made only of hyphens, apostrophes and spaces
    pub fn has_letters(self, label: &str) -> Self {
        self.ensure_lazy(has_letters, || format!("{label} must contain letters!"))
    }

    /// Close the chain, returning the first failure if any
    pub fn finish(self) -> FieldResult {
        match self.state {
            State::Failed(message) => Some(message),
            State::Open | State::Skipped => None,
        }
    }

    fn ensure_lazy(
        mut self,
        passes: impl FnOnce(&str) -> bool,
        message: impl FnOnce() -> String,
    ) -> Self {
        if self.state == State::Open && !passes(self.value) {
            self.state = State::Failed(message());
        }
        self
    }
}
