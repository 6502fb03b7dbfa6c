//! Internly Validation
//!
//! Form validation rules for the Internly internship portal.
//!
//! The crate is a rule library of pure field validators plus rule-set
//! composers that run a whole form and return one error record:
//! - **Field validators** (`identity`, `profile`, `links`, `internship`):
//!   `&str -> Option<String>`, where `None` means valid and `Some` holds the
//!   first violated constraint
//! - **Composers** ([`FormValidator`]): evaluate every field of a form and
//!   never short-circuit
//! - **Submissions** ([`FormSubmission`], [`FormReport`]): JSON documents
//!   tagged by form name
//! - **Helpers**: English number words and date-time normalisation
//!
//! # Example
//!
//! ```rust
//! use internly_validation::{FieldErrors, FormValidator, StudentSignUpForm};
//! use internly_validation::identity::validate_first_name;
//!
//! assert_eq!(validate_first_name("Jean-Pierre"), None);
//! assert!(validate_first_name("John123").is_some());
//!
//! let validator = FormValidator::new();
//! let errors = validator.student_sign_up(&StudentSignUpForm {
//!     firstname: "Aminata".into(),
//!     lastname: "Sesay".into(),
//!     email: "aminata@example.com".into(),
//!     password: "Abcdef1!".into(),
//!     confirmpassword: "Abcdef1?".into(),
//! });
//! assert_eq!(errors.first_error(), Some(("confirmpassword", "Passwords must be the same!")));
//! ```

// Public modules
pub mod chain;
pub mod config;
pub mod dates;
pub mod errors;
pub mod formats;
pub mod forms;
pub mod identity;
pub mod internship;
pub mod links;
pub mod profile;
pub mod submission;
pub mod words;

// Re-export commonly used types
pub use chain::RuleChain;
pub use config::{PasswordPolicy, ValidationConfig};
pub use dates::{Clock, FixedClock, SystemClock};
pub use errors::{FieldErrors, FieldResult, FormError, Result};
pub use forms::{
    CompanyCompleteProfileErrors, CompanyCompleteProfileForm, CompanyEditProfileErrors,
    CompanyEditProfileForm, CompanySignUpErrors, CompanySignUpForm, ForgotPasswordForm,
    FormValidator, InternshipErrors, InternshipForm, ResetPasswordErrors, ResetPasswordForm,
    ShortlistErrors, ShortlistForm, SignInErrors, SignInForm, SocialLinksErrors, SocialLinksForm,
    StudentCompleteProfileErrors, StudentCompleteProfileForm, StudentEditProfileErrors,
    StudentEditProfileForm, StudentSignUpErrors, StudentSignUpForm,
};
pub use internship::InterviewMode;
pub use submission::{FormSubmission, FormReport};
pub use words::{applicant_count_phrase, number_to_words, try_number_to_words};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
