//! Account identity validators: email, person names and passwords

use crate::chain::RuleChain;
use crate::config::{limits, PasswordPolicy};
use crate::errors::FieldResult;
use crate::formats::{
    ends_with_punctuation, has_consecutive_punctuation, has_consecutive_whitespace,
    has_invalid_name_char, has_whitespace, is_email_shape, is_name, is_valid_tld,
    starts_with_punctuation, PASSWORD_SPECIALS,
};

// ============================================================================
// Email
// ============================================================================

/// Validate an email address
///
/// When the overall `local@domain.tld` shape is wrong the message explains
/// which part is missing rather than reporting a generic format error.
///
/// # Example
/// ```
/// use internly_validation::identity::validate_email;
///
/// assert_eq!(validate_email("a@b.co"), None);
/// assert_eq!(
///     validate_email("ab").as_deref(),
///     Some("Email must contain the \"@\" symbol.")
/// );
/// ```
pub fn validate_email(email: &str) -> FieldResult {
    RuleChain::trimmed(email)
        .required("Email")
        .diagnose(diagnose_email_shape)
        .ensure(
            |v| email_domain(v).chars().count() >= limits::EMAIL_DOMAIN_MIN,
            "Email domain is too short.",
        )
        .ensure(
            |v| is_valid_tld(email_domain(v).rsplit('.').next().unwrap_or_default()),
            "Email top-level domain (TLD) looks invalid.",
        )
        .finish()
}

fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or_default()
}

fn diagnose_email_shape(email: &str) -> FieldResult {
    if is_email_shape(email) {
        return None;
    }

    let message = if !email.contains('@') {
        "Email must contain the \"@\" symbol."
    } else {
        let mut parts = email.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();

        if local.is_empty() {
            "Email is missing the local part before '@'."
        } else if domain.is_empty() {
            "Email is missing the domain after '@'."
        } else if !domain.contains('.') {
            "Email domain must contain a dot (e.g. example.com)."
        } else if has_whitespace(email) {
            "Email cannot contain spaces."
        } else {
            "Email format is invalid."
        }
    };
    Some(message.to_string())
}

// ============================================================================
// Person Names
// ============================================================================

/// Validate a first name
pub fn validate_first_name(firstname: &str) -> FieldResult {
    validate_person_name(firstname, "First name")
}

/// Validate a last name
pub fn validate_last_name(lastname: &str) -> FieldResult {
    validate_person_name(lastname, "Last name")
}

fn validate_person_name(value: &str, label: &str) -> FieldResult {
    RuleChain::trimmed(value)
        .required(label)
        .min_chars(label, limits::NAME_MIN)
        .max_chars(label, limits::NAME_MAX)
        .no_digits(label)
        .diagnose(|v| diagnose_person_name(v, label))
        .has_letters(label)
        .diagnose(|v| {
            let shouting = v.to_uppercase() == v && v.chars().count() > 1;
            shouting.then(|| format!("{label} appears to be all uppercase!"))
        })
        .finish()
}

fn diagnose_person_name(name: &str, label: &str) -> FieldResult {
    if is_name(name) {
        return None;
    }

    let problem = if has_consecutive_whitespace(name) {
        "cannot contain consecutive spaces!"
    } else if has_consecutive_punctuation(name) {
        "cannot contain consecutive apostrophes or hyphens!"
    } else if starts_with_punctuation(name) {
        "cannot start with a hyphen or apostrophe!"
    } else if ends_with_punctuation(name) {
        "cannot end with a hyphen or apostrophe!"
    } else if has_invalid_name_char(name) {
        "contains invalid characters (only letters, spaces, hyphens and apostrophes are allowed)!"
    } else {
        "format is invalid!"
    };
    Some(format!("{label} {problem}"))
}

// ============================================================================
// Passwords
// ============================================================================

/// Validate a password against the default [`PasswordPolicy`]
///
/// # Example
/// ```
/// use internly_validation::identity::validate_password;
///
/// assert_eq!(validate_password("Abcdef1!"), None);
/// assert!(validate_password("abcdefgh").is_some());
/// ```
pub fn validate_password(password: &str) -> FieldResult {
    validate_password_with(password, &PasswordPolicy::default())
}

/// Validate a password against `policy`
///
/// Unlike other fields the password is checked untrimmed, so surrounding
/// spaces count towards the length and trip the whitespace rule.
pub fn validate_password_with(password: &str, policy: &PasswordPolicy) -> FieldResult {
    RuleChain::new(password)
        .required("Password")
        .diagnose(|v| {
            (v.chars().count() < policy.min_length).then(|| {
                format!(
                    "Password must be at least {} characters.",
                    policy.min_length
                )
            })
        })
        .ensure(
            |v| !policy.require_upper || v.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter (A–Z).",
        )
        .ensure(
            |v| !policy.require_lower || v.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter (a–z).",
        )
        .ensure(
            |v| !policy.require_digit || v.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit (0–9).",
        )
        .ensure(
            |v| !policy.require_special || v.chars().any(|c| PASSWORD_SPECIALS.contains(c)),
            "Password must contain at least one special character (e.g. !@#$%).",
        )
        .ensure(|v| !has_whitespace(v), "Password cannot contain spaces.")
        .ensure(
            |v| !policy.disallow_common || !is_common_password(v, policy.blocklist),
            "That password is too common — choose a stronger password.",
        )
        .ensure(
            |v| !has_triple_repeat(v),
            "Avoid using the same character three times in a row.",
        )
        .finish()
}

/// Exact, case-insensitive blocklist lookup
fn is_common_password(password: &str, blocklist: &[&str]) -> bool {
    let lowered = password.to_lowercase();
    blocklist.iter().any(|common| *common == lowered)
}

/// Same ASCII letter or digit three times in a row
fn has_triple_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0].is_ascii_alphanumeric() && w[0] == w[1] && w[1] == w[2])
}

/// Validate that the confirmation matches the password exactly
pub fn validate_confirm_password(password: &str, confirmpassword: &str) -> FieldResult {
    (password != confirmpassword).then(|| "Passwords must be the same!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // Email
    // ------------------------------------------------------------------------

    #[test]
    fn test_email_valid() {
        assert_eq!(validate_email("a@b.co"), None);
        assert_eq!(validate_email("  jane.doe+jobs@mail.example.org "), None);
    }

    #[test]
    fn test_email_required() {
        assert_eq!(validate_email("").as_deref(), Some("Email is required."));
        assert_eq!(validate_email("   ").as_deref(), Some("Email is required."));
    }

    #[test]
    fn test_email_shape_diagnostics() {
        assert_eq!(
            validate_email("ab").as_deref(),
            Some("Email must contain the \"@\" symbol.")
        );
        assert_eq!(
            validate_email("@b.co").as_deref(),
            Some("Email is missing the local part before '@'.")
        );
        assert_eq!(
            validate_email("a@").as_deref(),
            Some("Email is missing the domain after '@'.")
        );
        assert_eq!(
            validate_email("a@b").as_deref(),
            Some("Email domain must contain a dot (e.g. example.com).")
        );
        assert_eq!(
            validate_email("a b@c.de").as_deref(),
            Some("Email cannot contain spaces.")
        );
        assert_eq!(
            validate_email("a@b.co@").as_deref(),
            Some("Email format is invalid.")
        );
    }

    #[test]
    fn test_email_tld() {
        assert_eq!(
            validate_email("a@b.c1").as_deref(),
            Some("Email top-level domain (TLD) looks invalid.")
        );
        assert_eq!(
            validate_email("a@b.c").as_deref(),
            Some("Email top-level domain (TLD) looks invalid.")
        );
    }

    // ------------------------------------------------------------------------
    // Names
    // ------------------------------------------------------------------------

    #[test]
    fn test_name_valid() {
        assert_eq!(validate_first_name("Jean-Pierre O'Connor"), None);
        assert_eq!(validate_last_name("Kamara"), None);
        assert_eq!(validate_first_name("Zoë"), None);
    }

    #[test]
    fn test_name_length() {
        assert_eq!(
            validate_first_name("J").as_deref(),
            Some("First name is too short (minimum 2 characters)!")
        );
        let long = "a".repeat(51);
        assert_eq!(
            validate_last_name(&long).as_deref(),
            Some("Last name is too long (maximum 50 characters)!")
        );
    }

    #[test]
    fn test_name_digits() {
        assert_eq!(
            validate_first_name("John123").as_deref(),
            Some("First name cannot contain numbers!")
        );
    }

    #[test]
    fn test_name_pattern_diagnostics() {
        assert_eq!(
            validate_first_name("john--paul").as_deref(),
            Some("First name cannot contain consecutive apostrophes or hyphens!")
        );
        assert_eq!(
            validate_first_name("Mary  Ann").as_deref(),
            Some("First name cannot contain consecutive spaces!")
        );
        assert_eq!(
            validate_last_name("-J.R.").as_deref(),
            Some("Last name cannot start with a hyphen or apostrophe!")
        );
        assert_eq!(
            validate_last_name("J.R.-").as_deref(),
            Some("Last name cannot end with a hyphen or apostrophe!")
        );
        assert_eq!(
            validate_first_name("J.R.").as_deref(),
            Some(
                "First name contains invalid characters \
                 (only letters, spaces, hyphens and apostrophes are allowed)!"
            )
        );
    }

    #[test]
    fn test_name_loose_separators() {
        assert_eq!(validate_first_name("Jean -Pierre"), None);
        assert_eq!(validate_first_name("Anne- Marie"), None);
        assert_eq!(validate_last_name("O'Neil-"), None);
    }

    #[test]
    fn test_name_needs_letters() {
        assert_eq!(
            validate_first_name("- -").as_deref(),
            Some("First name must contain letters!")
        );
        assert_eq!(
            validate_last_name("' '").as_deref(),
            Some("Last name must contain letters!")
        );
    }

    #[test]
    fn test_name_all_uppercase() {
        assert_eq!(
            validate_first_name("JOHN").as_deref(),
            Some("First name appears to be all uppercase!")
        );
        assert_eq!(validate_first_name("John"), None);
    }

    // ------------------------------------------------------------------------
    // Passwords
    // ------------------------------------------------------------------------

    #[test]
    fn test_password_valid() {
        assert_eq!(validate_password("Abcdef1!"), None);
        // Not an exact blocklist entry
        assert_eq!(validate_password("Password1!"), None);
    }

    #[test]
    fn test_password_first_failure_order() {
        assert_eq!(
            validate_password("").as_deref(),
            Some("Password is required.")
        );
        assert_eq!(
            validate_password("Ab1!").as_deref(),
            Some("Password must be at least 8 characters.")
        );
        assert_eq!(
            validate_password("abcdefgh").as_deref(),
            Some("Password must contain at least one uppercase letter (A–Z).")
        );
        assert_eq!(
            validate_password("ABCDEFGH").as_deref(),
            Some("Password must contain at least one lowercase letter (a–z).")
        );
        assert_eq!(
            validate_password("Abcdefgh").as_deref(),
            Some("Password must contain at least one digit (0–9).")
        );
        assert_eq!(
            validate_password("Abcdefg1").as_deref(),
            Some("Password must contain at least one special character (e.g. !@#$%).")
        );
        assert_eq!(
            validate_password("Abc def1!").as_deref(),
            Some("Password cannot contain spaces.")
        );
        assert_eq!(
            validate_password("Abcccd1!").as_deref(),
            Some("Avoid using the same character three times in a row.")
        );
    }

    #[test]
    fn test_password_repeated_specials_allowed() {
        assert_eq!(validate_password("Abcd1!!!"), None);
    }

    #[test]
    fn test_password_blocklist_is_literal() {
        let policy = PasswordPolicy {
            require_upper: false,
            require_digit: false,
            require_special: false,
            ..Default::default()
        };
        assert_eq!(
            validate_password_with("PassWord", &policy).as_deref(),
            Some("That password is too common — choose a stronger password.")
        );
        assert_eq!(validate_password_with("passwords", &policy), None);
    }

    #[test]
    fn test_password_policy_min_length() {
        let policy = PasswordPolicy {
            min_length: 12,
            ..Default::default()
        };
        assert_eq!(
            validate_password_with("Abcdef1!", &policy).as_deref(),
            Some("Password must be at least 12 characters.")
        );
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(validate_confirm_password("Abcdef1!", "Abcdef1!"), None);
        assert_eq!(
            validate_confirm_password("Abcdef1!", "Abcdef1?").as_deref(),
            Some("Passwords must be the same!")
        );
        // Compared literally, not trimmed
        assert!(validate_confirm_password("Abcdef1!", "Abcdef1! ").is_some());
    }
}
