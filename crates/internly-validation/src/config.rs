//! Configuration for validation behavior
//!
//! Static tables (length limits, the common-password blocklist) live here,
//! together with the password policy the composers are built with.

// ============================================================================
// Length Limits
// ============================================================================

/// Character limits per field, counted on trimmed values
pub mod limits {
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 50;
    pub const COMPANY_NAME_MAX: usize = 100;
    pub const UNIVERSITY_MAX: usize = 100;
    pub const COURSE_MAX: usize = 50;
    pub const INDUSTRY_MAX: usize = 50;
    pub const SPECIALTY_MAX: usize = 50;
    pub const ADDRESS_MAX: usize = 50;
    pub const ABOUT_MIN: usize = 20;
    pub const ABOUT_MAX: usize = 440;
    pub const TITLE_MAX: usize = 50;
    pub const LONG_TEXT_MIN: usize = 50;
    pub const LONG_TEXT_MAX: usize = 440;
    pub const DURATION_MIN: usize = 5;
    pub const DURATION_MAX: usize = 50;
    pub const WEBSITE_MAX: usize = 2048;
    pub const PROFILE_LINK_MAX: usize = 255;
    pub const VENUE_MIN: usize = 5;
    pub const VENUE_MAX: usize = 100;
    pub const EMAIL_DOMAIN_MIN: usize = 3;
}

/// Passwords rejected outright (compared case-insensitively)
pub const COMMON_PASSWORDS: &[&str] = &["password", "123456", "12345678", "qwerty", "letmein"];

// ============================================================================
// Password Policy
// ============================================================================

/// Rules applied by the password validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters (untrimmed)
    pub min_length: usize,
    /// Require an ASCII uppercase letter
    pub require_upper: bool,
    /// Require an ASCII lowercase letter
    pub require_lower: bool,
    /// Require an ASCII digit
    pub require_digit: bool,
    /// Require one of [`crate::formats::PASSWORD_SPECIALS`]
    pub require_special: bool,
    /// Reject entries of `blocklist`
    pub disallow_common: bool,
    /// Lowercase passwords rejected when `disallow_common` is set
    pub blocklist: &'static [&'static str],
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_upper: true,
            require_lower: true,
            require_digit: true,
            require_special: true,
            disallow_common: true,
            blocklist: COMMON_PASSWORDS,
        }
    }
}

// ============================================================================
// Validation Config
// ============================================================================

/// Configuration options for a [`crate::FormValidator`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Password rules for every form carrying a password
    pub password: PasswordPolicy,
}

impl ValidationConfig {
    /// Create config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the password policy
    pub fn with_password_policy(mut self, policy: PasswordPolicy) -> Self {
        self.password = policy;
        self
    }
}
