//! Format patterns and character predicates
//!
//! Pre-compiled regexes and small string predicates shared by the field
//! validators. Patterns are compiled once per process.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Pre-compiled Regex Patterns
// ============================================================================

/// Loose `local@domain.tld` shape
static EMAIL_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Runs of letters, marks, apostrophes and hyphens separated by a single
/// space or hyphen
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M}'-]+(?:[ -][\p{L}\p{M}'-]+)*$").unwrap());

/// Any character a name may never contain
static NAME_INVALID_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^ \p{L}\p{M}'-]").unwrap());

static CONSECUTIVE_WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

static CONSECUTIVE_PUNCTUATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['-]{2,}").unwrap());

/// Only hyphens, apostrophes and spaces
static PUNCTUATION_ONLY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-' ]+$").unwrap());

/// `http(s)://[www.]host.tld[/path]`
static WEBSITE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(/\S*)?$").unwrap()
});

/// Any character outside the RFC 3986 URL alphabet
static URL_INVALID_CHAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\-._~:/?#\[\]@!$&'()*+,;=%]").unwrap());

static GITHUB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9-]+(/[A-Za-z0-9._-]+)?/?$").unwrap()
});

static LINKEDIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/(in|company)/[A-Za-z0-9_%-]+/?(\?.*)?$").unwrap()
});

static TLD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{2,}$").unwrap());

/// Characters that satisfy the password "special character" rule
pub const PASSWORD_SPECIALS: &str = r#"!@#$%^&*()-_=+[]{};:'",.<>/?\|`~"#;

// ============================================================================
// Predicates
// ============================================================================

/// Empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Contains an ASCII digit
pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

/// Contains any Unicode whitespace
pub fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Not made only of hyphens, apostrophes and spaces
pub fn has_letters(value: &str) -> bool {
    !PUNCTUATION_ONLY_REGEX.is_match(value)
}

pub fn is_email_shape(value: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(value)
}

/// Top-level domain of two or more ASCII letters
pub fn is_valid_tld(tld: &str) -> bool {
    TLD_REGEX.is_match(tld)
}

/// Name-shaped, with no doubled apostrophes or hyphens
pub fn is_name(value: &str) -> bool {
    NAME_REGEX.is_match(value) && !has_consecutive_punctuation(value)
}

pub fn has_invalid_name_char(value: &str) -> bool {
    NAME_INVALID_CHAR_REGEX.is_match(value)
}

pub fn has_consecutive_whitespace(value: &str) -> bool {
    CONSECUTIVE_WHITESPACE_REGEX.is_match(value)
}

pub fn has_consecutive_punctuation(value: &str) -> bool {
    CONSECUTIVE_PUNCTUATION_REGEX.is_match(value)
}

pub fn starts_with_punctuation(value: &str) -> bool {
    value.starts_with(['\'', '-'])
}

pub fn ends_with_punctuation(value: &str) -> bool {
    value.ends_with(['\'', '-'])
}

/// Starts with `http://` or `https://`
pub fn has_http_scheme(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

pub fn is_website(value: &str) -> bool {
    WEBSITE_REGEX.is_match(value)
}

pub fn has_invalid_url_char(value: &str) -> bool {
    URL_INVALID_CHAR_REGEX.is_match(value)
}

pub fn is_github_link(value: &str) -> bool {
    GITHUB_REGEX.is_match(value)
}

pub fn is_linkedin_link(value: &str) -> bool {
    LINKEDIN_REGEX.is_match(value)
}
