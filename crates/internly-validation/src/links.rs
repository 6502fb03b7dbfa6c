//! Social link validators
//!
//! All three links are optional: a blank value is always valid.

use crate::chain::RuleChain;
use crate::config::limits;
use crate::errors::FieldResult;
use crate::formats::{
    has_http_scheme, has_invalid_url_char, has_whitespace, is_github_link, is_linkedin_link,
    is_website,
};

/// Validate a personal or company website
pub fn validate_website(url: &str) -> FieldResult {
    RuleChain::trimmed(url)
        .optional()
        .max_chars("Web address", limits::WEBSITE_MAX)
        .ensure(|v| !has_whitespace(v), "Web address cannot contain spaces!")
        .diagnose(|v| {
            if is_website(v) {
                return None;
            }
            let message = if !has_http_scheme(v) {
                "Web address must start with http:// or https://"
            } else if has_invalid_url_char(v) {
                "Web address contains invalid characters!"
            } else {
                "Web address format is invalid!"
            };
            Some(message.to_string())
        })
        .finish()
}

/// Validate a GitHub profile or repository link
///
/// # Example
/// ```
/// use internly_validation::links::validate_github;
///
/// assert_eq!(validate_github("https://github.com/octocat"), None);
/// assert_eq!(
///     validate_github("https://gitlab.com/octocat").as_deref(),
///     Some("GitHub link must be from github.com")
/// );
/// ```
pub fn validate_github(url: &str) -> FieldResult {
    validate_profile_link(url, "GitHub link", "github.com", is_github_link)
}

/// Validate a LinkedIn personal (`/in/`) or company (`/company/`) page link
pub fn validate_linkedin(url: &str) -> FieldResult {
    validate_profile_link(url, "LinkedIn link", "linkedin.com", is_linkedin_link)
}

fn validate_profile_link(
    url: &str,
    label: &str,
    host: &str,
    matches_site: fn(&str) -> bool,
) -> FieldResult {
    RuleChain::trimmed(url)
        .optional()
        .max_chars(label, limits::PROFILE_LINK_MAX)
        .ensure(
            |v| !has_whitespace(v),
            format!("{label} cannot contain spaces!"),
        )
        .ensure(
            has_http_scheme,
            format!("{label} must start with http:// or https://"),
        )
        .diagnose(|v| {
            if matches_site(v) {
                None
            } else if !v.contains(host) {
                Some(format!("{label} must be from {host}"))
            } else {
                Some(format!("{label} format is invalid!"))
            }
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_optional() {
        assert_eq!(validate_website(""), None);
        assert_eq!(validate_github("  "), None);
        assert_eq!(validate_linkedin("\t"), None);
    }

    #[test]
    fn test_website() {
        assert_eq!(validate_website("https://internly.example.com"), None);
        assert_eq!(validate_website(" http://www.acme.co.uk/careers "), None);
        assert_eq!(
            validate_website("www.acme.com").as_deref(),
            Some("Web address must start with http:// or https://")
        );
        assert_eq!(
            validate_website("https://acme.com/a b").as_deref(),
            Some("Web address cannot contain spaces!")
        );
        assert_eq!(
            validate_website("https://ac^me.com").as_deref(),
            Some("Web address contains invalid characters!")
        );
        assert_eq!(
            validate_website("https://acme").as_deref(),
            Some("Web address format is invalid!")
        );
        let long = format!("https://acme.com/{}", "a".repeat(2048));
        assert_eq!(
            validate_website(&long).as_deref(),
            Some("Web address is too long (maximum 2048 characters)!")
        );
    }

    #[test]
    fn test_github() {
        assert_eq!(validate_github("https://github.com/octocat"), None);
        assert_eq!(validate_github("https://www.github.com/octocat/Hello-World/"), None);
        assert_eq!(
            validate_github("github.com/octocat").as_deref(),
            Some("GitHub link must start with http:// or https://")
        );
        assert_eq!(
            validate_github("https://gitlab.com/octocat").as_deref(),
            Some("GitHub link must be from github.com")
        );
        assert_eq!(
            validate_github("https://github.com/octocat/repo/tree/main").as_deref(),
            Some("GitHub link format is invalid!")
        );
    }

    #[test]
    fn test_linkedin() {
        assert_eq!(validate_linkedin("https://www.linkedin.com/in/jane-doe"), None);
        assert_eq!(
            validate_linkedin("https://linkedin.com/company/internly/?viewAsMember=true"),
            None
        );
        assert_eq!(
            validate_linkedin("https://example.com/in/jane").as_deref(),
            Some("LinkedIn link must be from linkedin.com")
        );
        assert_eq!(
            validate_linkedin("https://linkedin.com/feed").as_deref(),
            Some("LinkedIn link format is invalid!")
        );
        assert_eq!(
            validate_linkedin("https://linkedin.com/in/ jane").as_deref(),
            Some("LinkedIn link cannot contain spaces!")
        );
    }
}
