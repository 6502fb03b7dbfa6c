//! Profile validators: company, education and location fields

use crate::chain::RuleChain;
use crate::config::limits;
use crate::errors::FieldResult;
use crate::formats::{has_invalid_name_char, has_letters, is_name};

/// Validate a company name
pub fn validate_company_name(companyname: &str) -> FieldResult {
    RuleChain::trimmed(companyname)
        .required("Company name")
        .max_chars("Company name", limits::COMPANY_NAME_MAX)
        .no_digits("Company name")
        .has_letters("Company name")
        .finish()
}

/// Validate the free-text "about" section of a profile
pub fn validate_about(about: &str) -> FieldResult {
    RuleChain::trimmed(about)
        .required("About")
        .ensure(
            |v| v.chars().count() >= limits::ABOUT_MIN,
            format!("Too small (minimum {} characters)!", limits::ABOUT_MIN),
        )
        .ensure(
            |v| v.chars().count() <= limits::ABOUT_MAX,
            format!("Too long (maximum {} characters)!", limits::ABOUT_MAX),
        )
        .finish()
}

pub fn validate_university(university: &str) -> FieldResult {
    validate_named_field(university, "University name", limits::UNIVERSITY_MAX)
}

pub fn validate_course(course: &str) -> FieldResult {
    validate_named_field(course, "Course name", limits::COURSE_MAX)
}

pub fn validate_industry(industry: &str) -> FieldResult {
    validate_named_field(industry, "Industry", limits::INDUSTRY_MAX)
}

pub fn validate_specialty(specialty: &str) -> FieldResult {
    validate_named_field(specialty, "Specialty", limits::SPECIALTY_MAX)
}

/// Validate the study level; any selection is accepted
pub fn validate_level(level: &str) -> FieldResult {
    RuleChain::trimmed(level).required("Level").finish()
}

/// Fields spelled like names, without the person-name extras
/// (minimum length, all-caps rejection)
fn validate_named_field(value: &str, label: &str, max: usize) -> FieldResult {
    RuleChain::trimmed(value)
        .required(label)
        .max_chars(label, max)
        .no_digits(label)
        .diagnose(|v| {
            if is_name(v) {
                None
            } else if has_invalid_name_char(v) {
                Some(format!(
                    "{label} contains invalid characters \
                     (only letters, spaces, hyphens and apostrophes are allowed)!"
                ))
            } else {
                Some(format!("{label} format is invalid!"))
            }
        })
        .has_letters(label)
        .finish()
}

// ============================================================================
// Address
// ============================================================================

/// Validate an address of the form `City, Country`
///
/// # Example
/// ```
/// use internly_validation::profile::validate_address;
///
/// assert_eq!(validate_address("Freetown, Sierra Leone"), None);
/// assert!(validate_address("Freetown Sierra Leone").is_some());
/// ```
pub fn validate_address(address: &str) -> FieldResult {
    RuleChain::trimmed(address)
        .required("Address")
        .max_chars("Address", limits::ADDRESS_MAX)
        .no_digits("Address")
        .ensure(
            |v| v.matches(',').count() == 1,
            "Address must be in the format: City, Country",
        )
        .ensure(
            |v| {
                let (city, country) = split_address(v);
                !city.is_empty() && !country.is_empty()
            },
            "Address must include both city and country (City, Country)",
        )
        .ensure(|v| is_name(split_address(v).0), "City contains invalid characters!")
        .ensure(|v| is_name(split_address(v).1), "Country contains invalid characters!")
        .ensure(
            |v| {
                let (city, country) = split_address(v);
                has_letters(city) && has_letters(country)
            },
            "City and country must contain letters!",
        )
        .finish()
}

/// Split `City, Country` into trimmed halves
pub fn split_address(address: &str) -> (&str, &str) {
    match address.split_once(',') {
        Some((city, country)) => (city.trim(), country.trim()),
        None => (address.trim(), ""),
    }
}
