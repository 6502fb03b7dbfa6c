//! Internship posting and interview scheduling validators

use serde::{Deserialize, Serialize};

use crate::chain::RuleChain;
use crate::config::limits;
use crate::dates::{parse_datetime, Clock};
use crate::errors::FieldResult;
use crate::formats::is_blank;

// ============================================================================
// Posting Fields
// ============================================================================

/// Validate the role title
pub fn validate_title(title: &str) -> FieldResult {
    RuleChain::trimmed(title)
        .required("Role Title")
        .max_chars("Role Title", limits::TITLE_MAX)
        .no_digits("Role Title")
        .has_letters("Role Title")
        .finish()
}

pub fn validate_description(description: &str) -> FieldResult {
    validate_long_text(description, "Role Description")
}

pub fn validate_responsibilities(responsibilities: &str) -> FieldResult {
    validate_long_text(responsibilities, "Responsibilities entry")
}

fn validate_long_text(value: &str, label: &str) -> FieldResult {
    RuleChain::trimmed(value)
        .required(label)
        .min_chars(label, limits::LONG_TEXT_MIN)
        .max_chars(label, limits::LONG_TEXT_MAX)
        .has_letters(label)
        .finish()
}

/// Optional; blank requirements are valid
pub fn validate_requirements(requirements: &str) -> FieldResult {
    validate_optional_text(requirements, "Requirements entry")
}

/// Optional; blank benefits are valid
pub fn validate_benefits(benefits: &str) -> FieldResult {
    validate_optional_text(benefits, "Benefits entry")
}

fn validate_optional_text(value: &str, label: &str) -> FieldResult {
    RuleChain::trimmed(value)
        .optional()
        .max_chars(label, limits::LONG_TEXT_MAX)
        .has_letters(label)
        .finish()
}

pub fn validate_duration(duration: &str) -> FieldResult {
    RuleChain::trimmed(duration)
        .required("Duration")
        .min_chars("Duration", limits::DURATION_MIN)
        .max_chars("Duration", limits::DURATION_MAX)
        .has_letters("Duration")
        .finish()
}

/// Validate the internship type (`Remote`, `On-Site`, ...); any selection is accepted
pub fn validate_internship_type(kind: &str) -> FieldResult {
    RuleChain::trimmed(kind).required("Internship type").finish()
}

/// Validate an application deadline against the clock
pub fn validate_deadline(deadline: &str, clock: &impl Clock) -> FieldResult {
    validate_future_datetime(deadline, clock, "Deadline is required.", "Deadline")
}

fn validate_future_datetime(
    value: &str,
    clock: &impl Clock,
    required: &str,
    label: &str,
) -> FieldResult {
    let now = clock.now();
    let parsed = parse_datetime(value, now.offset());
    RuleChain::trimmed(value)
        .ensure(|v| !is_blank(v), required)
        .ensure(|_| parsed.is_some(), format!("{label} must be a valid date!"))
        .ensure(
            |_| parsed.is_some_and(|at| at > now),
            format!("{label} must be a date after now!"),
        )
        .finish()
}

// ============================================================================
// Interview Scheduling
// ============================================================================

/// How a shortlisted interview takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewMode {
    /// At a physical venue; the venue is mandatory
    #[default]
    InPerson,
    Online,
}

/// Validate the interview date and time
pub fn validate_interview_datetime(datetime: &str, clock: &impl Clock) -> FieldResult {
    validate_future_datetime(
        datetime,
        clock,
        "Interview Date & Time entry is required!",
        "Interview Date & Time",
    )
}

/// Validate the interview venue; online interviews need none
pub fn validate_venue(location: &str, mode: InterviewMode) -> FieldResult {
    if mode == InterviewMode::Online {
        return None;
    }
    RuleChain::trimmed(location)
        .ensure(|v| !is_blank(v), "Interview Venue is required!")
        .ensure(
            |v| v.chars().count() >= limits::VENUE_MIN,
            format!(
                "Interview Venue is too short (Minimum {} characters)!",
                limits::VENUE_MIN
            ),
        )
        .max_chars("Interview Venue", limits::VENUE_MAX)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LONG_TEXT: &str =
        "Build and maintain internal dashboards used by the customer success team.";

    fn clock() -> FixedClock {
        FixedClock::at_utc(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_title() {
        assert_eq!(validate_title("Backend Engineering Intern"), None);
        assert_eq!(
            validate_title("").as_deref(),
            Some("Role Title is required.")
        );
        assert_eq!(
            validate_title("Intern 2025").as_deref(),
            Some("Role Title cannot contain numbers!")
        );
        assert_eq!(
            validate_title("'''").as_deref(),
            Some("Role Title must contain letters!")
        );
    }

    #[test]
    fn test_long_text() {
        assert_eq!(validate_description(LONG_TEXT), None);
        assert_eq!(validate_responsibilities(LONG_TEXT), None);
        assert_eq!(
            validate_description("Short").as_deref(),
            Some("Role Description is too short (minimum 50 characters)!")
        );
        assert_eq!(
            validate_responsibilities(&"a".repeat(441)).as_deref(),
            Some("Responsibilities entry is too long (maximum 440 characters)!")
        );
        assert_eq!(
            validate_description(&"- ".repeat(30)).as_deref(),
            Some("Role Description must contain letters!")
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(validate_requirements(""), None);
        assert_eq!(validate_benefits("   "), None);
        assert_eq!(validate_benefits("Mentorship"), None);
        assert_eq!(
            validate_requirements(&"a".repeat(441)).as_deref(),
            Some("Requirements entry is too long (maximum 440 characters)!")
        );
        assert_eq!(
            validate_benefits("--").as_deref(),
            Some("Benefits entry must contain letters!")
        );
    }

    #[test]
    fn test_duration_and_type() {
        assert_eq!(validate_duration("3 months"), None);
        assert_eq!(
            validate_duration("3 mo").as_deref(),
            Some("Duration is too short (minimum 5 characters)!")
        );
        assert_eq!(validate_internship_type("Remote"), None);
        assert_eq!(
            validate_internship_type(" ").as_deref(),
            Some("Internship type is required.")
        );
    }

    #[test]
    fn test_deadline() {
        let clock = clock();
        assert_eq!(validate_deadline("2025-06-01T13:00", &clock), None);
        assert_eq!(
            validate_deadline("2025-05-31T12:00", &clock).as_deref(),
            Some("Deadline must be a date after now!")
        );
        assert_eq!(
            validate_deadline("", &clock).as_deref(),
            Some("Deadline is required.")
        );
        assert_eq!(
            validate_deadline("next friday", &clock).as_deref(),
            Some("Deadline must be a valid date!")
        );
    }

    /// Counts reads so tests can see how often "now" is sampled
    struct CountingClock {
        inner: FixedClock,
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn now(&self) -> DateTime<FixedOffset> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.now()
        }
    }

    #[test]
    fn test_deadline_samples_clock_once() {
        let clock = CountingClock {
            inner: clock(),
            reads: AtomicUsize::new(0),
        };
        assert_eq!(validate_deadline("2025-06-01T13:00", &clock), None);
        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_interview_datetime() {
        let clock = clock();
        assert_eq!(
            validate_interview_datetime("", &clock).as_deref(),
            Some("Interview Date & Time entry is required!")
        );
        assert_eq!(
            validate_interview_datetime("2025-01-01T10:00", &clock).as_deref(),
            Some("Interview Date & Time must be a date after now!")
        );
        assert_eq!(validate_interview_datetime("2025-06-02T10:00", &clock), None);
    }

    #[test]
    fn test_venue() {
        assert_eq!(validate_venue("", InterviewMode::Online), None);
        assert_eq!(
            validate_venue("", InterviewMode::InPerson).as_deref(),
            Some("Interview Venue is required!")
        );
        assert_eq!(
            validate_venue("HQ", InterviewMode::InPerson).as_deref(),
            Some("Interview Venue is too short (Minimum 5 characters)!")
        );
        assert_eq!(
            validate_venue("0001 First Avenue, The Village", InterviewMode::InPerson),
            None
        );
    }

    #[test]
    fn test_interview_mode_serde() {
        let mode: InterviewMode = serde_json::from_str("\"in-person\"").unwrap();
        assert_eq!(mode, InterviewMode::InPerson);
        assert_eq!(
            serde_json::to_string(&InterviewMode::Online).unwrap(),
            "\"online\""
        );
    }
}
