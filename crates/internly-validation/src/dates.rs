//! Clock abstraction and date-time helpers
//!
//! Deadline checks compare against "now", so validators receive a [`Clock`]
//! instead of reading the system time directly. Production code uses
//! [`SystemClock`]; tests pin time with [`FixedClock`].
//!
//! Accepted input shapes:
//! - RFC 3339 (`2025-03-01T09:30:00Z`, `2025-03-01T09:30:00+01:00`)
//! - date-time input values (`2025-03-01T09:30`, optional seconds)
//! - space separated date-time (`2025-03-01 09:30`, optional seconds)
//! - plain dates (`2025-03-01`, read as midnight)
//!
//! Values without an offset are read in the clock's own offset, so the
//! comparison is a naive wall-clock comparison.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Format produced by `<input type="datetime-local">`
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// ============================================================================
// Clock
// ============================================================================

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current time, carrying the offset naive inputs are read in
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the machine's local offset
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = Local::now();
        now.with_timezone(now.offset())
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Freeze at a UTC instant
    pub fn at_utc(now: DateTime<Utc>) -> Self {
        Self::new(now.with_timezone(&Utc.fix()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a date or date-time, reading offset-less values in `offset`
///
/// Returns `None` for anything unparseable.
pub fn parse_datetime(value: &str, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    offset.from_local_datetime(&naive).single()
}

/// Whether `value` parses and lies strictly after the clock's current time
pub fn is_after_now(value: &str, clock: &impl Clock) -> bool {
    let now = clock.now();
    parse_datetime(value, now.offset()).is_some_and(|at| at > now)
}

/// Whether an internship deadline is still open
///
/// Unparseable deadlines count as closed.
pub fn is_deadline_open(deadline: &str, clock: &impl Clock) -> bool {
    is_after_now(deadline, clock)
}

/// Normalise a stored timestamp into the `YYYY-MM-DDTHH:MM` input shape
///
/// Offset-carrying values are converted to UTC first; offset-less values
/// keep their wall-clock reading. Empty or unparseable input yields `""`.
///
/// # Example
/// ```
/// use internly_validation::dates::format_for_datetime_local;
///
/// assert_eq!(
///     format_for_datetime_local("2025-03-01T09:30:00+01:00"),
///     "2025-03-01T08:30"
/// );
/// assert_eq!(format_for_datetime_local("not a date"), "");
/// ```
pub fn format_for_datetime_local(value: &str) -> String {
    match parse_datetime(value, &Utc.fix()) {
        Some(at) => at
            .with_timezone(&Utc)
            .format(DATETIME_LOCAL_FORMAT)
            .to_string(),
        None => String::new(),
    }
}
