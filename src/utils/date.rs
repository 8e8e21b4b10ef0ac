//! UTC calendar dates without timezone dependencies.
//!
//! Provides a lightweight `DateUtc` for the one thing a sitemap needs from a
//! clock: the calendar day (UTC) a file was last touched, rendered as
//! `YYYY-MM-DD` for `<lastmod>`.
//!
//! # Examples
//!
//! ```ignore
//! let day = DateUtc::from_system_time(metadata.modified()?);
//! let lastmod = day.min(DateUtc::today());
//! assert_eq!(DateUtc::new(2024, 6, 15).to_string(), "2024-06-15");
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const SECS_PER_DAY: i64 = 86_400;

/// UTC calendar date.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl DateUtc {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Current date in UTC.
    pub fn today() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Calendar day (UTC) containing the given instant.
    pub fn from_system_time(time: SystemTime) -> Self {
        let secs = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            // Pre-epoch instants round toward the earlier day.
            Err(err) => {
                let before = err.duration();
                let whole = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
                -(whole + i64::from(before.subsec_nanos() > 0))
            }
        };
        Self::from_unix_days(secs.div_euclid(SECS_PER_DAY))
    }

    /// Convert days since 1970-01-01 to a civil date.
    ///
    /// Proleptic Gregorian calendar, eras of 400 years starting on March 1st.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // ranges checked below
    fn from_unix_days(days: i64) -> Self {
        let z = days.saturating_add(719_468);
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097; // [0, 146096]
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
        let mp = (5 * doy + 2) / 153; // [0, 11]
        let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
        let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::new(year.clamp(0, 9999) as u16, month as u8, day as u8)
    }
}

impl fmt::Display for DateUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
