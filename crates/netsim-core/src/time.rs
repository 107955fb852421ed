//! Time windows samples are spread across.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use thiserror::Error;

/// Format of every `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of window bounds on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum TimeWindowError {
    #[error("Invalid date '{value}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid timestamp '{value}', expected YYYY-MM-DD HH:MM:SS: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Time window end {end} is before its start {start}")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A closed interval `[start, end]` with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TimeWindowError> {
        if end < start {
            return Err(TimeWindowError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window from midnight of `start_date` to midnight of `end_date`.
    pub fn from_dates(start_date: &str, end_date: &str) -> Result<Self, TimeWindowError> {
        Self::new(parse_date(start_date)?, parse_date(end_date)?)
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the window in whole seconds.
    pub fn seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Uniformly random instant inside the window.
    pub fn random_instant<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDateTime {
        let offset = rng.gen_range(0..=self.seconds());
        self.start + Duration::seconds(offset)
    }

    /// The `index`-th of `count` instants spaced evenly from the start.
    ///
    /// The last instant falls one interval short of the end.
    pub fn evenly_spaced(&self, index: u64, count: u64) -> NaiveDateTime {
        if count == 0 {
            return self.start;
        }
        let millis = (self.end - self.start).num_milliseconds() as f64;
        let offset = millis / count as f64 * index as f64;
        self.start + Duration::milliseconds(offset as i64)
    }
}

/// Parse a `YYYY-MM-DD` date as midnight.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, TimeWindowError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|d| d.and_time(chrono::NaiveTime::default()))
        .map_err(|source| TimeWindowError::InvalidDate {
            value: value.to_string(),
            source,
        })
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimeWindowError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        TimeWindowError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// Render an instant in the shared timestamp format.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_instant_within_window() {
        let window = TimeWindow::from_dates("2025-02-01", "2025-03-01").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let ts = window.random_instant(&mut rng);
            assert!(ts >= window.start() && ts <= window.end());
        }
    }

    #[test]
    fn test_empty_window_returns_start() {
        let window = TimeWindow::from_dates("2025-02-01", "2025-02-01").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(window.random_instant(&mut rng), window.start());
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let err = TimeWindow::from_dates("2025-03-01", "2025-02-01").unwrap_err();
        assert!(matches!(err, TimeWindowError::EndBeforeStart { .. }));
    }

    #[test]
    fn test_invalid_date() {
        let err = TimeWindow::from_dates("2025/02/01", "2025-03-01").unwrap_err();
        assert!(matches!(err, TimeWindowError::InvalidDate { .. }));
    }

    #[test]
    fn test_evenly_spaced() {
        let window = TimeWindow::from_dates("2025-02-01", "2025-02-02").unwrap();
        assert_eq!(format_timestamp(window.evenly_spaced(0, 4)), "2025-02-01 00:00:00");
        assert_eq!(format_timestamp(window.evenly_spaced(1, 4)), "2025-02-01 06:00:00");
        assert_eq!(format_timestamp(window.evenly_spaced(3, 4)), "2025-02-01 18:00:00");
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2025-03-27 10:00:00").unwrap();
        assert_eq!(format_timestamp(ts), "2025-03-27 10:00:00");
    }
}
