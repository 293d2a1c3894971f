//! Error types.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

/// A table row whose fields do not match the expected layout.
///
/// Only the offending row is rejected; other rows of the same table are still
/// read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A lunar-phase row must carry 4 or 5 fields.
    #[error("unexpected row size: {len}")]
    RowSize { len: usize },

    /// A solstice row must carry at least 5 fields.
    #[error("row has missing fields: {len} of 5")]
    MissingFields { len: usize },

    /// The year column is shorter than four characters.
    #[error("year is not long enough: {raw:?}")]
    ShortYear { raw: String },

    /// A field does not match its textual pattern.
    #[error("wrong format: {raw:?}")]
    Pattern { raw: String },

    /// A date-time field matched its pattern but is not a valid instant.
    #[error("invalid date-time {raw:?}: {source}")]
    DateTime {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// A [`FormatError`] with the line it was found on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {error}")]
pub struct RowError {
    /// 1-based line number in the table.
    pub line: usize,
    pub error: FormatError,
}

/// The tables cannot be assembled into a gap-free calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("at least two winter solstices are required, found {count}")]
    TooFewSolstices { count: usize },

    #[error("no new moon between the solstices of {first} and {last}")]
    EmptyYear {
        first: DateTime<Utc>,
        last: DateTime<Utc>,
    },

    #[error("no new moon at or after the solstice of {solstice}")]
    NoBoundaryMoon { solstice: DateTime<Utc> },

    #[error("month starting {first_day} has {days} days")]
    MonthLength { first_day: NaiveDate, days: i64 },

    #[error("year starting {first_day} has {months} months")]
    MonthCount { first_day: NaiveDate, months: usize },
}

/// Which level of the hierarchy a lookup failed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Year,
    Month,
    Day,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Level::Year => "year",
            Level::Month => "month",
            Level::Day => "day",
        })
    }
}

/// Failure of a query against a built calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The Gregorian year lies outside the supported window.
    #[error("the year {year} is not in the valid range {first}..={last}")]
    OutOfRange { year: i32, first: i32, last: i32 },

    /// No entry contains the date, although the year is in range.
    #[error("cannot find a Plethonian {level} for {date}")]
    NotFound { level: Level, date: NaiveDate },
}

/// Failure while building a calendar from a [`Config`](crate::config::Config).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: years {first}..={last} are not within 2001..=2100")]
    Window { first: i32, last: i32 },

    #[error(transparent)]
    Data(#[from] DataError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = FormatError::Pattern { raw: "XXX".into() };
        assert_eq!(err.to_string(), "wrong format: \"XXX\"");

        let err = RowError {
            line: 7,
            error: FormatError::RowSize { len: 2 },
        };
        assert_eq!(err.to_string(), "line 7: unexpected row size: 2");

        let err = LookupError::OutOfRange {
            year: 2101,
            first: 2001,
            last: 2100,
        };
        assert_eq!(
            err.to_string(),
            "the year 2101 is not in the valid range 2001..=2100"
        );

        let err = LookupError::NotFound {
            level: Level::Month,
            date: NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
        };
        assert_eq!(err.to_string(), "cannot find a Plethonian month for 2001-01-01");
    }

    #[test]
    fn send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<FormatError>();
        assert_impl::<DataError>();
        assert_impl::<LookupError>();
        assert_impl::<LoadError>();
    }
}
