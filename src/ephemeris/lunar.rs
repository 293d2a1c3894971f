//! Rows of the lunar-phase table.

use std::sync::OnceLock;

use chrono::{DateTime, TimeDelta, Utc};
use regex::{Captures, Regex};

use super::{ZONE_SUFFIX, parse_utc, pattern};
use crate::error::FormatError;

/// One synodic month, keyed by its new moon.
#[derive(Debug, Clone, PartialEq)]
pub struct LunarMonth {
    /// Instant of the new moon opening the month.
    pub new_moon: DateTime<Utc>,
    /// Time until the next new moon.
    pub month_length: TimeDelta,
    /// Signed difference between `month_length` and the mean synodic month.
    pub diff_from_mean: TimeDelta,
    /// Moon's anomaly at the new moon, in degrees.
    pub anomaly: f64,
    /// Free-text notes from the fifth column, if any.
    pub annotation: Option<String>,
}

fn new_moon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^\d{4}\s\w{3}\s\d{2}\s\s\d{2}:\d{2}$")
}

fn month_length_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^(\d{2})d\s(\d{2})h\s(\d{2})m$")
}

fn diff_from_mean_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^([+-])(\d{2})h\s(\d{2})m$")
}

fn anomaly_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^(\d{1,3}\.\d)°$")
}

impl LunarMonth {
    /// Reads a row split with [`LUNAR_PHASES_LAYOUT`](crate::table::LUNAR_PHASES_LAYOUT).
    ///
    /// The row must have four fields, or five when notes are present.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use plethonian::ephemeris::LunarMonth;
    ///
    /// let lm = LunarMonth::from_row(&["2001 Jan 24  13:07", "29d 19h 14m", "+07h 01m", "177.9°"])
    ///     .unwrap();
    /// assert_eq!(Utc.with_ymd_and_hms(2001, 1, 24, 13, 7, 0).unwrap(), lm.new_moon);
    /// assert_eq!(TimeDelta::minutes(7 * 60 + 1), lm.diff_from_mean);
    /// ```
    pub fn from_row(row: &[&str]) -> Result<Self, FormatError> {
        let annotation = match row.len() {
            4 => None,
            5 => Some(row[4].to_owned()),
            len => return Err(FormatError::RowSize { len }),
        };
        Ok(Self {
            new_moon: read_new_moon(row[0])?,
            month_length: read_month_length(row[1])?,
            diff_from_mean: read_diff_from_mean(row[2])?,
            anomaly: read_anomaly(row[3])?,
            annotation,
        })
    }
}

fn read_new_moon(s: &str) -> Result<DateTime<Utc>, FormatError> {
    if !new_moon_regex().is_match(s) {
        return Err(FormatError::Pattern { raw: s.to_owned() });
    }
    parse_utc(&format!("{s}{ZONE_SUFFIX}"))
}

/// Captures the numeric groups of `re`, the first `skip` groups excluded.
fn numbers<'h, const N: usize>(
    re: &Regex,
    s: &'h str,
    skip: usize,
) -> Result<(Captures<'h>, [i64; N]), FormatError> {
    let wrong = || FormatError::Pattern { raw: s.to_owned() };
    let caps = re.captures(s).ok_or_else(wrong)?;
    let mut out = [0; N];
    for (i, v) in out.iter_mut().enumerate() {
        *v = caps
            .get(skip + i + 1)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(wrong)?;
    }
    Ok((caps, out))
}

fn read_month_length(s: &str) -> Result<TimeDelta, FormatError> {
    let (_, [d, h, m]) = numbers(month_length_regex(), s, 0)?;
    Ok(TimeDelta::days(d) + TimeDelta::hours(h) + TimeDelta::minutes(m))
}

fn read_diff_from_mean(s: &str) -> Result<TimeDelta, FormatError> {
    let (caps, [h, m]) = numbers(diff_from_mean_regex(), s, 1)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    Ok(TimeDelta::minutes(sign * (60 * h + m)))
}

fn read_anomaly(s: &str) -> Result<f64, FormatError> {
    anomaly_regex()
        .captures(s)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| FormatError::Pattern { raw: s.to_owned() })
}
