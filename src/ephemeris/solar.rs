//! Rows of the solstice/equinox table.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::{ZONE_SUFFIX, parse_utc, pattern};
use crate::error::FormatError;

/// A Gregorian year of the solstice table; only the winter solstice is kept.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolarYear {
    pub winter_solstice: DateTime<Utc>,
}

fn solstice_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    pattern(&RE, r"^\d{4}\s\w{3}\s\d{2}\s\s\d{2}:\d{2}$")
}

impl SolarYear {
    /// Reads a row split with [`SOLSTICES_LAYOUT`](crate::table::SOLSTICES_LAYOUT).
    ///
    /// The year is taken from the first four characters of the first field,
    /// the December solstice from the fifth field.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use plethonian::ephemeris::SolarYear;
    ///
    /// let row = ["2001", "Mar 20  13:31", "Jun 21  07:38", "Sep 22  23:05", "Dec 21  19:22"];
    /// let sy = SolarYear::from_row(&row).unwrap();
    /// assert_eq!(Utc.with_ymd_and_hms(2001, 12, 21, 19, 22, 0).unwrap(), sy.winter_solstice);
    /// ```
    pub fn from_row(row: &[&str]) -> Result<Self, FormatError> {
        if row.len() < 5 {
            return Err(FormatError::MissingFields { len: row.len() });
        }
        if row[0].chars().count() < 4 {
            return Err(FormatError::ShortYear {
                raw: row[0].to_owned(),
            });
        }
        let year: String = row[0].chars().take(4).collect();
        let s = format!("{year} {}", row[4].trim());
        if !solstice_regex().is_match(&s) {
            return Err(FormatError::Pattern { raw: s });
        }
        Ok(Self {
            winter_solstice: parse_utc(&format!("{s}{ZONE_SUFFIX}"))?,
        })
    }
}
