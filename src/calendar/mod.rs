//! Plethonian calendar
//!
//! Years run from the day after the first new moon following a winter
//! solstice to the day of the first new moon following the next one. Each
//! month starts on the day after a new moon, so months last 29 or 30 days and
//! years hold 12 or 13 months.
//!
//! The calendar is computed from the published tables in
//! [`ephemeris`](crate::ephemeris), see [`PlethonianCalendar`].

use std::cmp::Ordering;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::Serialize;
use tracing::info;

use crate::config::{self, Config};
use crate::ephemeris::{LUNAR_PHASES, SOLSTICES};
use crate::error::{DataError, Level, LoadError, LookupError};

mod builder;
pub mod festivity;
pub mod fmt;

pub use builder::CalendarBuilder;
pub use festivity::{Festivity, FestivityResolver};

/// First Gregorian year answered by default.
pub const FIRST_YEAR: i32 = 2001;
/// Last Gregorian year answered by default.
pub const LAST_YEAR: i32 = 2100;

/// Ordinal of a month within its year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MonthName {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
    /// The embolismic month.
    Thirteenth,
}

impl MonthName {
    const ALL: [MonthName; 13] = [
        MonthName::First,
        MonthName::Second,
        MonthName::Third,
        MonthName::Fourth,
        MonthName::Fifth,
        MonthName::Sixth,
        MonthName::Seventh,
        MonthName::Eighth,
        MonthName::Ninth,
        MonthName::Tenth,
        MonthName::Eleventh,
        MonthName::Twelfth,
        MonthName::Thirteenth,
    ];

    /// Returns the month numbered `num`, `None` if not in `1..=13`.
    pub fn from_number(num: u32) -> Option<Self> {
        Self::ALL.get(num.checked_sub(1)? as usize).copied()
    }
    /// `1..=13`
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
    pub fn name(&self) -> &'static str {
        fmt::month(*self)
    }
}

/// Week of the month; the fifth week holds days 29 and 30.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WeekName {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl WeekName {
    /// Returns the week containing day `day` of a month, i.e. week number
    /// `(day - 1) / 7 + 1`.
    ///
    /// ```
    /// use plethonian::calendar::WeekName;
    ///
    /// assert_eq!(WeekName::First, WeekName::of_day(7));
    /// assert_eq!(WeekName::Second, WeekName::of_day(8));
    /// assert_eq!(WeekName::Fifth, WeekName::of_day(30));
    /// ```
    pub fn of_day(day: u32) -> Self {
        match day.saturating_sub(1) / 7 {
            0 => WeekName::First,
            1 => WeekName::Second,
            2 => WeekName::Third,
            3 => WeekName::Fourth,
            _ => WeekName::Fifth,
        }
    }
    /// Returns the week numbered `num`, `None` if not in `1..=5`.
    pub fn from_number(num: u32) -> Option<Self> {
        match num {
            1..=5 => Some(Self::of_day((num - 1) * 7 + 1)),
            _ => None,
        }
    }
    /// `1..=5`
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }
    pub fn name(&self) -> &'static str {
        fmt::week(*self)
    }
}

/// A day of the calendar.
#[derive(Debug, Clone, Serialize)]
pub struct Day {
    /// `1..=30`
    pub day_of_month: u32,
    /// Position within the year, starting from 1.
    pub day_of_year: u32,
    pub month: MonthName,
    pub week: WeekName,
    pub gregorian_date: NaiveDate,
    /// Dominant festival of the day, if any.
    pub festivity: Option<Festivity>,
    pub label: &'static str,
    /// The day dedicated to Pluto and the defunct, one per year.
    pub remembrance: bool,
}

impl Day {
    /// Whether the dominant festival is consecrated.
    pub fn is_consecrated(&self) -> bool {
        self.festivity.is_some_and(Festivity::is_consecrated)
    }
}

/// A month of the calendar, with its days in order.
#[derive(Debug, Clone, Serialize)]
pub struct Month {
    pub name: MonthName,
    pub first_day: NaiveDate,
    pub days: Vec<Day>,
}

impl Month {
    /// Number of days, 29 or 30.
    pub fn len(&self) -> u32 {
        self.days.len() as u32
    }
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
    pub fn last_day(&self) -> Option<&Day> {
        self.days.last()
    }
}

/// A year of the calendar, with its months in order.
#[derive(Debug, Clone, Serialize)]
pub struct Year {
    pub first_day: NaiveDate,
    /// Number of days in the year.
    pub days: u32,
    pub months: Vec<Month>,
}

impl Year {
    /// The first day of the following year.
    pub fn end(&self) -> NaiveDate {
        self.first_day + TimeDelta::days(self.days.into())
    }
    /// 12, or 13 with an embolismic month.
    pub fn month_count(&self) -> u32 {
        self.months.len() as u32
    }
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first_day..self.end()).contains(&date)
    }
}

/// Identity of calendar entries.
///
/// Years, months and days are the same entry when they start on the same
/// Gregorian date, whatever their other fields. Use [`same_date`] and
/// [`cmp_by_date`] to compare them; they do not implement `PartialEq`.
pub trait DateKey {
    fn date_key(&self) -> NaiveDate;
}

impl DateKey for Year {
    fn date_key(&self) -> NaiveDate {
        self.first_day
    }
}

impl DateKey for Month {
    fn date_key(&self) -> NaiveDate {
        self.first_day
    }
}

impl DateKey for Day {
    fn date_key(&self) -> NaiveDate {
        self.gregorian_date
    }
}

/// Orders two entries by their date key.
pub fn cmp_by_date<T: DateKey>(a: &T, b: &T) -> Ordering {
    a.date_key().cmp(&b.date_key())
}

/// Whether two entries have the same date key.
pub fn same_date<T: DateKey>(a: &T, b: &T) -> bool {
    a.date_key() == b.date_key()
}

/// Returns the entry with the greatest date key not after `date`.
///
/// `items` must be sorted by date key.
fn floor<T: DateKey>(items: &[T], date: NaiveDate) -> Option<&T> {
    let idx = items.partition_point(|it| it.date_key() <= date);
    idx.checked_sub(1).map(|i| &items[i])
}

/// The compiled calendar.
///
/// Built once from the ephemeris tables; queries never modify it.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use plethonian::calendar::{MonthName, PlethonianCalendar};
///
/// let calendar = PlethonianCalendar::shared().unwrap();
/// let date = NaiveDate::from_ymd_opt(2003, 3, 3).unwrap();
///
/// let day = calendar.day_for(date).unwrap();
/// assert_eq!((MonthName::Second, 30), (day.month, day.day_of_month));
/// ```
#[derive(Debug, Clone)]
pub struct PlethonianCalendar {
    years: Vec<Year>,
    first_year: i32,
    last_year: i32,
}

impl PlethonianCalendar {
    /// Builds the calendar from the embedded tables.
    pub fn new() -> Result<Self, DataError> {
        Self::from_tables(LUNAR_PHASES, SOLSTICES)
    }

    /// Returns a calendar built from the embedded tables, shared by the whole
    /// process. The first call builds it.
    pub fn shared() -> Result<&'static Self, DataError> {
        static SHARED: OnceLock<Result<PlethonianCalendar, DataError>> = OnceLock::new();
        SHARED.get_or_init(Self::new).as_ref().map_err(Clone::clone)
    }

    /// Builds the calendar from the text of a lunar-phase table and a
    /// solstice table.
    ///
    /// Malformed rows are skipped, but the remaining data must still form a
    /// complete calendar.
    pub fn from_tables(lunar_phases: &str, solstices: &str) -> Result<Self, DataError> {
        let years = CalendarBuilder::new().build(lunar_phases, solstices)?;
        if let (Some(first), Some(last)) = (years.first(), years.last()) {
            info!(
                years = years.len(),
                "calendar built from {} to {}",
                first.first_day,
                last.end()
            );
        }
        Ok(Self {
            years,
            first_year: FIRST_YEAR,
            last_year: LAST_YEAR,
        })
    }

    /// Builds the calendar as described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, LoadError> {
        config.validate()?;
        let lunar_phases = config::read_table(config.lunar_phases.as_deref(), LUNAR_PHASES)?;
        let solstices = config::read_table(config.solstices.as_deref(), SOLSTICES)?;
        Ok(Self {
            first_year: config.first_year,
            last_year: config.last_year,
            ..Self::from_tables(&lunar_phases, &solstices)?
        })
    }

    /// All years, in order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Gregorian years accepted by the queries.
    pub fn supported_years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    /// Returns the year containing `date`.
    ///
    /// Fails with [`LookupError::OutOfRange`] when the Gregorian year is not
    /// supported, and with [`LookupError::NotFound`] when no year of the
    /// data contains `date`. Dates after the last built year fail rather than
    /// resolve to that year.
    pub fn year_for(&self, date: NaiveDate) -> Result<&Year, LookupError> {
        let year = date.year();
        if !self.supported_years().contains(&year) {
            return Err(LookupError::OutOfRange {
                year,
                first: self.first_year,
                last: self.last_year,
            });
        }
        floor(&self.years, date)
            .filter(|y| date < y.end())
            .ok_or(LookupError::NotFound {
                level: Level::Year,
                date,
            })
    }

    /// Returns the month containing `date`.
    pub fn month_for(&self, date: NaiveDate) -> Result<&Month, LookupError> {
        floor(&self.year_for(date)?.months, date).ok_or(LookupError::NotFound {
            level: Level::Month,
            date,
        })
    }

    /// Returns the day for `date`.
    pub fn day_for(&self, date: NaiveDate) -> Result<&Day, LookupError> {
        floor(&self.month_for(date)?.days, date).ok_or(LookupError::NotFound {
            level: Level::Day,
            date,
        })
    }
}
