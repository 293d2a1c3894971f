//! Conversion of Gregorian dates into the Plethonian lunisolar calendar.
//!
//! Years and months are not given by fixed rules but follow the published
//! dates of new moons and winter solstices: a month starts on the day after a
//! new moon, a year with the first month starting after a winter solstice.
//! Gregorian years 2001 to 2100 are supported.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use plethonian::PlethonianCalendar;
//! use plethonian::calendar::{Festivity, MonthName};
//!
//! let calendar = PlethonianCalendar::new().unwrap();
//! let date = NaiveDate::from_ymd_opt(2003, 3, 3).unwrap();
//!
//! let year = calendar.year_for(date).unwrap();
//! assert_eq!(NaiveDate::from_ymd_opt(2003, 1, 3).unwrap(), year.first_day);
//!
//! let day = calendar.day_for(date).unwrap();
//! assert_eq!((MonthName::Second, 30), (day.month, day.day_of_month));
//! assert_eq!(Some(Festivity::Introspection), day.festivity);
//! ```
//!
//! Dates outside the supported years are rejected:
//!
//! ```
//! use chrono::NaiveDate;
//! use plethonian::{LookupError, PlethonianCalendar};
//!
//! let calendar = PlethonianCalendar::shared().unwrap();
//! let date = NaiveDate::from_ymd_opt(2101, 1, 1).unwrap();
//!
//! assert!(matches!(calendar.day_for(date), Err(LookupError::OutOfRange { .. })));
//! ```

pub mod calendar;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod table;

pub use calendar::{Day, Month, PlethonianCalendar, Year};
pub use config::Config;
pub use error::{DataError, FormatError, LoadError, LookupError};
