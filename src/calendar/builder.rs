//! Assembling years, months and days from the ephemeris tables.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use tracing::debug;

use super::{Day, Festivity, FestivityResolver, Month, MonthName, WeekName, Year, fmt};
use crate::ephemeris::{self, LunarMonth};
use crate::error::DataError;

/// Builds the years of the calendar.
#[derive(Debug, Clone, Default)]
pub struct CalendarBuilder {
    resolver: FestivityResolver,
}

/// Civil date on which a month opened by `new_moon` starts.
fn day_after(new_moon: DateTime<Utc>) -> NaiveDate {
    new_moon.date_naive() + TimeDelta::days(1)
}

impl CalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads both tables and builds every year between their first and last
    /// winter solstice.
    #[tracing::instrument(skip_all)]
    pub fn build(&self, lunar_phases: &str, solstices: &str) -> Result<Vec<Year>, DataError> {
        let new_moons: BTreeMap<_, _> = ephemeris::read_lunar_months(lunar_phases)
            .records
            .into_iter()
            .map(|lm| (lm.new_moon, lm))
            .collect();
        let solstices: BTreeSet<_> = ephemeris::read_solar_years(solstices)
            .records
            .iter()
            .map(|sy| sy.winter_solstice)
            .collect();
        self.build_years(&new_moons, &solstices)
    }

    /// Builds one year for each pair of consecutive winter solstices.
    ///
    /// A year holds the months opened by the new moons from its first
    /// solstice, inclusive, to the next one, exclusive; it ends the day of the
    /// first new moon at or after the next solstice.
    pub fn build_years(
        &self,
        new_moons: &BTreeMap<DateTime<Utc>, LunarMonth>,
        solstices: &BTreeSet<DateTime<Utc>>,
    ) -> Result<Vec<Year>, DataError> {
        if solstices.len() < 2 {
            return Err(DataError::TooFewSolstices {
                count: solstices.len(),
            });
        }
        let solstices: Vec<_> = solstices.iter().copied().collect();

        let mut years = Vec::with_capacity(solstices.len() - 1);
        for pair in solstices.windows(2) {
            let (first, last) = (pair[0], pair[1]);
            let mut markers: Vec<_> = new_moons.range(first..last).map(|(&nm, _)| nm).collect();
            if markers.is_empty() {
                return Err(DataError::EmptyYear { first, last });
            }
            let next = new_moons
                .range(last..)
                .next()
                .map(|(&nm, _)| nm)
                .ok_or(DataError::NoBoundaryMoon { solstice: last })?;
            markers.push(next);
            years.push(self.build_year(&markers)?);
        }
        Ok(years)
    }

    /// Builds a year from the new moons opening its months, followed by the
    /// one opening the next year.
    fn build_year(&self, markers: &[DateTime<Utc>]) -> Result<Year, DataError> {
        let starts: Vec<NaiveDate> = markers.iter().copied().map(day_after).collect();
        let first_day = starts[0];
        let count = starts.len() - 1;
        if !(12..=13).contains(&count) {
            return Err(DataError::MonthCount {
                first_day,
                months: count,
            });
        }

        let mut months = Vec::with_capacity(count);
        let mut day_of_year = 1;
        for (i, w) in starts.windows(2).enumerate() {
            let days = (w[1] - w[0]).num_days();
            if !(29..=30).contains(&days) {
                return Err(DataError::MonthLength {
                    first_day: w[0],
                    days,
                });
            }
            let name = MonthName::from_number(i as u32 + 1).ok_or(DataError::MonthCount {
                first_day,
                months: count,
            })?;
            let month = self.build_month(name, w[0], days as u32, count as u32, day_of_year);
            day_of_year += month.len();
            months.push(month);
        }

        let year = Year {
            first_day,
            days: day_of_year - 1,
            months,
        };
        debug!(
            first_day = %year.first_day,
            days = year.days,
            months = year.month_count(),
            "year built"
        );
        Ok(year)
    }

    fn build_month(
        &self,
        name: MonthName,
        first_day: NaiveDate,
        len: u32,
        months: u32,
        first_day_of_year: u32,
    ) -> Month {
        let month = name.number();
        let last_month = month == months;
        let days = (1..=len)
            .zip(first_day.iter_days())
            .map(|(day, gregorian_date)| Day {
                day_of_month: day,
                day_of_year: first_day_of_year + day - 1,
                month: name,
                week: WeekName::of_day(day),
                gregorian_date,
                festivity: self.resolver.dominant(month, day, months, len),
                label: fmt::day_label(day, len),
                remembrance: last_month && day as i32 == Festivity::Pluto.day(),
            })
            .collect();
        Month {
            name,
            first_day,
            days,
        }
    }
}
