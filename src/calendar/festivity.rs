//! Festivals and their resolution for a given day.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

/// Festivals of the calendar.
///
/// Variants are ordered by priority: when several festivals fall on the same
/// day, the one declared last is the dominant one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Festivity {
    // repeated monthly
    /// The new moon of each month, consecrated to Jupiter.
    Jupiter,
    /// Limit between the starting and the median period.
    FirstQuarter,
    /// Limit between the median and the declining period.
    FullMoon,
    /// Limit between the declining and the conclusive period.
    LastQuarter,
    /// Day 29, consecrated to Pluto.
    Pluto,
    /// The last day of the month, dedicated to introspection.
    Introspection,
    // repeated yearly
    SecondDay,
    ThirdDay,
    EighthDayFourthMonth,
    HalfSeventhMonth,
    EighthFromEndTenthMonth,
}

impl Festivity {
    /// Every festival, in priority order.
    pub const ALL: [Festivity; 11] = [
        Festivity::Jupiter,
        Festivity::FirstQuarter,
        Festivity::FullMoon,
        Festivity::LastQuarter,
        Festivity::Pluto,
        Festivity::Introspection,
        Festivity::SecondDay,
        Festivity::ThirdDay,
        Festivity::EighthDayFourthMonth,
        Festivity::HalfSeventhMonth,
        Festivity::EighthFromEndTenthMonth,
    ];

    /// Month of the festival, `0` for the ones repeated every month.
    ///
    /// A negative month counts from the end of the year, `-1` being the last.
    pub fn month(self) -> i32 {
        use Festivity::*;
        match self {
            Jupiter | FirstQuarter | FullMoon | LastQuarter | Pluto | Introspection => 0,
            SecondDay | ThirdDay => 1,
            EighthDayFourthMonth => 4,
            HalfSeventhMonth => 7,
            EighthFromEndTenthMonth => 10,
        }
    }

    /// Day of the month of the festival.
    ///
    /// A negative day counts from the end of the month, `-1` being the last.
    pub fn day(self) -> i32 {
        use Festivity::*;
        match self {
            Jupiter => 1,
            FirstQuarter => 8,
            FullMoon => 15,
            LastQuarter => 22,
            Pluto => 29,
            Introspection => -1,
            SecondDay => 2,
            ThirdDay => 3,
            EighthDayFourthMonth => 8,
            HalfSeventhMonth => 15,
            EighthFromEndTenthMonth => -8,
        }
    }

    /// Whether the day is consecrated to a god.
    pub fn is_consecrated(self) -> bool {
        matches!(self, Festivity::Jupiter | Festivity::Pluto)
    }

    pub fn name(self) -> &'static str {
        use Festivity::*;
        match self {
            Jupiter => "Jupiter",
            FirstQuarter => "First quarter",
            FullMoon => "Full moon",
            LastQuarter => "Last quarter",
            Pluto => "Pluto",
            Introspection => "Introspection",
            SecondDay => "Second day",
            ThirdDay => "Third day",
            EighthDayFourthMonth => "Eighth day of the fourth month",
            HalfSeventhMonth => "Half of the seventh month",
            EighthFromEndTenthMonth => "Eighth day from the end of the tenth month",
        }
    }
}

/// Index of the `n`-th of `count` items counted from the end: `-1` for the
/// last, `-count` for the first.
fn from_end(n: i32, count: i32) -> i32 {
    (n - 1) - count
}

/// Lookup tables from day positions to festivals.
#[derive(Debug, Clone)]
pub struct FestivityResolver {
    monthly: HashMap<i32, Festivity>,
    yearly: HashMap<(i32, i32), Festivity>,
}

impl Default for FestivityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FestivityResolver {
    /// Builds the tables for [`Festivity::ALL`].
    pub fn new() -> Self {
        let mut monthly = HashMap::new();
        let mut yearly = HashMap::new();
        for f in Festivity::ALL {
            match f.month() {
                0 => monthly.insert(f.day(), f),
                m => yearly.insert((m, f.day()), f),
            };
        }
        Self { monthly, yearly }
    }

    /// Returns every festival falling on day `day` of month `month`, in a
    /// year of `months` months and a month of `days` days.
    ///
    /// Days and months are matched both counted from the start and from the
    /// end.
    pub fn festivities(
        &self,
        month: u32,
        day: u32,
        months: u32,
        days: u32,
    ) -> BTreeSet<Festivity> {
        let (month, day) = (month as i32, day as i32);
        let neg_day = from_end(day, days as i32);
        let neg_month = from_end(month, months as i32);

        let monthly = [day, neg_day].into_iter().filter_map(|d| self.monthly.get(&d));
        let yearly = [
            (month, day),
            (month, neg_day),
            (neg_month, day),
            (neg_month, neg_day),
        ]
        .into_iter()
        .filter_map(|key| self.yearly.get(&key));
        monthly.chain(yearly).copied().collect()
    }

    /// Returns the dominant festival of a day, the one with the highest
    /// priority among [`festivities`](Self::festivities).
    ///
    /// # Example
    ///
    /// ```
    /// use plethonian::calendar::{Festivity, FestivityResolver};
    ///
    /// let resolver = FestivityResolver::new();
    /// // full moon of the seventh month
    /// assert_eq!(Some(Festivity::HalfSeventhMonth), resolver.dominant(7, 15, 12, 30));
    /// assert_eq!(None, resolver.dominant(7, 16, 12, 30));
    /// ```
    pub fn dominant(&self, month: u32, day: u32, months: u32, days: u32) -> Option<Festivity> {
        self.festivities(month, day, months, days).last().copied()
    }
}
