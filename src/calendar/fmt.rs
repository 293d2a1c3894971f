//! Display names for months, weeks and days.

use super::{MonthName, WeekName};

/// Label of the last day of every month, "old and new".
pub const MONTH_TURN: &str = "Hene kai Nea";

/// Day labels, index 0 for the first day of the month.
///
/// Days are counted within the waxing, middle and waning thirds of the month.
#[rustfmt::skip]
const DAY_LABELS: [&str; 30] = [
    "Noumenia",
    "2nd waxing", "3rd waxing", "4th waxing", "5th waxing", "6th waxing",
    "7th waxing", "8th waxing", "9th waxing", "10th waxing",
    "11th middle", "12th middle", "13th middle", "14th middle", "15th middle",
    "16th middle", "17th middle", "18th middle", "19th middle", "20th middle",
    "21st waning", "22nd waning", "23rd waning", "24th waning", "25th waning",
    "26th waning", "27th waning", "28th waning", "29th waning",
    MONTH_TURN,
];

/// Returns the label of day `day` in a month of `days` days.
///
/// The last day of the month is always [`MONTH_TURN`].
///
/// # Example
///
/// ```
/// use plethonian::calendar::fmt;
///
/// assert_eq!("Noumenia", fmt::day_label(1, 30));
/// assert_eq!("29th waning", fmt::day_label(29, 30));
/// assert_eq!(fmt::MONTH_TURN, fmt::day_label(29, 29));
/// ```
///
/// # Panics
///
/// Panics if `day` is not in `1..=30`.
pub fn day_label(day: u32, days: u32) -> &'static str {
    if day == days {
        return MONTH_TURN;
    }
    match day {
        1..=30 => DAY_LABELS[day as usize - 1],
        _ => panic!("day {} not in 1..=30", day),
    }
}

/// Returns the name of a month.
pub fn month(m: MonthName) -> &'static str {
    const NAMES: [&str; 13] = [
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth", "Eleventh", "Twelfth", "Thirteenth",
    ];
    NAMES[m.number() as usize - 1]
}

/// Returns the name of a week. The month is divided at the quarters, the
/// fifth week holding the closing days.
///
/// ```
/// use plethonian::calendar::{WeekName, fmt};
///
/// assert_eq!("Declining", fmt::week(WeekName::Third));
/// ```
pub fn week(w: WeekName) -> &'static str {
    match w {
        WeekName::First => "Starting",
        WeekName::Second => "Median",
        WeekName::Third => "Declining",
        WeekName::Fourth => "Conclusive",
        WeekName::Fifth => "Closing",
    }
}
