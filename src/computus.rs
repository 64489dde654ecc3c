//! Gregorian computus: the Meeus/Jones/Butcher algorithm and its result type.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::consts::{APRIL, CENTURY, DAYS_IN_APRIL, DAYS_IN_MARCH, MARCH, METONIC_CYCLE, MIN_DAY};
use crate::prelude::*;
use crate::year::Year;

/// Computes the Gregorian date of Easter Sunday as `(month, day)`.
///
/// Accepts any integer. Every division is floor division, so years before
/// the Gregorian reform (and negative years) still produce a `(month, day)`
/// pair with `month` in `{3, 4}`, though such results carry no calendrical
/// meaning.
///
/// # Example
///
/// ```
/// use easter_date::easter_date;
///
/// assert_eq!((3, 31), easter_date(2024));
/// assert_eq!((4, 20), easter_date(2025));
/// ```
pub const fn easter_date(year: i64) -> (i64, i64) {
    let a = year.rem_euclid(METONIC_CYCLE);
    let b = year.div_euclid(CENTURY);
    let c = year.rem_euclid(CENTURY);

    // century corrections
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);

    // epact, days from March 21 to the paschal full moon
    let h = (19 * a + b - d - g + 15).rem_euclid(30);

    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);

    // days from the full moon to the following Sunday
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);

    let n = h + l - 7 * m + 114;
    (n.div_euclid(31), n.rem_euclid(31) + 1)
}

/// Converts a month number to its English name.
///
/// Only March and April are named; any other value falls back to
/// `"Month {n}"`. [`easter_date`] never produces such a value.
pub fn month_name(month: i64) -> Cow<'static, str> {
    match month {
        3 => Cow::Borrowed("March"),
        4 => Cow::Borrowed("April"),
        other => Cow::Owned(format!("Month {other}")),
    }
}

/// Typed Easter computation for a validated year.
pub fn easter(year: Year) -> EasterDate {
    let (month, day) = easter_date(year.get());
    tracing::trace!(year = year.get(), month, day, "computed easter date");
    EasterDate::from_computus(month, day)
}

/// The two months Easter Sunday can fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EasterMonth {
    March,
    April,
}

impl EasterMonth {
    /// Returns the month number (3 or 4)
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Self::March => MARCH,
            Self::April => APRIL,
        }
    }

    /// Number of days in this month
    #[inline]
    pub const fn days(self) -> u8 {
        match self {
            Self::March => DAYS_IN_MARCH,
            Self::April => DAYS_IN_APRIL,
        }
    }
}

impl TryFrom<u8> for EasterMonth {
    type Error = EasterDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            MARCH => Ok(Self::March),
            APRIL => Ok(Self::April),
            other => Err(EasterDateError::InvalidMonth(other)),
        }
    }
}

impl From<EasterMonth> for u8 {
    fn from(month: EasterMonth) -> Self {
        month.number()
    }
}

/// Error for an Easter date built from untrusted parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EasterDateError {
    /// Month is neither March nor April.
    #[error("Invalid Easter month: {0} (must be {MARCH} or {APRIL})")]
    InvalidMonth(u8),

    /// Day does not exist in the given month.
    #[error("Invalid day {day} for {month}")]
    InvalidDay { month: EasterMonth, day: u8 },
}

/// The date of Easter Sunday within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{month} {day}")]
#[serde(try_from = "RawEasterDate")]
pub struct EasterDate {
    month: EasterMonth,
    day:   u8,
}

#[derive(Deserialize)]
struct RawEasterDate {
    month: u8,
    day:   u8,
}

impl TryFrom<RawEasterDate> for EasterDate {
    type Error = EasterDateError;

    fn try_from(raw: RawEasterDate) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.day)
    }
}

impl EasterDate {
    /// Creates an Easter date, validating month and day
    ///
    /// # Errors
    /// Returns `EasterDateError::InvalidMonth` unless the month is 3 or 4, and
    /// `EasterDateError::InvalidDay` if the day is outside that month.
    pub fn new(month: u8, day: u8) -> Result<Self, EasterDateError> {
        let month = EasterMonth::try_from(month)?;
        if !(MIN_DAY..=month.days()).contains(&day) {
            return Err(EasterDateError::InvalidDay { month, day });
        }
        Ok(Self { month, day })
    }

    // The formula only yields month 3 or 4 and a day in 1..=31.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const fn from_computus(month: i64, day: i64) -> Self {
        debug_assert!(month == MARCH as i64 || month == APRIL as i64);
        debug_assert!(day >= MIN_DAY as i64 && day <= DAYS_IN_MARCH as i64);

        let month = if month == MARCH as i64 {
            EasterMonth::March
        } else {
            EasterMonth::April
        };
        Self {
            month,
            day: day as u8,
        }
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> EasterMonth {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as plain numbers
    pub const fn to_pair(&self) -> (u8, u8) {
        (self.month.number(), self.day)
    }
}

/// Renders the one-line answer used by the text prompt.
pub fn sentence(year: Year, date: EasterDate) -> String {
    format!("In {year}, Easter Sunday falls on {date}.")
}

/// Renders the answer shown by the form, with the date on its own line.
pub fn form_sentence(year: Year, date: EasterDate) -> String {
    format!("In {year}, Easter Sunday falls on\n{date}.")
}
