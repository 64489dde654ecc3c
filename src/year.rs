use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::consts::{GREGORIAN_EPOCH, NOT_A_NUMBER_MESSAGE, NOT_FOUR_DIGITS_MESSAGE, YEAR_FIELD_WIDTH};

/// Rejected year input. The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidYearInput {
    /// Nothing was entered.
    #[error("{}", NOT_A_NUMBER_MESSAGE)]
    Empty,

    /// Text is not a whole number.
    #[error("{}", NOT_A_NUMBER_MESSAGE)]
    NotANumber(String),

    /// Form field is not exactly four digits.
    #[error("{}", NOT_FOUR_DIGITS_MESSAGE)]
    NotFourDigits(String),

    /// Year precedes the Gregorian calendar.
    #[error("Please enter a year from {} onward (Gregorian calendar).", GREGORIAN_EPOCH)]
    BeforeGregorian(i64),
}

/// A year accepted by one of the front-ends.
///
/// In Gregorian mode the value is at least [`GREGORIAN_EPOCH`]. A proleptic
/// year may be any integer, including zero and negative values.
///
/// Deserialization always applies the Gregorian rule: a proleptic year
/// before 1583 serializes to its number but does not deserialize back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Year(i64);

impl Year {
    /// Creates a Gregorian year
    ///
    /// # Errors
    /// Returns `InvalidYearInput::BeforeGregorian` if the value is before 1583.
    pub fn gregorian(value: i64) -> Result<Self, InvalidYearInput> {
        if value < GREGORIAN_EPOCH {
            return Err(InvalidYearInput::BeforeGregorian(value));
        }
        Ok(Self(value))
    }

    /// Creates a year without any range check
    pub const fn proleptic(value: i64) -> Self {
        Self(value)
    }

    /// Creates a year under the range rule selected by `settings`
    ///
    /// # Errors
    /// Returns `InvalidYearInput::BeforeGregorian` in Gregorian mode for a
    /// value before 1583.
    pub fn with_settings(value: i64, settings: &Settings) -> Result<Self, InvalidYearInput> {
        if settings.proleptic {
            Ok(Self::proleptic(value))
        } else {
            Self::gregorian(value)
        }
    }

    /// Parses free text as typed at the prompt: any signed whole number,
    /// surrounding whitespace ignored.
    ///
    /// # Errors
    /// Returns `Empty` or `NotANumber` for unreadable text, and
    /// `BeforeGregorian` as described in [`Year::with_settings`].
    pub fn parse_text(text: &str, settings: &Settings) -> Result<Self, InvalidYearInput> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InvalidYearInput::Empty);
        }
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| InvalidYearInput::NotANumber(trimmed.to_owned()))?;
        Self::with_settings(value, settings)
    }

    /// Parses the contents of the form field: exactly four ASCII digits.
    ///
    /// # Errors
    /// Returns `NotFourDigits` for any other shape, and `BeforeGregorian` as
    /// described in [`Year::with_settings`].
    pub fn parse_field(text: &str, settings: &Settings) -> Result<Self, InvalidYearInput> {
        let trimmed = text.trim();
        if trimmed.len() != YEAR_FIELD_WIDTH || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidYearInput::NotFourDigits(trimmed.to_owned()));
        }
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| InvalidYearInput::NotFourDigits(trimmed.to_owned()))?;
        Self::with_settings(value, settings)
    }

    /// Returns the year value
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for Year {
    type Err = InvalidYearInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_text(s, &Settings::default())
    }
}

impl TryFrom<i64> for Year {
    type Error = InvalidYearInput;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::gregorian(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
