/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for April
pub const APRIL: u8 = 4;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Days in March, the latest possible March Easter is the 31st
pub const DAYS_IN_MARCH: u8 = 31;
/// Days in April
pub const DAYS_IN_APRIL: u8 = 30;

/// First full year of the Gregorian calendar
pub const GREGORIAN_EPOCH: i64 = 1583;

/// Length of the lunar (Metonic) cycle in years
pub(crate) const METONIC_CYCLE: i64 = 19;
/// Years per century
pub(crate) const CENTURY: i64 = 100;

/// Number of digits the form field accepts
pub const YEAR_FIELD_WIDTH: usize = 4;

/// Prompt shown by the text front-end
pub const PROMPT_TEXT: &str = "Enter a year (e.g., 2028): ";

/// Rejection shown when text cannot be read as a whole number
pub const NOT_A_NUMBER_MESSAGE: &str = "Please enter a valid whole number for the year.";
/// Rejection shown when the form field is not exactly four digits
pub const NOT_FOUR_DIGITS_MESSAGE: &str = "Please enter a valid 4-digit year.";

/// Form window title
pub const FORM_TITLE: &str = "Easter Date Calculator";
/// Form subtitle naming the algorithm
pub const FORM_SUBTITLE: &str = "Using the Meeus/Jones/Butcher Algorithm";
/// Label next to the year field
pub const FORM_FIELD_LABEL: &str = "Enter a 4-Digit Year:";
