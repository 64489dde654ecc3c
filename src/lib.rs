//! Date of Western (Gregorian) Easter Sunday, via the Meeus/Jones/Butcher
//! algorithm.
//!
//! [`easter_date`] is the whole computation: a pure integer function from a
//! year to `(month, day)`. Two front-ends sit on top of it, a one-shot text
//! [`prompt`] and a masked year [`form`]. Both share [`Year`] validation and
//! report bad input through [`InvalidYearInput`].
//!
//! # Examples
//!
//! ```
//! use easter_date::{easter, easter_date, month_name, Year};
//!
//! let (month, day) = easter_date(2028);
//! assert_eq!("April 16", format!("{} {day}", month_name(month)));
//!
//! let year: Year = "2024".parse().unwrap();
//! assert_eq!("March 31", easter(year).to_string());
//! ```

mod consts;
mod prelude;

pub mod computus;
pub mod config;
pub mod form;
pub mod prompt;
pub mod year;

pub use computus::{EasterDate, EasterDateError, EasterMonth, easter, easter_date, month_name};
pub use config::Settings;
pub use consts::*;
pub use year::{InvalidYearInput, Year};
