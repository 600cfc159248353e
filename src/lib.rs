#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]
/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Smallest supported year; `-0001` is 1 BCE, there is no year zero.
pub const MIN_YEAR: i32 = -999_999;
/// Largest supported year.
pub const MAX_YEAR: i32 = 999_999;
/// Maximum length of the whole input, in characters.
pub const MAX_INPUT_LENGTH: usize = 100;
/// Maximum number of year digits (a sign does not count).
pub const MAX_YEAR_DIGITS: usize = 7;
/// Maximum number of fractional digits on the time, whichever unit carries
/// the fraction.
pub const MAX_FRACTION_DIGITS: usize = 9;
/// Maximum number of fractional digits on a `±hh.dddd` zone offset.
pub const MAX_OFFSET_FRACTION_DIGITS: usize = 4;
/// Maximum length of the calendar indicator token, in characters.
pub const MAX_CALENDAR_INDICATOR_LENGTH: usize = 20;
/// `SECONDS_PER_MINUTE` defines the number of seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;
/// `SECONDS_PER_HOUR` defines the number of seconds per hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;
/// `SECONDS_PER_DAY` defines the number of seconds per day.
pub const SECONDS_PER_DAY: i64 = 86_400;
/// `NANOSECONDS_PER_SECOND` defines the number of nanoseconds per second.
pub const NANOSECONDS_PER_SECOND: i64 = 1_000_000_000;
/// `NANOSECONDS_PER_DAY` defines the number of nanoseconds per day.
pub const NANOSECONDS_PER_DAY: i64 = SECONDS_PER_DAY * NANOSECONDS_PER_SECOND;

pub mod errors;
pub use errors::ConvertError;

mod limits;
mod parser;

mod calendar;
pub use calendar::CalendarSystem;

mod gregorian;
pub use gregorian::{days_in_month, is_leap_year};

mod weekday;
pub use weekday::Weekday;

mod normalizer;
mod timezone;

mod epoch;
pub use epoch::{convert, UnixEpoch};

pub mod prelude {
    pub use crate::{convert, CalendarSystem, ConvertError, UnixEpoch, Weekday};
}
