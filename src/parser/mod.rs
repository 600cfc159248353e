/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Lexical analysis of the gated input into a [`ParsedInput`] record.
//!
//! This stage classifies shapes only: a month of 13 or an hour of 25 passes
//! through untouched and is rejected later by the normalizers, which own all
//! semantic range checks.

mod date;
mod time;
mod zone;

use crate::calendar::CalendarSystem;
use crate::errors::{ConvertError, MissingDateSnafu, UnsupportedCalendarSnafu};
use snafu::ensure;

/// One lexed input, borrowing the original string. Each pipeline stage after
/// the parser consumes the previous record and builds its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParsedInput<'a> {
    pub calendar: CalendarSystem,
    pub date: DateParts,
    pub time: Option<TimeParts<'a>>,
    pub zone: Option<Zone<'a>>,
    /// The date portion of the input, kept for error reporting.
    pub date_text: &'a str,
    /// The whole original input, quoted in every error message.
    pub input: &'a str,
}

/// The three date shapes, one variant per ISO-8601 date format.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DateParts {
    /// `±YYYY[-MM[-DD]]` or `±YYYYMMDD`; absent month and day floor to 1.
    Calendar {
        year: i32,
        month: Option<u8>,
        day: Option<u8>,
    },
    /// `±YYYY-DDD` or `YYYYDDD`.
    Ordinal { year: i32, day_of_year: u16 },
    /// `±YYYY-Www[-D]` or `±YYYYWww[D]`; an absent weekday means Monday.
    Week {
        year: i32,
        week: u8,
        weekday: Option<u8>,
    },
}

impl DateParts {
    pub(crate) const fn year(&self) -> i32 {
        match self {
            Self::Calendar { year, .. } | Self::Ordinal { year, .. } | Self::Week { year, .. } => {
                *year
            }
        }
    }
}

/// Lexed time of day. The fraction, when present, belongs to the smallest
/// unit that was parsed and is kept as its raw digit string so the intended
/// precision survives to the truncation step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct TimeParts<'a> {
    pub hour: u8,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub fraction: Option<&'a str>,
}

/// The unit the time fraction scales: the smallest unit present.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FractionalUnit {
    Hour,
    Minute,
    Second,
}

impl TimeParts<'_> {
    pub(crate) const fn fractional_unit(&self) -> FractionalUnit {
        if self.second.is_some() {
            FractionalUnit::Second
        } else if self.minute.is_some() {
            FractionalUnit::Minute
        } else {
            FractionalUnit::Hour
        }
    }
}

/// Lexed zone designator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Zone<'a> {
    Utc,
    Offset {
        negative: bool,
        hours: u8,
        minutes: Option<u8>,
        /// Fractional hours, as the raw digit string of `±hh.dddd`.
        fraction: Option<&'a str>,
        /// The whole designator as written, for error reporting.
        text: &'a str,
    },
}

/// Lexes the input: calendar prefix, date/time split on the first `T`, zone
/// split, then per-portion shape classification.
pub(crate) fn parse(input: &str) -> Result<ParsedInput<'_>, ConvertError> {
    let bytes = input.as_bytes();

    // A leading lowercase token immediately followed by ':' names the
    // calendar system; its absence means Gregorian.
    let mut alpha = 0;
    while alpha < bytes.len() && bytes[alpha].is_ascii_lowercase() {
        alpha += 1;
    }
    let (calendar, datetime) = if alpha > 0 && alpha < bytes.len() && bytes[alpha] == b':' {
        let name = &input[..alpha];
        match CalendarSystem::from_name(name) {
            Some(cal) => (cal, &input[alpha + 1..]),
            None => {
                return UnsupportedCalendarSnafu {
                    calendar: name,
                    input,
                }
                .fail()
            }
        }
    } else {
        (CalendarSystem::Gregorian, input)
    };

    let (date_text, after_t) = match datetime.find('T') {
        Some(idx) => (&datetime[..idx], Some(&datetime[idx + 1..])),
        None => (datetime, None),
    };
    ensure!(!date_text.is_empty(), MissingDateSnafu { input });

    let date = match date::parse_date(date_text, input) {
        Ok(date) => date,
        Err(error) => {
            // A lone zone designator carries no date at all; report that
            // rather than a format mismatch.
            if after_t.is_none() && zone::is_zone_only(date_text) {
                return MissingDateSnafu { input }.fail();
            }
            return Err(error);
        }
    };

    let (time, zone) = match after_t {
        None => (None, None),
        Some(rest) => {
            let (time_text, zone) = zone::split_zone(rest, input)?;
            let time = time::parse_time(time_text, input)?;
            (Some(time), zone)
        }
    };

    Ok(ParsedInput {
        calendar,
        date,
        time,
        zone,
        date_text,
        input,
    })
}
