/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Time and zone normalization: range checks, exact integer-nanosecond
//! conversion of the fractional unit, offset resolution, and the single-day
//! rollover that folds `local − offset` back into the civil day.
//!
//! Everything here is integer arithmetic. A fraction of at most nine digits
//! scales to whole nanoseconds even on the minute and hour units (the ×60
//! and ×3600 products shorten the decimal part), so the mandated truncation
//! semantics hold with no rounding anywhere.

use crate::errors::{ComponentSnafu, ConvertError};
use crate::gregorian::add_days;
use crate::normalizer::NormalizedDate;
use crate::parser::{FractionalUnit, ParsedInput, TimeParts, Zone};
use crate::{NANOSECONDS_PER_DAY, NANOSECONDS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use snafu::ensure;

/// Time of day in UTC after zone application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NormalizedTime {
    /// Nanoseconds since midnight. After the rollover this sits in
    /// `[0, 86 401 s)`; only a leap second can keep it at or above the
    /// 86 400 s mark, and the epoch stage folds that into the next day.
    pub nanos_of_day: i64,
    /// Whether the output must render as a decimal rather than an integer.
    pub has_fractional: bool,
}

pub(crate) fn normalize_time(
    parsed: &ParsedInput<'_>,
    date: NormalizedDate,
) -> Result<(NormalizedDate, NormalizedTime), ConvertError> {
    let input = parsed.input;

    let (local_nanos, fraction_present) = match &parsed.time {
        None => (0, false),
        Some(time) => (time_nanos(time, input)?, time.fraction.is_some()),
    };

    let offset_nanos = match &parsed.zone {
        None | Some(Zone::Utc) => 0,
        Some(zone) => zone_nanos(zone, input)?,
    };

    let mut date = date;
    let mut utc_nanos = local_nanos - offset_nanos;
    if utc_nanos < 0 {
        utc_nanos += NANOSECONDS_PER_DAY;
        date = shifted(date, -1);
    } else if utc_nanos >= NANOSECONDS_PER_DAY {
        utc_nanos -= NANOSECONDS_PER_DAY;
        date = shifted(date, 1);
    }

    let has_fractional = fraction_present || utc_nanos % NANOSECONDS_PER_SECOND != 0;
    Ok((
        date,
        NormalizedTime {
            nanos_of_day: utc_nanos,
            has_fractional,
        },
    ))
}

/// Validates the time parts and converts them to nanoseconds since local
/// midnight. A second of 60 is accepted anywhere; at 23:59:60 it pushes the
/// value to the 86 400 s mark, which the later stages fold forward.
fn time_nanos(time: &TimeParts<'_>, input: &str) -> Result<i64, ConvertError> {
    let hour = time.hour;
    let minute = time.minute.unwrap_or(0);
    let second = time.second.unwrap_or(0);
    ensure!(
        hour <= 23,
        ComponentSnafu {
            component: "hour",
            value: format!("{hour:02}"),
            input,
        }
    );
    ensure!(
        minute <= 59,
        ComponentSnafu {
            component: "minute",
            value: format!("{minute:02}"),
            input,
        }
    );
    ensure!(
        second <= 60,
        ComponentSnafu {
            component: "second",
            value: format!("{second:02}"),
            input,
        }
    );

    let whole = i64::from(hour) * SECONDS_PER_HOUR
        + i64::from(minute) * SECONDS_PER_MINUTE
        + i64::from(second);
    let mut nanos = whole * NANOSECONDS_PER_SECOND;
    if let Some(digits) = time.fraction {
        let unit_nanos = fraction_unit_nanos(digits);
        nanos += match time.fractional_unit() {
            FractionalUnit::Second => unit_nanos,
            FractionalUnit::Minute => unit_nanos * SECONDS_PER_MINUTE,
            FractionalUnit::Hour => unit_nanos * SECONDS_PER_HOUR,
        };
    }
    Ok(nanos)
}

/// Validates the zone and converts it to signed offset nanoseconds.
fn zone_nanos(zone: &Zone<'_>, input: &str) -> Result<i64, ConvertError> {
    let Zone::Offset {
        negative,
        hours,
        minutes,
        fraction,
        text,
    } = zone
    else {
        return Ok(0);
    };
    let out_of_range = ComponentSnafu {
        component: "timezone offset",
        value: *text,
        input,
    };
    if let Some(minutes) = minutes {
        ensure!(*minutes <= 59, out_of_range);
    }
    let mut nanos = (i64::from(*hours) * SECONDS_PER_HOUR
        + i64::from(minutes.unwrap_or(0)) * SECONDS_PER_MINUTE)
        * NANOSECONDS_PER_SECOND;
    if let Some(digits) = fraction {
        nanos += offset_fraction_nanos(digits);
    }
    ensure!(nanos < NANOSECONDS_PER_DAY, out_of_range);
    Ok(if *negative { -nanos } else { nanos })
}

/// Nanoseconds-of-unit encoded by a fraction digit string of one through
/// nine digits: `.5` is 500 000 000, `.123456789` is 123 456 789.
fn fraction_unit_nanos(digits: &str) -> i64 {
    let mut nanos: i64 = 0;
    for b in digits.bytes().take(9) {
        nanos = nanos * 10 + i64::from(b - b'0');
    }
    nanos * 10_i64.pow(9 - digits.len().min(9) as u32)
}

/// Nanoseconds encoded by a fractional-hour offset string of one through
/// four digits: `.25` is a quarter hour, 900 s.
fn offset_fraction_nanos(digits: &str) -> i64 {
    let mut value: i64 = 0;
    for b in digits.bytes().take(4) {
        value = value * 10 + i64::from(b - b'0');
    }
    // 3600e9 nanoseconds per hour, pre-divided by the fraction's scale.
    value * (SECONDS_PER_HOUR * NANOSECONDS_PER_SECOND / 10_i64.pow(digits.len().min(4) as u32))
}

fn shifted(date: NormalizedDate, days: i64) -> NormalizedDate {
    let (year, month, day) = add_days(date.year, date.month, date.day, days);
    NormalizedDate { year, month, day }
}
