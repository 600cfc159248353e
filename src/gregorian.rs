/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Proleptic-Gregorian day arithmetic over the extended year range.
//!
//! Years are ISO-numbered: there is no year zero, `-1` (spelled `-0001`)
//! immediately precedes `1`. Leap years before the common era follow the
//! astronomical convention, so `-1`, `-5`, and `-401` are leap years while
//! `-4`, `-100`, and `-400` are not. All counting is closed-form: a date a
//! million years away costs the same as one in 1970.

use crate::Weekday;

/// Returns the usual days in a given month (ONE indexed, i.e. January is
/// month ONE and December is month 12).
///
/// # Warning
/// This will return 0 days if the month is invalid.
pub(crate) const fn usual_days_per_month(month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28,
        _ => 0,
    }
}

/// Prefix-sum of days counted up to the start of each month.
const CUMULATIVE_DAYS_FOR_MONTH: [u16; 12] = {
    let mut days = [0; 12];
    let mut month = 1;
    while month < 12 {
        days[month] = days[month - 1] + usual_days_per_month(month as u8) as u16;
        month += 1;
    }
    days
};

/// Prefix-sum of days counted up to the start of each month, leap years only.
const CUMULATIVE_DAYS_FOR_MONTH_LEAP_YEARS: [u16; 12] = {
    let mut days = [0; 12];
    let mut month = 1;
    while month < 12 {
        days[month] = days[month - 1] + usual_days_per_month(month as u8) as u16;
        if month == 2 {
            days[month] += 1;
        }
        month += 1;
    }
    days
};

/// Returns whether the provided ISO-numbered year is a leap year in the
/// proleptic Gregorian calendar.
///
/// Negative years use astronomical numbering (year `-1` is astronomical year
/// 0), so `-1` and `-5` are leap years while `-4` and `-100` are not.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    let cycle = if year < 0 { -(year + 1) } else { year };
    (cycle % 4 == 0 && cycle % 100 != 0) || cycle % 400 == 0
}

/// Returns the number of days in the provided month, honouring leap years.
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        usual_days_per_month(month)
    }
}

pub(crate) const fn cumulative_days(year: i32) -> &'static [u16; 12] {
    if is_leap_year(year) {
        &CUMULATIVE_DAYS_FOR_MONTH_LEAP_YEARS
    } else {
        &CUMULATIVE_DAYS_FOR_MONTH
    }
}

/// The year after `year`, skipping the nonexistent year zero.
pub(crate) const fn next_year(year: i32) -> i32 {
    if year == -1 {
        1
    } else {
        year + 1
    }
}

/// The year before `year`, skipping the nonexistent year zero.
pub(crate) const fn prev_year(year: i32) -> i32 {
    if year == 1 {
        -1
    } else {
        year - 1
    }
}

/// Leap years in `[1, n]` for `n >= 0`.
const fn leaps_through(n: i64) -> i64 {
    n / 4 - n / 100 + n / 400
}

/// Leap years in `{-n, ..., -1}` for `n >= 0`, under the astronomical rule.
const fn leaps_through_bce(n: i64) -> i64 {
    (n + 3) / 4 - (n + 99) / 100 + (n + 399) / 400
}

/// Number of leap years in the half-open range `[a, b)` of ISO-numbered
/// years, `a <= b`. Year zero never contributes: ranges spanning the era
/// boundary are split and summed.
pub(crate) const fn leap_count(a: i32, b: i32) -> i64 {
    let (a, b) = (a as i64, b as i64);
    if a >= 1 {
        leaps_through(b - 1) - leaps_through(a - 1)
    } else if b <= 0 {
        leaps_through_bce(-a) - leaps_through_bce(-b)
    } else {
        leaps_through_bce(-a) + leaps_through(b - 1)
    }
}

/// Days between 1970-01-01 and the provided date; negative before the epoch.
///
/// The day is not required to fall inside the month: an overflowing day
/// simply counts past the month's end, which is what lets `add_days` and the
/// calendar converters chain arithmetic through this single authority.
pub(crate) fn days_since_epoch(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year);
    let day_of_year =
        i64::from(cumulative_days(year)[(month - 1) as usize]) + i64::from(day) - 1;
    let year_start = if year >= 1970 {
        (y - 1970) * 365 + leap_count(1970, year)
    } else if year >= 1 {
        (y - 1970) * 365 - leap_count(year, 1970)
    } else {
        // Two legs: back from the epoch to year 1, then from year 1 across
        // the missing year zero down to `year`.
        -(-y * 365 + leap_count(year, 1)) - (1969 * 365 + leap_count(1, 1970))
    };
    year_start + day_of_year
}

/// Inverse of `days_since_epoch`: the calendar date `days` after 1970-01-01.
pub(crate) fn date_from_days(days: i64) -> (i32, u8, u8) {
    // Astronomical-year estimate, corrected by at most a couple of steps.
    let astro = 1970 + ((days as f64) / 365.2425).floor() as i64;
    let estimate = if astro <= 0 { astro - 1 } else { astro };
    let mut year = estimate as i32;
    while days < days_since_epoch(year, 1, 1) {
        year = prev_year(year);
    }
    loop {
        let next = next_year(year);
        if days >= days_since_epoch(next, 1, 1) {
            year = next;
        } else {
            break;
        }
    }

    let day_of_year = (days - days_since_epoch(year, 1, 1)) as u16;
    let cumul_days = cumulative_days(year);
    let month = match cumul_days.binary_search(&day_of_year) {
        Ok(index) => index + 1,
        Err(insertion_point) => insertion_point,
    };
    let day = day_of_year - cumul_days[month - 1] + 1;

    (year, month as u8, day as u8)
}

/// Advances (or retracts, for negative `n`) the date by `n` days.
pub(crate) fn add_days(year: i32, month: u8, day: u8, n: i64) -> (i32, u8, u8) {
    date_from_days(days_since_epoch(year, month, day) + n)
}

/// Day of the week via Zeller's congruence, mapped to ISO (Monday = 1).
///
/// Runs on astronomical numbering shifted by whole 400-year cycles to stay
/// positive; the Gregorian week pattern repeats exactly every 146097 days, so
/// the shift leaves the result untouched.
pub(crate) fn day_of_week(year: i32, month: u8, day: u8) -> Weekday {
    let astro = if year < 0 { year + 1 } else { year };
    let mut y = i64::from(astro) + 400 * 2600;
    let mut m = i64::from(month);
    if m <= 2 {
        m += 12;
        y -= 1;
    }
    let k = y % 100;
    let j = y / 100;
    // Saturday = 0 in Zeller's convention.
    let h = (i64::from(day) + 13 * (m + 1) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    Weekday::from((((h + 5) % 7) + 1) as u8)
}

/// Number of ISO weeks in the provided year: 53 when January 1 falls on a
/// Thursday, or on a Wednesday of a leap year; 52 otherwise.
pub(crate) fn max_iso_weeks(year: i32) -> u8 {
    let jan1 = day_of_week(year, 1, 1);
    if jan1 == Weekday::Thursday || (is_leap_year(year) && jan1 == Weekday::Wednesday) {
        53
    } else {
        52
    }
}

/// Days since the epoch of the Monday starting ISO week 1 of `year`, per the
/// ISO rule that week 1 is the week containing January 4.
pub(crate) fn iso_week_one_monday(year: i32) -> i64 {
    let jan4 = days_since_epoch(year, 1, 4);
    let dow = day_of_week(year, 1, 4).iso_number();
    jan4 - i64::from(dow - 1)
}
