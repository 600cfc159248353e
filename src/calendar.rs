/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Alternative calendar systems and their conversion to the proleptic
//! Gregorian calendar.
//!
//! Buddhist and Julian conversions are exact (the Julian one up to the
//! centurial day offset it is defined by). Persian, Islamic, Hebrew, and
//! Chinese conversions use mean-year arithmetic anchored at each calendar's
//! epoch: they are deliberately not astronomical, and drift away from
//! observed calendars by the mean-year error as dates move far from the
//! anchor.

use core::fmt;
use core::str::FromStr;

use crate::errors::{ComponentSnafu, ConvertError, FormatSnafu};
use crate::gregorian::{add_days, next_year};
use crate::parser::{DateParts, ParsedInput};
use snafu::ensure;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// The supported calendar systems, selected by a lowercase input prefix such
/// as `julian:`. Absence of a prefix means [`CalendarSystem::Gregorian`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarSystem {
    Gregorian,
    Julian,
    Islamic,
    Buddhist,
    Hebrew,
    Persian,
    Chinese,
}

impl Default for CalendarSystem {
    fn default() -> Self {
        Self::Gregorian
    }
}

impl CalendarSystem {
    /// Looks up the lowercase indicator token; `None` for unsupported names.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "gregorian" => Some(Self::Gregorian),
            "julian" => Some(Self::Julian),
            "islamic" => Some(Self::Islamic),
            "buddhist" => Some(Self::Buddhist),
            "hebrew" => Some(Self::Hebrew),
            "persian" => Some(Self::Persian),
            "chinese" => Some(Self::Chinese),
            _ => None,
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = ConvertError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            crate::errors::UnsupportedCalendarSnafu {
                calendar: s,
                input: s,
            }
            .build()
        })
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gregorian => "gregorian",
            Self::Julian => "julian",
            Self::Islamic => "islamic",
            Self::Buddhist => "buddhist",
            Self::Hebrew => "hebrew",
            Self::Persian => "persian",
            Self::Chinese => "chinese",
        };
        write!(f, "{name}")
    }
}

/// Mean length of the Persian solar year, in days.
const PERSIAN_MEAN_YEAR: f64 = 365.2422;
/// Mean length of the Islamic lunar year, in days.
const ISLAMIC_MEAN_YEAR: f64 = 354.36667;
/// Mean length of the Hebrew lunisolar year, in days.
const HEBREW_MEAN_YEAR: f64 = 365.2468;
/// Mean length of a Chinese lunar month, in days.
const CHINESE_MEAN_MONTH: f64 = 29.53;

/// Days before each Persian month: six 31-day months, then 30-day months.
const PERSIAN_MONTH_OFFSETS: [u16; 12] =
    [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];
/// Days before each month in the tabular 30/29 alternation shared by the
/// Islamic and Hebrew mean-year conversions.
const LUNAR_MONTH_OFFSETS: [u16; 12] = [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325];

/// Proleptic-Gregorian anchor of the Persian calendar (1 Farvardin 1).
const PERSIAN_EPOCH: (i32, u8, u8) = (622, 3, 22);
/// Proleptic-Gregorian anchor of the Islamic calendar (1 Muharram 1).
const ISLAMIC_EPOCH: (i32, u8, u8) = (622, 7, 16);
/// Proleptic-Gregorian anchor of the Hebrew calendar (1 Tishrei 1), in ISO
/// numbering: the traditional anchor year 3761 BCE.
const HEBREW_EPOCH: (i32, u8, u8) = (-3761, 10, 7);

/// Reinterprets the date parts of the named calendar as proleptic-Gregorian
/// parts; identity for Gregorian. Ordinal and week shapes are defined on the
/// ISO calendar only, so they reject any other system.
pub(crate) fn to_gregorian(parsed: ParsedInput<'_>) -> Result<ParsedInput<'_>, ConvertError> {
    if parsed.calendar == CalendarSystem::Gregorian {
        return Ok(parsed);
    }
    let input = parsed.input;
    let DateParts::Calendar { year, month, day } = parsed.date else {
        return FormatSnafu {
            component: "date",
            value: parsed.date_text,
            input,
        }
        .fail();
    };
    let month = month.unwrap_or(1);
    let day = day.unwrap_or(1);
    ensure!(
        (1..=12).contains(&month),
        ComponentSnafu {
            component: "month",
            value: format!("{month:02}"),
            input,
        }
    );
    ensure!(
        day >= 1,
        ComponentSnafu {
            component: "day",
            value: format!("{day:02}"),
            input,
        }
    );

    let (year, month, day) = match parsed.calendar {
        CalendarSystem::Gregorian => (year, month, day),
        CalendarSystem::Buddhist => (era_shifted(year, 543), month, day),
        CalendarSystem::Julian => {
            // Centurial offset between the calendars: c - c/4 - 2 days,
            // where c is the century of the astronomical year.
            let astro = i64::from(if year < 0 { year + 1 } else { year });
            let century = astro.div_euclid(100);
            let offset = century - century.div_euclid(4) - 2;
            add_days(year, month, day, offset)
        }
        CalendarSystem::Persian => mean_year_date(
            PERSIAN_EPOCH,
            PERSIAN_MEAN_YEAR,
            &PERSIAN_MONTH_OFFSETS,
            year,
            month,
            day,
        ),
        CalendarSystem::Islamic => mean_year_date(
            ISLAMIC_EPOCH,
            ISLAMIC_MEAN_YEAR,
            &LUNAR_MONTH_OFFSETS,
            year,
            month,
            day,
        ),
        CalendarSystem::Hebrew => mean_year_date(
            HEBREW_EPOCH,
            HEBREW_MEAN_YEAR,
            &LUNAR_MONTH_OFFSETS,
            year,
            month,
            day,
        ),
        CalendarSystem::Chinese => {
            let mut base_year = era_shifted(year, 2698);
            let mut day_in_year = (45.0
                + f64::from(month - 1) * CHINESE_MEAN_MONTH
                + f64::from(day - 1))
            .floor() as i64;
            if day_in_year > 365 {
                base_year = next_year(base_year);
                day_in_year -= 365;
            }
            add_days(base_year, 1, 1, day_in_year - 1)
        }
    };

    Ok(ParsedInput {
        date: DateParts::Calendar {
            year,
            month: Some(month),
            day: Some(day),
        },
        ..parsed
    })
}

/// Subtracts an era offset from the year, stepping over the nonexistent ISO
/// year zero (astronomical 0 and below shift one further down).
const fn era_shifted(year: i32, era: i32) -> i32 {
    let shifted = year - era;
    if shifted <= 0 {
        shifted - 1
    } else {
        shifted
    }
}

/// Whole days from the anchor under a mean-year approximation, resolved to a
/// Gregorian date. The product is floored toward negative infinity so the
/// mapping is monotonic on both sides of the anchor.
fn mean_year_date(
    epoch: (i32, u8, u8),
    mean_year: f64,
    month_offsets: &[u16; 12],
    year: i32,
    month: u8,
    day: u8,
) -> (i32, u8, u8) {
    let days = (f64::from(year - 1) * mean_year
        + f64::from(month_offsets[(month - 1) as usize])
        + f64::from(day - 1))
    .floor() as i64;
    add_days(epoch.0, epoch.1, epoch.2, days)
}
