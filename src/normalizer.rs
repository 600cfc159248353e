/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Date normalization: year-range and per-format component validation, and
//! resolution of ordinal and week dates into a canonical calendar date.
//! Validation order is strict — year range first, then components in the
//! order they appear in the format — and the first failure aborts.

use crate::errors::{ComponentSnafu, ConvertError, YearRangeSnafu};
use crate::gregorian::{
    cumulative_days, date_from_days, days_in_month, is_leap_year, iso_week_one_monday,
    max_iso_weeks,
};
use crate::parser::{DateParts, ParsedInput};
use crate::{MAX_YEAR, MIN_YEAR};
use snafu::ensure;

/// A validated proleptic-Gregorian date.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NormalizedDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

pub(crate) fn normalize_date(parsed: &ParsedInput<'_>) -> Result<NormalizedDate, ConvertError> {
    let input = parsed.input;
    // Year zero does not exist: -0001 flows straight into 0001.
    let year = parsed.date.year();
    ensure!(
        year != 0 && (MIN_YEAR..=MAX_YEAR).contains(&year),
        YearRangeSnafu { year, input }
    );

    match parsed.date {
        DateParts::Calendar { year, month, day } => {
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
                day >= 1 && day <= days_in_month(year, month),
                ComponentSnafu {
                    component: "day",
                    value: format!("{day:02}"),
                    input,
                }
            );
            Ok(NormalizedDate { year, month, day })
        }
        DateParts::Ordinal { year, day_of_year } => {
            let max = if is_leap_year(year) { 366 } else { 365 };
            ensure!(
                (1..=max).contains(&day_of_year),
                ComponentSnafu {
                    component: "ordinal day",
                    value: format!("{day_of_year:03}"),
                    input,
                }
            );
            let cumul_days = cumulative_days(year);
            let zero_based = day_of_year - 1;
            let month = match cumul_days.binary_search(&zero_based) {
                Ok(index) => index + 1,
                Err(insertion_point) => insertion_point,
            };
            let day = zero_based - cumul_days[month - 1] + 1;
            Ok(NormalizedDate {
                year,
                month: month as u8,
                day: day as u8,
            })
        }
        DateParts::Week {
            year,
            week,
            weekday,
        } => {
            ensure!(
                week >= 1 && week <= max_iso_weeks(year),
                ComponentSnafu {
                    component: "week",
                    value: format!("{week:02}"),
                    input,
                }
            );
            let weekday = weekday.unwrap_or(1);
            ensure!(
                (1..=7).contains(&weekday),
                ComponentSnafu {
                    component: "weekday",
                    value: format!("{weekday}"),
                    input,
                }
            );
            // Week 1 is the week containing January 4; the resolved date may
            // cross into the previous or next Gregorian year.
            let days = iso_week_one_monday(year)
                + i64::from(week - 1) * 7
                + i64::from(weekday - 1);
            let (year, month, day) = date_from_days(days);
            Ok(NormalizedDate { year, month, day })
        }
    }
}
