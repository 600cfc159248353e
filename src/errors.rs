/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::Snafu;

/// ConvertError is the closed set of failures a conversion can produce.
///
/// Every variant renders as a single line of text naming the offending
/// component and the original input. Only the first error encountered during
/// a conversion is ever reported; the validation order is pinned by the
/// integration tests.
#[derive(Clone, Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConvertError {
    /// The whole input is longer than 100 characters.
    #[snafu(display("Input exceeds maximum length of 100 characters: '{truncated}...'"))]
    InputLength { truncated: String },

    /// A sub-component (year digits, fractional digits, calendar indicator)
    /// is longer than its limit.
    #[snafu(display(
        "{component} component exceeds maximum length of {limit} {units}: '{value}' in input '{input}'"
    ))]
    ComponentLength {
        component: &'static str,
        limit: usize,
        units: &'static str,
        value: String,
        input: String,
    },

    /// The input does not match any recognised ISO-8601 variant.
    #[snafu(display("Invalid {component} '{value}' in input '{input}'"))]
    Format {
        component: &'static str,
        value: String,
        input: String,
    },

    /// Exactly six unsigned digits: `YYYYMM` cannot be told apart from
    /// `YYMMDD` and is rejected by design.
    #[snafu(display("Ambiguous date format 'YYYYMM' in input '{input}'"))]
    AmbiguousDate { input: String },

    /// The calendar indicator is not one of the seven supported names.
    #[snafu(display("Unsupported calendar system '{calendar}' in input '{input}'"))]
    UnsupportedCalendar { calendar: String, input: String },

    /// Time-only or zone-only input.
    #[snafu(display("Missing date in input '{input}'"))]
    MissingDate { input: String },

    /// Year outside [-999999, +999999].
    #[snafu(display(
        "Year '{year}' outside supported range (-999999 to +999999) in input '{input}'"
    ))]
    YearRange { year: i32, input: String },

    /// A lexically valid component whose value is out of range.
    #[snafu(display("Invalid {component} '{value}' in input '{input}'"))]
    Component {
        component: &'static str,
        value: String,
        input: String,
    },
}
