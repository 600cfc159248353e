/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::fmt;
use core::str::FromStr;

use crate::errors::ConvertError;
use crate::gregorian::{add_days, days_since_epoch};
use crate::normalizer::NormalizedDate;
use crate::timezone::NormalizedTime;
use crate::{calendar, limits, normalizer, parser, timezone};
use crate::{NANOSECONDS_PER_DAY, NANOSECONDS_PER_SECOND};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A Unix epoch instant in UTC: the result of a conversion.
///
/// The instant is `seconds + nanoseconds·10⁻⁹` with the floor convention, so
/// half a second before the epoch is `seconds = -1, nanoseconds =
/// 500_000_000`. Whether it renders as an integer or as a decimal is part of
/// the value: an input with any fractional component stays fractional even
/// when the fraction is zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixEpoch {
    seconds: i64,
    nanoseconds: u32,
    fractional: bool,
}

/// Converts one ISO-8601 or alternative-calendar date-time string into its
/// Unix epoch value in UTC seconds.
///
/// This is a pure transform: no ambient clock, locale, or time zone is
/// consulted, and repeated invocation on the same input is bit-identical.
/// The first error encountered aborts the pipeline and is the only one
/// reported.
///
/// # Example
/// ```
/// use isochron::convert;
///
/// assert_eq!(convert("2024-11-28").unwrap().to_string(), "1732752000");
/// assert_eq!(
///     convert("2024-11-28T12:34:56.789Z").unwrap().to_string(),
///     "1732797296.789"
/// );
/// assert_eq!(
///     convert("202511").unwrap_err().to_string(),
///     "Ambiguous date format 'YYYYMM' in input '202511'"
/// );
/// ```
pub fn convert(input: &str) -> Result<UnixEpoch, ConvertError> {
    limits::check(input)?;
    let parsed = parser::parse(input)?;
    let parsed = calendar::to_gregorian(parsed)?;
    let date = normalizer::normalize_date(&parsed)?;
    let (date, time) = timezone::normalize_time(&parsed, date)?;
    Ok(assemble(date, time))
}

/// Folds a pending leap second forward and assembles the final value.
fn assemble(date: NormalizedDate, time: NormalizedTime) -> UnixEpoch {
    let mut date = date;
    let mut nanos_of_day = time.nanos_of_day;
    if nanos_of_day >= NANOSECONDS_PER_DAY {
        // 23:59:60 reads as the first instant of the following day. This
        // runs after the zone rollover, so the two compose into at most two
        // day steps.
        nanos_of_day -= NANOSECONDS_PER_DAY;
        let (year, month, day) = add_days(date.year, date.month, date.day, 1);
        date = NormalizedDate { year, month, day };
    }

    let days = days_since_epoch(date.year, date.month, date.day);
    let total = i128::from(days) * i128::from(NANOSECONDS_PER_DAY) + i128::from(nanos_of_day);
    UnixEpoch {
        seconds: total.div_euclid(i128::from(NANOSECONDS_PER_SECOND)) as i64,
        nanoseconds: total.rem_euclid(i128::from(NANOSECONDS_PER_SECOND)) as u32,
        fractional: time.has_fractional,
    }
}

impl UnixEpoch {
    /// Whole seconds and forward-counting nanoseconds, floor convention.
    #[must_use]
    pub const fn to_parts(&self) -> (i64, u32) {
        (self.seconds, self.nanoseconds)
    }

    /// The instant as a floating-point number of seconds.
    ///
    /// Nine fractional digits exceed what an `f64` can hold once the integer
    /// part spans years; use [`UnixEpoch::to_parts`] or the `Display`
    /// rendering when every digit matters.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.nanoseconds) * 1e-9
    }

    /// Whether the input carried a fractional component, making this value
    /// render as a decimal rather than an integer.
    #[must_use]
    pub const fn is_fractional(&self) -> bool {
        self.fractional
    }
}

impl fmt::Display for UnixEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.fractional {
            return write!(f, "{}", self.seconds);
        }
        let total =
            i128::from(self.seconds) * i128::from(NANOSECONDS_PER_SECOND) + i128::from(self.nanoseconds);
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        let whole = magnitude / NANOSECONDS_PER_SECOND as u128;
        let mut fraction = format!("{:09}", magnitude % NANOSECONDS_PER_SECOND as u128);
        while fraction.len() > 1 && fraction.ends_with('0') {
            fraction.pop();
        }
        write!(f, "{sign}{whole}.{fraction}")
    }
}

impl FromStr for UnixEpoch {
    type Err = ConvertError;

    /// Parses via [`convert`].
    ///
    /// # Example
    /// ```
    /// use isochron::UnixEpoch;
    ///
    /// let epoch: UnixEpoch = "2016-12-31T23:59:60Z".parse().unwrap();
    /// assert_eq!(epoch.to_parts(), (1_483_228_800, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        convert(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for UnixEpoch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UnixEpoch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Round-tripping a rendered value: an integer or decimal string is
        // not itself a date, so re-render via the epoch arithmetic.
        Self::from_serialized(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl UnixEpoch {
    /// Rebuilds a value from its `Display` rendering.
    fn from_serialized(s: &str) -> Result<Self, ConvertError> {
        use crate::errors::FormatSnafu;
        let build_error = || {
            FormatSnafu {
                component: "epoch value",
                value: s,
                input: s,
            }
            .build()
        };
        match s.split_once('.') {
            None => {
                let seconds = s.parse::<i64>().map_err(|_| build_error())?;
                Ok(Self {
                    seconds,
                    nanoseconds: 0,
                    fractional: false,
                })
            }
            Some((whole, fraction)) => {
                if fraction.is_empty()
                    || fraction.len() > 9
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(build_error());
                }
                let negative = whole.starts_with('-');
                let whole = whole.parse::<i64>().map_err(|_| build_error())?;
                let mut nanos: i64 = 0;
                for b in fraction.bytes() {
                    nanos = nanos * 10 + i64::from(b - b'0');
                }
                nanos *= 10_i64.pow(9 - fraction.len() as u32);
                let total = whole * crate::NANOSECONDS_PER_SECOND
                    + if negative { -nanos } else { nanos };
                Ok(Self {
                    seconds: total.div_euclid(crate::NANOSECONDS_PER_SECOND),
                    nanoseconds: total.rem_euclid(crate::NANOSECONDS_PER_SECOND) as u32,
                    fractional: true,
                })
            }
        }
    }
}
