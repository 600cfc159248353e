/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::DateParts;
use crate::errors::{AmbiguousDateSnafu, ConvertError, FormatSnafu};

/// Detects the date format and lexes its parts. Patterns are tried in a
/// fixed global precedence: calendar forms, then ordinal, then week. Two
/// deliberate digit-count rules resolve the compact-form ambiguities:
/// exactly six unsigned digits are rejected as ambiguous `YYYYMM`, and
/// exactly seven unsigned digits are always ordinal `YYYYDDD`.
pub(super) fn parse_date(text: &str, input: &str) -> Result<DateParts, ConvertError> {
    let bytes = text.as_bytes();
    let signed = matches!(bytes.first(), Some(b'+') | Some(b'-'));
    let negative = bytes.first() == Some(&b'-');
    let year_start = usize::from(signed);
    let mut year_len = 0;
    while year_start + year_len < bytes.len() && bytes[year_start + year_len].is_ascii_digit() {
        year_len += 1;
    }
    if year_len == 0 {
        return fail(text, input);
    }
    let rest = &bytes[year_start + year_len..];

    let year_of = |len: usize| -> Result<i32, ConvertError> {
        let year: i32 = int(&bytes[year_start..year_start + len], text, input)?;
        Ok(if negative { -year } else { year })
    };

    // Calendar: ±YYYY-MM-DD.
    if (1..=6).contains(&year_len)
        && rest.len() == 6
        && rest[0] == b'-'
        && all_digits(&rest[1..3])
        && rest[3] == b'-'
        && all_digits(&rest[4..6])
    {
        return Ok(DateParts::Calendar {
            year: year_of(year_len)?,
            month: Some(int(&rest[1..3], text, input)?),
            day: Some(int(&rest[4..6], text, input)?),
        });
    }

    // Calendar: ±YYYY-MM.
    if (1..=6).contains(&year_len) && rest.len() == 3 && rest[0] == b'-' && all_digits(&rest[1..3])
    {
        return Ok(DateParts::Calendar {
            year: year_of(year_len)?,
            month: Some(int(&rest[1..3], text, input)?),
            day: None,
        });
    }

    // Exactly six unsigned digits: ambiguous by design.
    if !signed && year_len == 6 && rest.is_empty() {
        return AmbiguousDateSnafu { input }.fail();
    }

    // Calendar: ±YYYY year only. Seven digits require an explicit sign; the
    // unsigned seven-digit run belongs to the ordinal form below.
    if rest.is_empty() && ((1..=6).contains(&year_len) || (signed && year_len == 7)) {
        return Ok(DateParts::Calendar {
            year: year_of(year_len)?,
            month: None,
            day: None,
        });
    }

    // Calendar: ±YYYYMMDD.
    if rest.is_empty() && year_len == 8 {
        return Ok(DateParts::Calendar {
            year: year_of(4)?,
            month: Some(int(&bytes[year_start + 4..year_start + 6], text, input)?),
            day: Some(int(&bytes[year_start + 6..year_start + 8], text, input)?),
        });
    }

    // Ordinal: ±YYYY-DDD.
    if (1..=6).contains(&year_len) && rest.len() == 4 && rest[0] == b'-' && all_digits(&rest[1..4])
    {
        return Ok(DateParts::Ordinal {
            year: year_of(year_len)?,
            day_of_year: int(&rest[1..4], text, input)?,
        });
    }

    // Ordinal: YYYYDDD, the seven-digit exception.
    if !signed && year_len == 7 && rest.is_empty() {
        return Ok(DateParts::Ordinal {
            year: year_of(4)?,
            day_of_year: int(&bytes[4..7], text, input)?,
        });
    }

    // Week: ±YYYY-Www and ±YYYY-Www-D.
    if (1..=6).contains(&year_len)
        && rest.len() >= 4
        && rest[0] == b'-'
        && rest[1] == b'W'
        && all_digits(&rest[2..4])
    {
        let week = int(&rest[2..4], text, input)?;
        if rest.len() == 4 {
            return Ok(DateParts::Week {
                year: year_of(year_len)?,
                week,
                weekday: None,
            });
        }
        if rest.len() == 6 && rest[4] == b'-' && rest[5].is_ascii_digit() {
            return Ok(DateParts::Week {
                year: year_of(year_len)?,
                week,
                weekday: Some(rest[5] - b'0'),
            });
        }
    }

    // Week: ±YYYYWww and ±YYYYWwwD.
    if year_len == 4 && rest.len() >= 3 && rest[0] == b'W' && all_digits(&rest[1..3]) {
        let week = int(&rest[1..3], text, input)?;
        if rest.len() == 3 {
            return Ok(DateParts::Week {
                year: year_of(4)?,
                week,
                weekday: None,
            });
        }
        if rest.len() == 4 && rest[3].is_ascii_digit() {
            return Ok(DateParts::Week {
                year: year_of(4)?,
                week,
                weekday: Some(rest[3] - b'0'),
            });
        }
    }

    fail(text, input)
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

fn int<T: lexical_core::FromLexical>(
    bytes: &[u8],
    text: &str,
    input: &str,
) -> Result<T, ConvertError> {
    lexical_core::parse(bytes).map_err(|_| {
        FormatSnafu {
            component: "date",
            value: text,
            input,
        }
        .build()
    })
}

fn fail(text: &str, input: &str) -> Result<DateParts, ConvertError> {
    FormatSnafu {
        component: "date",
        value: text,
        input,
    }
    .fail()
}
