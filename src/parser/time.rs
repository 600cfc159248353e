/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::TimeParts;
use crate::errors::{ConvertError, FormatSnafu};

/// Classifies the time portion. The accepted shapes, from most to least
/// specific, are `hh:mm:ss`, `hhmmss`, `hh:mm`, `hhmm`, and `hh`, each with
/// an optional `.digits` fraction that binds to the smallest unit present.
pub(super) fn parse_time<'a>(text: &'a str, input: &str) -> Result<TimeParts<'a>, ConvertError> {
    let (clock, fraction) = match text.find('.') {
        Some(idx) => {
            let digits = &text[idx + 1..];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return fail(text, input);
            }
            (&text[..idx], Some(digits))
        }
        None => (text, None),
    };

    let b = clock.as_bytes();
    let (hour, minute, second) = match b.len() {
        // hh
        2 if all_digits(b) => (int(&b[0..2], text, input)?, None, None),
        // hhmm
        4 if all_digits(b) => (
            int(&b[0..2], text, input)?,
            Some(int(&b[2..4], text, input)?),
            None,
        ),
        // hhmmss
        6 if all_digits(b) => (
            int(&b[0..2], text, input)?,
            Some(int(&b[2..4], text, input)?),
            Some(int(&b[4..6], text, input)?),
        ),
        // hh:mm
        5 if b[2] == b':' && all_digits(&b[0..2]) && all_digits(&b[3..5]) => (
            int(&b[0..2], text, input)?,
            Some(int(&b[3..5], text, input)?),
            None,
        ),
        // hh:mm:ss
        8 if b[2] == b':'
            && b[5] == b':'
            && all_digits(&b[0..2])
            && all_digits(&b[3..5])
            && all_digits(&b[6..8]) =>
        {
            (
                int(&b[0..2], text, input)?,
                Some(int(&b[3..5], text, input)?),
                Some(int(&b[6..8], text, input)?),
            )
        }
        _ => return fail(text, input),
    };

    Ok(TimeParts {
        hour,
        minute,
        second,
        fraction,
    })
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

fn int(bytes: &[u8], text: &str, input: &str) -> Result<u8, ConvertError> {
    lexical_core::parse(bytes).map_err(|_| {
        FormatSnafu {
            component: "time",
            value: text,
            input,
        }
        .build()
    })
}

fn fail(text: &str, input: &str) -> Result<TimeParts<'static>, ConvertError> {
    FormatSnafu {
        component: "time",
        value: text,
        input,
    }
    .fail()
}
