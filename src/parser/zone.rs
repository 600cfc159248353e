/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::Zone;
use crate::errors::{ConvertError, FormatSnafu};

/// Splits the portion after `T` into the time text and an optional zone: the
/// trailing `Z`, or the final `[+-]` run. A final run that is not a
/// well-formed designator is an error rather than time text, since the zone
/// grammar owns everything from the last sign onward.
pub(super) fn split_zone<'a>(
    rest: &'a str,
    input: &str,
) -> Result<(&'a str, Option<Zone<'a>>), ConvertError> {
    if let Some(time_text) = rest.strip_suffix('Z') {
        return Ok((time_text, Some(Zone::Utc)));
    }
    match rest.rfind(['+', '-']) {
        Some(idx) => {
            let text = &rest[idx..];
            match offset_parts(text) {
                Some((negative, hours, minutes, fraction)) => Ok((
                    &rest[..idx],
                    Some(Zone::Offset {
                        negative,
                        hours,
                        minutes,
                        fraction,
                        text,
                    }),
                )),
                None => FormatSnafu {
                    component: "timezone",
                    value: text,
                    input,
                }
                .fail(),
            }
        }
        None => Ok((rest, None)),
    }
}

/// Whether the text is nothing but a zone designator (`Z` or a signed
/// offset); used to tell a zone-only input apart from a malformed date.
pub(super) fn is_zone_only(text: &str) -> bool {
    text == "Z" || offset_parts(text).is_some()
}

/// Lexes `±hh`, `±hhmm`, `±hh:mm`, or `±hh.dddd`; values are not range
/// checked here.
fn offset_parts(text: &str) -> Option<(bool, u8, Option<u8>, Option<&str>)> {
    let b = text.as_bytes();
    let negative = match b.first() {
        Some(b'-') => true,
        Some(b'+') => false,
        _ => return None,
    };
    if b.len() < 3 || !b[1].is_ascii_digit() || !b[2].is_ascii_digit() {
        return None;
    }
    let hours = (b[1] - b'0') * 10 + (b[2] - b'0');
    match &b[3..] {
        [] => Some((negative, hours, None, None)),
        // ±hhmm
        [m1, m2] if m1.is_ascii_digit() && m2.is_ascii_digit() => {
            Some((negative, hours, Some((m1 - b'0') * 10 + (m2 - b'0')), None))
        }
        // ±hh:mm
        [b':', m1, m2] if m1.is_ascii_digit() && m2.is_ascii_digit() => {
            Some((negative, hours, Some((m1 - b'0') * 10 + (m2 - b'0')), None))
        }
        // ±hh.dddd, fractional hours
        [b'.', digits @ ..] if !digits.is_empty() && digits.iter().all(u8::is_ascii_digit) => {
            Some((negative, hours, None, Some(&text[4..])))
        }
        _ => None,
    }
}
