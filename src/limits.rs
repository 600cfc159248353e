/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Length gate: bounds on the whole input and on four sub-components,
//! applied in a fixed order before any parsing. The bounded input gives a
//! hard ceiling on the work any later stage can do.

use crate::errors::{ComponentLengthSnafu, ConvertError, InputLengthSnafu};
use crate::{
    MAX_CALENDAR_INDICATOR_LENGTH, MAX_FRACTION_DIGITS, MAX_INPUT_LENGTH,
    MAX_OFFSET_FRACTION_DIGITS, MAX_YEAR_DIGITS,
};
use snafu::ensure;

/// Longest digit run any date format consumes: `±YYYYMMDD`. Anything longer
/// cannot be valid and is reported against the year limit.
const MAX_LEADING_DIGITS: usize = 8;

pub(crate) fn check(input: &str) -> Result<(), ConvertError> {
    if input.chars().count() > MAX_INPUT_LENGTH {
        let truncated: String = input.chars().take(MAX_INPUT_LENGTH).collect();
        return InputLengthSnafu { truncated }.fail();
    }

    let bytes = input.as_bytes();

    // Year digits: the leading [+-]? digit run.
    let signed = matches!(bytes.first(), Some(b'+') | Some(b'-'));
    let start = usize::from(signed);
    let mut digits = 0;
    while start + digits < bytes.len() && bytes[start + digits].is_ascii_digit() {
        digits += 1;
    }
    ensure!(
        digits <= MAX_LEADING_DIGITS,
        ComponentLengthSnafu {
            component: "Year",
            limit: MAX_YEAR_DIGITS,
            units: "digits",
            value: &input[..start + digits],
            input,
        }
    );

    // Fractional digits live after the first 'T': the rightmost `.digits`
    // run of the time portion, and the `.digits` run of a signed zone.
    if let Some(t_idx) = input.find('T') {
        let after = &input[t_idx + 1..];
        let (time_part, zone_part) = match after.strip_suffix('Z') {
            Some(stripped) => (stripped, None),
            None => match after.rfind(['+', '-']) {
                Some(idx) => (&after[..idx], Some(&after[idx..])),
                None => (after, None),
            },
        };
        if let Some(dot) = time_part.rfind('.') {
            let run = digit_run(&time_part[dot + 1..]);
            ensure!(
                run.len() <= MAX_FRACTION_DIGITS,
                ComponentLengthSnafu {
                    component: "Fractional seconds",
                    limit: MAX_FRACTION_DIGITS,
                    units: "digits",
                    value: run,
                    input,
                }
            );
        }
        if let Some(zone) = zone_part {
            if let Some(dot) = zone.find('.') {
                let run = digit_run(&zone[dot + 1..]);
                ensure!(
                    run.len() <= MAX_OFFSET_FRACTION_DIGITS,
                    ComponentLengthSnafu {
                        component: "Fractional timezone",
                        limit: MAX_OFFSET_FRACTION_DIGITS,
                        units: "digits",
                        value: run,
                        input,
                    }
                );
            }
        }
    }

    // Calendar indicator: the leading lowercase token before ':'.
    let mut alpha = 0;
    while alpha < bytes.len() && bytes[alpha].is_ascii_lowercase() {
        alpha += 1;
    }
    if alpha < bytes.len() && bytes[alpha] == b':' {
        ensure!(
            alpha <= MAX_CALENDAR_INDICATOR_LENGTH,
            ComponentLengthSnafu {
                component: "Calendar indicator",
                limit: MAX_CALENDAR_INDICATOR_LENGTH,
                units: "characters",
                value: &input[..alpha],
                input,
            }
        );
    }

    Ok(())
}

/// Leading ASCII-digit prefix of the text.
fn digit_run(text: &str) -> &str {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}
