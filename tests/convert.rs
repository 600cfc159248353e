use isochron::{convert, UnixEpoch};

use core::str::FromStr;

#[test]
fn calendar_dates() {
    // X-Val: date(1) on 2024-11-28 UTC.
    assert_eq!(convert("2024-11-28").unwrap().to_parts(), (1_732_752_000, 0));
    assert_eq!(convert("2025-11-28").unwrap().to_parts(), (1_764_288_000, 0));
    assert_eq!(convert("20241128").unwrap().to_parts(), (1_732_752_000, 0));
    assert_eq!(convert("1970-01-01").unwrap().to_parts(), (0, 0));
    assert_eq!(convert("1969-12-31").unwrap().to_parts(), (-86_400, 0));
    // Absent month and day floor to January 1.
    assert_eq!(convert("2024"), convert("2024-01-01"));
    assert_eq!(convert("2024-11"), convert("2024-11-01"));
    // A signed four-digit year is accepted.
    assert_eq!(convert("+2024-11-28"), convert("2024-11-28"));
}

#[test]
fn times_and_zones() {
    assert_eq!(
        convert("2024-11-28T12:34:56Z").unwrap().to_parts(),
        (1_732_797_296, 0)
    );
    assert_eq!(
        convert("2024-11-28T12:34:56.789Z").unwrap().to_string(),
        "1732797296.789"
    );
    assert_eq!(
        convert("2024-11-28T12:00+05:30").unwrap().to_parts(),
        (1_732_775_400, 0)
    );
    // Compact time and zone forms mean the same instant.
    assert_eq!(
        convert("2024-11-28T123456Z"),
        convert("2024-11-28T12:34:56Z")
    );
    assert_eq!(
        convert("2024-11-28T12:00+0530"),
        convert("2024-11-28T12:00+05:30")
    );
    // An absent zone reads as UTC.
    assert_eq!(convert("2024-11-28T12:34:56"), convert("2024-11-28T12:34:56Z"));
}

#[test]
fn offset_application_is_inverse_shift() {
    for (local, utc) in [
        ("2024-03-10T15:00+02:30", "2024-03-10T12:30Z"),
        ("2024-03-10T15:00-02:30", "2024-03-10T17:30Z"),
        ("2024-03-10T00:00+14", "2024-03-09T10:00Z"),
        ("2024-03-10T23:00-11", "2024-03-11T10:00Z"),
        ("2024-03-10T06:00+06:00", "2024-03-10T00:00Z"),
        // Fractional-hour offsets: a quarter hour is 900 seconds.
        ("2024-03-10T12:00+00.25", "2024-03-10T11:45Z"),
        ("2024-03-10T12:00-00.5", "2024-03-10T12:30Z"),
    ] {
        assert_eq!(convert(local), convert(utc), "{local} != {utc}");
    }
}

#[test]
fn day_rollover_at_the_year_edge() {
    assert_eq!(
        convert("2024-01-01T00:30+01:00"),
        convert("2023-12-31T23:30Z")
    );
    assert_eq!(
        convert("2024-12-31T23:30-01:00"),
        convert("2025-01-01T00:30Z")
    );
}

#[test]
fn leap_second_folds_to_next_midnight() {
    assert_eq!(
        convert("2016-12-31T23:59:60Z").unwrap().to_parts(),
        (1_483_228_800, 0)
    );
    assert_eq!(
        convert("2016-12-31T23:59:60Z"),
        convert("2017-01-01T00:00:00Z")
    );
    assert_eq!(
        convert("1972-06-30T23:59:60Z"),
        convert("1972-07-01T00:00:00Z")
    );
    // The fold composes with zone rollover: rollover first, then the fold.
    assert_eq!(
        convert("2016-12-31T23:59:60-00:01"),
        convert("2017-01-01T00:01:00Z")
    );
    assert_eq!(
        convert("2016-12-31T23:59:60+01:00"),
        convert("2016-12-31T23:00:00Z")
    );
    // The fraction survives the fold.
    assert_eq!(
        convert("2016-12-31T23:59:60.25Z").unwrap().to_string(),
        "1483228800.25"
    );
    // Any :60 is accepted, not only at 23:59.
    assert_eq!(
        convert("2024-01-01T12:30:60Z"),
        convert("2024-01-01T12:31:00Z")
    );
}

#[test]
fn bce_years() {
    assert_eq!(
        convert("-0001-01-01T00:00:00Z").unwrap().to_parts(),
        (-62_167_219_200, 0)
    );
    // 1 BCE is a leap year under the astronomical rule.
    assert!(convert("-0001-02-29").is_ok());
    assert!(convert("-0005-366").is_ok());
    assert!(convert("-0004-366").is_err());
    // Year -1 flows straight into year 1.
    assert_eq!(
        convert("-0001-12-31T23:00-01:00"),
        convert("0001-01-01T00:00Z")
    );
}

#[test]
fn ordinal_dates() {
    assert_eq!(convert("2024-366").unwrap().to_parts(), (1_735_603_200, 0));
    assert_eq!(convert("2024-366"), convert("2024-12-31"));
    assert_eq!(convert("2024366"), convert("2024-12-31"));
    assert_eq!(convert("2024-060"), convert("2024-02-29"));
    assert_eq!(convert("2023-060"), convert("2023-03-01"));
}

#[test]
fn fraction_truncation_never_rounds() {
    assert_eq!(
        convert("2024-01-01T00:00:00.123456789Z").unwrap().to_string(),
        "1704067200.123456789"
    );
    assert_eq!(
        convert("2024-01-01T00:00:00.000000001Z").unwrap().to_string(),
        "1704067200.000000001"
    );
    // Nine nines do not carry into the integer part.
    assert_eq!(
        convert("2024-01-01T00:00:00.999999999Z").unwrap().to_string(),
        "1704067200.999999999"
    );
    // A tenth digit is a length error, not a rounding opportunity.
    assert!(convert("2024-01-01T00:00:00.9999999999Z").is_err());
}

#[test]
fn fractional_outputs_stay_fractional() {
    // `.0` is numerically whole but still renders as a decimal.
    assert_eq!(
        convert("2024-01-01T00:00:00.0Z").unwrap().to_string(),
        "1704067200.0"
    );
    // Half a day of fractional hours is a whole number of seconds.
    assert_eq!(
        convert("2024-01-01T12.5Z").unwrap().to_string(),
        "1704112200.0"
    );
    assert!(convert("2024-01-01T12.5Z").unwrap().is_fractional());
    // Fractional minutes scale by sixty.
    assert_eq!(
        convert("2024-01-01T12:30.5Z").unwrap().to_parts(),
        (1_704_112_230, 0)
    );
    // Integer inputs render as integers.
    assert!(!convert("2024-01-01T12:30:45Z").unwrap().is_fractional());
}

#[test]
fn negative_fractions_use_the_floor_convention() {
    let epoch = convert("1969-12-31T23:59:59.5Z").unwrap();
    assert_eq!(epoch.to_parts(), (-1, 500_000_000));
    assert_eq!(epoch.to_string(), "-0.5");
}

#[test]
fn gregorian_datetimes_match_a_day_counting_reference() {
    // Independent day counter built only on the public leap-year predicate.
    fn reference_days(year: i32, month: u8, day: u8) -> i64 {
        let mut days: i64 = 0;
        for y in 1970..year {
            days += if isochron::is_leap_year(y) { 366 } else { 365 };
        }
        for m in 1..month {
            days += i64::from(isochron::days_in_month(year, m));
        }
        days + i64::from(day) - 1
    }

    for year in (1970..2400).step_by(7) {
        for month in [1, 2, 6, 12] {
            let day = isochron::days_in_month(year, month);
            let input = format!("{year:04}-{month:02}-{day:02}T13:45:12Z");
            let expected = reference_days(year, month, day) * 86_400 + 13 * 3_600 + 45 * 60 + 12;
            assert_eq!(
                convert(&input).unwrap().to_parts(),
                (expected, 0),
                "mismatch for {input}"
            );
        }
    }
}

#[test]
fn conversion_is_deterministic() {
    for input in [
        "2024-11-28T12:34:56.789Z",
        "-0001-01-01",
        "2020-W53-7",
        "hebrew:5785-01-01",
        "2016-12-31T23:59:60.123456789-23.9999",
    ] {
        let first = convert(input).unwrap();
        let second = convert(input).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}

#[test]
fn from_str_round_trip() {
    let epoch = UnixEpoch::from_str("2024-11-28").unwrap();
    assert_eq!(epoch.to_parts(), (1_732_752_000, 0));
    assert!(UnixEpoch::from_str("not a date").is_err());
}

#[test]
fn extreme_years_are_in_reach() {
    let far_future = convert("+999999-12-31T23:59:59Z").unwrap();
    let far_past = convert("-999999-01-01T00:00:00Z").unwrap();
    assert!(far_future.to_parts().0 > 31_000_000_000_000);
    assert!(far_past.to_parts().0 < -31_000_000_000_000);
    // One day of rollover past the boundary still computes.
    assert!(convert("+999999-12-31T23:30-01:00").is_ok());
}

#[cfg(feature = "serde")]
mod serde_round_trip {
    use isochron::{convert, UnixEpoch};

    #[test]
    fn serializes_as_its_rendering() {
        let epoch = convert("2024-11-28").unwrap();
        let json = serde_json::to_string(&epoch).unwrap();
        assert_eq!(json, "\"1732752000\"");
        let back: UnixEpoch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, epoch);

        let epoch = convert("2024-11-28T12:34:56.789Z").unwrap();
        let json = serde_json::to_string(&epoch).unwrap();
        assert_eq!(json, "\"1732797296.789\"");
        let back: UnixEpoch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, epoch);

        let epoch = convert("1969-12-31T23:59:59.5Z").unwrap();
        let json = serde_json::to_string(&epoch).unwrap();
        assert_eq!(json, "\"-0.5\"");
        let back: UnixEpoch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, epoch);
    }
}
