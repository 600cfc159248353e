use isochron::{convert, CalendarSystem, ConvertError};

use core::str::FromStr;

#[test]
fn gregorian_prefix_is_identity() {
    assert_eq!(convert("gregorian:2024-11-28"), convert("2024-11-28"));
    assert_eq!(
        convert("gregorian:2024-11-28T12:34:56.789Z"),
        convert("2024-11-28T12:34:56.789Z")
    );
}

#[test]
fn buddhist_is_an_exact_era_shift() {
    assert_eq!(convert("buddhist:2567-11-28"), convert("2024-11-28"));
    assert_eq!(convert("buddhist:2513-01-01"), convert("1970-01-01"));
    // Buddhist year 543 is 1 BCE; the shift steps over the missing year 0.
    assert_eq!(convert("buddhist:543-01-01"), convert("-0001-01-01"));
    assert_eq!(convert("buddhist:542-01-01"), convert("-0002-01-01"));
    // Month and day are preserved, so day validity follows the target year.
    assert_eq!(convert("buddhist:2567-02-29"), convert("2024-02-29"));
    assert!(matches!(
        convert("buddhist:2566-02-29"),
        Err(ConvertError::Component {
            component: "day",
            ..
        })
    ));
}

#[test]
fn julian_applies_the_centurial_offset() {
    // Thirteen days apart in the twentieth through twenty-second centuries.
    assert_eq!(convert("julian:2024-11-15"), convert("2024-11-28"));
    assert_eq!(convert("julian:1969-12-19"), convert("1970-01-01"));
    // Twelve in the nineteenth.
    assert_eq!(convert("julian:1800-06-10"), convert("1800-06-22"));
    // Time parts ride along untouched.
    assert_eq!(
        convert("julian:2024-11-15T12:30:45Z"),
        convert("2024-11-28T12:30:45Z")
    );
}

#[test]
fn persian_mean_year_anchors() {
    // 1 Farvardin 1 is the anchor itself.
    assert_eq!(convert("persian:1-01-01"), convert("622-03-22"));
    // The mean-year formula puts Nowruz 1403 one day past the observed date.
    assert_eq!(convert("persian:1403-01-01"), convert("2024-03-21"));
    // Month offsets: the first six months have 31 days.
    assert_eq!(convert("persian:1-02-01"), convert("622-04-22"));
    assert_eq!(convert("persian:1-07-01"), convert("622-09-24"));
}

#[test]
fn islamic_mean_year_anchors() {
    assert_eq!(convert("islamic:1-01-01"), convert("622-07-16"));
    // 1 Muharram 1446 by the tabular mean year; the observed date is July 7.
    assert_eq!(convert("islamic:1446-01-01"), convert("2024-07-04"));
    // The 30/29 alternation: Safar starts thirty days in.
    assert_eq!(convert("islamic:1-02-01"), convert("622-08-15"));
}

#[test]
fn hebrew_mean_year_anchors() {
    // The anchor year 3761 BCE, in ISO numbering.
    assert_eq!(convert("hebrew:1-01-01"), convert("-3761-10-07"));
    // Mean-year drift puts 1 Tishrei 5785 a few weeks past the observed
    // holiday; the formula's output is what is pinned here.
    assert_eq!(convert("hebrew:5785-01-01"), convert("2024-10-31"));
}

#[test]
fn chinese_mean_month_anchors() {
    // Cycle year 4722 maps to Gregorian 2024; new year lands mid-February.
    assert_eq!(convert("chinese:4722-01-01"), convert("2024-02-14"));
    // Late in the twelfth month the day count carries into the next year.
    assert_eq!(convert("chinese:4722-12-30"), convert("2025-02-02"));
}

#[test]
fn alternative_calendar_month_and_day_guards() {
    assert!(matches!(
        convert("islamic:1446-13-01"),
        Err(ConvertError::Component {
            component: "month",
            ..
        })
    ));
    assert!(matches!(
        convert("persian:1403-00-01"),
        Err(ConvertError::Component {
            component: "month",
            ..
        })
    ));
    assert!(matches!(
        convert("hebrew:5785-01-00"),
        Err(ConvertError::Component {
            component: "day",
            ..
        })
    ));
}

#[test]
fn ordinal_and_week_shapes_are_iso_only() {
    assert!(matches!(
        convert("islamic:1446-100"),
        Err(ConvertError::Format { .. })
    ));
    assert!(matches!(
        convert("julian:2024-W01-1"),
        Err(ConvertError::Format { .. })
    ));
    assert!(convert("2024-W01-1").is_ok());
}

#[test]
fn calendar_defaults_floor_like_gregorian() {
    assert_eq!(convert("buddhist:2567"), convert("buddhist:2567-01-01"));
    assert_eq!(convert("islamic:1446"), convert("islamic:1446-01-01"));
}

#[test]
fn calendar_system_parsing() {
    assert_eq!(
        CalendarSystem::from_str("persian").unwrap(),
        CalendarSystem::Persian
    );
    assert_eq!(CalendarSystem::default(), CalendarSystem::Gregorian);
    assert_eq!(CalendarSystem::Hebrew.to_string(), "hebrew");
    assert!(CalendarSystem::from_str("MAYAN").is_err());
}
