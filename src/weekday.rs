/*
 * Isochron
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// ISO weekday: Monday is 1 and Sunday is 7, as in ISO-8601 week dates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Default for Weekday {
    fn default() -> Self {
        Self::Monday
    }
}

impl Weekday {
    const MAX: u8 = 7;

    /// The ISO number of this weekday, 1 through 7.
    pub const fn iso_number(self) -> u8 {
        self as u8
    }
}

impl From<u8> for Weekday {
    fn from(u: u8) -> Self {
        match u.rem_euclid(Self::MAX) {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            // Zero is Sunday: 7 wraps to 0 in the modulo above.
            _ => Self::Sunday,
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.iso_number()
    }
}

impl FromStr for Weekday {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod ut_weekday {
    use super::Weekday;
    use core::str::FromStr;

    #[test]
    fn test_wrapping() {
        assert_eq!(Weekday::default(), Weekday::Monday);
        assert_eq!(Weekday::from(1), Weekday::Monday);
        assert_eq!(Weekday::from(7), Weekday::Sunday);
        assert_eq!(Weekday::from(8), Weekday::Monday);
        assert_eq!(Weekday::from(0), Weekday::Sunday);
        for iso in 1..=7 {
            assert_eq!(Weekday::from(iso).iso_number(), iso);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Weekday::from_str("monday"), Ok(Weekday::Monday));
        assert_eq!(Weekday::from_str(" Sunday "), Ok(Weekday::Sunday));
        assert!(Weekday::from_str("noday").is_err());
    }
}
