//! Easter Sunday in the Gregorian calendar.

use wd_core::Year;

use crate::date::Date;

/// Return the date of Easter Sunday for a Gregorian year (1583 onwards).
///
/// Uses the closed-form congruential algorithm: the epact-based Paschal
/// full moon (`i`) followed by the weekday correction (`j`).  All divisions
/// truncate.  The result always falls between 22 March and 25 April.
pub fn easter_sunday(year: Year) -> Date {
    let g = year % 19;
    let c = year / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c / 4) % 7;
    let day_of_march = i - j + 28;

    if day_of_march > 31 {
        Date::from_ymd_unchecked(year, 4, (day_of_march - 31) as u8)
    } else {
        Date::from_ymd_unchecked(year, 3, day_of_march as u8)
    }
}
