//! `Date` type.
//!
//! A civil calendar date in the proleptic Gregorian calendar, stored as a
//! serial number of days.  There is no time-of-day and no time zone.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970.
//! * Dates before the epoch have negative serials.
//! * Checked constructors accept years in [`MIN_YEAR`, `MAX_YEAR`]; day
//!   arithmetic itself is unchecked so that walking past the end of a year
//!   never fails.
//!
//! An unset date is `Option<Date>`.

use std::str::FromStr;

use wd_core::errors::{Error, Result};
use wd_core::Year;

use crate::month::Month;
use crate::weekday::Weekday;

/// First year accepted by the checked constructors (first full Gregorian year).
pub const MIN_YEAR: Year = 1583;

/// Last year accepted by the checked constructors.
pub const MAX_YEAR: Year = 9999;

const MIN_SERIAL: i32 = serial_from_ymd(MIN_YEAR, 1, 1);
const MAX_SERIAL: i32 = serial_from_ymd(MAX_YEAR, 12, 31);

/// A calendar date represented as a serial number of days.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self::from_ymd_unchecked(year, month, day))
    }

    /// Create a date from components known to be valid.
    pub(crate) fn from_ymd_unchecked(year: Year, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month));
        Date(serial_from_ymd(year, month, day))
    }

    /// Create a date from a serial number (days since 1970-01-01).
    ///
    /// The serial must fall within years [`MIN_YEAR`, `MAX_YEAR`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{MIN_SERIAL}, {MAX_SERIAL}]"
            )));
        }
        Ok(Date(serial))
    }

    /// The first occurrence of `weekday` in the given month.
    ///
    /// Computed as the offset from the 1st, pushed forward a week when that
    /// offset lands before the 1st.
    pub fn first_weekday_in_month(year: Year, month: Month, weekday: Weekday) -> Self {
        let first = Self::from_ymd_unchecked(year, month.number(), 1);
        let candidate = first + (weekday.ordinal() as i32 - first.weekday().ordinal() as i32);
        if candidate < first {
            candidate + 7
        } else {
            candidate
        }
    }

    /// The last occurrence of `weekday` in the given month.
    pub fn last_weekday_in_month(year: Year, month: Month, weekday: Weekday) -> Self {
        let last_of_month = Self::from_ymd_unchecked(year, month.number(), 1).end_of_month();
        let mut d = Self::first_weekday_in_month(year, month, weekday);
        while d + 6 < last_of_month {
            d += 7;
        }
        d
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.ymd().0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(w) => w,
            None => unreachable!("rem_euclid keeps the ordinal in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days, failing if the result leaves the supported years.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let d = self + n;
        let year = d.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "date arithmetic: year {year} out of range"
            )));
        }
        Ok(d)
    }

    /// Number of calendar days from `self` to `other`; positive if
    /// `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Self::from_ymd_unchecked(y, m, days_in_month(y, m))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        Date(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        Date(self.0 - rhs)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        self.0 += rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 -= rhs;
    }
}

// ── Parsing & display ─────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD"));
        let mut parts = s.trim().splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(bad());
        };
        let year = y.parse::<Year>().map_err(|_| bad())?;
        let month = m.parse::<u8>().map_err(|_| bad())?;
        let day = d.parse::<u8>().map_err(|_| bad())?;
        Date::from_ymd(year, month, day)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        let mon = Month::from_number(m).map_or("?", |m| m.name());
        write!(f, "{d} {mon} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

// Both conversions count from 1 March so that the leap day is the last day
// of the computational year; 400-year eras hold exactly 146 097 days.

const DAYS_PER_ERA: i32 = 146_097;
const EPOCH_SHIFT: i32 = 719_468; // 0000-03-01 → 1970-01-01

const fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let (m, d) = (month as i32, day as i32);
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    let z = serial + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
