//! United Kingdom bank holiday rules.
//!
//! Eight statutory holidays per year.  Fixed-date holidays that fall on a
//! weekend move to a substitute weekday; the rest are defined by weekday
//! position or by their offset from Easter Sunday.  Each rule is a pure
//! function of the year.

use wd_core::Year;

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::month::Month;
use crate::weekday::Weekday;

/// One of the eight UK bank holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BankHoliday {
    /// 1 January, or the following Monday.
    NewYearsDay,
    /// Two days before Easter Sunday.
    GoodFriday,
    /// The day after Easter Sunday.
    EasterMonday,
    /// First Monday in May.
    EarlyMay,
    /// Last Monday in May.
    SpringBank,
    /// Last Monday in August.
    SummerBank,
    /// 25 December, or the following Monday.
    ChristmasDay,
    /// 26 December, or the following Tuesday when Christmas takes the Monday.
    BoxingDay,
}

impl BankHoliday {
    /// All eight holidays in calendar order.
    pub const ALL: [BankHoliday; 8] = [
        BankHoliday::NewYearsDay,
        BankHoliday::GoodFriday,
        BankHoliday::EasterMonday,
        BankHoliday::EarlyMay,
        BankHoliday::SpringBank,
        BankHoliday::SummerBank,
        BankHoliday::ChristmasDay,
        BankHoliday::BoxingDay,
    ];

    /// The date on which this holiday is observed in `year`.
    pub fn observed(self, year: Year) -> Date {
        match self {
            BankHoliday::NewYearsDay => new_years_day(year),
            BankHoliday::GoodFriday => good_friday(year),
            BankHoliday::EasterMonday => easter_monday(year),
            BankHoliday::EarlyMay => early_may_bank_holiday(year),
            BankHoliday::SpringBank => spring_bank_holiday(year),
            BankHoliday::SummerBank => summer_bank_holiday(year),
            BankHoliday::ChristmasDay => christmas_day(year),
            BankHoliday::BoxingDay => boxing_day(year),
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            BankHoliday::NewYearsDay => "New Year's Day",
            BankHoliday::GoodFriday => "Good Friday",
            BankHoliday::EasterMonday => "Easter Monday",
            BankHoliday::EarlyMay => "Early May Bank Holiday",
            BankHoliday::SpringBank => "Spring Bank Holiday",
            BankHoliday::SummerBank => "Summer Bank Holiday",
            BankHoliday::ChristmasDay => "Christmas Day",
            BankHoliday::BoxingDay => "Boxing Day",
        }
    }
}

impl std::fmt::Display for BankHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Move a fixed-date holiday off the weekend onto the next Monday.
fn monday_if_weekend(date: Date) -> Date {
    match date.weekday() {
        Weekday::Saturday => date + 2,
        Weekday::Sunday => date + 1,
        _ => date,
    }
}

/// New Year's Day (1 January; Saturday or Sunday → Monday).
pub fn new_years_day(year: Year) -> Date {
    monday_if_weekend(Date::from_ymd_unchecked(year, 1, 1))
}

/// Good Friday.
pub fn good_friday(year: Year) -> Date {
    easter_sunday(year) - 2
}

/// Easter Monday.
pub fn easter_monday(year: Year) -> Date {
    easter_sunday(year) + 1
}

/// Early May bank holiday (first Monday in May).
pub fn early_may_bank_holiday(year: Year) -> Date {
    Date::first_weekday_in_month(year, Month::May, Weekday::Monday)
}

/// Spring bank holiday (last Monday in May).
pub fn spring_bank_holiday(year: Year) -> Date {
    Date::last_weekday_in_month(year, Month::May, Weekday::Monday)
}

/// Summer bank holiday (last Monday in August).
pub fn summer_bank_holiday(year: Year) -> Date {
    Date::last_weekday_in_month(year, Month::August, Weekday::Monday)
}

/// Christmas Day (25 December; Saturday or Sunday → Monday).
pub fn christmas_day(year: Year) -> Date {
    monday_if_weekend(Date::from_ymd_unchecked(year, 12, 25))
}

/// Boxing Day (26 December).
///
/// Saturday → Monday 28th.  Sunday or Monday → Tuesday, because the Monday
/// is already Christmas Day's substitute.
pub fn boxing_day(year: Year) -> Date {
    let date = Date::from_ymd_unchecked(year, 12, 26);
    match date.weekday() {
        Weekday::Saturday | Weekday::Sunday => date + 2,
        Weekday::Monday => date + 1,
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day_substitution() {
        assert_eq!(new_years_day(2019), date(2019, 1, 1)); // Tuesday
        assert_eq!(new_years_day(2022), date(2022, 1, 3)); // Saturday → Monday
        assert_eq!(new_years_day(2023), date(2023, 1, 2)); // Sunday → Monday
    }

    #[test]
    fn christmas_on_saturday_2021() {
        assert_eq!(christmas_day(2021), date(2021, 12, 27));
        assert_eq!(boxing_day(2021), date(2021, 12, 28));
    }

    #[test]
    fn christmas_on_sunday_2022() {
        assert_eq!(christmas_day(2022), date(2022, 12, 26));
        assert_eq!(boxing_day(2022), date(2022, 12, 27));
    }

    #[test]
    fn boxing_day_on_saturday_2020() {
        // Christmas is a Friday and stays put; Boxing Day moves to Monday.
        assert_eq!(christmas_day(2020), date(2020, 12, 25));
        assert_eq!(boxing_day(2020), date(2020, 12, 28));
    }

    #[test]
    fn easter_offsets_2019() {
        assert_eq!(good_friday(2019), date(2019, 4, 19));
        assert_eq!(easter_monday(2019), date(2019, 4, 22));
    }

    #[test]
    fn observed_matches_rule_functions() {
        assert_eq!(BankHoliday::EarlyMay.observed(2018), date(2018, 5, 7));
        assert_eq!(BankHoliday::SpringBank.observed(2018), date(2018, 5, 28));
        assert_eq!(BankHoliday::SummerBank.observed(2018), date(2018, 8, 27));
        assert_eq!(BankHoliday::BoxingDay.to_string(), "Boxing Day");
    }
}
