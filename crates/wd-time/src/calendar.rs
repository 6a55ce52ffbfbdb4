//! Working-day predicate and day walker.
//!
//! [`is_working_day`] is the single definition of a working day used by
//! every traversal in this crate: not a Saturday or Sunday, and not in the
//! supplied holiday set.

use crate::date::Date;
use crate::holidays::Holidays;

/// Return `true` if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    date.weekday().is_weekend()
}

/// Return `true` if `date` is a weekday that is not listed in `holidays`.
pub fn is_working_day<H>(date: Date, holidays: &H) -> bool
where
    H: Holidays + ?Sized,
{
    !is_weekend(date) && !holidays.contains(date)
}

/// `date` itself if it is a working day, otherwise the first working day
/// after it.
///
/// Terminates as long as `holidays` does not cover every weekday of an
/// unbounded span; statutory sets never hold more than a few consecutive
/// days.
pub fn next_working_day<H>(mut date: Date, holidays: &H) -> Date
where
    H: Holidays + ?Sized,
{
    while !is_working_day(date, holidays) {
        date += 1;
    }
    date
}

/// `date` itself if it is a working day, otherwise the last working day
/// before it.
pub fn previous_working_day<H>(mut date: Date, holidays: &H) -> Date
where
    H: Holidays + ?Sized,
{
    while !is_working_day(date, holidays) {
        date -= 1;
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::HolidaySet;
    use wd_core::Year;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_are_never_working_days() {
        let none = HolidaySet::new();
        // 2023-09-02 is a Saturday
        assert!(!is_working_day(date(2023, 9, 2), &none));
        assert!(!is_working_day(date(2023, 9, 3), &none));
        assert!(is_working_day(date(2023, 9, 4), &none));
    }

    #[test]
    fn listed_weekday_is_not_a_working_day() {
        let holidays = [date(2023, 9, 4)];
        assert!(!is_working_day(date(2023, 9, 4), &holidays[..]));
        assert!(is_working_day(date(2023, 9, 5), &holidays[..]));
    }

    #[test]
    fn walkers_skip_weekend_and_holidays() {
        let holidays: HolidaySet = [date(2023, 9, 4)].into_iter().collect();
        let sat = date(2023, 9, 2);
        assert_eq!(next_working_day(sat, &holidays), date(2023, 9, 5));
        assert_eq!(previous_working_day(sat, &holidays), date(2023, 9, 1));
    }

    #[test]
    fn walkers_leave_working_days_alone() {
        let none = HolidaySet::new();
        let fri = date(2023, 9, 1);
        assert_eq!(next_working_day(fri, &none), fri);
        assert_eq!(previous_working_day(fri, &none), fri);
    }
}
