//! Working-day queries through `WorkingDaysCalculator`, plus property tests
//! over arbitrary years and date ranges.

use proptest::prelude::*;
use wd_core::{Error, Settings};
use wd_time::{
    is_working_day, Date, HolidaySet, Holidays, Month, Weekday, WorkingDaysCalculator,
};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Range queries ────────────────────────────────────────────────────────────

#[test]
fn december_2018() {
    let calc = WorkingDaysCalculator::new();
    let days = calc
        .working_days(Some(date(2018, 12, 1)), Some(date(2018, 12, 31)), None)
        .unwrap();
    assert_eq!(days.len(), 19);
    for d in &days {
        assert!(!d.weekday().is_weekend());
        assert!(*d != date(2018, 12, 25) && *d != date(2018, 12, 26));
    }
}

#[test]
fn range_errors() {
    let calc = WorkingDaysCalculator::new();
    let d = date(2018, 12, 1);

    assert!(matches!(
        calc.working_days(Some(d), Some(d - 1), None),
        Err(Error::InvalidRange { .. })
    ));
    assert_eq!(
        calc.working_days(None, Some(d), None),
        Err(Error::InvalidDate("start"))
    );
    assert_eq!(
        calc.working_days(Some(d), None, None),
        Err(Error::InvalidDate("end"))
    );

    let limit = Settings::instance().current_year() + 10;
    assert!(calc
        .working_days(Some(date(limit, 12, 1)), Some(date(limit, 12, 31)), None)
        .is_ok());
    assert_eq!(
        calc.working_days(Some(d), Some(date(limit + 1, 1, 1)), None),
        Err(Error::RangeTooFar {
            year: limit + 1,
            limit
        })
    );
}

#[test]
fn month_listing_keeps_holidays_flagged() {
    let calc = WorkingDaysCalculator::new();
    // May 2018: 23 weekdays, two of them bank holidays.
    let days = calc
        .working_days_in_month_marking_holidays(2018, Month::May)
        .unwrap();
    assert_eq!(days.len(), 23);
    let flagged: Vec<Date> = days.iter().filter(|m| m.is_holiday).map(|m| m.date).collect();
    assert_eq!(flagged, vec![date(2018, 5, 7), date(2018, 5, 28)]);
    assert!(days.windows(2).all(|w| w[0].date < w[1].date));
}

// ─── Walking and leave ────────────────────────────────────────────────────────

#[test]
fn boxing_day_substitution_2021() {
    let calc = WorkingDaysCalculator::new();
    let set = calc.bank_holidays(2021);
    assert!(set.contains(date(2021, 12, 27)));
    assert!(set.contains(date(2021, 12, 28)));
    assert_eq!(date(2021, 12, 28).weekday(), Weekday::Tuesday);
    assert_eq!(
        calc.next_working_day(date(2021, 12, 24) + 1, None),
        date(2021, 12, 29)
    );
    assert_eq!(
        calc.previous_working_day(date(2021, 12, 28), None),
        date(2021, 12, 24)
    );
}

#[test]
fn company_closure_between_christmas_and_new_year() {
    let calc = WorkingDaysCalculator::new();
    let closure: HolidaySet = (29..=31).map(|d| date(2021, 12, d)).collect();
    assert_eq!(
        calc.next_working_day(date(2021, 12, 25), Some(&closure)),
        date(2022, 1, 4)
    );
    // Five days of leave from Christmas Eve: 24 Dec, then 4–7 Jan.
    assert_eq!(
        calc.last_working_day_of_leave(date(2021, 12, 24), 5, Some(&closure)),
        date(2022, 1, 7)
    );
}

#[test]
fn long_leave_spans_two_year_boundaries() {
    let calc = WorkingDaysCalculator::new();
    let start = date(2018, 12, 3);
    let days = calc
        .working_days(Some(start), Some(date(2020, 12, 31)), None)
        .unwrap();
    let n = days.len() as i32;
    assert_eq!(calc.last_working_day_of_leave(start, n, None), date(2020, 12, 31));
    assert_eq!(
        calc.last_working_day_of_leave(start, 300, None),
        days[299]
    );
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    // 1600-01-01 ..= 2400-12-31
    (-135_140..=157_419i32).prop_map(|s| Date::from_serial(s).unwrap())
}

/// Start dates whose ranges stay inside the "current year + 10" bound.
fn range_start() -> impl Strategy<Value = Date> {
    // 1600-01-01 ..= 2030-03-27
    (-135_140..=22_000i32).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn eight_distinct_weekday_holidays(year in 1583i32..=4000) {
        let calc = WorkingDaysCalculator::new();
        let set = calc.bank_holidays(year);
        let dates: Vec<Date> = set.iter().collect();
        prop_assert_eq!(dates.len(), 8);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for d in &dates {
            prop_assert_eq!(d.year(), year);
            prop_assert!(!d.weekday().is_weekend(), "{:?} is a weekend", d);
        }
        let again = calc.bank_holidays(year);
        prop_assert_eq!(&*again, &*set);
    }

    #[test]
    fn weekends_never_work(d in any_date(), extra in prop::collection::vec(any_date(), 0..5)) {
        let holidays: HolidaySet = extra.into_iter().collect();
        if d.weekday().is_weekend() {
            prop_assert!(!is_working_day(d, &holidays));
        }
    }

    #[test]
    fn walkers_land_on_working_days(d in any_date()) {
        let calc = WorkingDaysCalculator::new();
        let next = calc.next_working_day(d, None);
        let prev = calc.previous_working_day(d, None);
        prop_assert!(next >= d && next - d <= 10);
        prop_assert!(prev <= d && d - prev <= 10);
        prop_assert_eq!(calc.next_working_day(next, None), next);
        prop_assert_eq!(calc.previous_working_day(prev, None), prev);
        prop_assert_eq!(calc.last_working_day_of_leave(d, 1, None), next);
    }

    #[test]
    fn range_is_exactly_the_working_days(start in range_start(), len in 0i32..800) {
        let calc = WorkingDaysCalculator::new();
        let end = start + len;
        let days = calc.working_days(Some(start), Some(end), None).unwrap();
        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));

        let mut expected = Vec::new();
        let mut d = start;
        while d <= end {
            let holidays = calc.bank_holidays(d.year());
            if is_working_day(d, &*holidays) {
                expected.push(d);
            }
            d += 1;
        }
        prop_assert_eq!(days, expected);
    }

    #[test]
    fn leave_end_matches_range_count(start in range_start(), n in 1i32..60) {
        let calc = WorkingDaysCalculator::new();
        let first = calc.next_working_day(start, None);
        let last = calc.last_working_day_of_leave(start, n, None);
        let days = calc.working_days(Some(first), Some(last), None).unwrap();
        prop_assert_eq!(days.len() as i32, n);
        prop_assert_eq!(days.last().copied(), Some(last));
    }
}
