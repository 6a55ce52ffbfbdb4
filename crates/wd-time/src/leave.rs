//! Leave-length resolution.

use wd_core::Integer;

use crate::calendar::is_working_day;
use crate::date::Date;
use crate::holidays::HolidaySet;
use crate::provider::{HolidayProvider, YearHolidays};
use crate::walker::next_working_day_from;

/// The last day of a leave of `days` working days starting at `start`.
///
/// `start` is first moved forward to a working day, which counts as day
/// one.  Each later working day uses up one more day; weekends and holidays
/// in between are free.  A count below one returns `start` unchanged.
pub fn last_working_day_of_leave(
    provider: &HolidayProvider,
    start: Date,
    days: Integer,
    extra: Option<&HolidaySet>,
) -> Date {
    if days < 1 {
        return start;
    }

    let first = next_working_day_from(provider, start, extra);
    let mut remaining = days - 1;
    let mut holidays = YearHolidays::new(provider, extra, first.year());
    let mut target = first;
    while remaining > 0 {
        target += 1;
        if is_working_day(target, holidays.for_date(target)) {
            remaining -= 1;
        }
    }
    target
}
