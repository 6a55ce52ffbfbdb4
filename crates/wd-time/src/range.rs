//! Working days in a date range.

use tracing::debug;
use wd_core::errors::{Error, Result};
use wd_core::Year;

use crate::calendar::{is_weekend, is_working_day};
use crate::date::Date;
use crate::holidays::HolidaySet;
use crate::month::Month;
use crate::provider::{HolidayProvider, YearHolidays};

/// How many years past the current one a range may end.
pub const MAX_YEARS_AHEAD: Year = 10;

/// A weekday in a month listing, flagged when it is a bank holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkedDay {
    /// The date.
    pub date: Date,
    /// `true` if the date is a bank holiday.
    pub is_holiday: bool,
}

/// Check the preconditions of a range query.
///
/// Both dates must be present, `end` must not precede `start`, and `end`
/// must not lie beyond `current_year + MAX_YEARS_AHEAD`.
pub fn validate_range(
    start: Option<Date>,
    end: Option<Date>,
    current_year: Year,
) -> Result<(Date, Date)> {
    let start = start.ok_or(Error::InvalidDate("start"))?;
    let end = end.ok_or(Error::InvalidDate("end"))?;
    if end < start {
        return Err(Error::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    let limit = current_year + MAX_YEARS_AHEAD;
    if end.year() > limit {
        return Err(Error::RangeTooFar {
            year: end.year(),
            limit,
        });
    }
    Ok((start, end))
}

/// Every working day in `[start, end]`, in ascending order.
///
/// Statutory holidays are looked up per calendar year crossed and merged
/// with `extra`.  Returns an empty list when `end < start`.
pub fn working_days_in_range(
    provider: &HolidayProvider,
    start: Date,
    end: Date,
    extra: Option<&HolidaySet>,
) -> Vec<Date> {
    let mut holidays = YearHolidays::new(provider, extra, start.year());
    let mut days = Vec::with_capacity(usize::try_from(end - start + 1).unwrap_or(0));
    let mut d = start;
    while d <= end {
        if is_working_day(d, holidays.for_date(d)) {
            days.push(d);
        }
        d += 1;
    }
    debug!(%start, %end, count = days.len(), "enumerated working days");
    days
}

/// Every weekday of a month, with bank holidays kept in the list and
/// flagged rather than removed.
pub fn working_days_in_month_marking_holidays(
    provider: &HolidayProvider,
    year: Year,
    month: Month,
) -> Result<Vec<MarkedDay>> {
    let first = Date::from_ymd(year, month.number(), 1)?;
    let last = first.end_of_month();
    let bank_holidays = provider.for_year(year);

    let mut days = Vec::with_capacity(23);
    let mut d = first;
    while d <= last {
        if !is_weekend(d) {
            days.push(MarkedDay {
                date: d,
                is_holiday: !is_working_day(d, &*bank_holidays),
            });
        }
        d += 1;
    }
    debug!(
        year,
        month = month.number(),
        holidays = days.iter().filter(|m| m.is_holiday).count(),
        "listed contractual working days"
    );
    Ok(days)
}

/// Count of working days in `[start, end]`.
pub fn count_working_days(
    provider: &HolidayProvider,
    start: Date,
    end: Date,
    extra: Option<&HolidaySet>,
) -> usize {
    let mut holidays = YearHolidays::new(provider, extra, start.year());
    let mut count = 0;
    let mut d = start;
    while d <= end {
        if is_working_day(d, holidays.for_date(d)) {
            count += 1;
        }
        d += 1;
    }
    count
}
