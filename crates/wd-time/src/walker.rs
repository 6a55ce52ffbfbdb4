//! Day walker: nearest working day from an arbitrary date.
//!
//! Walking forward from late December can step into the next year, so the
//! holiday view always covers the following year as well as the date's
//! own.  Caller-supplied extras are merged in for the duration of the walk.

use wd_core::Year;

use crate::calendar::{next_working_day, previous_working_day};
use crate::date::Date;
use crate::holidays::HolidaySet;
use crate::provider::HolidayProvider;

/// Holidays seen when walking forward from `date`: its year and the next.
fn forward_view(
    provider: &HolidayProvider,
    date: Date,
    extra: Option<&HolidaySet>,
) -> HolidaySet {
    let year: Year = date.year();
    provider.spanning([year, year + 1], extra)
}

/// Holidays seen when walking backward from `date`: the previous, current
/// and next year.
fn backward_view(
    provider: &HolidayProvider,
    date: Date,
    extra: Option<&HolidaySet>,
) -> HolidaySet {
    let year: Year = date.year();
    provider.spanning([year - 1, year, year + 1], extra)
}

/// First working day on or after `date`.
pub fn next_working_day_from(
    provider: &HolidayProvider,
    date: Date,
    extra: Option<&HolidaySet>,
) -> Date {
    next_working_day(date, &forward_view(provider, date, extra))
}

/// Last working day on or before `date`.
pub fn previous_working_day_from(
    provider: &HolidayProvider,
    date: Date,
    extra: Option<&HolidaySet>,
) -> Date {
    previous_working_day(date, &backward_view(provider, date, extra))
}
