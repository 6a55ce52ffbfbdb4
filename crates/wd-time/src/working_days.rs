//! `WorkingDaysCalculator` — the public entry point for working-day queries.
//!
//! The calculator owns a shared [`HolidayProvider`] handle.  Clone the
//! `Arc` to let several calculators share one holiday cache, or build a
//! fresh calculator to get an isolated cache.

use std::sync::Arc;

use wd_core::errors::Result;
use wd_core::{Integer, Settings, Year};

use crate::date::Date;
use crate::holidays::{BankHolidaySet, HolidaySet};
use crate::leave;
use crate::month::Month;
use crate::provider::HolidayProvider;
use crate::range::{self, MarkedDay};
use crate::walker;

/// Working-day calculations for the United Kingdom.
#[derive(Debug, Clone, Default)]
pub struct WorkingDaysCalculator {
    provider: Arc<HolidayProvider>,
}

impl WorkingDaysCalculator {
    /// A calculator with its own, empty holiday cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator drawing on an existing provider.
    pub fn with_provider(provider: Arc<HolidayProvider>) -> Self {
        Self { provider }
    }

    /// The holiday provider in use.
    pub fn provider(&self) -> &Arc<HolidayProvider> {
        &self.provider
    }

    /// Working days in `[start, end]`, excluding weekends, bank holidays and
    /// `extra`.
    ///
    /// # Errors
    /// * [`Error::InvalidDate`](wd_core::Error::InvalidDate) if either date
    ///   is missing.
    /// * [`Error::InvalidRange`](wd_core::Error::InvalidRange) if
    ///   `end < start`.
    /// * [`Error::RangeTooFar`](wd_core::Error::RangeTooFar) if `end` falls
    ///   after the current year + 10.
    pub fn working_days(
        &self,
        start: Option<Date>,
        end: Option<Date>,
        extra: Option<&HolidaySet>,
    ) -> Result<Vec<Date>> {
        let (start, end) = range::validate_range(start, end, Settings::instance().current_year())?;
        Ok(range::working_days_in_range(&self.provider, start, end, extra))
    }

    /// Number of working days in `[start, end]`; same validation as
    /// [`working_days`](Self::working_days).
    pub fn count_working_days(
        &self,
        start: Option<Date>,
        end: Option<Date>,
        extra: Option<&HolidaySet>,
    ) -> Result<usize> {
        let (start, end) = range::validate_range(start, end, Settings::instance().current_year())?;
        Ok(range::count_working_days(&self.provider, start, end, extra))
    }

    /// Every weekday of the month, bank holidays included and flagged.
    pub fn working_days_in_month_marking_holidays(
        &self,
        year: Year,
        month: Month,
    ) -> Result<Vec<MarkedDay>> {
        range::working_days_in_month_marking_holidays(&self.provider, year, month)
    }

    /// `date` if it is a working day, otherwise the next one.
    pub fn next_working_day(&self, date: Date, extra: Option<&HolidaySet>) -> Date {
        walker::next_working_day_from(&self.provider, date, extra)
    }

    /// `date` if it is a working day, otherwise the previous one.
    pub fn previous_working_day(&self, date: Date, extra: Option<&HolidaySet>) -> Date {
        walker::previous_working_day_from(&self.provider, date, extra)
    }

    /// Last day of a leave lasting `days` working days from `start`.
    pub fn last_working_day_of_leave(
        &self,
        start: Date,
        days: Integer,
        extra: Option<&HolidaySet>,
    ) -> Date {
        leave::last_working_day_of_leave(&self.provider, start, days, extra)
    }

    /// The eight bank holidays of `year`.
    pub fn bank_holidays(&self, year: Year) -> Arc<BankHolidaySet> {
        self.provider.for_year(year)
    }
}
