//! # wd-time
//!
//! Dates, UK bank holidays, and working-day calculations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Working-day predicate and raw day walking.
pub mod calendar;

/// Region-specific holiday rules.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// Holiday collections and the `Holidays` membership trait.
pub mod holidays;

/// Leave-length resolution.
pub mod leave;

/// `Month` — month of the year.
pub mod month;

/// Per-year holiday cache and provider.
pub mod provider;

/// Working days in a date range or month.
pub mod range;

/// Nearest working day from an arbitrary date.
pub mod walker;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WorkingDaysCalculator` service.
pub mod working_days;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{is_weekend, is_working_day};
pub use calendars::united_kingdom::BankHoliday;
pub use date::Date;
pub use easter::easter_sunday;
pub use holidays::{BankHolidaySet, HolidaySet, Holidays};
pub use month::Month;
pub use provider::{HolidayCache, HolidayProvider};
pub use range::MarkedDay;
pub use weekday::Weekday;
pub use working_days::WorkingDaysCalculator;
