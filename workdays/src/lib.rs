//! # workdays
//!
//! Working days and bank holidays for the United Kingdom.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use workdays::prelude::*;
//!
//! let calc = WorkingDaysCalculator::new();
//! let start = Date::from_ymd(2018, 12, 1).unwrap();
//! let end = Date::from_ymd(2018, 12, 31).unwrap();
//! let days = calc.working_days(Some(start), Some(end), None).unwrap();
//! assert_eq!(days.len(), 19);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and settings.
pub use wd_core as core;

/// Dates, holiday rules, and working-day calculations.
pub use wd_time as time;

/// The types most callers need.
pub mod prelude {
    pub use wd_core::{Error, Result, ScopedReferenceYear, Settings};
    pub use wd_time::{
        BankHoliday, BankHolidaySet, Date, HolidayProvider, HolidaySet, MarkedDay, Month,
        Weekday, WorkingDaysCalculator,
    };
}
