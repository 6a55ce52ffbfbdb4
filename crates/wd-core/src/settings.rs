//! Process-wide library settings.
//!
//! [`Settings`] holds the **reference year**: the year treated as "this
//! year" when bounding how far into the future a working-day range may
//! reach.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.  When no reference year has been set, today's
//! year is read from the local clock.
//!
//! Thread safety: the reference year is stored behind a `Mutex` so that it
//! can be changed from any thread.  Use [`ScopedReferenceYear`] to pin it
//! for the duration of a block.

use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::Datelike;

/// Process-wide settings used by the workdays-rs library.
pub struct Settings {
    reference_year: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            reference_year: Mutex::new(None),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<i32>> {
        // The guarded value is a plain `Option<i32>`; a poisoned lock cannot
        // leave it half-written.
        self.reference_year
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the explicitly configured reference year, if any.
    pub fn reference_year(&self) -> Option<i32> {
        *self.lock()
    }

    /// Pin the reference year.
    pub fn set_reference_year(&self, year: i32) {
        *self.lock() = Some(year);
    }

    /// Clear the reference year, resetting it to "use today".
    pub fn reset_reference_year(&self) {
        *self.lock() = None;
    }

    /// The year considered current: the pinned reference year, or today's
    /// year on the local clock.
    pub fn current_year(&self) -> i32 {
        self.reference_year()
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Guard that pins the reference year and restores the previous value when
/// dropped.
pub struct ScopedReferenceYear {
    previous: Option<i32>,
}

impl ScopedReferenceYear {
    /// Pin the reference year to `year` until the guard is dropped.
    pub fn new(year: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.reference_year();
        settings.set_reference_year(year);
        Self { previous }
    }
}

impl Drop for ScopedReferenceYear {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(year) => settings.set_reference_year(year),
            None => settings.reset_reference_year(),
        }
    }
}
