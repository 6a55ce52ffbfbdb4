//! Holiday set provider and its per-year cache.
//!
//! [`HolidayProvider`] owns a [`HolidayCache`] mapping a year to the
//! [`BankHolidaySet`] computed for it.  Entries are computed lazily on
//! first request and kept for the provider's lifetime: the holidays of a
//! given year never change, so there is no eviction or invalidation.
//!
//! Thread safety: lookups of a cached year take a shared read lock.  On a
//! miss the set is computed outside any lock and then inserted under the
//! write lock with `entry().or_insert`, so two callers racing on the same
//! year may both compute it but only the first insert is ever stored and
//! returned.  Readers only ever see a fully built `Arc<BankHolidaySet>`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;
use wd_core::Year;

use crate::date::Date;
use crate::holidays::{BankHolidaySet, HolidaySet};

/// Year-keyed memo of computed bank holiday sets.
#[derive(Debug, Default)]
pub struct HolidayCache {
    entries: RwLock<HashMap<Year, Arc<BankHolidaySet>>>,
}

impl HolidayCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set for `year`, if present.
    pub fn get(&self, year: Year) -> Option<Arc<BankHolidaySet>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&year).cloned()
    }

    /// Return the cached set for `year`, computing and storing it on a miss.
    pub fn get_or_compute(&self, year: Year) -> Arc<BankHolidaySet> {
        if let Some(hit) = self.get(year) {
            return hit;
        }
        debug!(year, "bank holiday cache miss");
        let computed = Arc::new(BankHolidaySet::compute(year));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let stored = entries.entry(year).or_insert_with(|| {
            debug!(year, "storing bank holidays");
            computed
        });
        Arc::clone(stored)
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of UK bank holidays, memoised per year.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct HolidayProvider {
    cache: HolidayCache,
}

impl HolidayProvider {
    /// A provider with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight bank holidays of `year`.
    pub fn for_year(&self, year: Year) -> Arc<BankHolidaySet> {
        self.cache.get_or_compute(year)
    }

    /// Union of the bank holidays of every year in `years`, plus `extra`.
    pub fn spanning<I>(&self, years: I, extra: Option<&HolidaySet>) -> HolidaySet
    where
        I: IntoIterator<Item = Year>,
    {
        let mut set = extra.cloned().unwrap_or_default();
        for year in years {
            set.add_bank_holidays(&self.for_year(year));
        }
        set
    }

    /// The underlying cache.
    pub fn cache(&self) -> &HolidayCache {
        &self.cache
    }
}

/// Holiday view for a forward or backward day-by-day traversal.
///
/// Holds the bank holidays of one year merged with caller extras and
/// rebuilds only when the traversal steps into a different year.
pub(crate) struct YearHolidays<'a> {
    provider: &'a HolidayProvider,
    extra: Option<&'a HolidaySet>,
    year: Year,
    holidays: HolidaySet,
}

impl<'a> YearHolidays<'a> {
    pub(crate) fn new(provider: &'a HolidayProvider, extra: Option<&'a HolidaySet>, year: Year) -> Self {
        Self {
            provider,
            extra,
            year,
            holidays: provider.spanning([year], extra),
        }
    }

    /// Holidays applicable to `date`.
    pub(crate) fn for_date(&mut self, date: Date) -> &HolidaySet {
        let year = date.year();
        if year != self.year {
            self.year = year;
            self.holidays = self.provider.spanning([year], self.extra);
        }
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::Holidays;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn cache_hit_returns_the_stored_set() {
        let provider = HolidayProvider::new();
        assert!(provider.cache().is_empty());

        let first = provider.for_year(2019);
        let second = provider.for_year(2019);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(provider.cache().len(), 1);
    }

    #[test]
    fn fresh_providers_do_not_share_state() {
        let a = HolidayProvider::new();
        let b = HolidayProvider::new();
        a.for_year(2020);
        assert_eq!(a.cache().len(), 1);
        assert!(b.cache().is_empty());
        assert!(b.cache().get(2020).is_none());
    }

    #[test]
    fn concurrent_misses_store_a_single_set() {
        let provider = HolidayProvider::new();
        let results: Vec<Arc<BankHolidaySet>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| provider.for_year(2021))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        let stored = provider.cache().get(2021).unwrap();
        assert_eq!(provider.cache().len(), 1);
        for r in &results {
            assert!(Arc::ptr_eq(r, &stored));
        }
    }

    #[test]
    fn spanning_unions_years_and_extras() {
        let provider = HolidayProvider::new();
        let extra: HolidaySet = [date(2018, 12, 24)].into_iter().collect();
        let set = provider.spanning([2018, 2019], Some(&extra));
        assert_eq!(set.len(), 17);
        assert!(set.contains(date(2018, 12, 24)));
        assert!(set.contains(date(2019, 1, 1)));
        assert_eq!(provider.cache().len(), 2);
    }

    #[test]
    fn year_view_switches_on_year_boundary() {
        let provider = HolidayProvider::new();
        let mut view = YearHolidays::new(&provider, None, 2018);
        assert!(view.for_date(date(2018, 12, 26)).contains(date(2018, 12, 26)));
        assert!(!view.for_date(date(2019, 1, 1)).contains(date(2018, 12, 26)));
        assert!(view.for_date(date(2019, 1, 1)).contains(date(2019, 1, 1)));
    }
}
