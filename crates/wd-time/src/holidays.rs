//! Holiday collections.
//!
//! [`BankHolidaySet`] is the immutable list of a single year's statutory
//! holidays; [`HolidaySet`] is a flat, ordered union of dates (several
//! years' bank holidays plus caller-supplied closures).  Both implement
//! [`Holidays`], the membership seam used by the working-day predicate.

use std::collections::{btree_set, BTreeSet, HashSet};

use wd_core::Year;

use crate::calendars::united_kingdom::BankHoliday;
use crate::date::Date;

/// Anything that can answer "is this date a holiday?".
pub trait Holidays {
    /// Return `true` if `date` is a listed holiday.
    fn contains(&self, date: Date) -> bool;
}

// ── BankHolidaySet ────────────────────────────────────────────────────────────

/// The eight UK bank holidays of one year, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankHolidaySet {
    year: Year,
    entries: [(Date, BankHoliday); 8],
}

impl BankHolidaySet {
    /// Evaluate every holiday rule for `year`.
    pub fn compute(year: Year) -> Self {
        let mut entries = BankHoliday::ALL.map(|h| (h.observed(year), h));
        entries.sort_unstable();
        Self { year, entries }
    }

    /// The year these holidays belong to.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Number of holidays (always 8).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.entries.iter().map(|&(d, _)| d)
    }

    /// `(date, holiday)` pairs in ascending date order.
    pub fn named(&self) -> impl Iterator<Item = (Date, BankHoliday)> + '_ {
        self.entries.iter().copied()
    }

    /// The holiday observed on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<BankHoliday> {
        self.entries
            .binary_search_by_key(&date, |&(d, _)| d)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// The observed date of a particular holiday.
    pub fn date_of(&self, holiday: BankHoliday) -> Date {
        self.entries
            .iter()
            .find(|&&(_, h)| h == holiday)
            .map_or_else(|| holiday.observed(self.year), |&(d, _)| d)
    }
}

impl Holidays for BankHolidaySet {
    fn contains(&self, date: Date) -> bool {
        self.holiday_on(date).is_some()
    }
}

// ── HolidaySet ────────────────────────────────────────────────────────────────

/// An ordered set of non-working dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<Date>);

impl HolidaySet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single date.  Returns `false` if it was already present.
    pub fn insert(&mut self, date: Date) -> bool {
        self.0.insert(date)
    }

    /// Merge another year's bank holidays into this set.
    pub fn add_bank_holidays(&mut self, holidays: &BankHolidaySet) {
        self.0.extend(holidays.iter());
    }

    /// Merge every date from `other`.
    pub fn union_with(&mut self, other: &HolidaySet) {
        self.0.extend(other.0.iter().copied());
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }
}

impl Holidays for HolidaySet {
    fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }
}

impl FromIterator<Date> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Date> for HolidaySet {
    fn extend<I: IntoIterator<Item = Date>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for HolidaySet {
    type Item = Date;
    type IntoIter = btree_set::IntoIter<Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<&BankHolidaySet> for HolidaySet {
    fn from(holidays: &BankHolidaySet) -> Self {
        holidays.iter().collect()
    }
}

// ── Plain collections ─────────────────────────────────────────────────────────

impl Holidays for BTreeSet<Date> {
    fn contains(&self, date: Date) -> bool {
        BTreeSet::contains(self, &date)
    }
}

impl Holidays for HashSet<Date> {
    fn contains(&self, date: Date) -> bool {
        HashSet::contains(self, &date)
    }
}

impl Holidays for [Date] {
    fn contains(&self, date: Date) -> bool {
        self.iter().any(|&d| d == date)
    }
}
