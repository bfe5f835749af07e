//! Holiday lookup.
//!
//! Holidays are lookup data supplied from outside the resolver. A provider
//! answers "which dates are holidays in year Y"; the calendar grid only uses
//! that to flag cells.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Source of holiday dates, one year at a time.
pub trait HolidayProvider {
    /// Short human-readable name.
    fn name(&self) -> &str;

    /// Every holiday falling in `year`.
    fn holidays(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays(date.year()).contains(&date)
    }
}

/// Spain, national fixed-date holidays.
///
/// * New Year's Day (Jan 1)
/// * Epiphany (Jan 6)
/// * Labour Day (May 1)
/// * Assumption (Aug 15)
/// * National Day (Oct 12)
/// * All Saints (Nov 1)
/// * Constitution Day (Dec 6)
/// * Immaculate Conception (Dec 8)
/// * Christmas Day (Dec 25)
///
/// Moveable feasts and regional holidays are not included.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishNationalHolidays;

impl SpanishNationalHolidays {
    const FIXED: [(u32, u32); 9] = [
        (1, 1),
        (1, 6),
        (5, 1),
        (8, 15),
        (10, 12),
        (11, 1),
        (12, 6),
        (12, 8),
        (12, 25),
    ];
}

impl HolidayProvider for SpanishNationalHolidays {
    fn name(&self) -> &str {
        "Spain (national)"
    }

    fn holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        Self::FIXED
            .iter()
            .filter_map(|(m, d)| NaiveDate::from_ymd_opt(year, *m, *d))
            .collect()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        Self::FIXED.contains(&(date.month(), date.day()))
    }
}

/// Holiday set handed in by the caller, e.g. from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHolidays {
    dates: BTreeSet<NaiveDate>,
}

impl StaticHolidays {
    pub fn new<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Add every holiday another provider reports for `year`.
    pub fn extend_from<P: HolidayProvider + ?Sized>(&mut self, provider: &P, year: i32) {
        self.dates.extend(provider.holidays(year));
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayProvider for StaticHolidays {
    fn name(&self) -> &str {
        "static"
    }

    fn holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.dates
            .iter()
            .filter(|d| d.year() == year)
            .copied()
            .collect()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// No holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayProvider for NoHolidays {
    fn name(&self) -> &str {
        "none"
    }

    fn holidays(&self, _year: i32) -> BTreeSet<NaiveDate> {
        BTreeSet::new()
    }

    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Union of several providers.
#[derive(Default)]
pub struct CombinedHolidays {
    providers: Vec<Box<dyn HolidayProvider + Send + Sync>>,
}

impl CombinedHolidays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: HolidayProvider + Send + Sync + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for CombinedHolidays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.name()))
            .finish()
    }
}

impl HolidayProvider for CombinedHolidays {
    fn name(&self) -> &str {
        "combined"
    }

    fn holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.providers
            .iter()
            .flat_map(|p| p.holidays(year))
            .collect()
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.providers.iter().any(|p| p.is_holiday(date))
    }
}
