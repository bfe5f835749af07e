//! Date-to-shift resolution.
//!
//! Every group follows a fixed 35-day cycle anchored at a shared epoch. The
//! shift for a date is the pattern slot at the number of days elapsed since
//! the epoch, reduced modulo the cycle length. Dates before the epoch wrap
//! around from the end of the cycle, so the day before the epoch reads slot
//! 34.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::group::Group;
use crate::pattern::{PatternTable, CYCLE_LEN};
use crate::shift::ShiftType;
use crate::storage::Config;

/// Cycle anchor used when nothing else is configured.
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2026, 1, 1) {
    Some(date) => date,
    None => panic!("default epoch is not a valid date"),
};

/// Maps (group, date) to a shift.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftResolver {
    epoch: NaiveDate,
    patterns: PatternTable,
}

impl Default for ShiftResolver {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH, PatternTable::builtin())
    }
}

impl ShiftResolver {
    pub fn new(epoch: NaiveDate, patterns: PatternTable) -> Self {
        tracing::debug!(%epoch, groups = patterns.len(), "shift resolver ready");
        Self { epoch, patterns }
    }

    /// Build a resolver from the `[cycle]` section of the configuration.
    ///
    /// Starts from the built-in table and applies any per-group overrides;
    /// see [`PatternTable::apply_overrides`] for how bad overrides are handled.
    pub fn from_config(config: &Config) -> Self {
        let mut patterns = PatternTable::builtin();
        patterns.apply_overrides(config.pattern_overrides());
        Self::new(config.cycle.epoch, patterns)
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Signed number of days from the epoch to `date`.
    pub fn offset(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.epoch).num_days()
    }

    /// Position of `date` within the cycle, always in `0..CYCLE_LEN`.
    pub fn cycle_index(&self, date: NaiveDate) -> usize {
        // rem_euclid keeps the result non-negative for dates before the epoch.
        self.offset(date).rem_euclid(CYCLE_LEN as i64) as usize
    }

    /// Shift worked by `group` on `date`.
    ///
    /// Total: a group without a pattern is resting every day.
    pub fn resolve(&self, group: Group, date: NaiveDate) -> ShiftType {
        match self.patterns.get(group) {
            Some(pattern) => pattern.get(self.cycle_index(date)),
            None => ShiftType::Rest,
        }
    }

    /// Resolve every day in `start..=end`. Empty when `end < start`.
    pub fn resolve_range(
        &self,
        group: Group,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(NaiveDate, ShiftType)> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| (d, self.resolve(group, d)))
            .collect()
    }

    /// Count each shift type worked by `group` in `start..=end`.
    pub fn summarize(&self, group: Group, start: NaiveDate, end: NaiveDate) -> ShiftSummary {
        let mut summary = ShiftSummary::default();
        for (_, shift) in self.resolve_range(group, start, end) {
            summary.add(shift);
        }
        summary
    }

    /// What every group works on `date`, in group order.
    pub fn roster(&self, date: NaiveDate) -> Vec<(Group, ShiftType)> {
        Group::ALL
            .into_iter()
            .map(|g| (g, self.resolve(g, date)))
            .collect()
    }
}

/// Resolve against the built-in epoch and rotation sheet.
pub fn resolve(group: Group, date: NaiveDate) -> ShiftType {
    static DEFAULT: OnceLock<ShiftResolver> = OnceLock::new();
    DEFAULT.get_or_init(ShiftResolver::default).resolve(group, date)
}

/// Per-shift day counts over a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSummary {
    pub morning: u32,
    pub afternoon: u32,
    pub night: u32,
    pub rest: u32,
}

impl ShiftSummary {
    pub fn add(&mut self, shift: ShiftType) {
        match shift {
            ShiftType::Morning => self.morning += 1,
            ShiftType::Afternoon => self.afternoon += 1,
            ShiftType::Night => self.night += 1,
            ShiftType::Rest => self.rest += 1,
        }
    }

    pub fn get(&self, shift: ShiftType) -> u32 {
        match shift {
            ShiftType::Morning => self.morning,
            ShiftType::Afternoon => self.afternoon,
            ShiftType::Night => self.night,
            ShiftType::Rest => self.rest,
        }
    }

    pub fn working_days(&self) -> u32 {
        self.morning + self.afternoon + self.night
    }

    pub fn total(&self) -> u32 {
        self.working_days() + self.rest
    }
}
