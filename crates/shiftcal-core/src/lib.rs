//! # Shiftcal Core Library
//!
//! Core logic for an annual work-shift calendar. Five rotation groups each
//! follow a fixed 35-day pattern of morning, afternoon, night and rest days,
//! all anchored at one shared epoch. All operations are available through the
//! `shiftcal` CLI, which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Resolver**: pure (group, date) → shift mapping with negative-offset
//!   wraparound for dates before the epoch
//! - **Patterns**: the built-in rotation sheet and override parsing
//! - **Holidays**: pluggable holiday lookup, with the Spanish national
//!   fixed-date table as default
//! - **Calendar**: Monday-first month grids and year calendars
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ShiftResolver`]: date-to-shift resolution
//! - [`Pattern`] / [`PatternTable`]: 35-day cycles per group
//! - [`HolidayProvider`]: trait for holiday sources
//! - [`MonthGrid`] / [`YearCalendar`]: calendar layouts
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod error;
pub mod group;
pub mod holidays;
pub mod pattern;
pub mod resolver;
pub mod shift;
pub mod storage;

pub use calendar::{month_name, DayCell, MonthGrid, YearCalendar, WEEKDAY_HEADERS};
pub use error::{CalendarError, ConfigError, CoreError, ParseError, PatternError};
pub use group::Group;
pub use holidays::{
    CombinedHolidays, HolidayProvider, NoHolidays, SpanishNationalHolidays, StaticHolidays,
};
pub use pattern::{Pattern, PatternTable, BUILTIN_PATTERNS, CYCLE_LEN};
pub use resolver::{resolve, ShiftResolver, ShiftSummary, DEFAULT_EPOCH};
pub use shift::{ShiftType, HOLIDAY_COLOR};
pub use storage::Config;

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDate`] if the input is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(s.to_string()))
}
