pub mod calendar;
pub mod config;
pub mod groups;
pub mod holidays;
pub mod resolve;
pub mod roster;
pub mod summary;

use chrono::{Datelike, Local};
use shiftcal_core::{Config, Group};

/// Group from the command line, else the configured default.
fn group_or_default(group: Option<Group>, config: &Config) -> Group {
    let resolved = group.unwrap_or(config.calendar.default_group);
    tracing::debug!(group = %resolved, from_args = group.is_some(), "group selected");
    resolved
}

/// Year from the command line, else the configured default, else this year.
fn year_or_default(year: Option<i32>, config: &Config) -> i32 {
    let resolved = year.unwrap_or_else(|| config.year_or(Local::now().year()));
    tracing::debug!(year = resolved, from_args = year.is_some(), "year selected");
    resolved
}
