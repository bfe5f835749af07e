//! Month and year grids.
//!
//! A month grid is laid out in calendar weeks starting on Monday. Slots
//! before the first and after the last day of the month are empty.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;
use crate::group::Group;
use crate::holidays::HolidayProvider;
use crate::resolver::{ShiftResolver, ShiftSummary};
use crate::shift::{ShiftType, HOLIDAY_COLOR};

/// Column headers, Monday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name for `month` (1-12).
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// One day in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub shift: ShiftType,
    pub holiday: bool,
}

impl DayCell {
    /// Cell color: holidays override the shift color.
    pub fn color(&self) -> u32 {
        if self.holiday {
            HOLIDAY_COLOR
        } else {
            self.shift.color()
        }
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

pub type Week = [Option<DayCell>; 7];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub name: &'static str,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay out `year`-`month` for `group`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidMonth`] when `month` is outside 1..=12,
    /// [`CalendarError::InvalidYear`] when the year cannot be represented.
    pub fn build(
        resolver: &ShiftResolver,
        group: Group,
        year: i32,
        month: u32,
        holidays: &dyn HolidayProvider,
    ) -> Result<Self, CalendarError> {
        let name = month_name(month).ok_or(CalendarError::InvalidMonth(month))?;
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))?;
        let holiday_set = holidays.holidays(year);

        let mut weeks = Vec::with_capacity(6);
        let mut week: Week = [None; 7];
        let mut col = first.weekday().num_days_from_monday() as usize;

        for date in first.iter_days().take_while(|d| d.month() == month) {
            week[col] = Some(DayCell {
                date,
                shift: resolver.resolve(group, date),
                holiday: holiday_set.contains(&date),
            });
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }

        Ok(Self {
            year,
            month,
            name,
            weeks,
        })
    }

    /// Filled cells in date order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().flatten()
    }

    pub fn summary(&self) -> ShiftSummary {
        let mut summary = ShiftSummary::default();
        for cell in self.days() {
            summary.add(cell.shift);
        }
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCalendar {
    pub year: i32,
    pub group: Group,
    pub months: Vec<MonthGrid>,
}

impl YearCalendar {
    /// Twelve month grids for `year`.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidYear`] when the year cannot be represented.
    pub fn build(
        resolver: &ShiftResolver,
        group: Group,
        year: i32,
        holidays: &dyn HolidayProvider,
    ) -> Result<Self, CalendarError> {
        let months = (1..=12)
            .map(|m| MonthGrid::build(resolver, group, year, m, holidays))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            year,
            group,
            months,
        })
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.months.iter().flat_map(|m| m.days())
    }

    pub fn holiday_count(&self) -> usize {
        self.days().filter(|c| c.holiday).count()
    }

    pub fn summary(&self) -> ShiftSummary {
        let mut summary = ShiftSummary::default();
        for cell in self.days() {
            summary.add(cell.shift);
        }
        summary
    }
}
