//! Plain-text rendering of calendar grids.

use shiftcal_core::{DayCell, MonthGrid, ShiftSummary, ShiftType, WEEKDAY_HEADERS};

/// Width of one day column, including the separating space.
const CELL_WIDTH: usize = 5;

/// Day number, shift code, and `*` on holidays, e.g. `25D*`.
pub fn cell(cell: &DayCell) -> String {
    let marker = if cell.holiday { "*" } else { "" };
    format!("{:>2}{}{}", cell.day(), cell.shift.code(), marker)
}

pub fn month(grid: &MonthGrid) -> String {
    let width = CELL_WIDTH * 7;
    let title = format!("{} {}", grid.name, grid.year);
    let mut out = format!("{title:^width$}\n");

    for header in WEEKDAY_HEADERS {
        out.push_str(&format!("{header:<w$}", w = CELL_WIDTH));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    for week in &grid.weeks {
        let mut line = String::with_capacity(width);
        for slot in week {
            let text = slot.as_ref().map(cell).unwrap_or_default();
            line.push_str(&format!("{text:<w$}", w = CELL_WIDTH));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn legend() -> String {
    let entries: Vec<String> = ShiftType::ALL
        .iter()
        .map(|s| format!("{} {}", s.code(), s.label()))
        .collect();
    format!("{}  * holiday", entries.join("  "))
}

pub fn summary(summary: &ShiftSummary) -> String {
    let mut out = String::new();
    for shift in ShiftType::ALL {
        out.push_str(&format!("  {:<10} {:>4}\n", shift.label(), summary.get(shift)));
    }
    out.push_str(&format!("  {:<10} {:>4}\n", "Working", summary.working_days()));
    out.push_str(&format!("  {:<10} {:>4}\n", "Total", summary.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftcal_core::{Group, NoHolidays, ShiftResolver, SpanishNationalHolidays};

    #[test]
    fn cell_marks_holidays() {
        let r = ShiftResolver::default();
        let grid = MonthGrid::build(&r, Group::A, 2026, 1, &SpanishNationalHolidays).unwrap();
        let first = grid.weeks[0][3].unwrap();
        assert_eq!(cell(&first), " 1D*");
        let fifth = grid.weeks[1][0].unwrap();
        assert_eq!(cell(&fifth), " 5M");
    }

    #[test]
    fn month_layout() {
        let r = ShiftResolver::default();
        let grid = MonthGrid::build(&r, Group::A, 2026, 1, &NoHolidays).unwrap();
        let text = month(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + grid.weeks.len());
        assert_eq!(lines[0].trim(), "January 2026");
        assert_eq!(lines[1], "Mo   Tu   We   Th   Fr   Sa   Su");
        assert_eq!(lines[2], format!("{}1D   2D   3D   4D", " ".repeat(16)));
        assert_eq!(lines[3], " 5M   6M   7M   8T   9T  10T  11T");
    }

    #[test]
    fn legend_lists_codes() {
        assert_eq!(
            legend(),
            "M Morning  T Afternoon  N Night  D Rest  * holiday"
        );
    }

    #[test]
    fn summary_has_totals() {
        let mut s = ShiftSummary::default();
        s.add(ShiftType::Night);
        s.add(ShiftType::Rest);
        let text = summary(&s);
        assert!(text.contains("Night         1"));
        assert!(text.contains("Working       1"));
        assert!(text.contains("Total         2"));
    }
}
