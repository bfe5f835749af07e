use clap::Args;
use shiftcal_core::{Config, Group, HolidayProvider, MonthGrid, NoHolidays, YearCalendar};

use crate::render;

#[derive(Args)]
pub struct CalendarArgs {
    /// Rotation group (A-E); defaults to the configured group
    #[arg(long, short)]
    group: Option<Group>,
    /// Year; defaults to the configured year or the current year
    #[arg(long, short)]
    year: Option<i32>,
    /// Only show this month (1-12)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,
    /// Do not highlight holidays
    #[arg(long)]
    no_holidays: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: CalendarArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let resolver = config.resolver();
    let group = super::group_or_default(args.group, &config);
    let year = super::year_or_default(args.year, &config);

    let configured = config.holiday_provider();
    let holidays: &dyn HolidayProvider = if args.no_holidays {
        &NoHolidays
    } else {
        &configured
    };

    let months = match args.month {
        Some(month) => vec![MonthGrid::build(&resolver, group, year, month, holidays)?],
        None => YearCalendar::build(&resolver, group, year, holidays)?.months,
    };

    if args.json {
        let calendar = YearCalendar { year, group, months };
        println!("{}", serde_json::to_string_pretty(&calendar)?);
        return Ok(());
    }

    println!("Shift calendar {year} - group {group}");
    println!("{}\n", render::legend());
    for grid in &months {
        println!("{}", render::month(grid));
    }
    Ok(())
}
