use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use shiftcal_core::{parse_date, Config, Group, HolidayProvider, ShiftType};

#[derive(Args)]
pub struct ResolveArgs {
    /// Date (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    date: NaiveDate,
    /// Rotation group (A-E); defaults to the configured group
    #[arg(long, short)]
    group: Option<Group>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Resolution {
    date: NaiveDate,
    group: Group,
    shift: ShiftType,
    code: char,
    color: String,
    cycle_day: usize,
    holiday: bool,
}

pub fn run(args: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let resolver = config.resolver();
    let group = super::group_or_default(args.group, &config);

    let shift = resolver.resolve(group, args.date);
    let resolution = Resolution {
        date: args.date,
        group,
        shift,
        code: shift.code(),
        color: shift.color_hex(),
        cycle_day: resolver.cycle_index(args.date),
        holiday: config.holiday_provider().is_holiday(args.date),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        let holiday = if resolution.holiday { " (holiday)" } else { "" };
        println!(
            "{} group {}: {} [{}] cycle day {}/{}{}",
            resolution.date,
            group,
            shift,
            shift.code(),
            resolution.cycle_day + 1,
            shiftcal_core::CYCLE_LEN,
            holiday
        );
    }
    Ok(())
}
