use chrono::NaiveDate;
use clap::Args;
use shiftcal_core::{parse_date, Config, ShiftType};
use std::collections::BTreeMap;

#[derive(Args)]
pub struct RosterArgs {
    /// Date (YYYY-MM-DD)
    #[arg(value_parser = parse_date)]
    date: NaiveDate,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RosterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let resolver = Config::load_or_default().resolver();
    let roster = resolver.roster(args.date);

    if args.json {
        let map: BTreeMap<String, ShiftType> =
            roster.iter().map(|(g, s)| (g.to_string(), *s)).collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    println!("{}", args.date);
    for (group, shift) in roster {
        println!("  {group}  {} {}", shift.code(), shift);
    }
    Ok(())
}
