use chrono::NaiveDate;
use clap::Args;
use shiftcal_core::{Config, Group};

use crate::render;

#[derive(Args)]
pub struct SummaryArgs {
    /// Rotation group (A-E); defaults to the configured group
    #[arg(long, short)]
    group: Option<Group>,
    /// Year; defaults to the configured year or the current year
    #[arg(long, short)]
    year: Option<i32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SummaryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let resolver = config.resolver();
    let group = super::group_or_default(args.group, &config);
    let year = super::year_or_default(args.year, &config);

    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| format!("invalid year: {year}"))?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| format!("invalid year: {year}"))?;
    let summary = resolver.summarize(group, start, end);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Group {group}, {year}:");
        print!("{}", render::summary(&summary));
    }
    Ok(())
}
