use clap::Args;
use shiftcal_core::{Config, HolidayProvider};

#[derive(Args)]
pub struct HolidaysArgs {
    /// Year; defaults to the configured year or the current year
    #[arg(long, short)]
    year: Option<i32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: HolidaysArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let year = super::year_or_default(args.year, &config);
    let holidays = config.holiday_provider().holidays(year);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
        return Ok(());
    }

    if holidays.is_empty() {
        println!("No holidays configured for {year}.");
        return Ok(());
    }
    for date in holidays {
        println!("{}", date.format("%Y-%m-%d %a"));
    }
    Ok(())
}
