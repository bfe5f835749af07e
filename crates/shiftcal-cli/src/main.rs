use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "shiftcal", version, about = "Annual work-shift calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift worked by a group on one date
    Resolve(commands::resolve::ResolveArgs),
    /// Month grids for a group and year
    Calendar(commands::calendar::CalendarArgs),
    /// Every group's shift on one date
    Roster(commands::roster::RosterArgs),
    /// Per-shift day counts for a year
    Summary(commands::summary::SummaryArgs),
    /// List groups and their rotation patterns
    Groups {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List holidays for a year
    Holidays(commands::holidays::HolidaysArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Calendar(args) => commands::calendar::run(args),
        Commands::Roster(args) => commands::roster::run(args),
        Commands::Summary(args) => commands::summary::run(args),
        Commands::Groups { json } => commands::groups::run(json),
        Commands::Holidays(args) => commands::holidays::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "shiftcal", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
