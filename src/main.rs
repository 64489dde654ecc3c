//! `easter` command line front-end.
//!
//! ```bash
//! # Ask for a year on stdin
//! easter
//!
//! # Interactive form with a 4-digit field
//! easter form
//!
//! # One-shot
//! easter year 2028
//! ```

use std::error::Error;
use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use easter_date::computus::sentence;
use easter_date::{Settings, Year, easter, form, prompt};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "easter")]
#[command(about = "Easter Sunday for any year (Meeus/Jones/Butcher algorithm)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Accept years before 1583 and negative years
    #[arg(long, global = true)]
    proleptic: bool,

    /// Print results without colours
    #[arg(long, global = true)]
    no_color: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for one year on standard input (default)
    Prompt,

    /// Interactive form with a masked 4-digit year field
    Form,

    /// Print Easter Sunday for the given year
    Year {
        /// Year to compute
        #[arg(allow_hyphen_values = true)]
        year: String,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            proleptic: self.proleptic,
            color:     !self.no_color,
        }
    }
}

fn init_logging(verbose: u8, color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    // stdout carries the answers, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(color)
        .compact()
        .try_init();
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = cli.settings();
    init_logging(cli.verbose, settings.color);
    tracing::info!(proleptic = settings.proleptic, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Prompt) {
        Commands::Prompt => {
            let rejection = prompt::run(&mut stdin.lock(), &mut stdout.lock(), &settings)?;
            Ok(if rejection.is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Form => {
            form::run(&mut stdin.lock(), &mut stdout.lock(), settings)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Year { year } => match Year::parse_text(&year, &settings) {
            Ok(year) => {
                let date = easter(year);
                println!("{}", sentence(year, date));
                Ok(ExitCode::SUCCESS)
            }
            Err(rejection) => {
                tracing::debug!(input = %year, error = ?rejection, "rejected year");
                eprintln!("{rejection}");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
