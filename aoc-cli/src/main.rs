//! AOC CLI - fetch Advent of Code inputs and submit answers from the shell

mod cli;
mod config;
mod error;
mod output;

use aoc_utils::{Level, PuzzleDate};
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use error::CliError;
use output::OutputFormatter;

fn main() {
    aoc_utils::init_logging();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = Config::from_args(&args)?;
    let formatter = OutputFormatter::new(config.quiet);

    match args.command {
        Command::Date { namespace, year } => {
            let default_year = year.or(config.settings.default_year);
            let date = PuzzleDate::from_namespace(&namespace, default_year)?;
            formatter.print_date(date);
        }
        Command::Input { year, day, part } => {
            let date = PuzzleDate::new(year, day)?;
            let input = match part {
                Some(part) => config.into_context()?.read_part_input(date, Level::new(part)?)?,
                None => {
                    if config.store().get(date).is_none() {
                        config.ensure_session(&format!(
                            "No local input for {}; a session token is required to download it",
                            date
                        ))?;
                    }
                    config.into_context()?.read_puzzle_input(date)?
                }
            };
            formatter.print_input(&input);
        }
        Command::Submit {
            year,
            day,
            level,
            answer,
        } => {
            let date = PuzzleDate::new(year, day)?;
            let level = Level::new(level)?;
            config.ensure_session("Session token required for submission")?;
            let feedback = config
                .into_context()?
                .send_puzzle_answer(date, level, &answer)?;
            formatter.print_feedback(date, level.number(), &feedback);
        }
    }

    Ok(())
}
