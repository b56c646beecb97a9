//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code input and answer helper
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Fetch Advent of Code inputs and submit answers", version)]
pub struct Args {
    /// Directory holding `year{YYYY}/day{DD}` input files
    #[arg(long, global = true, default_value = "resources")]
    pub resources: PathBuf,

    /// Properties file with `aoc.session` (defaults to `<resources>/security.properties`)
    #[arg(long, global = true)]
    pub properties: Option<PathBuf>,

    /// Quiet mode - only print the essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Resolve the puzzle date of a module path such as `solutions::year2022::day06`
    Date {
        /// Module path or dotted package name
        namespace: String,

        /// Year to use when the namespace names none
        #[arg(short, long)]
        year: Option<u16>,
    },

    /// Print a puzzle input, from the resource directory or the server
    Input {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Read the level-specific `a`/`b` file instead of the shared input
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,
    },

    /// Submit an answer and print the server's feedback
    Submit {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        level: u8,

        /// The answer to send
        answer: String,
    },
}
