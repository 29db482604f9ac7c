#![allow(dead_code)] // The module tree is shared with the library; some items are library-only

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, Subcommand};
use std::process;

mod carousel;
mod cli;
mod epic;
mod error;
mod matcher;
mod utils;

#[derive(Parser)]
#[command(name = "bearthday")]
#[command(version)]
#[command(about = "Find the satellite photo of Earth taken on your most recent birthday")]
#[command(
    long_about = "bearthday matches your birthdate against NASA's EPIC archive of Earth \
photos and shows the photos from your most recent birthday, or the closest \
date after it when no photo was taken that day."
)]
#[command(after_help = "\
Getting started:
  bearthday lookup 1969-07-20    Photos from your most recent birthday
  bearthday dates --limit 10     Newest available photo dates
  bearthday browse 1969-07-20    Page through a day's photos interactively

Photos: https://epic.gsfc.nasa.gov")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the photo date closest to your birthday and list its photos
    #[command(display_order = 1)]
    Lookup(cli::lookup::LookupArgs),
    /// Page through a day's photos interactively
    #[command(display_order = 2)]
    Browse(cli::browse::BrowseArgs),
    /// List the available photo dates
    #[command(display_order = 3)]
    Dates(cli::dates::DatesArgs),
    /// Manage the cached dates feed
    #[command(display_order = 10)]
    Cache(cli::cache::CacheArgs),
}

/// Handle clap parse errors with custom suggestions for common mistakes
fn handle_parse_error(mut err: clap::Error) -> ! {
    if err.kind() == ErrorKind::InvalidSubcommand {
        if let Some(ContextValue::String(cmd)) = err.get(ContextKind::InvalidSubcommand) {
            let suggestions = match cmd.as_str() {
                "find" | "match" | "search" | "birthday" => Some(vec![
                    "use 'bearthday lookup' to match a birthdate: bearthday lookup 1969-07-20"
                        .into(),
                ]),
                "list" => Some(vec![
                    "use 'bearthday dates' to list photo dates: bearthday dates".into(),
                ]),
                _ => None,
            };
            if let Some(suggestions) = suggestions {
                err.insert(
                    ContextKind::Suggested,
                    ContextValue::StyledStrs(suggestions),
                );
            }
        }
    }
    err.exit()
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => handle_parse_error(e),
    };

    let result = match &cli.command {
        Commands::Lookup(args) => cli::lookup::execute(args),
        Commands::Browse(args) => cli::browse::execute(args),
        Commands::Dates(args) => cli::dates::execute(args),
        Commands::Cache(args) => cli::cache::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
