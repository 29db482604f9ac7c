//! `bearthday cache` command implementation
//!
//! Manages the cached dates feed: show its location, inspect its contents,
//! or remove it.

use crate::cli::output_format::OutputFormat;
use crate::cli::output_types::{
    CacheCleanOutput, CacheInfoOutput, CachePathOutput, CommandOutput,
};
use crate::epic::cache;
use crate::error::Result;
use crate::utils::output::print_success;
use clap::{Args, Subcommand};

#[derive(Args)]
#[command(about = "Manage the cached dates feed", long_about = None)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

#[derive(Subcommand)]
pub enum CacheCommand {
    /// Show the cache file path
    Path(PathArgs),
    /// Show cached feed statistics
    Info(InfoArgs),
    /// Remove the cached dates feed
    Clean(CleanArgs),
}

#[derive(Args)]
pub struct PathArgs {
    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: &CacheArgs) -> Result<()> {
    match &args.command {
        CacheCommand::Path(path_args) => execute_path(path_args),
        CacheCommand::Info(info_args) => execute_info(info_args),
        CacheCommand::Clean(clean_args) => execute_clean(clean_args),
    }
}

fn execute_path(args: &PathArgs) -> Result<()> {
    let output = CachePathOutput {
        status: "success".to_string(),
        path: cache::cache_file(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", output.to_json()),
        OutputFormat::Human => println!("{}", output.path.display()),
    }

    Ok(())
}

fn execute_info(args: &InfoArgs) -> Result<()> {
    let path = cache::cache_file();
    let cached = cache::load();

    let output = match &cached {
        Some(entry) => CacheInfoOutput {
            status: "success".to_string(),
            path,
            exists: true,
            fresh: entry.is_fresh(),
            date_count: entry.dates.len(),
            age_secs: entry.age_secs(),
        },
        None => CacheInfoOutput {
            status: "success".to_string(),
            path,
            exists: false,
            fresh: false,
            date_count: 0,
            age_secs: 0,
        },
    };

    match args.format {
        OutputFormat::Json => println!("{}", output.to_json()),
        OutputFormat::Human => {
            println!("Cache file: {}", output.path.display());
            if !output.exists {
                println!("No cached dates feed.");
                return Ok(());
            }
            let freshness = if output.fresh { "fresh" } else { "stale" };
            println!(
                "{} dates, fetched {}s ago ({})",
                output.date_count, output.age_secs, freshness
            );
        }
    }

    Ok(())
}

fn execute_clean(args: &CleanArgs) -> Result<()> {
    let removed = cache::clear()?;

    let output = CacheCleanOutput {
        status: "success".to_string(),
        removed,
    };

    if args.quiet {
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => println!("{}", output.to_json()),
        OutputFormat::Human => {
            if removed {
                print_success("Removed cached dates feed.");
            } else {
                println!("Nothing to remove.");
            }
        }
    }

    Ok(())
}
