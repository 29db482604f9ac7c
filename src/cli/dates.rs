//! `bearthday dates` command implementation
//!
//! Lists the photo dates currently available in the EPIC archive, newest
//! first.

use crate::cli::output_format::OutputFormat;
use crate::cli::output_types::{CommandOutput, DatesOutput};
use crate::epic::{self, EpicClient};
use crate::error::Result;
use crate::utils::output::spinner;
use clap::Args;

#[derive(Args)]
#[command(after_help = "\
Examples:
  bearthday dates                         List all available photo dates
  bearthday dates --limit 10              Show only the 10 newest
  bearthday dates --format json")]
pub struct DatesArgs {
    /// Show at most N dates
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Re-fetch the dates feed instead of using the local cache
    #[arg(long)]
    pub refresh: bool,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(args: &DatesArgs) -> Result<()> {
    let quiet = args.format.is_machine_readable();

    let client = EpicClient::new();
    let progress = (!quiet).then(|| spinner("Fetching available photo dates..."));
    let fetched = epic::available_dates_cached(&client, args.refresh);
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }
    let (mut dates, from_cache) = fetched?;

    if let Some(limit) = args.limit {
        dates.truncate(limit);
    }

    let output = DatesOutput {
        status: "success".to_string(),
        date_count: dates.len(),
        from_cache,
        dates,
    };

    match args.format {
        OutputFormat::Json => println!("{}", output.to_json()),
        OutputFormat::Human => {
            if output.dates.is_empty() {
                println!("No photo dates available.");
                return Ok(());
            }

            let source = if output.from_cache { " (cached)" } else { "" };
            println!("{} available photo dates{}:", output.date_count, source);
            for date in &output.dates {
                println!("  {}", date);
            }
        }
    }

    Ok(())
}
