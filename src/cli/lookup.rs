//! `bearthday lookup` command implementation
//!
//! The full pipeline: fetch the available photo dates, match the birthdate
//! against them, then fetch the image frames for the matched date and print
//! their display URLs.

use crate::cli::output_format::OutputFormat;
use crate::cli::output_types::{CommandOutput, LookupOutput};
use crate::epic::{self, EpicClient, PhotoArchive};
use crate::error::Result;
use crate::matcher::{self, DateMatch};
use crate::utils::output::{print_warning, spinner};
use clap::Args;
use colored::Colorize;

#[derive(Args)]
#[command(after_help = "\
Examples:
  bearthday lookup 1969-07-20             Photo from your most recent birthday
  bearthday lookup 1969-07-20 --refresh   Bypass the cached dates feed
  bearthday lookup 1969-07-20 --format json")]
pub struct LookupArgs {
    /// Birthdate as YYYY-MM-DD (the year is ignored for matching)
    pub birthdate: String,

    /// Re-fetch the dates feed instead of using the local cache
    #[arg(long)]
    pub refresh: bool,

    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(args: &LookupArgs) -> Result<()> {
    // Reject malformed input before any network I/O
    matcher::validate_date(&args.birthdate)?;

    let client = EpicClient::new();
    let output = run_lookup(&client, &args.birthdate, args.refresh, args.format)?;

    match args.format {
        OutputFormat::Json => println!("{}", output.to_json()),
        OutputFormat::Human => print_human(&output),
    }

    Ok(())
}

/// Fetch, match and fetch again, against any archive implementation.
///
/// Shared with `bearthday browse`, which renders the result differently.
pub fn run_lookup(
    archive: &dyn PhotoArchive,
    birthdate: &str,
    refresh: bool,
    format: OutputFormat,
) -> Result<LookupOutput> {
    let quiet = format.is_machine_readable();

    let progress = (!quiet).then(|| spinner("Fetching available photo dates..."));
    let fetched = epic::available_dates_cached(archive, refresh);
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }
    let (dates, from_cache) = fetched?;

    let matched = matcher::nearest_date(birthdate, &dates)?;

    let progress = (!quiet).then(|| spinner("Fetching photos..."));
    let images = archive.images_for_date(&matched.date);
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }
    let urls = epic::image_urls(&matched.date, &images?);

    let exact = matched.is_exact();
    let DateMatch { date, annotation } = matched;
    Ok(LookupOutput {
        status: "success".to_string(),
        birthdate: birthdate.to_string(),
        exact,
        date,
        annotation,
        from_cache,
        image_count: urls.len(),
        images: urls,
    })
}

fn print_human(output: &LookupOutput) {
    if output.exact {
        println!(
            "{} A photo of Earth was taken on your most recent birthday.",
            "Bearthday!".green().bold()
        );
    } else {
        // No photo on the birthday itself; show the closest date after it
        let annotation = output.annotation.as_deref().unwrap_or(&output.date);
        println!("{} {}", "Closest date match:".yellow().bold(), annotation);
    }
    println!();
    println!("Date: {}", output.date);

    if output.images.is_empty() {
        print_warning("No photos published for that date.");
        return;
    }

    let noun = if output.image_count == 1 {
        "photo"
    } else {
        "photos"
    };
    println!("{} {} from that day:", output.image_count, noun);
    for url in &output.images {
        println!("  {}", url);
    }
}
