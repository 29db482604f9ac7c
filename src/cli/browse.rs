//! `bearthday browse` command implementation
//!
//! Same lookup as `bearthday lookup`, followed by an interactive carousel
//! over the day's photos. Navigation wraps at both ends.

use crate::carousel::Carousel;
use crate::cli::lookup::run_lookup;
use crate::cli::output_format::OutputFormat;
use crate::epic::EpicClient;
use crate::error::Result;
use crate::matcher;
use crate::utils::output::print_warning;
use clap::Args;
use colored::Colorize;
use dialoguer::Input;

#[derive(Args)]
#[command(after_help = "\
Examples:
  bearthday browse 1969-07-20             Page through that day's photos")]
pub struct BrowseArgs {
    /// Birthdate as YYYY-MM-DD (the year is ignored for matching)
    pub birthdate: String,

    /// Re-fetch the dates feed instead of using the local cache
    #[arg(long)]
    pub refresh: bool,
}

pub fn execute(args: &BrowseArgs) -> Result<()> {
    matcher::validate_date(&args.birthdate)?;

    let client = EpicClient::new();
    let output = run_lookup(&client, &args.birthdate, args.refresh, OutputFormat::Human)?;

    if output.exact {
        println!(
            "{} A photo of Earth was taken on your most recent birthday.",
            "Bearthday!".green().bold()
        );
    } else {
        let annotation = output.annotation.as_deref().unwrap_or(&output.date);
        println!("{} {}", "Closest date match:".yellow().bold(), annotation);
    }
    println!("Date: {}", output.date);
    println!();

    if output.images.is_empty() {
        print_warning("No photos published for that date.");
        return Ok(());
    }

    if output.images.len() == 1 {
        println!("One photo from that day:");
        println!("  {}", output.images[0]);
        return Ok(());
    }

    browse_carousel(output.images)
}

/// Prompt loop over the photo URLs: n = next, p = previous, q = quit.
fn browse_carousel(images: Vec<String>) -> Result<()> {
    let mut carousel = Carousel::new(images)?;

    loop {
        let (position, total) = carousel.position();
        println!("Image {} of {}", position, total);
        println!("  {}", carousel.current());

        let command: String = Input::new()
            .with_prompt("[n]ext, [p]rev, [q]uit")
            .default("n".to_string())
            .interact_text()
            .unwrap_or_else(|_| "q".to_string());

        match command.trim() {
            "n" | "next" => {
                carousel.next()?;
            }
            "p" | "prev" => {
                carousel.prev()?;
            }
            "q" | "quit" => break,
            _ => println!("Unrecognized command '{}'", command.trim()),
        }
        println!();
    }

    Ok(())
}
