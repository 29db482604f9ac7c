// Colored terminal output helpers
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn print_success(msg: &str) {
    println!("{} {}", "OK".green(), msg);
}

pub fn print_warning(msg: &str) {
    println!("{} {}", "⚠️ ".yellow(), msg);
}

/// Spinner shown while a network fetch runs in human mode.
///
/// Callers must `finish_and_clear()` before printing results.
pub fn spinner(msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
