//! CLI command implementations
//!
//! One module per subcommand, each owning its clap `Args` struct and an
//! `execute` entry point.

pub mod browse;
pub mod cache;
pub mod dates;
pub mod lookup;
pub mod output_format;
pub mod output_types;
