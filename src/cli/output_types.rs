//! Output types for CLI commands
//!
//! These types ensure consistent output across all commands in JSON format.
//! Each command constructs its output struct and uses the trait methods for
//! serialization.

use serde::Serialize;
use std::path::PathBuf;

/// Trait for command outputs that can be serialized to JSON
pub trait CommandOutput: Serialize {
    /// Get the command name
    fn command_name(&self) -> &'static str;

    /// Serialize to pretty-printed JSON string
    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// =============================================================================
// LookupOutput
// =============================================================================

/// Output for `bearthday lookup` and the non-interactive part of `browse`
#[derive(Debug, Serialize)]
pub struct LookupOutput {
    pub status: String,
    /// Birthdate as supplied by the user
    pub birthdate: String,
    /// Matched photo date, `YYYY-MM-DD`
    pub date: String,
    /// Whether a photo exists on the exact birth month/day
    pub exact: bool,
    /// `MM-DD-YYYY` rendering of the matched date for fallback matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Whether the dates feed came from the local cache
    pub from_cache: bool,
    pub image_count: usize,
    /// Display URLs for every photo taken on the matched date
    pub images: Vec<String>,
}

impl CommandOutput for LookupOutput {
    fn command_name(&self) -> &'static str {
        "lookup"
    }
}

// =============================================================================
// DatesOutput
// =============================================================================

/// Output for `bearthday dates`
#[derive(Debug, Serialize)]
pub struct DatesOutput {
    pub status: String,
    pub date_count: usize,
    /// Whether the feed came from the local cache
    pub from_cache: bool,
    /// Available photo dates, newest first
    pub dates: Vec<String>,
}

impl CommandOutput for DatesOutput {
    fn command_name(&self) -> &'static str {
        "dates"
    }
}

// =============================================================================
// Cache outputs
// =============================================================================

/// Output for `bearthday cache path`
#[derive(Debug, Serialize)]
pub struct CachePathOutput {
    pub status: String,
    pub path: PathBuf,
}

impl CommandOutput for CachePathOutput {
    fn command_name(&self) -> &'static str {
        "cache-path"
    }
}

/// Output for `bearthday cache info`
#[derive(Debug, Serialize)]
pub struct CacheInfoOutput {
    pub status: String,
    pub path: PathBuf,
    pub exists: bool,
    pub fresh: bool,
    pub date_count: usize,
    pub age_secs: u64,
}

impl CommandOutput for CacheInfoOutput {
    fn command_name(&self) -> &'static str {
        "cache-info"
    }
}

/// Output for `bearthday cache clean`
#[derive(Debug, Serialize)]
pub struct CacheCleanOutput {
    pub status: String,
    pub removed: bool,
}

impl CommandOutput for CacheCleanOutput {
    fn command_name(&self) -> &'static str {
        "cache-clean"
    }
}
