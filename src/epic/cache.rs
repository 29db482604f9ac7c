//! Local cache of the available-dates feed
//!
//! The all-dates endpoint returns the same answer for hours at a time, so
//! the feed is cached as JSON under the user's cache directory with a short
//! TTL. Every failure path here is silent: a missing, stale or corrupt
//! cache file means a live fetch, and a failed write never fails a command.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Cache file storing the last fetched dates feed
const CACHE_FILE: &str = "dates.json";

/// Cache is considered fresh for 6 hours
const CACHE_TTL_SECS: u64 = 6 * 60 * 60;

/// Cached dates feed, serialized to `~/.cache/bearthday/dates.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesCache {
    pub fetched_at_unix: u64,
    pub dates: Vec<String>,
}

impl DatesCache {
    /// Seconds since this cache entry was written
    pub fn age_secs(&self) -> u64 {
        now_unix().saturating_sub(self.fetched_at_unix)
    }

    /// True while the entry is within its TTL
    pub fn is_fresh(&self) -> bool {
        self.age_secs() < CACHE_TTL_SECS
    }
}

/// Get the bearthday cache directory.
///
/// Uses XDG Base Directory Specification:
/// - Linux/macOS: `~/.cache/bearthday/`
/// - Windows: `%LOCALAPPDATA%/bearthday/cache/`
pub fn cache_dir() -> PathBuf {
    if cfg!(windows) {
        std::env::var("LOCALAPPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("AppData")
                    .join("Local")
            })
            .join("bearthday")
            .join("cache")
    } else {
        std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".cache")
            })
            .join("bearthday")
    }
}

/// Path to the cached dates file
pub fn cache_file() -> PathBuf {
    cache_dir().join(CACHE_FILE)
}

/// Load the cached feed from disk, regardless of freshness.
pub fn load() -> Option<DatesCache> {
    let contents = std::fs::read_to_string(cache_file()).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Load the cached dates if the entry exists and is still fresh.
pub fn load_fresh_dates() -> Option<Vec<String>> {
    let cache = load()?;
    if cache.is_fresh() && !cache.dates.is_empty() {
        Some(cache.dates)
    } else {
        None
    }
}

/// Write the feed to the cache file.
pub fn store(dates: &[String]) -> Result<()> {
    let cache = DatesCache {
        fetched_at_unix: now_unix(),
        dates: dates.to_vec(),
    };

    let dir = cache_dir();
    std::fs::create_dir_all(&dir).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create cache directory {}: {}", dir.display(), e),
        ))
    })?;

    let json = serde_json::to_string_pretty(&cache)?;
    std::fs::write(cache_file(), json)?;
    Ok(())
}

/// Remove the cache file. Returns whether a file was actually removed.
pub fn clear() -> Result<bool> {
    let path = cache_file();
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(&path)?;
    Ok(true)
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
