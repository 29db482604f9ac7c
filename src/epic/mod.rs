//! NASA EPIC archive access
//!
//! Two endpoints matter: the list of all dates with photos, and the list of
//! image frames for one date. The `PhotoArchive` trait covers both so
//! commands can be exercised against a stub; `EpicClient` is the real
//! implementation over HTTP.

pub mod cache;
pub mod client;

pub use client::EpicClient;

use crate::error::Result;
use serde::Deserialize;

/// Base URL for both the JSON API and the image archive
pub const EPIC_BASE_URL: &str = "https://epic.gsfc.nasa.gov";

/// Upper bound on dates worth fetching: a photo every day of a leap year.
/// The matcher never looks further back than the most recent birthday.
pub const MAX_DATES: usize = 366;

/// One entry in the all-dates feed
#[derive(Debug, Deserialize)]
pub struct AvailableDate {
    pub date: String,
}

/// One image record from the per-date endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EpicImage {
    /// Frame name, e.g. `epic_1b_20200220140249`
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

/// The two archive calls the application makes, in the order it makes them:
/// fetch the candidate dates, match against them, then fetch the frames for
/// the matched date.
pub trait PhotoArchive {
    /// Dates with at least one photo, newest first, at most [`MAX_DATES`].
    fn available_dates(&self) -> Result<Vec<String>>;

    /// Image frames taken on a specific `YYYY-MM-DD` date.
    fn images_for_date(&self, date: &str) -> Result<Vec<EpicImage>>;
}

/// Build the archive URL for one frame.
///
/// `date` must be a validated `YYYY-MM-DD` string; the archive path uses
/// slashes instead of dashes.
pub fn archive_url(date: &str, image: &str) -> String {
    format!(
        "{}/archive/natural/{}/{}/{}/png/{}.png",
        EPIC_BASE_URL,
        &date[..4],
        &date[5..7],
        &date[8..10],
        image
    )
}

/// Map a day's image records to their display URLs.
pub fn image_urls(date: &str, images: &[EpicImage]) -> Vec<String> {
    images
        .iter()
        .map(|img| archive_url(date, &img.image))
        .collect()
}

/// Fetch the available dates, preferring the local cache unless `refresh`
/// is set. Returns the dates and whether they came from the cache.
///
/// Cache failures are silent: a stale or unreadable cache file degrades to
/// a live fetch, and a failed cache write never fails the command.
pub fn available_dates_cached(
    archive: &dyn PhotoArchive,
    refresh: bool,
) -> Result<(Vec<String>, bool)> {
    if !refresh {
        if let Some(dates) = cache::load_fresh_dates() {
            return Ok((dates, true));
        }
    }

    let dates = archive.available_dates()?;
    let _ = cache::store(&dates);
    Ok((dates, false))
}
