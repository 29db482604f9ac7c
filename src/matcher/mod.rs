//! Nearest-birthday date matching
//!
//! Maps a birthdate onto the EPIC archive's list of available photo dates.
//! If a photo exists for the most recent occurrence of the birth month/day,
//! that date wins; otherwise the closest available date after it does.
//!
//! Dates are `YYYY-MM-DD` strings throughout, so lexical comparison is
//! chronological comparison and nothing needs to be parsed into a calendar
//! type. The available-dates list arrives newest first, matching the feed's
//! natural order, and is scanned at most once (n ≤ 366).

use crate::error::{Error, Result};

/// Result of matching a birthdate against the available photo dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// The matched `YYYY-MM-DD` date, guaranteed present in the input list.
    pub date: String,
    /// `None` for an exact hit on the most recent birthday, otherwise the
    /// matched date rendered `MM-DD-YYYY` for display.
    pub annotation: Option<String>,
}

impl DateMatch {
    /// True when a photo exists for the exact birth month/day.
    pub fn is_exact(&self) -> bool {
        self.annotation.is_none()
    }
}

/// Find the photo date closest to the most recent occurrence of the
/// birthdate's month/day.
///
/// `image_dates` must be sorted descending (newest first). Duplicate entries
/// are tolerated; only the first occurrence at a value is ever used. The
/// birthdate's year is ignored — only month and day matter.
///
/// Returns an exact match without annotation when one exists. Otherwise
/// returns the nearest date after the target birthday, annotated
/// `MM-DD-YYYY`. If the target predates the entire feed, the oldest entry is
/// the nearest date after it and is returned annotated.
pub fn nearest_date(birthdate: &str, image_dates: &[String]) -> Result<DateMatch> {
    validate_date(birthdate)?;
    let newest = image_dates.first().ok_or(Error::EmptyDateList)?;
    for date in image_dates {
        validate_date(date)?;
    }

    let last_birthday = last_birthday(birthdate, newest)?;

    let mut previous: Option<&String> = None;
    for date in image_dates {
        if *date == last_birthday {
            return Ok(DateMatch {
                date: date.clone(),
                annotation: None,
            });
        }
        if date.as_str() < last_birthday.as_str() {
            // Scanned past the target going back in time; the entry before
            // this one is the closest date after the birthday. The newest
            // entry can never sit below the target, so previous is set.
            let closest = previous.unwrap_or(date);
            return Ok(DateMatch {
                date: closest.clone(),
                annotation: Some(format_month_first(closest)),
            });
        }
        previous = Some(date);
    }

    // Target is older than every entry, so all of them are after the
    // birthday and the oldest is the nearest.
    let oldest = image_dates.last().ok_or(Error::EmptyDateList)?;
    Ok(DateMatch {
        date: oldest.clone(),
        annotation: Some(format_month_first(oldest)),
    })
}

/// Compute the most recent occurrence of the birthdate's month/day relative
/// to the newest available photo date.
///
/// If the birthday in the newest photo's year has already happened by that
/// photo's date, that is the most recent birthday; otherwise it was in the
/// previous year.
fn last_birthday(birthdate: &str, newest: &str) -> Result<String> {
    let month_day = &birthdate[4..10]; // "-MM-DD"
    let newest_year: i32 = newest[..4]
        .parse()
        .map_err(|_| Error::InvalidDateFormat(newest.to_string()))?;

    let birthday_this_year = format!("{}{}", &newest[..4], month_day);
    if birthday_this_year.as_str() <= newest {
        Ok(birthday_this_year)
    } else {
        Ok(format!("{:04}{}", newest_year - 1, month_day))
    }
}

/// Check that a date string is well-formed `YYYY-MM-DD`.
///
/// Month must be 01-12 and day 01-31; calendar validity beyond that (leap
/// days, 30-day months) is not checked — the feed only ever contains real
/// dates and a birthdate like 02-30 simply never matches anything better
/// than its fallback.
pub fn validate_date(date: &str) -> Result<()> {
    let bytes = date.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(Error::InvalidDateFormat(date.to_string()));
    }

    let month: u32 = date[5..7]
        .parse()
        .map_err(|_| Error::InvalidDateFormat(date.to_string()))?;
    let day: u32 = date[8..10]
        .parse()
        .map_err(|_| Error::InvalidDateFormat(date.to_string()))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(Error::InvalidDateFormat(date.to_string()));
    }

    Ok(())
}

/// Render a `YYYY-MM-DD` date as `MM-DD-YYYY`.
fn format_month_first(date: &str) -> String {
    format!("{}-{}", &date[5..10], &date[..4])
}
