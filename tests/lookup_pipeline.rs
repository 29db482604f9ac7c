//! End-to-end lookup pipeline over a stub archive
//!
//! Exercises fetch → match → fetch-images with no network, verifying the
//! matcher sits correctly between the two archive calls.

use bearthday::cli::lookup::run_lookup;
use bearthday::cli::output_format::OutputFormat;
use bearthday::epic::{EpicImage, PhotoArchive};
use bearthday::error::{Error, Result};
use serial_test::serial;
use tempfile::TempDir;

struct StubArchive {
    dates: Vec<String>,
}

impl StubArchive {
    fn new(dates: &[&str]) -> Self {
        Self {
            dates: dates.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PhotoArchive for StubArchive {
    fn available_dates(&self) -> Result<Vec<String>> {
        Ok(self.dates.clone())
    }

    fn images_for_date(&self, date: &str) -> Result<Vec<EpicImage>> {
        if !self.dates.contains(&date.to_string()) {
            return Err(Error::Config(format!("Not found: {}", date)));
        }
        let compact = date.replace('-', "");
        Ok(vec![
            EpicImage {
                image: format!("epic_1b_{}000000", compact),
                caption: String::new(),
            },
            EpicImage {
                image: format!("epic_1b_{}120000", compact),
                caption: String::new(),
            },
        ])
    }
}

fn with_temp_cache<F: FnOnce()>(f: F) {
    let temp = TempDir::new().unwrap();
    std::env::set_var("XDG_CACHE_HOME", temp.path());
    f();
    std::env::remove_var("XDG_CACHE_HOME");
}

#[test]
#[serial]
fn test_exact_match_pipeline() {
    with_temp_cache(|| {
        let archive = StubArchive::new(&["2021-01-19", "2020-12-18", "2020-11-18"]);

        let output =
            run_lookup(&archive, "1960-12-18", false, OutputFormat::Json).unwrap();

        assert_eq!(output.date, "2020-12-18");
        assert!(output.exact);
        assert_eq!(output.annotation, None);
        assert_eq!(output.image_count, 2);
        assert!(output.images[0]
            .ends_with("/archive/natural/2020/12/18/png/epic_1b_20201218000000.png"));
    });
}

#[test]
#[serial]
fn test_fallback_match_pipeline() {
    with_temp_cache(|| {
        let archive = StubArchive::new(&["2021-01-19", "2020-12-18", "2020-11-18"]);

        let output =
            run_lookup(&archive, "1960-12-25", false, OutputFormat::Json).unwrap();

        assert_eq!(output.date, "2021-01-19");
        assert!(!output.exact);
        assert_eq!(output.annotation.as_deref(), Some("01-19-2021"));
        // Images are fetched for the matched date, not the birthday
        assert!(output.images[0].contains("/2021/01/19/"));
    });
}

#[test]
#[serial]
fn test_empty_feed_surfaces_typed_error() {
    with_temp_cache(|| {
        let archive = StubArchive::new(&[]);

        let result = run_lookup(&archive, "1960-12-18", false, OutputFormat::Json);
        assert!(matches!(result, Err(Error::EmptyDateList)));
    });
}
