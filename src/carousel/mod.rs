//! Cyclic navigation over a fixed set of images
//!
//! The browse command pages through a day's photos with wraparound at both
//! ends. The index arithmetic lives in two standalone functions; `Carousel`
//! carries the position and items together so the CLI never juggles raw
//! indices.

use crate::error::{Error, Result};

/// Advance a zero-based index by one, wrapping at `cycle`.
pub fn increment(index: usize, cycle: usize) -> Result<usize> {
    if cycle == 0 {
        return Err(Error::InvalidCycleLength);
    }
    Ok((index + 1) % cycle)
}

/// Retreat a zero-based index by one, wrapping at `cycle`.
pub fn decrement(index: usize, cycle: usize) -> Result<usize> {
    if cycle == 0 {
        return Err(Error::InvalidCycleLength);
    }
    Ok((index + cycle - 1) % cycle)
}

/// A position within a non-empty list of items, wrapping at both ends.
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Create a carousel positioned at the first item.
    ///
    /// Fails with `InvalidCycleLength` when `items` is empty, since an empty
    /// carousel has no valid position.
    pub fn new(items: Vec<String>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::InvalidCycleLength);
        }
        Ok(Self { items, index: 0 })
    }

    /// The item at the current position.
    pub fn current(&self) -> &str {
        &self.items[self.index]
    }

    /// One-based position and total count, for "Image 2 of 5" displays.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.items.len())
    }

    /// Move forward one item, wrapping past the end.
    pub fn next(&mut self) -> Result<&str> {
        self.index = increment(self.index, self.items.len())?;
        Ok(self.current())
    }

    /// Move back one item, wrapping past the start.
    pub fn prev(&mut self) -> Result<&str> {
        self.index = decrement(self.index, self.items.len())?;
        Ok(self.current())
    }
}
