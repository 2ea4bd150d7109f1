//! One page of catalog results.

use crate::domain::error::{HolocronError, Result};
use crate::domain::Item;
use serde::{Deserialize, Serialize};

/// Items per page served by the catalog API.
pub const PAGE_SIZE: u64 = 10;

/// A single fetched page.
///
/// `count` is the total across all pages, not the length of `results`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageResult {
    pub count: u64,
    pub results: Vec<Item>,
}

impl PageResult {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns [`HolocronError::Parse`] if the body is not JSON and
    /// [`HolocronError::Shape`] if it is JSON without an integer `count` and an
    /// array of objects under `results`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        serde_json::from_value(value).map_err(|e| HolocronError::Shape(e.to_string()))
    }

    /// Number of pages needed to show `count` items.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        total_pages(self.count)
    }
}

/// `ceil(count / PAGE_SIZE)`.
///
/// ```
/// use holocron::domain::page::total_pages;
///
/// assert_eq!(total_pages(23), 3);
/// assert_eq!(total_pages(20), 2);
/// assert_eq!(total_pages(0), 0);
/// ```
#[must_use]
pub const fn total_pages(count: u64) -> u64 {
    count / PAGE_SIZE + if count % PAGE_SIZE == 0 { 0 } else { 1 }
}
