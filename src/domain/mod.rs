//! Domain layer for the Holocron plugin.
//!
//! Catalog types and formatting rules, independent of Zellij APIs and of the
//! terminal renderer.
//!
//! # Organization
//!
//! - [`category`]: The closed set of browsable categories
//! - [`item`]: Loosely structured catalog records
//! - [`page`]: One fetched page and pagination arithmetic
//! - [`detail`]: Category-specific detail layout
//! - [`error`]: Error types and result alias

pub mod category;
pub mod detail;
pub mod error;
pub mod item;
pub mod page;

pub use category::Category;
pub use detail::{DetailField, DetailView};
pub use error::{HolocronError, Result};
pub use item::Item;
pub use page::{PageResult, PAGE_SIZE};
