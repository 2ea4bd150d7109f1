//! Terminal user interface.
//!
//! ```text
//! Controller → CatalogView (Screen) ─┐
//!                                    ├→ compute_viewmodel → UIViewModel → render → ANSI
//! AppState cursor, theme, pane size ─┘
//! ```
//!
//! - [`view`]: the [`CatalogView`](view::CatalogView) seam the render pipeline writes to
//! - [`screen`]: retained view contents for the terminal
//! - [`viewmodel`]: positioned, display-ready snapshot
//! - [`layout`]: geometry and mouse hit-testing
//! - [`renderer`] and [`components`]: ANSI output
//! - [`theme`]: color schemes

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod screen;
pub mod theme;
pub mod view;
pub mod viewmodel;

pub use renderer::render;
pub use screen::Screen;
pub use theme::Theme;
pub use view::{CatalogView, ListEntry, PageControl};
pub use viewmodel::UIViewModel;
