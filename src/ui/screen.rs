//! Retained view contents drawn by the terminal renderer.

use crate::domain::DetailView;
use crate::ui::view::{CatalogView, ListEntry, PageControl};

/// The open detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub detail: DetailView,
    /// Shows the item as raw JSON instead of the formatted layout.
    pub raw: bool,
    /// First body line shown.
    pub scroll: usize,
}

/// What is currently on screen.
///
/// Zellij draws on demand, so the pipeline's output is kept here until the
/// next `render` pass reads it.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub entries: Vec<ListEntry>,
    pub controls: Vec<PageControl>,
    pub modal: Option<Modal>,
}

impl Screen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active page control.
    #[must_use]
    pub fn active_control(&self) -> Option<usize> {
        self.controls.iter().position(|c| c.active)
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Flips the raw JSON view of the open modal and scrolls back to the top.
    /// Returns `false` if closed.
    pub fn toggle_raw(&mut self) -> bool {
        self.modal.as_mut().map_or(false, |modal| {
            modal.raw = !modal.raw;
            modal.scroll = 0;
            true
        })
    }
}

impl CatalogView for Screen {
    fn render_list(&mut self, entries: Vec<ListEntry>) {
        self.entries = entries;
    }

    fn render_pagination(&mut self, controls: Vec<PageControl>) {
        self.controls = controls;
    }

    fn show_modal(&mut self, detail: DetailView) {
        self.modal = Some(Modal {
            detail,
            raw: false,
            scroll: 0,
        });
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}
