//! Display-ready snapshot of the screen.
//!
//! Built by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! for a given pane size. Carries positions as well as text so the renderer
//! and [`UIViewModel::hit_test`] agree on where everything is.

use crate::domain::Category;
use crate::ui::layout::ModalRect;

#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub tabs: Vec<TabItem>,
    /// Right-aligned header note, e.g. while a request is in flight.
    pub status: Option<String>,
    pub display_items: Vec<DisplayItem>,
    pub pagination: PaginationBar,
    pub modal: Option<ModalBox>,
    pub empty_state: Option<EmptyState>,
    pub footer: FooterInfo,
}

/// One category tab in the header.
#[derive(Debug, Clone)]
pub struct TabItem {
    pub category: Category,
    pub text: String,
    pub is_active: bool,
    pub start_col: usize,
    pub end_col: usize,
}

/// One visible list row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Index into the full entry list.
    pub index: usize,
    pub glyph: char,
    pub name: String,
    pub is_selected: bool,
    pub row: usize,
}

/// The visible part of the pagination control.
#[derive(Debug, Clone, Default)]
pub struct PaginationBar {
    pub row: usize,
    pub controls: Vec<PageItem>,
    /// Controls exist to the left of the visible ones.
    pub elided_before: bool,
    /// Controls exist to the right of the visible ones.
    pub elided_after: bool,
}

#[derive(Debug, Clone)]
pub struct PageItem {
    pub page: u64,
    pub label: String,
    pub is_active: bool,
    pub start_col: usize,
    pub end_col: usize,
}

/// The detail modal, sized and positioned.
#[derive(Debug, Clone)]
pub struct ModalBox {
    pub title: String,
    /// Every body line, including those scrolled out of view.
    pub lines: Vec<String>,
    pub rect: ModalRect,
    /// Index of the first visible body line.
    pub offset: usize,
    pub raw: bool,
}

impl ModalBox {
    /// Body lines inside the frame at the current offset.
    #[must_use]
    pub fn visible_lines(&self) -> &[String] {
        let start = self.offset.min(self.lines.len());
        let end = (start + self.rect.body_capacity()).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Largest offset that still fills the frame.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.rect.body_capacity())
    }

    /// `first-last/total` position text, when the body does not fit.
    #[must_use]
    pub fn scroll_hint(&self) -> Option<String> {
        if self.max_offset() == 0 {
            return None;
        }
        let shown = self.visible_lines().len();
        Some(format!("{}-{}/{}", self.offset + 1, self.offset + shown, self.lines.len()))
    }
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}
