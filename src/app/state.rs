//! Application state and view model computation.
//!
//! [`AppState`] owns the [`Controller`] (what is being browsed), the retained
//! [`Screen`] (what the last successful render produced) and the transient UI
//! bits around them: the list cursor, the theme and the last known pane size.
//!
//! # Example
//!
//! ```rust
//! use holocron::app::AppState;
//! use holocron::{Category, Theme};
//!
//! let state = AppState::new("https://swapi.dev/api/", Category::People, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_items.is_empty());
//! ```

use super::controller::{Controller, RenderOutcome};
use crate::api::{PageRequest, PageResponse};
use crate::domain::Category;
use crate::ui::layout::{self, ModalRect};
use crate::ui::screen::Screen;
use crate::ui::theme::Theme;
use crate::ui::view::{CatalogView, ListEntry};
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, ModalBox, PageItem, PaginationBar, TabItem, UIViewModel,
};

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub controller: Controller,
    pub screen: Screen,

    /// Cursor position within `screen.entries`.
    pub selected_index: usize,

    pub theme: Theme,

    /// Pane size seen by the last render pass, used to resolve mouse clicks.
    pub viewport: (usize, usize),

    /// Set once the first page has been requested.
    pub started: bool,
}

impl AppState {
    #[must_use]
    pub fn new(base_url: &str, category: Category, theme: Theme) -> Self {
        Self {
            controller: Controller::new(base_url, category),
            screen: Screen::new(),
            selected_index: 0,
            theme,
            viewport: (0, 0),
            started: false,
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.screen.entries.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.screen.entries.len();
    }

    pub fn move_selection_up(&mut self) {
        if self.screen.entries.is_empty() {
            return;
        }
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(self.screen.entries.len() - 1);
    }

    /// Opens the detail modal for entry `index`. Returns `false` if out of range.
    pub fn open_entry(&mut self, index: usize) -> bool {
        let Some(detail) = self.screen.entries.get(index).map(ListEntry::detail) else {
            return false;
        };
        tracing::debug!(index = index, title = %detail.title, "opening detail view");
        self.selected_index = index;
        self.screen.show_modal(detail);
        true
    }

    /// Scrolls the open modal body by `delta` lines. Returns `false` if
    /// nothing moved.
    pub fn scroll_modal(&mut self, delta: isize) -> bool {
        let (rows, cols) = self.viewport;
        let Some(max) = self.compute_modal(rows, cols).map(|m| m.max_offset()) else {
            return false;
        };
        let Some(modal) = self.screen.modal.as_mut() else {
            return false;
        };

        let scroll = modal.scroll.min(max).saturating_add_signed(delta).min(max);
        let moved = scroll != modal.scroll;
        modal.scroll = scroll;
        moved
    }

    /// Page of the control `offset` positions from the current page's, if
    /// offered.
    ///
    /// Steps from the requested page rather than the last rendered one, so
    /// paging still works after a failed fetch.
    #[must_use]
    pub fn neighbor_page(&self, offset: isize) -> Option<u64> {
        let current = self.controller.view_state().page;
        let from = self
            .screen
            .controls
            .iter()
            .position(|c| c.page == current)
            .or_else(|| self.screen.active_control())?;
        let target = from.checked_add_signed(offset)?;
        self.screen.controls.get(target).map(|c| c.page)
    }

    #[must_use]
    pub fn first_page(&self) -> Option<u64> {
        self.screen.controls.first().map(|c| c.page)
    }

    #[must_use]
    pub fn last_page(&self) -> Option<u64> {
        self.screen.controls.last().map(|c| c.page)
    }

    /// Hands a response to the controller and resets the cursor on a new list.
    pub fn apply_response(&mut self, response: PageResponse) -> RenderOutcome {
        let outcome = self.controller.complete(response, &mut self.screen);
        if outcome.changed_view() {
            self.selected_index = 0;
        }
        outcome
    }

    /// Starts the first render. Later calls return `None`.
    pub fn start(&mut self) -> Option<PageRequest> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(self.controller.render())
    }

    /// Builds the view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let empty_state = self.screen.entries.is_empty().then(|| self.compute_empty_state());

        UIViewModel {
            tabs: self.compute_tabs(),
            status: self.controller.is_loading().then(|| "loading…".to_string()),
            display_items: self.compute_display_items(rows),
            pagination: self.compute_pagination(rows, cols),
            modal: self.compute_modal(rows, cols),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_tabs(&self) -> Vec<TabItem> {
        let current = self.controller.view_state().category;
        layout::tab_spans()
            .into_iter()
            .map(|(category, start_col, end_col)| TabItem {
                category,
                text: layout::tab_text(category),
                is_active: category == current,
                start_col,
                end_col,
            })
            .collect()
    }

    fn compute_display_items(&self, rows: usize) -> Vec<DisplayItem> {
        let entries = &self.screen.entries;
        let (start, end) = layout::list_window(self.selected_index, entries.len(), layout::list_rows(rows));

        entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| DisplayItem {
                index: start + offset,
                glyph: entry.category.glyph(),
                name: entry.name.clone(),
                is_selected: start + offset == self.selected_index,
                row: layout::LIST_TOP + offset,
            })
            .collect()
    }

    fn compute_pagination(&self, rows: usize, cols: usize) -> PaginationBar {
        let controls = &self.screen.controls;
        let labels: Vec<String> = controls.iter().map(|c| c.label.clone()).collect();
        let active = self.screen.active_control().unwrap_or(0);
        let (start, end) = layout::page_window(&labels, active, cols);

        let mut col = layout::first_control_col();
        let items = controls[start..end]
            .iter()
            .map(|control| {
                let start_col = col;
                let end_col = start_col + layout::control_width(&control.label);
                col = end_col + 1;
                PageItem {
                    page: control.page,
                    label: control.label.clone(),
                    is_active: control.active,
                    start_col,
                    end_col,
                }
            })
            .collect();

        PaginationBar {
            row: layout::pagination_row(rows),
            controls: items,
            elided_before: start > 0,
            elided_after: end < controls.len(),
        }
    }

    fn compute_modal(&self, rows: usize, cols: usize) -> Option<ModalBox> {
        let modal = self.screen.modal.as_ref()?;
        let lines: Vec<String> = if modal.raw {
            modal.detail.raw_json.lines().map(String::from).collect()
        } else {
            modal.detail.lines()
        };

        let content_width = lines
            .iter()
            .map(|l| layout::text_width(l))
            .chain([layout::text_width(&modal.detail.title)])
            .max()
            .unwrap_or(0);

        let rect = ModalRect::fit(content_width, lines.len(), rows, cols);
        let offset = modal.scroll.min(lines.len().saturating_sub(rect.body_capacity()));
        Some(ModalBox {
            title: modal.detail.title.clone(),
            rect,
            lines,
            offset,
            raw: modal.raw,
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        let category = self.controller.view_state().category;
        if self.controller.is_loading() {
            EmptyState {
                message: format!("Loading {}…", category.label().to_lowercase()),
                subtitle: self.controller.base_url().to_string(),
            }
        } else {
            EmptyState {
                message: "Nothing to show".to_string(),
                subtitle: "1/2/3 or Tab: switch category".to_string(),
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.screen.is_modal_open() {
            "j/k: scroll  Esc/q: close  r: raw JSON"
        } else {
            "1/2/3 Tab: category  j/k: move  h/l: page  g/G: first/last  Enter: details  q: quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
