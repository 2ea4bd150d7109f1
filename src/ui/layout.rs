//! Screen geometry shared by the renderer and mouse hit-testing.
//!
//! Rows and columns are 1-based terminal cells, matching the cursor escapes
//! the components emit.
//!
//! ```text
//! row 1        (blank)
//! row 2        ☺ People │ ◍ Planets │ ➤ Starships      loading…
//! row 3        ────────────────────────────────────────
//! row 4..      item list
//! rows - 3     ────────────────────────────────────────
//! rows - 2     ‹  3   4  [5]  6   7  ›
//! rows - 1     ────────────────────────────────────────
//! rows         key hints
//! ```

use crate::domain::Category;
use crate::ui::viewmodel::UIViewModel;

pub const HEADER_ROW: usize = 2;
pub const LIST_TOP: usize = 4;

/// Rows not available to the item list.
const CHROME_ROWS: usize = 7;

/// Left margin before the first tab and the first page control.
pub const MARGIN: usize = 2;

/// Width reserved on each side of the pagination row for elision markers.
const MARKER_WIDTH: usize = 2;

#[must_use]
pub const fn list_rows(rows: usize) -> usize {
    rows.saturating_sub(CHROME_ROWS)
}

#[must_use]
pub const fn pagination_row(rows: usize) -> usize {
    rows.saturating_sub(2)
}

#[must_use]
pub const fn footer_row(rows: usize) -> usize {
    rows
}

/// Text width in terminal cells.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Label shown for a category tab.
#[must_use]
pub fn tab_text(category: Category) -> String {
    format!(" {} {} ", category.glyph(), category.label())
}

/// Column span `[start, end)` of each tab, separated by one cell.
#[must_use]
pub fn tab_spans() -> Vec<(Category, usize, usize)> {
    let mut col = MARGIN;
    Category::ALL
        .into_iter()
        .map(|category| {
            let start = col;
            let end = start + text_width(&tab_text(category));
            col = end + 1;
            (category, start, end)
        })
        .collect()
}

/// Visible slice `[start, end)` of a list of `len` rows with `capacity` slots,
/// keeping `selected` near the middle.
#[must_use]
pub fn list_window(selected: usize, len: usize, capacity: usize) -> (usize, usize) {
    if len <= capacity {
        return (0, len);
    }
    let start = selected.saturating_sub(capacity / 2).min(len - capacity);
    (start, start + capacity)
}

/// Cells one page control takes: its label padded by a space on each side.
#[must_use]
pub fn control_width(label: &str) -> usize {
    text_width(label) + 2
}

/// Visible slice `[start, end)` of page controls that fits in `cols`.
///
/// Grows outward from the active control, alternating right and left, so the
/// active control is always visible.
#[must_use]
pub fn page_window(labels: &[String], active: usize, cols: usize) -> (usize, usize) {
    if labels.is_empty() {
        return (0, 0);
    }
    let budget = cols.saturating_sub(MARGIN + 2 * MARKER_WIDTH);
    let cost = |i: usize| control_width(&labels[i]) + 1;

    let active = active.min(labels.len() - 1);
    let (mut start, mut end) = (active, active + 1);
    let mut used = cost(active);

    loop {
        let mut grew = false;
        if end < labels.len() && used + cost(end) <= budget {
            used += cost(end);
            end += 1;
            grew = true;
        }
        if start > 0 && used + cost(start - 1) <= budget {
            used += cost(start - 1);
            start -= 1;
            grew = true;
        }
        if !grew {
            return (start, end);
        }
    }
}

/// Column where the first visible page control starts.
#[must_use]
pub const fn first_control_col() -> usize {
    MARGIN + MARKER_WIDTH
}

/// Position and size of the centered detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl ModalRect {
    /// Sizes the modal to its content, clamped to the pane.
    ///
    /// The box holds a title row, a separator, the body and two border rows.
    #[must_use]
    pub fn fit(content_width: usize, body_lines: usize, rows: usize, cols: usize) -> Self {
        let width = (content_width + 4).clamp(24, cols.saturating_sub(4).max(24));
        let height = (body_lines + 4).min(rows.saturating_sub(2)).max(4);
        Self {
            top: rows.saturating_sub(height) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    /// Body rows that fit inside the frame.
    #[must_use]
    pub const fn body_capacity(&self) -> usize {
        self.height.saturating_sub(4)
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }
}

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Tab(Category),
    /// Index into the full entry list.
    Entry(usize),
    Page(u64),
    InsideModal,
    OutsideModal,
    Nothing,
}

impl UIViewModel {
    /// Resolves a click at a 1-based `row`/`col`.
    ///
    /// While the modal is open every click is either inside or outside it.
    #[must_use]
    pub fn hit_test(&self, row: usize, col: usize) -> Hit {
        if let Some(modal) = &self.modal {
            return if modal.rect.contains(row, col) {
                Hit::InsideModal
            } else {
                Hit::OutsideModal
            };
        }

        if row == HEADER_ROW {
            return self
                .tabs
                .iter()
                .find(|t| (t.start_col..t.end_col).contains(&col))
                .map_or(Hit::Nothing, |t| Hit::Tab(t.category));
        }

        if row == self.pagination.row {
            return self
                .pagination
                .controls
                .iter()
                .find(|c| (c.start_col..c.end_col).contains(&col))
                .map_or(Hit::Nothing, |c| Hit::Page(c.page));
        }

        self.display_items
            .iter()
            .find(|item| item.row == row)
            .map_or(Hit::Nothing, |item| Hit::Entry(item.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(n: u64) -> Vec<String> {
        (1..=n).map(|p| p.to_string()).collect()
    }

    #[test]
    fn tabs_do_not_overlap() {
        let spans = tab_spans();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].1, MARGIN);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].2 + 1, pair[1].1);
        }
    }

    #[test]
    fn list_window_centers_selection() {
        assert_eq!(list_window(0, 5, 10), (0, 5));
        assert_eq!(list_window(0, 20, 6), (0, 6));
        assert_eq!(list_window(10, 20, 6), (7, 13));
        assert_eq!(list_window(19, 20, 6), (14, 20));
    }

    #[test]
    fn all_controls_visible_when_they_fit() {
        assert_eq!(page_window(&labels(9), 0, 80), (0, 9));
    }

    #[test]
    fn window_keeps_active_control_visible() {
        let labels = labels(500);
        let (start, end) = page_window(&labels, 250, 40);
        assert!(start <= 250 && 250 < end);
        let used: usize = (start..end).map(|i| control_width(&labels[i]) + 1).sum();
        assert!(used <= 40 - MARGIN - 2 * MARKER_WIDTH);
        assert!(end - start < 500);
    }

    #[test]
    fn modal_is_centered_and_clamped() {
        let rect = ModalRect::fit(30, 10, 24, 80);
        assert_eq!((rect.width, rect.height), (34, 14));
        assert!(rect.contains(rect.top, rect.left));
        assert!(!rect.contains(1, 1));

        let tiny = ModalRect::fit(200, 50, 10, 40);
        assert_eq!(tiny.width, 36);
        assert_eq!(tiny.height, 8);
        assert_eq!(tiny.body_capacity(), 4);
    }
}
