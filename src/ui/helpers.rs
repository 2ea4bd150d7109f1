//! Shared rendering utilities.
//!
//! Widths are counted in `char`s, which is what [`layout::text_width`]
//! uses for hit-testing too.
//!
//! [`layout::text_width`]: crate::ui::layout::text_width

use crate::ui::layout::text_width;

/// Moves the cursor to a 1-based `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Cuts `text` to at most `width` cells, ending in `…` when shortened.
///
/// ```
/// use holocron::ui::helpers::truncate;
///
/// assert_eq!(truncate("Millennium Falcon", 10), "Millennium…");
/// assert_eq!(truncate("X-wing", 10), "X-wing");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Spaces needed after `text` to fill `width` cells.
#[must_use]
pub fn fill(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text_width(text)))
}

/// Left padding that centers `text` in `width` cells.
#[must_use]
pub fn center_padding(text: &str, width: usize) -> usize {
    width.saturating_sub(text_width(text)) / 2
}
