//! Item list: one row per entry, category glyph then display name.

use crate::ui::helpers::{fill, position_cursor, truncate};
use crate::ui::layout::MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Renders each item on the row the view model assigned it.
pub fn render_list(items: &[DisplayItem], theme: &Theme, cols: usize) {
    for item in items {
        render_row(item, theme, cols);
    }
}

/// ```text
///   ☺  Luke Skywalker
/// ```
///
/// The selected row is highlighted across the full width.
fn render_row(item: &DisplayItem, theme: &Theme, cols: usize) {
    position_cursor(item.row, 1);

    let (fg, bg) = if item.is_selected {
        (
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg),
        )
    } else {
        (Theme::fg(&theme.colors.text_normal), String::new())
    };

    print!("{bg}{fg}{}", " ".repeat(MARGIN));
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.icon_fg));
    }
    print!("{}  ", item.glyph);
    print!("{fg}");

    // margin, glyph and two spaces
    let prefix = MARGIN + 3;
    let name = truncate(&item.name, cols.saturating_sub(prefix + MARGIN));
    print!("{name}");
    print!("{}", fill(&name, cols.saturating_sub(prefix)));
    print!("{}", Theme::reset());
}
