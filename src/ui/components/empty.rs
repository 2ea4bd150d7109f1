//! Placeholder shown in the list area when there are no entries.

use crate::ui::helpers::{center_padding, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message centered at `row` and the subtitle beneath it.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate(&empty.message, cols);
    position_cursor(row, 1 + center_padding(&message, cols));
    print!("{}{message}{}", Theme::fg(&theme.colors.empty_state_fg), Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    position_cursor(row + 1, 1 + center_padding(&subtitle, cols));
    print!("{}{}{subtitle}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
}
