//! Key hints.

use crate::ui::helpers::{center_padding, fill, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the centered, dimmed key hints at `row`.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let text = truncate(&footer.keybindings, cols);
    let padding = center_padding(&text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}{text}", " ".repeat(padding));
    print!("{}", fill(&text, cols.saturating_sub(padding)));
    print!("{}", Theme::reset());
}
