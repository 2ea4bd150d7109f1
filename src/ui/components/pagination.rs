//! Page controls.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationBar;

/// Renders the visible page controls with `‹`/`›` where some are elided.
pub fn render_pagination(bar: &PaginationBar, theme: &Theme, cols: usize) {
    position_cursor(bar.row, 1);
    print!("{}", " ".repeat(cols));

    if bar.elided_before {
        position_cursor(bar.row, MARGIN + 1);
        print!("{}‹{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    }

    for control in &bar.controls {
        position_cursor(bar.row, control.start_col);
        if control.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.page_active_fg));
            print!("{}", Theme::bg(&theme.colors.page_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", control.label);
        print!("{}", Theme::reset());
    }

    if bar.elided_after {
        if let Some(last) = bar.controls.last() {
            position_cursor(bar.row, last.end_col + 1);
            print!("{}›{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
    }
}
