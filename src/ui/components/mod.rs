//! Component renderers.
//!
//! Each component prints ANSI-styled text at absolute positions. Positions
//! come from the view model or [`layout`](crate::ui::layout), never from the
//! components themselves, so drawing and hit-testing cannot drift apart.

mod empty;
mod footer;
mod header;
mod list;
mod modal;
mod pagination;

use crate::ui::helpers::position_cursor;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use modal::render_modal;
use pagination::render_pagination;

fn render_border(row: usize, color: &str, cols: usize) {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}

/// Renders the full catalog screen, then the modal on top if one is open.
///
/// ```text
/// [blank]
/// [tabs                 status]
/// [border]
/// [list or empty state]
/// [border]
/// [pagination]
/// [border]
/// [footer]
/// ```
pub fn render_catalog(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let row = render_header(layout::HEADER_ROW, &vm.tabs, vm.status.as_deref(), theme, cols);
    render_border(row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(layout::LIST_TOP + 1, empty, theme, cols);
    } else {
        render_list(&vm.display_items, theme, cols);
    }

    render_border(vm.pagination.row.saturating_sub(1), &theme.colors.border, cols);
    render_pagination(&vm.pagination, theme, cols);
    render_border(vm.pagination.row + 1, &theme.colors.border, cols);
    render_footer(layout::footer_row(rows), &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme);
    }
}
