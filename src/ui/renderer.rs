//! Rendering entry point.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout;

/// Smallest pane the catalog layout fits in.
const MIN_ROWS: usize = 10;
const MIN_COLS: usize = 30;

/// Renders the plugin pane to stdout.
///
/// Zellij clears the pane before each `render` call, so only non-blank cells
/// need printing.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    if rows < MIN_ROWS || cols < MIN_COLS {
        print!("Pane too small ({cols}x{rows})");
        return;
    }

    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(
        rows = rows,
        cols = cols,
        items = viewmodel.display_items.len(),
        list_rows = layout::list_rows(rows),
        modal = viewmodel.modal.is_some(),
        "render"
    );
    components::render_catalog(&viewmodel, &state.theme, rows, cols);
}
