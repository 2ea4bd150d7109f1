//! Category tabs and request status.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::layout::{text_width, MARGIN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabItem;

/// Renders the tab bar at `row`, with `status` right-aligned.
///
/// Tabs are drawn at the columns the view model recorded, so clicks resolve
/// against exactly what is on screen.
///
/// Returns the next row.
pub fn render_header(row: usize, tabs: &[TabItem], status: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(cols));

    for tab in tabs {
        if tab.end_col > cols + 1 {
            break;
        }
        position_cursor(row, tab.start_col);
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", tab.text);
        print!("{}", Theme::reset());
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
    }

    if let Some(status) = status {
        let tabs_end = tabs.last().map_or(MARGIN, |t| t.end_col);
        let room = (cols + 1).saturating_sub(tabs_end + MARGIN);
        let status = truncate(status, room);
        if !status.is_empty() {
            position_cursor(row, cols + 1 - MARGIN - text_width(&status));
            print!("{}", Theme::fg(&theme.colors.header_fg));
            print!("{status}");
        }
    }

    print!("{}", Theme::reset());
    row + 1
}
