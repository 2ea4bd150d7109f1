//! Detail modal.
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ Luke Skywalker               │
//! ├──────────────────────────────┤
//! │ Height: 172cm                │
//! │ ...                          │
//! │ Films: 4                     │
//! ╰─ 3-10/12 ────────────────────╯
//! ```

use crate::ui::helpers::{fill, position_cursor, truncate};
use crate::ui::layout::text_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalBox;

/// Draws the modal over whatever is beneath it.
///
/// Only the body lines at the scroll offset are drawn. When the body does not
/// fit, the bottom border shows which lines are in view.
pub fn render_modal(modal: &ModalBox, theme: &Theme) {
    let rect = modal.rect;
    let inner = rect.width.saturating_sub(2);
    let text_room = inner.saturating_sub(2);
    let border = Theme::fg(&theme.colors.modal_border);
    let reset = Theme::reset();

    position_cursor(rect.top, rect.left);
    print!("{border}╭{}╮{reset}", "─".repeat(inner));

    let title = if modal.raw {
        format!("{} (raw)", modal.title)
    } else {
        modal.title.clone()
    };
    let title = truncate(&title, text_room);
    position_cursor(rect.top + 1, rect.left);
    print!("{border}│{reset} ");
    print!("{}{}{title}{reset}", Theme::bold(), Theme::fg(&theme.colors.modal_title_fg));
    print!("{}{border}│{reset}", fill(&title, inner.saturating_sub(1)));

    position_cursor(rect.top + 2, rect.left);
    print!("{border}├{}┤{reset}", "─".repeat(inner));

    let visible = modal.visible_lines();
    for slot in 0..rect.body_capacity() {
        let line = visible.get(slot).map(|l| truncate(l, text_room)).unwrap_or_default();
        position_cursor(rect.top + 3 + slot, rect.left);
        print!("{border}│{reset} ");
        print!("{}{line}{reset}", Theme::fg(&theme.colors.text_normal));
        print!("{}{border}│{reset}", fill(&line, inner.saturating_sub(1)));
    }

    let bottom = match modal.scroll_hint() {
        Some(hint) if text_width(&hint) + 3 <= inner => {
            format!("─ {hint} {}", "─".repeat(inner - text_width(&hint) - 3))
        }
        _ => "─".repeat(inner),
    };
    position_cursor(rect.top + rect.height.saturating_sub(1), rect.left);
    print!("{border}╰{bottom}╯{reset}");
}
