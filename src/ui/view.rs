//! The view surface the render pipeline writes to.
//!
//! The pipeline never draws directly. It hands finished list entries, page
//! controls and detail views to a [`CatalogView`], which replaces its contents
//! wholesale on every call. The terminal implementation is
//! [`Screen`](crate::ui::screen::Screen); tests can substitute their own.

use crate::domain::{Category, DetailView, Item};

/// One row of the item list.
///
/// The entry keeps its item so activating it can open the detail view without
/// another request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub category: Category,
    /// Icon asset filename (empty when the category has none).
    pub icon_src: &'static str,
    pub name: String,
    pub item: Item,
}

impl ListEntry {
    #[must_use]
    pub fn new(category: Category, item: Item) -> Self {
        Self {
            category,
            icon_src: category.icon_src(),
            name: item.display_name(),
            item,
        }
    }

    /// Detail view for this entry's item.
    #[must_use]
    pub fn detail(&self) -> DetailView {
        DetailView::new(self.category, &self.item)
    }
}

/// One pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub page: u64,
    pub label: String,
    pub active: bool,
}

/// Most controls [`page_controls`] allocates for one page list.
pub const MAX_PAGE_CONTROLS: u64 = 1_000;

/// Controls `1..=total_pages` with exactly `current` marked active.
///
/// Past [`MAX_PAGE_CONTROLS`] pages, only the first page, the last page and a
/// contiguous run around `current` are built, so a bogus `count` cannot
/// exhaust memory.
///
/// ```
/// use holocron::ui::view::page_controls;
///
/// let controls = page_controls(3, 2);
/// assert_eq!(controls.iter().filter(|c| c.active).count(), 1);
/// assert_eq!(controls[1].label, "2");
/// ```
#[must_use]
pub fn page_controls(total_pages: u64, current: u64) -> Vec<PageControl> {
    let control = |page: u64| PageControl {
        page,
        label: page.to_string(),
        active: page == current,
    };

    if total_pages <= MAX_PAGE_CONTROLS {
        return (1..=total_pages).map(control).collect();
    }

    let run = MAX_PAGE_CONTROLS - 2;
    let first = current.saturating_sub(run / 2).clamp(2, total_pages - run);
    std::iter::once(1)
        .chain(first..first + run)
        .chain(std::iter::once(total_pages))
        .map(control)
        .collect()
}

/// Rendering surface for the catalog.
pub trait CatalogView {
    /// Replaces the item list.
    fn render_list(&mut self, entries: Vec<ListEntry>);

    /// Replaces the pagination control.
    fn render_pagination(&mut self, controls: Vec<PageControl>);

    /// Opens the detail modal.
    fn show_modal(&mut self, detail: DetailView);

    /// Closes the detail modal, if open.
    fn hide_modal(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_pages(controls: &[PageControl]) -> Vec<u64> {
        controls.iter().filter(|c| c.active).map(|c| c.page).collect()
    }

    #[test]
    fn every_page_gets_a_control_up_to_the_cap() {
        let controls = page_controls(MAX_PAGE_CONTROLS, 7);
        assert_eq!(controls.len() as u64, MAX_PAGE_CONTROLS);
        assert_eq!(active_pages(&controls), vec![7]);
    }

    #[test]
    fn huge_counts_allocate_a_bounded_run() {
        for current in [1, 2, 40_000, u64::MAX - 1, u64::MAX] {
            let controls = page_controls(u64::MAX, current);

            assert_eq!(controls.len() as u64, MAX_PAGE_CONTROLS);
            assert_eq!(active_pages(&controls), vec![current]);
            assert_eq!(controls.first().map(|c| c.page), Some(1));
            assert_eq!(controls.last().map(|c| c.page), Some(u64::MAX));
            assert!(controls.windows(2).all(|w| w[0].page < w[1].page));
        }
    }
}
