//! View state and the fetch-and-redraw pipeline.
//!
//! The [`Controller`] owns the current [`ViewState`] and hands out one
//! [`PageRequest`] per state change. Responses come back through
//! [`Controller::complete`], which applies them to a [`CatalogView`] only if
//! they answer the most recently issued request. Requests are never cancelled;
//! a late answer to a superseded request is simply dropped.

use crate::api::{normalize_base_url, PageRequest, PageResponse, RequestToken};
use crate::domain::Category;
use crate::ui::view::{page_controls, CatalogView, ListEntry};

/// What is being browsed: a category and a 1-based page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub category: Category,
    pub page: u64,
}

impl ViewState {
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self { category, page: 1 }
    }
}

/// Result of handing a response to [`Controller::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The list and pagination were replaced.
    Applied { items: usize, total_pages: u64 },
    /// The request failed; the view was left as it was.
    Failed,
    /// A newer request has been issued since; the response was dropped.
    Stale,
}

impl RenderOutcome {
    /// Whether the view changed and needs redrawing.
    #[must_use]
    pub const fn changed_view(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Owns the view state and sequences render pipeline runs.
#[derive(Debug, Clone)]
pub struct Controller {
    base_url: String,
    state: ViewState,
    latest: RequestToken,
    pending: Option<RequestToken>,
}

impl Controller {
    #[must_use]
    pub fn new(base_url: &str, category: Category) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            state: ViewState::new(category),
            latest: RequestToken::default(),
            pending: None,
        }
    }

    #[must_use]
    pub const fn view_state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token of the most recently issued request.
    #[must_use]
    pub const fn latest_token(&self) -> RequestToken {
        self.latest
    }

    /// Whether the latest request is still awaiting its response.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Switches category and goes back to page 1.
    pub fn select_category(&mut self, category: Category) -> PageRequest {
        self.state = ViewState::new(category);
        self.render()
    }

    /// Switches page within the current category.
    pub fn select_page(&mut self, page: u64) -> PageRequest {
        self.state.page = page.max(1);
        self.render()
    }

    /// Issues a request for the current view state.
    pub fn render(&mut self) -> PageRequest {
        self.latest = self.latest.next();
        self.pending = Some(self.latest);

        let request = PageRequest::new(&self.base_url, self.latest, self.state.category, self.state.page);
        tracing::debug!(
            token = %request.token,
            category = %request.category,
            page = request.page,
            url = %request.url,
            "issuing page request"
        );
        request
    }

    /// Applies a response to `view` if it answers the latest request.
    ///
    /// Failures are logged once at error level and leave `view` untouched.
    /// Responses to superseded requests are dropped, failed or not.
    pub fn complete<V: CatalogView>(&mut self, response: PageResponse, view: &mut V) -> RenderOutcome {
        let PageResponse { context, outcome } = response;

        if context.token != self.latest {
            tracing::debug!(
                token = %context.token,
                latest = %self.latest,
                failed = outcome.is_err(),
                "discarding stale page response"
            );
            return RenderOutcome::Stale;
        }
        self.pending = None;

        let page = match outcome {
            Ok(page) => page,
            Err(e) => {
                tracing::error!(
                    token = %context.token,
                    category = %context.category,
                    page = context.page,
                    error = %e,
                    "failed to fetch catalog page"
                );
                return RenderOutcome::Failed;
            }
        };

        let total_pages = page.total_pages();
        let items = page.results.len();

        view.render_list(
            page.results
                .into_iter()
                .map(|item| ListEntry::new(context.category, item))
                .collect(),
        );
        view.render_pagination(page_controls(total_pages, context.page));

        tracing::debug!(
            token = %context.token,
            count = page.count,
            items = items,
            total_pages = total_pages,
            "page rendered"
        );
        RenderOutcome::Applied { items, total_pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_BASE_URL;
    use crate::ui::screen::Screen;

    fn respond(request: &PageRequest, status: u16, body: &str) -> PageResponse {
        PageResponse::from_host(status, body.as_bytes(), &request.context()).unwrap()
    }

    #[test]
    fn category_selection_resets_page() {
        let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
        controller.select_page(4);

        for category in Category::ALL {
            controller.select_page(3);
            let request = controller.select_category(category);
            assert_eq!(controller.view_state(), ViewState { category, page: 1 });
            assert_eq!(request.page, 1);
            assert_eq!(request.category, category);
            assert!(request.url.ends_with(&format!("/{}/?page=1", category.path_segment())));
        }
    }

    #[test]
    fn tokens_strictly_increase() {
        let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
        let a = controller.render();
        let b = controller.select_page(2);
        let c = controller.select_category(Category::Planets);
        assert!(a.token < b.token && b.token < c.token);
        assert_eq!(controller.latest_token(), c.token);
    }

    #[test]
    fn success_replaces_list_and_pagination() {
        let mut controller = Controller::new(DEFAULT_BASE_URL, Category::Planets);
        let mut screen = Screen::new();
        let request = controller.select_page(2);
        assert!(controller.is_loading());

        let outcome = controller.complete(
            respond(&request, 200, r#"{"count": 23, "results": [{"name": "Alderaan"}, {"name": "Hoth"}]}"#),
            &mut screen,
        );

        assert_eq!(outcome, RenderOutcome::Applied { items: 2, total_pages: 3 });
        assert!(!controller.is_loading());
        assert_eq!(screen.entries[1].name, "Hoth");
        assert_eq!(screen.entries[1].icon_src, "planet.png");
        assert_eq!(screen.controls.len(), 3);
        assert_eq!(screen.active_control(), Some(1));
    }

    #[test]
    fn page_zero_is_clamped() {
        let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
        assert_eq!(controller.select_page(0).page, 1);
    }
}
