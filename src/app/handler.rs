//! Event handling and state transitions.
//!
//! The handler follows a unidirectional data flow:
//! 1. The plugin shim translates host events into [`Event`]s
//! 2. [`handle_event`] mutates [`AppState`]
//! 3. Side effects come back as [`Action`]s for the shim to execute
//!
//! Every category or page change produces exactly one [`Action::Fetch`]; the
//! matching [`Event::PageLoaded`] later completes that render pass.

use crate::api::{PageResponse, TraceContext};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Category;
use crate::ui::layout::Hit;
use crate::ui::view::CatalogView;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Input and host events the application reacts to.
#[derive(Debug)]
pub enum Event {
    /// Permissions granted; issue the first request.
    Start,

    /// Category tab chosen directly.
    SelectCategory(Category),
    /// Moves to the next category tab.
    NextCategory,

    /// Moves the list cursor down (wraps), or scrolls the open modal.
    CursorDown,
    /// Moves the list cursor up (wraps), or scrolls the open modal.
    CursorUp,

    /// Activates the page control right of the current page's.
    NextPage,
    /// Activates the page control left of the current page's.
    PrevPage,
    FirstPage,
    LastPage,

    /// Opens the detail view for the item under the cursor.
    Activate,
    /// Closes the modal if open; otherwise hides the plugin.
    Close,
    /// Closes the modal if open; otherwise ignored.
    Escape,
    /// Switches the open modal between formatted and raw JSON.
    ToggleRaw,

    /// Left click at a 1-based pane position.
    Click { row: usize, col: usize },

    /// A page request finished.
    PageLoaded(PageResponse),
}

/// Processes one event.
///
/// Returns whether the pane must be redrawn and the actions to execute, in
/// order.
///
/// # Errors
///
/// No current event fails; the `Result` keeps the signature stable for the
/// plugin shim, which logs and drops errors.
///
/// # Example
///
/// ```rust
/// use holocron::app::{handle_event, Action, AppState, Event};
/// use holocron::{Category, Theme};
///
/// let mut state = AppState::new("https://swapi.dev/api/", Category::People, Theme::default());
/// let (_, actions) = handle_event(&mut state, Event::SelectCategory(Category::Planets))?;
/// assert!(matches!(&actions[..], [Action::Fetch(r)] if r.url.ends_with("planets/?page=1")));
/// # Ok::<(), holocron::HolocronError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let span = tracing::debug_span!("handle_event", event_type = event_name(&event));
    // The span issuing a request is gone by the time its response arrives,
    // so the response span takes the ids carried in the request context.
    if let Event::PageLoaded(response) = &event {
        if let Some(parent) = response.context.trace_context.as_ref().and_then(TraceContext::remote_context) {
            span.set_parent(parent);
        }
    }
    let _span = span.entered();

    match event {
        Event::Start => Ok(state
            .start()
            .map_or((false, vec![]), |request| (true, vec![Action::Fetch(request)]))),
        Event::SelectCategory(category) => Ok(select_category(state, category)),
        Event::NextCategory => {
            let next = state.controller.view_state().category.next();
            Ok(select_category(state, next))
        }
        Event::CursorDown => {
            if state.screen.is_modal_open() {
                return Ok((state.scroll_modal(1), vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            if state.screen.is_modal_open() {
                return Ok((state.scroll_modal(-1), vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let page = state.neighbor_page(1);
            Ok(select_page(state, page))
        }
        Event::PrevPage => {
            let page = state.neighbor_page(-1);
            Ok(select_page(state, page))
        }
        Event::FirstPage => {
            let page = state.first_page();
            Ok(select_page(state, page))
        }
        Event::LastPage => {
            let page = state.last_page();
            Ok(select_page(state, page))
        }
        Event::Activate => {
            if state.screen.is_modal_open() {
                return Ok((false, vec![]));
            }
            let index = state.selected_index;
            Ok((state.open_entry(index), vec![]))
        }
        Event::Close => {
            if state.screen.is_modal_open() {
                state.screen.hide_modal();
                Ok((true, vec![]))
            } else {
                Ok((false, vec![Action::CloseFocus]))
            }
        }
        Event::Escape => {
            if !state.screen.is_modal_open() {
                return Ok((false, vec![]));
            }
            state.screen.hide_modal();
            Ok((true, vec![]))
        }
        Event::ToggleRaw => Ok((state.screen.toggle_raw(), vec![])),
        Event::Click { row, col } => Ok(handle_click(state, row, col)),
        Event::PageLoaded(response) => {
            let outcome = state.apply_response(response);
            tracing::debug!(outcome = ?outcome, "page response handled");
            Ok((outcome.changed_view(), vec![]))
        }
    }
}

fn select_category(state: &mut AppState, category: Category) -> (bool, Vec<Action>) {
    if state.screen.is_modal_open() {
        return (false, vec![]);
    }
    tracing::debug!(category = %category, "category selected");
    let request = state.controller.select_category(category);
    (true, vec![Action::Fetch(request)])
}

/// Selects `page` if a control for it is offered and the modal is closed.
///
/// The current page is fetched again when chosen, which retries a failed
/// request.
fn select_page(state: &mut AppState, page: Option<u64>) -> (bool, Vec<Action>) {
    let Some(page) = page else {
        return (false, vec![]);
    };
    if state.screen.is_modal_open() {
        return (false, vec![]);
    }
    tracing::debug!(page = page, "page selected");
    let request = state.controller.select_page(page);
    (true, vec![Action::Fetch(request)])
}

fn handle_click(state: &mut AppState, row: usize, col: usize) -> (bool, Vec<Action>) {
    let (rows, cols) = state.viewport;
    let hit = state.compute_viewmodel(rows, cols).hit_test(row, col);
    tracing::debug!(row = row, col = col, hit = ?hit, "click");

    match hit {
        Hit::Tab(category) => select_category(state, category),
        Hit::Page(page) => select_page(state, Some(page)),
        Hit::Entry(index) => (state.open_entry(index), vec![]),
        Hit::OutsideModal => {
            state.screen.hide_modal();
            (true, vec![])
        }
        Hit::InsideModal | Hit::Nothing => (false, vec![]),
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Start => "Start",
        Event::SelectCategory(_) => "SelectCategory",
        Event::NextCategory => "NextCategory",
        Event::CursorDown => "CursorDown",
        Event::CursorUp => "CursorUp",
        Event::NextPage => "NextPage",
        Event::PrevPage => "PrevPage",
        Event::FirstPage => "FirstPage",
        Event::LastPage => "LastPage",
        Event::Activate => "Activate",
        Event::Close => "Close",
        Event::Escape => "Escape",
        Event::ToggleRaw => "ToggleRaw",
        Event::Click { .. } => "Click",
        Event::PageLoaded(_) => "PageLoaded",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DEFAULT_BASE_URL;
    use crate::ui::layout;
    use crate::ui::theme::Theme;

    fn fetched(actions: &[Action]) -> &crate::api::PageRequest {
        match actions {
            [Action::Fetch(request)] => request,
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    fn load(state: &mut AppState, actions: &[Action], body: &str) {
        let request = fetched(actions);
        let response = PageResponse::from_host(200, body.as_bytes(), &request.context()).unwrap();
        handle_event(state, Event::PageLoaded(response)).unwrap();
    }

    fn started() -> AppState {
        let mut state = AppState::new(DEFAULT_BASE_URL, Category::People, Theme::default());
        state.viewport = (24, 80);
        let (_, actions) = handle_event(&mut state, Event::Start).unwrap();
        load(
            &mut state,
            &actions,
            r#"{"count": 23, "results": [
                {"name": "Luke Skywalker", "height": "172", "films": ["1", "2"]},
                {"name": "C-3PO", "films": ["1"]}
            ]}"#,
        );
        state
    }

    #[test]
    fn next_category_cycles_and_resets_page() {
        let mut state = started();
        let (_, actions) = handle_event(&mut state, Event::NextPage).unwrap();
        assert_eq!(fetched(&actions).page, 2);

        let (_, actions) = handle_event(&mut state, Event::NextCategory).unwrap();
        let request = fetched(&actions);
        assert_eq!(request.category, Category::Planets);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn paging_is_limited_to_offered_controls() {
        let mut state = started();
        let (render, actions) = handle_event(&mut state, Event::PrevPage).unwrap();
        assert!(!render && actions.is_empty());

        let (_, actions) = handle_event(&mut state, Event::LastPage).unwrap();
        assert_eq!(fetched(&actions).page, 3);
    }

    #[test]
    fn enter_opens_detail_and_escape_closes_it() {
        let mut state = started();
        handle_event(&mut state, Event::CursorDown).unwrap();
        let (render, _) = handle_event(&mut state, Event::Activate).unwrap();
        assert!(render);

        let modal = state.screen.modal.as_ref().unwrap();
        assert_eq!(modal.detail.title, "C-3PO");
        assert_eq!(modal.detail.film_count, 1);

        let (render, actions) = handle_event(&mut state, Event::Escape).unwrap();
        assert!(render && actions.is_empty());
        assert!(!state.screen.is_modal_open());
    }

    #[test]
    fn q_closes_modal_before_plugin() {
        let mut state = started();
        handle_event(&mut state, Event::Activate).unwrap();

        let (_, actions) = handle_event(&mut state, Event::Close).unwrap();
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn dismissing_modal_keeps_data() {
        let mut state = started();
        let before = state.screen.entries.clone();
        handle_event(&mut state, Event::Activate).unwrap();
        handle_event(&mut state, Event::ToggleRaw).unwrap();
        handle_event(&mut state, Event::Click { row: 1, col: 1 }).unwrap();

        assert!(!state.screen.is_modal_open());
        assert_eq!(state.screen.entries, before);
        assert_eq!(state.controller.view_state().page, 1);
    }

    #[test]
    fn clicking_rows_and_controls() {
        let mut state = started();
        let (render, _) =
            handle_event(&mut state, Event::Click { row: layout::LIST_TOP + 1, col: 8 }).unwrap();
        assert!(render);
        assert_eq!(state.screen.modal.as_ref().unwrap().detail.title, "C-3PO");
        handle_event(&mut state, Event::Escape).unwrap();

        let vm = state.compute_viewmodel(24, 80);
        let third = &vm.pagination.controls[2];
        let (_, actions) = handle_event(
            &mut state,
            Event::Click { row: vm.pagination.row, col: third.start_col + 1 },
        )
        .unwrap();
        assert_eq!(fetched(&actions).page, 3);
    }

    #[test]
    fn navigation_is_blocked_while_modal_is_open() {
        let mut state = started();
        handle_event(&mut state, Event::Activate).unwrap();

        for event in [Event::NextPage, Event::SelectCategory(Category::Starships), Event::Activate] {
            let (render, actions) = handle_event(&mut state, event).unwrap();
            assert!(!render && actions.is_empty());
        }
        handle_event(&mut state, Event::CursorDown).unwrap();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn keyboard_paging_recovers_after_failed_fetch() {
        let mut state = started();
        let (_, actions) = handle_event(&mut state, Event::NextPage).unwrap();
        let request = fetched(&actions).clone();
        let failed = PageResponse::from_host(500, b"", &request.context()).unwrap();
        handle_event(&mut state, Event::PageLoaded(failed)).unwrap();
        assert_eq!(state.controller.view_state().page, 2);

        let (_, actions) = handle_event(&mut state, Event::PrevPage).unwrap();
        assert_eq!(fetched(&actions).page, 1);
        let (_, actions) = handle_event(&mut state, Event::NextPage).unwrap();
        assert_eq!(fetched(&actions).page, 2);

        let (_, actions) = handle_event(&mut state, Event::LastPage).unwrap();
        assert_eq!(fetched(&actions).page, 3);
        let (_, actions) = handle_event(&mut state, Event::LastPage).unwrap();
        assert_eq!(fetched(&actions).page, 3);
    }

    #[test]
    fn long_raw_json_scrolls_to_its_last_line() {
        let mut state = started();
        state.viewport = (10, 80);
        handle_event(&mut state, Event::Activate).unwrap();
        handle_event(&mut state, Event::ToggleRaw).unwrap();

        let modal = state.compute_viewmodel(10, 80).modal.unwrap();
        assert!(modal.lines.len() > modal.rect.body_capacity());
        assert_ne!(modal.visible_lines().last(), modal.lines.last());

        for _ in 0..modal.lines.len() * 2 {
            handle_event(&mut state, Event::CursorDown).unwrap();
        }
        let modal = state.compute_viewmodel(10, 80).modal.unwrap();
        assert_eq!(modal.visible_lines().last(), modal.lines.last());
        let (render, _) = handle_event(&mut state, Event::CursorDown).unwrap();
        assert!(!render);

        let (render, _) = handle_event(&mut state, Event::CursorUp).unwrap();
        assert!(render);
        handle_event(&mut state, Event::ToggleRaw).unwrap();
        assert_eq!(state.compute_viewmodel(10, 80).modal.unwrap().offset, 0);
    }

    #[test]
    fn response_span_joins_the_request_trace() {
        use crate::observability::exporter::file_tracer_provider;
        use opentelemetry::trace::TracerProvider as _;
        use opentelemetry::KeyValue;
        use opentelemetry_sdk::resource::Resource;
        use tracing_opentelemetry::OpenTelemetryLayer;
        use tracing_subscriber::layer::SubscriberExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spans.json");
        let resource = Resource::new([KeyValue::new("service.name", "holocron")]);
        let provider = file_tracer_provider(path.clone(), resource, "holocron");
        let subscriber =
            tracing_subscriber::registry().with(OpenTelemetryLayer::new(provider.tracer("holocron")));

        // Each host event arrives inside its own update span.
        let trace = tracing::subscriber::with_default(subscriber, || {
            let mut state = AppState::new(DEFAULT_BASE_URL, Category::People, Theme::default());
            let (_, actions) = tracing::debug_span!("plugin_update")
                .in_scope(|| handle_event(&mut state, Event::Start).unwrap());
            let request = fetched(&actions).clone();

            let body = br#"{"count": 1, "results": [{"name": "Luke Skywalker"}]}"#;
            let response = PageResponse::from_host(200, body, &request.context()).unwrap();
            tracing::debug_span!("plugin_update")
                .in_scope(|| handle_event(&mut state, Event::PageLoaded(response)).unwrap());
            request.trace_context.unwrap()
        });

        let contents = std::fs::read_to_string(path).unwrap();
        let handler_traces: Vec<String> = contents
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .flat_map(|doc| doc["resourceSpans"][0]["scopeSpans"][0]["spans"].as_array().cloned().unwrap_or_default())
            .filter(|span| span["name"] == "handle_event")
            .map(|span| span["traceId"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(handler_traces, vec![trace.trace_id.clone(), trace.trace_id]);
    }
}
