//! End-to-end checks of the fetch-and-redraw pipeline through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use holocron::api::{PageRequest, PageResponse, DEFAULT_BASE_URL};
use holocron::app::{Controller, RenderOutcome, ViewState};
use holocron::domain::DetailView;
use holocron::ui::view::MAX_PAGE_CONTROLS;
use holocron::ui::{CatalogView, ListEntry, PageControl};
use holocron::{handle_event, Action, AppState, Category, Event, Theme};
use serde_json::json;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Records every call the pipeline makes on its view.
#[derive(Default)]
struct RecordingView {
    lists: Vec<Vec<ListEntry>>,
    paginations: Vec<Vec<PageControl>>,
    modal: Option<DetailView>,
}

impl CatalogView for RecordingView {
    fn render_list(&mut self, entries: Vec<ListEntry>) {
        self.lists.push(entries);
    }

    fn render_pagination(&mut self, controls: Vec<PageControl>) {
        self.paginations.push(controls);
    }

    fn show_modal(&mut self, detail: DetailView) {
        self.modal = Some(detail);
    }

    fn hide_modal(&mut self) {
        self.modal = None;
    }
}

/// Counts ERROR-level events.
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn page_body(count: u64, names: &[&str]) -> Vec<u8> {
    let results: Vec<_> = names
        .iter()
        .map(|name| json!({ "name": name, "films": ["https://swapi.dev/api/films/1/"] }))
        .collect();
    json!({ "count": count, "results": results }).to_string().into_bytes()
}

fn ok(request: &PageRequest, count: u64, names: &[&str]) -> PageResponse {
    PageResponse::from_host(200, &page_body(count, names), &request.context()).unwrap()
}

#[test]
fn every_category_selection_starts_on_page_one() {
    let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);

    for category in Category::ALL {
        controller.select_page(5);
        let request = controller.select_category(category);

        assert_eq!(controller.view_state(), ViewState { category, page: 1 });
        assert_eq!(
            request.url,
            format!("https://swapi.dev/api/{}/?page=1", category.path_segment())
        );
    }
}

#[test]
fn count_determines_page_controls() {
    let mut controller = Controller::new(DEFAULT_BASE_URL, Category::Planets);
    let mut view = RecordingView::default();

    let request = controller.select_page(2);
    let outcome = controller.complete(ok(&request, 23, &["Tatooine", "Alderaan"]), &mut view);

    assert_eq!(outcome, RenderOutcome::Applied { items: 2, total_pages: 3 });
    let controls = view.paginations.last().unwrap();
    assert_eq!(controls.len(), 3);
    assert_eq!(
        controls.iter().filter(|c| c.active).map(|c| c.page).collect::<Vec<_>>(),
        vec![2]
    );

    let names: Vec<_> = view.lists[0].iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Tatooine", "Alderaan"]);
    assert_eq!(view.lists[0][0].icon_src, "planet.png");
}

#[test]
fn exact_multiple_of_page_size_has_no_extra_page() {
    let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
    let mut view = RecordingView::default();

    let request = controller.render();
    controller.complete(ok(&request, 80, &["Luke"]), &mut view);

    assert_eq!(view.paginations[0].len(), 8);
}

#[test]
fn absurd_count_yields_bounded_pagination() {
    let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
    let mut view = RecordingView::default();

    let request = controller.select_page(3);
    controller.complete(ok(&request, u64::MAX, &["Luke"]), &mut view);

    let controls = &view.paginations[0];
    assert_eq!(controls.len() as u64, MAX_PAGE_CONTROLS);
    assert_eq!(controls.iter().filter(|c| c.active).map(|c| c.page).collect::<Vec<_>>(), vec![3]);
    assert_eq!(controls.last().unwrap().page, u64::MAX / 10 + 1);
}

#[test]
fn empty_results_clear_the_list() {
    let mut controller = Controller::new(DEFAULT_BASE_URL, Category::Starships);
    let mut view = RecordingView::default();

    let request = controller.render();
    controller.complete(ok(&request, 0, &[]), &mut view);

    assert_eq!(view.lists, vec![Vec::<ListEntry>::new()]);
    assert!(view.paginations[0].is_empty());
}

#[test]
fn failed_fetch_logs_once_and_leaves_view_alone() {
    let errors = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(ErrorCounter(Arc::clone(&errors)));

    tracing::subscriber::with_default(subscriber, || {
        let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
        let mut view = RecordingView::default();

        let first = controller.render();
        controller.complete(ok(&first, 12, &["Luke"]), &mut view);

        let second = controller.select_page(2);
        let failed = PageResponse::from_host(500, b"oops", &second.context()).unwrap();
        assert_eq!(controller.complete(failed, &mut view), RenderOutcome::Failed);

        let third = controller.select_page(2);
        let garbled = PageResponse::from_host(200, b"<html>", &third.context()).unwrap();
        assert_eq!(controller.complete(garbled, &mut view), RenderOutcome::Failed);

        assert_eq!(view.lists.len(), 1);
        assert_eq!(view.paginations.len(), 1);
    });

    assert_eq!(errors.load(Ordering::SeqCst), 2);
}

#[test]
fn latest_request_wins_regardless_of_arrival_order() {
    for page_two_first in [true, false] {
        let mut controller = Controller::new(DEFAULT_BASE_URL, Category::People);
        let mut view = RecordingView::default();

        let to_two = controller.select_page(2);
        let to_one = controller.select_page(1);
        let late = ok(&to_two, 30, &["page two"]);
        let latest = ok(&to_one, 30, &["page one"]);

        if page_two_first {
            assert_eq!(controller.complete(late, &mut view), RenderOutcome::Stale);
            assert!(controller.complete(latest, &mut view).changed_view());
        } else {
            assert!(controller.complete(latest, &mut view).changed_view());
            assert_eq!(controller.complete(late, &mut view), RenderOutcome::Stale);
        }

        assert_eq!(view.lists.len(), 1);
        assert_eq!(view.lists[0][0].name, "page one");
        let active: Vec<_> = view.paginations[0].iter().filter(|c| c.active).map(|c| c.page).collect();
        assert_eq!(active, vec![1]);
        assert!(!controller.is_loading());
    }
}

#[test]
fn activating_a_row_shows_category_details() {
    let mut state = AppState::new(DEFAULT_BASE_URL, Category::Starships, Theme::default());
    let (_, actions) = handle_event(&mut state, Event::Start).unwrap();
    let [Action::Fetch(request)] = &actions[..] else {
        panic!("expected a single fetch, got {actions:?}");
    };

    let body = json!({
        "count": 1,
        "results": [{
            "name": "Millennium Falcon",
            "model": "YT-1300 light freighter",
            "length": "34.37",
            "hyperdrive_rating": "0.5",
            "films": ["1", "2", "3"]
        }]
    });
    let response =
        PageResponse::from_host(200, body.to_string().as_bytes(), &request.context()).unwrap();
    handle_event(&mut state, Event::PageLoaded(response)).unwrap();
    handle_event(&mut state, Event::Activate).unwrap();

    let detail = &state.screen.modal.as_ref().unwrap().detail;
    let lines = detail.lines();
    assert_eq!(detail.title, "Millennium Falcon");
    assert!(lines.contains(&"Length: 34.37m".to_string()));
    assert!(lines.contains(&"Crew: undefined".to_string()));
    assert_eq!(lines.last().unwrap(), "Films: 3");
}
