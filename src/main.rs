//! Zellij plugin entry point.
//!
//! Thin shim between the Zellij host and the library: it maps host events to
//! [`holocron::Event`]s, runs [`handle_event`], and carries out the returned
//! [`Action`]s. All host calls live here.
//!
//! # Keybindings
//!
//! - `1`/`2`/`3`: people, planets, starships
//! - `Tab`: next category
//! - `j`/`k`/`Down`/`Up`: move the cursor
//! - `h`/`l`/`Left`/`Right`, `[`/`]`: previous/next page
//! - `g`/`G`: first/last page
//! - `Enter`: open details
//! - `r`: toggle raw JSON in the detail view
//! - `Esc`: close details
//! - `q`: close details, or hide the plugin
//!
//! Tabs, list rows and page numbers are clickable. Clicking outside the detail
//! view closes it.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use holocron::api::PageResponse;
use holocron::{handle_event, Action, Category, Config, Event};

register_plugin!(State);

struct State {
    app: holocron::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: holocron::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        holocron::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        self.app = holocron::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);
        tracing::debug!("plugin loaded, waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(key) => match Self::map_key(&key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match PageResponse::from_host(status, &body, &context) {
                    Some(response) => Event::PageLoaded(response),
                    None => {
                        tracing::debug!(status = status, "ignoring web response without request context");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("web access granted");
                Event::Start
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied, catalog cannot be fetched");
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = (rows, cols);
        holocron::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('1') => Event::SelectCategory(Category::People),
            BareKey::Char('2') => Event::SelectCategory(Category::Planets),
            BareKey::Char('3') => Event::SelectCategory(Category::Starships),
            BareKey::Tab => Event::NextCategory,
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Right | BareKey::Char('l' | ']') => Event::NextPage,
            BareKey::Left | BareKey::Char('h' | '[') => Event::PrevPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            BareKey::Enter => Event::Activate,
            BareKey::Char('r') => Event::ToggleRaw,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::Close,
            _ => return None,
        })
    }

    /// Zellij reports 0-based pane positions; the library uses 1-based cells.
    fn map_mouse(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()? + 1;
                Some(Event::Click { row, col: col + 1 })
            }
            Mouse::ScrollDown(_) => Some(Event::CursorDown),
            Mouse::ScrollUp(_) => Some(Event::CursorUp),
            _ => None,
        }
    }

    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(token = %request.token, url = %request.url, "sending web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
        }
    }
}
