//! Holocron: a Zellij plugin for browsing the Star Wars API catalog.
//!
//! The plugin shows one category (people, planets or starships) at a time, a
//! page of ten records per request, numbered page controls, and a detail modal
//! for any record.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls, event mapping
//! └─────────────────────────────────────────────────────┘
//!                        │ Event ↓   ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Controller: view state + request sequencing      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ API (api/)            │       │ UI (ui/)              │
//! │ - Page URLs           │       │ - CatalogView / Screen│
//! │ - Request tokens      │       │ - Layout, hit-testing │
//! │ - Response decoding   │       │ - Components, themes  │
//! └───────────────────────┘       └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)  categories, items, pages, detail │
//! └─────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)  OTLP file export   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/holocron.wasm" {
//!         base_url "https://swapi.dev/api/"
//!         category "planets"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Request flow
//!
//! 1. A category or page change updates the view state and emits
//!    [`Action::Fetch`] with a fresh request token.
//! 2. The shim issues `web_request`, carrying the token in the request context.
//! 3. `WebRequestResult` comes back as [`Event::PageLoaded`]. Only the response
//!    to the latest token is rendered; failures are logged and change nothing.
//!
//! # Example
//!
//! ```rust
//! use holocron::{handle_event, initialize, Action, Category, Config, Event};
//!
//! let config = Config { category: Category::Starships, ..Config::default() };
//! let mut state = initialize(&config);
//!
//! let (_, actions) = handle_event(&mut state, Event::Start)?;
//! assert!(matches!(&actions[..], [Action::Fetch(r)] if r.url == "https://swapi.dev/api/starships/?page=1"));
//! # Ok::<(), holocron::HolocronError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{Category, HolocronError, Item, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration, from the plugin block of a Zellij layout or config.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root the category path segments are appended to.
    pub base_url: String,

    /// Category shown on startup.
    pub category: Category,

    /// Built-in theme: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe` or `catppuccin-macchiato`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme; `~` means the sandbox `/host` directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            category: Category::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads the plugin configuration map.
    ///
    /// Blank values count as unset. An unknown `category` falls back to
    /// people.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use holocron::{Category, Config};
    ///
    /// let map = BTreeMap::from([
    ///     ("category".to_string(), "planets".to_string()),
    ///     ("base_url".to_string(), "http://localhost:8000/api".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.category, Category::Planets);
    /// assert_eq!(config.base_url, "http://localhost:8000/api");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let category = value("category").map_or_else(Category::default, |name| {
            name.parse().unwrap_or_else(|e: HolocronError| {
                tracing::warn!(error = %e, "unknown category in configuration, using default");
                Category::default()
            })
        });

        Self {
            base_url: value("base_url").unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string()),
            category,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Theme from `theme_file`, else `theme_name`, else the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(file) = &self.theme_file {
            let path = infrastructure::expand_tilde(file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial state. Nothing is fetched until [`Event::Start`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        base_url = %config.base_url,
        category = %config.category,
        "initializing holocron plugin"
    );
    AppState::new(&config.base_url, config.category, config.theme())
}
