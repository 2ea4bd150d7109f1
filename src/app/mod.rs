//! Application layer: state, events and the render pipeline.
//!
//! ```text
//! host event → Event → handle_event → AppState / Controller → Action → host call
//!                 ↑                                                  │
//!                 └──────────── WebRequestResult (PageLoaded) ───────┘
//! ```
//!
//! - [`controller`]: view state and request sequencing
//! - [`handler`]: event processing
//! - [`actions`]: side effects for the shim
//! - [`state`]: application state and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use controller::{Controller, RenderOutcome, ViewState};
pub use handler::{handle_event, Event};
pub use state::AppState;
