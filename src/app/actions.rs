//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) never talks to the host. It
//! returns actions and the plugin shim carries them out: web requests go out
//! through `web_request`, and `CloseFocus` hides the plugin pane.

use crate::api::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET for one catalog page.
    ///
    /// The request's context map must be passed to the host unchanged so the
    /// response can be matched to its request token.
    Fetch(PageRequest),
}
