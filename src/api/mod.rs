//! Catalog API plumbing.
//!
//! Builds page requests for the host's HTTP client and interprets its results.
//! No I/O happens here: the plugin shim performs the `web_request` call and
//! feeds the `WebRequestResult` event back in.
//!
//! - [`request`]: URL construction, request tokens, context packing
//! - [`trace`]: Trace id propagation across the request round trip

pub mod request;
pub mod trace;

pub use request::{
    normalize_base_url, page_url, PageRequest, PageResponse, RequestContext, RequestToken,
    DEFAULT_BASE_URL,
};
pub use trace::TraceContext;
