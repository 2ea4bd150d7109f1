//! Page requests and responses exchanged with the host's HTTP client.
//!
//! The host's `web_request` call takes a string-to-string context map and hands
//! it back untouched with the response. [`PageRequest::context`] packs the
//! request token, category and page into that map, and
//! [`PageResponse::from_host`] unpacks it so the controller can tell which
//! pipeline run a response belongs to.

use super::trace::TraceContext;
use crate::domain::{Category, HolocronError, PageResult, Result};
use std::collections::BTreeMap;

/// Catalog root used when no `base_url` is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

const TOKEN_KEY: &str = "holocron.token";
const CATEGORY_KEY: &str = "holocron.category";
const PAGE_KEY: &str = "holocron.page";

/// Sequence number of one render pipeline run.
///
/// Tokens are issued in strictly increasing order by the controller; a
/// response is applied only if its token is still the latest one issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(pub u64);

impl RequestToken {
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ensures the catalog root ends in exactly one `/`.
#[must_use]
pub fn normalize_base_url(base: &str) -> String {
    format!("{}/", base.trim().trim_end_matches('/'))
}

/// `{base}{category}/?page={page}` for a normalized base.
///
/// ```
/// use holocron::api::page_url;
/// use holocron::Category;
///
/// assert_eq!(
///     page_url("https://swapi.dev/api/", Category::Planets, 3),
///     "https://swapi.dev/api/planets/?page=3"
/// );
/// ```
#[must_use]
pub fn page_url(base: &str, category: Category, page: u64) -> String {
    format!("{base}{}/?page={page}", category.path_segment())
}

/// An outgoing request for one catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub token: RequestToken,
    pub category: Category,
    pub page: u64,
    pub url: String,
    pub trace_context: Option<TraceContext>,
}

impl PageRequest {
    /// Builds a request, capturing the current span's trace context.
    #[must_use]
    pub fn new(base: &str, token: RequestToken, category: Category, page: u64) -> Self {
        Self {
            token,
            category,
            page,
            url: page_url(base, category, page),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Context map handed to the host alongside the request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::from([
            (TOKEN_KEY.to_string(), self.token.0.to_string()),
            (CATEGORY_KEY.to_string(), self.category.path_segment().to_string()),
            (PAGE_KEY.to_string(), self.page.to_string()),
        ]);
        if let Some(trace) = &self.trace_context {
            trace.write_to(&mut context);
        }
        context
    }
}

/// What the controller needs to know about the request a response answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub token: RequestToken,
    pub category: Category,
    pub page: u64,
    pub trace_context: Option<TraceContext>,
}

impl RequestContext {
    /// Reads back a context map produced by [`PageRequest::context`].
    ///
    /// Returns `None` for maps that did not originate from a page request.
    #[must_use]
    pub fn from_map(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            token: RequestToken(context.get(TOKEN_KEY)?.parse().ok()?),
            category: context.get(CATEGORY_KEY)?.parse().ok()?,
            page: context.get(PAGE_KEY)?.parse().ok()?,
            trace_context: TraceContext::read_from(context),
        })
    }
}

impl From<&PageRequest> for RequestContext {
    fn from(request: &PageRequest) -> Self {
        Self {
            token: request.token,
            category: request.category,
            page: request.page,
            trace_context: request.trace_context.clone(),
        }
    }
}

/// A completed page request, successful or not.
#[derive(Debug)]
pub struct PageResponse {
    pub context: RequestContext,
    pub outcome: Result<PageResult>,
}

impl PageResponse {
    /// Interprets a `WebRequestResult` delivered by the host.
    ///
    /// Returns `None` if the context map is not one of ours.
    #[must_use]
    pub fn from_host(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Self> {
        let context = RequestContext::from_map(context)?;
        let outcome = if (200..300).contains(&status) {
            PageResult::from_body(body)
        } else {
            Err(HolocronError::Status { status })
        };
        Some(Self { context, outcome })
    }
}
