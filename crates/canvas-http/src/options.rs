//! Per-call transport options

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::RequestBuilder;

/// Pass-through options applied to a single outgoing request
///
/// The transport forwards these verbatim: extra headers are appended to the
/// request, and a timeout, when set, applies to that call alone (overriding
/// any client-wide timeout). `Default` is the empty bag.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use canvas_http::RequestOptions;
/// use reqwest::header::{HeaderValue, ACCEPT};
///
/// let options = RequestOptions::new()
///     .header(ACCEPT, HeaderValue::from_static("application/json"))
///     .timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
    timeout: Option<Duration>,
}

impl RequestOptions {
    /// Empty options; the request goes out exactly as the binding built it
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header to the outgoing request
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Set a timeout for this call
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn apply(self, mut request: RequestBuilder) -> RequestBuilder {
        if !self.headers.is_empty() {
            request = request.headers(self.headers);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }
}
