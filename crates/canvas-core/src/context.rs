//! Per-session request configuration
//!
//! Every API call reads its base URL, credential, and pagination default from
//! a [`RequestContext`]. The context is immutable once constructed and can be
//! shared freely across concurrent tasks.

use std::env;
use std::fmt;

use thiserror::Error;

/// Page size used when neither the context nor the call site supplies one.
///
/// Matches the server's own pagination default.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Environment variable holding the base API URL for [`RequestContext::from_env`].
pub const ENV_BASE_URL: &str = "CANVAS_API_URL";

/// Environment variable holding the access token for [`RequestContext::from_env`].
pub const ENV_AUTH_TOKEN: &str = "CANVAS_API_TOKEN";

/// Optional environment variable overriding [`DEFAULT_PER_PAGE`].
pub const ENV_PER_PAGE: &str = "CANVAS_PER_PAGE";

/// Errors from constructing a [`RequestContext`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Base API URL must not be empty")]
    EmptyBaseUrl,

    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid per-page value '{0}': must be a positive integer")]
    InvalidPerPage(String),
}

/// Per-session configuration shared by every API call
///
/// Holds the base API URL (trailing slash trimmed), the access token, and the
/// default page size applied when a paginated call does not pass an explicit
/// `per_page`. No field is mutated after construction; a bad credential only
/// surfaces when a call is made.
///
/// # Example
///
/// ```rust
/// use canvas_core::RequestContext;
///
/// let ctx = RequestContext::with_per_page("https://canvas.example.edu/api/", "my-token", 25)?;
/// assert_eq!(ctx.base_api_url(), "https://canvas.example.edu/api");
/// assert_eq!(ctx.per_page(), 25);
/// # Ok::<(), canvas_core::ContextError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_api_url: String,
    auth_token: String,
    per_page: u32,
}

impl RequestContext {
    /// Create a context with the default page size
    ///
    /// # Errors
    ///
    /// Returns `ContextError::EmptyBaseUrl` if the base URL is empty (or
    /// consists only of slashes).
    pub fn new(
        base_api_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ContextError> {
        Self::with_per_page(base_api_url, auth_token, DEFAULT_PER_PAGE)
    }

    /// Create a context with an explicit default page size
    ///
    /// # Errors
    ///
    /// Returns `ContextError::EmptyBaseUrl` if the base URL is empty.
    pub fn with_per_page(
        base_api_url: impl Into<String>,
        auth_token: impl Into<String>,
        per_page: u32,
    ) -> Result<Self, ContextError> {
        let base_api_url = base_api_url.into().trim_end_matches('/').to_string();
        if base_api_url.is_empty() {
            return Err(ContextError::EmptyBaseUrl);
        }
        Ok(Self {
            base_api_url,
            auth_token: auth_token.into(),
            per_page,
        })
    }

    /// Create a context from `CANVAS_API_URL`, `CANVAS_API_TOKEN`, and the
    /// optional `CANVAS_PER_PAGE`
    ///
    /// # Errors
    ///
    /// Returns `ContextError::MissingEnv` when either required variable is
    /// unset, and `ContextError::InvalidPerPage` when `CANVAS_PER_PAGE` is
    /// present but not a positive integer.
    pub fn from_env() -> Result<Self, ContextError> {
        let base_api_url =
            env::var(ENV_BASE_URL).map_err(|_| ContextError::MissingEnv(ENV_BASE_URL.into()))?;
        let auth_token =
            env::var(ENV_AUTH_TOKEN).map_err(|_| ContextError::MissingEnv(ENV_AUTH_TOKEN.into()))?;
        let per_page = match env::var(ENV_PER_PAGE) {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ContextError::InvalidPerPage(raw)),
            },
            Err(_) => DEFAULT_PER_PAGE,
        };
        Self::with_per_page(base_api_url, auth_token, per_page)
    }

    /// The base API URL, without a trailing slash
    pub fn base_api_url(&self) -> &str {
        &self.base_api_url
    }

    /// The access token sent with every request
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// The default page size for paginated calls
    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

// Manual impl so the token never lands in logs or panic messages.
impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("base_api_url", &self.base_api_url)
            .field("auth_token", &"***")
            .field("per_page", &self.per_page)
            .finish()
    }
}
