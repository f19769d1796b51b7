//! Reqwest-based Canvas HTTP client

use canvas_core::{Payload, RequestContext};
use reqwest::{Client, Method, Response};

use crate::error::CanvasHttpError;
use crate::options::RequestOptions;

/// HTTP client for the Canvas REST API
///
/// Owns the connection pool and the per-session [`RequestContext`]. Endpoint
/// bindings hand it a fully-substituted URL plus an optional payload; the
/// client drops absent payload entries, encodes the rest (query string for
/// GET/DELETE, form body for POST/PUT), attaches the context credential as a
/// bearer authorization header, and returns the raw response.
///
/// Cloning is cheap and clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// use canvas_core::RequestContext;
/// use canvas_http::{CanvasClient, RequestOptions};
///
/// let ctx = RequestContext::new("https://canvas.example.edu/api", "my-token")?;
/// let client = CanvasClient::new(ctx);
/// let response = client.get(&url, Some(&payload), RequestOptions::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CanvasClient {
    client: Client,
    ctx: RequestContext,
}

impl CanvasClient {
    /// Create a client with default transport settings
    pub fn new(ctx: RequestContext) -> Self {
        Self {
            client: Client::new(),
            ctx,
        }
    }

    /// Create a client around a preconfigured `reqwest::Client`
    ///
    /// Use this to control proxies, TLS, pool sizes, or a client-wide
    /// timeout; the transport adds nothing on top of what you configure.
    pub fn with_http_client(client: Client, ctx: RequestContext) -> Self {
        Self { client, ctx }
    }

    /// The request context this client was built with
    pub fn context(&self) -> &RequestContext {
        &self.ctx
    }

    /// Issue a GET request; payload values go into the query string
    pub async fn get(
        &self,
        url: &str,
        payload: Option<&Payload>,
        options: RequestOptions,
    ) -> Result<Response, CanvasHttpError> {
        self.request(Method::GET, url, payload, options).await
    }

    /// Issue a POST request; payload values are form-encoded into the body
    pub async fn post(
        &self,
        url: &str,
        payload: Option<&Payload>,
        options: RequestOptions,
    ) -> Result<Response, CanvasHttpError> {
        self.request(Method::POST, url, payload, options).await
    }

    /// Issue a PUT request; payload values are form-encoded into the body
    pub async fn put(
        &self,
        url: &str,
        payload: Option<&Payload>,
        options: RequestOptions,
    ) -> Result<Response, CanvasHttpError> {
        self.request(Method::PUT, url, payload, options).await
    }

    /// Issue a DELETE request; payload values go into the query string
    pub async fn delete(
        &self,
        url: &str,
        payload: Option<&Payload>,
        options: RequestOptions,
    ) -> Result<Response, CanvasHttpError> {
        self.request(Method::DELETE, url, payload, options).await
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Payload>,
        options: RequestOptions,
    ) -> Result<Response, CanvasHttpError> {
        let in_query = method == Method::GET || method == Method::DELETE;
        let mut request = self.client.request(method, url);

        if let Some(payload) = payload {
            let pairs = payload.pairs();
            request = if in_query {
                request.query(&pairs)
            } else {
                request.form(&pairs)
            };
        }

        request = request.bearer_auth(self.ctx.auth_token());
        request = options.apply(request);

        let response = request.send().await.map_err(CanvasHttpError::RequestError)?;
        Ok(response)
    }
}
