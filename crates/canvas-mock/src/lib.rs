//! # Canvas Mock
//!
//! Request-echo server for exercising the Canvas client against a live
//! socket.
//!
//! Every route answers `200 OK` with a JSON description of the request it
//! received: method, path, query pairs, authorization header, content type,
//! and form pairs. Two routes exist for failure-path tests: `/status/:code`
//! answers with that status code and an empty body, `/delay/:ms` sleeps
//! before echoing.
//!
//! ## Example
//!
//! ```ignore
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
//! let addr = listener.local_addr()?;
//! tokio::spawn(canvas_mock::run(listener));
//!
//! let echo: canvas_mock::RecordedRequest = reqwest::get(format!("http://{addr}/v1/courses"))
//!     .await?
//!     .json()
//!     .await?;
//! assert_eq!(echo.path, "/v1/courses");
//! ```

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{header, HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::routing::any;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server saw for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub form: Vec<(String, String)>,
}

/// Build the echo router
pub fn app() -> Router {
    Router::new()
        .route("/status/:code", any(status))
        .route("/delay/:ms", any(delay))
        .fallback(echo)
}

/// Serve the echo router on an already-bound listener
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<RecordedRequest> {
    Json(record(method, &uri, &headers, &body))
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn delay(
    Path(ms): Path<u64>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Json<RecordedRequest> {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    Json(record(method, &uri, &headers, &body))
}

fn record(method: Method, uri: &Uri, headers: &HeaderMap, body: &Bytes) -> RecordedRequest {
    let query = uri
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    let content_type = header_string(headers, header::CONTENT_TYPE);

    // Only a urlencoded body is a form; anything else is left unparsed.
    let form = if content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
    {
        url::form_urlencoded::parse(body).into_owned().collect()
    } else {
        Vec::new()
    };

    RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        authorization: header_string(headers, header::AUTHORIZATION),
        content_type,
        form,
    }
}

fn header_string(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(&name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
