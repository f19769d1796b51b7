//! # Canvas Methods
//!
//! Endpoint bindings for the Canvas LMS REST API, one async function per
//! endpoint, organized one module per resource area.
//!
//! Every binding follows the same shape: resolve the `per_page` default from
//! the client's [`RequestContext`] (when the endpoint paginates), validate
//! enumerated parameters against their allow-lists, collect the remaining
//! arguments into a [`Payload`], format the URL from the context base, and
//! hand everything to the matching [`CanvasClient`] verb method. The raw
//! [`reqwest::Response`] comes back unprocessed; status interpretation and
//! body decoding are the caller's business.
//!
//! [`RequestContext`]: canvas_core::RequestContext
//! [`Payload`]: canvas_core::Payload
//! [`CanvasClient`]: canvas_http::CanvasClient
//!
//! ## Example
//!
//! ```ignore
//! use canvas_core::RequestContext;
//! use canvas_http::{CanvasClient, RequestOptions};
//! use canvas_methods::files;
//!
//! let ctx = RequestContext::new("https://canvas.example.edu/api", "my-token")?;
//! let client = CanvasClient::new(ctx);
//!
//! let response = files::list_files_courses(
//!     &client, "42", None, None, None, Some("name"), Some("asc"), None,
//!     RequestOptions::default(),
//! )
//! .await?;
//! let files: serde_json::Value = response.json().await?;
//! ```

pub mod content_exports;
pub mod course_audit_log;
pub mod files;
pub mod submissions;
pub mod tabs;
