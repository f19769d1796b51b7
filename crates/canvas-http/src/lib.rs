//! # Canvas HTTP Transport
//!
//! HTTP transport layer for the Canvas LMS API client.
//!
//! This crate provides:
//! - `CanvasClient`: reqwest-backed client bound to a `RequestContext`
//! - One method per verb (GET/POST/PUT/DELETE) that encodes the payload,
//!   attaches the bearer credential, and returns the raw response
//! - `RequestOptions`: per-call pass-through options (headers, timeout)
//!
//! The transport never interprets the response: non-2xx statuses come back
//! as ordinary `reqwest::Response` values for the caller to inspect.
//!
//! ## Example
//!
//! ```ignore
//! use canvas_core::{Payload, RequestContext};
//! use canvas_http::{CanvasClient, RequestOptions};
//!
//! let ctx = RequestContext::new("https://canvas.example.edu/api", "my-token")?;
//! let client = CanvasClient::new(ctx);
//!
//! let url = format!("{}/v1/courses/42/files", client.context().base_api_url());
//! let response = client.get(&url, None, RequestOptions::default()).await?;
//! println!("{}", response.status());
//! ```

mod client;
mod error;
mod options;

pub use client::CanvasClient;
pub use error::CanvasHttpError;
pub use options::RequestOptions;
