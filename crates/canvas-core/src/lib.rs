//! # Canvas Core
//!
//! Request assembly primitives for the Canvas LMS REST API.
//!
//! This crate provides:
//! - `RequestContext`: per-session configuration (base URL, credential, page size)
//! - `Payload`: query/form parameter assembly with absent-value filtering
//! - Allow-list validation for enumerated parameters
//!
//! ## Example
//!
//! ```rust
//! use canvas_core::{Payload, RequestContext};
//!
//! let ctx = RequestContext::new("https://canvas.example.edu/api", "my-token")?;
//!
//! let mut payload = Payload::new();
//! payload.set("per_page", ctx.per_page());
//! payload.set_opt("search_term", None::<&str>);
//!
//! // Absent entries are never transmitted
//! assert_eq!(payload.pairs(), vec![("per_page".to_string(), "10".to_string())]);
//! # Ok::<(), canvas_core::ContextError>(())
//! ```

pub mod context;
pub mod payload;
pub mod validation;

// Re-exports for convenience
pub use context::*;
pub use payload::*;
pub use validation::*;
