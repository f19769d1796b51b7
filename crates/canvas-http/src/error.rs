//! HTTP error types for the Canvas client

use canvas_core::InvalidAttribute;
use thiserror::Error;

/// Errors surfaced by transport-using code
///
/// Endpoint bindings return this so a single `?` covers both pre-flight
/// validation failures and network failures. HTTP status codes are never
/// turned into errors here; a non-2xx response comes back as an ordinary
/// response value.
#[derive(Debug, Error)]
pub enum CanvasHttpError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] InvalidAttribute),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_attribute_converts() {
        let invalid = InvalidAttribute {
            value: "bogus".to_string(),
            acceptable: vec!["asc".to_string(), "desc".to_string()],
        };
        let err: CanvasHttpError = invalid.into();
        assert!(matches!(err, CanvasHttpError::ValidationError(_)));
        assert!(err.to_string().contains("bogus"));
    }
}
