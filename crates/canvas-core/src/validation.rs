//! Allow-list validation for enumerated parameters
//!
//! Many endpoints restrict a parameter to a fixed set of literal values.
//! [`validate_attr_is_acceptable`] performs that membership check before any
//! request is sent; it is the only validation this client does beyond URL
//! construction.

use thiserror::Error;

/// A caller-supplied value was not in the declared acceptable set
///
/// Carries the offending value and every value the parameter accepts, so the
/// message names both.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid value '{value}': must be one of [{}]", .acceptable.join(", "))]
pub struct InvalidAttribute {
    pub value: String,
    pub acceptable: Vec<String>,
}

/// Check each candidate against a set of acceptable literal values
///
/// Accepts anything iterable over string-like items: pass `Option<&str>` for
/// a scalar parameter (`None` passes vacuously) or a slice for a sequence
/// parameter (every element must independently be a member). Candidates are
/// compared as whole strings; there is no prefix or character-level matching.
/// Pure function; nothing is mutated and no I/O happens.
///
/// # Errors
///
/// Returns `InvalidAttribute` naming the first non-member and the full
/// acceptable set.
///
/// # Example
///
/// ```rust
/// use canvas_core::validate_attr_is_acceptable;
///
/// const ORDER_TYPES: &[&str] = &["asc", "desc"];
///
/// assert!(validate_attr_is_acceptable(Some("asc"), ORDER_TYPES).is_ok());
/// assert!(validate_attr_is_acceptable(None::<&str>, ORDER_TYPES).is_ok());
/// assert!(validate_attr_is_acceptable(Some("sideways"), ORDER_TYPES).is_err());
/// ```
pub fn validate_attr_is_acceptable<I>(
    value: I,
    acceptable: &[&str],
) -> Result<(), InvalidAttribute>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    for candidate in value {
        let candidate = candidate.as_ref();
        if !acceptable.contains(&candidate) {
            return Err(InvalidAttribute {
                value: candidate.to_string(),
                acceptable: acceptable.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}
