//! Query and form parameter assembly
//!
//! Endpoint bindings collect their arguments into a [`Payload`]: an ordered
//! list of entries whose values may be absent. Absent entries stay in the
//! payload (bindings mirror their endpoint's full parameter list) but are
//! dropped when the payload is flattened into wire pairs, so they never reach
//! the query string or form body.

use chrono::{DateTime, SecondsFormat, Utc};

/// A single query or form value
///
/// Lists are flattened to one pair per element under the same key, matching
/// how the server reads repeated parameters. Datetimes are rendered RFC 3339
/// in UTC (`2015-09-01T12:00:00Z`).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    List(Vec<ParamValue>),
}

impl ParamValue {
    fn push_pairs(&self, key: &str, out: &mut Vec<(String, String)>) {
        match self {
            ParamValue::Str(s) => out.push((key.to_string(), s.clone())),
            ParamValue::Int(n) => out.push((key.to_string(), n.to_string())),
            ParamValue::UInt(n) => out.push((key.to_string(), n.to_string())),
            ParamValue::Float(x) => out.push((key.to_string(), x.to_string())),
            ParamValue::Bool(b) => out.push((key.to_string(), b.to_string())),
            ParamValue::List(items) => {
                for item in items {
                    item.push_pairs(key, out);
                }
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::Str(value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl<T> From<&[T]> for ParamValue
where
    T: Clone + Into<ParamValue>,
{
    fn from(values: &[T]) -> Self {
        ParamValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T> From<Vec<T>> for ParamValue
where
    T: Into<ParamValue>,
{
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Parameters destined for a request's query string or form body
///
/// Keys may use bracket notation for nested form fields
/// (`"comment[text_comment]"`); the bracket text is part of the key, not
/// interpreted here. Insertion order is preserved in the encoded output.
///
/// # Example
///
/// ```rust
/// use canvas_core::Payload;
///
/// let mut payload = Payload::new();
/// payload.set("submission[body]", "hi");
/// payload.set_opt("submission[url]", None::<&str>);
/// payload.set("grouped", false);
///
/// // The absent entry is dropped; `false` is a present value and kept.
/// assert_eq!(
///     payload.pairs(),
///     vec![
///         ("submission[body]".to_string(), "hi".to_string()),
///         ("grouped".to_string(), "false".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl Payload {
    /// An empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a present value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((key.into(), Some(value.into())));
    }

    /// Record a value that may be absent
    ///
    /// `None` entries are kept in the payload but excluded from [`pairs`].
    ///
    /// [`pairs`]: Payload::pairs
    pub fn set_opt<T: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<T>) {
        self.entries.push((key.into(), value.map(Into::into)));
    }

    /// Number of recorded entries, absent ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into wire pairs
    ///
    /// Absent entries are dropped, lists become repeated keys, and scalars are
    /// rendered to their wire strings (`true`/`false` for booleans, decimal
    /// for numbers).
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            if let Some(value) = value {
                value.push_pairs(key, &mut out);
            }
        }
        out
    }
}
