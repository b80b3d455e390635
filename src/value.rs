//! Form value types for representing defaults and submitted data.
//!
//! The [`Value`] enum is the universal type used to carry element default
//! values, submitted data, and resolved display values through the engine.
//! Submitted form data is string-shaped, but schema defaults written in
//! JSON may be booleans, numbers, or arrays, so all of those deserialize
//! directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar or sequence-of-scalars form value.
///
/// Multi-input elements (checkbox groups, multi-selects) carry a
/// [`Value::List`]; everything else is a scalar. `Null` represents a value
/// that was never submitted.
///
/// # Examples
///
/// ```
/// use formwork::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v, Value::String("hello".to_string()));
///
/// let v: Value = serde_json::from_str(r#"["a", "b"]"#).unwrap();
/// assert!(v.contains("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value submitted or configured.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A sequence of scalars (multi-select submissions, checkbox groups).
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this value is blank in the required-check sense.
    ///
    /// Blank means exactly `Null` or the empty string. Whitespace-only
    /// strings are not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Sequence-aware option match: a list matches when any entry renders
    /// to `key`, a scalar matches when its rendered form equals `key`.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Self::List(entries) => entries.iter().any(|v| v.to_string() == key),
            other => other.to_string() == key,
        }
    }

    /// Scalar-only option match. Lists never match.
    pub fn equals(&self, key: &str) -> bool {
        match self {
            Self::List(_) => false,
            other => other.to_string() == key,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(entries) => {
                for (i, v) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(entries: Vec<&str>) -> Self {
        Self::List(entries.into_iter().map(Self::from).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(entries: Vec<String>) -> Self {
        Self::List(entries.into_iter().map(Self::String).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::String(String::new()).is_blank());
        assert!(!Value::String("  ".into()).is_blank()); // whitespace is not blank
        assert!(!Value::Bool(false).is_blank());
        assert!(!Value::Int(0).is_blank());
        assert!(!Value::List(vec![]).is_blank());
    }

    #[test]
    fn test_contains_scalar() {
        assert!(Value::from("a").contains("a"));
        assert!(!Value::from("a").contains("b"));
        assert!(Value::Int(3).contains("3"));
    }

    #[test]
    fn test_contains_list() {
        let v = Value::from(vec!["a", "c"]);
        assert!(v.contains("a"));
        assert!(v.contains("c"));
        assert!(!v.contains("b"));
    }

    #[test]
    fn test_equals_rejects_lists() {
        assert!(Value::from("a").equals("a"));
        assert!(!Value::from(vec!["a"]).equals("a"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "a,b");
    }

    #[test]
    fn test_deserialize_untagged() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Null);
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));
        let v: Value = serde_json::from_str("7").unwrap();
        assert_eq!(v, Value::Int(7));
        let v: Value = serde_json::from_str(r#""hi""#).unwrap();
        assert_eq!(v, Value::String("hi".into()));
        let v: Value = serde_json::from_str(r#"["a", 1]"#).unwrap();
        assert_eq!(v, Value::List(vec![Value::String("a".into()), Value::Int(1)]));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }
}
