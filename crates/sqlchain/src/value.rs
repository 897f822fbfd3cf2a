//! Typed values for the column/operator/value comparison helpers.
//!
//! A [`Value`] is either a single [`Scalar`] or a flat list of scalars. Lists
//! fan out into an OR-group when converted (see
//! [`to_expression`](crate::builder::to_expression)). Nested lists cannot be
//! expressed.

use crate::config::QuoteStyle;
use crate::error::{SqlError, SqlResult};

/// A single literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text: single quoted on render, unless it is wrapped in parentheses.
    Text(String),
    Int(i64),
    UInt(u64),
    /// Kept at its own width so it renders with its shortest decimal form.
    Float32(f32),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Render this value as a SQL literal.
    ///
    /// Text is trimmed first. Text wrapped in `(` ... `)` is treated as an
    /// inlined sub-query or expression and passed through unquoted.
    pub fn to_literal(&self, style: QuoteStyle) -> String {
        match self {
            Scalar::Text(s) => {
                let s = s.trim();
                if s.starts_with('(') && s.ends_with(')') {
                    return s.to_string();
                }
                match style {
                    QuoteStyle::Verbatim => format!("'{s}'"),
                    QuoteStyle::Escape => format!("'{}'", s.replace('\'', "''")),
                }
            }
            Scalar::Int(v) => v.to_string(),
            Scalar::UInt(v) => v.to_string(),
            Scalar::Float32(v) => v.to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Bool(v) => v.to_string(),
        }
    }

    /// `false` for infinite and NaN floats, which have no SQL literal.
    pub fn is_finite(&self) -> bool {
        match self {
            Scalar::Float32(v) => v.is_finite(),
            Scalar::Float(v) => v.is_finite(),
            _ => true,
        }
    }
}

/// Value accepted by the comparison helpers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Fans out into `col op v1 or col op v2 ...`.
    List(Vec<Scalar>),
}

impl Value {
    /// Create a list value.
    pub fn list<T: Into<Scalar>>(values: impl IntoIterator<Item = T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident as $target:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::$variant(v as $target)
                }
            }

            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Scalar(v.into())
                }
            }
        )+
    };
}

impl_scalar_from!(Int as i64: i8, i16, i32, i64, isize);
impl_scalar_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_scalar_from!(Float32 as f32: f32);
impl_scalar_from!(Float as f64: f64);

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<&String> for Scalar {
    fn from(v: &String) -> Self {
        Scalar::Text(v.clone())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Scalar(v.into())
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::list(v)
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::list(v)
    }
}

impl<T: Into<Scalar> + Clone> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::list(v.iter().cloned())
    }
}

fn scalar_from_json(v: serde_json::Value) -> SqlResult<Scalar> {
    match v {
        serde_json::Value::Bool(b) => Ok(Scalar::Bool(b)),
        serde_json::Value::String(s) => Ok(Scalar::Text(s)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Scalar::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Scalar::UInt(u))
            } else if let Some(f) = n.as_f64() {
                Ok(Scalar::Float(f))
            } else {
                Err(SqlError::invalid_argument(format!(
                    "unsupported JSON number: {n}"
                )))
            }
        }
        serde_json::Value::Null => Err(SqlError::invalid_argument("value cannot be null")),
        serde_json::Value::Array(_) => Err(SqlError::invalid_argument(
            "nested arrays are not supported",
        )),
        serde_json::Value::Object(_) => Err(SqlError::invalid_argument(
            "JSON objects cannot be used as values",
        )),
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = SqlError;

    fn try_from(v: serde_json::Value) -> SqlResult<Self> {
        match v {
            serde_json::Value::Array(items) => Ok(Value::List(
                items
                    .into_iter()
                    .map(scalar_from_json)
                    .collect::<SqlResult<Vec<_>>>()?,
            )),
            other => scalar_from_json(other).map(Value::Scalar),
        }
    }
}
