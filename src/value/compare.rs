//! Numeric coercion and ordering between values.

use std::cmp::Ordering;

use super::Value;
use crate::error::{OverscoreError, Result};

/// A number extracted from an `Int`, a `Float` or a numeric string.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(number) => number as f64,
            Self::Float(number) => number,
        }
    }

    pub(crate) fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(&right)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

/// Parses a numeric string: optional surrounding whitespace, an optional
/// sign, digits, an optional fraction and an optional exponent.
/// `inf`, `NaN` and hexadecimal forms are not numeric.
pub(crate) fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || !trimmed
            .bytes()
            .all(|byte| byte.is_ascii_digit() || matches!(byte, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed.parse::<i64>().map_or_else(
        |_| trimmed.parse::<f64>().ok().map(Number::Float),
        |number| Some(Number::Int(number)),
    )
}

impl Value {
    pub(crate) fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(number) => Some(Number::Int(*number)),
            Self::Float(number) => Some(Number::Float(*number)),
            Self::Str(text) => parse_numeric(text),
            _ => None,
        }
    }

    /// Compares two values, returning `None` when they have no defined order.
    ///
    /// Numbers compare numerically, numeric strings compare numerically with
    /// numbers and with each other, other strings compare lexicographically,
    /// booleans compare as `false < true`, lists compare by length and then
    /// element by element. Every other pairing (objects, functions, maps,
    /// numbers against non-numeric strings, `NaN`) is unordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use overscore::value::Value;
    ///
    /// assert_eq!(Value::from(2).compare(&Value::from(10.5)), Some(Ordering::Less));
    /// assert_eq!(Value::from("10").compare(&Value::from("9")), Some(Ordering::Greater));
    /// assert_eq!(Value::from("b").compare(&Value::from("a")), Some(Ordering::Greater));
    /// assert_eq!(Value::from(1).compare(&Value::from("one")), None);
    /// ```
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(left), Self::Bool(right)) => Some(left.cmp(right)),
            (Self::Str(left), Self::Str(right)) => {
                match (parse_numeric(left), parse_numeric(right)) {
                    (Some(left), Some(right)) => left.compare(right),
                    _ => Some(left.cmp(right)),
                }
            }
            (Self::List(left), Self::List(right)) => {
                if left.len() != right.len() {
                    return Some(left.len().cmp(&right.len()));
                }
                for (left_item, right_item) in left.iter().zip(right) {
                    match left_item.compare(right_item)? {
                        Ordering::Equal => {}
                        decided => return Some(decided),
                    }
                }
                Some(Ordering::Equal)
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(left), Some(right)) => left.compare(right),
                _ => None,
            },
        }
    }
}

/// [`Value::compare`] as a `Result`, for operations that must fail on
/// unordered input.
pub(crate) fn ordering(left: &Value, right: &Value) -> Result<Ordering> {
    left.compare(right)
        .ok_or_else(|| OverscoreError::NotComparable {
            left: left.type_name(),
            right: right.type_name(),
        })
}
