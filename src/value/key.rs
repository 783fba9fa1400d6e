//! Mapping keys.

use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

use super::Value;
use crate::error::{OverscoreError, Result};

/// A mapping key: an integer or a string.
///
/// Strings holding a canonical decimal integer (`"7"`, `"-3"`, but not
/// `"07"` or `"+3"`) are normalised to [`Key::Int`], so `"7"` and `7`
/// address the same entry.
///
/// # Examples
///
/// ```rust
/// use overscore::value::Key;
///
/// assert_eq!(Key::from("7"), Key::Int(7));
/// assert_eq!(Key::from("07"), Key::Str("07".into()));
/// assert_eq!(Key::from(3usize).position(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// An integer key; also the position of a sequence element.
    Int(i64),
    /// A string key.
    Str(Rc<str>),
}

impl Key {
    /// Returns the key as a sequence position when it is a non-negative integer.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Int(number) => usize::try_from(*number).ok(),
            Self::Str(_) => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Str(text) => write!(formatter, "{text}"),
        }
    }
}

impl From<i64> for Key {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<i32> for Key {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<usize> for Key {
    fn from(position: usize) -> Self {
        Self::Int(i64::try_from(position).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        match text.parse::<i64>() {
            Ok(number) if number.to_string() == text => Self::Int(number),
            _ => Self::Str(Rc::from(text)),
        }
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<&String> for Key {
    fn from(text: &String) -> Self {
        Self::from(text.as_str())
    }
}

impl TryFrom<&Value> for Key {
    type Error = OverscoreError;

    /// Converts a value into a key: integers and strings directly, booleans
    /// as `0`/`1`, floats truncated toward zero, `Null` as the empty string.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Int(number) => Ok(Self::Int(*number)),
            Value::Str(text) => Ok(Self::from(&**text)),
            Value::Bool(flag) => Ok(Self::Int(i64::from(*flag))),
            #[allow(clippy::cast_possible_truncation)]
            Value::Float(number) if number.is_finite() => Ok(Self::Int(number.trunc() as i64)),
            Value::Null => Ok(Self::Str(Rc::from(""))),
            other => Err(OverscoreError::invalid_argument(
                "key",
                format!("a {} cannot be used as a key", other.type_name()),
            )),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Str(text) => serializer.serialize_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", Key::Int(0))]
    #[case("-12", Key::Int(-12))]
    #[case("12", Key::Int(12))]
    #[case("012", Key::Str("012".into()))]
    #[case("+1", Key::Str("+1".into()))]
    #[case("1.5", Key::Str("1.5".into()))]
    #[case("name", Key::Str("name".into()))]
    fn test_string_keys_normalise(#[case] text: &str, #[case] expected: Key) {
        assert_eq!(Key::from(text), expected);
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(Key::try_from(&Value::from(true)).unwrap(), Key::Int(1));
        assert_eq!(Key::try_from(&Value::from(2.9)).unwrap(), Key::Int(2));
        assert_eq!(Key::try_from(&Value::Null).unwrap(), Key::from(""));
        assert!(Key::try_from(&Value::List(vec![])).is_err());
    }

    #[test]
    fn test_position_only_for_non_negative_integers() {
        assert_eq!(Key::Int(2).position(), Some(2));
        assert_eq!(Key::Int(-1).position(), None);
        assert_eq!(Key::from("a").position(), None);
    }
}
