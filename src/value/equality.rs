//! Loose and strict equality.

use std::cmp::Ordering;

use super::{Key, Value};

/// The equality policy used by membership and position tests.
///
/// # Examples
///
/// ```rust
/// use overscore::value::{Equality, Value};
///
/// let one = Value::from(1);
/// let text = Value::from("1");
///
/// assert!(Equality::Loose.matches(&one, &text));
/// assert!(!Equality::Strict.matches(&one, &text));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equality {
    /// Value equality: numbers compare numerically across representations,
    /// numeric strings equal the numbers they spell, booleans compare
    /// against truthiness, `Null` equals the empty/zero values.
    #[default]
    Loose,
    /// Same variant and structurally equal; objects and functions by identity.
    Strict,
}

impl Equality {
    /// Tests two values for equality under this policy.
    pub fn matches(self, left: &Value, right: &Value) -> bool {
        match self {
            Self::Loose => loose_eq(left, right),
            Self::Strict => strict_eq(left, right),
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Int(number) => *number == 0,
        Value::Float(number) => *number == 0.0,
        Value::Str(text) => text.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        Value::Object(_) | Value::Function(_) => false,
    }
}

pub(crate) fn loose_eq(left: &Value, right: &Value) -> bool {
    loose_eq_within(left, right, &mut Vec::new())
}

/// Loose equality that tracks the object pairs under comparison; a pair
/// met again inside itself is taken as equal, so cyclic objects terminate.
fn loose_eq_within(left: &Value, right: &Value, visiting: &mut Vec<(usize, usize)>) -> bool {
    match (left, right) {
        (Value::Null, other) | (other, Value::Null) => is_blank(other),
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => *flag == other.is_truthy(),
        (Value::Str(left_text), Value::Str(right_text)) => {
            match (left.as_number(), right.as_number()) {
                (Some(left_number), Some(right_number)) => {
                    left_number.compare(right_number) == Some(Ordering::Equal)
                }
                _ => left_text == right_text,
            }
        }
        (Value::List(left_items), Value::List(right_items)) => {
            left_items.len() == right_items.len()
                && left_items
                    .iter()
                    .zip(right_items)
                    .all(|(left_item, right_item)| loose_eq_within(left_item, right_item, visiting))
        }
        (Value::Map(left_entries), Value::Map(right_entries)) => {
            left_entries.len() == right_entries.len()
                && left_entries.iter().all(|(key, left_value)| {
                    right_entries
                        .get(key)
                        .is_some_and(|right_value| loose_eq_within(left_value, right_value, visiting))
                })
        }
        (Value::List(items), Value::Map(entries)) | (Value::Map(entries), Value::List(items)) => {
            items.len() == entries.len()
                && items.iter().enumerate().all(|(position, item)| {
                    entries
                        .get(&Key::from(position))
                        .is_some_and(|value| loose_eq_within(item, value, visiting))
                })
        }
        (Value::Object(left_object), Value::Object(right_object)) => {
            if left_object.ptr_eq(right_object) {
                return true;
            }
            let pair = (left_object.address(), right_object.address());
            if visiting.contains(&pair) {
                return true;
            }
            if left_object.class() != right_object.class() {
                return false;
            }
            visiting.push(pair);
            let equal = loose_eq_within(
                &Value::Map(left_object.fields()),
                &Value::Map(right_object.fields()),
                visiting,
            );
            visiting.pop();
            equal
        }
        (Value::Function(left_callable), Value::Function(right_callable)) => {
            left_callable.ptr_eq(right_callable)
        }
        _ => match (left.as_number(), right.as_number()) {
            (Some(left_number), Some(right_number)) => {
                left_number.compare(right_number) == Some(Ordering::Equal)
            }
            _ => false,
        },
    }
}

pub(crate) fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(left_flag), Value::Bool(right_flag)) => left_flag == right_flag,
        (Value::Int(left_number), Value::Int(right_number)) => left_number == right_number,
        #[allow(clippy::float_cmp)]
        (Value::Float(left_number), Value::Float(right_number)) => left_number == right_number,
        (Value::Str(left_text), Value::Str(right_text)) => left_text == right_text,
        (Value::List(left_items), Value::List(right_items)) => {
            left_items.len() == right_items.len()
                && left_items
                    .iter()
                    .zip(right_items)
                    .all(|(left_item, right_item)| strict_eq(left_item, right_item))
        }
        (Value::Map(left_entries), Value::Map(right_entries)) => {
            left_entries.len() == right_entries.len()
                && left_entries.iter().zip(right_entries).all(
                    |((left_key, left_value), (right_key, right_value))| {
                        left_key == right_key && strict_eq(left_value, right_value)
                    },
                )
        }
        (Value::Object(left_object), Value::Object(right_object)) => {
            left_object.ptr_eq(right_object)
        }
        (Value::Function(left_callable), Value::Function(right_callable)) => {
            left_callable.ptr_eq(right_callable)
        }
        _ => false,
    }
}
