//! Reading the shape of maps and objects.

use crate::error::Result;
use crate::traversal::Collection;
use crate::value::{Key, Value};

/// Returns the keys of a map, the field names of an object or the positions
/// of a list, in iteration order.
///
/// # Errors
///
/// Returns [`OverscoreError::InvalidArgument`](crate::error::OverscoreError::InvalidArgument)
/// for scalars and functions.
///
/// # Examples
///
/// ```rust
/// use overscore::objects::keys;
/// use overscore::value::{Key, Object, Value};
///
/// let stooge = Value::from(Object::record([("one", 1), ("two", 2), ("three", 3)]));
/// assert_eq!(
///     keys(&stooge).unwrap(),
///     vec![Key::from("one"), Key::from("two"), Key::from("three")]
/// );
/// ```
pub fn keys(value: &Value) -> Result<Vec<Key>> {
    Ok(Collection::try_from(value)?.keys().collect())
}

/// Returns the values of a map, the field values of an object or the
/// elements of a list, in iteration order.
///
/// # Errors
///
/// Returns [`OverscoreError::InvalidArgument`](crate::error::OverscoreError::InvalidArgument)
/// for scalars and functions.
pub fn values(value: &Value) -> Result<Vec<Value>> {
    Ok(Collection::try_from(value)?.values().cloned().collect())
}

/// Returns the method names of an object, in declaration order.
///
/// Any other value has no methods and yields `None`.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::objects::functions;
/// use overscore::value::{Object, Value};
///
/// let noop = Callable::nullary(|| Value::Null);
/// let widget = Object::new("Widget")
///     .with_method("render", noop.clone())
///     .with_method("hide", noop);
///
/// assert_eq!(functions(&Value::from(widget)), Some(vec!["render".to_owned(), "hide".to_owned()]));
/// assert_eq!(functions(&Value::from(1)), None);
/// ```
pub fn functions(value: &Value) -> Option<Vec<String>> {
    value.as_object().map(|object| object.method_names())
}

/// Returns `true` when `value` has an entry under `key`.
///
/// Maps are checked by key, objects by field name and lists by position;
/// any other value has no entries.
pub fn has(value: &Value, key: &Key) -> bool {
    match value {
        Value::Map(entries) => entries.contains_key(key),
        Value::Object(object) => object.has_field(&key.to_string()),
        Value::List(items) => key.position().is_some_and(|position| position < items.len()),
        _ => false,
    }
}

/// Returns `true` when `value` is falsy: `Null`, `false`, zero, `""`, `"0"`
/// or an empty list or map.
pub fn is_empty(value: &Value) -> bool {
    !value.is_truthy()
}
