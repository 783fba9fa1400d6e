//! The core traversal operations.
//!
//! Every operation binds its iterator to the context once, then walks the
//! collection in iteration order. A failure raised by the iterator aborts
//! the walk and is returned unchanged; nothing partial is returned.

use std::cmp::Ordering;

use tracing::debug;

use super::Collection;
use crate::error::{OverscoreError, Result};
use crate::invocation::{bind, Callable};
use crate::value::{ordering, Equality, Key, Mapping, Value};

/// Invokes the bound iterator, logging the abort when it fails.
pub(super) fn step(operation: &'static str, iterator: &Callable, arguments: &[Value]) -> Result<Value> {
    iterator.invoke(arguments).inspect_err(|error| {
        debug!(operation, callable = iterator.label(), %error, "traversal aborted");
    })
}

/// Invokes the iterator with `(value, key)` for its result.
pub(super) fn visit(
    operation: &'static str,
    iterator: &Callable,
    key: Key,
    value: &Value,
) -> Result<Value> {
    step(operation, iterator, &[value.clone(), Value::from(key)])
}

/// Invokes the optional iterator, falling back to the value itself.
fn criterion(
    operation: &'static str,
    iterator: Option<&Callable>,
    key: Key,
    value: &Value,
) -> Result<Value> {
    match iterator {
        Some(iterator) => visit(operation, iterator, key, value),
        None => Ok(value.clone()),
    }
}

/// Invokes `iterator(value, key)` for every element, in order.
///
/// # Errors
///
/// Propagates the first iterator failure; later elements are not visited.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use overscore::invocation::Callable;
/// use overscore::traversal::{each, Collection};
/// use overscore::value::Value;
/// use overscore::values;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let record = Callable::new(move |invocation| {
///     sink.borrow_mut().push(invocation.argument(0));
///     Ok(Value::Null)
/// });
///
/// each(&Collection::from(values![1, 2, 3]), &record, None).unwrap();
/// assert_eq!(*seen.borrow(), values![1, 2, 3]);
/// ```
pub fn each(collection: &Collection, iterator: &Callable, context: Option<&Value>) -> Result<()> {
    let iterator = bind(iterator, context);
    for (key, value) in collection.entries() {
        visit("each", &iterator, key, value)?;
    }
    Ok(())
}

/// Replaces every value with `iterator(value, key)`, keeping the shape.
///
/// A sequence maps to a sequence of the same length and a mapping to a
/// mapping with the same keys in the same order.
///
/// # Errors
///
/// Propagates the first iterator failure; no partial result is returned.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::traversal::{map, Collection};
/// use overscore::value::Value;
/// use overscore::values;
///
/// let triple = Callable::unary(|value| Value::from(value.as_int().unwrap_or(0) * 3));
/// let tripled = map(&Collection::from(values![1, 2, 3]), &triple, None).unwrap();
/// assert_eq!(tripled, Collection::from(values![3, 6, 9]));
/// ```
pub fn map(collection: &Collection, iterator: &Callable, context: Option<&Value>) -> Result<Collection> {
    let iterator = bind(iterator, context);
    match collection {
        Collection::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(position, value)| visit("map", &iterator, Key::from(position), value))
            .collect::<Result<Vec<_>>>()
            .map(Collection::Sequence),
        Collection::Mapping(entries) => entries
            .iter()
            .map(|(key, value)| {
                visit("map", &iterator, key.clone(), value).map(|mapped| (key.clone(), mapped))
            })
            .collect::<Result<Mapping>>()
            .map(Collection::Mapping),
    }
}

/// Folds left to right: `memo = iterator(memo, value, key)`.
///
/// An empty collection returns `memo` unchanged.
///
/// # Errors
///
/// Propagates the first iterator failure.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::traversal::{reduce, Collection};
/// use overscore::value::Value;
/// use overscore::values;
///
/// let sum = Callable::binary(|memo, value| {
///     Value::from(memo.as_int().unwrap_or(0) + value.as_int().unwrap_or(0))
/// });
/// let total = reduce(&Collection::from(values![1, 2, 3]), &sum, Value::from(0), None).unwrap();
/// assert_eq!(total, Value::from(6));
/// ```
pub fn reduce(
    collection: &Collection,
    iterator: &Callable,
    memo: Value,
    context: Option<&Value>,
) -> Result<Value> {
    let iterator = bind(iterator, context);
    collection.entries().try_fold(memo, |memo, (key, value)| {
        step("reduce", &iterator, &[memo, value.clone(), Value::from(key)])
    })
}

/// Folds right to left: the last element is combined first.
///
/// # Errors
///
/// Propagates the first iterator failure.
pub fn reduce_right(
    collection: &Collection,
    iterator: &Callable,
    memo: Value,
    context: Option<&Value>,
) -> Result<Value> {
    let iterator = bind(iterator, context);
    collection.entries().rev().try_fold(memo, |memo, (key, value)| {
        step("reduce_right", &iterator, &[memo, value.clone(), Value::from(key)])
    })
}

/// Returns the first value for which the iterator is truthy.
///
/// Stops at the first match; `None` when nothing matches.
///
/// # Errors
///
/// Propagates the first iterator failure.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::traversal::{find, Collection};
/// use overscore::value::Value;
/// use overscore::values;
///
/// let even = Callable::predicate(|value| value.as_int().is_some_and(|number| number % 2 == 0));
/// let found = find(&Collection::from(values![1, 2, 3, 4]), &even, None).unwrap();
/// assert_eq!(found, Some(Value::from(2)));
/// ```
pub fn find(
    collection: &Collection,
    iterator: &Callable,
    context: Option<&Value>,
) -> Result<Option<Value>> {
    let iterator = bind(iterator, context);
    for (key, value) in collection.entries() {
        if visit("find", &iterator, key, value)?.is_truthy() {
            return Ok(Some(value.clone()));
        }
    }
    Ok(None)
}

fn partition_by(
    operation: &'static str,
    collection: &Collection,
    iterator: &Callable,
    context: Option<&Value>,
    keep: bool,
) -> Result<Vec<Value>> {
    let iterator = bind(iterator, context);
    let mut kept = Vec::new();
    for (key, value) in collection.entries() {
        if visit(operation, &iterator, key, value)?.is_truthy() == keep {
            kept.push(value.clone());
        }
    }
    Ok(kept)
}

/// Returns the values for which the iterator is truthy, in order.
///
/// # Errors
///
/// Propagates the first iterator failure.
pub fn filter(collection: &Collection, iterator: &Callable, context: Option<&Value>) -> Result<Vec<Value>> {
    partition_by("filter", collection, iterator, context, true)
}

/// Returns the values for which the iterator is falsy, in order.
///
/// # Errors
///
/// Propagates the first iterator failure.
pub fn reject(collection: &Collection, iterator: &Callable, context: Option<&Value>) -> Result<Vec<Value>> {
    partition_by("reject", collection, iterator, context, false)
}

/// Returns `true` when the iterator is truthy for every element.
///
/// Without an iterator the truthiness of each value is used. Vacuously
/// `true` on an empty collection; stops at the first falsy result.
///
/// # Errors
///
/// Propagates the first iterator failure.
pub fn all(collection: &Collection, iterator: Option<&Callable>, context: Option<&Value>) -> Result<bool> {
    let iterator = iterator.map(|iterator| bind(iterator, context));
    for (key, value) in collection.entries() {
        if !criterion("all", iterator.as_ref(), key, value)?.is_truthy() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns `true` when the iterator is truthy for at least one element.
///
/// Without an iterator the truthiness of each value is used. Vacuously
/// `false` on an empty collection; stops at the first truthy result.
///
/// # Errors
///
/// Propagates the first iterator failure.
pub fn any(collection: &Collection, iterator: Option<&Callable>, context: Option<&Value>) -> Result<bool> {
    let iterator = iterator.map(|iterator| bind(iterator, context));
    for (key, value) in collection.entries() {
        if criterion("any", iterator.as_ref(), key, value)?.is_truthy() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns `true` when some element loosely equals `value`.
pub fn contains(collection: &Collection, value: &Value) -> bool {
    contains_with(collection, value, Equality::Loose)
}

/// Returns `true` when some element equals `value` under `equality`.
pub fn contains_with(collection: &Collection, value: &Value, equality: Equality) -> bool {
    collection.values().any(|element| equality.matches(element, value))
}

/// Invokes the named method, with no arguments, on every item.
///
/// # Errors
///
/// Returns [`OverscoreError::InvalidArgument`] for an item that is not an
/// object and [`OverscoreError::MissingMethod`] for an object without the
/// method; items before it have already been invoked. Method failures are
/// propagated.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::traversal::{invoke, Collection};
/// use overscore::value::{Object, Value};
///
/// let switch_on = Callable::method(|this, _| {
///     this.set("on", true);
///     Ok(Value::Null)
/// });
/// let lamp = Object::new("Lamp").with_method("switch_on", switch_on);
///
/// invoke(&Collection::from(vec![Value::from(lamp.clone())]), "switch_on").unwrap();
/// assert_eq!(lamp.get("on"), Some(Value::from(true)));
/// ```
pub fn invoke(collection: &Collection, method: &str) -> Result<()> {
    for value in collection.values() {
        let Value::Object(object) = value else {
            return Err(OverscoreError::invalid_argument(
                "invoke",
                format!("cannot call `{method}` on a {}", value.type_name()),
            ));
        };
        object.invoke(method, &[])?;
    }
    Ok(())
}

/// Returns the value under `key` of every item that has it.
///
/// Map items are read by key, object items by field name and list items
/// by position; items without `key`, and items of any other kind, are
/// skipped.
///
/// # Examples
///
/// ```rust
/// use overscore::traversal::{pluck, Collection};
/// use overscore::value::{Key, Value};
/// use overscore::{mapping, values};
///
/// let stooges = Collection::from(vec![
///     Value::from(mapping! { "name" => "moe", "age" => 40 }),
///     Value::from(mapping! { "name" => "larry" }),
/// ]);
/// assert_eq!(pluck(&stooges, &Key::from("age")), values![40]);
/// ```
pub fn pluck(collection: &Collection, key: &Key) -> Vec<Value> {
    collection
        .values()
        .filter_map(|item| match item {
            Value::Map(entries) => entries.get(key).cloned(),
            Value::Object(object) => object.get(&key.to_string()),
            Value::List(items) => key.position().and_then(|position| items.get(position)).cloned(),
            _ => None,
        })
        .collect()
}

fn extremum(
    operation: &'static str,
    collection: &Collection,
    iterator: Option<&Callable>,
    context: Option<&Value>,
    wanted: Ordering,
) -> Result<Option<Value>> {
    let iterator = iterator.map(|iterator| bind(iterator, context));
    let mut best: Option<Value> = None;
    for (key, value) in collection.entries() {
        let candidate = criterion(operation, iterator.as_ref(), key, value)?;
        best = match best {
            Some(current) if ordering(&candidate, &current)? != wanted => Some(current),
            _ => Some(candidate),
        };
    }
    Ok(best)
}

/// Returns the greatest `iterator(value, key)`, or the greatest value
/// without an iterator.
///
/// The first of several equal maxima wins. `None` on an empty collection.
///
/// # Errors
///
/// Propagates iterator failures and returns [`OverscoreError::NotComparable`]
/// when two results have no defined order.
///
/// # Examples
///
/// ```rust
/// use overscore::traversal::{max, Collection};
/// use overscore::value::Value;
/// use overscore::values;
///
/// let negatives = Collection::from(values![-3, -1, -2]);
/// assert_eq!(max(&negatives, None, None).unwrap(), Some(Value::from(-1)));
/// ```
pub fn max(collection: &Collection, iterator: Option<&Callable>, context: Option<&Value>) -> Result<Option<Value>> {
    extremum("max", collection, iterator, context, Ordering::Greater)
}

/// Returns the least `iterator(value, key)`, or the least value without an
/// iterator.
///
/// The first of several equal minima wins. `None` on an empty collection.
///
/// # Errors
///
/// Propagates iterator failures and returns [`OverscoreError::NotComparable`]
/// when two results have no defined order.
pub fn min(collection: &Collection, iterator: Option<&Callable>, context: Option<&Value>) -> Result<Option<Value>> {
    extremum("min", collection, iterator, context, Ordering::Less)
}

/// Returns the key of the first element loosely equal to `value`.
///
/// # Examples
///
/// ```rust
/// use overscore::traversal::{index_of, last_index_of, Collection};
/// use overscore::value::{Key, Value};
/// use overscore::values;
///
/// let numbers = Collection::from(values![0, 1, 2, 1]);
/// assert_eq!(index_of(&numbers, &Value::from(1)), Some(Key::Int(1)));
/// assert_eq!(last_index_of(&numbers, &Value::from(1)), Some(Key::Int(3)));
/// assert_eq!(index_of(&numbers, &Value::from(9)), None);
/// ```
pub fn index_of(collection: &Collection, value: &Value) -> Option<Key> {
    index_of_with(collection, value, Equality::Loose)
}

/// Returns the key of the first element equal to `value` under `equality`.
pub fn index_of_with(collection: &Collection, value: &Value, equality: Equality) -> Option<Key> {
    collection
        .entries()
        .find(|(_, element)| equality.matches(element, value))
        .map(|(key, _)| key)
}

/// Returns the key of the last element loosely equal to `value`.
pub fn last_index_of(collection: &Collection, value: &Value) -> Option<Key> {
    last_index_of_with(collection, value, Equality::Loose)
}

/// Returns the key of the last element equal to `value` under `equality`.
pub fn last_index_of_with(collection: &Collection, value: &Value, equality: Equality) -> Option<Key> {
    collection
        .entries()
        .rev()
        .find(|(_, element)| equality.matches(element, value))
        .map(|(key, _)| key)
}
