//! Grouping operations: `group_by` and `count_by`.

use indexmap::IndexMap;

use super::operations::visit;
use super::Collection;
use crate::error::{OverscoreError, Result};
use crate::invocation::{bind, Callable};
use crate::value::{Key, Value};

fn group_key(operation: &'static str, criterion: &Value) -> Result<Key> {
    Key::try_from(criterion).map_err(|_| {
        OverscoreError::invalid_argument(
            operation,
            format!("cannot group by a {}", criterion.type_name()),
        )
    })
}

/// Groups the values by `iterator(value, key)`.
///
/// Groups appear in the order their key was first produced, and each group
/// keeps iteration order. The iterator must produce a key-shaped value: an
/// integer, a string, a boolean (grouped as `0`/`1`) or a float (truncated).
///
/// # Errors
///
/// Propagates iterator failures and returns [`OverscoreError::InvalidArgument`]
/// when the iterator produces a list, map, object or function.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::traversal::{group_by, Collection};
/// use overscore::value::{Key, Value};
/// use overscore::values;
///
/// let parity = Callable::unary(|value| Value::from(value.as_int().unwrap_or(0) % 2));
/// let groups = group_by(&Collection::from(values![1, 2, 3, 4, 5]), &parity, None).unwrap();
///
/// assert_eq!(groups[&Key::Int(1)], values![1, 3, 5]);
/// assert_eq!(groups[&Key::Int(0)], values![2, 4]);
/// ```
pub fn group_by(
    collection: &Collection,
    iterator: &Callable,
    context: Option<&Value>,
) -> Result<IndexMap<Key, Vec<Value>>> {
    let iterator = bind(iterator, context);
    let mut groups: IndexMap<Key, Vec<Value>> = IndexMap::new();
    for (key, value) in collection.entries() {
        let group = group_key("group_by", &visit("group_by", &iterator, key, value)?)?;
        groups.entry(group).or_default().push(value.clone());
    }
    Ok(groups)
}

/// Counts the values by `iterator(value, key)`.
///
/// Counts appear in the order their key was first produced; each count
/// equals the length of the matching [`group_by`] group.
///
/// # Errors
///
/// As for [`group_by`].
pub fn count_by(
    collection: &Collection,
    iterator: &Callable,
    context: Option<&Value>,
) -> Result<IndexMap<Key, usize>> {
    let iterator = bind(iterator, context);
    let mut counts: IndexMap<Key, usize> = IndexMap::new();
    for (key, value) in collection.entries() {
        let group = group_key("count_by", &visit("count_by", &iterator, key, value)?)?;
        *counts.entry(group).or_insert(0) += 1;
    }
    Ok(counts)
}
