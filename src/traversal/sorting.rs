//! Ordering operations: `sort_by` and `sorted_index`.

use std::cmp::Ordering;

use super::operations::{step, visit};
use super::Collection;
use crate::error::Result;
use crate::invocation::{bind, Callable};
use crate::value::{ordering, Value};

/// Stable merge sort with a fallible comparator.
///
/// Elements comparing equal keep their input order. The first comparison
/// failure aborts the sort.
fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>>
where
    F: FnMut(&T, &T) -> Result<Ordering>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare)?;
    let right = merge_sort(right, compare)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(first), Some(second)) = (left.peek(), right.peek()) {
        if compare(second, first)? == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

/// Returns the values sorted by `iterator(value, key)`, ascending.
///
/// The sort is stable: values with equal sort keys keep their iteration
/// order. The iterator runs once per element.
///
/// # Errors
///
/// Propagates iterator failures and returns
/// [`OverscoreError::NotComparable`](crate::error::OverscoreError::NotComparable)
/// when two sort keys have no defined order.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::traversal::{sort_by, Collection};
/// use overscore::value::Value;
/// use overscore::values;
///
/// let length = Callable::unary(|word| Value::from(word.as_str().map_or(0, str::len)));
/// let words = Collection::from(values!["three", "one", "two", "four"]);
///
/// assert_eq!(
///     sort_by(&words, &length, None).unwrap(),
///     values!["one", "two", "four", "three"]
/// );
/// ```
pub fn sort_by(collection: &Collection, iterator: &Callable, context: Option<&Value>) -> Result<Vec<Value>> {
    let iterator = bind(iterator, context);
    let keyed = collection
        .entries()
        .map(|(key, value)| visit("sort_by", &iterator, key, value).map(|criterion| (criterion, value.clone())))
        .collect::<Result<Vec<_>>>()?;
    let sorted = merge_sort(keyed, &mut |left: &(Value, Value), right: &(Value, Value)| {
        ordering(&left.0, &right.0)
    })?;
    Ok(sorted.into_iter().map(|(_, value)| value).collect())
}

/// Returns the lowest position at which `value` can be inserted into
/// `sorted` while keeping it sorted.
///
/// Positions are compared by `iterator(element)` when an iterator is given
/// and by the elements themselves otherwise. `sorted` must already be
/// ascending under that criterion.
///
/// # Errors
///
/// Propagates iterator failures and returns
/// [`OverscoreError::NotComparable`](crate::error::OverscoreError::NotComparable)
/// when the criterion of `value` cannot be ordered against an element's.
///
/// # Examples
///
/// ```rust
/// use overscore::traversal::sorted_index;
/// use overscore::value::Value;
/// use overscore::values;
///
/// let position = sorted_index(&values![10, 20, 30, 40, 50], &Value::from(35), None, None).unwrap();
/// assert_eq!(position, 3);
/// ```
pub fn sorted_index(
    sorted: &[Value],
    value: &Value,
    iterator: Option<&Callable>,
    context: Option<&Value>,
) -> Result<usize> {
    let iterator = iterator.map(|iterator| bind(iterator, context));
    let criterion = |element: &Value| match &iterator {
        Some(iterator) => step("sorted_index", iterator, std::slice::from_ref(element)),
        None => Ok(element.clone()),
    };

    let target = criterion(value)?;
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let middle = low + (high - low) / 2;
        if ordering(&criterion(&sorted[middle])?, &target)? == Ordering::Less {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    Ok(low)
}
