//! Set algebra over lists.
//!
//! `without` and `with` use strict equality. `union`, `intersection` and
//! `uniq` compare scalars by their string form, so `1`, `1.0`, `"1"` and
//! `true` coincide while `Null` and `0` do not; lists, maps, objects and
//! functions match only strictly equal values. Results keep first
//! occurrences in input order.

use crate::value::{Equality, Value};

fn holds(list: &[Value], value: &Value, equality: Equality) -> bool {
    list.iter().any(|element| equality.matches(element, value))
}

const fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_)
    )
}

/// Equivalence used for deduplication: string forms for scalars, strict
/// equality otherwise. Unlike loose equality it is transitive.
fn same_member(left: &Value, right: &Value) -> bool {
    match (is_scalar(left), is_scalar(right)) {
        (true, true) => left.to_string() == right.to_string(),
        (false, false) => Equality::Strict.matches(left, right),
        _ => false,
    }
}

fn is_member(list: &[Value], value: &Value) -> bool {
    list.iter().any(|element| same_member(element, value))
}

fn push_unique(unique: &mut Vec<Value>, value: &Value) {
    if !is_member(unique, value) {
        unique.push(value.clone());
    }
}

/// Returns `list` without any element strictly equal to one of `values`.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::without;
/// use overscore::values;
///
/// assert_eq!(without(&values![1, 2, 1, 0, 3, 1, 4], &values![0, 1]), values![2, 3, 4]);
/// assert_eq!(without(&values![1, 2], &values!["1"]), values![1, 2]);
/// ```
pub fn without(list: &[Value], values: &[Value]) -> Vec<Value> {
    list.iter()
        .filter(|element| !holds(values, element, Equality::Strict))
        .cloned()
        .collect()
}

/// Returns `list` with each of `values` appended unless already strictly present.
pub fn with(list: &[Value], values: &[Value]) -> Vec<Value> {
    let mut extended = list.to_vec();
    for value in values {
        if !holds(&extended, value, Equality::Strict) {
            extended.push(value.clone());
        }
    }
    extended
}

/// Returns the distinct elements of `list`, first occurrences first.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::uniq;
/// use overscore::values;
///
/// assert_eq!(uniq(&values![1, 2, 1, 3, 1, "2"]), values![1, 2, 3]);
/// ```
pub fn uniq(list: &[Value]) -> Vec<Value> {
    let mut unique = Vec::with_capacity(list.len());
    for value in list {
        push_unique(&mut unique, value);
    }
    unique
}

/// Returns the distinct elements of all `lists`, in order of first appearance.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::union;
/// use overscore::values;
///
/// let merged = union(&[values![1, 2, 3], values![101, 2, 1, 10], values![2, 1]]);
/// assert_eq!(merged, values![1, 2, 3, 101, 10]);
/// ```
pub fn union(lists: &[Vec<Value>]) -> Vec<Value> {
    let mut unique = Vec::new();
    for value in lists.iter().flatten() {
        push_unique(&mut unique, value);
    }
    unique
}

/// Returns the distinct elements of the first list present in every other list.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::intersection;
/// use overscore::values;
///
/// let common = intersection(&[values!["moe", "curly", "larry"], values!["moe", "groucho"]]);
/// assert_eq!(common, values!["moe"]);
/// ```
pub fn intersection(lists: &[Vec<Value>]) -> Vec<Value> {
    let Some((head, others)) = lists.split_first() else {
        return Vec::new();
    };
    let mut common = Vec::new();
    for value in head {
        if others.iter().all(|other| is_member(other, value)) {
            push_unique(&mut common, value);
        }
    }
    common
}

/// Groups the elements of `lists` by position.
///
/// The result has one tuple per position of the longest list; shorter
/// lists contribute `Null`.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::zip;
/// use overscore::value::Value;
/// use overscore::values;
///
/// let zipped = zip(&[values!["moe", "larry"], values![30, 40], values![true]]);
/// assert_eq!(zipped, vec![values!["moe", 30, true], values!["larry", 40, Value::Null]]);
/// ```
pub fn zip(lists: &[Vec<Value>]) -> Vec<Vec<Value>> {
    let width = lists.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|position| {
            lists
                .iter()
                .map(|list| list.get(position).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
