//! Slicing, splicing and cleaning helpers.

use crate::value::Value;

/// Concatenates `parts` into one list.
///
/// List parts are spliced in element by element; any other part is
/// appended as a single element.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::concat;
/// use overscore::value::Value;
/// use overscore::values;
///
/// let joined = concat(&[Value::List(values![1, 2]), Value::from(3), Value::List(values![4])]);
/// assert_eq!(joined, values![1, 2, 3, 4]);
/// ```
pub fn concat(parts: &[Value]) -> Vec<Value> {
    let mut joined = Vec::new();
    for part in parts {
        match part {
            Value::List(items) => joined.extend_from_slice(items),
            other => joined.push(other.clone()),
        }
    }
    joined
}

/// Returns the first element.
pub fn first(list: &[Value]) -> Option<Value> {
    list.first().cloned()
}

/// Returns up to the first `count` elements.
pub fn first_n(list: &[Value], count: usize) -> Vec<Value> {
    list.iter().take(count).cloned().collect()
}

/// Returns the last element.
pub fn last(list: &[Value]) -> Option<Value> {
    list.last().cloned()
}

/// Returns up to the last `count` elements, in order.
pub fn last_n(list: &[Value], count: usize) -> Vec<Value> {
    list[list.len().saturating_sub(count)..].to_vec()
}

/// Returns every element except the last `count`.
pub fn initial(list: &[Value], count: usize) -> Vec<Value> {
    list[..list.len().saturating_sub(count)].to_vec()
}

/// Returns every element except the first `count`.
pub fn rest(list: &[Value], count: usize) -> Vec<Value> {
    list.iter().skip(count).cloned().collect()
}

/// Drops every falsy element: `Null`, `false`, `0`, `0.0`, `""`, `"0"` and
/// empty lists and maps.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::compact;
/// use overscore::value::Value;
/// use overscore::values;
///
/// assert_eq!(compact(&values![0, 1, false, 2, "", 3, Value::Null]), values![1, 2, 3]);
/// ```
pub fn compact(list: &[Value]) -> Vec<Value> {
    list.iter().filter(|value| value.is_truthy()).cloned().collect()
}

/// Flattens nested lists and maps, at any depth, into one list of their
/// leaf values.
///
/// Objects are leaves; their fields are not spliced.
///
/// # Examples
///
/// ```rust
/// use overscore::arrays::flatten;
/// use overscore::value::Value;
/// use overscore::values;
///
/// let nested = values![1, Value::List(values![2, Value::List(values![3, Value::List(values![4])])])];
/// assert_eq!(flatten(&nested), values![1, 2, 3, 4]);
/// ```
pub fn flatten(list: &[Value]) -> Vec<Value> {
    let mut leaves = Vec::new();
    collect_leaves(list.iter(), &mut leaves);
    leaves
}

fn collect_leaves<'a>(values: impl Iterator<Item = &'a Value>, leaves: &mut Vec<Value>) {
    for value in values {
        match value {
            Value::List(items) => collect_leaves(items.iter(), leaves),
            Value::Map(entries) => collect_leaves(entries.values(), leaves),
            leaf => leaves.push(leaf.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mapping, values};
    use rstest::rstest;

    #[rstest]
    #[case(0, values![])]
    #[case(2, values![5, 4])]
    #[case(9, values![5, 4, 3, 2, 1])]
    fn test_first_n(#[case] count: usize, #[case] expected: Vec<Value>) {
        assert_eq!(first_n(&values![5, 4, 3, 2, 1], count), expected);
    }

    #[rstest]
    #[case(1, values![4, 3, 2, 1])]
    #[case(3, values![2, 1])]
    #[case(9, values![])]
    fn test_rest(#[case] count: usize, #[case] expected: Vec<Value>) {
        assert_eq!(rest(&values![5, 4, 3, 2, 1], count), expected);
    }

    #[rstest]
    #[case(1, values![1])]
    #[case(3, values![3, 2, 1])]
    #[case(9, values![5, 4, 3, 2, 1])]
    fn test_last_n(#[case] count: usize, #[case] expected: Vec<Value>) {
        assert_eq!(last_n(&values![5, 4, 3, 2, 1], count), expected);
    }

    #[test]
    fn test_initial_drops_from_the_end() {
        let list = values![5, 4, 3, 2, 1];
        assert_eq!(initial(&list, 1), values![5, 4, 3, 2]);
        assert_eq!(initial(&list, 9), values![]);
    }

    #[test]
    fn test_first_and_last_of_empty_list() {
        assert_eq!(first(&[]), None);
        assert_eq!(last(&[]), None);
    }

    #[test]
    fn test_flatten_splices_map_values() {
        let nested = values![Value::from(mapping! { "a" => 1, "b" => Value::List(values![2]) }), 3];
        assert_eq!(flatten(&nested), values![1, 2, 3]);
    }

    #[test]
    fn test_concat_keeps_maps_whole() {
        let map = Value::from(mapping! { "a" => 1 });
        assert_eq!(concat(&[map.clone()]), vec![map]);
    }
}
