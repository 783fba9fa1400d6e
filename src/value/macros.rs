//! Literal macros for sequences and mappings.

/// Builds a `Vec<Value>` from heterogeneous literals.
///
/// # Examples
///
/// ```rust
/// use overscore::value::Value;
/// use overscore::values;
///
/// let items = values![1, "a", 2.5, true];
/// assert_eq!(items.len(), 4);
/// assert_eq!(items[1], Value::from("a"));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($element:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($element)),+]
    };
}

/// Builds a [`Mapping`](crate::value::Mapping) from `key => value` pairs,
/// keeping their order.
///
/// # Examples
///
/// ```rust
/// use overscore::mapping;
/// use overscore::value::{Key, Value};
///
/// let entries = mapping! { "b" => 2, "a" => 1 };
/// assert_eq!(entries.get_index(0), Some((&Key::from("b"), &Value::from(2))));
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::value::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut entries = $crate::value::Mapping::new();
        $(
            entries.insert($crate::value::Key::from($key), $crate::value::Value::from($value));
        )+
        entries
    }};
}
