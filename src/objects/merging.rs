//! Building maps from other maps.

use crate::error::Result;
use crate::invocation::apply;
use crate::value::{Key, Mapping, Value};

/// Merges `maps` left to right into a new map.
///
/// String keys are overwritten by later maps. Integer keys are never
/// overwritten: their values are appended and renumbered from `0` in
/// merge order.
///
/// # Examples
///
/// ```rust
/// use overscore::mapping;
/// use overscore::objects::extend;
///
/// let merged = extend(&[mapping! { "name" => "moe" }, mapping! { "age" => 50, "name" => "curly" }]);
/// assert_eq!(merged, mapping! { "name" => "curly", "age" => 50 });
///
/// let lists = extend(&[mapping! { 0 => "a", 1 => "b" }, mapping! { 0 => "c" }]);
/// assert_eq!(lists, mapping! { 0 => "a", 1 => "b", 2 => "c" });
/// ```
pub fn extend(maps: &[Mapping]) -> Mapping {
    let mut merged = Mapping::new();
    let mut next_position: usize = 0;
    for (key, value) in maps.iter().flatten() {
        match key {
            Key::Int(_) => {
                merged.insert(Key::from(next_position), value.clone());
                next_position += 1;
            }
            Key::Str(_) => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

/// Returns the entries of `map` whose key is one of `keys`, in `map` order.
///
/// # Examples
///
/// ```rust
/// use overscore::mapping;
/// use overscore::objects::pick;
/// use overscore::value::Key;
///
/// let stooge = mapping! { "name" => "moe", "age" => 50, "userid" => "moe1" };
/// let picked = pick(&stooge, &[Key::from("userid"), Key::from("name")]);
/// assert_eq!(picked, mapping! { "name" => "moe", "userid" => "moe1" });
/// ```
pub fn pick(map: &Mapping, keys: &[Key]) -> Mapping {
    map.iter()
        .filter(|(key, _)| keys.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Returns `map` with every entry of `defaults` whose key it lacks.
///
/// Existing entries are kept even when their value is `Null`.
///
/// # Examples
///
/// ```rust
/// use overscore::mapping;
/// use overscore::objects::defaults;
///
/// let order = mapping! { "flavor" => "chocolate" };
/// let filled = defaults(&order, &mapping! { "flavor" => "vanilla", "sprinkles" => "lots" });
/// assert_eq!(filled, mapping! { "flavor" => "chocolate", "sprinkles" => "lots" });
/// ```
pub fn defaults(map: &Mapping, defaults: &Mapping) -> Mapping {
    let mut filled = map.clone();
    for (key, value) in defaults {
        filled.entry(key.clone()).or_insert_with(|| value.clone());
    }
    filled
}

/// Returns the entry under `key`, invoking it first when it is a function.
///
/// Map entries are read by key and object entries by field name. A
/// function found in an object field is invoked with the object as its
/// context. A missing entry, or a value that is neither a map nor an
/// object, yields `Null`.
///
/// # Errors
///
/// Propagates the failure of an invoked entry.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::objects::result;
/// use overscore::value::{Key, Value};
/// use overscore::mapping;
///
/// let cheese = Value::from(mapping! {
///     "cheese" => "crumpets",
///     "stuff" => Callable::nullary(|| Value::from("nonsense")),
/// });
/// assert_eq!(result(&cheese, &Key::from("cheese")).unwrap(), Value::from("crumpets"));
/// assert_eq!(result(&cheese, &Key::from("stuff")).unwrap(), Value::from("nonsense"));
/// assert_eq!(result(&cheese, &Key::from("missing")).unwrap(), Value::Null);
/// ```
pub fn result(value: &Value, key: &Key) -> Result<Value> {
    let entry = match value {
        Value::Map(entries) => entries.get(key).cloned(),
        Value::Object(object) => object.get(&key.to_string()),
        _ => None,
    };
    match entry {
        Some(Value::Function(callable)) => apply(&callable, Some(value), &[]),
        Some(found) => Ok(found),
        None => Ok(Value::Null),
    }
}
