//! The two traversable shapes and the iteration over them.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use crate::error::{OverscoreError, Result};
use crate::value::{Key, Mapping, Value};

/// A traversable collection: an ordered sequence or an insertion-ordered mapping.
///
/// The variant is decided once, when the collection is built, and stays
/// fixed for the whole traversal. Every traversal operation sees elements
/// as `(key, value)` pairs through [`Collection::entries`]: the key is the
/// integer position for a sequence and the declared key for a mapping.
///
/// # Examples
///
/// ```rust
/// use overscore::traversal::Collection;
/// use overscore::value::{Key, Object, Value};
/// use overscore::values;
///
/// let sequence = Collection::from(values![10, 20]);
/// let keys: Vec<Key> = sequence.keys().collect();
/// assert_eq!(keys, vec![Key::Int(0), Key::Int(1)]);
///
/// let record = Value::from(Object::record([("one", 1), ("two", 2)]));
/// let mapping = Collection::try_from(&record).unwrap();
/// assert_eq!(mapping.get(&Key::from("two")), Some(&Value::from(2)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Collection {
    /// An ordered list; keys are positions.
    Sequence(Vec<Value>),
    /// A key-value mapping; keys are unique and iteration follows insertion order.
    Mapping(Mapping),
}

impl Collection {
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` when there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates `(key, value)` pairs in iteration order.
    pub fn entries(&self) -> Entries<'_> {
        match self {
            Self::Sequence(items) => Entries::Sequence(items.iter().enumerate()),
            Self::Mapping(entries) => Entries::Mapping(entries.iter()),
        }
    }

    /// Iterates the values in iteration order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + '_ {
        self.entries().map(|(_, value)| value)
    }

    /// Iterates the keys in iteration order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = Key> + '_ {
        self.entries().map(|(key, _)| key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self {
            Self::Sequence(items) => key.position().and_then(|position| items.get(position)),
            Self::Mapping(entries) => entries.get(key),
        }
    }

    /// Returns the sequence, if this is one.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) => Some(items),
            Self::Mapping(_) => None,
        }
    }

    /// Returns the mapping, if this is one.
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(entries) => Some(entries),
            Self::Sequence(_) => None,
        }
    }

    /// Converts back into a `List` or `Map` value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Sequence(items) => Value::List(items),
            Self::Mapping(entries) => Value::Map(entries),
        }
    }
}

impl From<Vec<Value>> for Collection {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Collection {
    fn from(entries: Mapping) -> Self {
        Self::Mapping(entries)
    }
}

impl From<Collection> for Value {
    fn from(collection: Collection) -> Self {
        collection.into_value()
    }
}

impl TryFrom<Value> for Collection {
    type Error = OverscoreError;

    /// Lists become sequences, maps become mappings and objects become
    /// mappings of their fields.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => Ok(Self::Sequence(items)),
            Value::Map(entries) => Ok(Self::Mapping(entries)),
            Value::Object(object) => Ok(Self::Mapping(object.fields())),
            other => Err(not_a_collection(&other)),
        }
    }
}

impl TryFrom<&Value> for Collection {
    type Error = OverscoreError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::List(items) => Ok(Self::Sequence(items.clone())),
            Value::Map(entries) => Ok(Self::Mapping(entries.clone())),
            Value::Object(object) => Ok(Self::Mapping(object.fields())),
            other => Err(not_a_collection(other)),
        }
    }
}

fn not_a_collection(value: &Value) -> OverscoreError {
    OverscoreError::invalid_argument(
        "collection",
        format!("expected a list, map or object, found {}", value.type_name()),
    )
}

// =============================================================================
// Entries
// =============================================================================

/// Iterator over the `(key, value)` pairs of a [`Collection`].
///
/// Created by [`Collection::entries`].
#[derive(Clone, Debug)]
pub enum Entries<'a> {
    /// Entries of a sequence.
    Sequence(Enumerate<slice::Iter<'a, Value>>),
    /// Entries of a mapping.
    Mapping(indexmap::map::Iter<'a, Key, Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(items) => items
                .next()
                .map(|(position, value)| (Key::from(position), value)),
            Self::Mapping(entries) => entries.next().map(|(key, value)| (key.clone(), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(items) => items.size_hint(),
            Self::Mapping(entries) => entries.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(items) => items
                .next_back()
                .map(|(position, value)| (Key::from(position), value)),
            Self::Mapping(entries) => entries
                .next_back()
                .map(|(key, value)| (key.clone(), value)),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
