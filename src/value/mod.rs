//! The dynamic value model.
//!
//! Every operation in this crate works over [`Value`], a dynamically typed
//! datum that can hold scalars, ordered lists, insertion-ordered maps,
//! shared [`Object`] records and first-class [`Callable`]s.
//!
//! # Overview
//!
//! - [`Value`]: the datum itself, with truthiness, loose and strict equality
//!   and an ordering used by `max`/`min`/`sort_by`
//! - [`Key`]: the two legal mapping-key shapes (integer and string)
//! - [`Mapping`]: an insertion-ordered `Key -> Value` map
//! - [`Object`]: a shared, interior-mutable record with named methods; the
//!   only value that can act as a call context
//! - [`Equality`]: the loose/strict equality policy for membership tests
//!
//! # Examples
//!
//! ```rust
//! use overscore::value::{Equality, Value};
//! use overscore::values;
//!
//! let items = values![1, "1", 1.0];
//! assert!(Equality::Loose.matches(&items[0], &items[1]));
//! assert!(!Equality::Strict.matches(&items[0], &items[2]));
//! assert!(items[0].is_truthy());
//! ```

mod compare;
mod equality;
mod key;
mod macros;
mod object;
mod serialize;

pub use equality::Equality;
pub use key::Key;
pub use object::Object;

pub(crate) use compare::ordering;
pub(crate) use serialize::tagged_json;

use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

use crate::invocation::Callable;

/// An insertion-ordered map from [`Key`] to [`Value`].
pub type Mapping = IndexMap<Key, Value>;

/// A dynamically typed value.
///
/// `Value` implements [`PartialEq`] with strict equality (same variant and
/// structurally equal contents, objects and functions by identity). Use
/// [`Value::loose_eq`] or [`Equality::Loose`] for value equality across
/// numeric representations.
///
/// # Examples
///
/// ```rust
/// use overscore::value::Value;
///
/// assert!(!Value::from(0).is_truthy());
/// assert!(Value::from("a").is_truthy());
/// assert_eq!(Value::from(3).to_string(), "3");
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// An insertion-ordered key-value mapping.
    Map(Mapping),
    /// A shared record with fields and methods.
    Object(Object),
    /// A first-class callable.
    Function(Callable),
}

impl Value {
    /// Returns a short name for the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"`, the empty list and the
    /// empty map are falsy. Every other value, including every object and
    /// function, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::Str(text) => !text.is_empty() && &**text != "0",
            Self::List(items) => !items.is_empty(),
            Self::Map(entries) => !entries.is_empty(),
            Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Returns `true` for values that can serve as a call context.
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Loose (value) equality. See [`Equality::Loose`].
    pub fn loose_eq(&self, other: &Self) -> bool {
        equality::loose_eq(self, other)
    }

    /// Returns the integer payload, if any.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the float payload, if any.
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean payload, if any.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the list payload, if any.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map payload, if any.
    pub const fn as_map(&self) -> Option<&Mapping> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the object handle, if any.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the callable, if any.
    pub const fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Function(callable) => Some(callable),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        equality::strict_eq(self, other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(true) => write!(formatter, "1"),
            Self::Bool(false) => Ok(()),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Str(text) => write!(formatter, "{text}"),
            Self::List(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
            Self::Map(entries) => {
                write!(formatter, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                write!(formatter, "}}")
            }
            Self::Object(object) => write!(formatter, "<{}>", object.class()),
            Self::Function(callable) => write!(formatter, "<fn {}>", callable.label()),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<usize> for Value {
    fn from(number: usize) -> Self {
        Self::Int(i64::try_from(number).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(entries: Mapping) -> Self {
        Self::Map(entries)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(number) => Self::Int(number),
            Key::Str(text) => Self::Str(text),
        }
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Function(callable)
    }
}

impl From<&Self> for Value {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}
