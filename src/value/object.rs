//! Shared records with methods.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Key, Mapping, Value};
use crate::error::{OverscoreError, Result};
use crate::invocation::Callable;

#[derive(Default)]
struct ObjectData {
    class: String,
    fields: IndexMap<String, Value>,
    methods: IndexMap<String, Callable>,
}

/// A shared, interior-mutable record: a class name, insertion-ordered
/// fields and named methods.
///
/// Cloning an `Object` clones the handle, not the record; every clone sees
/// the same fields. This is what lets a callable bound to an object as its
/// context record results on it.
///
/// `Object` is the only value that counts as a structured context for
/// [`bind`](crate::invocation::bind).
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::value::{Object, Value};
///
/// let counter = Object::new("Counter")
///     .with_field("count", 0)
///     .with_method(
///         "increment",
///         Callable::method(|this, _| {
///             let next = this.get("count").and_then(|count| count.as_int()).unwrap_or(0) + 1;
///             this.set("count", next);
///             Ok(Value::from(next))
///         }),
///     );
///
/// counter.invoke("increment", &[]).unwrap();
/// assert_eq!(counter.get("count"), Some(Value::from(1)));
/// ```
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<ObjectData>>);

impl Object {
    /// Creates an empty object of the given class.
    pub fn new(class: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(ObjectData {
            class: class.into(),
            ..ObjectData::default()
        })))
    }

    /// Creates a plain record of class `record` from name/value pairs.
    pub fn record<N, V>(fields: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        fields
            .into_iter()
            .fold(Self::new("record"), |object, (name, value)| {
                object.with_field(name, value)
            })
    }

    /// Adds or replaces a field, returning the same handle.
    #[must_use]
    pub fn with_field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Adds or replaces a method, returning the same handle.
    #[must_use]
    pub fn with_method(self, name: impl Into<String>, method: Callable) -> Self {
        self.0.borrow_mut().methods.insert(name.into(), method);
        self
    }

    /// Returns the class name.
    pub fn class(&self) -> String {
        self.0.borrow().class.clone()
    }

    /// Returns a copy of the named field.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().fields.get(name).cloned()
    }

    /// Sets a field through the shared handle.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().fields.insert(name.into(), value.into());
    }

    /// Updates a field in place, inserting `Null` first when it is missing.
    ///
    /// The record stays borrowed while `update` runs, so `update` must not
    /// touch this object again.
    pub fn update<R>(&self, name: &str, update: impl FnOnce(&mut Value) -> R) -> R {
        let mut data = self.0.borrow_mut();
        let slot = data.fields.entry(name.to_owned()).or_default();
        update(slot)
    }

    /// Appends to a list field, turning a missing or `Null` field into a list.
    pub fn push(&self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        self.update(name, |slot| match slot {
            Value::List(items) => items.push(value),
            other => {
                let previous = std::mem::take(other);
                *other = if previous.is_null() {
                    Value::List(vec![value])
                } else {
                    Value::List(vec![previous, value])
                };
            }
        });
    }

    /// Returns `true` when the object has the named field.
    pub fn has_field(&self, name: &str) -> bool {
        self.0.borrow().fields.contains_key(name)
    }

    /// Returns the field names in insertion order.
    pub fn field_names(&self) -> Vec<String> {
        self.0.borrow().fields.keys().cloned().collect()
    }

    /// Returns a snapshot of the fields as a [`Mapping`].
    pub fn fields(&self) -> Mapping {
        self.0
            .borrow()
            .fields
            .iter()
            .map(|(name, value)| (Key::from(name), value.clone()))
            .collect()
    }

    /// Returns the named method, unbound.
    pub fn method(&self, name: &str) -> Option<Callable> {
        self.0.borrow().methods.get(name).cloned()
    }

    /// Returns the method names in declaration order.
    pub fn method_names(&self) -> Vec<String> {
        self.0.borrow().methods.keys().cloned().collect()
    }

    /// Invokes the named method with this object bound as its receiver.
    ///
    /// # Errors
    ///
    /// Returns [`OverscoreError::MissingMethod`] when no such method exists,
    /// and propagates whatever the method itself returns.
    pub fn invoke(&self, method: &str, arguments: &[Value]) -> Result<Value> {
        let callable = self
            .method(method)
            .ok_or_else(|| OverscoreError::MissingMethod {
                class: self.class(),
                method: method.to_owned(),
            })?;
        callable.bind_to(self).invoke(arguments)
    }

    /// Returns `true` when both handles point at the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The address of the shared record, used to detect reference cycles.
    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>().addr()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => formatter
                .debug_struct("Object")
                .field("class", &data.class)
                .field("fields", &data.fields.keys().collect::<Vec<_>>())
                .field("methods", &data.methods.keys().collect::<Vec<_>>())
                .finish(),
            Err(_) => formatter.write_str("Object(<borrowed>)"),
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.0.borrow();
        let mut map = serializer.serialize_map(Some(data.fields.len()))?;
        for (name, value) in &data.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
