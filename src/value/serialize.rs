//! Serialization of values.
//!
//! [`Value`] serializes to its natural JSON-like shape. Memo keys use a
//! tagged form instead: every datum is wrapped in a variant tag, so values
//! that would share a natural form (`1` and `1.0`, `NaN` and `null`, a map
//! and an object with the same fields) never share a key.

use std::cell::RefCell;

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use super::{Object, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::Str(text) => serializer.serialize_str(text),
            Self::List(items) => serializer.collect_seq(items),
            Self::Map(entries) => serializer.collect_map(entries),
            Self::Object(object) => object.serialize(serializer),
            Self::Function(callable) => serializer.serialize_str(callable.label()),
        }
    }
}

/// Serializes `values` in their variant-tagged form, used as memo keys.
///
/// An object met again while its own fields are being serialized is
/// written as a back-reference to that enclosing object (`{"Ref": depth}`,
/// `0` being the innermost), so self-referencing objects still produce a
/// finite key.
pub(crate) fn tagged_json(values: &[Value]) -> serde_json::Result<String> {
    let ancestors = RefCell::new(Vec::new());
    let tagged: Vec<Tagged<'_>> = values
        .iter()
        .map(|value| Tagged {
            value,
            ancestors: &ancestors,
        })
        .collect();
    serde_json::to_string(&tagged)
}

/// Addresses of the objects currently being serialized, outermost first.
type Ancestors = RefCell<Vec<usize>>;

struct Tagged<'a> {
    value: &'a Value,
    ancestors: &'a Ancestors,
}

struct TaggedObject<'a> {
    object: &'a Object,
    ancestors: &'a Ancestors,
}

impl<'a> Tagged<'a> {
    const fn nested(&self, value: &'a Value) -> Self {
        Self {
            value,
            ancestors: self.ancestors,
        }
    }
}

impl Serialize for Tagged<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Null => serializer.serialize_unit_variant("Value", 0, "Null"),
            Value::Bool(flag) => serializer.serialize_newtype_variant("Value", 1, "Bool", flag),
            Value::Int(number) => serializer.serialize_newtype_variant("Value", 2, "Int", number),
            Value::Float(number) => serializer.serialize_newtype_variant(
                "Value",
                3,
                "Float",
                &format!("{number:?}"),
            ),
            Value::Str(text) => serializer.serialize_newtype_variant("Value", 4, "Str", &**text),
            Value::List(items) => serializer.serialize_newtype_variant(
                "Value",
                5,
                "List",
                &items.iter().map(|item| self.nested(item)).collect::<Vec<_>>(),
            ),
            Value::Map(entries) => serializer.serialize_newtype_variant(
                "Value",
                6,
                "Map",
                &entries
                    .iter()
                    .map(|(key, value)| (key, self.nested(value)))
                    .collect::<Vec<_>>(),
            ),
            Value::Object(object) => {
                let address = object.address();
                let depth = self
                    .ancestors
                    .borrow()
                    .iter()
                    .rev()
                    .position(|ancestor| *ancestor == address);
                match depth {
                    Some(depth) => serializer.serialize_newtype_variant("Value", 9, "Ref", &depth),
                    None => serializer.serialize_newtype_variant(
                        "Value",
                        7,
                        "Object",
                        &TaggedObject {
                            object,
                            ancestors: self.ancestors,
                        },
                    ),
                }
            }
            Value::Function(callable) => serializer.serialize_newtype_variant(
                "Value",
                8,
                "Function",
                &callable.identity(),
            ),
        }
    }
}

impl TaggedObject<'_> {
    fn serialize_record<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.object.fields();
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.object.class())?;
        tuple.serialize_element(
            &fields
                .iter()
                .map(|(key, value)| {
                    let tagged = Tagged {
                        value,
                        ancestors: self.ancestors,
                    };
                    (key, tagged)
                })
                .collect::<Vec<_>>(),
        )?;
        tuple.serialize_element(&self.object.method_names())?;
        tuple.end()
    }
}

impl Serialize for TaggedObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ancestors.borrow_mut().push(self.object.address());
        let result = self.serialize_record(serializer);
        self.ancestors.borrow_mut().pop();
        result
    }
}
