//! Map and object introspection helpers.
//!
//! Objects are read through their fields, in insertion order, exactly as the
//! traversal engine sees them.
//!
//! # Examples
//!
//! ```rust
//! use overscore::objects::{has, keys};
//! use overscore::value::{Key, Object, Value};
//!
//! let stooge = Value::from(Object::record([("name", "moe"), ("age", "40")]));
//! assert!(has(&stooge, &Key::from("age")));
//! assert_eq!(keys(&stooge).unwrap().len(), 2);
//! ```

mod introspection;
mod merging;

pub use introspection::{functions, has, is_empty, keys, values};
pub use merging::{defaults, extend, pick, result};
