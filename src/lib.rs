//! # overscore
//!
//! A functional utility belt for Rust: combinators over first-class
//! callables, layered under a traversal engine that works uniformly over
//! ordered sequences and key-value mappings.
//!
//! ## Overview
//!
//! - **Values**: [`Value`](value::Value), a dynamic datum with loose and
//!   strict equality, and [`Object`](value::Object), a shared record that
//!   can act as a call context
//! - **Invocation**: `bind`, `apply`, `call!`, `memoize`, `once`, `after`,
//!   `wrap`, `compose`
//! - **Traversal**: `each`, `map`, `reduce`, `find`, `filter`, `all`, `any`,
//!   `max`, `index_of`, `sort_by`, `group_by` and the rest, over a
//!   [`Collection`](traversal::Collection)
//! - **Arrays**: slicing and set algebra over lists
//! - **Objects**: key/value introspection and merging
//! - **Utility**: ids, HTML escaping, trace points
//!
//! Everything is single-threaded: values, objects and callables are built
//! on `Rc` and are neither `Send` nor `Sync`.
//!
//! ## Feature Flags
//!
//! - `traversal`: the traversal engine
//! - `arrays`: list helpers
//! - `objects`: map and object helpers (requires `traversal`)
//! - `utility`: ids, escaping, trace points
//! - `full`: enable all features (the default)
//!
//! The `value`, `invocation` and `error` modules are always available.
//!
//! ## Example
//!
//! ```rust
//! use overscore::prelude::*;
//! use overscore::values;
//!
//! let numbers = Collection::from(values![1, 2, 3, 4]);
//! let square = memoize(Callable::unary(|value| {
//!     Value::from(value.as_int().unwrap_or(0).pow(2))
//! }));
//!
//! let squares = map(&numbers, &square, None).unwrap();
//! assert_eq!(squares, Collection::from(values![1, 4, 9, 16]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model, the invocation layer and every enabled area.
///
/// # Usage
///
/// ```rust
/// use overscore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OverscoreError;
    pub use crate::invocation::*;
    pub use crate::value::{Equality, Key, Mapping, Object, Value};

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;

    #[cfg(feature = "arrays")]
    pub use crate::arrays::*;

    #[cfg(feature = "objects")]
    pub use crate::objects::*;

    #[cfg(feature = "utility")]
    pub use crate::utility::*;
}

pub mod error;
pub mod invocation;
pub mod value;

#[cfg(feature = "traversal")]
pub mod traversal;

#[cfg(feature = "arrays")]
pub mod arrays;

#[cfg(feature = "objects")]
pub mod objects;

#[cfg(feature = "utility")]
pub mod utility;
