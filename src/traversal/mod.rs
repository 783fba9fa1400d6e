//! The polymorphic traversal engine.
//!
//! Every operation accepts a [`Collection`], either an ordered sequence or
//! an insertion-ordered mapping, and treats both uniformly: the iterator
//! callable receives `(value, key)`, where the key is the integer position
//! of a sequence element or the declared key of a mapping entry.
//! [`reduce`] and [`reduce_right`] pass `(memo, value, key)`.
//!
//! An optional context is bound into the iterator once per operation with
//! [`bind`](crate::invocation::bind); an object context becomes the
//! iterator's receiver.
//!
//! # Overview
//!
//! | Operation | Result |
//! |---|---|
//! | [`each`] | side effects only |
//! | [`map`] | a collection of the same shape |
//! | [`reduce`], [`reduce_right`] | the final memo |
//! | [`find`] | the first match, short-circuiting |
//! | [`filter`], [`reject`] | the kept values, in order |
//! | [`all`], [`any`] | short-circuiting truth tests |
//! | [`contains`], [`index_of`], [`last_index_of`] | membership under an [`Equality`](crate::value::Equality) |
//! | [`invoke`], [`pluck`] | method calls and field reads on items |
//! | [`max`], [`min`] | the running extremum |
//! | [`sort_by`], [`sorted_index`] | stable sorting and binary search |
//! | [`group_by`], [`count_by`] | grouping by a derived key |
//!
//! The engine owns no state. Iterator failures abort the traversal and are
//! returned unchanged.
//!
//! # Examples
//!
//! ```rust
//! use overscore::invocation::Callable;
//! use overscore::traversal::{each, filter, Collection};
//! use overscore::value::{Object, Value};
//! use overscore::values;
//!
//! let numbers = Collection::from(values![1, 2, 3, 4, 5, 6]);
//! let even = Callable::predicate(|value| value.as_int().is_some_and(|number| number % 2 == 0));
//! assert_eq!(filter(&numbers, &even, None).unwrap(), values![2, 4, 6]);
//!
//! // The context is the iterator's receiver.
//! let totals = Object::record([("sum", 0)]);
//! let accumulate = Callable::method(|this, arguments| {
//!     let value = arguments.first().and_then(Value::as_int).unwrap_or(0);
//!     let sum = this.get("sum").and_then(|sum| sum.as_int()).unwrap_or(0);
//!     this.set("sum", sum + value);
//!     Ok(Value::Null)
//! });
//! each(&numbers, &accumulate, Some(&Value::from(totals.clone()))).unwrap();
//! assert_eq!(totals.get("sum"), Some(Value::from(21)));
//! ```

mod collection;
mod grouping;
mod operations;
mod sorting;

pub use collection::{Collection, Entries};
pub use grouping::{count_by, group_by};
pub use operations::{
    all, any, contains, contains_with, each, filter, find, index_of, index_of_with, invoke,
    last_index_of, last_index_of_with, map, max, min, pluck, reduce, reduce_right, reject,
};
pub use sorting::{sort_by, sorted_index};
