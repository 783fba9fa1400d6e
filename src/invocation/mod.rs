//! The invocation layer: callables, context binding and stateful combinators.
//!
//! A [`Callable`] is a shared body plus an optional bound receiver. Passing
//! a context to [`bind`] or [`apply`] rebinds the receiver for that call
//! when the context is an [`Object`](crate::value::Object); any other
//! context leaves the callable as it is.
//!
//! # Overview
//!
//! - [`bind`], [`apply`] and the [`call!`](crate::call) macro: the three
//!   invocation forms
//! - [`memoize`] / [`Memoized`]: results cached by argument list
//! - [`once`] / [`Once`]: the first invocation only
//! - [`after`] / [`After`]: the `count`-th invocation only
//! - [`wrap`]: hands a callable to a wrapper
//! - [`compose`] and the [`compose!`](crate::compose) macro: left-to-right
//!   threading
//!
//! Each stateful combinator owns its state; two `memoize` calls on the same
//! callable never share a cache. All of it is single-threaded: callables
//! are `!Send` and `!Sync`.
//!
//! # Examples
//!
//! ```rust
//! use overscore::invocation::{apply, bind, Callable};
//! use overscore::value::{Object, Value};
//!
//! let counter = Object::record([("count", 0)]);
//! let increment = Callable::method(|this, arguments| {
//!     let step = arguments.first().and_then(Value::as_int).unwrap_or(1);
//!     let next = this.get("count").and_then(|count| count.as_int()).unwrap_or(0) + step;
//!     this.set("count", next);
//!     Ok(Value::from(next))
//! });
//!
//! let context = Value::from(counter.clone());
//! let bound = bind(&increment, Some(&context));
//! bound.invoke(&[]).unwrap();
//! apply(&increment, Some(&context), &[Value::from(5)]).unwrap();
//!
//! assert_eq!(counter.get("count"), Some(Value::from(6)));
//! ```

mod callable;
mod combine;
mod counted;
mod macros;
mod memoize;

pub use callable::{Callable, Invocation};
pub use combine::{compose, wrap};
pub use counted::{after, once, After, Once};
pub use memoize::{memoize, Memoized};

use crate::error::Result;
use crate::value::Value;

/// Returns `callable` bound to `context`.
///
/// An object context is bound permanently into the returned handle; any
/// other context (or none) returns an unchanged handle. The original
/// callable is never modified.
pub fn bind(callable: &Callable, context: Option<&Value>) -> Callable {
    callable.with_context(context)
}

/// Binds `callable` to `context` and invokes it with `arguments`.
///
/// # Errors
///
/// Whatever the callable fails with is propagated unchanged.
pub fn apply(callable: &Callable, context: Option<&Value>, arguments: &[Value]) -> Result<Value> {
    bind(callable, context).invoke(arguments)
}

/// Resolves a `Value` that must hold a callable.
///
/// # Errors
///
/// Returns [`OverscoreError::InvalidArgument`](crate::error::OverscoreError::InvalidArgument)
/// naming `operation` when `value` is not a function.
pub fn expect_callable(value: &Value, operation: &'static str) -> Result<Callable> {
    value.as_callable().cloned().ok_or_else(|| {
        crate::error::OverscoreError::invalid_argument(
            operation,
            format!("expected a function, found {}", value.type_name()),
        )
    })
}
