//! Memoization keyed by the serialized argument list.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::trace;

use super::Callable;
use crate::error::Result;
use crate::value::{tagged_json, Value};

/// Derives the memo key for an argument list.
///
/// The key is order-sensitive and value-based: structurally equal argument
/// lists produce the same key whatever the identity of their arguments.
pub(crate) fn memo_key(arguments: &[Value]) -> Result<String> {
    Ok(tagged_json(arguments)?)
}

struct MemoState {
    target: Callable,
    cache: RefCell<FxHashMap<String, Value>>,
}

/// A memoizing wrapper and the cache it owns.
///
/// Every `Memoized` owns exactly one cache; handles obtained from
/// [`to_callable`](Self::to_callable) and clones of this value share it.
/// The cache grows for as long as any handle is alive and never evicts.
///
/// Memoized callables are context-free: the wrapped callable is invoked
/// with its own binding, never with a receiver bound to the wrapper.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use overscore::invocation::{Callable, Memoized};
/// use overscore::value::Value;
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let square = Callable::unary(move |value| {
///     counter.set(counter.get() + 1);
///     Value::from(value.as_int().unwrap_or(0).pow(2))
/// });
///
/// let memoized = Memoized::new(square);
/// let callable = memoized.to_callable();
///
/// assert_eq!(callable.invoke(&[Value::from(4)]).unwrap(), Value::from(16));
/// assert_eq!(callable.invoke(&[Value::from(4)]).unwrap(), Value::from(16));
/// assert_eq!(calls.get(), 1);
/// assert_eq!(memoized.cache_len(), 1);
/// ```
#[derive(Clone)]
pub struct Memoized {
    state: Rc<MemoState>,
}

impl Memoized {
    /// Wraps `target` with a fresh, empty cache.
    pub fn new(target: Callable) -> Self {
        Self {
            state: Rc::new(MemoState {
                target,
                cache: RefCell::new(FxHashMap::default()),
            }),
        }
    }

    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`OverscoreError::MemoKey`](crate::error::OverscoreError::MemoKey)
    /// when the key cannot be derived, and propagates failures of the
    /// wrapped callable. Failures are not cached.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        let key = memo_key(arguments)?;
        let cached = self.state.cache.borrow().get(&key).cloned();
        if let Some(result) = cached {
            trace!(callable = self.state.target.label(), key = %key, "memo hit");
            return Ok(result);
        }
        trace!(callable = self.state.target.label(), key = %key, "memo miss");
        let result = self.state.target.invoke(arguments)?;
        self.state.cache.borrow_mut().insert(key, result.clone());
        Ok(result)
    }

    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.state.cache.borrow().len()
    }

    /// Returns a callable handle sharing this cache.
    pub fn to_callable(&self) -> Callable {
        let memoized = self.clone();
        let name = format!("memoize({})", self.state.target.label());
        Callable::new(move |invocation| memoized.call(invocation.arguments())).named(name)
    }
}

/// Returns a memoizing wrapper around `callable` with its own cache.
///
/// Shorthand for `Memoized::new(callable).to_callable()`.
pub fn memoize(callable: Callable) -> Callable {
    Memoized::new(callable).to_callable()
}
