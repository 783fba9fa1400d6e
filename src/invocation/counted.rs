//! Call-counting combinators: `once` and `after`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use super::Callable;
use crate::error::{OverscoreError, Result};
use crate::value::Value;

struct OnceState {
    target: Callable,
    called: Cell<bool>,
    result: RefCell<Value>,
}

/// A wrapper that invokes its callable on the first call only.
///
/// The first call invokes the wrapped callable with no arguments and caches
/// its result; every later call returns that result. The call counts even
/// when the callable fails: the failure is propagated once and later calls
/// return the cached `Null`.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use overscore::invocation::{Callable, Once};
/// use overscore::value::Value;
///
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let initialize = Once::new(Callable::nullary(move || {
///     counter.set(counter.get() + 1);
///     Value::from(counter.get())
/// }));
///
/// assert_eq!(initialize.call().unwrap(), Value::from(1));
/// assert_eq!(initialize.call().unwrap(), Value::from(1));
/// assert_eq!(calls.get(), 1);
/// ```
#[derive(Clone)]
pub struct Once {
    state: Rc<OnceState>,
}

impl Once {
    /// Wraps `target` with a fresh counter.
    pub fn new(target: Callable) -> Self {
        Self {
            state: Rc::new(OnceState {
                target,
                called: Cell::new(false),
                result: RefCell::new(Value::Null),
            }),
        }
    }

    /// Invokes the wrapped callable on the first call, then replays its result.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the single underlying invocation.
    pub fn call(&self) -> Result<Value> {
        if self.state.called.replace(true) {
            return Ok(self.state.result.borrow().clone());
        }
        debug!(callable = self.state.target.label(), "once: first invocation");
        let result = self.state.target.invoke(&[])?;
        self.state.result.replace(result.clone());
        Ok(result)
    }

    /// Returns `true` once the wrapped callable has been invoked.
    pub fn is_called(&self) -> bool {
        self.state.called.get()
    }

    /// Returns a callable handle sharing this counter.
    pub fn to_callable(&self) -> Callable {
        let once = self.clone();
        let name = format!("once({})", self.state.target.label());
        Callable::new(move |_| once.call()).named(name)
    }
}

/// Returns a wrapper that invokes `callable` on its first call only.
pub fn once(callable: Callable) -> Callable {
    Once::new(callable).to_callable()
}

struct AfterState {
    count: usize,
    target: Callable,
    calls: Cell<usize>,
    result: RefCell<Value>,
}

/// A wrapper that invokes its callable on the `count`-th call.
///
/// Calls before the `count`-th return `Null`; the `count`-th call invokes
/// the wrapped callable with no arguments and caches its result; later
/// calls return the cached result without invoking it again.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::{After, Callable};
/// use overscore::value::Value;
///
/// let ready = After::new(2, Callable::nullary(|| Value::from("finally called!"))).unwrap();
///
/// assert_eq!(ready.call().unwrap(), Value::Null);
/// assert_eq!(ready.call().unwrap(), Value::from("finally called!"));
/// assert_eq!(ready.call().unwrap(), Value::from("finally called!"));
/// ```
#[derive(Clone)]
pub struct After {
    state: Rc<AfterState>,
}

impl After {
    /// Wraps `target` so that it fires on the `count`-th call.
    ///
    /// # Errors
    ///
    /// Returns [`OverscoreError::InvalidArgument`] when `count` is zero.
    pub fn new(count: usize, target: Callable) -> Result<Self> {
        if count == 0 {
            return Err(OverscoreError::invalid_argument(
                "after",
                "count must be at least 1",
            ));
        }
        Ok(Self {
            state: Rc::new(AfterState {
                count,
                target,
                calls: Cell::new(0),
                result: RefCell::new(Value::Null),
            }),
        })
    }

    /// Counts one call and invokes the wrapped callable when the count is reached.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the firing invocation.
    pub fn call(&self) -> Result<Value> {
        let calls = self.state.calls.get().saturating_add(1);
        self.state.calls.set(calls);
        if calls < self.state.count {
            return Ok(Value::Null);
        }
        if calls > self.state.count {
            return Ok(self.state.result.borrow().clone());
        }
        debug!(
            callable = self.state.target.label(),
            count = self.state.count,
            calls,
            "after: count reached"
        );
        let result = self.state.target.invoke(&[])?;
        self.state.result.replace(result.clone());
        Ok(result)
    }

    /// Returns the number of calls counted so far.
    pub fn calls(&self) -> usize {
        self.state.calls.get()
    }

    /// Returns a callable handle sharing this counter.
    pub fn to_callable(&self) -> Callable {
        let after = self.clone();
        let name = format!("after({}, {})", self.state.count, self.state.target.label());
        Callable::new(move |_| after.call()).named(name)
    }
}

/// Returns a wrapper that invokes `callable` on its `count`-th call.
///
/// # Errors
///
/// Returns [`OverscoreError::InvalidArgument`] when `count` is zero.
pub fn after(count: usize, callable: Callable) -> Result<Callable> {
    After::new(count, callable).map(|after| after.to_callable())
}
