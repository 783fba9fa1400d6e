//! First-class callables with an explicit receiver.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::{OverscoreError, Result};
use crate::value::{Object, Value};

type Body = dyn Fn(&Invocation<'_>) -> Result<Value>;

/// The view a callable's body gets of one invocation: its receiver (the
/// bound context, if any) and its positional arguments.
///
/// Missing positional arguments read as `Null` through
/// [`argument`](Self::argument), so callables stay arity-agnostic.
pub struct Invocation<'a> {
    receiver: Option<&'a Object>,
    arguments: &'a [Value],
    name: Option<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Returns the bound receiver.
    ///
    /// # Errors
    ///
    /// Returns [`OverscoreError::Unbound`] when the callable was invoked
    /// without a structured context.
    pub fn this(&self) -> Result<&'a Object> {
        self.receiver.ok_or_else(|| OverscoreError::Unbound {
            callable: self.name.unwrap_or(ANONYMOUS).to_owned(),
        })
    }

    /// Returns the bound receiver, if any.
    pub const fn receiver(&self) -> Option<&'a Object> {
        self.receiver
    }

    /// Returns every positional argument.
    pub const fn arguments(&self) -> &'a [Value] {
        self.arguments
    }

    /// Returns the positional argument at `index`, if it was passed.
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        self.arguments.get(index)
    }

    /// Returns a copy of the positional argument at `index`, or `Null`.
    pub fn argument(&self, index: usize) -> Value {
        self.get(index).cloned().unwrap_or_default()
    }
}

const ANONYMOUS: &str = "anonymous";

thread_local! {
    static NEXT_IDENTITY: Cell<u64> = const { Cell::new(0) };
}

fn next_identity() -> u64 {
    NEXT_IDENTITY.with(|next| {
        let identity = next.get();
        next.set(identity.wrapping_add(1));
        identity
    })
}

/// A shared, cheaply clonable callable.
///
/// A `Callable` pairs a body, `Fn(&Invocation) -> Result<Value>`, with an
/// optional bound receiver. Binding ([`bind`](super::bind),
/// [`with_context`](Self::with_context)) never touches the original: it
/// returns a new handle that shares the body and carries the receiver.
///
/// `Callable` is built on `Rc` and is neither `Send` nor `Sync`; a wrapped
/// callable and its state stay on the thread that created them.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::Callable;
/// use overscore::value::{Object, Value};
///
/// let greet = Callable::new(|invocation| {
///     let world = invocation.this()?.get("world").unwrap_or_default();
///     Ok(Value::from(format!("{} {world}", invocation.argument(0))))
/// });
///
/// let context = Value::from(Object::record([("world", "world")]));
/// let bound = greet.with_context(Some(&context));
///
/// assert_eq!(bound.invoke(&[Value::from("hello")]).unwrap(), Value::from("hello world"));
/// assert!(greet.invoke(&[Value::from("hello")]).is_err());
/// ```
#[derive(Clone)]
pub struct Callable {
    body: Rc<Body>,
    identity: u64,
    receiver: Option<Object>,
    name: Option<Rc<str>>,
}

impl Callable {
    /// Creates a callable from a body that sees the whole invocation.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Result<Value> + 'static,
    {
        Self {
            body: Rc::new(body),
            identity: next_identity(),
            receiver: None,
            name: None,
        }
    }

    /// Creates an infallible callable that ignores its arguments.
    pub fn nullary<F>(body: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Self::new(move |_| Ok(body()))
    }

    /// Creates an infallible callable of its first argument.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(&Value) -> Value + 'static,
    {
        Self::new(move |invocation| Ok(body(&invocation.argument(0))))
    }

    /// Creates an infallible callable of its first two arguments.
    pub fn binary<F>(body: F) -> Self
    where
        F: Fn(&Value, &Value) -> Value + 'static,
    {
        Self::new(move |invocation| {
            Ok(body(&invocation.argument(0), &invocation.argument(1)))
        })
    }

    /// Creates a predicate over its first argument.
    pub fn predicate<F>(body: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Self::new(move |invocation| Ok(Value::Bool(body(&invocation.argument(0)))))
    }

    /// Creates a callable that requires a receiver, such as an object method.
    pub fn method<F>(body: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> Result<Value> + 'static,
    {
        Self::new(move |invocation| body(invocation.this()?, invocation.arguments()))
    }

    /// Attaches a diagnostic name, shown in `Debug`, errors and log events.
    #[must_use]
    pub fn named(mut self, name: impl Into<Rc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the diagnostic name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the diagnostic name, or `"anonymous"`.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(ANONYMOUS)
    }

    /// Returns the bound receiver, if any.
    pub const fn receiver(&self) -> Option<&Object> {
        self.receiver.as_ref()
    }

    /// Returns `true` when a receiver is bound.
    pub const fn is_bound(&self) -> bool {
        self.receiver.is_some()
    }

    /// Returns a handle bound to `context` when it is structured, or an
    /// unchanged handle otherwise.
    #[must_use]
    pub fn with_context(&self, context: Option<&Value>) -> Self {
        match context {
            Some(Value::Object(object)) => self.bind_to(object),
            _ => self.clone(),
        }
    }

    /// Returns a handle bound to `object`.
    #[must_use]
    pub fn bind_to(&self, object: &Object) -> Self {
        Self {
            receiver: Some(object.clone()),
            ..self.clone()
        }
    }

    /// Invokes the callable with its own receiver and the given arguments.
    ///
    /// # Errors
    ///
    /// Whatever the body returns is propagated unchanged.
    pub fn invoke(&self, arguments: &[Value]) -> Result<Value> {
        trace!(
            callable = self.label(),
            arguments = arguments.len(),
            bound = self.is_bound(),
            "invoke"
        );
        (self.body)(&Invocation {
            receiver: self.receiver.as_ref(),
            arguments,
            name: self.name.as_deref(),
        })
    }

    /// Returns `true` when both handles share the same body.
    ///
    /// Binding does not change identity: a bound handle is `ptr_eq` to the
    /// callable it was bound from.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }

    /// A per-thread serial number of the shared body, used in memo keys.
    ///
    /// Unlike the body's address it is never reused after the body is dropped.
    pub(crate) const fn identity(&self) -> u64 {
        self.identity
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callable")
            .field("name", &self.label())
            .field("bound", &self.is_bound())
            .finish()
    }
}
