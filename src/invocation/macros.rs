//! Variadic invocation macros.

/// Invokes a callable with an optional context and inline arguments.
///
/// `call!(callable, context, a, b, ...)` is shorthand for
/// `apply(&callable, context, &[Value::from(a), Value::from(b), ...])`.
/// The context is an `Option<&Value>`; only an object context binds.
///
/// # Examples
///
/// ```rust
/// use overscore::call;
/// use overscore::invocation::Callable;
/// use overscore::value::{Object, Value};
///
/// let greet = Callable::new(|invocation| {
///     let name = invocation.this()?.get("name").unwrap_or_default();
///     Ok(Value::from(format!("{}: {name}", invocation.argument(0))))
/// });
/// let context = Value::from(Object::record([("name", "moe")]));
///
/// assert_eq!(call!(greet, Some(&context), "hi").unwrap(), Value::from("hi: moe"));
/// assert!(call!(greet, None, "hi").is_err());
/// ```
#[macro_export]
macro_rules! call {
    ($callable:expr, $context:expr $(,)?) => {
        $crate::invocation::apply(&$callable, $context, &[])
    };
    ($callable:expr, $context:expr, $($argument:expr),+ $(,)?) => {
        $crate::invocation::apply(
            &$callable,
            $context,
            &[$($crate::value::Value::from($argument)),+],
        )
    };
}

/// Composes callables left to right.
///
/// `compose!(f, g, h)` threads its argument through `f`, then `g`, then `h`;
/// `compose!()` is the identity callable. The callables are moved in.
///
/// # Examples
///
/// ```rust
/// use overscore::compose;
/// use overscore::invocation::Callable;
/// use overscore::value::Value;
///
/// let increment = Callable::unary(|value| Value::from(value.as_int().unwrap_or(0) + 1));
/// let double = Callable::unary(|value| Value::from(value.as_int().unwrap_or(0) * 2));
///
/// let composed = compose!(increment, double);
/// assert_eq!(composed.invoke(&[Value::from(5)]).unwrap(), Value::from(12));
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::invocation::compose(::std::vec::Vec::new())
    };
    ($($callable:expr),+ $(,)?) => {
        $crate::invocation::compose([$($callable),+])
    };
}
