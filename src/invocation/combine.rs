//! Stateless combinators: `wrap` and `compose`.

use super::Callable;
use crate::value::Value;

/// Returns a callable that hands `callable` to `wrapper`.
///
/// Invoking the result invokes `wrapper` with `callable` as its first
/// argument, followed by whatever arguments the result was invoked with.
/// `wrapper` decides whether and when to invoke `callable`.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::{expect_callable, wrap, Callable};
/// use overscore::value::Value;
///
/// let greet = Callable::nullary(|| Value::from("hi moe"));
/// let shout = wrap(
///     greet,
///     Callable::new(|invocation| {
///         let inner = expect_callable(&invocation.argument(0), "shout")?;
///         Ok(Value::from(format!("before, {}, after", inner.invoke(&[])?)))
///     }),
/// );
///
/// assert_eq!(shout.invoke(&[]).unwrap(), Value::from("before, hi moe, after"));
/// ```
pub fn wrap(callable: Callable, wrapper: Callable) -> Callable {
    let name = format!("wrap({})", callable.label());
    Callable::new(move |invocation| {
        let mut arguments = Vec::with_capacity(invocation.arguments().len() + 1);
        arguments.push(Value::Function(callable.clone()));
        arguments.extend_from_slice(invocation.arguments());
        wrapper.invoke(&arguments)
    })
    .named(name)
}

/// Returns a callable that threads one value through `callables`, left to right.
///
/// The first callable receives the composition's first argument (`Null` when
/// none is passed); every later callable receives its predecessor's result as
/// its sole argument. An empty list composes to the identity callable.
///
/// # Laws
///
/// - **Identity**: `compose([])` returns its argument unchanged.
/// - **Associativity**: `compose([f, compose([g, h])])` behaves as
///   `compose([compose([f, g]), h])`.
///
/// # Examples
///
/// ```rust
/// use overscore::invocation::{compose, Callable};
/// use overscore::value::Value;
///
/// let greet = Callable::unary(|name| Value::from(format!("hi: {name}")));
/// let exclaim = Callable::unary(|text| Value::from(format!("{text}!")));
///
/// let welcome = compose([greet, exclaim]);
/// assert_eq!(welcome.invoke(&[Value::from("moe")]).unwrap(), Value::from("hi: moe!"));
/// ```
pub fn compose(callables: impl IntoIterator<Item = Callable>) -> Callable {
    let callables: Vec<Callable> = callables.into_iter().collect();
    if callables.is_empty() {
        return Callable::new(|invocation| Ok(invocation.argument(0))).named("identity");
    }
    let name = format!(
        "compose({})",
        callables
            .iter()
            .map(Callable::label)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Callable::new(move |invocation| {
        callables
            .iter()
            .try_fold(invocation.argument(0), |value, callable| {
                callable.invoke(std::slice::from_ref(&value))
            })
    })
    .named(name)
}
