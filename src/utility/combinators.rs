//! `identity` and `times`.

use crate::error::Result;
use crate::invocation::Callable;
use crate::value::Value;

/// Returns the value unchanged.
///
/// This is the default iterator of [`all`](crate::traversal::all),
/// [`any`](crate::traversal::any), [`max`](crate::traversal::max) and
/// [`min`](crate::traversal::min), and the unit of composition.
///
/// # Examples
///
/// ```
/// use overscore::utility::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("moe"), "moe");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns [`identity`] as a callable of its first argument.
pub fn identity_callable() -> Callable {
    Callable::unary(Value::clone).named("identity")
}

/// Invokes `callable` `count` times and returns the results in order.
///
/// Each invocation receives the zero-based iteration index as its argument.
///
/// # Errors
///
/// Propagates the first failure; later iterations do not run.
///
/// # Examples
///
/// ```
/// use overscore::invocation::Callable;
/// use overscore::utility::times;
/// use overscore::value::Value;
/// use overscore::values;
///
/// let square = Callable::unary(|index| Value::from(index.as_int().unwrap_or(0).pow(2)));
/// assert_eq!(times(4, &square).unwrap(), values![0, 1, 4, 9]);
/// ```
pub fn times(count: usize, callable: &Callable) -> Result<Vec<Value>> {
    (0..count)
        .map(|index| callable.invoke(&[Value::from(index)]))
        .collect()
}
