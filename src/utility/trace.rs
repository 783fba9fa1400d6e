//! Trace points.

use std::panic::Location;

use tracing::debug;

/// Emits a `debug` event carrying `label` and the caller's location, and
/// returns that location.
///
/// # Examples
///
/// ```rust
/// use overscore::utility::beacon;
///
/// let location = beacon("checkpoint");
/// assert_eq!(location.line(), line!() - 1);
/// ```
#[track_caller]
pub fn beacon(label: &str) -> &'static Location<'static> {
    let location = Location::caller();
    debug!(
        label,
        file = location.file(),
        line = location.line(),
        "^{label}^"
    );
    location
}
