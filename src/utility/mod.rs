//! Small standalone utilities.
//!
//! - [`identity`], [`identity_callable`] and [`times`]
//! - [`IdGenerator`]: per-prefix unique ids
//! - [`escape`]: HTML escaping
//! - [`beacon`]: a trace point reporting its caller

mod combinators;
mod ids;
mod text;
mod trace;

pub use combinators::{identity, identity_callable, times};
pub use ids::IdGenerator;
pub use text::escape;
pub use trace::beacon;
