//! List helpers built on the value model.
//!
//! - Slicing: [`first`], [`first_n`], [`last`], [`last_n`], [`initial`], [`rest`]
//! - Splicing and cleaning: [`concat`], [`flatten`], [`compact`]
//! - Set algebra: [`without`], [`with`], [`union`], [`intersection`], [`uniq`], [`zip`]
//!
//! Every helper takes its lists by reference and returns a new list.

mod sets;
mod slicing;

pub use sets::{intersection, union, uniq, with, without, zip};
pub use slicing::{compact, concat, first, first_n, flatten, initial, last, last_n, rest};
