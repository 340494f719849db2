//! Placeholder-based partial application.
//!
//! # Overview
//!
//! - [`partial!`]: statically typed partial application; the compiler checks
//!   the arity and argument types of the produced closure
//! - [`partial()`] / [`Partial`]: the same substitution at run time, over a
//!   homogeneous value type, with arity validation on every call
//! - [`_1`] .. [`_8`]: the placeholder tokens
//!
//! # Substitution
//!
//! A binding list mixes fixed values and placeholder slots. Calling the
//! produced function walks the list left to right with a cursor over the
//! unbound arguments; every slot takes the next unbound argument:
//!
//! ```text
//! partial(f, _1, 10, _2)(x, y) = f(x, 10, y)
//! partial(f, _1, _1)(x, y)     = f(x, y)
//! ```
//!
//! The number of unbound arguments therefore always equals the number of
//! slot positions in the binding list.
//!
//! # Examples
//!
//! ```
//! use funclib::partial;
//!
//! fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
//!
//! let unit_depth = partial!(volume, _1, _2, 1);
//! assert_eq!(unit_depth(3, 4), 12);
//! ```

mod engine;
mod error;
mod partial_macro;
mod placeholder;

pub use engine::{Binding, Partial, partial};
pub use error::PartialError;
pub use placeholder::{_1, _2, _3, _4, _5, _6, _7, _8, PLACEHOLDER_COUNT, Placeholder};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::partial;
