//! # funclib
//!
//! Small functional-programming helpers for Rust.
//!
//! ## Overview
//!
//! - **Partial Application**: `partial!` with the placeholder tokens `_1`..`_8`,
//!   plus a runtime engine ([`partial::Partial`]) over homogeneous values
//! - **Bundling**: bind one context value into a whole table of functions
//! - **Records**: value mapping (`mkmapobj`) and deep merging (`mergeobj`)
//! - **Curry Rotation**: `rot2curry!`, `rot3curry!`, `rot4curry!`
//!
//! ## Feature Flags
//!
//! - `partial`: Placeholder-based partial application
//! - `bundle`: Context bundling
//! - `record`: `DeepMerge`, `MapValues` and friends
//! - `curry`: Argument-group rotators for curried functions
//! - `derive`: `#[derive(DeepMerge)]`
//! - `json`: `serde_json` record variants
//! - `tracing`: Diagnostic events through `tracing`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funclib::partial;
//!
//! fn describe(name: &str, age: u32, city: &str) -> String {
//!     format!("{name} ({age}) from {city}")
//! }
//!
//! let from_paris = partial!(describe, _1, _2, "Paris");
//! assert_eq!(from_paris("Alice", 30), "Alice (30) from Paris");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use funclib::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "partial")]
    pub use crate::partial::*;

    #[cfg(feature = "bundle")]
    pub use crate::bundle::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;
}

#[cfg(feature = "partial")]
pub mod partial;

#[cfg(feature = "bundle")]
pub mod bundle;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "derive")]
pub use funclib_derive::DeepMerge;
