//! Derive macros for funclib records.
//!
//! # Available Derive Macros
//!
//! - [`DeepMerge`]: Implements `funclib::record::DeepMerge` for plain records
//!
//! # Example
//!
//! ```rust,ignore
//! use funclib::record::{DeepMerge, merge};
//!
//! #[derive(Debug, PartialEq, DeepMerge)]
//! struct Server {
//!     host: Option<String>,
//!     port: Option<u16>,
//! }
//!
//! let main = Server { host: Some("localhost".into()), port: Some(80) };
//! let delta = Server { host: None, port: Some(8080) };
//!
//! assert_eq!(
//!     merge(main, delta),
//!     Server { host: Some("localhost".into()), port: Some(8080) }
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod deep_merge;

use proc_macro::TokenStream;

/// Derive macro for deep-merging plain records.
///
/// # Generated Code
///
/// For a struct, every field is merged recursively:
///
/// ```rust,ignore
/// impl DeepMerge for StructName {
///     fn deep_merge(self, delta: Self) -> Self {
///         Self {
///             field: DeepMerge::deep_merge(self.field, delta.field),
///             ...
///         }
///     }
/// }
/// ```
///
/// Each merged field type must implement `DeepMerge`; the derive adds the
/// corresponding `where` bounds, so generic records work as well.
///
/// For an enum the delta always wins: enums are leaves, not records.
///
/// # Attributes
///
/// - `#[merge(replace)]` on a field: take the delta's value without merging.
///   The field type does not need to implement `DeepMerge`.
///
/// # Requirements
///
/// - The type must not implement `Drop`, since fields are moved out of both
///   sides
/// - Unions are not supported
///
/// # Example
///
/// ```rust,ignore
/// use std::collections::BTreeMap;
/// use funclib::record::DeepMerge;
///
/// #[derive(DeepMerge)]
/// struct Catalog {
///     #[merge(replace)]
///     revision: Revision,
///     entries: BTreeMap<String, Option<u32>>,
/// }
/// ```
#[proc_macro_derive(DeepMerge, attributes(merge))]
pub fn derive_deep_merge(input: TokenStream) -> TokenStream {
    deep_merge::derive_deep_merge_impl(input)
}
