//! Records: value mapping and deep merging.
//!
//! # Overview
//!
//! - [`MapValues`], [`mkmapobj`], [`map_values`]: convert the values of a
//!   record, keeping its keys
//! - [`DeepMerge`], [`merge`]: structural, right-biased merge of records
//! - `merge_json`, `map_json_values`, `merge_serialized` (feature `json`):
//!   the same operations over `serde_json::Value`, validating that the
//!   top-level inputs are objects
//!
//! # Merge Rules
//!
//! ```text
//! merge({a: 1, b: {c: 2}}, {b: {c: 3, d: 4}, e: 5}) = {a: 1, b: {c: 3, d: 4}, e: 5}
//! merge({a: 1}, {a: undefined})                     = {a: 1}
//! merge(x, {})                                      = x
//! ```
//!
//! # Examples
//!
//! ```
//! use funclib::DeepMerge;
//! use funclib::record::merge;
//!
//! #[derive(Debug, PartialEq, DeepMerge)]
//! struct Limits {
//!     soft: Option<u32>,
//!     hard: Option<u32>,
//! }
//!
//! #[derive(Debug, PartialEq, DeepMerge)]
//! struct Config {
//!     name: String,
//!     limits: Limits,
//! }
//!
//! let main = Config {
//!     name: "worker".into(),
//!     limits: Limits { soft: Some(10), hard: Some(20) },
//! };
//! let delta = Config {
//!     name: "worker-2".into(),
//!     limits: Limits { soft: None, hard: Some(40) },
//! };
//!
//! assert_eq!(
//!     merge(main, delta),
//!     Config {
//!         name: "worker-2".into(),
//!         limits: Limits { soft: Some(10), hard: Some(40) },
//!     }
//! );
//! ```

mod error;
#[cfg(feature = "json")]
mod json;
mod map_values;
mod merge;

pub use error::{ConversionKind, RecordError};
#[cfg(feature = "json")]
pub use json::{kind_of, map_json_values, merge_json, merge_serialized};
pub use map_values::{MapValues, ValueMapper, map_values, mkmapobj};
pub use merge::{DeepMerge, merge};

#[cfg(feature = "derive")]
pub use funclib_derive::DeepMerge;
