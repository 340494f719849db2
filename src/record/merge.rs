//! Deep merging of records.
//!
//! A record is a key-to-value container: a map, a struct deriving
//! [`DeepMerge`](crate::DeepMerge), or a JSON object. Merging `delta` into
//! `main` works key by key:
//!
//! - a key present on both sides recurses into [`DeepMerge::deep_merge`];
//! - a key present on one side only is carried through unchanged.
//!
//! Everything that is not a record is a leaf, and for leaves the delta wins.
//! Sequences (`Vec`, arrays) are leaves; they are replaced, never merged
//! element-wise. `Option::None` plays the role of an undefined value: a
//! `None` delta keeps the main value.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Types that can be deep-merged.
///
/// # Laws
///
/// - **Right Identity** (records): merging an empty record returns `main`.
/// - **Right Bias** (leaves): `main.deep_merge(delta) == delta`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use funclib::record::DeepMerge;
///
/// let main = BTreeMap::from([("a", Some(1)), ("b", Some(2))]);
/// let delta = BTreeMap::from([("b", Some(20)), ("a", None), ("c", Some(30))]);
///
/// let merged = main.deep_merge(delta);
/// assert_eq!(merged, BTreeMap::from([("a", Some(1)), ("b", Some(20)), ("c", Some(30))]));
/// ```
pub trait DeepMerge: Sized {
    /// Merges `delta` into `self`, preferring `delta` at the leaves.
    #[must_use]
    fn deep_merge(self, delta: Self) -> Self;
}

/// Merges `delta` into `main`. See [`DeepMerge`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use funclib::record::merge;
///
/// let main = HashMap::from([("retries", 3), ("timeout", 30)]);
/// let delta = HashMap::from([("timeout", 60)]);
///
/// let merged = merge(main, delta);
/// assert_eq!(merged["retries"], 3);
/// assert_eq!(merged["timeout"], 60);
/// ```
#[doc(alias = "mergeobj")]
#[must_use]
pub fn merge<T: DeepMerge>(main: T, delta: T) -> T {
    main.deep_merge(delta)
}

macro_rules! impl_leaf_merge {
    ($($leaf:ty),* $(,)?) => {
        $(
            impl DeepMerge for $leaf {
                #[inline]
                fn deep_merge(self, delta: Self) -> Self {
                    delta
                }
            }
        )*
    };
}

impl_leaf_merge!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl DeepMerge for &str {
    #[inline]
    fn deep_merge(self, delta: Self) -> Self {
        delta
    }
}

impl<T> DeepMerge for Vec<T> {
    #[inline]
    fn deep_merge(self, delta: Self) -> Self {
        delta
    }
}

impl<T, const N: usize> DeepMerge for [T; N] {
    #[inline]
    fn deep_merge(self, delta: Self) -> Self {
        delta
    }
}

impl<T: DeepMerge> DeepMerge for Option<T> {
    fn deep_merge(self, delta: Self) -> Self {
        match (self, delta) {
            (Some(main), Some(delta)) => Some(main.deep_merge(delta)),
            (main, None) => main,
            (None, delta) => delta,
        }
    }
}

impl<T: DeepMerge> DeepMerge for Box<T> {
    fn deep_merge(self, delta: Self) -> Self {
        Self::new((*self).deep_merge(*delta))
    }
}

impl<K, V, S> DeepMerge for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: DeepMerge,
    S: BuildHasher,
{
    fn deep_merge(mut self, delta: Self) -> Self {
        for (key, delta_value) in delta {
            let merged = match self.remove(&key) {
                Some(main_value) => main_value.deep_merge(delta_value),
                None => delta_value,
            };
            self.insert(key, merged);
        }
        self
    }
}

impl<K, V> DeepMerge for BTreeMap<K, V>
where
    K: Ord,
    V: DeepMerge,
{
    fn deep_merge(mut self, delta: Self) -> Self {
        for (key, delta_value) in delta {
            let merged = match self.remove(&key) {
                Some(main_value) => main_value.deep_merge(delta_value),
                None => delta_value,
            };
            self.insert(key, merged);
        }
        self
    }
}
