//! Mapping the values of a record while keeping its keys.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

/// Containers whose values can be mapped into a container of the same shape.
///
/// The input is borrowed and never mutated; the output has exactly the same
/// keys.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use funclib::record::MapValues;
///
/// let ages = BTreeMap::from([("alice", 30_u32), ("bob", 25)]);
/// let labels = ages.map_values(|age| format!("{age} years"));
///
/// assert_eq!(labels["alice"], "30 years");
/// assert_eq!(ages["alice"], 30);
/// ```
pub trait MapValues<V> {
    /// The same container holding `W` values.
    type Output<W>;

    /// Applies `conversion` to every value.
    fn map_values<W, F>(&self, conversion: F) -> Self::Output<W>
    where
        F: FnMut(&V) -> W;
}

impl<K, V, S> MapValues<V> for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher + Clone,
{
    type Output<W> = HashMap<K, W, S>;

    fn map_values<W, F>(&self, mut conversion: F) -> Self::Output<W>
    where
        F: FnMut(&V) -> W,
    {
        let mut mapped = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            mapped.insert(key.clone(), conversion(value));
        }
        mapped
    }
}

impl<K, V> MapValues<V> for BTreeMap<K, V>
where
    K: Clone + Ord,
{
    type Output<W> = BTreeMap<K, W>;

    fn map_values<W, F>(&self, mut conversion: F) -> Self::Output<W>
    where
        F: FnMut(&V) -> W,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), conversion(value)))
            .collect()
    }
}

/// A converter from records of `V` values to records of `W` values.
///
/// Created by [`mkmapobj`]. Fixing both value types up front lets one
/// converter serve every record shape implementing [`MapValues`], with the
/// compiler checking each conversion function against `V -> W`.
pub struct ValueMapper<V, W> {
    marker: PhantomData<fn(&V) -> W>,
}

/// Creates a [`ValueMapper`] converting `V` values to `W` values.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, HashMap};
/// use funclib::record::mkmapobj;
///
/// let to_text = mkmapobj::<i32, String>();
///
/// let scores = BTreeMap::from([("math", 90), ("art", 75)]);
/// let rendered = to_text.convert(&scores, |score| score.to_string());
/// assert_eq!(rendered["math"], "90");
///
/// let offsets = HashMap::from([("x", -1)]);
/// let rendered = to_text.convert(&offsets, |offset| format!("{offset:+}"));
/// assert_eq!(rendered["x"], "-1");
/// ```
#[must_use]
pub const fn mkmapobj<V, W>() -> ValueMapper<V, W> {
    ValueMapper {
        marker: PhantomData,
    }
}

impl<V, W> ValueMapper<V, W> {
    /// Creates a new converter. Same as [`mkmapobj`].
    #[must_use]
    pub const fn new() -> Self {
        mkmapobj()
    }

    /// Maps every value of `record` through `conversion`.
    pub fn convert<M, F>(&self, record: &M, conversion: F) -> M::Output<W>
    where
        M: MapValues<V>,
        F: FnMut(&V) -> W,
    {
        record.map_values(conversion)
    }
}

impl<V, W> Clone for ValueMapper<V, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, W> Copy for ValueMapper<V, W> {}

impl<V, W> Default for ValueMapper<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> fmt::Debug for ValueMapper<V, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ValueMapper")
            .field("from", &std::any::type_name::<V>())
            .field("to", &std::any::type_name::<W>())
            .finish()
    }
}

/// Maps every value of `record` through `conversion`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use funclib::record::map_values;
///
/// let prices = HashMap::from([("tea", 3.5_f64), ("cake", 4.25)]);
/// let cents = map_values(&prices, |price| (price * 100.0).round() as u64);
/// assert_eq!(cents["cake"], 425);
/// ```
pub fn map_values<M, V, W, F>(record: &M, conversion: F) -> M::Output<W>
where
    M: MapValues<V>,
    F: FnMut(&V) -> W,
{
    record.map_values(conversion)
}
