//! An insertion-ordered key-value store with equality lookup.

use std::cmp::Ordering;
use std::fmt;

use crate::Iterable;
use crate::error::{CollectionError, Result};
use crate::stage::PairsCursor;

/// An ordered map from `K` to `V` kept as two parallel lists.
///
/// Lookups compare keys with `PartialEq`, so keys need neither `Hash` nor
/// `Ord`: floating-point numbers, nested structures and other values without
/// a total order can be keys.
///
/// # Time Complexity
///
/// | Operation             | Complexity |
/// |-----------------------|------------|
/// | `get`/`has`/`set`     | O(N)       |
/// | `remove`              | O(N)       |
/// | `sort_by`             | O(N log N) |
///
/// # Examples
///
/// ```rust
/// use catena::{CollectionError, Iterable, Map};
///
/// let mut map = Map::new();
/// map.set(vec![1.5, 2.0], "floats");
/// map.set(vec![0.0], "zero");
///
/// assert_eq!(map.get(&vec![1.5, 2.0]), Ok(&"floats"));
/// assert_eq!(map.get(&vec![9.0]), Err(CollectionError::KeyNotFound));
///
/// // Writing an existing key keeps its position.
/// assert_eq!(map.set(vec![1.5, 2.0], "again"), Some("floats"));
/// assert_eq!(map.join(","), "again,zero");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Map<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

/// Borrowing iterator over the entries of a [`Map`].
pub type MapIterator<'a, K, V> = std::iter::Zip<std::slice::Iter<'a, K>, std::slice::Iter<'a, V>>;

/// Owning iterator over the entries of a [`Map`].
pub type MapIntoIterator<K, V> = std::iter::Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>;

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a map from parallel lists whose keys are already distinct.
    pub(crate) fn from_distinct_parts(keys: Vec<K>, values: Vec<V>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self { keys, values }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the keys in insertion order.
    #[inline]
    pub fn key_list(&self) -> &[K] {
        &self.keys
    }

    /// Returns the values in insertion order.
    #[inline]
    pub fn value_list(&self) -> &[V] {
        &self.values
    }

    /// Returns an iterator over `(&key, &value)` in insertion order.
    #[inline]
    pub fn iter(&self) -> MapIterator<'_, K, V> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    /// Reorders the entries by value with `comparator`; each key moves with
    /// its value. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, Map};
    ///
    /// let mut map: Map<&str, i32> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
    /// map.sort_by(|left, right| left.cmp(right));
    /// assert_eq!(map.join_with_keys(",", "="), "a=1,b=2,c=3");
    /// ```
    pub fn sort_by<F>(&mut self, mut comparator: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut entries: Vec<(K, V)> = std::mem::take(&mut self.keys)
            .into_iter()
            .zip(std::mem::take(&mut self.values))
            .collect();
        entries.sort_by(|(_, left), (_, right)| comparator(left, right));
        (self.keys, self.values) = entries.into_iter().unzip();
    }

    /// Reorders the entries by ascending value.
    pub fn sort(&mut self)
    where
        V: Ord,
    {
        self.sort_by(Ord::cmp);
    }
}

impl<K: PartialEq, V> Map<K, V> {
    /// Creates a map from the pairs of any iterable, keeping its keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, Map, Sequence};
    ///
    /// let letters = Sequence::from(vec!['x', 'y']);
    /// let positions = Map::from_iterable(&letters.flip());
    /// assert_eq!(positions.get(&'y'), Ok(&1));
    /// ```
    pub fn from_iterable<I>(source: &I) -> Self
    where
        I: Iterable<Key = K, Value = V>,
    {
        source.pairs().collect()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }

    /// Returns `true` if an entry exists for `key`.
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if no entry exists for `key`.
    pub fn get(&self, key: &K) -> Result<&V> {
        self.position(key)
            .map(|index| &self.values[index])
            .ok_or(CollectionError::KeyNotFound)
    }

    /// Returns the value stored for `key` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if no entry exists for `key`.
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.position(key) {
            Some(index) => Ok(&mut self.values[index]),
            None => Err(CollectionError::KeyNotFound),
        }
    }

    /// Stores `value` for `key`.
    ///
    /// An existing entry is overwritten in place and its previous value is
    /// returned; a new key is appended.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.values[index], value)),
            None => {
                self.keys.push(key);
                self.values.push(value);
                None
            }
        }
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.position(key)?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }
}

impl<K: Clone, V: Clone> Iterable for Map<K, V> {
    type Key = K;
    type Value = V;
    type Cursor<'a>
        = PairsCursor<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        PairsCursor::new(&self.keys, &self.values)
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    fn to_array(&self) -> Self {
        self.clone()
    }
}

impl<K, V> Default for Map<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Builds a map from `[key, value]` rows.
///
/// Rows are lists, so this only applies when keys and values share a type.
/// Entries with different key and value types are `(K, V)` tuples, whose
/// shape the type system already checks; build those maps through
/// `FromIterator<(K, V)>` or [`crate::map`].
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] if any row does not hold
/// exactly two items. Nothing is built in that case.
///
/// # Examples
///
/// ```rust
/// use catena::{CollectionError, Map};
///
/// let map = Map::try_from(vec![vec!["a", "1"], vec!["b", "2"]]).unwrap();
/// assert_eq!(map.get(&"b"), Ok(&"2"));
///
/// let malformed = Map::try_from(vec![vec!["a", "1"], vec!["b"]]);
/// assert!(matches!(malformed, Err(CollectionError::InvalidArgument { .. })));
/// ```
impl<T: PartialEq> TryFrom<Vec<Vec<T>>> for Map<T, T> {
    type Error = CollectionError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        if let Some((row, items)) = rows
            .iter()
            .enumerate()
            .find(|(_, items)| items.len() != 2)
            .map(|(row, items)| (row, items.len()))
        {
            tracing::debug!(row, items, "rejected malformed map entry");
            return Err(CollectionError::invalid_argument(format!(
                "map entry {row} holds {items} items, expected a key and a value"
            )));
        }
        let mut map = Self::new();
        for row in rows {
            let mut items = row.into_iter();
            if let (Some(key), Some(value)) = (items.next(), items.next()) {
                map.set(key, value);
            }
        }
        Ok(map)
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = MapIntoIterator<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter().zip(self.values)
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone, V: Clone + fmt::Display> fmt::Display for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.join(","))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Map<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for entry in self {
            sequence.serialize_element(&entry)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct MapVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> MapVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for MapVisitor<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    type Value = Map<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of [key, value] entries")
    }

    fn visit_seq<A>(self, mut sequence: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = sequence.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut map = Map {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        };
        while let Some((key, value)) = sequence.next_element::<(K, V)>()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Map<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MapVisitor::new())
    }
}
