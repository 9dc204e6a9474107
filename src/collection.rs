//! The chainable collection abstraction.
//!
//! [`Iterable`] is implemented by every collection-family type. Its single
//! required method, [`Iterable::cursor`], produces a fresh [`Cursor`] over
//! the current contents; every chaining and terminal operation is built on
//! top of it.
//!
//! Chaining operations (`keys`, `values`, `entries`, `map`, `filter`, `flip`,
//! `chain`) borrow the receiver and return a new [`Collection`] wrapping one
//! more stage. Nothing runs until a terminal operation (`to_array`, `to_vec`,
//! `pairs`, `for_each`, `reduce`, `join`, `count`) walks the chain, and every
//! terminal operation re-evaluates it from the source.
//!
//! # Examples
//!
//! ```rust
//! use catena::{Iterable, collection};
//!
//! let numbers = collection(0..=10);
//! let filtered = numbers.filter(|value, key| *key != 3 && *value != 8);
//!
//! // Filtering keeps the original keys...
//! let keys: Vec<usize> = filtered.keys().to_vec();
//! assert_eq!(keys, vec![0, 1, 2, 4, 5, 6, 7, 9, 10]);
//!
//! // ...and projecting the values renumbers them densely.
//! let values = filtered.values();
//! assert_eq!(values.keys().to_vec(), (0..9).collect::<Vec<usize>>());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::container::Map;
use crate::error::{CollectionError, Result};
use crate::stage::{
    Cursor, CursorIter, EntriesCursor, EntryComposeStage, EntryDecomposeStage, FilterStage,
    FlipStage, IterationContext, KeyStage, MapStage, Stage, ValueStage,
};

// =============================================================================
// Iterable
// =============================================================================

/// A source of ordered `(key, value)` pairs supporting lazy pipelines.
///
/// Implementors provide [`cursor`](Iterable::cursor); everything else is
/// derived from it.
pub trait Iterable {
    /// The key type of each position.
    type Key;
    /// The value type of each position.
    type Value;
    /// The cursor produced for one traversal.
    type Cursor<'a>: Cursor<Key = Self::Key, Value = Self::Value> + Clone
    where
        Self: 'a;

    /// Returns a fresh cursor over the current contents.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns an iterator over `(key, value)` pairs.
    fn pairs(&self) -> CursorIter<Self::Cursor<'_>> {
        CursorIter::new(self.cursor())
    }

    /// Wraps the current cursor in a stage of type `S`.
    ///
    /// This is the generic form of every chaining operation: `keys()` is
    /// `chain::<KeyStage<_>>(())`, `map(f)` is `chain::<MapStage<_, _>>(f)`,
    /// and so on. Only types implementing [`Stage`] are accepted.
    fn chain<'s, S>(&'s self, args: S::Args) -> Collection<S>
    where
        S: Stage<Self::Cursor<'s>>,
    {
        Collection::from_cursor(S::attach(self.cursor(), args))
    }

    /// Projects the keys into values, keyed `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, Iterable};
    ///
    /// let letters = Collection::from_entries([("a", 0), ("b", 1)]);
    /// assert_eq!(letters.keys().to_vec(), vec!["a", "b"]);
    /// ```
    fn keys(&self) -> Collection<KeyStage<Self::Cursor<'_>>> {
        self.chain(())
    }

    /// Projects the values, keyed `0..n`.
    fn values(&self) -> Collection<ValueStage<Self::Cursor<'_>>> {
        self.chain(())
    }

    /// Yields `(key, value)` pairs, keyed `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, Iterable};
    ///
    /// let letters = Collection::from_entries([("test", 'a'), ("abc", 'd')]);
    /// assert_eq!(letters.entries().to_vec(), vec![("test", 'a'), ("abc", 'd')]);
    /// ```
    fn entries(&self) -> Collection<EntryComposeStage<Self::Cursor<'_>>> {
        self.chain(())
    }

    /// Lazily replaces every value with `mapper(value, key)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, Sequence};
    ///
    /// let sequence: Sequence<usize> = Sequence::from(vec![6, 5, 4, 3, 2]);
    /// let scaled = sequence.map(|value, key| value * key);
    /// assert_eq!(scaled.to_vec(), vec![0, 5, 8, 9, 8]);
    /// ```
    fn map<B, F>(&self, mapper: F) -> Collection<MapStage<Self::Cursor<'_>, F>>
    where
        F: Fn(Self::Value, Self::Key) -> B,
    {
        Collection::from_cursor(MapStage::new(self.cursor(), mapper))
    }

    /// Lazily keeps the positions for which `predicate(&value, &key)` holds.
    ///
    /// Keys are not renumbered.
    fn filter<P>(&self, predicate: P) -> Collection<FilterStage<Self::Cursor<'_>, P>>
    where
        P: Fn(&Self::Value, &Self::Key) -> bool,
    {
        Collection::from_cursor(FilterStage::new(self.cursor(), predicate))
    }

    /// Swaps keys and values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, Sequence};
    ///
    /// let sequence = Sequence::from(vec!['a', 'b']);
    /// let flipped = sequence.flip().to_array();
    /// assert_eq!(flipped.get(&'b'), Ok(&1));
    /// ```
    fn flip(&self) -> Collection<FlipStage<Self::Cursor<'_>>> {
        self.chain(())
    }

    /// Calls `handler(value, key, context)` for every position.
    fn for_each<F>(&self, mut handler: F)
    where
        F: FnMut(Self::Value, Self::Key, IterationContext),
    {
        for (position, (key, value)) in self.pairs().enumerate() {
            handler(value, key, IterationContext::new(position));
        }
    }

    /// Folds every position into `initial` with `reducer(carry, value, key, context)`.
    ///
    /// An empty source returns `initial` without calling `reducer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, collection};
    ///
    /// let total = collection(1..=10).reduce(|carry, value, _, _| carry + value, 15);
    /// assert_eq!(total, 70);
    /// ```
    fn reduce<B, F>(&self, mut reducer: F, initial: B) -> B
    where
        F: FnMut(B, Self::Value, Self::Key, IterationContext) -> B,
    {
        self.pairs()
            .enumerate()
            .fold(initial, |carry, (position, (key, value))| {
                reducer(carry, value, key, IterationContext::new(position))
            })
    }

    /// Returns the number of positions.
    ///
    /// The default walks the chain; containers answer from their storage.
    fn count(&self) -> usize {
        self.pairs().count()
    }

    /// Materializes the values into a `Vec`, dropping keys.
    fn to_vec(&self) -> Vec<Self::Value> {
        self.pairs().map(|(_, value)| value).collect()
    }

    /// Materializes the pairs into an ordered key-value [`Map`].
    ///
    /// A key seen again overwrites the value stored for it, in the position
    /// where it was first seen.
    fn to_array(&self) -> Map<Self::Key, Self::Value>
    where
        Self::Key: PartialEq,
    {
        self.pairs().collect()
    }

    /// Concatenates the values, separated by `delimiter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, Sequence};
    ///
    /// let sequence = Sequence::from(vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(sequence.join(":"), "a:b:c:d");
    /// assert_eq!(sequence.to_string(), "a,b,c,d");
    /// ```
    fn join(&self, delimiter: &str) -> String
    where
        Self::Value: fmt::Display,
    {
        let rendered: Vec<String> = self.pairs().map(|(_, value)| value.to_string()).collect();
        rendered.join(delimiter)
    }

    /// Concatenates `key + key_delimiter + value` for every position,
    /// separated by `delimiter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Iterable, Sequence};
    ///
    /// let sequence = Sequence::from(vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(sequence.join_with_keys(":", ";"), "0;a:1;b:2;c:3;d");
    /// ```
    fn join_with_keys(&self, delimiter: &str, key_delimiter: &str) -> String
    where
        Self::Key: fmt::Display,
        Self::Value: fmt::Display,
    {
        let rendered: Vec<String> = self
            .pairs()
            .map(|(key, value)| format!("{key}{key_delimiter}{value}"))
            .collect();
        rendered.join(delimiter)
    }
}

// =============================================================================
// Collection
// =============================================================================

/// A handle wrapping one cursor, usually the last stage of a chain.
///
/// Cloning a collection clones its cursor; clones never share a position.
///
/// # Examples
///
/// ```rust
/// use catena::{Collection, Iterable};
///
/// let scores = Collection::from_entries([("a", 2), ("b", 2), ("c", 2), ("d", 1)]);
///
/// // Flipping twice around a map transforms keys instead of values.
/// let upper = scores
///     .flip()
///     .map(|key, _| key.to_uppercase())
///     .flip();
/// assert_eq!(upper.join_with_keys(",", "="), "A=2,B=2,C=2,D=1");
/// ```
#[derive(Debug, Clone)]
pub struct Collection<C> {
    cursor: C,
}

impl<C> Collection<C> {
    /// Wraps a cursor.
    #[inline]
    #[must_use]
    pub const fn from_cursor(cursor: C) -> Self {
        Self { cursor }
    }

    /// Unwraps the cursor.
    #[inline]
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<T> Collection<EntriesCursor<usize, T>> {
    /// Creates a collection owning `values`, keyed `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, Iterable};
    ///
    /// let letters = Collection::from_values(['a', 'b', 'c']);
    /// assert_eq!(letters.keys().to_vec(), vec![0, 1, 2]);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_cursor(EntriesCursor::new(values.into_iter().enumerate().collect()))
    }
}

impl<K, V> Collection<EntriesCursor<K, V>> {
    /// Creates a collection owning `entries`, in order.
    ///
    /// Keys are kept exactly as given; duplicates are only collapsed when the
    /// collection is materialized.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_cursor(EntriesCursor::new(entries.into_iter().collect()))
    }

    /// Returns the number of owned entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Returns `true` if the collection owns no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// Returns the owned entries in order.
    #[inline]
    pub fn as_entries(&self) -> &[(K, V)] {
        self.cursor.entries()
    }
}

impl<K: PartialEq, V> Collection<EntriesCursor<K, V>> {
    fn position(&self, key: &K) -> Option<usize> {
        self.as_entries()
            .iter()
            .position(|(candidate, _)| candidate == key)
    }

    /// Returns `true` if an owned entry has `key`.
    #[inline]
    pub fn has(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value of the first owned entry with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::KeyNotFound`] if no entry has `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, CollectionError};
    ///
    /// let letters = Collection::from_values(['a', 'b']);
    /// assert_eq!(letters.get(&1), Ok(&'b'));
    /// assert_eq!(letters.get(&2), Err(CollectionError::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V> {
        self.position(key)
            .map(|index| &self.as_entries()[index].1)
            .ok_or(CollectionError::KeyNotFound)
    }
}

impl<K: Clone + PartialEq, V: Clone> Collection<EntriesCursor<K, V>> {
    /// Applies `edit` to a private copy of the entries and installs the result.
    ///
    /// Clones of this collection keep the entries they were cloned with.
    fn edit_entries<R>(&mut self, edit: impl FnOnce(&mut Vec<(K, V)>) -> R) -> R {
        let mut entries = self.as_entries().to_vec();
        let result = edit(&mut entries);
        self.cursor = EntriesCursor::new(entries);
        result
    }

    /// Stores `value` for `key`, overwriting the first entry with that key in
    /// place or appending a new entry. Returns the overwritten value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, Iterable};
    ///
    /// let mut scores = Collection::from_entries([("a", 1), ("b", 2)]);
    /// let snapshot = scores.clone();
    ///
    /// assert_eq!(scores.set("a", 10), Some(1));
    /// assert_eq!(scores.set("c", 3), None);
    /// assert_eq!(scores.join_with_keys(",", "="), "a=10,b=2,c=3");
    /// assert_eq!(snapshot.join_with_keys(",", "="), "a=1,b=2");
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let position = self.position(&key);
        self.edit_entries(|entries| match position {
            Some(index) => Some(std::mem::replace(&mut entries[index].1, value)),
            None => {
                entries.push((key, value));
                None
            }
        })
    }

    /// Removes the first entry with `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.position(key)?;
        self.edit_entries(|entries| Some(entries.remove(index).1))
    }

    /// Reorders the owned entries by value with `comparator`; each key moves
    /// with its value. The sort is stable.
    pub fn sort_by<F>(&mut self, mut comparator: F)
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        self.edit_entries(|entries| {
            entries.sort_by(|(_, left), (_, right)| comparator(left, right));
        });
    }

    /// Reorders the owned entries by ascending value.
    pub fn sort(&mut self)
    where
        V: Ord,
    {
        self.sort_by(Ord::cmp);
    }
}

impl<C, K, V> Collection<C>
where
    C: Cursor<Value = (K, V)> + Clone,
    K: Clone,
    V: Clone,
{
    /// Turns a collection of `(key, value)` pair values back into a keyed
    /// collection. The inverse of [`Iterable::entries`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, Iterable};
    ///
    /// let entries = Collection::from_values([("x", 1), ("y", 2)]);
    /// let keyed = entries.decompose();
    /// assert_eq!(keyed.join_with_keys(",", "="), "x=1,y=2");
    /// ```
    pub fn decompose(&self) -> Collection<EntryDecomposeStage<C>> {
        self.chain(())
    }
}

impl<C: Cursor + Clone> Iterable for Collection<C> {
    type Key = C::Key;
    type Value = C::Value;
    type Cursor<'a>
        = C
    where
        Self: 'a;

    #[inline]
    fn cursor(&self) -> C {
        self.cursor.clone()
    }
}

impl<K: Clone, V: Clone> FromIterator<(K, V)> for Collection<EntriesCursor<K, V>> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<T> From<Vec<T>> for Collection<EntriesCursor<usize, T>> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<C> fmt::Display for Collection<C>
where
    C: Cursor + Clone,
    C::Value: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.join(","))
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Collection<EntriesCursor<K, V>>
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
        for (key, value) in self.as_entries() {
            sequence.serialize_element(&(key, value))?;
        }
        sequence.end()
    }
}

/// Restores the owned entries exactly as written, duplicate keys included.
#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Collection<EntriesCursor<K, V>>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<(K, V)>::deserialize(deserializer)?;
        Ok(Self::from_cursor(EntriesCursor::new(entries)))
    }
}
