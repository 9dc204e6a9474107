//! The general dense list container.

use std::cmp::Ordering;

use super::{SequenceStorage, dense_iterable};
use crate::Iterable;
use crate::error::Result;

/// A dense list addressed by `usize` indices.
///
/// # Examples
///
/// ```rust
/// use catena::{Iterable, Sequence};
///
/// let mut sequence: Sequence<char> = "abcd".chars().collect();
/// sequence.set(None, 'e');
/// sequence.remove(0).unwrap();
///
/// assert_eq!(sequence.len(), 4);
/// assert_eq!(sequence.join(""), "bcde");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Sequence<T> {
    storage: SequenceStorage<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: SequenceStorage::new(),
        }
    }

    /// Creates a sequence from the values of any iterable, dropping its keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{Collection, Iterable, Sequence};
    ///
    /// let keyed = Collection::from_entries([(2, 'a'), (4, 'b'), (16, 'c')]);
    /// let sequence = Sequence::from_iterable(&keyed);
    /// assert_eq!(sequence.as_slice(), &['a', 'b', 'c']);
    /// ```
    pub fn from_iterable<I>(source: &I) -> Self
    where
        I: Iterable<Value = T>,
    {
        source.pairs().map(|(_, value)| value).collect()
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the items in index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns `true` if `index` holds an item.
    #[inline]
    pub fn has(&self, index: usize) -> bool {
        self.storage.has(index)
    }

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// if `index` holds no item.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.storage.get(index)
    }

    /// Returns the item at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// if `index` holds no item.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.storage.get_mut(index)
    }

    /// Writes `value` at `index`; `None` or an index past the end appends.
    #[inline]
    pub fn set(&mut self, index: Option<usize>, value: T) {
        self.storage.set(index, value);
    }

    /// Appends `value`.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Removes and returns the item at `index`, shifting later items down.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// if `index` holds no item.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.storage.remove(index)
    }

    /// Sorts the items with `comparator`.
    #[inline]
    pub fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.storage.sort_by(comparator);
    }

    /// Sorts the items in ascending order.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.storage.sort();
    }

    /// Removes every item.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }
}

dense_iterable!(Sequence);

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self {
            storage: SequenceStorage::from(items),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}
