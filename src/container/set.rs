//! A list that never holds two equal values.

use std::cmp::Ordering;

use super::{SequenceStorage, dense_iterable};
use crate::Iterable;
use crate::error::Result;

/// An insertion-ordered list of distinct values.
///
/// Every path that inserts a value checks it against the current elements
/// with `PartialEq`; a value already present is dropped.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `add`          | O(N)       |
/// | `has`/`remove` | O(N)       |
/// | `get`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use catena::{Iterable, Set};
///
/// let mut set: Set<char> = "abca".chars().collect();
/// assert_eq!(set.len(), 3);
///
/// assert!(set.add('d'));
/// assert!(!set.add('d'));
/// assert_eq!(set.join(""), "abcd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Set<T> {
    storage: SequenceStorage<T>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: SequenceStorage::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the elements in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// if `index` holds no element.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.storage.get(index)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// if `index` holds no element.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.storage.remove(index)
    }

    /// Sorts the elements with `comparator`.
    #[inline]
    pub fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.storage.sort_by(comparator);
    }

    /// Sorts the elements in ascending order.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.storage.sort();
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T: PartialEq> Set<T> {
    /// Creates a set from the values of any iterable, dropping its keys and
    /// any repeated value.
    pub fn from_iterable<I>(source: &I) -> Self
    where
        I: Iterable<Value = T>,
    {
        source.pairs().map(|(_, value)| value).collect()
    }

    /// Returns `true` if an element equals `value`.
    #[inline]
    pub fn has(&self, value: &T) -> bool {
        self.storage.position(value).is_some()
    }

    /// Appends `value` unless an equal element is present.
    ///
    /// Returns whether the value was added.
    pub fn add(&mut self, value: T) -> bool {
        if self.has(&value) {
            tracing::trace!("set dropped a duplicate value");
            return false;
        }
        self.storage.push(value);
        true
    }

    /// Writes `value` at `index` through the uniqueness check.
    ///
    /// When an equal element sits at a different index the write is ignored
    /// and `false` is returned. Otherwise this behaves like
    /// [`SequenceStorage::set`]: `None` or an index past the end appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::Set;
    ///
    /// let mut set: Set<char> = "abc".chars().collect();
    /// assert!(!set.set(Some(0), 'c'));
    /// assert!(set.set(Some(0), 'z'));
    /// assert_eq!(set.as_slice(), &['z', 'b', 'c']);
    /// ```
    pub fn set(&mut self, index: Option<usize>, value: T) -> bool {
        match self.storage.position(&value) {
            Some(existing) if Some(existing) != index => {
                tracing::trace!(existing, "set dropped a duplicate value");
                false
            }
            _ => {
                self.storage.set(index, value);
                true
            }
        }
    }

    /// Removes the element equal to `value`.
    ///
    /// Returns whether an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.storage
            .position(value)
            .is_some_and(|index| self.storage.remove(index).is_ok())
    }
}

dense_iterable!(Set);

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> From<Vec<T>> for Set<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectionError;
    use rstest::rstest;

    #[rstest]
    fn test_add_twice_keeps_one() {
        let mut set: Set<char> = "abcd".chars().collect();
        assert!(set.add('e'));
        assert!(!set.add('e'));
        assert_eq!(set.len(), 5);
    }

    #[rstest]
    fn test_construction_drops_later_duplicates() {
        let set = Set::from(vec![3, 1, 3, 2, 1]);
        assert_eq!(set.as_slice(), &[3, 1, 2]);
    }

    #[rstest]
    #[case(Some(1), 'a', false, "abcd")]
    #[case(Some(0), 'a', true, "abcd")]
    #[case(Some(1), 'z', true, "azcd")]
    #[case(None, 'z', true, "abcdz")]
    #[case(None, 'b', false, "abcd")]
    #[case(Some(9), 'z', true, "abcdz")]
    fn test_indexed_write_goes_through_gate(
        #[case] index: Option<usize>,
        #[case] value: char,
        #[case] written: bool,
        #[case] expected: &str,
    ) {
        let mut set: Set<char> = "abcd".chars().collect();
        assert_eq!(set.set(index, value), written);
        assert_eq!(set.join(""), expected);
    }

    #[rstest]
    fn test_remove_by_value_and_index() {
        let mut set: Set<char> = "abcd".chars().collect();
        assert!(set.remove(&'b'));
        assert!(!set.remove(&'b'));
        assert!(!set.has(&'b'));
        assert_eq!(set.remove_at(0), Ok('a'));
        assert_eq!(
            set.remove_at(5),
            Err(CollectionError::OutOfRange {
                index: 5,
                length: 2
            })
        );
        assert_eq!(set.as_slice(), &['c', 'd']);
    }

    #[rstest]
    fn test_from_iterable_dedupes_values() {
        let keyed = crate::Collection::from_entries([("x", 1), ("y", 2), ("z", 1)]);
        let set = Set::from_iterable(&keyed);
        assert_eq!(set.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_sort() {
        let mut set = Set::from(vec![3, 1, 2]);
        set.sort();
        assert_eq!(set.to_string(), "1,2,3");
    }
}
