//! Dense, insertion-ordered storage shared by the list-shaped containers.

use std::cmp::Ordering;

use crate::error::{CollectionError, Result};
use crate::stage::SliceCursor;

/// An ordered list of values indexed `0..n` without gaps.
///
/// Every mutation keeps the indices contiguous: insertion appends or
/// prepends, removal shifts later items down by one.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `get`/`has`     | O(1)       |
/// | `set`           | O(1) amortized |
/// | `push`/`pop`    | O(1) amortized |
/// | `unshift`/`shift` | O(N)     |
/// | `remove`        | O(N)       |
///
/// # Examples
///
/// ```rust
/// use catena::container::SequenceStorage;
///
/// let mut storage: SequenceStorage<char> = ['a', 'b'].into_iter().collect();
///
/// // An index beyond the end appends instead of leaving a gap.
/// storage.set(Some(10), 'c');
/// assert_eq!(storage.as_slice(), &['a', 'b', 'c']);
///
/// storage.remove(0).unwrap();
/// assert_eq!(storage.get(0), Ok(&'b'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SequenceStorage<T> {
    items: Vec<T>,
}

impl<T> SequenceStorage<T> {
    /// Creates empty storage.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in index order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a cursor over the items, keyed by index.
    #[inline]
    pub fn cursor(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(&self.items)
    }

    /// Returns `true` if `index` holds an item.
    #[inline]
    pub fn has(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` holds no item.
    pub fn get(&self, index: usize) -> Result<&T> {
        let length = self.items.len();
        self.items
            .get(index)
            .ok_or(CollectionError::OutOfRange { index, length })
    }

    /// Returns the item at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` holds no item.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(CollectionError::OutOfRange { index, length })
    }

    /// Writes `value` at `index`.
    ///
    /// `None`, or an index at or beyond the end, appends; an existing index
    /// is overwritten in place. No gap is ever created.
    pub fn set(&mut self, index: Option<usize>, value: T) {
        match index.and_then(|index| self.items.get_mut(index)) {
            Some(slot) => *slot = value,
            None => self.items.push(value),
        }
    }

    /// Removes and returns the item at `index`, shifting later items down.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` holds no item.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let length = self.items.len();
        if index < length {
            Ok(self.items.remove(index))
        } else {
            Err(CollectionError::OutOfRange { index, length })
        }
    }

    /// Appends `value`.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Prepends `value`.
    #[inline]
    pub fn unshift(&mut self, value: T) {
        self.items.insert(0, value);
    }

    /// Removes and returns the last item.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first item.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Returns the index of the first item equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    /// Sorts the items with `comparator`. The sort is stable.
    pub fn sort_by<F>(&mut self, comparator: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(comparator);
    }

    /// Sorts the items in ascending order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.items.sort();
    }

    /// Removes every item.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the storage, returning its items.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for SequenceStorage<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SequenceStorage<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for SequenceStorage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for SequenceStorage<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a SequenceStorage<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for SequenceStorage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> SequenceStorage<char> {
        "abcd".chars().collect()
    }

    #[rstest]
    fn test_get_existing_and_missing() {
        let storage = letters();
        assert_eq!(storage.get(2), Ok(&'c'));
        assert_eq!(
            storage.get(4),
            Err(CollectionError::OutOfRange {
                index: 4,
                length: 4
            })
        );
    }

    #[rstest]
    #[case(None, "abcde")]
    #[case(Some(1), "aecd")]
    #[case(Some(4), "abcde")]
    #[case(Some(100), "abcde")]
    fn test_set_semantics(#[case] index: Option<usize>, #[case] expected: &str) {
        let mut storage = letters();
        storage.set(index, 'e');
        let rendered: String = storage.iter().collect();
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn test_remove_closes_gap() {
        let mut storage = letters();
        assert_eq!(storage.remove(1), Ok('b'));
        assert_eq!(storage.as_slice(), &['a', 'c', 'd']);
        assert_eq!(storage.get(1), Ok(&'c'));
    }

    #[rstest]
    fn test_remove_missing_leaves_storage_untouched() {
        let mut storage = letters();
        assert_eq!(
            storage.remove(9),
            Err(CollectionError::OutOfRange {
                index: 9,
                length: 4
            })
        );
        assert_eq!(storage, letters());
    }

    #[rstest]
    fn test_both_ends() {
        let mut storage = letters();
        storage.unshift('z');
        storage.push('y');
        assert_eq!(storage.shift(), Some('z'));
        assert_eq!(storage.pop(), Some('y'));
        assert_eq!(storage, letters());

        let mut empty: SequenceStorage<char> = SequenceStorage::new();
        assert_eq!(empty.shift(), None);
        assert_eq!(empty.pop(), None);
    }

    #[rstest]
    fn test_sort_and_sort_by() {
        let mut storage: SequenceStorage<i32> = (1..=10).rev().collect();
        storage.sort();
        assert_eq!(storage.as_slice(), (1..=10).collect::<Vec<_>>().as_slice());
        storage.sort_by(|left, right| right.cmp(left));
        assert_eq!(storage.get(0), Ok(&10));
    }

    #[rstest]
    fn test_position_and_has() {
        let storage = letters();
        assert_eq!(storage.position(&'c'), Some(2));
        assert_eq!(storage.position(&'q'), None);
        assert!(storage.has(3));
        assert!(!storage.has(4));
    }
}
