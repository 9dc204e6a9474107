//! A list operated from both ends.

use std::cmp::Ordering;

use super::{SequenceStorage, dense_iterable};
use crate::Iterable;
use crate::error::{CollectionError, Result};

/// A dense list with push/pop at the end and unshift/shift at the front.
///
/// # Examples
///
/// ```rust
/// use catena::{CollectionError, Stack};
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// stack.unshift('z');
///
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.shift(), Ok('z'));
/// assert_eq!(stack.pop(), Ok('a'));
/// assert_eq!(stack.pop(), Err(CollectionError::Empty { operation: "pop stack" }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Stack<T> {
    storage: SequenceStorage<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: SequenceStorage::new(),
        }
    }

    /// Creates a stack from the values of any iterable, dropping its keys.
    pub fn from_iterable<I>(source: &I) -> Self
    where
        I: Iterable<Value = T>,
    {
        source.pairs().map(|(_, value)| value).collect()
    }

    /// Appends `item` on top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.storage.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the stack holds no items.
    pub fn pop(&mut self) -> Result<T> {
        self.storage.pop().ok_or(CollectionError::Empty {
            operation: "pop stack",
        })
    }

    /// Inserts `item` at the bottom of the stack.
    #[inline]
    pub fn unshift(&mut self, item: T) {
        self.storage.unshift(item);
    }

    /// Removes and returns the bottom item.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the stack holds no items.
    pub fn shift(&mut self) -> Result<T> {
        self.storage.shift().ok_or(CollectionError::Empty {
            operation: "shift stack",
        })
    }

    /// Returns the top item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.storage.as_slice().last()
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

    /// Returns the items from bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns `true` if `index` holds an item.
    #[inline]
    pub fn has(&self, index: usize) -> bool {
        self.storage.has(index)
    }

    /// Returns the item at `index`, counted from the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` holds no item.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.storage.get(index)
    }

    /// Writes `item` at `index`; `None` or an index past the end pushes.
    #[inline]
    pub fn set(&mut self, index: Option<usize>, item: T) {
        self.storage.set(index, item);
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` holds no item.
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
}

dense_iterable!(Stack);

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self {
            storage: SequenceStorage::from(items),
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_push_and_pop_are_lifo() {
        let mut stack: Stack<char> = "abc".chars().collect();
        stack.push('d');
        assert_eq!(stack.peek(), Some(&'d'));
        assert_eq!(stack.pop(), Ok('d'));
        assert_eq!(stack.pop(), Ok('c'));
        assert_eq!(stack.len(), 2);
    }

    #[rstest]
    fn test_unshift_and_shift_work_at_the_bottom() {
        let mut stack = Stack::from(vec![2, 3]);
        stack.unshift(1);
        assert_eq!(stack.as_slice(), &[1, 2, 3]);
        assert_eq!(stack.shift(), Ok(1));
        assert_eq!(stack.as_slice(), &[2, 3]);
    }

    #[rstest]
    fn test_empty_stack_errors() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(
            stack.pop(),
            Err(CollectionError::Empty {
                operation: "pop stack"
            })
        );
        assert_eq!(
            stack.shift(),
            Err(CollectionError::Empty {
                operation: "shift stack"
            })
        );
        assert_eq!(stack.peek(), None);
    }

    #[rstest]
    fn test_indexed_operations() {
        let mut stack = Stack::from(vec!['a', 'b']);
        stack.set(Some(0), 'x');
        stack.set(None, 'c');
        assert_eq!(stack.get(0), Ok(&'x'));
        assert!(stack.has(2));
        assert_eq!(stack.remove(1), Ok('b'));
        assert_eq!(stack.join(","), "x,c");
    }

    #[rstest]
    fn test_pipeline_over_stack() {
        let stack: Stack<i32> = (1..=4).collect();
        let total = stack
            .map(|value, _| value * 10)
            .reduce(|carry, value, _, _| carry + value, 0);
        assert_eq!(total, 100);
    }
}
