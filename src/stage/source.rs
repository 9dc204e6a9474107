//! Root cursors reading concrete storage.

use std::fmt;

use super::{Cursor, ReferenceCounter};

// =============================================================================
// SliceCursor
// =============================================================================

/// A cursor over a borrowed dense list; keys are positions.
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Creates a cursor over `items`.
    #[inline]
    #[must_use]
    pub const fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            position: self.position,
        }
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SliceCursor")
            .field("length", &self.items.len())
            .field("position", &self.position)
            .finish()
    }
}

impl<T: Clone> Cursor for SliceCursor<'_, T> {
    type Key = usize;
    type Value = T;

    #[inline]
    fn reset(&mut self) {
        self.position = 0;
    }

    #[inline]
    fn valid(&self) -> bool {
        self.position < self.items.len()
    }

    #[inline]
    fn key(&self) -> Option<usize> {
        self.valid().then_some(self.position)
    }

    #[inline]
    fn value(&self) -> Option<T> {
        self.items.get(self.position).cloned()
    }

    #[inline]
    fn advance(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }
}

// =============================================================================
// PairsCursor
// =============================================================================

/// A cursor over borrowed parallel key and value lists.
///
/// Both lists are expected to have the same length; iteration stops at the
/// shorter one.
pub struct PairsCursor<'a, K, V> {
    keys: &'a [K],
    values: &'a [V],
    position: usize,
}

impl<'a, K, V> PairsCursor<'a, K, V> {
    /// Creates a cursor pairing `keys[i]` with `values[i]`.
    #[inline]
    #[must_use]
    pub const fn new(keys: &'a [K], values: &'a [V]) -> Self {
        Self {
            keys,
            values,
            position: 0,
        }
    }

    const fn length(&self) -> usize {
        if self.keys.len() < self.values.len() {
            self.keys.len()
        } else {
            self.values.len()
        }
    }
}

impl<K, V> Clone for PairsCursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys,
            values: self.values,
            position: self.position,
        }
    }
}

impl<K, V> fmt::Debug for PairsCursor<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PairsCursor")
            .field("length", &self.length())
            .field("position", &self.position)
            .finish()
    }
}

impl<K: Clone, V: Clone> Cursor for PairsCursor<'_, K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn reset(&mut self) {
        self.position = 0;
    }

    #[inline]
    fn valid(&self) -> bool {
        self.position < self.length()
    }

    fn key(&self) -> Option<K> {
        if self.valid() {
            self.keys.get(self.position).cloned()
        } else {
            None
        }
    }

    fn value(&self) -> Option<V> {
        if self.valid() {
            self.values.get(self.position).cloned()
        } else {
            None
        }
    }

    #[inline]
    fn advance(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }
}

// =============================================================================
// EntriesCursor
// =============================================================================

/// A cursor over an owned, shared list of entries.
///
/// Clones share the entry list and only copy the position, so a free-standing
/// collection and every chain derived from it read the same immutable data.
pub struct EntriesCursor<K, V> {
    entries: ReferenceCounter<[(K, V)]>,
    position: usize,
}

impl<K, V> EntriesCursor<K, V> {
    /// Creates a cursor owning `entries`.
    #[must_use]
    pub fn new(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: ReferenceCounter::from(entries),
            position: 0,
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(K, V)] {
        &self.entries
    }
}

impl<K, V> Clone for EntriesCursor<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: ReferenceCounter::clone(&self.entries),
            position: self.position,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntriesCursor<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EntriesCursor")
            .field("entries", &&*self.entries)
            .field("position", &self.position)
            .finish()
    }
}

impl<K: Clone, V: Clone> Cursor for EntriesCursor<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn reset(&mut self) {
        self.position = 0;
    }

    #[inline]
    fn valid(&self) -> bool {
        self.position < self.entries.len()
    }

    fn key(&self) -> Option<K> {
        self.entries.get(self.position).map(|(key, _)| key.clone())
    }

    fn value(&self) -> Option<V> {
        self.entries.get(self.position).map(|(_, value)| value.clone())
    }

    #[inline]
    fn advance(&mut self) {
        if self.valid() {
            self.position += 1;
        }
    }
}
