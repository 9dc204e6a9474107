//! The lazy iteration protocol and the stages built on it.
//!
//! A [`Cursor`] is a rewindable position over an ordered sequence of
//! `(key, value)` pairs. Root cursors read container storage:
//!
//! - [`SliceCursor`]: a dense list, keyed by position
//! - [`PairsCursor`]: parallel key and value lists, keyed by the stored keys
//! - [`EntriesCursor`]: a shared, owned list of entries
//!
//! A [`Stage`] is a cursor that owns exactly one upstream cursor and
//! reinterprets its pairs without materializing them:
//!
//! - [`ValueStage`], [`KeyStage`], [`EntryComposeStage`]: project onto a
//!   dense `0..n` key space
//! - [`EntryDecomposeStage`]: the inverse of [`EntryComposeStage`]
//! - [`FlipStage`]: swaps keys and values
//! - [`MapStage`], [`FilterStage`]: apply caller callbacks
//!
//! # Examples
//!
//! ```rust
//! use catena::stage::{Cursor, CursorIter, FlipStage, SliceCursor, Stage};
//!
//! let letters = ['a', 'b', 'c'];
//! let flipped = FlipStage::attach(SliceCursor::new(&letters), ());
//! let pairs: Vec<(char, usize)> = CursorIter::new(flipped).collect();
//! assert_eq!(pairs, vec![('a', 0), ('b', 1), ('c', 2)]);
//! ```

use std::iter::FusedIterator;

mod callback;
mod projection;
mod source;

pub use callback::FilterStage;
pub use callback::MapStage;
pub use projection::EntryComposeStage;
pub use projection::EntryDecomposeStage;
pub use projection::FlipStage;
pub use projection::KeyStage;
pub use projection::ValueStage;
pub use source::EntriesCursor;
pub use source::PairsCursor;
pub use source::SliceCursor;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted pointer shared by cloned chains.
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Cursor Protocol
// =============================================================================

/// A rewindable position over ordered `(key, value)` pairs.
///
/// A cursor must be [`reset`](Cursor::reset) before its first
/// [`valid`](Cursor::valid) check. `key` and `value` return `None` exactly
/// when the cursor is not valid.
pub trait Cursor {
    /// The key type at each position.
    type Key;
    /// The value type at each position.
    type Value;

    /// Rewinds this cursor, and every cursor upstream of it, to the first position.
    fn reset(&mut self);

    /// Returns `true` while the cursor points at a position.
    fn valid(&self) -> bool;

    /// Returns the key at the current position.
    fn key(&self) -> Option<Self::Key>;

    /// Returns the value at the current position.
    fn value(&self) -> Option<Self::Value>;

    /// Moves to the next position. Has no effect once the cursor is exhausted.
    fn advance(&mut self);
}

/// A cursor built on top of exactly one upstream cursor.
///
/// `Args` carries the stage-specific parameters: a callback, a pattern, or
/// nothing (`()`). Any type implementing this trait can be passed to
/// [`Iterable::chain`](crate::Iterable::chain).
///
/// # Examples
///
/// ```rust
/// use catena::stage::{Cursor, Stage};
/// use catena::{Iterable, Sequence};
///
/// /// Keeps every n-th position.
/// #[derive(Clone)]
/// struct StepStage<U> {
///     upstream: U,
///     step: usize,
/// }
///
/// impl<U: Cursor> Cursor for StepStage<U> {
///     type Key = U::Key;
///     type Value = U::Value;
///
///     fn reset(&mut self) {
///         self.upstream.reset();
///     }
///     fn valid(&self) -> bool {
///         self.upstream.valid()
///     }
///     fn key(&self) -> Option<U::Key> {
///         self.upstream.key()
///     }
///     fn value(&self) -> Option<U::Value> {
///         self.upstream.value()
///     }
///     fn advance(&mut self) {
///         for _ in 0..self.step {
///             self.upstream.advance();
///         }
///     }
/// }
///
/// impl<U: Cursor> Stage<U> for StepStage<U> {
///     type Args = usize;
///
///     fn attach(upstream: U, step: usize) -> Self {
///         Self { upstream, step }
///     }
/// }
///
/// let sequence: Sequence<i32> = (0..7).collect();
/// let stepped = sequence.chain::<StepStage<_>>(3);
/// assert_eq!(stepped.to_vec(), vec![0, 3, 6]);
/// ```
pub trait Stage<U: Cursor>: Cursor + Sized {
    /// Stage-specific parameters.
    type Args;

    /// Wraps `upstream` in a new stage.
    fn attach(upstream: U, args: Self::Args) -> Self;
}

// =============================================================================
// Iterator Adapter
// =============================================================================

/// Adapts a [`Cursor`] to [`Iterator`], yielding `(key, value)` pairs.
///
/// The cursor is reset on construction.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    /// Resets `cursor` and wraps it.
    #[must_use]
    pub fn new(mut cursor: C) -> Self {
        cursor.reset();
        Self { cursor }
    }

    /// Returns the underlying cursor at its current position.
    #[inline]
    pub const fn cursor(&self) -> &C {
        &self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = (C::Key, C::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.valid() {
            return None;
        }
        let entry = self.cursor.key().zip(self.cursor.value());
        self.cursor.advance();
        entry
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}

/// Traversal state handed to `for_each` and `reduce` callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationContext {
    position: usize,
}

impl IterationContext {
    pub(crate) const fn new(position: usize) -> Self {
        Self { position }
    }

    /// The 0-based number of positions visited before this one.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` for the first visited position.
    #[inline]
    pub const fn is_first(&self) -> bool {
        self.position == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_cursor_iter_resets_on_construction() {
        let items = [1, 2, 3];
        let mut cursor = SliceCursor::new(&items);
        cursor.reset();
        cursor.advance();
        cursor.advance();

        let collected: Vec<(usize, i32)> = CursorIter::new(cursor).collect();
        assert_eq!(collected, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[rstest]
    fn test_cursor_iter_is_fused() {
        let items = [1];
        let mut iterator = CursorIter::new(SliceCursor::new(&items));
        assert_eq!(iterator.next(), Some((0, 1)));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
        assert!(!iterator.cursor().valid());
    }

    #[rstest]
    fn test_iteration_context() {
        let context = IterationContext::new(0);
        assert!(context.is_first());
        assert_eq!(IterationContext::new(4).position(), 4);
        assert!(!IterationContext::new(4).is_first());
    }

    #[rstest]
    fn test_stages_compose_without_materializing() {
        let items = [3, 4, 5, 6];
        let filtered = FilterStage::attach(SliceCursor::new(&items), |value: &i32, _: &usize| {
            value % 2 == 0
        });
        let flipped = FlipStage::attach(filtered, ());
        let collected: Vec<(i32, usize)> = CursorIter::new(flipped).collect();
        assert_eq!(collected, vec![(4, 1), (6, 3)]);
    }
}
