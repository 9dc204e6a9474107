//! Stages that reshape keys and values without callbacks.

use std::fmt;

use super::{Cursor, Stage};

// =============================================================================
// ValueStage
// =============================================================================

/// Keys every upstream value by its running position.
#[derive(Debug, Clone)]
pub struct ValueStage<U> {
    upstream: U,
    position: usize,
}

impl<U: Cursor> Cursor for ValueStage<U> {
    type Key = usize;
    type Value = U::Value;

    fn reset(&mut self) {
        self.upstream.reset();
        self.position = 0;
    }

    #[inline]
    fn valid(&self) -> bool {
        self.upstream.valid()
    }

    fn key(&self) -> Option<usize> {
        self.valid().then_some(self.position)
    }

    fn value(&self) -> Option<U::Value> {
        self.upstream.value()
    }

    fn advance(&mut self) {
        if self.valid() {
            self.upstream.advance();
            self.position += 1;
        }
    }
}

impl<U: Cursor> Stage<U> for ValueStage<U> {
    type Args = ();

    fn attach(upstream: U, (): ()) -> Self {
        Self {
            upstream,
            position: 0,
        }
    }
}

// =============================================================================
// KeyStage
// =============================================================================

/// Turns upstream keys into values keyed by running position.
#[derive(Debug, Clone)]
pub struct KeyStage<U> {
    upstream: U,
    position: usize,
}

impl<U: Cursor> Cursor for KeyStage<U> {
    type Key = usize;
    type Value = U::Key;

    fn reset(&mut self) {
        self.upstream.reset();
        self.position = 0;
    }

    #[inline]
    fn valid(&self) -> bool {
        self.upstream.valid()
    }

    fn key(&self) -> Option<usize> {
        self.valid().then_some(self.position)
    }

    fn value(&self) -> Option<U::Key> {
        self.upstream.key()
    }

    fn advance(&mut self) {
        if self.valid() {
            self.upstream.advance();
            self.position += 1;
        }
    }
}

impl<U: Cursor> Stage<U> for KeyStage<U> {
    type Args = ();

    fn attach(upstream: U, (): ()) -> Self {
        Self {
            upstream,
            position: 0,
        }
    }
}

// =============================================================================
// EntryComposeStage
// =============================================================================

/// Yields `(upstream key, upstream value)` pairs keyed by running position.
#[derive(Debug, Clone)]
pub struct EntryComposeStage<U> {
    upstream: U,
    position: usize,
}

impl<U: Cursor> Cursor for EntryComposeStage<U> {
    type Key = usize;
    type Value = (U::Key, U::Value);

    fn reset(&mut self) {
        self.upstream.reset();
        self.position = 0;
    }

    #[inline]
    fn valid(&self) -> bool {
        self.upstream.valid()
    }

    fn key(&self) -> Option<usize> {
        self.valid().then_some(self.position)
    }

    fn value(&self) -> Option<(U::Key, U::Value)> {
        self.upstream.key().zip(self.upstream.value())
    }

    fn advance(&mut self) {
        if self.valid() {
            self.upstream.advance();
            self.position += 1;
        }
    }
}

impl<U: Cursor> Stage<U> for EntryComposeStage<U> {
    type Args = ();

    fn attach(upstream: U, (): ()) -> Self {
        Self {
            upstream,
            position: 0,
        }
    }
}

// =============================================================================
// EntryDecomposeStage
// =============================================================================

/// Splits upstream `(key, value)` pair values back into keys and values.
///
/// The upstream pair is read once per position.
pub struct EntryDecomposeStage<U: Cursor> {
    upstream: U,
    current: Option<U::Value>,
}

impl<U> Clone for EntryDecomposeStage<U>
where
    U: Cursor + Clone,
    U::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            current: self.current.clone(),
        }
    }
}

impl<U> fmt::Debug for EntryDecomposeStage<U>
where
    U: Cursor + fmt::Debug,
    U::Value: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EntryDecomposeStage")
            .field("upstream", &self.upstream)
            .field("current", &self.current)
            .finish()
    }
}

impl<U, K, V> Cursor for EntryDecomposeStage<U>
where
    U: Cursor<Value = (K, V)>,
    K: Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn reset(&mut self) {
        self.upstream.reset();
        self.current = self.upstream.value();
    }

    #[inline]
    fn valid(&self) -> bool {
        self.current.is_some()
    }

    fn key(&self) -> Option<K> {
        self.current.as_ref().map(|(key, _)| key.clone())
    }

    fn value(&self) -> Option<V> {
        self.current.as_ref().map(|(_, value)| value.clone())
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.upstream.advance();
            self.current = self.upstream.value();
        }
    }
}

impl<U, K, V> Stage<U> for EntryDecomposeStage<U>
where
    U: Cursor<Value = (K, V)>,
    K: Clone,
    V: Clone,
{
    type Args = ();

    fn attach(upstream: U, (): ()) -> Self {
        Self {
            upstream,
            current: None,
        }
    }
}

// =============================================================================
// FlipStage
// =============================================================================

/// Swaps keys and values.
///
/// Values become keys as they are; any uniqueness or comparability the
/// consumer needs is checked by that consumer, not here.
#[derive(Debug, Clone)]
pub struct FlipStage<U> {
    upstream: U,
}

impl<U: Cursor> Cursor for FlipStage<U> {
    type Key = U::Value;
    type Value = U::Key;

    #[inline]
    fn reset(&mut self) {
        self.upstream.reset();
    }

    #[inline]
    fn valid(&self) -> bool {
        self.upstream.valid()
    }

    fn key(&self) -> Option<U::Value> {
        self.upstream.value()
    }

    fn value(&self) -> Option<U::Key> {
        self.upstream.key()
    }

    #[inline]
    fn advance(&mut self) {
        self.upstream.advance();
    }
}

impl<U: Cursor> Stage<U> for FlipStage<U> {
    type Args = ();

    fn attach(upstream: U, (): ()) -> Self {
        Self { upstream }
    }
}
