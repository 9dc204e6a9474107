//! Stages driven by caller-supplied callbacks.
//!
//! Callbacks are held behind [`ReferenceCounter`] so that cloning a chain
//! never requires the closure itself to be `Clone`.

use std::fmt;

use super::{Cursor, ReferenceCounter, Stage};

// =============================================================================
// MapStage
// =============================================================================

/// Replaces each value with `mapper(value, key)`; keys pass through.
///
/// The mapper runs each time the value at a position is read, never ahead
/// of a terminal operation.
pub struct MapStage<U, F> {
    upstream: U,
    mapper: ReferenceCounter<F>,
}

impl<U, F> MapStage<U, F> {
    /// Wraps `upstream` with `mapper`.
    #[must_use]
    pub fn new(upstream: U, mapper: F) -> Self {
        Self {
            upstream,
            mapper: ReferenceCounter::new(mapper),
        }
    }
}

impl<U: Clone, F> Clone for MapStage<U, F> {
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            mapper: ReferenceCounter::clone(&self.mapper),
        }
    }
}

impl<U: fmt::Debug, F> fmt::Debug for MapStage<U, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MapStage")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<U, F, B> Cursor for MapStage<U, F>
where
    U: Cursor,
    F: Fn(U::Value, U::Key) -> B,
{
    type Key = U::Key;
    type Value = B;

    #[inline]
    fn reset(&mut self) {
        self.upstream.reset();
    }

    #[inline]
    fn valid(&self) -> bool {
        self.upstream.valid()
    }

    #[inline]
    fn key(&self) -> Option<U::Key> {
        self.upstream.key()
    }

    fn value(&self) -> Option<B> {
        let value = self.upstream.value()?;
        let key = self.upstream.key()?;
        Some((self.mapper)(value, key))
    }

    #[inline]
    fn advance(&mut self) {
        self.upstream.advance();
    }
}

impl<U, F, B> Stage<U> for MapStage<U, F>
where
    U: Cursor,
    F: Fn(U::Value, U::Key) -> B,
{
    type Args = F;

    fn attach(upstream: U, mapper: F) -> Self {
        Self::new(upstream, mapper)
    }
}

// =============================================================================
// FilterStage
// =============================================================================

/// Skips positions for which `predicate(&value, &key)` is `false`.
///
/// Retained positions keep their upstream keys, so filtering a list leaves
/// gaps in its indices. The accepted entry is read from upstream once and
/// kept until the next advance, so an upstream [`MapStage`] runs its mapper
/// once per position no matter how many filters follow it.
pub struct FilterStage<U: Cursor, P> {
    upstream: U,
    predicate: ReferenceCounter<P>,
    current: Option<(U::Key, U::Value)>,
}

impl<U: Cursor, P> FilterStage<U, P> {
    /// Wraps `upstream` with `predicate`.
    #[must_use]
    pub fn new(upstream: U, predicate: P) -> Self {
        Self {
            upstream,
            predicate: ReferenceCounter::new(predicate),
            current: None,
        }
    }
}

impl<U, P> FilterStage<U, P>
where
    U: Cursor,
    P: Fn(&U::Value, &U::Key) -> bool,
{
    fn skip_rejected(&mut self) {
        self.current = None;
        while let (Some(key), Some(value)) = (self.upstream.key(), self.upstream.value()) {
            if (self.predicate)(&value, &key) {
                self.current = Some((key, value));
                return;
            }
            self.upstream.advance();
        }
    }
}

impl<U, P> Clone for FilterStage<U, P>
where
    U: Cursor + Clone,
    U::Key: Clone,
    U::Value: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            predicate: ReferenceCounter::clone(&self.predicate),
            current: self.current.clone(),
        }
    }
}

impl<U: Cursor + fmt::Debug, P> fmt::Debug for FilterStage<U, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FilterStage")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<U, P> Cursor for FilterStage<U, P>
where
    U: Cursor,
    U::Key: Clone,
    U::Value: Clone,
    P: Fn(&U::Value, &U::Key) -> bool,
{
    type Key = U::Key;
    type Value = U::Value;

    fn reset(&mut self) {
        self.upstream.reset();
        self.skip_rejected();
    }

    #[inline]
    fn valid(&self) -> bool {
        self.current.is_some()
    }

    fn key(&self) -> Option<U::Key> {
        self.current.as_ref().map(|(key, _)| key.clone())
    }

    fn value(&self) -> Option<U::Value> {
        self.current.as_ref().map(|(_, value)| value.clone())
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.upstream.advance();
            self.skip_rejected();
        }
    }
}

impl<U, P> Stage<U> for FilterStage<U, P>
where
    U: Cursor,
    U::Key: Clone,
    U::Value: Clone,
    P: Fn(&U::Value, &U::Key) -> bool,
{
    type Args = P;

    fn attach(upstream: U, predicate: P) -> Self {
        Self::new(upstream, predicate)
    }
}
