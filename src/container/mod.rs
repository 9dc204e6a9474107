//! Containers owning their storage.
//!
//! - [`Sequence`]: a dense, index-addressed list
//! - [`Stack`]: a list operated from both ends
//! - [`Queue`]: a list with a configured insertion and removal [`Direction`]
//! - [`Set`]: a list that never holds two equal values
//! - [`Map`]: an insertion-ordered key-value store with equality lookup
//!
//! The list-shaped containers share [`SequenceStorage`]. Every container
//! implements [`Iterable`](crate::Iterable), so lazy pipelines can be built
//! directly on it.

mod map;
mod queue;
mod sequence;
mod set;
mod stack;
mod storage;

pub use map::Map;
pub use map::MapIntoIterator;
pub use map::MapIterator;
pub use queue::Direction;
pub use queue::Queue;
pub use sequence::Sequence;
pub use set::Set;
pub use stack::Stack;
pub use storage::SequenceStorage;

/// Implements [`Iterable`](crate::Iterable) and `Display` for a container
/// exposing `as_slice` and `len` over `T`.
///
/// Keys are `0..len`, so `to_array` builds the map without key lookups.
macro_rules! dense_iterable {
    ($container:ident) => {
        impl<T: Clone> $crate::Iterable for $container<T> {
            type Key = usize;
            type Value = T;
            type Cursor<'a>
                = $crate::stage::SliceCursor<'a, T>
            where
                Self: 'a;

            #[inline]
            fn cursor(&self) -> Self::Cursor<'_> {
                $crate::stage::SliceCursor::new(self.as_slice())
            }

            #[inline]
            fn count(&self) -> usize {
                self.len()
            }

            fn to_array(&self) -> $crate::Map<usize, T> {
                $crate::Map::from_distinct_parts((0..self.len()).collect(), self.as_slice().to_vec())
            }
        }

        impl<T: Clone + std::fmt::Display> std::fmt::Display for $container<T> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(&$crate::Iterable::join(self, ","))
            }
        }
    };
}

pub(crate) use dense_iterable;
