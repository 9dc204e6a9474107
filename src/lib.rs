//! # catena
//!
//! Chainable, lazily evaluated collections.
//!
//! ## Overview
//!
//! Every container in this crate is an ordered sequence of `(key, value)`
//! pairs. Chaining operations such as `map`, `filter`, `flip`, `keys` and
//! `values` borrow their receiver and stack one more [`stage`] on top of it;
//! nothing runs until a terminal operation (`to_vec`, `to_array`, `reduce`,
//! `join`, ...) walks the chain.
//!
//! - **Pipelines**: the [`Iterable`] trait and the [`Collection`] handle
//! - **Stages**: the [`stage::Cursor`] protocol and the built-in stages
//! - **Containers**: [`Sequence`], [`Stack`], [`Queue`], [`Set`], [`Map`]
//! - **Text serialization**: [`codec::TextSerializable`] (feature `serde`)
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every container and the
//!   [`codec`] module
//! - `arc`: share callbacks and owned entries through `Arc` instead of `Rc`,
//!   making owned pipelines `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use catena::prelude::*;
//!
//! let words = catena::sequence(["apple", "kiwi", "banana", "fig"]);
//! let long_words = words
//!     .filter(|word, _| word.len() > 3)
//!     .map(|word, _| word.to_uppercase())
//!     .values();
//!
//! assert_eq!(long_words.join_with_keys(",", "="), "0=APPLE,1=KIWI,2=BANANA");
//! assert_eq!(words.len(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use catena::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::{Collection, Iterable};
    pub use crate::container::{Direction, Map, Queue, Sequence, Set, Stack};
    pub use crate::error::{CollectionError, Result};

    #[cfg(feature = "serde")]
    pub use crate::codec::TextSerializable;
}

pub mod collection;
pub mod container;
pub mod error;
pub mod stage;

#[cfg(feature = "serde")]
pub mod codec;

pub use collection::{Collection, Iterable};
pub use container::{Direction, Map, Queue, Sequence, Set, Stack};
pub use error::{CollectionError, Result};

use stage::EntriesCursor;

/// Creates a free-standing collection owning `values`, keyed `0..n`.
///
/// # Examples
///
/// ```rust
/// use catena::Iterable;
///
/// let squares = catena::collection(1..=4).map(|value, _| value * value);
/// assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
/// ```
pub fn collection<I, T>(values: I) -> Collection<EntriesCursor<usize, T>>
where
    I: IntoIterator<Item = T>,
{
    Collection::from_values(values)
}

/// Creates a [`Sequence`] holding `values` in order.
pub fn sequence<I, T>(values: I) -> Sequence<T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Creates a [`Stack`] holding `values` from bottom to top.
pub fn stack<I, T>(values: I) -> Stack<T>
where
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect()
}

/// Creates a [`Set`] holding the distinct `values`, in first-seen order.
pub fn set<I, T>(values: I) -> Set<T>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    values.into_iter().collect()
}

/// Creates a [`Map`] from `(key, value)` entries; a repeated key keeps its
/// first position and its last value.
///
/// # Examples
///
/// ```rust
/// let map = catena::map([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(map.key_list(), &["a", "b"]);
/// assert_eq!(map.get(&"a"), Ok(&3));
/// ```
pub fn map<I, K, V>(entries: I) -> Map<K, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: PartialEq,
{
    entries.into_iter().collect()
}

/// Creates a [`Queue`] holding `values` in storage order, operating in
/// `direction`.
pub fn queue<I, T>(values: I, direction: Direction) -> Queue<T>
where
    I: IntoIterator<Item = T>,
{
    Queue::with_direction(values, direction)
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Collection<EntriesCursor<usize, i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_factories_build_each_container() {
        assert_eq!(sequence([1, 2]).as_slice(), &[1, 2]);
        assert_eq!(stack([1, 2]).peek(), Some(&2));
        assert_eq!(set([1, 1, 2]).len(), 2);
        assert_eq!(map([(1, 'a')]).get(&1), Ok(&'a'));
        assert_eq!(queue([1, 2], Direction::Filo).dequeue(), Ok(2));
        assert_eq!(collection(['x']).to_vec(), vec!['x']);
    }

    #[rstest]
    fn test_every_container_is_iterable() {
        fn total<I: Iterable<Value = i32>>(source: &I) -> i32 {
            source.reduce(|carry, value, _, _| carry + value, 0)
        }

        assert_eq!(total(&sequence([1, 2, 3])), 6);
        assert_eq!(total(&stack([1, 2, 3])), 6);
        assert_eq!(total(&set([1, 2, 3, 3])), 6);
        assert_eq!(total(&queue([1, 2, 3], Direction::Lifo)), 6);
        assert_eq!(total(&map([('a', 1), ('b', 2), ('c', 3)])), 6);
        assert_eq!(total(&collection([1, 2, 3])), 6);
    }
}
