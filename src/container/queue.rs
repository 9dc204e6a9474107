//! A list with a configured insertion and removal direction.

use std::fmt;
use std::str::FromStr;

use super::{SequenceStorage, dense_iterable};
use crate::Iterable;
use crate::error::{CollectionError, Result};

// =============================================================================
// Direction
// =============================================================================

/// Which ends of a [`Queue`] insertion and removal use.
///
/// The first letter names the insertion end (`L`ast: append, `F`irst:
/// prepend), the second the removal end (`LO`: from the end, `FO`: from the
/// front).
///
/// | Direction | `enqueue` | `dequeue`       |
/// |-----------|-----------|-----------------|
/// | `Lifo`    | append    | from the front  |
/// | `Fifo`    | prepend   | from the front  |
/// | `Lilo`    | append    | from the end    |
/// | `Filo`    | prepend   | from the end    |
///
/// # Examples
///
/// ```rust
/// use catena::Direction;
///
/// assert_eq!("FILO".parse::<Direction>(), Ok(Direction::Filo));
/// assert_eq!(Direction::try_from(1), Ok(Direction::Fifo));
/// assert!(Direction::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Insert at the end, remove from the front.
    #[default]
    Lifo,
    /// Insert at the front, remove from the front.
    Fifo,
    /// Insert at the end, remove from the end.
    Lilo,
    /// Insert at the front, remove from the end.
    Filo,
}

impl Direction {
    /// All directions, in code order.
    pub const ALL: [Self; 4] = [Self::Lifo, Self::Fifo, Self::Lilo, Self::Filo];

    /// Returns the numeric code of this direction (`0..=3`).
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Lifo => 0,
            Self::Fifo => 1,
            Self::Lilo => 2,
            Self::Filo => 3,
        }
    }

    /// Returns the upper-case name of this direction.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lifo => "LIFO",
            Self::Fifo => "FIFO",
            Self::Lilo => "LILO",
            Self::Filo => "FILO",
        }
    }

    const fn inserts_at_end(self) -> bool {
        matches!(self, Self::Lifo | Self::Lilo)
    }

    const fn removes_from_end(self) -> bool {
        matches!(self, Self::Lilo | Self::Filo)
    }
}

impl TryFrom<u8> for Direction {
    type Error = CollectionError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.code() == code)
            .ok_or_else(|| {
                tracing::debug!(code, "rejected unknown queue direction code");
                CollectionError::invalid_argument(format!("unknown queue direction code {code}"))
            })
    }
}

impl FromStr for Direction {
    type Err = CollectionError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                tracing::debug!(name, "rejected unknown queue direction name");
                CollectionError::invalid_argument(format!("unknown queue direction {name:?}"))
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Queue
// =============================================================================

/// A dense list whose [`Direction`] decides where `enqueue` inserts and where
/// `dequeue` removes.
///
/// # Examples
///
/// ```rust
/// use catena::{Direction, Queue};
///
/// let mut queue = Queue::with_direction(['a', 'b', 'c', 'd'], Direction::Filo);
/// queue.enqueue('e');
/// assert_eq!(queue.as_slice(), &['e', 'a', 'b', 'c', 'd']);
/// assert_eq!(queue.dequeue(), Ok('d'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    storage: SequenceStorage<T>,
    direction: Direction,
}

impl<T> Queue<T> {
    /// Creates an empty [`Direction::Lifo`] queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: SequenceStorage::new(),
            direction: Direction::Lifo,
        }
    }

    /// Creates a queue holding `items` in order, operating in `direction`.
    pub fn with_direction<I>(items: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            storage: items.into_iter().collect(),
            direction,
        }
    }

    /// Creates a queue from a numeric direction code.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `code` is not one of
    /// the four direction codes; nothing is constructed in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::{CollectionError, Queue};
    ///
    /// let result = Queue::try_with_direction_code(['a'], 4);
    /// assert!(matches!(result, Err(CollectionError::InvalidArgument { .. })));
    /// ```
    pub fn try_with_direction_code<I>(items: I, code: u8) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let direction = Direction::try_from(code)?;
        Ok(Self::with_direction(items, direction))
    }

    /// Creates a queue from the values of any iterable, dropping its keys.
    pub fn from_iterable<I>(source: &I, direction: Direction) -> Self
    where
        I: Iterable<Value = T>,
    {
        Self::with_direction(source.pairs().map(|(_, value)| value), direction)
    }

    /// Returns the configured direction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Inserts `item` at the end chosen by the direction.
    pub fn enqueue(&mut self, item: T) {
        if self.direction.inserts_at_end() {
            self.storage.push(item);
        } else {
            self.storage.unshift(item);
        }
    }

    /// Removes and returns the item at the end chosen by the direction.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the queue holds no items.
    pub fn dequeue(&mut self) -> Result<T> {
        let item = if self.direction.removes_from_end() {
            self.storage.pop()
        } else {
            self.storage.shift()
        };
        item.ok_or(CollectionError::Empty {
            operation: "dequeue",
        })
    }

    /// Returns the item the next `dequeue` would remove.
    pub fn peek(&self) -> Option<&T> {
        let items = self.storage.as_slice();
        if self.direction.removes_from_end() {
            items.last()
        } else {
            items.first()
        }
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

    /// Returns the items in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns the item at storage index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] if `index` holds no item.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.storage.get(index)
    }

    /// Returns `true` if storage index `index` holds an item.
    #[inline]
    pub fn has(&self, index: usize) -> bool {
        self.storage.has(index)
    }

    /// Removes every item, keeping the direction.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    #[cfg(feature = "serde")]
    pub(crate) fn replace_items(&mut self, storage: SequenceStorage<T>) {
        self.storage = storage;
    }

    #[cfg(feature = "serde")]
    pub(crate) fn into_storage(self) -> SequenceStorage<T> {
        self.storage
    }
}

dense_iterable!(Queue);

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::with_direction(items, Direction::default())
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_direction(iter, Direction::default())
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Queue<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.storage.serialize(serializer)
    }
}

/// Decodes the items only.
///
/// The direction is not part of the representation: a decoded queue is always
/// [`Direction::Lifo`], so a round trip of a queue with another direction
/// compares unequal to the original. Use
/// [`TextSerializable::deserialize_from_str`](crate::codec::TextSerializable::deserialize_from_str)
/// on an existing queue to keep its direction.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Queue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let storage = SequenceStorage::deserialize(deserializer)?;
        Ok(Self {
            storage,
            direction: Direction::default(),
        })
    }
}
