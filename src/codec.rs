//! Text serialization of containers.
//!
//! [`TextSerializable`] turns a container into an opaque string and restores
//! it in place. The encoding is JSON, but callers should only ever hand the
//! string back to [`TextSerializable::deserialize_from_str`].
//!
//! # Examples
//!
//! ```rust
//! use catena::codec::TextSerializable;
//! use catena::{Direction, Queue, Sequence};
//!
//! let sequence = Sequence::from(vec!['a', 'b', 'c']);
//! let text = sequence.serialize_to_string().unwrap();
//!
//! let mut restored = Sequence::new();
//! restored.deserialize_from_str(&text).unwrap();
//! assert_eq!(restored, sequence);
//!
//! // A queue keeps its own direction when restoring.
//! let mut queue: Queue<char> = Queue::with_direction([], Direction::Filo);
//! queue.deserialize_from_str(&text).unwrap();
//! assert_eq!(queue.direction(), Direction::Filo);
//! assert_eq!(queue.as_slice(), &['a', 'b', 'c']);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::collection::Collection;
use crate::container::{Map, Queue, Sequence, Set, Stack};
use crate::error::{CollectionError, Result};
use crate::stage::EntriesCursor;

/// A container that can be written to and restored from text.
pub trait TextSerializable: Serialize + DeserializeOwned {
    /// Encodes the current contents.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Serialization`] if an element fails to
    /// encode, e.g. a map key that has no text form.
    fn serialize_to_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|error| CollectionError::Serialization {
            message: error.to_string(),
        })
    }

    /// Replaces the contents with the state decoded from `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Serialization`] if `text` is not a valid
    /// encoding for this container. The receiver is left untouched.
    fn deserialize_from_str(&mut self, text: &str) -> Result<()> {
        let decoded: Self = serde_json::from_str(text).map_err(|error| {
            tracing::debug!(%error, "failed to decode container text");
            CollectionError::Serialization {
                message: error.to_string(),
            }
        })?;
        tracing::trace!("restoring container from text");
        self.restore(decoded);
        Ok(())
    }

    /// Moves the decoded state into `self`.
    fn restore(&mut self, decoded: Self) {
        *self = decoded;
    }
}

impl<T: Serialize + DeserializeOwned> TextSerializable for Sequence<T> {}

impl<T: Serialize + DeserializeOwned> TextSerializable for Stack<T> {}

impl<T: Serialize + DeserializeOwned + PartialEq> TextSerializable for Set<T> {}

impl<K, V> TextSerializable for Map<K, V>
where
    K: Serialize + DeserializeOwned + PartialEq,
    V: Serialize + DeserializeOwned,
{
}

impl<K, V> TextSerializable for Collection<EntriesCursor<K, V>>
where
    K: Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
}

impl<T: Serialize + DeserializeOwned> TextSerializable for Queue<T> {
    fn restore(&mut self, decoded: Self) {
        self.replace_items(decoded.into_storage());
    }
}
