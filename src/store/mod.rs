//! Persistence for serialized objects, keyed by object ID.
//!
//! ## Design Goals
//!
//! Minigit intends to allow objects to be stored in multiple different mechanisms.
//! It includes an on-disk store that uses the same loose-object layout as
//! command-line git (see `minigit::store::OnDisk`) and an in-memory store
//! for tests and embedding (`minigit::store::InMemory`).

use crate::object::{codec, encode_blob, Id, Object};
use crate::Result;

mod memory;
pub use memory::InMemory;

mod on_disk;
pub use on_disk::{OnDisk, GIT_DIR_NAME};

/// A struct that implements the `ObjectStore` trait represents a particular
/// mechanism for storing compressed, serialized objects.
///
/// The required methods on this trait are the primitive key-value operations
/// for a given storage architecture. Implementations never interpret the bytes
/// they hold.
///
/// The provided methods compose those primitives with the object model and the
/// codec. `persist` and `persist_blob` are the only paths by which encoded
/// objects reach storage.
pub trait ObjectStore {
    /// Stores compressed bytes under `id`.
    ///
    /// If an entry for `id` already exists, nothing is written and the existing
    /// bytes are not re-verified.
    fn put(&mut self, id: &Id, compressed: &[u8]) -> Result<()>;

    /// Returns the compressed bytes stored under `id`.
    ///
    /// Fails with `Error::ObjectNotFound` if there is no such entry.
    fn get(&self, id: &Id) -> Result<Vec<u8>>;

    /// Returns true if an entry for `id` exists.
    fn exists(&self, id: &Id) -> bool;

    /// Encodes, compresses, and stores an object. Returns its ID.
    fn persist(&mut self, object: &Object) -> Result<Id> {
        let (id, serialized) = object.encode();
        self.put_serialized(&id, &serialized)?;
        Ok(id)
    }

    /// Stores raw bytes as a blob without copying them into an `Object` first.
    fn persist_blob(&mut self, content: &[u8]) -> Result<Id> {
        let (id, serialized) = encode_blob(content);
        self.put_serialized(&id, &serialized)?;
        Ok(id)
    }

    /// Compresses and stores an already serialized object.
    ///
    /// Skips compression when the object is already present.
    fn put_serialized(&mut self, id: &Id, serialized: &[u8]) -> Result<()> {
        if self.exists(id) {
            tracing::debug!(%id, "object already stored");
            return Ok(());
        }

        let compressed = codec::compress(serialized)?;
        self.put(id, &compressed)
    }

    /// Reads, decompresses, and decodes the object stored under `id`.
    fn load(&self, id: &Id) -> Result<Object> {
        let compressed = self.get(id)?;
        let serialized = codec::decompress(&compressed)?;
        Object::decode(&serialized)
    }
}
