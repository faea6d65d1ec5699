use crate::artifacts::core::cursor::ByteCursor;
use crate::artifacts::core::error::ObjectResult;
use crate::artifacts::database::decompressor::{Decompressor, ZLIB_HEADER_LENGTH, ZlibDecompressor};
use crate::artifacts::database::object_store::{LooseObjectStore, ObjectStore};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::{ObjectHeader, ObjectType};
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;
use std::path::Path;

/// Read-only view of the object database
///
/// Every call loads, inflates and parses its own copy of the record; nothing
/// is cached between calls.
pub struct Database {
    store: Box<dyn ObjectStore>,
    decompressor: Box<dyn Decompressor>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

impl Database {
    /// Open the loose objects stored under `path` (usually `.git/objects`)
    pub fn new(path: Box<Path>) -> Self {
        Self::with_collaborators(
            Box::new(LooseObjectStore::new(path)),
            Box::new(ZlibDecompressor),
        )
    }

    pub fn with_collaborators(
        store: Box<dyn ObjectStore>,
        decompressor: Box<dyn Decompressor>,
    ) -> Self {
        Database {
            store,
            decompressor,
        }
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.store.contains(object_id)
    }

    /// Load and decompress an object, header included
    pub fn load(&self, object_id: &ObjectId) -> ObjectResult<Bytes> {
        let compressed = self.store.get(object_id)?;

        self.decompressor.inflate(&compressed, ZLIB_HEADER_LENGTH)
    }

    /// Load an object and decode it according to its type tag
    pub fn read_object(&self, object_id: &ObjectId) -> ObjectResult<Object> {
        let object_content = self.load(object_id)?;
        let mut cursor = ByteCursor::new(&object_content);

        let header = self.parse_header(object_id, &mut cursor)?;
        let body = object_content.slice(cursor.position()..);
        let body_length = body.len();
        let object = Object::deserialize(header.object_type, body)?;

        tracing::debug!(
            oid = %object_id,
            object_type = %header.object_type,
            body_length,
            "decoded object"
        );
        Ok(object)
    }

    pub fn read_header(&self, object_id: &ObjectId) -> ObjectResult<ObjectHeader> {
        let object_content = self.load(object_id)?;

        self.parse_header(object_id, &mut ByteCursor::new(&object_content))
    }

    pub fn read_object_type(&self, object_id: &ObjectId) -> ObjectResult<ObjectType> {
        Ok(self.read_header(object_id)?.object_type)
    }

    pub fn read_blob(&self, object_id: &ObjectId) -> ObjectResult<Option<Blob>> {
        self.read_as(object_id, ObjectType::Blob)
    }

    pub fn read_tree(&self, object_id: &ObjectId) -> ObjectResult<Option<Tree>> {
        self.read_as(object_id, ObjectType::Tree)
    }

    pub fn read_commit(&self, object_id: &ObjectId) -> ObjectResult<Option<Commit>> {
        self.read_as(object_id, ObjectType::Commit)
    }

    /// Decode the object only if its type tag is `expected`
    fn read_as<T: Unpackable>(
        &self,
        object_id: &ObjectId,
        expected: ObjectType,
    ) -> ObjectResult<Option<T>> {
        let object_content = self.load(object_id)?;
        let mut cursor = ByteCursor::new(&object_content);

        let header = self.parse_header(object_id, &mut cursor)?;
        if header.object_type != expected {
            return Ok(None);
        }

        T::deserialize(object_content.slice(cursor.position()..)).map(Some)
    }

    fn parse_header(
        &self,
        object_id: &ObjectId,
        cursor: &mut ByteCursor<'_>,
    ) -> ObjectResult<ObjectHeader> {
        let header = ObjectType::parse_object_header(cursor)?;
        let body_length = cursor.remaining().len();

        // the declared size is informational only
        if header.declared_size != Some(body_length) {
            tracing::warn!(
                oid = %object_id,
                declared_size = ?header.declared_size,
                body_length,
                "object size does not match its header"
            );
        }

        Ok(header)
    }
}
