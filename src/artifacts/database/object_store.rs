use crate::artifacts::core::error::{ObjectError, ObjectResult};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::Path;

/// Key-addressed storage of compressed object records
pub trait ObjectStore: Send + Sync {
    /// Fetch the compressed record stored under `oid`
    fn get(&self, oid: &ObjectId) -> ObjectResult<Bytes>;

    fn contains(&self, oid: &ObjectId) -> bool;
}

/// Loose objects laid out as `<objects>/<xx>/<38 hex chars>`
#[derive(Debug)]
pub struct LooseObjectStore {
    path: Box<Path>,
}

impl LooseObjectStore {
    pub fn new(path: Box<Path>) -> Self {
        LooseObjectStore { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }
}

impl ObjectStore for LooseObjectStore {
    fn get(&self, oid: &ObjectId) -> ObjectResult<Bytes> {
        let object_path = self.path.join(oid.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ObjectError::NotFound(*oid))
            }
            Err(source) => Err(ObjectError::Storage { oid: *oid, source }),
        }
    }

    fn contains(&self, oid: &ObjectId) -> bool {
        self.path.join(oid.to_path()).is_file()
    }
}

/// In-memory store of compressed records
#[derive(Debug, Default, Clone)]
pub struct MemoryObjectStore {
    objects: HashMap<ObjectId, Bytes>,
}

impl MemoryObjectStore {
    pub fn insert(&mut self, oid: ObjectId, compressed: impl Into<Bytes>) {
        self.objects.insert(oid, compressed.into());
    }
}

impl FromIterator<(ObjectId, Bytes)> for MemoryObjectStore {
    fn from_iter<T: IntoIterator<Item = (ObjectId, Bytes)>>(iter: T) -> Self {
        MemoryObjectStore {
            objects: iter.into_iter().collect(),
        }
    }
}

impl ObjectStore for MemoryObjectStore {
    fn get(&self, oid: &ObjectId) -> ObjectResult<Bytes> {
        self.objects
            .get(oid)
            .cloned()
            .ok_or(ObjectError::NotFound(*oid))
    }

    fn contains(&self, oid: &ObjectId) -> bool {
        self.objects.contains_key(oid)
    }
}
