use crate::artifacts::core::error::ObjectResult;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use bytes::Bytes;

/// Decoding of an object body whose header has already been read
///
/// `body` shares the buffer of the decompressed record.
pub trait Unpackable {
    fn deserialize(body: Bytes) -> ObjectResult<Self>
    where
        Self: Sized;
}

/// Canonical textual form of an object, as printed by `cat-file -p`
pub trait Displayable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> Bytes;
}

/// A decoded object; exactly one kind per record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    /// Decode a body according to the type read from its header
    pub fn deserialize(object_type: ObjectType, body: Bytes) -> ObjectResult<Self> {
        match object_type {
            ObjectType::Blob => Ok(Object::Blob(Blob::deserialize(body)?)),
            ObjectType::Tree => Ok(Object::Tree(Tree::deserialize(body)?)),
            ObjectType::Commit => Ok(Object::Commit(Commit::deserialize(body)?)),
        }
    }
}

impl Displayable for Object {
    fn object_type(&self) -> ObjectType {
        match self {
            Object::Blob(blob) => blob.object_type(),
            Object::Tree(tree) => tree.object_type(),
            Object::Commit(commit) => commit.object_type(),
        }
    }

    fn display(&self) -> Bytes {
        match self {
            Object::Blob(blob) => blob.display(),
            Object::Tree(tree) => tree.display(),
            Object::Commit(commit) => commit.display(),
        }
    }
}
