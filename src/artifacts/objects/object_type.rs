use crate::artifacts::core::cursor::ByteCursor;
use crate::artifacts::core::error::{ObjectError, ObjectResult, ParseStage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

/// The `<type> <size>\0` prefix of a decompressed record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeader {
    pub object_type: ObjectType,
    /// Size as written in the header; never checked against the body
    pub declared_size: Option<usize>,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Read the object header, leaving the cursor at the start of the body
    pub fn parse_object_header(cursor: &mut ByteCursor<'_>) -> ObjectResult<ObjectHeader> {
        let object_type = cursor
            .take_until(b' ')
            .ok_or_else(|| ObjectError::malformed(ParseStage::Header, "missing object type"))?;
        let object_type = String::from_utf8_lossy(object_type);

        // the size is kept for diagnostics only
        let size = cursor
            .take_until(b'\0')
            .ok_or_else(|| ObjectError::malformed(ParseStage::Header, "missing object size"))?;
        let declared_size = std::str::from_utf8(size)
            .ok()
            .and_then(|size| size.parse::<usize>().ok());

        Ok(ObjectHeader {
            object_type: ObjectType::try_from(object_type.as_ref())?,
            declared_size,
        })
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &str) -> ObjectResult<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(ObjectError::malformed(
                ParseStage::Header,
                format!("unknown object type {value:?}"),
            )),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
