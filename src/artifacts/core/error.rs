use crate::artifacts::objects::object_id::ObjectId;
use thiserror::Error;

/// Parser stage that rejected a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// The `<type> <size>\0` prefix of every object
    Header,
    Tree,
    Commit,
    /// Author or committer line of a commit
    Signature,
}

impl std::fmt::Display for ParseStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            ParseStage::Header => "header",
            ParseStage::Tree => "tree",
            ParseStage::Commit => "commit",
            ParseStage::Signature => "signature",
        };
        write!(f, "{stage}")
    }
}

#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("object {0} not found")]
    NotFound(ObjectId),
    #[error("unable to read object {oid}")]
    Storage {
        oid: ObjectId,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decompress object content")]
    Decompression(#[source] std::io::Error),
    #[error("malformed {stage} record: {reason}")]
    MalformedRecord { stage: ParseStage, reason: String },
}

impl ObjectError {
    pub fn malformed(stage: ParseStage, reason: impl Into<String>) -> Self {
        ObjectError::MalformedRecord {
            stage,
            reason: reason.into(),
        }
    }

    /// Stage that rejected the record, if this is a grammar error
    pub fn stage(&self) -> Option<ParseStage> {
        match self {
            ObjectError::MalformedRecord { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

pub type ObjectResult<T> = Result<T, ObjectError>;
