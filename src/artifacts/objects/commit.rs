//! Git commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They carry an ordered list of header fields followed by a free-text message.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//! gpgsig -----BEGIN PGP SIGNATURE-----
//!  <continuation line>
//!  -----END PGP SIGNATURE-----
//!
//! <commit message>
//! ```
//!
//! A line starting with a single space continues the value of the previous
//! header. Header order and duplicate keys (e.g. several `parent` lines) are
//! preserved as read.

use crate::artifacts::core::cursor::ByteCursor;
use crate::artifacts::core::error::{ObjectError, ObjectResult, ParseStage};
use crate::artifacts::objects::object::{Displayable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::signature::Signature;
use bytes::Bytes;
use derive_new::new;

/// Single `key value` header of a commit
///
/// A folded value keeps its lines joined by `\n`, without the leading spaces.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HeaderField {
    pub key: String,
    pub value: String,
}

/// Git commit object
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Commit {
    headers: Vec<HeaderField>,
    message: String,
}

impl Commit {
    pub fn headers(&self) -> &[HeaderField] {
        &self.headers
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `git log --oneline`)
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Value of the first header named `key`
    pub fn header(&self, key: &str) -> Option<&str> {
        self.header_values(key).next()
    }

    /// Values of every header named `key`, in record order
    pub fn header_values<'c>(&'c self, key: &str) -> impl Iterator<Item = &'c str> {
        self.headers
            .iter()
            .filter(move |field| field.key == key)
            .map(|field| field.value.as_str())
    }

    /// Get the tree object ID
    pub fn tree_oid(&self) -> ObjectResult<ObjectId> {
        let tree = self
            .header("tree")
            .ok_or_else(|| ObjectError::malformed(ParseStage::Commit, "missing tree header"))?;
        Self::parse_oid(tree)
    }

    /// Parent commit IDs (empty for a root commit, several for a merge)
    pub fn parents(&self) -> ObjectResult<Vec<ObjectId>> {
        self.header_values("parent").map(Self::parse_oid).collect()
    }

    pub fn author(&self) -> ObjectResult<Option<Signature>> {
        self.header("author").map(Signature::try_from).transpose()
    }

    pub fn committer(&self) -> ObjectResult<Option<Signature>> {
        self.header("committer").map(Signature::try_from).transpose()
    }

    fn parse_oid(value: &str) -> ObjectResult<ObjectId> {
        ObjectId::try_parse(value).map_err(|err| {
            ObjectError::malformed(ParseStage::Commit, format!("invalid object id: {err}"))
        })
    }

    fn parse_header(cursor: &mut ByteCursor<'_>, key: &[u8]) -> ObjectResult<HeaderField> {
        if cursor.next_byte() != Some(b' ') {
            return Err(ObjectError::malformed(
                ParseStage::Commit,
                format!(
                    "expected a space after header {:?}",
                    String::from_utf8_lossy(key)
                ),
            ));
        }

        let mut value = String::from_utf8_lossy(cursor.take_while(|byte| byte != b'\n'))
            .into_owned();
        cursor.next_byte();

        // fold continuation lines into the value
        while cursor.peek() == Some(b' ') {
            cursor.next_byte();
            let continuation = cursor.take_while(|byte| byte != b'\n');
            cursor.next_byte();

            value.push('\n');
            value.push_str(&String::from_utf8_lossy(continuation));
        }

        Ok(HeaderField::new(
            String::from_utf8_lossy(key).into_owned(),
            value,
        ))
    }
}

impl Unpackable for Commit {
    fn deserialize(body: Bytes) -> ObjectResult<Self> {
        let mut cursor = ByteCursor::new(&body);
        let mut headers = Vec::new();

        while !cursor.is_empty() {
            let key = cursor.take_while(|byte| byte != b' ' && byte != b'\n');

            if key.is_empty() {
                // a blank line ends the headers
                if cursor.next_byte() != Some(b'\n') {
                    return Err(ObjectError::malformed(
                        ParseStage::Commit,
                        "continuation line before any header",
                    ));
                }
                break;
            }

            let header = Self::parse_header(&mut cursor, key)?;
            tracing::trace!(key = %header.key, "commit header");
            headers.push(header);
        }

        let message = String::from_utf8_lossy(cursor.remaining()).into_owned();

        Ok(Commit::new(headers, message))
    }
}

impl Displayable for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> Bytes {
        let mut content = String::new();

        for field in &self.headers {
            content.push_str(&field.key);
            content.push(' ');
            content.push_str(&field.value.replace('\n', "\n "));
            content.push('\n');
        }
        content.push('\n');
        content.push_str(&self.message);

        content.into()
    }
}
