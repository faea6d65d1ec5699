//! Git tree object
//!
//! Trees represent directory snapshots in Git. They contain entries for files (blobs),
//! subdirectories (other trees) and submodules (commits), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! Entries are kept in on-disk order; this reader never re-sorts them.

use crate::artifacts::core::cursor::ByteCursor;
use crate::artifacts::core::error::{ObjectError, ObjectResult, ParseStage};
use crate::artifacts::core::quote::quote_path;
use crate::artifacts::objects::object::{Displayable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::OBJECT_ID_RAW_LENGTH;
use bytes::Bytes;
use derive_new::new;

/// Mode of a directory entry, as git writes it (no leading zero)
pub const TREE_MODE: &str = "40000";
/// Mode of a submodule entry
pub const GITLINK_MODE: &str = "160000";

/// Single entry of a tree object
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Octal permission string, e.g. `100644` or `40000`
    pub mode: String,
    /// Path segment, never containing `/` or NUL
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// Kind of object the entry points to, derived from its mode
    pub fn object_type(&self) -> ObjectType {
        match self.mode.as_str() {
            TREE_MODE => ObjectType::Tree,
            GITLINK_MODE => ObjectType::Commit,
            _ => ObjectType::Blob,
        }
    }

    pub fn is_tree(&self) -> bool {
        self.object_type() == ObjectType::Tree
    }

    fn parse(cursor: &mut ByteCursor<'_>) -> ObjectResult<Self> {
        let mode = cursor
            .take_until(b' ')
            .ok_or_else(|| ObjectError::malformed(ParseStage::Tree, "unexpected EOF in mode"))?;
        let name = cursor
            .take_until(b'\0')
            .ok_or_else(|| ObjectError::malformed(ParseStage::Tree, "unexpected EOF in name"))?;
        let oid = cursor
            .take(OBJECT_ID_RAW_LENGTH)
            .and_then(ObjectId::from_raw)
            .ok_or_else(|| {
                ObjectError::malformed(ParseStage::Tree, "unexpected EOF in object id")
            })?;

        Ok(TreeEntry::new(
            String::from_utf8_lossy(mode).into_owned(),
            String::from_utf8_lossy(name).into_owned(),
            oid,
        ))
    }
}

/// Git tree object representing a directory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> impl Iterator<Item = TreeEntry> {
        self.entries.into_iter()
    }

    /// Look up an entry by its name
    pub fn find(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Unpackable for Tree {
    fn deserialize(body: Bytes) -> ObjectResult<Self> {
        let mut cursor = ByteCursor::new(&body);
        let mut entries = Vec::new();

        while !cursor.is_empty() {
            let entry = TreeEntry::parse(&mut cursor)?;
            tracing::trace!(mode = %entry.mode, name = %entry.name, oid = %entry.oid, "tree entry");
            entries.push(entry);
        }

        Ok(Tree::new(entries))
    }
}

impl Displayable for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> Bytes {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{:0>6} {} {}\t{}\n",
                    entry.mode,
                    entry.object_type(),
                    entry.oid,
                    quote_path(&entry.name)
                )
            })
            .collect::<String>()
            .into()
    }
}
