//! Git data structures
//!
//! - `core`: Byte cursor and error types shared by the parsers
//! - `database`: Storage and decompression collaborators
//! - `objects`: Git object types (blob, tree, commit)

pub mod core;
pub mod database;
pub mod objects;
