//! Plumbing commands (low-level Git operations)
//!
//! Plumbing commands provide direct access to Git's internal data structures.
//! They're primarily used for scripting and inspection.
//!
//! ## Commands
//!
//! - `cat-file`: Print the content, type, or size of an object
//! - `ls-tree`: List contents of a tree object

pub mod cat_file;
pub mod ls_tree;
