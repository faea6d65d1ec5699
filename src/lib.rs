//! Reader for the loose object store of a git repository
//!
//! Objects are located by their hash, inflated and decoded into blobs, trees
//! and commits. See [`areas::database::Database`] for the entry point.

pub mod areas;
pub mod artifacts;
pub mod commands;
