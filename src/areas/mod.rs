//! Core repository components
//!
//! - `database`: Object reader over the loose object store
//! - `repository`: Repository discovery and command output

pub mod database;
pub mod repository;
