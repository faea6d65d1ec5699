//! Core utilities and shared types
//!
//! This module contains the pieces shared by every object parser:
//!
//! - `cursor`: Byte cursor over a decompressed record
//! - `error`: Error taxonomy of the object reader
//! - `quote`: C-style quoting of paths for display

pub mod cursor;
pub mod error;
pub mod quote;
