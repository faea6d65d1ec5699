//! Object database collaborators
//!
//! The reader depends on two services it does not implement itself:
//!
//! - `object_store`: key-addressed storage of compressed records
//! - `decompressor`: inflation of a compressed record

pub mod decompressor;
pub mod object_store;
