//! Command implementations
//!
//! Only read-only plumbing commands exist: they decode objects from the
//! database and print them the way git does.

pub mod plumbing;
