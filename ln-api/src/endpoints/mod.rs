//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods (or, for `keys`, free functions) for a
//! group of related service endpoints.

pub mod files;
pub mod keys;
pub mod stats;
