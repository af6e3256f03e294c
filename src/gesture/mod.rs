//! Bone-transform primitives and the word/letter gesture library.
//!
//! The library content is external data; the engine only defines its shape
//! and lookup rules. Keys are case-normalized to upper case at load time.

pub mod library;
pub mod model;
