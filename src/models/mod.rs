//! Data model for the served file.
//!
//! Only metadata lives here; the bytes are streamed straight from disk.

pub mod asset;
