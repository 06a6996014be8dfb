// src/format/mod.rs

//! Format-specific decoding and encoding of manifest files.
//!
//! Responsibilities:
//! - Load a file into a generic mapping, dispatching on extension (`loader.rs`).
//! - Serialize a generic mapping back to TOML text (`writer.rs`).
//!
//! Decoding is purely syntactic; schema interpretation lives in `schema`.

pub mod loader;
pub mod writer;

pub use loader::load_any;
pub use writer::{dump_toml, toml_destination};
