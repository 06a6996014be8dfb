// src/schema/mod.rs

//! Schema model and validation for the `[tool.uv]` section.
//!
//! Responsibilities:
//! - Define the typed data model (`model.rs`).
//! - Describe every recognized field for lookup and annotation (`fields.rs`).
//! - Validate a raw decoded document into the typed model (`validate.rs`).

pub mod fields;
pub mod model;
pub mod validate;

pub use fields::{lookup, Field, FieldKind, FieldSpec, FIELDS};
pub use model::{
    GitSource, IndexSource, PathSource, Prerelease, PythonPreference, Resolution, SourceEntry,
    SourceList, ToolUv, UrlSource, WorkspaceSource,
};
pub use validate::{uv_section, validate_document, validate_tool_uv};
