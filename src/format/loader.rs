// src/format/loader.rs

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::{Result, UvconfError};

/// Load a manifest from a given path into a generic nested mapping.
///
/// The format is decided strictly by file extension:
///
/// - `.toml` — TOML
/// - `.yml` / `.yaml` — YAML (plain scalars, maps and sequences only;
///   `serde_yaml` has no arbitrary type construction)
/// - `.json` — JSON
///
/// Anything else is an unsupported-format error. This only decodes; it does
/// **not** interpret or validate contents. Use `schema::validate_document`
/// for that.
pub fn load_any(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("")
        .to_ascii_lowercase();

    let contents = fs::read_to_string(path)?;

    let doc: Value = match extension.as_str() {
        "toml" => toml::from_str(&contents)?,
        "yml" | "yaml" => serde_yaml::from_str(&contents)?,
        "json" => serde_json::from_str(&contents)?,
        _ => {
            return Err(UvconfError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }
    };

    debug!(?path, format = %extension, "manifest decoded");
    Ok(doc)
}
