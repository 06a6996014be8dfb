// src/commands.rs

//! Command implementations.
//!
//! Each operation is a single load → validate → act unit over one manifest.
//! Nothing is written until validation has passed, so a failing command
//! always leaves the file as it found it. Printing is left to `run` in
//! `lib.rs`; these functions return data.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use tracing::debug;

use crate::errors::{Result, UvconfError};
use crate::format::{dump_toml, load_any, toml_destination};
use crate::overlay;
use crate::schema::fields::{self, FieldSpec};
use crate::schema::model::ToolUv;
use crate::schema::validate::{uv_section, validate_document, validate_tool_uv};

/// Load and validate a manifest, returning the typed `[tool.uv]` section.
pub fn validate_file(path: impl AsRef<Path>) -> Result<ToolUv> {
    let doc = load_any(&path)?;
    validate_document(&doc)
}

/// Assign `tool.uv.<key> = <value>` in a manifest and write it back as TOML.
///
/// The value is stored as a string; re-validation decides whether it fits
/// the field. The `tool` and `uv` tables are created when missing. Returns
/// the path actually written: the manifest itself for TOML sources, a
/// sibling `.toml` file otherwise.
pub fn set_value(path: impl AsRef<Path>, key: &str, value: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut doc = load_any(path)?;

    let uv = uv_table_mut(&mut doc)?;
    uv.insert(key.to_string(), Value::String(value.to_string()));

    validate_document(&doc)?;

    let dest = toml_destination(path);
    dump_toml(&doc, &dest)?;
    debug!(key, value, dest = ?dest, "parameter written");
    Ok(dest)
}

/// Write a fresh manifest whose `[tool.uv]` holds only the field defaults.
pub fn init(dest: impl AsRef<Path>) -> Result<()> {
    let defaults = ToolUv::init_defaults().to_table()?;
    let doc = json!({ "tool": { "uv": defaults } });
    dump_toml(&doc, dest)
}

/// Merge `[tool.uv]` overrides from a YAML file over the field defaults and
/// write the result to a TOML manifest.
///
/// With `merge_enabled` the override table is combined recursively with the
/// defaults; without it, each override key replaces the default wholesale.
/// A missing `[tool.uv]` section in the override file means no overrides.
pub fn merge_files(
    yaml_file: impl AsRef<Path>,
    toml_dest: impl AsRef<Path>,
    merge_enabled: bool,
) -> Result<ToolUv> {
    let mut merged = ToolUv::init_defaults().to_table()?;
    let overrides = load_overrides(yaml_file.as_ref())?;

    if merge_enabled {
        overlay::deep_merge(&mut merged, &overrides);
    } else {
        overlay::shallow_merge(&mut merged, &overrides);
    }

    let merged = Value::Object(merged);
    let cfg = validate_tool_uv(&merged)?;

    let doc = json!({ "tool": { "uv": merged } });
    dump_toml(&doc, toml_dest.as_ref())?;
    Ok(cfg)
}

/// Look one field up by canonical or alternate name.
pub fn describe(name: &str) -> Result<&'static FieldSpec> {
    fields::lookup(name).ok_or_else(|| UvconfError::UnknownField(name.to_string()))
}

/// One row of `annotate` output: a declared field and the value currently
/// present in the inspected manifest, if any.
#[derive(Debug, Clone)]
pub struct FieldReport {
    pub field: &'static FieldSpec,
    pub value: Option<Value>,
}

/// Validate a manifest and report every declared field alongside its
/// current value.
pub fn annotate(path: impl AsRef<Path>) -> Result<Vec<FieldReport>> {
    let doc = load_any(&path)?;
    validate_document(&doc)?;

    let uv = uv_section(&doc)?;
    let empty = Map::new();
    let table = uv.as_object().unwrap_or(&empty);

    let reports = fields::FIELDS
        .iter()
        .map(|spec| FieldReport {
            field: spec,
            value: table
                .get(spec.name)
                .or_else(|| spec.alias.and_then(|alias| table.get(alias)))
                .cloned(),
        })
        .collect();

    Ok(reports)
}

/// Walk (and create where missing) the `tool.uv` tables of a document.
fn uv_table_mut(doc: &mut Value) -> Result<&mut Map<String, Value>> {
    let root = as_table_mut("document", doc)?;
    let tool = root
        .entry("tool")
        .or_insert_with(|| Value::Object(Map::new()));
    let tool = as_table_mut("tool", tool)?;
    let uv = tool
        .entry("uv")
        .or_insert_with(|| Value::Object(Map::new()));
    as_table_mut("tool.uv", uv)
}

fn as_table_mut<'a>(path: &str, value: &'a mut Value) -> Result<&'a mut Map<String, Value>> {
    match value {
        Value::Object(table) => Ok(table),
        other => Err(UvconfError::validation(path, "expected a table", other)),
    }
}

fn load_overrides(path: &Path) -> Result<Map<String, Value>> {
    let doc = load_any(path)?;
    match uv_section(&doc) {
        Ok(value) => match value.as_object() {
            Some(table) => Ok(table.clone()),
            None => Err(UvconfError::validation("tool.uv", "expected a table", value)),
        },
        Err(UvconfError::MissingSection) => Ok(Map::new()),
        Err(err) => Err(err),
    }
}
