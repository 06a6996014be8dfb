// src/format/writer.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;

/// Serialize a generic nested mapping to TOML text and write it to `dest`
/// in a single call.
///
/// Null-valued keys and elements are dropped first: TOML has no null, and
/// unset values have no business in the output. Everything that survives
/// re-parses to a structurally equal mapping.
pub fn dump_toml(doc: &Value, dest: impl AsRef<Path>) -> Result<()> {
    let dest = dest.as_ref();

    let mut pruned = doc.clone();
    prune_nulls(&mut pruned);

    let text = toml::to_string_pretty(&pruned)?;
    fs::write(dest, text)?;

    debug!(?dest, "manifest written");
    Ok(())
}

/// Resolve where TOML output for `source` should land: the same path when it
/// already is a `.toml` file, a sibling `.toml` file otherwise. Non-TOML
/// inputs are converted, never edited in place.
pub fn toml_destination(source: &Path) -> PathBuf {
    if source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    {
        source.to_path_buf()
    } else {
        source.with_extension("toml")
    }
}

fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                prune_nulls(v);
            }
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            for v in items.iter_mut() {
                prune_nulls(v);
            }
        }
        _ => {}
    }
}
