// src/schema/validate.rs

//! Validation of a raw decoded document against the `[tool.uv]` schema.
//!
//! The validator walks the generic mapping produced by the format loader and
//! builds a typed [`ToolUv`], failing on the first violation with an error
//! naming the offending field path and the received value. Keys outside the
//! declared schema are never rejected; they land in the residual `extra`
//! table and round-trip unchanged.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{Result, UvconfError};
use crate::schema::fields::{self, Field};
use crate::schema::model::{
    GitSource, IndexSource, PathSource, Prerelease, PythonPreference, Resolution, SourceEntry,
    SourceList, ToolUv, UrlSource, WorkspaceSource,
};

const SECTION: &str = "tool.uv";

/// Keys that select a source shape. Exactly one must be present per entry.
const SOURCE_KINDS: &[&str] = &["git", "url", "path", "workspace", "index"];

/// Validate a whole decoded document, unwrapping its `[tool.uv]` table.
pub fn validate_document(doc: &Value) -> Result<ToolUv> {
    validate_tool_uv(uv_section(doc)?)
}

/// Extract the `[tool.uv]` table from a decoded document.
pub fn uv_section(doc: &Value) -> Result<&Value> {
    doc.get("tool")
        .and_then(|tool| tool.get("uv"))
        .ok_or(UvconfError::MissingSection)
}

/// Validate a bare `[tool.uv]` table.
pub fn validate_tool_uv(value: &Value) -> Result<ToolUv> {
    let Some(table) = value.as_object() else {
        return Err(UvconfError::validation(SECTION, "expected a table", value));
    };

    let mut cfg = ToolUv::default();
    for (key, raw) in table {
        let path = format!("{SECTION}.{key}");
        let Some(spec) = fields::lookup(key) else {
            cfg.extra.insert(key.clone(), raw.clone());
            continue;
        };
        match spec.field {
            Field::Package => cfg.package = Some(expect_bool(&path, raw)?),
            Field::Managed => cfg.managed = Some(expect_bool(&path, raw)?),
            Field::RequiredVersion => {
                cfg.required_version = Some(expect_string(&path, raw)?);
            }
            Field::Resolution => {
                cfg.resolution =
                    Some(expect_enum(&path, raw, Resolution::parse, Resolution::CHOICES)?);
            }
            Field::Prerelease => {
                cfg.prerelease =
                    Some(expect_enum(&path, raw, Prerelease::parse, Prerelease::CHOICES)?);
            }
            Field::PythonPreference => {
                cfg.python_preference = Some(expect_enum(
                    &path,
                    raw,
                    PythonPreference::parse,
                    PythonPreference::CHOICES,
                )?);
            }
            Field::Sources => cfg.sources = Some(validate_sources(&path, raw)?),
        }
    }

    Ok(cfg)
}

fn expect_bool(path: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| UvconfError::validation(path, "expected a boolean", value))
}

fn expect_string(path: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| UvconfError::validation(path, "expected a string", value))
}

fn expect_enum<T>(
    path: &str,
    value: &Value,
    parse: fn(&str) -> Option<T>,
    choices: &[&str],
) -> Result<T> {
    let s = expect_string(path, value)?;
    parse(&s).ok_or_else(|| {
        UvconfError::validation(path, format!("expected one of {}", choices.join(", ")), value)
    })
}

fn validate_sources(path: &str, value: &Value) -> Result<BTreeMap<String, SourceList>> {
    let Some(table) = value.as_object() else {
        return Err(UvconfError::validation(
            path,
            "expected a table of dependency sources",
            value,
        ));
    };

    let mut sources = BTreeMap::new();
    for (name, entry) in table {
        let entry_path = format!("{path}.{name}");
        let list = match entry {
            Value::Array(items) => {
                let mut entries = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    entries.push(validate_source_entry(&format!("{entry_path}[{idx}]"), item)?);
                }
                SourceList::Many(entries)
            }
            single => SourceList::One(validate_source_entry(&entry_path, single)?),
        };
        sources.insert(name.clone(), list);
    }

    Ok(sources)
}

fn validate_source_entry(path: &str, value: &Value) -> Result<SourceEntry> {
    let Some(table) = value.as_object() else {
        return Err(UvconfError::validation(path, "expected a source table", value));
    };

    let present: Vec<&str> = SOURCE_KINDS
        .iter()
        .copied()
        .filter(|kind| table.contains_key(*kind))
        .collect();

    match present.as_slice() {
        [] => Err(UvconfError::validation(
            path,
            format!("missing a source kind key (one of {})", SOURCE_KINDS.join(", ")),
            value,
        )),
        [kind] => decode_source(path, kind, value),
        many => Err(UvconfError::validation(
            path,
            format!("ambiguous source: matches {}", many.join(" and ")),
            value,
        )),
    }
}

fn decode_source(path: &str, kind: &str, value: &Value) -> Result<SourceEntry> {
    let entry = match kind {
        "git" => SourceEntry::Git(decode::<GitSource>(path, value)?),
        "url" => SourceEntry::Url(decode::<UrlSource>(path, value)?),
        "path" => SourceEntry::Path(decode::<PathSource>(path, value)?),
        "workspace" => SourceEntry::Workspace(decode::<WorkspaceSource>(path, value)?),
        _ => SourceEntry::Index(decode::<IndexSource>(path, value)?),
    };
    Ok(entry)
}

fn decode<T: DeserializeOwned>(path: &str, value: &Value) -> Result<T> {
    serde_json::from_value(value.clone())
        .map_err(|err| UvconfError::validation(path, err.to_string(), value))
}
