// src/schema/model.rs

//! Typed data model for the `[tool.uv]` section.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, UvconfError};

/// Version resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    Highest,
    Lowest,
    LowestDirect,
}

impl Resolution {
    pub const CHOICES: &'static [&'static str] = &["highest", "lowest", "lowest-direct"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "highest" => Some(Self::Highest),
            "lowest" => Some(Self::Lowest),
            "lowest-direct" => Some(Self::LowestDirect),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Highest => "highest",
            Self::Lowest => "lowest",
            Self::LowestDirect => "lowest-direct",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release handling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Prerelease {
    Allow,
    Disallow,
    IfNecessary,
    Explicit,
}

impl Prerelease {
    pub const CHOICES: &'static [&'static str] =
        &["allow", "disallow", "if-necessary", "explicit"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "allow" => Some(Self::Allow),
            "disallow" => Some(Self::Disallow),
            "if-necessary" => Some(Self::IfNecessary),
            "explicit" => Some(Self::Explicit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Disallow => "disallow",
            Self::IfNecessary => "if-necessary",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preference between uv-managed and system Python installations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PythonPreference {
    Managed,
    System,
    OnlyManaged,
    OnlySystem,
}

impl PythonPreference {
    pub const CHOICES: &'static [&'static str] =
        &["managed", "system", "only-managed", "only-system"];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "managed" => Some(Self::Managed),
            "system" => Some(Self::System),
            "only-managed" => Some(Self::OnlyManaged),
            "only-system" => Some(Self::OnlySystem),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Managed => "managed",
            Self::System => "system",
            Self::OnlyManaged => "only-managed",
            Self::OnlySystem => "only-system",
        }
    }
}

impl fmt::Display for PythonPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dependency pulled from a Git repository.
///
/// ```toml
/// [tool.uv.sources]
/// httpx = { git = "https://github.com/encode/httpx", tag = "0.27.0" }
/// ```
///
/// At most one of `tag`, `branch` and `rev` is expected to be set at a
/// time; this is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitSource {
    pub git: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// A dependency pinned to a direct artifact URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlSource {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// A dependency taken from a local path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSource {
    pub path: String,
    /// Install the path in editable mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    /// Treat the path as a buildable package rather than a virtual project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// A dependency resolved from the containing workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSource {
    pub workspace: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// A dependency installed from a named package index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSource {
    pub index: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// One dependency source, discriminated by which key is present.
///
/// An entry table must carry exactly one of `git`, `url`, `path`,
/// `workspace` or `index`; the validator rejects anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceEntry {
    Git(GitSource),
    Url(UrlSource),
    Path(PathSource),
    Workspace(WorkspaceSource),
    Index(IndexSource),
}

/// A single source or an ordered list of alternatives.
///
/// Lists express platform-conditional sources, e.g.:
///
/// ```toml
/// [tool.uv.sources]
/// torch = [
///     { index = "torch-cpu", marker = "platform_system == 'Darwin'" },
///     { index = "torch-cu121", marker = "platform_system == 'Linux'" },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceList {
    One(SourceEntry),
    Many(Vec<SourceEntry>),
}

/// The validated `[tool.uv]` table.
///
/// All declared fields are optional. Keys outside the declared set are kept
/// verbatim in `extra` and survive serialization unchanged, so documents
/// written against a newer upstream schema still round-trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolUv {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed: Option<bool>,

    #[serde(rename = "required-version", skip_serializing_if = "Option::is_none")]
    pub required_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<Prerelease>,

    #[serde(rename = "python-preference", skip_serializing_if = "Option::is_none")]
    pub python_preference: Option<PythonPreference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeMap<String, SourceList>>,

    /// Keys present in the document but not declared above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToolUv {
    /// Defaults written by `init` and used as the base layer for `merge`.
    pub fn init_defaults() -> Self {
        Self {
            package: Some(true),
            resolution: Some(Resolution::Highest),
            ..Self::default()
        }
    }

    /// Serialize into a generic table, dropping unset fields.
    pub fn to_table(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(UvconfError::validation(
                "tool.uv",
                "expected a table after serialization",
                &other,
            )),
        }
    }
}
