// src/schema/fields.rs

//! Registry of every recognized `[tool.uv]` field.
//!
//! Drives `param` lookup and `annotate` output, and routes validation onto
//! the right typed check. Lookup accepts both the canonical hyphenated
//! spelling and the underscore alternate.

use crate::schema::model::{Prerelease, PythonPreference, Resolution};

/// Declared field identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Package,
    Managed,
    RequiredVersion,
    Resolution,
    Prerelease,
    PythonPreference,
    Sources,
}

/// Declared value shape of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Bool,
    Str,
    Enum(&'static [&'static str]),
    Sources,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Str => "string",
            Self::Enum(_) => "enum",
            Self::Sources => "table of dependency sources",
        }
    }

    pub fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Enum(choices) => Some(choices),
            _ => None,
        }
    }
}

/// One recognized configuration option.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    /// Canonical (hyphenated) name as written in TOML.
    pub name: &'static str,
    /// Alternate underscore spelling, if any.
    pub alias: Option<&'static str>,
    pub kind: FieldKind,
    /// Default written by `init`, if the field has one.
    pub default: Option<&'static str>,
    pub description: &'static str,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::Package,
        name: "package",
        alias: None,
        kind: FieldKind::Bool,
        default: Some("true"),
        description: "Whether the project should be built and installed as a package.",
    },
    FieldSpec {
        field: Field::Managed,
        name: "managed",
        alias: None,
        kind: FieldKind::Bool,
        default: None,
        description: "Whether the project is managed by uv.",
    },
    FieldSpec {
        field: Field::RequiredVersion,
        name: "required-version",
        alias: Some("required_version"),
        kind: FieldKind::Str,
        default: None,
        description: "Version specifier the running uv executable must satisfy.",
    },
    FieldSpec {
        field: Field::Resolution,
        name: "resolution",
        alias: None,
        kind: FieldKind::Enum(Resolution::CHOICES),
        default: Some("highest"),
        description: "Strategy for selecting between candidate versions of a dependency.",
    },
    FieldSpec {
        field: Field::Prerelease,
        name: "prerelease",
        alias: None,
        kind: FieldKind::Enum(Prerelease::CHOICES),
        default: None,
        description: "Strategy for considering pre-release versions during resolution.",
    },
    FieldSpec {
        field: Field::PythonPreference,
        name: "python-preference",
        alias: Some("python_preference"),
        kind: FieldKind::Enum(PythonPreference::CHOICES),
        default: None,
        description: "Whether to prefer uv-managed or system Python installations.",
    },
    FieldSpec {
        field: Field::Sources,
        name: "sources",
        alias: None,
        kind: FieldKind::Sources,
        default: None,
        description: "Per-dependency overrides mapping package names to git, url, path, \
                      workspace or index sources.",
    },
];

/// Look a field up by canonical or alternate spelling.
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    FIELDS
        .iter()
        .find(|spec| spec.name == name || spec.alias == Some(name))
}
