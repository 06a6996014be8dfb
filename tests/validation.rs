use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use uvconf::errors::UvconfError;
use uvconf::format::load_any;
use uvconf::schema::{validate_document, validate_tool_uv, Prerelease, Resolution, SourceEntry, SourceList};

type TestResult = Result<(), Box<dyn Error>>;

fn write_fixture(
    dir: &tempfile::TempDir,
    name: &str,
    contents: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn full_document_validates_with_typed_fields() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[project]
name = "demo"

[tool.uv]
package = true
managed = false
required-version = ">=0.4"
resolution = "lowest-direct"
prerelease = "if-necessary"
python-preference = "only-managed"

[tool.uv.sources]
httpx = { git = "https://github.com/encode/httpx", tag = "0.27.0" }
local = { path = "../local", editable = true }
"#,
    )?;

    let cfg = validate_document(&load_any(&path)?)?;

    assert_eq!(cfg.package, Some(true));
    assert_eq!(cfg.managed, Some(false));
    assert_eq!(cfg.required_version.as_deref(), Some(">=0.4"));
    assert_eq!(cfg.resolution, Some(Resolution::LowestDirect));
    assert_eq!(cfg.prerelease, Some(Prerelease::IfNecessary));
    assert_eq!(cfg.resolution.unwrap().as_str(), "lowest-direct");

    let sources = cfg.sources.as_ref().unwrap();
    match sources.get("httpx") {
        Some(SourceList::One(SourceEntry::Git(git))) => {
            assert_eq!(git.git, "https://github.com/encode/httpx");
            assert_eq!(git.tag.as_deref(), Some("0.27.0"));
        }
        other => panic!("expected a git source for httpx, got: {other:?}"),
    }
    match sources.get("local") {
        Some(SourceList::One(SourceEntry::Path(path_src))) => {
            assert_eq!(path_src.path, "../local");
            assert_eq!(path_src.editable, Some(true));
        }
        other => panic!("expected a path source for local, got: {other:?}"),
    }

    Ok(())
}

#[test]
fn wrong_scalar_type_names_the_field() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[tool.uv]
package = "yes"
"#,
    )?;

    let result = validate_document(&load_any(&path)?);
    match result {
        Err(UvconfError::Validation { field, reason, value }) => {
            assert_eq!(field, "tool.uv.package");
            assert!(reason.contains("expected a boolean"));
            assert!(value.contains("yes"));
        }
        other => panic!("expected a validation error, got: {other:?}"),
    }

    Ok(())
}

#[test]
fn enum_value_outside_allowed_set_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[tool.uv]
resolution = "fastest"
"#,
    )?;

    let result = validate_document(&load_any(&path)?);
    match result {
        Err(UvconfError::Validation { field, reason, .. }) => {
            assert_eq!(field, "tool.uv.resolution");
            assert!(reason.contains("highest"));
            assert!(reason.contains("lowest-direct"));
        }
        other => panic!("expected a validation error, got: {other:?}"),
    }

    Ok(())
}

#[test]
fn source_entry_without_kind_key_is_rejected_with_path() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[tool.uv.sources]
torch = { tag = "v1" }
"#,
    )?;

    let result = validate_document(&load_any(&path)?);
    match result {
        Err(UvconfError::Validation { field, reason, .. }) => {
            assert_eq!(field, "tool.uv.sources.torch");
            assert!(reason.contains("missing a source kind"));
        }
        other => panic!("expected a validation error, got: {other:?}"),
    }

    Ok(())
}

#[test]
fn source_entry_matching_two_shapes_is_ambiguous() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[tool.uv.sources]
torch = { git = "https://example.com/torch", path = "../torch" }
"#,
    )?;

    let result = validate_document(&load_any(&path)?);
    match result {
        Err(UvconfError::Validation { field, reason, .. }) => {
            assert_eq!(field, "tool.uv.sources.torch");
            assert!(reason.contains("ambiguous"));
            assert!(reason.contains("git"));
            assert!(reason.contains("path"));
        }
        other => panic!("expected a validation error, got: {other:?}"),
    }

    Ok(())
}

#[test]
fn source_list_errors_carry_the_element_index() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[tool.uv]
sources = { torch = [{ index = "torch-cpu" }, { marker = "os_name == 'nt'" }] }
"#,
    )?;

    let result = validate_document(&load_any(&path)?);
    match result {
        Err(UvconfError::Validation { field, .. }) => {
            assert_eq!(field, "tool.uv.sources.torch[1]");
        }
        other => panic!("expected a validation error, got: {other:?}"),
    }

    Ok(())
}

#[test]
fn alias_and_canonical_spelling_resolve_to_the_same_field() -> TestResult {
    let canonical = serde_json::json!({ "required-version": ">=0.4" });
    let alternate = serde_json::json!({ "required_version": ">=0.4" });

    let from_canonical = validate_tool_uv(&canonical)?;
    let from_alternate = validate_tool_uv(&alternate)?;

    assert_eq!(from_canonical.required_version.as_deref(), Some(">=0.4"));
    assert_eq!(from_canonical, from_alternate);
    assert!(from_canonical.extra.is_empty());

    Ok(())
}

#[test]
fn unknown_keys_land_in_the_residual_table() -> TestResult {
    let raw = serde_json::json!({
        "resolution": "lowest",
        "cache-dir": "/tmp/uv",
        "dev-dependencies": ["pytest"],
    });

    let cfg = validate_tool_uv(&raw)?;

    assert_eq!(cfg.resolution, Some(Resolution::Lowest));
    assert_eq!(cfg.extra.len(), 2);
    assert_eq!(cfg.extra["cache-dir"], serde_json::json!("/tmp/uv"));
    assert_eq!(cfg.extra["dev-dependencies"], serde_json::json!(["pytest"]));

    Ok(())
}

#[test]
fn missing_tool_uv_section_is_a_structured_error() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(
        &dir,
        "pyproject.toml",
        r#"
[project]
name = "demo"
"#,
    )?;

    let result = validate_document(&load_any(&path)?);
    assert!(matches!(result, Err(UvconfError::MissingSection)));

    Ok(())
}

#[test]
fn unsupported_extension_is_rejected_at_load_time() -> TestResult {
    let dir = tempdir()?;
    let path = write_fixture(&dir, "pyproject.ini", "[tool]\n")?;

    let result = load_any(&path);
    match result {
        Err(UvconfError::UnsupportedFormat { extension, .. }) => {
            assert_eq!(extension, "ini");
        }
        other => panic!("expected an unsupported-format error, got: {other:?}"),
    }

    Ok(())
}
