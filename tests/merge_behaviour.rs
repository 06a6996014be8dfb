use std::error::Error;
use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::tempdir;

use uvconf::commands;
use uvconf::format::load_any;
use uvconf::overlay::{deep_merge, shallow_merge};
use uvconf::schema::Resolution;

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
fn override_wins_over_defaults() -> TestResult {
    let dir = tempdir()?;
    let overrides = write_fixture(
        &dir,
        "pyproject.yaml",
        r#"
tool:
  uv:
    resolution: lowest
"#,
    )?;
    let dest = dir.path().join("pyproject.toml");

    let cfg = commands::merge_files(&overrides, &dest, true)?;

    assert_eq!(cfg.resolution, Some(Resolution::Lowest));
    // Defaults not named by the override survive.
    assert_eq!(cfg.package, Some(true));

    let doc = load_any(&dest)?;
    assert_eq!(doc["tool"]["uv"]["resolution"], json!("lowest"));
    assert_eq!(doc["tool"]["uv"]["package"], json!(true));

    Ok(())
}

#[test]
fn missing_override_section_merges_pure_defaults() -> TestResult {
    let dir = tempdir()?;
    let overrides = write_fixture(&dir, "pyproject.yaml", "project:\n  name: demo\n")?;
    let dest = dir.path().join("pyproject.toml");

    let cfg = commands::merge_files(&overrides, &dest, true)?;

    assert_eq!(cfg.package, Some(true));
    assert_eq!(cfg.resolution, Some(Resolution::Highest));

    Ok(())
}

#[test]
fn merged_output_validates_sources_from_the_override() -> TestResult {
    let dir = tempdir()?;
    let overrides = write_fixture(
        &dir,
        "pyproject.yaml",
        r#"
tool:
  uv:
    sources:
      httpx:
        git: https://github.com/encode/httpx
"#,
    )?;
    let dest = dir.path().join("pyproject.toml");

    let cfg = commands::merge_files(&overrides, &dest, true)?;
    assert!(cfg.sources.is_some());

    Ok(())
}

#[test]
fn invalid_override_fails_and_writes_nothing() -> TestResult {
    let dir = tempdir()?;
    let overrides = write_fixture(
        &dir,
        "pyproject.yaml",
        r#"
tool:
  uv:
    resolution: fastest
"#,
    )?;
    let dest = dir.path().join("pyproject.toml");

    assert!(commands::merge_files(&overrides, &dest, true).is_err());
    assert!(!dest.exists());

    Ok(())
}

#[test]
fn deep_merge_combines_nested_tables_key_by_key() {
    let mut base = json!({
        "resolution": "highest",
        "sources": { "httpx": { "path": "../httpx" } },
    });
    let overlay = json!({
        "sources": { "torch": { "index": "torch-cpu" } },
    });

    let base_map = base.as_object_mut().unwrap();
    deep_merge(base_map, overlay.as_object().unwrap());

    assert_eq!(base_map["resolution"], json!("highest"));
    assert_eq!(
        base_map["sources"],
        json!({
            "httpx": { "path": "../httpx" },
            "torch": { "index": "torch-cpu" },
        })
    );
}

#[test]
fn shallow_merge_replaces_nested_tables_wholesale() {
    let mut base = json!({
        "resolution": "highest",
        "sources": { "httpx": { "path": "../httpx" } },
    });
    let overlay = json!({
        "sources": { "torch": { "index": "torch-cpu" } },
    });

    let base_map = base.as_object_mut().unwrap();
    shallow_merge(base_map, overlay.as_object().unwrap());

    // The old nested content is gone, not combined.
    assert_eq!(base_map["resolution"], json!("highest"));
    assert_eq!(base_map["sources"], json!({ "torch": { "index": "torch-cpu" } }));
}

#[test]
fn scalar_conflicts_resolve_to_the_overlay_in_both_modes() {
    type MergeFn = fn(
        &mut serde_json::Map<String, serde_json::Value>,
        &serde_json::Map<String, serde_json::Value>,
    );

    for merge in [deep_merge as MergeFn, shallow_merge as MergeFn] {
        let mut base = json!({ "resolution": "highest" });
        let overlay = json!({ "resolution": "lowest" });

        merge(
            base.as_object_mut().unwrap(),
            overlay.as_object().unwrap(),
        );
        assert_eq!(base["resolution"], json!("lowest"));
    }
}
