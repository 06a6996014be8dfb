// src/lib.rs

pub mod cli;
pub mod commands;
pub mod errors;
pub mod format;
pub mod logging;
pub mod overlay;
pub mod schema;

use anyhow::Result;
use serde_json::Value;
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::commands::FieldReport;
use crate::schema::fields::FieldSpec;

/// High-level entry point used by `main.rs`.
///
/// Dispatches one subcommand onto `commands` and prints the user-facing
/// result. Errors propagate to `main`, which reports them and exits
/// nonzero.
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Validate { path } => {
            let cfg = commands::validate_file(&path)?;
            println!("configuration is valid");
            println!(
                "resolution = {}",
                cfg.resolution.map_or("(unset)", |r| r.as_str())
            );
        }

        Command::Set { path, key, value } => {
            let dest = commands::set_value(&path, &key, &value)?;
            println!("parameter set, written to {}", dest.display());
        }

        Command::Init { dest } => {
            commands::init(&dest)?;
            println!("created {}", dest.display());
        }

        Command::Param { name } => {
            let spec = commands::describe(&name)?;
            print_field_spec(spec);
        }

        Command::Merge {
            yaml_file,
            toml_file,
            no_merge,
        } => {
            let cfg = commands::merge_files(&yaml_file, &toml_file, !no_merge)?;
            debug!(?cfg, "merged configuration validated");
            println!("configuration written to {}", toml_file.display());
        }

        Command::Annotate { path } => {
            let reports = commands::annotate(&path)?;
            for report in &reports {
                print_field_report(report);
            }
        }
    }

    Ok(())
}

fn print_field_spec(spec: &FieldSpec) {
    println!("{}: {}", spec.name, spec.kind.describe());
    if let Some(alias) = spec.alias {
        println!("  alias: {alias}");
    }
    if let Some(choices) = spec.kind.choices() {
        println!("  allowed values: {}", choices.join(", "));
    }
    if let Some(default) = spec.default {
        println!("  default: {default}");
    }
    println!("  {}", spec.description);
}

fn print_field_report(report: &FieldReport) {
    let spec = report.field;
    println!("{}", spec.name);
    println!("  type: {}", spec.kind.describe());
    if let Some(choices) = spec.kind.choices() {
        println!("  allowed values: {}", choices.join(", "));
    }
    if let Some(default) = spec.default {
        println!("  default: {default}");
    }
    println!("  {}", spec.description);

    match &report.value {
        Some(value) => println!("  value: {}", display_value(value)),
        None => match spec.default {
            Some(default) => println!("  value: {default} (default)"),
            None => println!("  value: (unset)"),
        },
    }
}

/// Render a value for terminal output: strings bare, everything else as
/// compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
