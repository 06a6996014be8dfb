// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `uvconf`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "uvconf",
    version,
    about = "Validate and edit the [tool.uv] section of a project manifest.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `UVCONF_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands exposed by `uvconf`.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a manifest for schema violations.
    Validate {
        /// Manifest to check: pyproject.(toml|yaml|yml|json).
        path: PathBuf,
    },

    /// Set or change one parameter in [tool.uv].
    ///
    /// The value is taken as a string; validation decides whether it fits
    /// the field. Non-TOML sources are written to a sibling `.toml` file.
    Set {
        /// Manifest to edit.
        path: PathBuf,
        /// Parameter name, e.g. `resolution` or `required-version`.
        key: String,
        /// New value.
        value: String,
    },

    /// Generate a fresh manifest with default [tool.uv] settings.
    Init {
        /// Destination file.
        #[arg(default_value = "pyproject.toml")]
        dest: PathBuf,
    },

    /// Show the declared type, choices and description of one parameter.
    Param {
        /// Parameter name, canonical or underscore spelling.
        name: String,
    },

    /// Merge defaults with overrides from a YAML file into a TOML manifest.
    Merge {
        /// YAML file providing [tool.uv] overrides.
        yaml_file: PathBuf,
        /// Target TOML file.
        #[arg(default_value = "pyproject.toml")]
        toml_file: PathBuf,
        /// Replace nested values wholesale instead of merging recursively.
        #[arg(long)]
        no_merge: bool,
    },

    /// Report every declared parameter with its current value in a manifest.
    #[command(alias = "full")]
    Annotate {
        /// Manifest to inspect.
        path: PathBuf,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
