// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - project automation
//!
//! - `cargo xtask ci` lints, builds and tests the workspace
//! - `cargo xtask snapshot` regenerates the JSON period snapshots under
//!   `snapshots/`; `--check` fails if a file is missing or stale. The
//!   tree is not committed until it has been generated once
//!
//! Snapshots run the `periodgen` binary with a pinned `--today`, so they only
//! change when generation rules change.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, fs, io, process::Output};

use cargo_metadata::{camino::Utf8PathBuf, MetadataCommand};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{bail, Context},
    Result,
};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Gregorian date every snapshot treats as today.
const SNAPSHOT_TODAY: &str = "2024-06-15";

const SNAPSHOT_CALENDARS: [&str; 2] = ["gregorian", "ethiopian"];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Regenerate the period snapshots
    #[command(visible_alias = "s")]
    Snapshot {
        /// Compare against the committed snapshots instead of writing them
        #[arg(long)]
        check: bool,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::Snapshot { check } => snapshot(check),
        }
    }
}

/// Run CI checks (lint, build, test)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without warnings for every default package
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env("RUSTDOCFLAGS", "-D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo(vec!["fmt", "--all"])
}

/// Run unit, scenario and doc tests
fn test() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])?;
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Generate `snapshots/<calendar>/<kind>.json` for every calendar and
/// period type, or verify them when `check` is set.
fn snapshot(check: bool) -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;
    let root: Utf8PathBuf = meta.workspace_root.join("snapshots");
    if check && !root.is_dir() {
        bail!("no snapshots under {root}, run `cargo xtask snapshot` first");
    }

    run_cargo(vec!["build", "--quiet", "--package", "periodgen-cli"])?;
    let binary: Utf8PathBuf = meta.target_directory.join("debug").join("periodgen");

    let kinds: String = cmd!(binary.as_std_path(), "kinds")
        .stdout_capture()
        .read()
        .wrap_err("failed to list period types")?;
    let kinds: Vec<String> =
        serde_json::from_str(&kinds).wrap_err("failed to parse period type list")?;

    let mut stale: Vec<Utf8PathBuf> = Vec::new();
    let mut missing: Vec<Utf8PathBuf> = Vec::new();
    for calendar in SNAPSHOT_CALENDARS {
        let dir = root.join(calendar);
        if !check {
            fs::create_dir_all(&dir).wrap_err_with(|| format!("failed to create {dir}"))?;
        }

        for kind in &kinds {
            let path = dir.join(format!("{kind}.json"));
            let output: String = cmd!(
                binary.as_std_path(),
                "--today",
                SNAPSHOT_TODAY,
                "--calendar",
                calendar,
                "generate",
                kind
            )
            .stdout_capture()
            .read()
            .wrap_err_with(|| format!("failed to generate {calendar} {kind}"))?;

            if check {
                let existing = fs::read_to_string(&path).ok();
                match compare_snapshot(existing.as_deref(), &output) {
                    SnapshotState::Fresh => (),
                    SnapshotState::Stale => stale.push(path),
                    SnapshotState::Missing => missing.push(path),
                }
            } else {
                fs::write(&path, format!("{output}\n"))
                    .wrap_err_with(|| format!("failed to write {path}"))?;
                tracing::debug!("wrote {path}");
            }
        }
    }

    if !stale.is_empty() || !missing.is_empty() {
        for path in &missing {
            tracing::error!("missing snapshot: {path}");
        }
        for path in &stale {
            tracing::error!("stale snapshot: {path}");
        }
        bail!(
            "{} snapshot(s) missing and {} out of date, run `cargo xtask snapshot`",
            missing.len(),
            stale.len()
        );
    }

    tracing::info!(
        "{} {} snapshot(s)",
        if check { "verified" } else { "wrote" },
        kinds.len() * SNAPSHOT_CALENDARS.len()
    );
    Ok(())
}

/// How freshly generated output compares with a snapshot on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SnapshotState {
    Fresh,
    Stale,
    Missing,
}

/// Trailing whitespace is ignored.
fn compare_snapshot(existing: Option<&str>, output: &str) -> SnapshotState {
    match existing {
        None => SnapshotState::Missing,
        Some(existing) if existing.trim_end() == output.trim_end() => SnapshotState::Fresh,
        Some(_) => SnapshotState::Stale,
    }
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
