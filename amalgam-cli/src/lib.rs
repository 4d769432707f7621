//! amalgam CLI: drive the merge pipeline from the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};

use amalgam_core::merge::merge;
use amalgam_core::output::{
    comment_license, render, write_report_json, MergeReport, DEFAULT_LICENSE,
};
use amalgam_core::resolve::DirResolver;
use amalgam_core::revision::{GitRevision, RevisionLookup, UNKNOWN_REVISION};

/// CLI entrypoint for amalgam.
#[derive(Debug, Parser)]
#[command(
    name = "amalgam",
    about = "Concatenate a header-only C++ library into one standalone header"
)]
pub struct Cli {
    /// Single header file output
    #[arg(value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// The main include file that declares the other files
    #[arg(long = "main", default_value = "CLI/CLI.hpp")]
    main_header: String,

    /// Directory that anchors quoted include resolution
    #[arg(long = "include", default_value = "../include", value_hint = ValueHint::DirPath)]
    include_dir: PathBuf,

    /// License file whose lines are prefixed into the preamble
    #[arg(long = "license", value_hint = ValueHint::FilePath)]
    license: Option<PathBuf>,

    /// Print a JSON summary instead of the confirmation line
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Parse CLI args and execute the merge.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_merge(&cli)
}

fn run_merge(cli: &Cli) -> Result<()> {
    let resolver = DirResolver::new(&cli.include_dir);
    let doc = merge(&resolver, &cli.main_header)?;

    let revision = GitRevision::new(".")
        .describe()
        .unwrap_or_else(|| UNKNOWN_REVISION.to_string());
    let license = load_license(cli.license.as_deref())?;

    let rendered = render(&doc, &license, &revision);
    fs::write(&cli.output, rendered)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    if cli.json {
        let report = MergeReport::new(&doc, &cli.output.display().to_string(), &revision);
        let stdout = io::stdout();
        write_report_json(&report, stdout.lock())?;
        println!();
    } else {
        println!("Created {}", cli.output.display());
    }

    Ok(())
}

fn load_license(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading license {}", path.display()))?;
            Ok(comment_license(&text))
        }
        // Without an explicit flag, pick up ./LICENSE when present and fall
        // back to the built-in license line otherwise.
        None => match fs::read_to_string("LICENSE") {
            Ok(text) => Ok(comment_license(&text)),
            Err(_) => Ok(DEFAULT_LICENSE.to_string()),
        },
    }
}
