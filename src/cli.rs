// src/cli.rs
//! Command-line surface and pipeline orchestration.
//!
//! The flow is: load (one file, or every `*.xml` under a directory) →
//! merge → optional suite rename (single-file mode only) → sanitize →
//! optional console report → optional XML output file.

use crate::codec;
use crate::config::Config;
use crate::discovery;
use crate::error::TidyError;
use crate::model::TestSuites;
use crate::report;
use crate::sanitize;
use anyhow::Result;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "junit-tidy")]
#[command(about = "Aggregate and sanitize JUnit XML test reports")]
pub struct Cli {
    /// Path to a JUnit XML report, or a directory walked for *.xml reports
    pub input: std::path::PathBuf,

    /// Enable verbose output
    #[arg(long, env = "VERBOSE")]
    pub verbose: bool,

    /// Suite name to set (only applies when the input holds a single suite)
    #[arg(long, env = "SUITE_NAME", default_value = "")]
    pub suite_name: String,

    /// Show a NAME/RESULT table report on stdout
    #[arg(long, env = "REPORT")]
    pub report: bool,

    /// Output file for the combined XML document (no file written if empty)
    #[arg(long, env = "OUTPUT", default_value = "")]
    pub output: String,
}

/// Runs the full pipeline for the parsed CLI arguments.
///
/// # Errors
/// Any load, rename, report or write failure propagates; the binary is
/// the only place that terminates the process.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config {
        verbose: cli.verbose,
    };

    let metadata = std::fs::metadata(&cli.input)
        .map_err(|e| TidyError::io(e, cli.input.as_path()))?;

    let mut suites = if metadata.is_dir() {
        if !cli.suite_name.is_empty() && config.verbose {
            println!("Ignoring --suite-name: renaming only applies to single-file input");
        }
        aggregate_directory(&cli.input, &config)?
    } else {
        let mut suites = codec::load_path(&cli.input, &config)?;
        if !cli.suite_name.is_empty() {
            suites.set_suite_name(&cli.suite_name)?;
        }
        suites
    };

    sanitize::sanitize(&mut suites, &config);

    if cli.report {
        report::draw(&suites)?;
    }

    if !cli.output.is_empty() {
        codec::write_path(&suites, Path::new(&cli.output))?;
    }

    Ok(())
}

/// Loads and merges every `*.xml` file under `dir`, strictly sequentially
/// in sorted path order. Each file is fully read and closed before the
/// next is opened.
fn aggregate_directory(dir: &Path, config: &Config) -> Result<TestSuites> {
    let mut aggregate = TestSuites::default();

    for path in discovery::collect_xml_files(dir, config)? {
        let incoming = codec::load_path(&path, config)?;
        aggregate.aggregate(incoming);
    }

    Ok(aggregate)
}
