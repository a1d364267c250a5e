// src/report.rs
//! Console summary table for an aggregated report.
//!
//! Two columns, NAME and RESULT, one row per case in suite order then case
//! order. The row content is the contract; the box drawing is cosmetic.

use crate::error::{Result, TidyError};
use crate::model::TestSuites;
use colored::Colorize;

const PASSED: &str = "passed";
const FAILED: &str = "failed";

/// A single (name, result) row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub result: &'static str,
}

/// Derives the report rows without printing anything.
///
/// # Errors
/// Returns `EmptyInput` when the aggregate holds no suites.
pub fn rows(suites: &TestSuites) -> Result<Vec<Row>> {
    if suites.suites.is_empty() {
        return Err(TidyError::EmptyInput);
    }

    let mut out = Vec::with_capacity(suites.case_count());
    for suite in &suites.suites {
        for case in &suite.cases {
            out.push(Row {
                name: case.name.clone(),
                result: if case.is_passed() { PASSED } else { FAILED },
            });
        }
    }
    Ok(out)
}

/// Prints the two-column report table to stdout.
///
/// # Errors
/// Returns `EmptyInput` when the aggregate holds no suites; nothing is
/// printed in that case.
pub fn draw(suites: &TestSuites) -> Result<()> {
    let rows = rows(suites)?;

    let name_width = rows
        .iter()
        .map(|r| r.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(4);

    let rule = format!("+-{}-+--------+", "-".repeat(name_width));

    // Pad before coloring so ANSI escapes don't skew the column widths.
    println!("{rule}");
    println!(
        "| {} | {} |",
        format!("{:<name_width$}", "NAME").bold(),
        format!("{:<6}", "RESULT").bold()
    );
    println!("{rule}");
    for row in &rows {
        let padded = format!("{:<6}", row.result);
        let result = if row.result == PASSED {
            padded.green()
        } else {
            padded.red()
        };
        println!("| {:<name_width$} | {result} |", row.name);
    }
    println!("{rule}");
    Ok(())
}
