// src/codec.rs
//! XML boundary: decoding report files into the tree and re-emitting the
//! final tree as indented XML.

use crate::config::Config;
use crate::error::{Result, TidyError};
use crate::model::TestSuites;
use serde::Serialize;
use std::fs;
use std::path::Path;

const ROOT_ELEMENT: &str = "testsuites";
const INDENT_WIDTH: usize = 4;

/// Decodes a single report document.
///
/// # Errors
/// Returns `MalformedInput` when the document does not match the JUnit
/// schema, propagating the decoder's diagnostic.
pub fn from_str(xml: &str) -> Result<TestSuites> {
    let suites = quick_xml::de::from_str(xml)?;
    Ok(suites)
}

/// Reads and decodes one report file.
///
/// # Errors
/// Returns a path-annotated `Io` error if the file cannot be read, or
/// `MalformedInput` if it cannot be decoded.
pub fn load_path(path: &Path, config: &Config) -> Result<TestSuites> {
    if config.verbose {
        println!("Reading file {}", path.display());
    }
    let xml = fs::read_to_string(path).map_err(|e| TidyError::io(e, path))?;
    from_str(&xml)
}

/// Encodes the tree as a 4-space-indented `<testsuites>` document.
///
/// # Errors
/// Serialization failure is unexpected for an already-valid tree and is
/// surfaced for the caller to treat as fatal.
pub fn to_xml(suites: &TestSuites) -> Result<String> {
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::with_root(&mut out, Some(ROOT_ELEMENT))?;
    ser.indent(' ', INDENT_WIDTH);
    suites.serialize(ser)?;
    Ok(out)
}

/// Serializes the tree and writes it whole-file to `path`.
///
/// # Errors
/// Propagates serialization errors and path-annotated write failures.
pub fn write_path(suites: &TestSuites, path: &Path) -> Result<()> {
    let xml = to_xml(suites)?;
    fs::write(path, xml).map_err(|e| TidyError::io(e, path))
}
