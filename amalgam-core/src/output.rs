//! Rendering the merged document into the single-header artifact.

use std::io::Write;

use serde::Serialize;

use crate::merge::MergedDocument;

/// License block used when no license file is available.
pub const DEFAULT_LICENSE: &str = "// BSD 3 clause";

const DEFAULT_VERSION: &str = "Unknown";

/// Prefix each license line with a C++ line comment marker.
pub fn comment_license(text: &str) -> String {
    text.lines()
        .map(|line| format!("// {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize the merged document: pragma-once marker, attribution and
/// provenance block, license, sorted system includes, verbatim blocks, and
/// the concatenated bodies. Byte-deterministic for identical inputs.
pub fn render(doc: &MergedDocument, license: &str, revision: &str) -> String {
    let version = doc.version.as_deref().unwrap_or(DEFAULT_VERSION);
    let includes = doc
        .system_includes
        .iter()
        .map(|h| format!("#include <{h}>"))
        .collect::<Vec<_>>()
        .join("\n");
    let verbatim = doc.verbatim_blocks.join("\n");
    let body = doc.bodies.concat();

    format!(
        "#pragma once\n\
         \n\
         // CLI11: Version {version}\n\
         // Originally designed by Henry Schreiner\n\
         // https://github.com/CLIUtils/CLI11\n\
         //\n\
         // This is a standalone header file generated by the amalgam tool\n\
         // from: {revision}\n\
         //\n\
         // From LICENSE:\n\
         //\n\
         {license}\n\
         \n\
         // Standard combined includes:\n\
         \n\
         {includes}\n\
         {verbatim}\n\
         {body}\n"
    )
}

/// Machine-readable summary of one merge run.
#[derive(Debug, Serialize)]
pub struct MergeReport {
    pub output: String,
    pub version: String,
    pub revision: String,
    pub units: usize,
    pub system_includes: usize,
    pub verbatim_blocks: usize,
}

impl MergeReport {
    pub fn new(doc: &MergedDocument, output: &str, revision: &str) -> Self {
        Self {
            output: output.to_string(),
            version: doc
                .version
                .clone()
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            revision: revision.to_string(),
            units: doc.bodies.len(),
            system_includes: doc.system_includes.len(),
            verbatim_blocks: doc.verbatim_blocks.len(),
        }
    }
}

/// Write the report as prettified JSON.
pub fn write_report_json(report: &MergeReport, w: impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(w, report)
}
