//! Per-header parsing into mergeable units.

use std::collections::BTreeSet;

use crate::error::MergeError;
use crate::scan;

/// One included header, reduced to the pieces the merge cares about.
#[derive(Debug, Clone)]
pub struct ParsedUnit {
    /// Identifier of the file this unit came from, as declared by the root
    /// header.
    pub source_path: String,
    /// Angle-bracket include targets declared by this unit.
    pub system_includes: BTreeSet<String>,
    /// Extracted verbatim spans, headed by a provenance comment when any
    /// tag-pair matched.
    pub verbatim_blocks: Vec<String>,
    /// Provenance comment plus the unit text from its first `namespace`
    /// token onward, with verbatim spans removed.
    pub body: String,
    /// Version captured from a `#define CLI11_VERSION "..."` line, if any.
    pub detected_version: Option<String>,
}

/// Parse one unit's raw text.
///
/// The version scan runs against the raw text; verbatim capture and removal
/// happen in a single pass; system includes are collected from the stripped
/// text but stay in the body. A unit that never opens a namespace fails with
/// [`MergeError::MalformedUnit`].
pub fn parse_unit(source_path: &str, raw_text: &str) -> Result<ParsedUnit, MergeError> {
    let detected_version = scan::detect_version(raw_text);

    let (mut verbatim_blocks, stripped) = scan::strip_verbatim(raw_text);
    if !verbatim_blocks.is_empty() {
        verbatim_blocks.insert(0, format!("\n\n// Verbatim copy from {source_path}:"));
    }

    let system_includes = scan::system_includes(&stripped);

    let start = stripped
        .find("namespace")
        .ok_or_else(|| MergeError::MalformedUnit {
            path: source_path.to_string(),
        })?;
    let body = format!("\n// From {source_path}:\n\n{}", &stripped[start..]);

    Ok(ParsedUnit {
        source_path: source_path.to_string(),
        system_includes,
        verbatim_blocks,
        body,
        detected_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_starts_at_namespace_with_provenance() {
        let unit = parse_unit(
            "CLI/App.hpp",
            "#include <vector>\n\nnamespace CLI {\nclass App;\n}\n",
        )
        .expect("parse");

        assert_eq!(
            unit.body,
            "\n// From CLI/App.hpp:\n\nnamespace CLI {\nclass App;\n}\n"
        );
        assert!(unit.system_includes.contains("vector"));
    }

    #[test]
    fn missing_namespace_is_malformed() {
        let err = parse_unit("CLI/Macros.hpp", "#define CLI11_INLINE inline\n")
            .expect_err("no namespace");

        assert!(matches!(err, MergeError::MalformedUnit { ref path } if path == "CLI/Macros.hpp"));
    }

    #[test]
    fn verbatim_block_leaves_the_body() {
        let text = "// [CLI11:verbatim]\nX\n// [CLI11:verbatim]\nnamespace CLI {}\n";
        let unit = parse_unit("CLI/Split.hpp", text).expect("parse");

        assert_eq!(unit.verbatim_blocks.len(), 2);
        assert_eq!(unit.verbatim_blocks[0], "\n\n// Verbatim copy from CLI/Split.hpp:");
        assert_eq!(unit.verbatim_blocks[1], "\nX\n");
        assert!(!unit.body.contains("X\n"));
    }

    #[test]
    fn version_define_is_detected_from_raw_text() {
        let unit = parse_unit(
            "CLI/Version.hpp",
            "#define CLI11_VERSION \"2.3.1\"\nnamespace CLI {}\n",
        )
        .expect("parse");

        assert_eq!(unit.detected_version, Some("2.3.1".to_string()));
    }

    #[test]
    fn system_includes_stay_in_the_body() {
        let unit = parse_unit(
            "CLI/App.hpp",
            "namespace CLI {\n}\n#include <string>\n",
        )
        .expect("parse");

        assert!(unit.system_includes.contains("string"));
        assert!(unit.body.contains("#include <string>"));
    }
}
