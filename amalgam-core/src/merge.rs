//! Folding parsed units into a single merged document.

use std::collections::BTreeSet;

use crate::error::MergeError;
use crate::resolve::SourceResolver;
use crate::scan;
use crate::unit::{parse_unit, ParsedUnit};

/// Accumulated merge state, folded left-to-right over parsed units.
///
/// The fold is associative: the include set unions commutatively, while
/// verbatim blocks and bodies concatenate in unit order. Callers must feed
/// units in the order the root header declared them.
#[derive(Debug, Clone, Default)]
pub struct MergedDocument {
    pub system_includes: BTreeSet<String>,
    pub verbatim_blocks: Vec<String>,
    pub bodies: Vec<String>,
    /// Last detected version across the fold, in processing order.
    pub version: Option<String>,
}

impl MergedDocument {
    pub fn fold(mut self, unit: ParsedUnit) -> Self {
        self.system_includes.extend(unit.system_includes);
        self.verbatim_blocks.extend(unit.verbatim_blocks);
        self.bodies.push(unit.body);
        if unit.detected_version.is_some() {
            self.version = unit.detected_version;
        }
        self
    }
}

/// Merge the library rooted at `root_header` into one document.
///
/// Reads the root header through the resolver, extracts its quoted includes
/// in declaration order, parses each one, and folds the results. Any
/// unreadable source or malformed unit aborts the whole merge.
pub fn merge(
    resolver: &impl SourceResolver,
    root_header: &str,
) -> Result<MergedDocument, MergeError> {
    let root_text = resolver.resolve(root_header)?;
    let include_paths = scan::local_includes(&root_text);

    let mut units = Vec::with_capacity(include_paths.len());
    for path in &include_paths {
        let text = resolver.resolve(path)?;
        units.push(parse_unit(path, &text)?);
    }

    Ok(units
        .into_iter()
        .fold(MergedDocument::default(), MergedDocument::fold))
}
