//! Source resolution for root headers and their includes.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::MergeError;

/// Maps an include path to that file's text.
pub trait SourceResolver {
    fn resolve(&self, path: &str) -> Result<String, MergeError>;
}

/// Resolves include paths relative to a content root directory.
#[derive(Debug, Clone)]
pub struct DirResolver {
    root: PathBuf,
}

impl DirResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceResolver for DirResolver {
    fn resolve(&self, path: &str) -> Result<String, MergeError> {
        let full = self.root.join(path);
        fs::read_to_string(&full).map_err(|source| MergeError::MissingSource {
            path: full.display().to_string(),
            source,
        })
    }
}

/// In-memory resolver for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    sources: HashMap<String, String>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, text: &str) -> Self {
        self.sources.insert(path.to_string(), text.to_string());
        self
    }
}

impl SourceResolver for MapResolver {
    fn resolve(&self, path: &str) -> Result<String, MergeError> {
        self.sources
            .get(path)
            .cloned()
            .ok_or_else(|| MergeError::MissingSource {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not in resolver map"),
            })
    }
}
