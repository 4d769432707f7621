//! Provenance tag lookup from version control.

use std::path::PathBuf;
use std::process::Command;

/// Fallback provenance string when no revision can be determined.
pub const UNKNOWN_REVISION: &str = "Unknown git revision";

/// Supplies a human-readable revision identifier for the preamble.
///
/// Lookup failure is non-fatal; callers fall back to [`UNKNOWN_REVISION`].
pub trait RevisionLookup {
    fn describe(&self) -> Option<String>;
}

/// Shells out to `git describe --tags --always` in a working directory.
#[derive(Debug, Clone)]
pub struct GitRevision {
    workdir: PathBuf,
}

impl GitRevision {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl RevisionLookup for GitRevision {
    fn describe(&self) -> Option<String> {
        let output = Command::new("git")
            .args(["describe", "--tags", "--always"])
            .current_dir(&self.workdir)
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if tag.is_empty() {
            None
        } else {
            Some(tag)
        }
    }
}

/// Lookup that never yields a revision.
#[derive(Debug, Clone, Default)]
pub struct NoRevision;

impl RevisionLookup for NoRevision {
    fn describe(&self) -> Option<String> {
        None
    }
}
