//! amalgam-core: fold a header-only C++ library into one standalone header.
//!
//! Given a root header that declares its parts with quoted includes, the
//! pipeline inlines every declared unit into a single document: system
//! include directives are deduplicated and sorted, "verbatim" tagged blocks
//! are lifted out ahead of the merged bodies, and the result is stamped with
//! the detected library version, a license block, and a provenance tag.
//!
//! The pipeline is pure with respect to the outside world: file access goes
//! through a [`resolve::SourceResolver`] and revision lookup through a
//! [`revision::RevisionLookup`], so the whole merge can run against in-memory
//! sources.
//!
//! ```rust
//! use amalgam_core::merge::merge;
//! use amalgam_core::output::{render, DEFAULT_LICENSE};
//! use amalgam_core::resolve::MapResolver;
//! use amalgam_core::revision::UNKNOWN_REVISION;
//!
//! let resolver = MapResolver::new()
//!     .with("CLI/CLI.hpp", "#include \"CLI/App.hpp\"\n")
//!     .with("CLI/App.hpp", "#include <vector>\nnamespace CLI {}\n");
//!
//! let doc = merge(&resolver, "CLI/CLI.hpp")?;
//! let single_header = render(&doc, DEFAULT_LICENSE, UNKNOWN_REVISION);
//! assert!(single_header.starts_with("#pragma once"));
//! # Ok::<(), amalgam_core::error::MergeError>(())
//! ```

pub mod error;
pub mod merge;
pub mod output;
pub mod resolve;
pub mod revision;
pub mod scan;
pub mod unit;
