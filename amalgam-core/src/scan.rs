//! Regex scanning passes over raw header text.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Token that marks a verbatim block boundary when it appears inside a
/// bracketed marker on its own line.
pub const VERBATIM_MARK: &str = "CLI11:verbatim";

const LOCAL_INCLUDE: &str = r#"(?m)^#include "(.*)"$"#;
const SYSTEM_INCLUDE: &str = r"(?m)^#include <(.*)>$";
const VERSION_DEFINE: &str = r#"(?m)^#define CLI11_VERSION "(.*)"$"#;

fn local_include_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LOCAL_INCLUDE).expect("static pattern"))
}

fn system_include_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SYSTEM_INCLUDE).expect("static pattern"))
}

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_DEFINE).expect("static pattern"))
}

fn verbatim_pair_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // One marker line: leading text without brackets, then a bracketed
        // token containing the verbatim mark, then anything up to end of
        // line.
        let tag = format!(r"[^\n\^\[]+\[[^\]\^\n]*{VERBATIM_MARK}[^\]\^\n]*\][^\n]*");
        // Greedy dot-all between the two marker lines: multiple pairs in one
        // unit collapse to a single span from the first marker to the last.
        let pair = format!("(?ms)^{tag}$(.*)^{tag}$");
        Regex::new(&pair).expect("static pattern")
    })
}

/// Ordered path arguments of `#include "path"` lines.
pub fn local_includes(text: &str) -> Vec<String> {
    local_include_re()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Targets of `#include <...>` lines, value-deduplicated and sorted.
pub fn system_includes(text: &str) -> BTreeSet<String> {
    system_include_re()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// First captured `#define CLI11_VERSION "..."` value, if any.
pub fn detect_version(text: &str) -> Option<String> {
    version_re()
        .captures(text)
        .map(|cap| cap[1].to_string())
}

/// Capture all verbatim tag-pair spans and strip them from the text.
///
/// Capture and removal use the same match set: one `captures_iter` pass and
/// one `replace_all` with the same compiled regex, never an independent
/// re-scan. Stripping is idempotent; the returned text holds no further
/// tag-pairs.
pub fn strip_verbatim(text: &str) -> (Vec<String>, String) {
    if !text.contains(VERBATIM_MARK) {
        return (Vec::new(), text.to_string());
    }

    let re = verbatim_pair_re();
    let blocks: Vec<String> = re
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect();
    let stripped = re.replace_all(text, "").into_owned();

    (blocks, stripped)
}
