use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn write_fixture_tree(root: &Path) {
    let include_dir = root.join("include/CLI");
    fs::create_dir_all(&include_dir).expect("mkdir");

    fs::write(
        include_dir.join("CLI.hpp"),
        "#include \"CLI/App.hpp\"\n#include \"CLI/Error.hpp\"\n",
    )
    .expect("write root header");
    fs::write(
        include_dir.join("App.hpp"),
        "#include <vector>\n#define CLI11_VERSION \"2.3.1\"\nnamespace CLI {\nclass App;\n}\n",
    )
    .expect("write app header");
    fs::write(
        include_dir.join("Error.hpp"),
        "#include <string>\n#include <vector>\nnamespace CLI {\nclass Error;\n}\n",
    )
    .expect("write error header");
}

#[test]
fn creates_single_header_and_confirms() {
    let tmp = tempdir().expect("tempdir");
    write_fixture_tree(tmp.path());

    let output = Command::new(env!("CARGO_BIN_EXE_amalgam"))
        .args(["CLI11.hpp", "--include", "include"])
        .current_dir(tmp.path())
        .output()
        .expect("run amalgam");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created CLI11.hpp"));

    let text = fs::read_to_string(tmp.path().join("CLI11.hpp")).expect("read output");
    assert!(text.starts_with("#pragma once\n"));
    assert!(text.contains("// CLI11: Version 2.3.1\n"));

    let include_lines: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("#include <"))
        .collect();
    assert_eq!(
        include_lines,
        vec!["#include <string>", "#include <vector>"]
    );
}

#[test]
fn json_flag_reports_merge_counts() {
    let tmp = tempdir().expect("tempdir");
    write_fixture_tree(tmp.path());

    let output = Command::new(env!("CARGO_BIN_EXE_amalgam"))
        .args(["CLI11.hpp", "--include", "include", "--json"])
        .current_dir(tmp.path())
        .output()
        .expect("run amalgam");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"output\": \"CLI11.hpp\""));
    assert!(stdout.contains("\"version\": \"2.3.1\""));
    assert!(stdout.contains("\"units\": 2"));
}

#[test]
fn missing_root_header_exits_nonzero() {
    let tmp = tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_amalgam"))
        .args(["CLI11.hpp", "--include", "include"])
        .current_dir(tmp.path())
        .output()
        .expect("run amalgam");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CLI/CLI.hpp"));
    assert!(!tmp.path().join("CLI11.hpp").exists());
}
