//! Crate layering lock tests.
//!
//! Verifies the one-way dependency direction
//! `revwalk_kernel ← revwalk_search ← revwalk_harness`, and that the
//! kernel and search crates perform no I/O.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the workspace root from `CARGO_MANIFEST_DIR` of the lock-tests crate.
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files);
        } else if path.extension().is_some_and(|e| e == "rs") {
            files.push(path);
        }
    }
}

/// Non-comment lines under `src_dir` containing any forbidden pattern.
fn violations(src_dir: &Path, forbidden: &[&str]) -> Vec<(String, usize, String)> {
    let mut files = Vec::new();
    walk(src_dir, &mut files);
    let mut found = Vec::new();
    for path in files {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_no, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
                continue;
            }
            if forbidden.iter().any(|p| trimmed.contains(p)) {
                found.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
    found
}

fn assert_clean(what: &str, found: &[(String, usize, String)]) {
    if found.is_empty() {
        return;
    }
    let mut msg = format!("{what}:\n");
    for (file, line, content) in found {
        let _ = writeln!(msg, "  {file}:{line}: {content}");
    }
    panic!("{msg}");
}

#[test]
fn kernel_source_is_pure() {
    let found = violations(
        &workspace_root().join("kernel/src"),
        &["revwalk_search", "revwalk_harness", "std::fs", "std::io", "std::env"],
    );
    assert_clean("upward references or I/O in kernel source", &found);
}

#[test]
fn search_source_does_not_reach_the_harness() {
    let found = violations(
        &workspace_root().join("search/src"),
        &["revwalk_harness", "std::fs", "std::io", "std::env"],
    );
    assert_clean("harness references or I/O in search source", &found);
}

#[test]
fn manifests_point_downward_only() {
    let kernel = fs::read_to_string(workspace_root().join("kernel/Cargo.toml")).unwrap();
    assert!(!kernel.contains("revwalk-search"));
    assert!(!kernel.contains("revwalk-harness"));

    let search = fs::read_to_string(workspace_root().join("search/Cargo.toml")).unwrap();
    assert!(search.contains("revwalk-kernel"));
    assert!(!search.contains("revwalk-harness"));
}
