//! Hygiene — enforces coding standards at test time.
//!
//! Scans `cropper/src` for antipatterns that have no place in code running
//! inside a browser tab: panicking macros crash the tab, and silently
//! discarded errors hide encoder/DOM failures. Every budget is zero and
//! never grows.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics crash the tab"),
    (".expect(", 0, "panics crash the tab"),
    ("panic!(", 0, "panics crash the tab"),
    ("unreachable!(", 0, "panics crash the tab"),
    ("todo!(", 0, "unfinished code must not ship"),
    ("unimplemented!(", 0, "unfinished code must not ship"),
    ("let _ =", 0, "discards errors without inspecting"),
    (".ok()", 0, "discards errors without inspecting"),
    ("#[allow(dead_code)]", 0, "delete it instead"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let is_rust = path.extension().is_some_and(|e| e == "rs");
        let name = path.to_string_lossy().to_string();
        if is_rust && !name.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((name, content));
            }
        }
    }
}

#[test]
fn source_tree_is_nonempty() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.len() >= 3, "expected the cropper sources, found {}", files.len());
}

#[test]
fn antipattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);

    let mut violations = Vec::new();
    for (pattern, budget, reason) in BUDGETS {
        let mut count = 0;
        let mut hits = Vec::new();
        for (path, content) in &files {
            for (line_no, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    count += 1;
                    hits.push(format!("  {path}:{} {}", line_no + 1, line.trim()));
                }
            }
        }
        if count > *budget {
            violations.push(format!(
                "`{pattern}` found {count}, budget {budget} ({reason}):\n{}",
                hits.join("\n")
            ));
        }
    }

    assert!(violations.is_empty(), "\n{}", violations.join("\n\n"));
}
