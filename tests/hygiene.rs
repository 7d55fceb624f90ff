//! Hygiene — source-level standards for the portfolio crate.
//!
//! Widget handlers run inside browser event callbacks, where a panic kills
//! every later interaction on the page. These scans keep production code in
//! `src/` free of panicking shortcuts and silently dropped results. Each
//! pattern has a budget of zero; `*_test.rs` files are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Pattern, budget, and what it costs when it slips through.
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics inside an event callback"),
    (".expect(", 0, "panics inside an event callback"),
    ("panic!(", 0, "aborts the page's wasm instance"),
    ("unreachable!(", 0, "aborts the page's wasm instance"),
    ("todo!(", 0, "ships an unfinished widget"),
    ("unimplemented!(", 0, "ships an unfinished widget"),
    ("let _ =", 0, "drops a DOM result without logging it"),
    (".ok()", 0, "drops an error without logging it"),
    ("#[allow(dead_code)]", 0, "hides unused widget code"),
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn scan_covers_every_module() {
    let files = source_files();
    for module in ["lib.rs", "config.rs", "page.rs", "contact.rs", "theme.rs", "skills.rs"] {
        assert!(files.iter().any(|f| f.path.ends_with(module)), "{module} not scanned");
    }
}

#[test]
fn test_files_are_exempt() {
    assert!(source_files().iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, cost) in RULES {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("  {path}: {c}")).collect();
            failures.push(format!("`{pattern}` {count} > {budget} ({cost})\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
