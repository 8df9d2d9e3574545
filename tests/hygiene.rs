//! Hygiene — keeps production sources free of panics and swallowed errors.
//!
//! Scans `src/` (skipping `*_test.rs`) for antipatterns. Budgets are zero.
//! The theme controller must never crash or throw into the host page, so a
//! failure is either propagated as `ThemeError` or logged where it is handled.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file line counts containing `pattern`.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let found = hits(&files, pattern);
    let report = found
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found.is_empty(), "`{pattern}` is not allowed in production code ({why}):\n{report}");
}

macro_rules! forbid {
    ($name:ident, $pattern:expr, $why:expr) => {
        #[test]
        fn $name() {
            assert_absent($pattern, $why);
        }
    };
}

// Panics.
forbid!(no_unwrap, ".unwrap()", "panics");
forbid!(no_expect, ".expect(", "panics");
forbid!(no_panic, "panic!(", "panics");
forbid!(no_unreachable, "unreachable!(", "panics");
forbid!(no_todo, "todo!(", "panics");
forbid!(no_unimplemented, "unimplemented!(", "panics");

// Silent loss.
forbid!(no_silent_discard, "let _ =", "discards errors without logging");
forbid!(no_dot_ok, ".ok()", "discards errors without logging");

// Structure.
forbid!(no_allow_dead_code, "#[allow(dead_code)]", "dead code should be deleted");
