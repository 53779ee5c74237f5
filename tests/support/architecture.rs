//! Source scans backing the layering contracts.

use std::fs;
use std::path::{Path, PathBuf};

/// One offending line: path relative to the crate root, 1-based line, text.
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn relative_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));

    for entry in entries {
        let path = entry
            .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
            .path();
        if path.is_dir() {
            walk(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

/// Every `.rs` file under `relative_dir`, or `relative_dir` itself when it
/// names a file.
pub fn collect_rs_files(relative_dir: &str) -> Vec<PathBuf> {
    let base = root().join(relative_dir);
    if base.is_file() {
        return vec![base];
    }
    let mut files = Vec::new();
    walk(&base, &mut files);
    files.sort();
    files
}

/// Lines outside `#[cfg(test)]` modules that contain any of `patterns`.
///
/// Test modules sit at the bottom of each file, so scanning stops at the first
/// `#[cfg(test)]`.
pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    let mut hits = Vec::new();

    for file in collect_rs_files(relative_dir) {
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));

        for (idx, line) in content.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            if patterns.iter().any(|p| line.contains(p)) {
                hits.push((relative_path(&file), idx + 1, line.to_string()));
            }
        }
    }

    hits
}

/// [`find_lines_containing`] over several roots.
pub fn find_lines_containing_in(relative_dirs: &[&str], patterns: &[&str]) -> Vec<Hit> {
    relative_dirs
        .iter()
        .flat_map(|dir| find_lines_containing(dir, patterns))
        .collect()
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}

/// Non-test lines calling `.unwrap()` or `.expect(`.
pub fn find_panicking_calls(relative_dir: &str) -> Vec<Hit> {
    find_lines_containing(relative_dir, &[".unwrap()", ".expect("])
        .into_iter()
        .filter(|(_, _, line)| !line.trim_start().starts_with("//"))
        .collect()
}
