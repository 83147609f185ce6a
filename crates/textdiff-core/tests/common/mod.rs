#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use textdiff_core::TextDiffer;

/// A differ whose temporary artifacts land in a private directory
pub fn scoped_differ() -> (TempDir, TextDiffer) {
    let dir = TempDir::new().unwrap();
    let differ = TextDiffer::new().with_temp_dir(dir.path());
    (dir, differ)
}

/// Names of entries currently present in `dir`
pub fn leftover_entries(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
}

pub fn assert_no_leftovers(dir: &Path) {
    let leftovers = leftover_entries(dir);
    assert!(
        leftovers.is_empty(),
        "temporary artifacts left behind: {:?}",
        leftovers
    );
}
