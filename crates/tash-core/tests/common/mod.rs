use std::path::PathBuf;

use tempfile::TempDir;

/// Helper function to write a task file into a fresh temporary directory
pub fn write_tasks_file(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("day.tashes");
    std::fs::write(&path, content).expect("Failed to write task file");
    (temp_dir, path)
}
