/*!
 * Common test utilities for the genko test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample manuscript file for testing
pub fn create_test_manuscript(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"## 第一章

太郎は「こんにちは」と言った。
"#;
    create_test_file(dir, filename, content)
}
