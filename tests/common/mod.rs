#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the review-guard binary.
#[macro_export]
macro_rules! review_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("review-guard"))
    };
}

/// Config with relaxed thresholds; small fixtures stay clean under it.
pub const RELAXED_CONFIG: &str = r#"
[thresholds]
max_file_lines = 500
max_function_lines = 100
"#;

/// Config with tight thresholds; most fixtures trip it.
pub const STRICT_CONFIG: &str = r#"
[thresholds]
max_file_lines = 5
max_function_lines = 3
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a review-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".review-guard.toml", content);
    }

    /// Creates a TypeScript file with the given number of plain code lines.
    pub fn create_ts_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::new();
        for i in 0..code_lines {
            let _ = writeln!(content, "export const value{i} = {i};");
        }
        self.create_file(relative_path, &content);
    }
}
