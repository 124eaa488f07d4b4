mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Trait for discovering the source files a check run should cover.
pub trait FileScanner {
    /// Walk a directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots and combine the results in argument order.
    ///
    /// # Errors
    /// Returns an error if any root cannot be read.
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        Ok(files)
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect();

        // Directory iteration order is platform-dependent; reports are not.
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
