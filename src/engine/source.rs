use super::context::{is_component_file, is_in_folder};

/// Borrowed view of one file under scan.
///
/// Lines are split with [`str::lines`], so a trailing newline does not
/// produce a phantom empty line. Line numbers reported in findings are
/// 1-based (index + 1).
#[derive(Debug)]
pub struct SourceFile<'a> {
    pub path: &'a str,
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> SourceFile<'a> {
    #[must_use]
    pub fn new(path: &'a str, text: &'a str) -> Self {
        Self {
            path,
            text,
            lines: text.lines().collect(),
        }
    }

    /// True if this file is a UI component source file.
    #[must_use]
    pub fn is_component(&self) -> bool {
        is_component_file(self.path)
    }

    /// True if the path contains `folder` as a path segment.
    #[must_use]
    pub fn in_folder(&self, folder: &str) -> bool {
        is_in_folder(self.path, folder)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
