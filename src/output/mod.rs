mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use serde::Serialize;

use crate::error::Result;
use crate::rules::Finding;

/// Everything a check run produced for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub findings: Vec<Finding>,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            path: path.into(),
            findings,
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Trait for formatting per-file reports into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
