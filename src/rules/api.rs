use regex::Regex;

use crate::config::RuleConfig;
use crate::engine::SourceFile;

use super::{Category, Finding, Rule};

/// Data-layer folders exempt from the direct-dependency rules.
const DATA_FOLDERS: [&str; 3] = ["lib", "services", "api"];

fn is_exempt(file: &SourceFile<'_>) -> bool {
    !file.is_component() || DATA_FOLDERS.iter().any(|folder| file.in_folder(folder))
}

/// Flags components that query the database client directly instead of
/// going through the data layer. One finding per file, at the first call.
pub struct QueryClientRule {
    query_call: Regex,
}

impl Default for QueryClientRule {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClientRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            query_call: Regex::new(r"supabase\s*\.\s*from\(").expect("Invalid regex"),
        }
    }
}

impl Rule for QueryClientRule {
    fn name(&self) -> &'static str {
        "query-client"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if is_exempt(file) {
            return Vec::new();
        }

        for (i, line) in file.lines.iter().enumerate() {
            if self.query_call.is_match(line) {
                return vec![Finding::warn(
                    i + 1,
                    Category::QueryInComponent,
                    "Direct database query in a component. Move reads and writes into \
                     query functions under `lib/` and consume them through a hook; the \
                     component should not know the storage layer.",
                )];
            }
        }

        Vec::new()
    }
}

/// Flags components calling the raw network-fetch primitive directly.
/// One finding per file, at the first call.
pub struct DirectFetchRule {
    fetch_call: Regex,
}

impl Default for DirectFetchRule {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectFetchRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fetch_call: Regex::new(r"\bfetch\s*\(").expect("Invalid regex"),
        }
    }

    /// A `fetch` preceded by `//` on the same line is inside a comment.
    fn is_commented(line: &str) -> bool {
        line.find("fetch")
            .is_some_and(|pos| line[..pos].contains("//"))
    }
}

impl Rule for DirectFetchRule {
    fn name(&self) -> &'static str {
        "direct-fetch"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if is_exempt(file) {
            return Vec::new();
        }

        for (i, line) in file.lines.iter().enumerate() {
            if self.fetch_call.is_match(line) && !Self::is_commented(line) {
                return vec![Finding::warn(
                    i + 1,
                    Category::FetchInComponent,
                    "Raw `fetch` call in a component. Centralize API calls in a shared \
                     client under `lib/` so error handling and headers live in one place.",
                )];
            }
        }

        Vec::new()
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
