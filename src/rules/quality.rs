use regex::Regex;

use crate::config::RuleConfig;
use crate::engine::{SourceFile, is_inside_catch_block};

use super::{Category, Finding, Rule};

/// Flags files that exceed the configured line limit.
pub struct FileSizeRule;

impl Default for FileSizeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSizeRule {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for FileSizeRule {
    fn name(&self) -> &'static str {
        "file-size"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        if file.lines.len() <= config.max_file_lines {
            return Vec::new();
        }

        vec![Finding::warn(
            1,
            Category::FileSize,
            format!(
                "File has {} lines (limit {}). Large files are hard to review and test; \
                 extract smaller components, move state logic into hooks, and split \
                 constants and types into their own modules.",
                file.lines.len(),
                config.max_file_lines
            ),
        )]
    }
}

struct ImportStatement {
    text: String,
    /// 1-based line of the `import` keyword.
    line: usize,
    /// 0-based index of the statement's last physical line.
    end: usize,
}

/// Flags imported bindings that never appear again in the file.
///
/// Import statements may span multiple physical lines; the statement is
/// accumulated until its ` from ` clause completes. Side-effect-only
/// imports bind no names and are always exempt.
pub struct UnusedImportRule {
    import_start: Regex,
    side_effect: Regex,
    named_bindings: Regex,
    default_binding: Regex,
    namespace_binding: Regex,
    as_separator: Regex,
}

impl Default for UnusedImportRule {
    fn default() -> Self {
        Self::new()
    }
}

impl UnusedImportRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            import_start: Regex::new(r"^import\s").expect("Invalid regex"),
            side_effect: Regex::new(r#"^import\s+['"]"#).expect("Invalid regex"),
            named_bindings: Regex::new(r"\{([^}]+)\}").expect("Invalid regex"),
            default_binding: Regex::new(r"^import\s+(?:type\s+)?(\w+)\s*(?:,|\s+from)")
                .expect("Invalid regex"),
            namespace_binding: Regex::new(r"\*\s+as\s+(\w+)").expect("Invalid regex"),
            as_separator: Regex::new(r"\s+as\s+").expect("Invalid regex"),
        }
    }

    fn collect_imports(&self, lines: &[&str]) -> Vec<ImportStatement> {
        let mut imports = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if !self.import_start.is_match(trimmed) {
                continue;
            }

            let mut text = trimmed.to_string();
            let mut end = i;
            while !text.contains(" from ") && end + 1 < lines.len() {
                end += 1;
                text.push(' ');
                text.push_str(lines[end].trim());
            }

            imports.push(ImportStatement {
                text,
                line: i + 1,
                end,
            });
        }

        imports
    }

    fn bound_names(&self, text: &str) -> Vec<String> {
        let mut names = Vec::new();

        if let Some(caps) = self.named_bindings.captures(text) {
            for binding in caps[1].split(',') {
                let name = self
                    .as_separator
                    .split(binding.trim())
                    .last()
                    .unwrap_or("")
                    .trim();
                if !name.is_empty() && name != "type" {
                    names.push(name.to_string());
                }
            }
        }

        if let Some(caps) = self.default_binding.captures(text) {
            let name = &caps[1];
            if name != "type" {
                names.push(name.to_string());
            }
        }

        if let Some(caps) = self.namespace_binding.captures(text) {
            names.push(caps[1].to_string());
        }

        names
    }
}

impl Rule for UnusedImportRule {
    fn name(&self) -> &'static str {
        "unused-imports"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        let lines = &file.lines;
        let mut findings = Vec::new();

        for import in self.collect_imports(lines) {
            if self.side_effect.is_match(&import.text) {
                continue;
            }

            let rest_of_file = lines
                .get(import.end + 1..)
                .unwrap_or_default()
                .join("\n");

            let unused: Vec<String> = self
                .bound_names(&import.text)
                .into_iter()
                .filter(|name| {
                    // Whole-word occurrence anywhere after the import counts
                    // as a use. A regex that fails to compile degrades to
                    // "used" rather than a false positive.
                    Regex::new(&format!(r"\b{}\b", regex::escape(name)))
                        .map(|re| !re.is_match(&rest_of_file))
                        .unwrap_or(false)
                })
                .collect();

            if !unused.is_empty() {
                let names = unused
                    .iter()
                    .map(|n| format!("`{n}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                findings.push(Finding::warn(
                    import.line,
                    Category::UnusedImport,
                    format!(
                        "Unused import: {names}. Unused imports grow the bundle and clutter \
                         the file; remove them."
                    ),
                ));
            }
        }

        findings
    }
}

/// Flags every `console.*` diagnostic call. Calls inside a catch block get
/// a different remediation hint than calls elsewhere.
pub struct ConsoleCallRule {
    console_call: Regex,
}

impl Default for ConsoleCallRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleCallRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            console_call: Regex::new(r"\bconsole\.(log|warn|info|debug|error|trace)\b")
                .expect("Invalid regex"),
        }
    }
}

impl Rule for ConsoleCallRule {
    fn name(&self) -> &'static str {
        "console-calls"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        let lines = &file.lines;
        let mut findings = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = self.console_call.captures(line.trim()) else {
                continue;
            };
            let method = &caps[1];

            if is_inside_catch_block(lines, i) {
                findings.push(Finding::warn(
                    i + 1,
                    Category::ConsoleInCatch,
                    format!(
                        "`console.{method}` inside error recovery. The user never sees the \
                         browser console; surface the failure with a toast or notification \
                         and send diagnostics to the monitoring service."
                    ),
                ));
            } else {
                findings.push(Finding::warn(
                    i + 1,
                    Category::ConsoleLog,
                    format!(
                        "`console.{method}` call. Remove it before merging; use user-facing \
                         feedback for users and the monitoring service for diagnostics."
                    ),
                ));
            }
        }

        findings
    }
}

#[cfg(test)]
#[path = "quality_tests.rs"]
mod tests;
