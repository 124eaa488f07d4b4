use regex::Regex;

use super::block::find_block_end;

/// One detected function-like declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    /// 0-based index of the declaration line.
    pub start: usize,
    /// 0-based index of the closing line, per `find_block_end`.
    pub end: usize,
}

impl FunctionInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// 1-based line number for reporting.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.start + 1
    }

    /// Span length in lines, inclusive.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Detects `function name(` declarations and `const name = (...) =>` arrow
/// functions whose declaration line ends with the arrow. Extents come from
/// the shared block finder, so a function whose braces never close runs to
/// the end of the file.
pub struct FunctionDetector {
    fn_pattern: Regex,
    arrow_pattern: Regex,
    arrow_tail_pattern: Regex,
}

impl Default for FunctionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(r"^(?:export\s+)?(?:async\s+)?function\s+(\w+)\s*\(")
                .expect("Invalid regex"),
            arrow_pattern: Regex::new(r"^(?:export\s+)?(?:const|let)\s+(\w+)\s*=\s*(?:async\s*)?\(")
                .expect("Invalid regex"),
            arrow_tail_pattern: Regex::new(r"=>\s*\{?\s*$").expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn detect(&self, lines: &[&str]) -> Vec<FunctionInfo> {
        let mut functions = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();

            if let Some(caps) = self.arrow_pattern.captures(trimmed) {
                if self.arrow_tail_pattern.is_match(trimmed) {
                    let name = caps.get(1).map_or("", |m| m.as_str());
                    functions.push(FunctionInfo::new(name, i, find_block_end(lines, i)));
                }
                continue;
            }

            if let Some(caps) = self.fn_pattern.captures(trimmed) {
                let name = caps.get(1).map_or("", |m| m.as_str());
                functions.push(FunctionInfo::new(name, i, find_block_end(lines, i)));
            }
        }

        functions
    }
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
