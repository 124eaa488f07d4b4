use regex::Regex;

use crate::config::RuleConfig;
use crate::engine::{FunctionDetector, SourceFile, find_block_end};

use super::{Category, Finding, Rule};

/// Flags functions whose span exceeds the configured limit.
pub struct LongFunctionRule {
    detector: FunctionDetector,
}

impl Default for LongFunctionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LongFunctionRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: FunctionDetector::new(),
        }
    }
}

impl Rule for LongFunctionRule {
    fn name(&self) -> &'static str {
        "long-functions"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        self.detector
            .detect(&file.lines)
            .into_iter()
            .filter(|f| f.line_count() > config.max_function_lines)
            .map(|f| {
                Finding::warn(
                    f.line(),
                    Category::LongFunction,
                    format!(
                        "Function `{}` spans {} lines (limit {}). Extract validations, data \
                         transforms, and state logic into smaller named helpers so each \
                         function does one thing.",
                        f.name,
                        f.line_count(),
                        config.max_function_lines
                    ),
                )
            })
            .collect()
    }
}

/// Flags 2+ event handlers sharing a fetch-then-set-state shape when the
/// file declares 3+ handlers overall.
pub struct RepetitiveHandlerRule {
    detector: FunctionDetector,
    handler_name: Regex,
    set_state_call: Regex,
    api_call: Regex,
}

impl Default for RepetitiveHandlerRule {
    fn default() -> Self {
        Self::new()
    }
}

impl RepetitiveHandlerRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: FunctionDetector::new(),
            handler_name: Regex::new(r"^(?:handle|on)[A-Z]").expect("Invalid regex"),
            set_state_call: Regex::new(r"set\w+\(").expect("Invalid regex"),
            api_call: Regex::new(r"(?i)fetch|supabase|axios|api").expect("Invalid regex"),
        }
    }
}

impl Rule for RepetitiveHandlerRule {
    fn name(&self) -> &'static str {
        "repetitive-handlers"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        let lines = &file.lines;
        let handlers: Vec<_> = self
            .detector
            .detect(lines)
            .into_iter()
            .filter(|f| self.handler_name.is_match(&f.name))
            .collect();

        if handlers.len() < 3 {
            return Vec::new();
        }

        let similar = handlers
            .iter()
            .filter(|h| {
                let body = lines
                    .get(h.start..=h.end.min(lines.len().saturating_sub(1)))
                    .unwrap_or_default()
                    .join("\n");
                self.set_state_call.is_match(&body) && self.api_call.is_match(&body)
            })
            .count();

        if similar < 2 {
            return Vec::new();
        }

        let names = handlers
            .iter()
            .map(|h| format!("`{}`", h.name))
            .collect::<Vec<_>>()
            .join(", ");

        vec![Finding::warn(
            handlers[0].line(),
            Category::RepetitivePattern,
            format!(
                "{} handlers share a similar fetch-then-set-state shape: {names}. Extract \
                 the repeated flow into a shared hook so each handler only supplies the \
                 call and the state it updates.",
                handlers.len()
            ),
        )]
    }
}

/// Flags functions whose declaration line carries more parameters than the
/// configured limit. Only the declaration line is inspected, so parameter
/// lists broken across lines are undercounted rather than miscounted.
pub struct ParamCountRule {
    detector: FunctionDetector,
    param_list: Regex,
}

impl Default for ParamCountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamCountRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            detector: FunctionDetector::new(),
            param_list: Regex::new(r"\(([^)]*)\)").expect("Invalid regex"),
        }
    }
}

impl Rule for ParamCountRule {
    fn name(&self) -> &'static str {
        "param-count"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        let lines = &file.lines;
        let mut findings = Vec::new();

        for func in self.detector.detect(lines) {
            let Some(first_line) = lines.get(func.start) else {
                continue;
            };
            let Some(caps) = self.param_list.captures(first_line) else {
                continue;
            };

            let param_count = caps[1]
                .split(',')
                .filter(|p| !p.trim().is_empty())
                .count();

            if param_count > config.max_params {
                findings.push(Finding::warn(
                    func.line(),
                    Category::TooManyParams,
                    format!(
                        "Function `{}` takes {param_count} parameters (limit {}). Group them \
                         into a single options object so call sites stay readable.",
                        func.name, config.max_params
                    ),
                ));
            }
        }

        findings
    }
}

/// Flags 3+ `try { ... }` blocks in one file as duplicated error handling.
pub struct TryCatchDuplicationRule {
    try_open: Regex,
}

impl Default for TryCatchDuplicationRule {
    fn default() -> Self {
        Self::new()
    }
}

impl TryCatchDuplicationRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            try_open: Regex::new(r"\btry\s*\{").expect("Invalid regex"),
        }
    }
}

impl Rule for TryCatchDuplicationRule {
    fn name(&self) -> &'static str {
        "try-catch-duplication"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        let lines = &file.lines;
        let mut blocks = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if self.try_open.is_match(line.trim()) {
                blocks.push((i, find_block_end(lines, i)));
            }
        }

        if blocks.len() < 3 {
            return Vec::new();
        }

        vec![Finding::warn(
            blocks[0].0 + 1,
            Category::DuplicatePattern,
            format!(
                "{} try/catch blocks in one file. Extract the shared error handling into a \
                 `safeExecute`-style helper that takes the action and an error message.",
                blocks.len()
            ),
        )]
    }
}

#[cfg(test)]
#[path = "functions_tests.rs"]
mod tests;
