use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewGuardError};

/// Numeric thresholds consumed by the rule set.
///
/// Read-only for the lifetime of a scan; editable only between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    /// Maximum lines per file.
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// Maximum lines per constant declaration.
    #[serde(default = "default_max_constant_lines")]
    pub max_constant_lines: usize,

    /// Maximum lines per function.
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,

    /// Maximum lines for a component's returned JSX block.
    #[serde(default = "default_max_jsx_lines")]
    pub max_jsx_lines: usize,

    /// Maximum local-state declarations per component.
    #[serde(default = "default_max_state_count")]
    pub max_state_count: usize,

    /// Maximum parameters per function.
    #[serde(default = "default_max_params")]
    pub max_params: usize,

    /// Cap on comment-family findings emitted for a single file.
    #[serde(default = "default_max_comment_findings")]
    pub max_comment_findings: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_file_lines: default_max_file_lines(),
            max_constant_lines: default_max_constant_lines(),
            max_function_lines: default_max_function_lines(),
            max_jsx_lines: default_max_jsx_lines(),
            max_state_count: default_max_state_count(),
            max_params: default_max_params(),
            max_comment_findings: default_max_comment_findings(),
        }
    }
}

const fn default_max_file_lines() -> usize {
    200
}

const fn default_max_constant_lines() -> usize {
    10
}

const fn default_max_function_lines() -> usize {
    30
}

const fn default_max_jsx_lines() -> usize {
    50
}

const fn default_max_state_count() -> usize {
    4
}

const fn default_max_params() -> usize {
    3
}

const fn default_max_comment_findings() -> usize {
    15
}

/// File discovery configuration for the CLI front-end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// File extensions to scan.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exclude patterns (glob syntax).
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: default_exclude(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    ["ts", "tsx", "js", "jsx"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_exclude() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/.next/**",
        "**/dist/**",
        "**/build/**",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub thresholds: RuleConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

impl Config {
    /// Validate semantic correctness beyond what deserialization enforces.
    ///
    /// # Errors
    /// Returns a `Config` error for zero thresholds or invalid exclude globs.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("max_file_lines", self.thresholds.max_file_lines),
            ("max_constant_lines", self.thresholds.max_constant_lines),
            ("max_function_lines", self.thresholds.max_function_lines),
            ("max_jsx_lines", self.thresholds.max_jsx_lines),
            ("max_state_count", self.thresholds.max_state_count),
            ("max_params", self.thresholds.max_params),
        ];
        for (name, value) in named {
            if value == 0 {
                return Err(ReviewGuardError::Config(format!(
                    "thresholds.{name} must be at least 1"
                )));
            }
        }

        for pattern in &self.scanner.exclude {
            globset::Glob::new(pattern).map_err(|e| ReviewGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }

        if self.scanner.extensions.is_empty() {
            return Err(ReviewGuardError::Config(
                "scanner.extensions cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
