use std::io::Write as IoWrite;

use crate::error::Result;
use crate::rules::Severity;

use super::{FileReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &FileReport, output: &mut Vec<u8>) {
        let header = format!(
            "⚠ {} ({} finding{})",
            report.path,
            report.findings.len(),
            if report.findings.len() == 1 { "" } else { "s" }
        );
        writeln!(output, "{}", self.colorize(&header, ansi::YELLOW)).ok();

        for finding in &report.findings {
            let severity = match finding.severity {
                Severity::Warn => "warn",
                Severity::Error => "error",
            };
            let tag = self.colorize(
                &format!("{severity} [{}]", finding.category),
                ansi::DIM,
            );
            // Multi-line guidance stays aligned under its first line.
            let mut lines = finding.message.lines();
            if let Some(first) = lines.next() {
                writeln!(output, "   line {:<4} {tag} {first}", finding.line).ok();
            }
            for rest in lines {
                writeln!(output, "              {rest}").ok();
            }
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let mut output = Vec::new();

        let flagged: Vec<_> = reports.iter().filter(|r| !r.is_clean()).collect();
        let clean_count = reports.len() - flagged.len();
        let total_findings: usize = flagged.iter().map(|r| r.findings.len()).sum();

        for report in &flagged {
            self.format_report(report, &mut output);
            writeln!(output).ok();
        }

        // Show clean files only in verbose mode
        if self.verbose >= 1 {
            for report in reports.iter().filter(|r| r.is_clean()) {
                let line = format!("✓ {}", report.path);
                writeln!(output, "{}", self.colorize(&line, ansi::GREEN)).ok();
            }
            if clean_count > 0 {
                writeln!(output).ok();
            }
        }

        let clean_str = self.colorize(&clean_count.to_string(), ansi::GREEN);
        let flagged_str = self.colorize(&flagged.len().to_string(), ansi::YELLOW);
        let findings_str = self.colorize(&total_findings.to_string(), ansi::RED);
        writeln!(
            output,
            "Summary: {} files checked, {clean_str} clean, {flagged_str} flagged, \
             {findings_str} findings",
            reports.len()
        )
        .ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
