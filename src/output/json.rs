use serde::Serialize;

use crate::error::Result;
use crate::rules::Finding;

use super::{FileReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileEntry<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    clean: usize,
    flagged: usize,
    total_findings: usize,
}

#[derive(Serialize)]
struct FileEntry<'a> {
    path: &'a str,
    findings: &'a [Finding],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let flagged = reports.iter().filter(|r| !r.is_clean()).count();
        let total_findings = reports.iter().map(|r| r.findings.len()).sum();

        let output = JsonOutput {
            summary: Summary {
                total_files: reports.len(),
                clean: reports.len() - flagged,
                flagged,
                total_findings,
            },
            files: reports
                .iter()
                .map(|r| FileEntry {
                    path: &r.path,
                    findings: &r.findings,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
