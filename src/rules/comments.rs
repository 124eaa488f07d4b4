use crate::config::RuleConfig;
use crate::engine::{LineClassifier, SourceFile};

use super::{Category, Finding, Rule};

/// Flags comments: prose comments, commented-out code, TODO-style markers,
/// inline trailing comments, and multi-line comment blocks.
///
/// Tool pragmas, `use client`/`use server` directives and doc comments
/// (`/** ... */`) are skipped. A scan-local counter caps the number of
/// comment-family findings per file so comment-heavy legacy files do not
/// drown the review; once the cap is hit further comment lines are still
/// classified but suppressed.
pub struct CommentRule {
    classifier: LineClassifier,
}

impl Default for CommentRule {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }
}

impl Rule for CommentRule {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        let lines = &file.lines;
        let cap = config.max_comment_findings;
        let mut findings = Vec::new();
        let mut flagged = 0usize;
        let mut in_block = false;
        let mut block_start = 0usize;

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            let trimmed = line.trim();

            if self.classifier.is_ignored_directive(line)
                || self.classifier.is_string_directive(trimmed)
            {
                i += 1;
                continue;
            }

            if !in_block && LineClassifier::is_block_comment_open(trimmed) {
                in_block = true;
                block_start = i;
                if LineClassifier::has_block_comment_close(trimmed) {
                    in_block = false;
                    if flagged < cap {
                        flagged += 1;
                        findings.push(Finding::warn(
                            i + 1,
                            Category::Comment,
                            "Comment found. Prefer self-documenting code: descriptive names \
                             usually make the comment unnecessary.",
                        ));
                    }
                }
                i += 1;
                continue;
            }

            if in_block && LineClassifier::has_block_comment_close(trimmed) {
                in_block = false;
                if flagged < cap {
                    flagged += 1;
                    let block_len = i - block_start + 1;
                    findings.push(Finding::warn(
                        block_start + 1,
                        Category::Comment,
                        format!(
                            "Comment block spans {block_len} lines. Long comments often point \
                             at code that should be simplified or extracted into a well-named \
                             function."
                        ),
                    ));
                }
                i += 1;
                continue;
            }
            if in_block {
                i += 1;
                continue;
            }

            // Doc comments are skipped wholesale until their close marker.
            if self.classifier.is_doc_comment_open(line) {
                while i < lines.len() && !LineClassifier::has_block_comment_close(lines[i]) {
                    i += 1;
                }
                i += 1;
                continue;
            }

            if LineClassifier::is_line_comment(trimmed) {
                if flagged >= cap {
                    i += 1;
                    continue;
                }
                flagged += 1;
                findings.push(self.classify_line_comment(line, i + 1));
                i += 1;
                continue;
            }

            if self.classifier.is_inline_trailing_comment(trimmed) && flagged < cap {
                flagged += 1;
                findings.push(Finding::warn(
                    i + 1,
                    Category::InlineComment,
                    "Inline comment on a code line. Move it above the line, or improve the \
                     names so it is not needed.",
                ));
            }
            i += 1;
        }

        findings
    }
}

impl CommentRule {
    fn classify_line_comment(&self, line: &str, line_number: usize) -> Finding {
        if self.classifier.looks_like_commented_code(line) {
            return Finding::warn(
                line_number,
                Category::CommentedCode,
                "Commented-out code. Remove it before merging; version control keeps the \
                 history if you need it back.",
            );
        }

        if let Some(tag) = self.classifier.marker_tag(line) {
            return Finding::warn(
                line_number,
                Category::TodoComment,
                format!(
                    "{tag} marker found. Resolve it before merging, or file an issue and \
                     reference it here so it is not lost."
                ),
            );
        }

        Finding::warn(
            line_number,
            Category::Comment,
            "Comment found. Prefer self-documenting code: descriptive names usually make \
             the comment unnecessary.",
        )
    }
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
