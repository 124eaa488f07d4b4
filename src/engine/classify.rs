use regex::Regex;

/// Annotation words recognized after a `//` marker, uppercased for display.
const MARKER_WORDS: &str = "todo|fixme|hack|xxx|bug|note";

/// Lexical classification of single source lines.
///
/// Purely regex-driven: there is no tokenizer, so comment markers inside
/// string or regex literals are misclassified. That is an accepted
/// limitation of the line-oriented approach, not a defect.
pub struct LineClassifier {
    pragma_pattern: Regex,
    string_directive_pattern: Regex,
    doc_open_pattern: Regex,
    inline_trailing_pattern: Regex,
    url_pattern: Regex,
    marker_strip_pattern: Regex,
    marker_tag_pattern: Regex,
    code_patterns: Vec<Regex>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier {
    #[must_use]
    pub fn new() -> Self {
        let code_sources = [
            // Control/declaration keyword prefix
            r"^(const|let|var|function|class|import|export|return|if|else|for|while|switch|case|break|continue|throw|try|catch|finally|await|async)\b",
            // Assignment or comparison
            r"^\w+\s*[=!<>]+",
            // Member call
            r"^\w+\.\w+\s*\(",
            // JSX tag open/close
            r"^</?[A-Z]",
            // Lone closing brackets
            r"^[}\]);]+\s*$",
            // Lone opening brackets
            r"^[{\[(]+\s*$",
            // Type-annotation-like colon
            r"^\w+\s*:\s*\w",
            // Arrow-function tail
            r"=>\s*\{?\s*$",
        ];

        Self {
            pragma_pattern: Regex::new(r"^\s*/[/*]\s*(eslint|@ts-|prettier|istanbul|c8|vitest|jest)")
                .expect("Invalid regex"),
            string_directive_pattern: Regex::new(r#"^['"]use (client|server)['"]"#)
                .expect("Invalid regex"),
            doc_open_pattern: Regex::new(r"^\s*/\*\*").expect("Invalid regex"),
            inline_trailing_pattern: Regex::new(r"\S+.*//\s*\S").expect("Invalid regex"),
            url_pattern: Regex::new(r"https?://").expect("Invalid regex"),
            marker_strip_pattern: Regex::new(r"^\s*//\s?").expect("Invalid regex"),
            marker_tag_pattern: Regex::new(&format!(r"(?i)//\s*({MARKER_WORDS})\b"))
                .expect("Invalid regex"),
            code_patterns: code_sources
                .iter()
                .map(|s| Regex::new(s).expect("Invalid regex"))
                .collect(),
        }
    }

    /// Tool pragma (`// eslint-disable`, `/* istanbul ignore */`, ...);
    /// these lines are never reported.
    #[must_use]
    pub fn is_ignored_directive(&self, line: &str) -> bool {
        self.pragma_pattern.is_match(line)
    }

    /// Language-level execution-mode pragma (`'use client'` / `'use server'`).
    #[must_use]
    pub fn is_string_directive(&self, trimmed: &str) -> bool {
        self.string_directive_pattern.is_match(trimmed)
    }

    /// Documentation block opener (`/**`); doc blocks are skipped wholesale.
    #[must_use]
    pub fn is_doc_comment_open(&self, line: &str) -> bool {
        self.doc_open_pattern.is_match(line)
    }

    /// Plain block-comment opener: contains `/*` but not the doc form `/**`.
    #[must_use]
    pub fn is_block_comment_open(trimmed: &str) -> bool {
        trimmed.contains("/*") && !trimmed.contains("/**")
    }

    #[must_use]
    pub fn has_block_comment_close(trimmed: &str) -> bool {
        trimmed.contains("*/")
    }

    #[must_use]
    pub fn is_line_comment(trimmed: &str) -> bool {
        trimmed.starts_with("//")
    }

    /// Code followed by a comment marker on the same line, excluding URLs.
    #[must_use]
    pub fn is_inline_trailing_comment(&self, trimmed: &str) -> bool {
        self.inline_trailing_pattern.is_match(trimmed)
            && !self.url_pattern.is_match(trimmed)
            && !trimmed.starts_with("//")
    }

    /// Heuristic: does this line comment look like disabled code rather than
    /// prose? Strips the `//` marker and matches against a fixed set of
    /// code-shaped patterns. False positives/negatives are accepted; the
    /// pattern list is the contract (a comment containing only `}` counts).
    #[must_use]
    pub fn looks_like_commented_code(&self, line: &str) -> bool {
        let stripped = self.marker_strip_pattern.replace(line, "");
        let stripped = stripped.trim();
        stripped.len() > 2 && self.code_patterns.iter().any(|p| p.is_match(stripped))
    }

    /// Uppercased annotation tag (TODO, FIXME, ...) if the comment carries one.
    #[must_use]
    pub fn marker_tag(&self, line: &str) -> Option<String> {
        self.marker_tag_pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_uppercase())
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
