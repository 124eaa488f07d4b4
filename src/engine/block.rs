use std::sync::LazyLock;

use regex::Regex;

static CATCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcatch\s*\(").expect("Invalid regex"));
static TRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\btry\s*\{").expect("Invalid regex"));

/// Find the line index where the nearest enclosing bracket construct closes.
///
/// Maintains a signed depth over `{ [ (` and `} ] )` from `start` onward and
/// returns the first line after which the depth has gone positive and come
/// back to zero or below. Bracket kinds are not paired: an unmatched `{`
/// closed by a stray `)` still terminates the scan. Bracket characters
/// inside string literals count as real brackets. If no close is found the
/// last line index is returned, never an error.
#[must_use]
pub fn find_block_end(lines: &[&str], start: usize) -> usize {
    let mut depth: i32 = 0;
    let mut started = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' | '[' | '(' => {
                    depth += 1;
                    started = true;
                }
                '}' | ']' | ')' => depth -= 1,
                _ => {}
            }
        }
        if started && depth <= 0 {
            return i;
        }
    }

    lines.len().saturating_sub(1)
}

/// True if the line at `index` sits inside a `catch` block.
///
/// Walks backwards accumulating close-minus-open brace counts per line.
/// A `catch (` seen at depth <= 0 encloses the call site; a `try {` seen
/// first at depth <= 0 means we are in the try body, not the catch.
#[must_use]
pub fn is_inside_catch_block(lines: &[&str], index: usize) -> bool {
    if lines.is_empty() {
        return false;
    }

    let mut brace_depth: i32 = 0;

    for i in (0..=index.min(lines.len() - 1)).rev() {
        let line = lines[i];
        for ch in line.chars() {
            match ch {
                '}' => brace_depth += 1,
                '{' => brace_depth -= 1,
                _ => {}
            }
        }

        if CATCH_PATTERN.is_match(line) && brace_depth <= 0 {
            return true;
        }
        if TRY_PATTERN.is_match(line) && brace_depth <= 0 {
            return false;
        }
    }

    false
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
