use serde::Serialize;

/// Severity of a reported finding. There is no `info` or `fatal` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// Machine-readable tag used by the orchestrator for grouping and
/// suppression. Not interpreted by the scan itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Comment,
    CommentedCode,
    TodoComment,
    InlineComment,
    FileSize,
    UnusedImport,
    ConsoleLog,
    ConsoleInCatch,
    LongFunction,
    TooManyParams,
    RepetitivePattern,
    DuplicatePattern,
    HookPlacement,
    HookExtraction,
    TooManyStates,
    QueryInComponent,
    FetchInComponent,
    LargeConstant,
    ScatteredConstants,
    MultipleComponents,
    InlineType,
    LargeJsx,
    ComponentLayering,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::CommentedCode => "commented-code",
            Self::TodoComment => "todo-comment",
            Self::InlineComment => "inline-comment",
            Self::FileSize => "file-size",
            Self::UnusedImport => "unused-import",
            Self::ConsoleLog => "console-log",
            Self::ConsoleInCatch => "console-in-catch",
            Self::LongFunction => "long-function",
            Self::TooManyParams => "too-many-params",
            Self::RepetitivePattern => "repetitive-pattern",
            Self::DuplicatePattern => "duplicate-pattern",
            Self::HookPlacement => "hook-placement",
            Self::HookExtraction => "hook-extraction",
            Self::TooManyStates => "too-many-states",
            Self::QueryInComponent => "query-in-component",
            Self::FetchInComponent => "fetch-in-component",
            Self::LargeConstant => "large-constant",
            Self::ScatteredConstants => "scattered-constants",
            Self::MultipleComponents => "multiple-components",
            Self::InlineType => "inline-type",
            Self::LargeJsx => "large-jsx",
            Self::ComponentLayering => "component-layering",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported convention violation.
///
/// Findings carry no identity beyond their fields; duplicates across rules
/// are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 1-based line number.
    pub line: usize,
    /// Free-form review text; may contain multi-line guidance.
    pub message: String,
    pub severity: Severity,
    pub category: Category,
}

impl Finding {
    #[must_use]
    pub fn warn(line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            severity: Severity::Warn,
            category,
        }
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
