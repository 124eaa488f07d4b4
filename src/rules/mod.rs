mod api;
mod comments;
mod finding;
mod functions;
mod hooks;
mod organization;
mod quality;

pub use api::{DirectFetchRule, QueryClientRule};
pub use comments::CommentRule;
pub use finding::{Category, Finding, Severity};
pub use functions::{
    LongFunctionRule, ParamCountRule, RepetitiveHandlerRule, TryCatchDuplicationRule,
};
pub use hooks::{EffectHookCountRule, HookPlacementRule, StateCountRule};
pub use organization::{
    ComponentLayeringRule, InlineTypeRule, JsxSizeRule, LargeConstantRule,
    MultipleComponentsRule, ScatteredConstantsRule,
};
pub use quality::{ConsoleCallRule, FileSizeRule, UnusedImportRule};

use crate::config::RuleConfig;
use crate::engine::SourceFile;

/// An independent, pure check over one file.
///
/// Rules must not mutate shared state; execution order must not affect
/// which findings a rule produces. A rule never errors: malformed or
/// unusual syntax is undercounted, not reported as failure.
pub trait Rule {
    /// Short identifier for logs and debugging.
    fn name(&self) -> &'static str;

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding>;
}

/// Ordered collection of rules. The concatenation order of the final
/// finding list follows registry order.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

impl RuleRegistry {
    /// Build the full built-in rule set.
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self {
            rules: vec![
                Box::new(FileSizeRule::new()),
                Box::new(CommentRule::new()),
                Box::new(UnusedImportRule::new()),
                Box::new(ConsoleCallRule::new()),
                Box::new(LargeConstantRule::new()),
                Box::new(ScatteredConstantsRule::new()),
                Box::new(MultipleComponentsRule::new()),
                Box::new(InlineTypeRule::new()),
                Box::new(JsxSizeRule::new()),
                Box::new(ComponentLayeringRule::new()),
                Box::new(LongFunctionRule::new()),
                Box::new(RepetitiveHandlerRule::new()),
                Box::new(ParamCountRule::new()),
                Box::new(TryCatchDuplicationRule::new()),
                Box::new(HookPlacementRule::new()),
                Box::new(EffectHookCountRule::new()),
                Box::new(StateCountRule::new()),
                Box::new(QueryClientRule::new()),
                Box::new(DirectFetchRule::new()),
            ],
        }
    }

    #[must_use]
    pub const fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule over one file and concatenate the findings.
    #[must_use]
    pub fn scan(&self, path: &str, content: &str, config: &RuleConfig) -> Vec<Finding> {
        let file = SourceFile::new(path, content);
        self.rules
            .iter()
            .flat_map(|rule| rule.evaluate(&file, config))
            .collect()
    }
}

/// Scan one file with the built-in rule set. Pure and deterministic for
/// identical `(path, content, config)` inputs.
#[must_use]
pub fn scan(path: &str, content: &str, config: &RuleConfig) -> Vec<Finding> {
    RuleRegistry::with_default_rules().scan(path, content, config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
