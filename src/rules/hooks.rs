use regex::Regex;

use crate::config::RuleConfig;
use crate::engine::{SourceFile, find_block_end};

use super::{Category, Finding, Rule};

/// Components with this many effect/memo hooks get an extraction hint.
const MAX_EFFECT_HOOKS: usize = 4;

/// Flags custom hooks declared outside the hooks folder, and plain
/// functions that call hooks without following the `use` naming convention.
pub struct HookPlacementRule {
    declaration: Regex,
    hook_name: Regex,
    hook_call: Regex,
}

impl Default for HookPlacementRule {
    fn default() -> Self {
        Self::new()
    }
}

impl HookPlacementRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(r"^(?:export\s+)?(?:const|function)\s+(\w+)")
                .expect("Invalid regex"),
            hook_name: Regex::new(r"^use[A-Z]").expect("Invalid regex"),
            hook_call: Regex::new(r"\buse[A-Z]\w*\(").expect("Invalid regex"),
        }
    }
}

impl Rule for HookPlacementRule {
    fn name(&self) -> &'static str {
        "hook-placement"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if file.in_folder("hooks") {
            return Vec::new();
        }

        let lines = &file.lines;
        let mut findings = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            let Some(caps) = self.declaration.captures(trimmed) else {
                continue;
            };
            let func_name = &caps[1];

            if self.hook_name.is_match(func_name) {
                findings.push(Finding::warn(
                    i + 1,
                    Category::HookPlacement,
                    format!(
                        "Custom hook `{func_name}` lives outside the hooks folder. Move it \
                         to `hooks/` so stateful logic stays easy to find."
                    ),
                ));
                continue;
            }

            // Uppercase names are components, which call hooks legitimately.
            if func_name.starts_with(|c: char| c.is_ascii_uppercase()) {
                continue;
            }

            let end = find_block_end(lines, i);
            let body = lines
                .get(i..=end.min(lines.len().saturating_sub(1)))
                .unwrap_or_default()
                .join("\n");

            if self.hook_call.is_match(&body) {
                findings.push(Finding::warn(
                    i + 1,
                    Category::HookPlacement,
                    format!(
                        "Function `{func_name}` calls hooks internally but is not named as \
                         one. Rename it to `use…` and move it to `hooks/`."
                    ),
                ));
            }
        }

        findings
    }
}

/// Flags components whose effect/memo hook count suggests the render is
/// carrying too much logic.
pub struct EffectHookCountRule {
    effect_call: Regex,
    callback_call: Regex,
    memo_call: Regex,
}

impl Default for EffectHookCountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectHookCountRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            effect_call: Regex::new(r"useEffect\s*\(").expect("Invalid regex"),
            callback_call: Regex::new(r"useCallback\s*\(").expect("Invalid regex"),
            memo_call: Regex::new(r"useMemo\s*\(").expect("Invalid regex"),
        }
    }
}

impl Rule for EffectHookCountRule {
    fn name(&self) -> &'static str {
        "effect-hook-count"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if !file.is_component() {
            return Vec::new();
        }

        let total = self.effect_call.find_iter(file.text).count()
            + self.callback_call.find_iter(file.text).count()
            + self.memo_call.find_iter(file.text).count();

        if total < MAX_EFFECT_HOOKS {
            return Vec::new();
        }

        vec![Finding::warn(
            1,
            Category::HookExtraction,
            format!(
                "Component declares {total} effect/memo hooks, coupling the logic to the \
                 render. Extract the related hooks into a custom hook that exposes just \
                 the data the component needs."
            ),
        )]
    }
}

/// Flags components with more local-state declarations than the configured
/// maximum, listing the inferred state names in declaration order.
pub struct StateCountRule {
    use_state: Regex,
    state_name: Regex,
}

impl Default for StateCountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCountRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_state: Regex::new(r"\buseState\b").expect("Invalid regex"),
            state_name: Regex::new(r"const\s*\[(\w+)").expect("Invalid regex"),
        }
    }
}

impl Rule for StateCountRule {
    fn name(&self) -> &'static str {
        "state-count"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        if !file.is_component() {
            return Vec::new();
        }

        let mut declarations = Vec::new();
        for (i, line) in file.lines.iter().enumerate() {
            if self.use_state.is_match(line) {
                let name = self
                    .state_name
                    .captures(line)
                    .map_or("state", |caps| caps.get(1).map_or("state", |m| m.as_str()));
                declarations.push((name.to_string(), i + 1));
            }
        }

        if declarations.len() <= config.max_state_count {
            return Vec::new();
        }

        let names = declarations
            .iter()
            .map(|(name, _)| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");

        vec![Finding::warn(
            declarations[0].1,
            Category::TooManyStates,
            format!(
                "{} useState declarations in this component: {names}. Group related state \
                 into a custom hook, switch to a reducer when the pieces change together, \
                 or split the component.",
                declarations.len()
            ),
        )]
    }
}

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;
