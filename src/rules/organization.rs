use std::path::Path;

use regex::Regex;

use crate::config::RuleConfig;
use crate::engine::{SourceFile, find_block_end};

use super::{Category, Finding, Rule};

/// Type/interface declarations longer than this get an extraction hint.
const MAX_INLINE_TYPE_LINES: usize = 5;

/// Flags UPPER_CASE constant declarations whose span exceeds the limit.
/// Files already inside a constants folder are exempt.
pub struct LargeConstantRule {
    const_decl: Regex,
}

impl Default for LargeConstantRule {
    fn default() -> Self {
        Self::new()
    }
}

impl LargeConstantRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            const_decl: Regex::new(r"^(?:export\s+)?const\s+([A-Z_][A-Z0-9_]*)\s*[=:]")
                .expect("Invalid regex"),
        }
    }
}

impl Rule for LargeConstantRule {
    fn name(&self) -> &'static str {
        "large-constants"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        if file.in_folder("consts") || file.in_folder("constants") {
            return Vec::new();
        }

        let lines = &file.lines;
        let mut findings = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = self.const_decl.captures(line.trim()) else {
                continue;
            };
            let name = &caps[1];

            let end = find_block_end(lines, i);
            let length = end - i + 1;

            if length > config.max_constant_lines {
                findings.push(Finding::warn(
                    i + 1,
                    Category::LargeConstant,
                    format!(
                        "Constant `{name}` spans {length} lines (limit {}). Move it to its \
                         own file under the constants folder so the module stays focused.",
                        config.max_constant_lines
                    ),
                ));
            }
        }

        findings
    }
}

/// Flags 3+ dispersed UPPER_CASE constants in one file.
pub struct ScatteredConstantsRule {
    upper_const: Regex,
}

impl Default for ScatteredConstantsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatteredConstantsRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            upper_const: Regex::new(r"^(?:export\s+)?const\s+([A-Z_]{2,})\s*=")
                .expect("Invalid regex"),
        }
    }
}

impl Rule for ScatteredConstantsRule {
    fn name(&self) -> &'static str {
        "scattered-constants"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if file.in_folder("consts") || file.in_folder("constants") {
            return Vec::new();
        }

        let mut constants = Vec::new();
        for (i, line) in file.lines.iter().enumerate() {
            if let Some(caps) = self.upper_const.captures(line.trim()) {
                constants.push((caps[1].to_string(), i + 1));
            }
        }

        if constants.len() < 3 {
            return Vec::new();
        }

        let names = constants
            .iter()
            .map(|(name, _)| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");

        vec![Finding::warn(
            constants[0].1,
            Category::ScatteredConstants,
            format!(
                "{} uppercase constants scattered in one file: {names}. Group them in a \
                 dedicated constants module so they can be reused without circular imports.",
                constants.len()
            ),
        )]
    }
}

/// Flags files declaring more than one component.
pub struct MultipleComponentsRule {
    fn_component: Regex,
    arrow_component: Regex,
}

impl Default for MultipleComponentsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipleComponentsRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_component: Regex::new(r"^(?:export\s+)?(?:default\s+)?function\s+([A-Z]\w*)\s*\(")
                .expect("Invalid regex"),
            arrow_component: Regex::new(
                r"^(?:export\s+)?const\s+([A-Z]\w*)\s*[=:]\s*(?:\([^)]*\)\s*=>|React\.FC|React\.memo|forwardRef|memo\()",
            )
            .expect("Invalid regex"),
        }
    }
}

impl Rule for MultipleComponentsRule {
    fn name(&self) -> &'static str {
        "multiple-components"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if !file.is_component() {
            return Vec::new();
        }

        let mut declarations = Vec::new();
        for (i, line) in file.lines.iter().enumerate() {
            let trimmed = line.trim();
            if let Some(caps) = self.fn_component.captures(trimmed) {
                declarations.push((caps[1].to_string(), i + 1));
            } else if let Some(caps) = self.arrow_component.captures(trimmed) {
                declarations.push((caps[1].to_string(), i + 1));
            }
        }

        if declarations.len() <= 1 {
            return Vec::new();
        }

        let names = declarations
            .iter()
            .map(|(name, _)| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");

        vec![Finding::warn(
            declarations[1].1,
            Category::MultipleComponents,
            format!(
                "{} components declared in one file: {names}. Give each component its own \
                 file so they can be tested and imported independently.",
                declarations.len()
            ),
        )]
    }
}

/// Flags long inline type/interface declarations, and components defining
/// several types.
pub struct InlineTypeRule {
    type_decl: Regex,
}

impl Default for InlineTypeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineTypeRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            type_decl: Regex::new(r"^(?:export\s+)?(?:type|interface)\s+(\w+)")
                .expect("Invalid regex"),
        }
    }
}

impl Rule for InlineTypeRule {
    fn name(&self) -> &'static str {
        "inline-types"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if file.in_folder("types") || file.in_folder("interfaces") {
            return Vec::new();
        }
        if file.path.ends_with(".types.ts") || file.path.ends_with(".d.ts") {
            return Vec::new();
        }

        let lines = &file.lines;
        let mut declarations = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let Some(caps) = self.type_decl.captures(line.trim()) else {
                continue;
            };
            let end = find_block_end(lines, i);
            declarations.push((caps[1].to_string(), i + 1, end - i + 1));
        }

        let mut findings = Vec::new();

        for (name, line, length) in &declarations {
            if *length > MAX_INLINE_TYPE_LINES {
                findings.push(Finding::warn(
                    *line,
                    Category::InlineType,
                    format!(
                        "Type `{name}` declared inline ({length} lines). Move it to the \
                         types folder so other files can import it without circular \
                         dependencies."
                    ),
                ));
            }
        }

        if declarations.len() >= 3 && file.is_component() {
            let names = declarations
                .iter()
                .map(|(name, _, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            findings.push(Finding::warn(
                declarations[0].1,
                Category::InlineType,
                format!(
                    "{} type declarations in a component file ({names}). Move them to the \
                     types folder and import them where needed.",
                    declarations.len()
                ),
            ));
        }

        findings
    }
}

/// Flags components whose first returned JSX block exceeds the limit.
pub struct JsxSizeRule {
    return_open: Regex,
}

impl Default for JsxSizeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl JsxSizeRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            return_open: Regex::new(r"^\s*return\s*\(").expect("Invalid regex"),
        }
    }
}

impl Rule for JsxSizeRule {
    fn name(&self) -> &'static str {
        "jsx-size"
    }

    fn evaluate(&self, file: &SourceFile<'_>, config: &RuleConfig) -> Vec<Finding> {
        if !file.is_component() {
            return Vec::new();
        }

        let lines = &file.lines;
        let Some(start) = lines.iter().position(|line| self.return_open.is_match(line)) else {
            return Vec::new();
        };

        let end = find_block_end(lines, start);
        let length = end - start + 1;

        if length <= config.max_jsx_lines {
            return Vec::new();
        }

        vec![Finding::warn(
            start + 1,
            Category::LargeJsx,
            format!(
                "Returned JSX spans {length} lines (limit {}). Split the markup into \
                 subcomponents: sections, lists, forms, and modals each deserve their own \
                 component.",
                config.max_jsx_lines
            ),
        )]
    }
}

/// Suggests an atoms/molecules/organisms subfolder for components sitting
/// directly under `components/`, based on rough state/effect/JSX counts.
pub struct ComponentLayeringRule {
    components_root: Regex,
    jsx_element: Regex,
}

impl Default for ComponentLayeringRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentLayeringRule {
    #[must_use]
    pub fn new() -> Self {
        Self {
            components_root: Regex::new(r"/components/[^/]+\.tsx$").expect("Invalid regex"),
            jsx_element: Regex::new(r"<[A-Z]").expect("Invalid regex"),
        }
    }

    fn suggested_layer(state_count: usize, effect_count: usize, jsx_count: usize) -> &'static str {
        if state_count == 0 && effect_count == 0 && jsx_count <= 3 {
            "atoms"
        } else if state_count <= 2 && jsx_count <= 8 {
            "molecules"
        } else {
            "organisms"
        }
    }
}

impl Rule for ComponentLayeringRule {
    fn name(&self) -> &'static str {
        "component-layering"
    }

    fn evaluate(&self, file: &SourceFile<'_>, _config: &RuleConfig) -> Vec<Finding> {
        if !file.is_component() || file.in_folder("ui") {
            return Vec::new();
        }

        let normalized = file.path.replace('\\', "/");
        if !self.components_root.is_match(&normalized) {
            return Vec::new();
        }

        let state_count = file.text.matches("useState").count();
        let effect_count = file.text.matches("useEffect").count();
        let jsx_count = self.jsx_element.find_iter(file.text).count();

        let layer = Self::suggested_layer(state_count, effect_count, jsx_count);
        let file_name = Path::new(file.path)
            .file_stem()
            .map_or_else(|| file.path.to_string(), |s| s.to_string_lossy().into_owned());

        vec![Finding::warn(
            1,
            Category::ComponentLayering,
            format!(
                "Component sits directly under `components/`; it could live in \
                 `components/{layer}/{file_name}.tsx`. Atoms are stateless pieces, \
                 molecules small combinations, organisms complex sections with logic."
            ),
        )]
    }
}

#[cfg(test)]
#[path = "organization_tests.rs"]
mod tests;
