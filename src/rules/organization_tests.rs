use super::*;

// --- LargeConstantRule ---

fn constant_findings(path: &str, source: &str, max_constant_lines: usize) -> Vec<Finding> {
    let config = RuleConfig {
        max_constant_lines,
        ..RuleConfig::default()
    };
    let file = SourceFile::new(path, source);
    LargeConstantRule::new().evaluate(&file, &config)
}

#[test]
fn constant_over_limit_is_flagged() {
    let source = "\
export const STATUS_LABELS = {\n\
  open: 'Open',\n\
  closed: 'Closed',\n\
};";
    let findings = constant_findings("src/components/Status.tsx", source, 2);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::LargeConstant);
    assert!(findings[0].message.contains("`STATUS_LABELS`"));
    assert!(findings[0].message.contains("4 lines"));
}

#[test]
fn constant_within_limit_passes() {
    let source = "const MAX_RETRIES = 3;";
    assert!(constant_findings("src/lib/retry.ts", source, 10).is_empty());
}

#[test]
fn lowercase_constants_are_not_measured() {
    let source = "const labels = {\n  open: 'Open',\n  closed: 'Closed',\n};";
    assert!(constant_findings("src/lib/labels.ts", source, 2).is_empty());
}

#[test]
fn constants_folder_is_exempt_from_size() {
    let source = "export const STATUS_LABELS = {\n  open: 'Open',\n  closed: 'Closed',\n};";
    assert!(constant_findings("src/constants/status.ts", source, 2).is_empty());
    assert!(constant_findings("src/consts/status.ts", source, 2).is_empty());
}

// --- ScatteredConstantsRule ---

fn scattered_findings(path: &str, source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new(path, source);
    ScatteredConstantsRule::new().evaluate(&file, &config)
}

#[test]
fn three_scattered_constants_produce_one_finding() {
    let source = "\
const MAX_RETRIES = 3;\n\
function work() {}\n\
const TIMEOUT_MS = 5000;\n\
export const API_VERSION = 'v2';";
    let findings = scattered_findings("src/lib/client.ts", source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::ScatteredConstants);
    assert!(findings[0].message.contains("`MAX_RETRIES`"));
    assert!(findings[0].message.contains("`TIMEOUT_MS`"));
    assert!(findings[0].message.contains("`API_VERSION`"));
}

#[test]
fn two_constants_pass() {
    let source = "const MAX_RETRIES = 3;\nconst TIMEOUT_MS = 5000;";
    assert!(scattered_findings("src/lib/client.ts", source).is_empty());
}

#[test]
fn constants_folder_is_exempt_from_scatter() {
    let source = "const AA = 1;\nconst BB = 2;\nconst CC = 3;";
    assert!(scattered_findings("src/constants/all.ts", source).is_empty());
}

// --- MultipleComponentsRule ---

fn component_findings(path: &str, source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new(path, source);
    MultipleComponentsRule::new().evaluate(&file, &config)
}

#[test]
fn two_components_in_one_file_are_flagged_at_the_second() {
    let source = "\
export function Header() {\n\
  return null;\n\
}\n\
export const Footer = () => {\n\
  return null;\n\
}";
    let findings = component_findings("src/components/Layout.tsx", source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 4);
    assert_eq!(findings[0].category, Category::MultipleComponents);
    assert!(findings[0].message.contains("`Header`"));
    assert!(findings[0].message.contains("`Footer`"));
}

#[test]
fn single_component_passes() {
    let source = "export function Header() {\n  return null;\n}";
    assert!(component_findings("src/components/Header.tsx", source).is_empty());
}

#[test]
fn helpers_with_lowercase_names_are_not_components() {
    let source = "\
export function Header() {\n\
  return null;\n\
}\n\
function formatTitle() {\n\
  return '';\n\
}";
    assert!(component_findings("src/components/Header.tsx", source).is_empty());
}

#[test]
fn wrapped_component_declarations_are_detected() {
    let source = "\
export const Card = React.memo(() => null);\n\
export const Title = forwardRef(() => null);";
    let findings = component_findings("src/components/Card.tsx", source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 2);
}

// --- InlineTypeRule ---

fn type_findings(path: &str, source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new(path, source);
    InlineTypeRule::new().evaluate(&file, &config)
}

#[test]
fn long_inline_interface_is_flagged() {
    let source = "\
interface Props {\n\
  id: string;\n\
  name: string;\n\
  email: string;\n\
  age: number;\n\
  active: boolean;\n\
}";
    let findings = type_findings("src/components/Profile.tsx", source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::InlineType);
    assert!(findings[0].message.contains("`Props`"));
}

#[test]
fn short_inline_type_passes() {
    let source = "type Id = string;\nconst x: Id = 'a';";
    assert!(type_findings("src/lib/ids.ts", source).is_empty());
}

#[test]
fn three_types_in_a_component_get_a_grouping_finding() {
    let source = "\
type A = { id: string };\n\
type B = { name: string };\n\
type C = { flag: boolean };\n\
export function Widget() {\n\
  return null;\n\
}";
    let findings = type_findings("src/components/Widget.tsx", source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert!(findings[0].message.contains("3 type declarations"));
}

#[test]
fn type_files_and_folders_are_exempt() {
    let long_interface = "\
interface Props {\n\
  id: string;\n\
  name: string;\n\
  email: string;\n\
  age: number;\n\
  active: boolean;\n\
}";
    assert!(type_findings("src/types/props.ts", long_interface).is_empty());
    assert!(type_findings("src/components/profile.types.ts", long_interface).is_empty());
    assert!(type_findings("src/globals.d.ts", long_interface).is_empty());
}

// --- JsxSizeRule ---

fn jsx_findings(path: &str, source: &str, max_jsx_lines: usize) -> Vec<Finding> {
    let config = RuleConfig {
        max_jsx_lines,
        ..RuleConfig::default()
    };
    let file = SourceFile::new(path, source);
    JsxSizeRule::new().evaluate(&file, &config)
}

#[test]
fn oversized_jsx_return_is_flagged() {
    let source = "\
export function Page() {\n\
  return (\n\
    <main>\n\
      <section>content</section>\n\
    </main>\n\
  );\n\
}";
    let findings = jsx_findings("src/components/Page.tsx", source, 3);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 2);
    assert_eq!(findings[0].category, Category::LargeJsx);
    assert!(findings[0].message.contains("5 lines"));
}

#[test]
fn jsx_within_limit_passes() {
    let source = "\
export function Page() {\n\
  return (\n\
    <main>content</main>\n\
  );\n\
}";
    assert!(jsx_findings("src/components/Page.tsx", source, 3).is_empty());
}

#[test]
fn jsx_size_only_applies_to_components() {
    let source = "\
function build() {\n\
  return (\n\
    makeA() +\n\
    makeB() +\n\
    makeC()\n\
  );\n\
}";
    assert!(jsx_findings("src/lib/build.ts", source, 3).is_empty());
}

// --- ComponentLayeringRule ---

fn layering_findings(path: &str, source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new(path, source);
    ComponentLayeringRule::new().evaluate(&file, &config)
}

#[test]
fn stateless_component_suggests_atoms() {
    let source = "export function Badge() {\n  return <span>ok</span>;\n}";
    let findings = layering_findings("src/components/Badge.tsx", source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::ComponentLayering);
    assert!(findings[0].message.contains("components/atoms/Badge.tsx"));
}

#[test]
fn small_stateful_component_suggests_molecules() {
    let source = "\
export function Toggle() {\n\
  const [on, setOn] = useState(false);\n\
  return <Switch value={on} />;\n\
}";
    let findings = layering_findings("src/components/Toggle.tsx", source);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("components/molecules/Toggle.tsx"));
}

#[test]
fn stateful_section_suggests_organisms() {
    let source = "\
export function Dashboard() {\n\
  const [a, setA] = useState(0);\n\
  const [b, setB] = useState(0);\n\
  const [c, setC] = useState(0);\n\
  return <Grid><Chart /><Chart /><Chart /><Legend /></Grid>;\n\
}";
    let findings = layering_findings("src/components/Dashboard.tsx", source);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("components/organisms/Dashboard.tsx"));
}

#[test]
fn nested_component_folders_are_left_alone() {
    let source = "export function Badge() {\n  return <span>ok</span>;\n}";
    assert!(layering_findings("src/components/atoms/Badge.tsx", source).is_empty());
    assert!(layering_findings("src/components/ui/Badge.tsx", source).is_empty());
}
