use super::*;

// --- LongFunctionRule ---

fn long_functions(source: &str, max_function_lines: usize) -> Vec<Finding> {
    let config = RuleConfig {
        max_function_lines,
        ..RuleConfig::default()
    };
    let file = SourceFile::new("a.ts", source);
    LongFunctionRule::new().evaluate(&file, &config)
}

#[test]
fn function_over_limit_is_flagged() {
    let source = "function doWork() {\n  a();\n  b();\n}";
    let findings = long_functions(source, 3);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::LongFunction);
    assert!(findings[0].message.contains("`doWork`"));
    assert!(findings[0].message.contains("4 lines"));
}

#[test]
fn function_at_limit_passes() {
    let source = "function doWork() {\n  a();\n}";
    assert!(long_functions(source, 3).is_empty());
}

#[test]
fn arrow_function_span_is_measured() {
    let source = "const doWork = () => {\n  a();\n  b();\n}";
    let findings = long_functions(source, 3);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("`doWork`"));
}

#[test]
fn each_long_function_gets_its_own_finding() {
    let source = "\
function first() {\n  a();\n  b();\n}\n\
function second() {\n  c();\n  d();\n}";
    let findings = long_functions(source, 3);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[1].line, 5);
}

// --- RepetitiveHandlerRule ---

fn handler_findings(source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new("a.tsx", source);
    RepetitiveHandlerRule::new().evaluate(&file, &config)
}

#[test]
fn three_handlers_with_shared_shape_produce_one_finding() {
    let source = "\
function handleSave() {\n\
  const res = fetch('/records');\n\
  setData(res);\n\
}\n\
function handleDelete() {\n\
  const res = fetch('/records/1');\n\
  setData(res);\n\
}\n\
function handleClose() {\n\
  close();\n\
}";
    let findings = handler_findings(source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::RepetitivePattern);
    assert!(findings[0].message.contains("`handleSave`"));
    assert!(findings[0].message.contains("`handleDelete`"));
    assert!(findings[0].message.contains("`handleClose`"));
}

#[test]
fn two_handlers_are_not_enough() {
    let source = "\
function handleSave() {\n\
  const res = fetch('/records');\n\
  setData(res);\n\
}\n\
function handleDelete() {\n\
  const res = fetch('/records/1');\n\
  setData(res);\n\
}";
    assert!(handler_findings(source).is_empty());
}

#[test]
fn handlers_without_shared_shape_pass() {
    let source = "\
function handleSave() {\n\
  save();\n\
}\n\
function handleDelete() {\n\
  remove();\n\
}\n\
function handleClose() {\n\
  close();\n\
}";
    assert!(handler_findings(source).is_empty());
}

#[test]
fn non_handler_names_are_ignored() {
    let source = "\
function loadUsers() {\n\
  const res = fetch('/users');\n\
  setUsers(res);\n\
}\n\
function loadPosts() {\n\
  const res = fetch('/posts');\n\
  setPosts(res);\n\
}\n\
function loadTags() {\n\
  const res = fetch('/tags');\n\
  setTags(res);\n\
}";
    assert!(handler_findings(source).is_empty());
}

// --- ParamCountRule ---

fn param_findings(source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new("a.ts", source);
    ParamCountRule::new().evaluate(&file, &config)
}

#[test]
fn four_params_exceed_default_limit() {
    let findings = param_findings("function build(a, b, c, d) {\n  return a;\n}");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::TooManyParams);
    assert!(findings[0].message.contains("`build`"));
    assert!(findings[0].message.contains("4 parameters"));
}

#[test]
fn three_params_pass_default_limit() {
    assert!(param_findings("function build(a, b, c) {\n  return a;\n}").is_empty());
}

#[test]
fn empty_parameter_list_passes() {
    assert!(param_findings("function build() {\n  return 1;\n}").is_empty());
}

#[test]
fn arrow_function_params_are_counted() {
    let findings = param_findings("const build = (a, b, c, d) => {\n  return a;\n}");
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("`build`"));
}

// --- TryCatchDuplicationRule ---

fn try_findings(source: &str) -> Vec<Finding> {
    let config = RuleConfig::default();
    let file = SourceFile::new("a.ts", source);
    TryCatchDuplicationRule::new().evaluate(&file, &config)
}

#[test]
fn three_try_blocks_produce_one_finding_at_the_first() {
    let source = "\
try {\n  a();\n} catch (e) {}\n\
try {\n  b();\n} catch (e) {}\n\
try {\n  c();\n} catch (e) {}";
    let findings = try_findings(source);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, 1);
    assert_eq!(findings[0].category, Category::DuplicatePattern);
    assert!(findings[0].message.contains("3 try/catch"));
}

#[test]
fn two_try_blocks_pass() {
    let source = "try {\n  a();\n} catch (e) {}\ntry {\n  b();\n} catch (e) {}";
    assert!(try_findings(source).is_empty());
}
