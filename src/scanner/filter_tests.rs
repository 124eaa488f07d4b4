use std::path::Path;

use super::*;
use crate::config::ScannerConfig;

#[test]
fn filter_by_extension() {
    let filter = GlobFilter::new(vec!["ts".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("src/index.ts")));
    assert!(!filter.should_include(Path::new("src/styles.css")));
}

#[test]
fn filter_multiple_extensions() {
    let filter = GlobFilter::new(vec!["ts".to_string(), "tsx".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("index.ts")));
    assert!(filter.should_include(Path::new("App.tsx")));
    assert!(!filter.should_include(Path::new("index.js")));
}

#[test]
fn filter_empty_extensions_accepts_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("index.ts")));
    assert!(filter.should_include(Path::new("readme.md")));
    assert!(filter.should_include(Path::new("Makefile")));
}

#[test]
fn filter_exclude_patterns() {
    let filter = GlobFilter::new(
        vec!["ts".to_string()],
        &["**/node_modules/**".to_string(), "**/dist/**".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("src/index.ts")));
    assert!(!filter.should_include(Path::new("node_modules/react/index.ts")));
    assert!(!filter.should_include(Path::new("packages/app/dist/main.ts")));
}

#[test]
fn filter_exclude_specific_files() {
    let filter = GlobFilter::new(vec!["ts".to_string()], &["**/*.gen.ts".to_string()]).unwrap();

    assert!(filter.should_include(Path::new("src/index.ts")));
    assert!(!filter.should_include(Path::new("src/schema.gen.ts")));
}

#[test]
fn filter_invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(result.is_err());
}

#[test]
fn filter_file_without_extension_rejected_when_extensions_set() {
    let filter = GlobFilter::new(vec!["ts".to_string()], &[]).unwrap();

    assert!(!filter.should_include(Path::new("Makefile")));
    assert!(!filter.should_include(Path::new("Dockerfile")));
}

#[test]
fn filter_from_config_uses_defaults() {
    let filter = GlobFilter::from_config(&ScannerConfig::default()).unwrap();

    assert!(filter.should_include(Path::new("src/components/App.tsx")));
    assert!(filter.should_include(Path::new("src/lib/api.js")));
    assert!(!filter.should_include(Path::new("node_modules/react/index.js")));
    assert!(!filter.should_include(Path::new(".next/server/page.js")));
    assert!(!filter.should_include(Path::new("src/styles.css")));
}
