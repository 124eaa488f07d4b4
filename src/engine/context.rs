/// True if `path` contains `folder` as a whole path segment.
///
/// Separators are normalized to `/` first; `src/hookshop/foo.ts` does not
/// match `hooks`. Pure string predicate, no filesystem access.
#[must_use]
pub fn is_in_folder(path: &str, folder: &str) -> bool {
    let normalized = path.replace('\\', "/");
    normalized.contains(&format!("/{folder}/")) || normalized.starts_with(&format!("{folder}/"))
}

/// True if `path` is a UI component source file.
#[must_use]
pub fn is_component_file(path: &str) -> bool {
    path.ends_with(".tsx")
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
