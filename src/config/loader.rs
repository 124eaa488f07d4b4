use std::fs;
use std::path::Path;

use crate::error::Result;

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".review-guard.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if a found config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            return self.load_from_path(local);
        }
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            crate::error::ReviewGuardError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        Self::parse(&content)
    }
}

/// Commented template written by `review-guard init`.
#[must_use]
pub fn config_template() -> String {
    r#"# review-guard configuration file

[thresholds]
# Maximum lines per file
max_file_lines = 200

# Maximum lines per constant declaration
max_constant_lines = 10

# Maximum lines per function
max_function_lines = 30

# Maximum lines for a component's returned JSX block
max_jsx_lines = 50

# Maximum useState declarations per component
max_state_count = 4

# Maximum parameters per function
max_params = 3

# Cap on comment findings reported per file
max_comment_findings = 15

[scanner]
# File extensions to scan
extensions = ["ts", "tsx", "js", "jsx"]

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/.next/**",
    "**/dist/**",
    "**/build/**",
]
"#
    .to_string()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
