mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, config_template};
pub use model::{Config, RuleConfig, ScannerConfig};
