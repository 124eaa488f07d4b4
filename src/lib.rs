pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod scanner;

pub use error::{Result, ReviewGuardError};
pub use rules::scan;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
