mod block;
mod classify;
mod context;
mod functions;
mod source;

pub use block::{find_block_end, is_inside_catch_block};
pub use classify::LineClassifier;
pub use context::{is_component_file, is_in_folder};
pub use functions::{FunctionDetector, FunctionInfo};
pub use source::SourceFile;
