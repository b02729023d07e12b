pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::local::LocalStorage;
pub use self::core::{
    engine::SafetyEngine,
    pipeline::ReportPipeline,
    safety::{is_safe, is_safe_with_dampener},
};
pub use utils::error::{AnalyzerError, Result};
