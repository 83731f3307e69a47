pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod errors;

// Re-export main public types
pub use errors::{ConfigError, PomError, Result};

// Re-export for CLI usage
pub use config::Config;
pub use po_api::{PoApiClient, PoManager};
