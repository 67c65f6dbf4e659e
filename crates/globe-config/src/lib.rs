//! Configuration for the globe mesh tool.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line via clap. Unknown or missing fields fall back to defaults so older
//! and newer config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig, FaceSetting, MeshConfig, default_config_dir};
pub use error::ConfigError;
