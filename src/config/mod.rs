#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, LogFormat};
pub use toml_config::{BatchConfig, InputConfig, OutputConfig};
