//! Configuration file loading for askme
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASKME_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./askme.toml` or `./.askme.toml`
//! 4. Global: `$XDG_CONFIG_HOME/askme/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_WOLFRAM_KEY_ENV, FileAnswerConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileSourceConfig, FileSourcesConfig, MAX_SOURCE_WEIGHT, SOURCE_NAMES, WEB, WIKIPEDIA, WOLFRAM,
};
pub use loader::ConfigLoader;
