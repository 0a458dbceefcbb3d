//! Configuration module for lexigrade.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.lexigrade.yaml` file in your project root or `~/.config/lexigrade/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//! report:
//!   fail_on_reject: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_PLACEHOLDER, DEFAULT_TICK_RATE_MS, MIN_TICK_RATE_MS, THEME_NAMES};
pub use types::{
    AppConfig, EditConfig, EditorConfig, OutputConfig, ReportBehaviorConfig, ReportConfig,
    ResultSource, TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    search_dirs, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.lexigrade.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
