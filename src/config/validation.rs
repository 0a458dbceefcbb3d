//! Configuration validation for lexigrade.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::{MIN_TICK_RATE_MS, THEME_NAMES};
use super::types::{AppConfig, EditorConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.editor.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for EditorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.placeholder.trim().is_empty() {
            errors.push(ConfigError {
                field: "editor.placeholder".to_string(),
                message: "Placeholder must not be empty".to_string(),
            });
        }
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEME_NAMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            });
        }
        if self.tick_rate_ms < MIN_TICK_RATE_MS {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate {}ms is too low (minimum {MIN_TICK_RATE_MS}ms)",
                    self.tick_rate_ms
                ),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_theme() {
        let config = TuiConfig {
            theme: "solarized".to_string(),
            ..TuiConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
        assert!(errors[0].message.contains("high-contrast"));
    }

    #[test]
    fn test_tick_rate_lower_bound() {
        let config = TuiConfig {
            tick_rate_ms: 1,
            ..TuiConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_empty_placeholder() {
        let config = EditorConfig {
            placeholder: "  ".to_string(),
            ..EditorConfig::default()
        };
        assert_eq!(config.validate()[0].field, "editor.placeholder");
    }

    #[test]
    fn test_errors_aggregate_across_sections() {
        let mut config = AppConfig::default();
        config.tui.theme = "neon".to_string();
        config.editor.placeholder = String::new();
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["editor.placeholder", "tui.theme"]);
    }
}
