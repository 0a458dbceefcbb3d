//! Configuration types for lexigrade.
//!
//! Provides structured configuration for the `report` and `edit` commands.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are merged over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, colors)
    pub output: OutputConfig,
    /// Report command behavior
    pub report: ReportBehaviorConfig,
    /// Editor pane configuration
    pub editor: EditorConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: auto, tui, summary, json
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            no_color: false,
        }
    }
}

// ============================================================================
// Report Behavior
// ============================================================================

/// Behavior of the `report` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportBehaviorConfig {
    /// Exit with code 1 when the result was rejected
    pub fail_on_reject: bool,
}

// ============================================================================
// Editor Configuration
// ============================================================================

/// Editor pane configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EditorConfig {
    /// Placeholder shown while the original text is empty
    pub placeholder: String,
    /// Show a character count in the original pane's title
    pub show_char_count: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            placeholder: super::defaults::DEFAULT_PLACEHOLDER.to_string(),
            show_char_count: true,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// Preferences the TUI remembers between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexigrade").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::load_saved().unwrap_or_default()
    }

    /// Load preferences only if a readable preferences file exists.
    #[must_use]
    pub fn load_saved() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast".
    /// A theme toggled inside the TUI is remembered and takes precedence.
    pub theme: String,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 10))]
    pub tick_rate_ms: u64,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: super::defaults::DEFAULT_TICK_RATE_MS,
            mouse_enabled: true,
        }
    }
}

// ============================================================================
// Command Configurations
// ============================================================================

/// Where a grading result is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSource {
    /// Read JSON from standard input
    Stdin,
    /// Read JSON from a file
    File(PathBuf),
}

impl ResultSource {
    /// `None` or `-` means stdin.
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdin,
        }
    }
}

/// Configuration for the `report` command.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub source: ResultSource,
    pub output: OutputConfig,
    /// Output file path (stdout if `None`)
    pub output_file: Option<PathBuf>,
    pub fail_on_reject: bool,
    pub tui: TuiConfig,
    pub quiet: bool,
}

/// Configuration for the `edit` command.
#[derive(Debug, Clone, Default)]
pub struct EditConfig {
    /// File holding the original text
    pub original: Option<PathBuf>,
    /// File holding the simplified text; falls back to the result's `text`
    pub simplified: Option<PathBuf>,
    /// Grading result to show next to the editor
    pub result: Option<PathBuf>,
    /// Estimated level label; falls back to the result's `original_cefr`
    pub cefr: Option<String>,
    /// Where to write the edited original text on exit
    pub save: Option<PathBuf>,
    pub editor: EditorConfig,
    pub tui: TuiConfig,
}
