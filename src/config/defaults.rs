//! Default values for lexigrade configuration.

/// Placeholder shown in the editable pane while it is empty.
pub const DEFAULT_PLACEHOLDER: &str = "Enter your text here...";

/// Default TUI event poll interval.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Lower bound for the event poll interval.
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Theme names accepted in configuration.
pub const THEME_NAMES: [&str; 3] = ["dark", "light", "high-contrast"];
