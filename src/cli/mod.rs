//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod edit;
mod report;

pub use edit::{prepare_workbench, run_edit};
pub use report::{exit_code_for, run_report};

// Re-export config types used by handlers
pub use crate::config::{EditConfig, ReportConfig};
