//! Unified error types for lexigrade.
//!
//! Renderers never fail; these errors cover the edges around them: loading a
//! grading result and reading configuration. Report writers have their own
//! [`ReportError`](crate::reports::ReportError).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lexigrade operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LexiGradeError {
    /// Errors while loading a grading result
    #[error("Failed to load grading result: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Invalid JSON syntax: {0}")]
    InvalidJson(String),

    #[error("Unexpected result shape: {0}")]
    UnexpectedShape(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for lexigrade operations
pub type Result<T> = std::result::Result<T, LexiGradeError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl LexiGradeError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for LexiGradeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LexiGradeError {
    fn from(err: serde_json::Error) -> Self {
        let kind = match err.classify() {
            serde_json::error::Category::Data => ParseErrorKind::UnexpectedShape(err.to_string()),
            serde_json::error::Category::Io
            | serde_json::error::Category::Syntax
            | serde_json::error::Category::Eof => ParseErrorKind::InvalidJson(err.to_string()),
        };
        Self::parse("JSON deserialization", kind)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The new context is prepended to any existing context, so a chain reads
/// outermost first.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<LexiGradeError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: LexiGradeError, new_ctx: &str) -> LexiGradeError {
    match err {
        LexiGradeError::Parse {
            context: existing,
            source,
        } => LexiGradeError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LexiGradeError::Io {
            path,
            message,
            source,
        } => LexiGradeError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        LexiGradeError::Config(msg) => LexiGradeError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexiGradeError::parse("at result.json", ParseErrorKind::EmptyInput);
        let display = err.to_string();
        assert!(display.contains("grading result"), "{display}");
        assert!(display.contains("result.json"), "{display}");
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = LexiGradeError::io("/path/to/result.json", io_err);
        assert!(err.to_string().contains("/path/to/result.json"));
    }

    #[test]
    fn test_serde_errors_are_classified() {
        let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            LexiGradeError::from(syntax),
            LexiGradeError::Parse {
                source: ParseErrorKind::InvalidJson(_),
                ..
            }
        ));

        let shape = serde_json::from_str::<crate::model::GradeResult>("{}").unwrap_err();
        assert!(matches!(
            LexiGradeError::from(shape),
            LexiGradeError::Parse {
                source: ParseErrorKind::UnexpectedShape(_),
                ..
            }
        ));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(LexiGradeError::parse("base", ParseErrorKind::EmptyInput))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(LexiGradeError::Parse { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(LexiGradeError::config("bad theme"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
