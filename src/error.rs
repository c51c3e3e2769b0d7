//! Global error handling for codeprompt
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for codeprompt operations
#[derive(Error, Debug)]
pub enum CodePromptError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ignore-pattern compilation errors
    #[error("Pattern error: {0}")]
    Pattern(#[from] ignore::Error),
}

/// Specialized Result type for codeprompt operations
pub type Result<T> = std::result::Result<T, CodePromptError>;

/// Creates a CodePromptError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CodePromptError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting CodePromptError to io::Error so main can stay io::Result
impl From<CodePromptError> for io::Error {
    fn from(err: CodePromptError) -> Self {
        match err {
            CodePromptError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
