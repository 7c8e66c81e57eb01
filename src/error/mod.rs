mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::{FATAL_STARTUP_EXIT_CODE, get_exit_code};
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VestibuleError {
    #[error("failed to acquire native process arguments: {0}")]
    ArgumentAcquisition(String),

    #[error("failed to attach console: {0}")]
    ConsoleAttach(String),

    #[error("process command line is already registered")]
    CommandLineRegistered,

    #[error("lifecycle ordering violation: {0}")]
    LifecycleOrdering(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VestibuleError>;
