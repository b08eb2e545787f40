//! Pipeline error types.

use crate::module::ModuleState;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline error types.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured bank label is not handled by this module.
    #[error("unsupported bank label '{0}': only the calibrated-data bank is handled")]
    UnsupportedBankLabel(String),

    /// A lifecycle method was called out of order. Programmer error, not
    /// recoverable at runtime.
    #[error("{operation} requires a {expected} module, but the module is {actual}")]
    InvalidState {
        /// Lifecycle method that was called.
        operation: &'static str,
        /// State the method requires.
        expected: ModuleState,
        /// State the module was actually in.
        actual: ModuleState,
    },

    /// No factory registered under the requested module name.
    #[error("no module registered under '{0}'")]
    UnknownModule(String),

    /// Counting-engine error.
    #[error("core error: {0}")]
    Core(#[from] effmap_core::Error),

    /// Output or event I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] effmap_io::Error),
}
