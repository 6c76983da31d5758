use simpleautodiff_core::{AutodiffError, GradCheckError};
use thiserror::Error;

/// Errors surfaced by the command-line driver.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown function '{0}'. Run `simpleautodiff list` to see the available functions.")]
    UnknownOperation(String),

    #[error("Invalid input for {name}: '{raw}' is not a number")]
    InvalidInput { name: String, raw: String },

    #[error("Function {function} expects {expected} input(s), got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Autodiff(#[from] AutodiffError),

    #[error(transparent)]
    GradCheck(#[from] GradCheckError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
