use crate::autograd::operation::Operation;
use thiserror::Error;

/// Custom error type for the simpleautodiff kernel.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum AutodiffError {
    /// The operand lies outside the domain of the operation (e.g. `log` of a non-positive value).
    #[error("Domain error in {operation}: {message} (operand = {operand})")]
    DomainError {
        operation: Operation,
        operand: f64,
        message: String,
    },

    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: Operation },

    #[error("Invalid node id #{id}: graph holds {len} nodes")]
    InvalidNodeId { id: usize, len: usize },

    #[error("Operation {operation} expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: Operation,
        expected: usize,
        actual: usize,
    },

    #[error("Forward mode must be seeded on a leaf node, but #{id} was produced by an operation")]
    SeedNotLeaf { id: usize },

    #[error("Internal error: {0}")]
    InternalError(String),
}
