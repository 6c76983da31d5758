//! # Automatic differentiation (`autograd`)
//!
//! Traversal of the operand graph and the two derivative engines.
//!
//! - [`operation`]: the closed set of operations with their numeric function and local
//!   derivative rule.
//! - [`graph`]: topological and reverse topological order from an output node.
//! - [`backward()`]: reverse mode, one sweep gives d(output)/d(node) for every node.
//! - [`forward()`]: forward mode, one sweep gives d(output)/d(seed) for a single seed.
//! - [`grad_check`]: rebuild-per-evaluation helpers comparing both modes with central
//!   differences.

pub mod backward;
pub mod forward;
pub mod grad_check;
pub mod graph;
pub mod operation;

pub use backward::{backward, gradient};
pub use forward::forward;
pub use graph::{reverse_topological_order, topological_order};
pub use operation::Operation;
