//! # Operator functions (`ops`)
//!
//! Every operation that creates a node of the graph has a free function named `xxx_op`,
//! grouped by kind:
//!
//! - [`arithmetic`]: `add`, `sub`, `mul`, `div`, `neg`.
//! - [`math_elem`]: `sin`, `cos`, `log`, `exp`.
//!
//! The same operations are available as methods on [`Graph`](crate::Graph), which simply
//! forward here. The numeric function and the local derivative rule of each operation
//! live on [`Operation`](crate::autograd::Operation); the functions below only route their
//! operands through the helpers so arity is fixed by the function signature.

pub mod arithmetic;
pub mod math_elem;

use crate::autograd::operation::Operation;
use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;

/// Builds a node for a one-operand `operation`.
pub(crate) fn apply_unary_op<T: Scalar>(
    graph: &mut Graph<T>,
    operation: Operation,
    a: NodeId,
) -> Result<NodeId, AutodiffError> {
    debug_assert_eq!(operation.arity(), 1, "{} is not unary", operation);
    graph.apply(operation, &[a])
}

/// Builds a node for a two-operand `operation`.
pub(crate) fn apply_binary_op<T: Scalar>(
    graph: &mut Graph<T>,
    operation: Operation,
    a: NodeId,
    b: NodeId,
) -> Result<NodeId, AutodiffError> {
    debug_assert_eq!(operation.arity(), 2, "{} is not binary", operation);
    graph.apply(operation, &[a, b])
}
