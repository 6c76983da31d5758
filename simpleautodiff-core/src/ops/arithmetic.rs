use super::{apply_binary_op, apply_unary_op};
use crate::autograd::operation::Operation;
use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;

/// `a + b`. Local partials: (1, 1).
pub fn add_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
    apply_binary_op(graph, Operation::Add, a, b)
}

/// `a - b`. Local partials: (1, -1).
pub fn sub_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
    apply_binary_op(graph, Operation::Sub, a, b)
}

/// `a * b`. Local partials: (b, a).
pub fn mul_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
    apply_binary_op(graph, Operation::Mul, a, b)
}

/// `a / b`. Local partials: (1/b, -a/b²).
///
/// # Errors
/// `DivisionByZero` if `b` holds exactly zero.
pub fn div_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
    apply_binary_op(graph, Operation::Div, a, b)
}

/// `-a`. Local partial: -1.
pub fn neg_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, AutodiffError> {
    apply_unary_op(graph, Operation::Neg, a)
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
