use super::apply_unary_op;
use crate::autograd::operation::Operation;
use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;

/// `sin(a)`. Local partial: `cos(a)`.
pub fn sin_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, AutodiffError> {
    apply_unary_op(graph, Operation::Sin, a)
}

/// `cos(a)`. Local partial: `-sin(a)`.
pub fn cos_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, AutodiffError> {
    apply_unary_op(graph, Operation::Cos, a)
}

/// Natural logarithm `ln(a)`. Local partial: `1 / a`.
///
/// # Errors
/// `DomainError` if `a` is not strictly positive. The error is returned instead of a
/// `NaN` or `-inf` value, and no node is added to the graph.
pub fn log_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, AutodiffError> {
    apply_unary_op(graph, Operation::Log, a)
}

/// `exp(a)`. Local partial: `exp(a)`.
pub fn exp_op<T: Scalar>(graph: &mut Graph<T>, a: NodeId) -> Result<NodeId, AutodiffError> {
    apply_unary_op(graph, Operation::Exp, a)
}

#[cfg(test)]
#[path = "math_elem_test.rs"]
mod tests;
