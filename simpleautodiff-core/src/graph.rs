use crate::autograd;
use crate::autograd::operation::Operation;
use crate::config::GraphConfig;
use crate::error::AutodiffError;
use crate::naming::NamingContext;
use crate::node::{Node, NodeId};
use crate::types::Scalar;
use log::debug;

/// Arena holding every node of one computation.
///
/// Nodes are appended in creation order and never removed, so a node's operands always
/// sit at lower indices than the node itself and the operand graph cannot contain a cycle.
/// Only the derivative accumulators are mutated after construction.
///
/// # Example
/// ```
/// use simpleautodiff_core::Graph;
///
/// let mut graph: Graph = Graph::new();
/// let x1 = graph.input(2.0);
/// let x2 = graph.input(3.0);
/// let v1 = graph.mul(x1, x2)?;
/// let y = graph.sin(v1)?;
///
/// graph.backward(y)?;
/// let expected = 6.0_f64.cos() * 3.0;
/// assert!((graph.partial_derivative(x1)? - expected).abs() < 1e-12);
/// # Ok::<(), simpleautodiff_core::AutodiffError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T: Scalar = f64> {
    nodes: Vec<Node<T>>,
    naming: NamingContext,
    config: GraphConfig,
}

impl<T: Scalar> Graph<T> {
    pub fn new() -> Self {
        Graph::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            nodes: Vec::new(),
            naming: NamingContext::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node and restarts naming at `x1` / `v1`.
    ///
    /// Handles issued before the call must not be used afterwards.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.naming.reset();
    }

    /// All nodes in creation order (which is also a topological order of the whole arena).
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node<T>] {
        &mut self.nodes
    }

    /// Creates a leaf holding `value`, named `x1`, `x2`, ...
    pub fn input(&mut self, value: T) -> NodeId {
        let name = self.naming.next_input_name();
        self.push_leaf(value, name)
    }

    /// Creates a leaf with an explicit display name. The automatic input counter is untouched.
    pub fn input_named(&mut self, name: impl Into<String>, value: T) -> NodeId {
        self.push_leaf(value, name.into())
    }

    fn push_leaf(&mut self, value: T, name: String) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        debug!("{} = {}", name, value);
        self.nodes.push(Node::leaf(value, name));
        id
    }

    pub fn node(&self, id: NodeId) -> Result<&Node<T>, AutodiffError> {
        self.nodes.get(id.index()).ok_or(AutodiffError::InvalidNodeId {
            id: id.index(),
            len: self.nodes.len(),
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<T>, AutodiffError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.index())
            .ok_or(AutodiffError::InvalidNodeId { id: id.index(), len })
    }

    pub fn value(&self, id: NodeId) -> Result<T, AutodiffError> {
        Ok(self.node(id)?.value)
    }

    /// Adjoint left on `id` by the last [`backward`](Graph::backward) call.
    pub fn partial_derivative(&self, id: NodeId) -> Result<T, AutodiffError> {
        Ok(self.node(id)?.partial_derivative)
    }

    /// Tangent left on `id` by the last [`forward`](Graph::forward) call.
    pub fn tangent(&self, id: NodeId) -> Result<T, AutodiffError> {
        Ok(self.node(id)?.tangent)
    }

    pub fn name(&self, id: NodeId) -> Result<&str, AutodiffError> {
        Ok(self.node(id)?.name.as_str())
    }

    /// Builds a new node by applying `operation` to `operands`.
    ///
    /// The value and the local partial derivatives are computed immediately from the
    /// operands' current values. Every operator method goes through here.
    ///
    /// # Errors
    /// * `InvalidNodeId` if an operand handle does not belong to this graph.
    /// * `ArityMismatch` if the number of operands does not fit the operation.
    /// * `DomainError` / `DivisionByZero` from the numeric function.
    pub fn apply(&mut self, operation: Operation, operands: &[NodeId]) -> Result<NodeId, AutodiffError> {
        let operand_values = operands
            .iter()
            .map(|&id| self.value(id))
            .collect::<Result<Vec<T>, AutodiffError>>()?;

        let value = operation.evaluate(&operand_values)?;
        let local_partials = operation.local_partials(&operand_values)?;

        let id = NodeId::new(self.nodes.len());
        let name = self.naming.next_intermediate_name();
        self.nodes.push(Node {
            value,
            operation,
            operands: operands.to_vec(),
            local_partials,
            partial_derivative: T::zero(),
            tangent: T::zero(),
            name,
        });
        debug!("{}", self.describe(id)?);
        Ok(id)
    }

    pub fn add(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::arithmetic::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::arithmetic::sub_op(self, a, b)
    }

    pub fn mul(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::arithmetic::mul_op(self, a, b)
    }

    pub fn div(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::arithmetic::div_op(self, a, b)
    }

    pub fn neg(&mut self, a: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::arithmetic::neg_op(self, a)
    }

    pub fn sin(&mut self, a: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::math_elem::sin_op(self, a)
    }

    pub fn cos(&mut self, a: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::math_elem::cos_op(self, a)
    }

    /// Natural logarithm. Fails with `DomainError` for a non-positive operand.
    pub fn log(&mut self, a: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::math_elem::log_op(self, a)
    }

    pub fn exp(&mut self, a: NodeId) -> Result<NodeId, AutodiffError> {
        crate::ops::math_elem::exp_op(self, a)
    }

    /// Human-readable trace line, e.g. `v1 = x1 * x2 = 6` or `v2 = sin(v1) = -0.279`.
    pub fn describe(&self, id: NodeId) -> Result<String, AutodiffError> {
        let node = self.node(id)?;
        let operand_names = node
            .operands
            .iter()
            .map(|&op| self.name(op))
            .collect::<Result<Vec<&str>, AutodiffError>>()?;

        let formula = match (node.operation, operand_names.as_slice()) {
            (Operation::Leaf, _) => return Ok(format!("{} = {}", node.name, node.value)),
            (op, [a, b]) => format!("{} {} {}", a, op.symbol(), b),
            (op, names) => format!("{}({})", op.symbol(), names.join(", ")),
        };
        Ok(format!("{} = {} = {}", node.name, formula, node.value))
    }

    /// Zeroes the adjoint and the tangent of every node.
    pub fn reset_derivatives(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset_derivatives();
        }
    }

    pub fn topological_order(&self, output: NodeId) -> Result<Vec<NodeId>, AutodiffError> {
        autograd::graph::topological_order(self, output)
    }

    pub fn reverse_topological_order(&self, output: NodeId) -> Result<Vec<NodeId>, AutodiffError> {
        autograd::graph::reverse_topological_order(self, output)
    }

    /// Reverse-mode sweep from `output`; see [`autograd::backward`].
    pub fn backward(&mut self, output: NodeId) -> Result<(), AutodiffError> {
        autograd::backward(self, output)
    }

    /// Forward-mode sweep seeded on `seed`; returns d(output)/d(seed). See [`autograd::forward`].
    pub fn forward(&mut self, seed: NodeId, output: NodeId) -> Result<T, AutodiffError> {
        autograd::forward(self, seed, output)
    }

    /// d(output)/d(input) for each of `inputs`, from a single backward sweep.
    pub fn gradient(&mut self, output: NodeId, inputs: &[NodeId]) -> Result<Vec<T>, AutodiffError> {
        autograd::gradient(self, output, inputs)
    }
}

impl<T: Scalar> Default for Graph<T> {
    fn default() -> Self {
        Graph::new()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
