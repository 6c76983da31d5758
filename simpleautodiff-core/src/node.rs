use crate::autograd::operation::Operation;
use crate::types::Scalar;
use std::fmt;

/// Handle of a node inside a [`Graph`](crate::Graph) arena.
///
/// Operands are stored as handles rather than references, so a node never borrows
/// from another one. A handle is only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in the arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scalar value of the computation.
///
/// `value`, `operation`, `operands` and `local_partials` are fixed when the node is
/// created. Only the two derivative accumulators change afterwards, and both engines
/// reset them before each sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T: Scalar = f64> {
    pub(crate) value: T,
    pub(crate) operation: Operation,
    pub(crate) operands: Vec<NodeId>,
    /// d(self)/d(operand) for each operand, evaluated at construction.
    pub(crate) local_partials: Vec<T>,
    pub(crate) partial_derivative: T,
    pub(crate) tangent: T,
    pub(crate) name: String,
}

impl<T: Scalar> Node<T> {
    pub(crate) fn leaf(value: T, name: String) -> Self {
        Node {
            value,
            operation: Operation::Leaf,
            operands: Vec::new(),
            local_partials: Vec::new(),
            partial_derivative: T::zero(),
            tangent: T::zero(),
            name,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operands(&self) -> &[NodeId] {
        &self.operands
    }

    pub fn local_partials(&self) -> &[T] {
        &self.local_partials
    }

    /// Adjoint accumulated by the last backward sweep.
    pub fn partial_derivative(&self) -> T {
        self.partial_derivative
    }

    /// Tangent accumulated by the last forward sweep.
    pub fn tangent(&self) -> T {
        self.tangent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_leaf(&self) -> bool {
        self.operation == Operation::Leaf
    }

    pub(crate) fn reset_derivatives(&mut self) {
        self.partial_derivative = T::zero();
        self.tangent = T::zero();
    }
}
