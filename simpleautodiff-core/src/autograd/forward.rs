use crate::autograd::graph::topological_order;
use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;
use log::{debug, trace, warn};

/// Forward-mode sweep seeded on one leaf; returns d(output)/d(seed).
///
/// Every tangent in the graph is reset to zero and the seed's tangent is set to one.
/// Nodes reachable from `output` are then visited leaves first, and each non-leaf
/// node's tangent becomes `sum(local_partial * operand.tangent)` over its operands.
///
/// One sweep only yields the derivative with respect to `seed`. Differentiating with
/// respect to another input means seeding that input and sweeping again.
///
/// # Errors
/// * `SeedNotLeaf` if `seed` was produced by an operation.
/// * `InvalidNodeId` if `seed` or `output` does not belong to `graph`.
pub fn forward<T: Scalar>(graph: &mut Graph<T>, seed: NodeId, output: NodeId) -> Result<T, AutodiffError> {
    if !graph.node(seed)?.is_leaf() {
        return Err(AutodiffError::SeedNotLeaf { id: seed.index() });
    }
    let order = topological_order(graph, output)?;
    if !order.contains(&seed) {
        warn!(
            "forward: seed {} does not reach {}, derivative is zero",
            graph.name(seed)?,
            graph.name(output)?
        );
    }

    for node in graph.nodes_mut() {
        node.tangent = T::zero();
    }
    graph.node_mut(seed)?.tangent = T::one();
    debug!("forward: seeded {} over {} nodes", graph.name(seed)?, order.len());

    for id in order {
        let node = graph.node(id)?;
        if node.is_leaf() {
            continue;
        }
        let mut tangent = T::zero();
        for (&operand, &local) in node.operands.iter().zip(node.local_partials.iter()) {
            tangent = tangent + local * graph.node(operand)?.tangent;
        }
        let target = graph.node_mut(id)?;
        target.tangent = tangent;
        trace!("forward: d{} = {}", target.name, tangent);
    }

    graph.tangent(output)
}

#[cfg(test)]
#[path = "forward_test.rs"]
mod tests;
