use crate::autograd::graph::reverse_topological_order;
use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;
use log::{debug, trace};

/// Reverse-mode sweep: leaves d(output)/d(node) in every reachable node's `partial_derivative`.
///
/// All adjoints in the graph are first reset to zero and the output is seeded with one.
/// Nodes are then processed output first; each node adds
/// `adjoint * local_partial` into each of its operands. A node is only processed after
/// all its consumers, so its adjoint is complete when it propagates. Contributions
/// arriving through several paths are summed.
///
/// Nodes not reachable from `output` end with a zero adjoint. Running the sweep twice on
/// the same graph gives the same result.
pub fn backward<T: Scalar>(graph: &mut Graph<T>, output: NodeId) -> Result<(), AutodiffError> {
    let order = reverse_topological_order(graph, output)?;

    for node in graph.nodes_mut() {
        node.partial_derivative = T::zero();
    }
    graph.node_mut(output)?.partial_derivative = T::one();
    debug!("backward: seeded {} over {} nodes", graph.name(output)?, order.len());

    for id in order {
        let node = graph.node(id)?;
        if node.is_leaf() {
            continue;
        }
        let adjoint = node.partial_derivative;
        // Collected first so the operands can be borrowed mutably.
        let contributions: Vec<(NodeId, T)> = node
            .operands
            .iter()
            .zip(node.local_partials.iter())
            .map(|(&operand, &local)| (operand, adjoint * local))
            .collect();

        for (operand, contribution) in contributions {
            let target = graph.node_mut(operand)?;
            target.partial_derivative = target.partial_derivative + contribution;
            trace!(
                "backward: d/d{} += {} (now {})",
                target.name,
                contribution,
                target.partial_derivative
            );
        }
    }
    Ok(())
}

/// Runs [`backward`] from `output` and reads the adjoint of each of `inputs`.
pub fn gradient<T: Scalar>(
    graph: &mut Graph<T>,
    output: NodeId,
    inputs: &[NodeId],
) -> Result<Vec<T>, AutodiffError> {
    backward(graph, output)?;
    inputs.iter().map(|&id| graph.partial_derivative(id)).collect()
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
