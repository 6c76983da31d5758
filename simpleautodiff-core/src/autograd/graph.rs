use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::Scalar;
use log::trace;
use std::collections::HashSet;

/// Topological sort of every node reachable from `output` through operand edges.
///
/// Every node appears after all of its operands and exactly once, even when it is
/// reachable through several paths. Operands are visited in order and a node is
/// appended once its operands are done (DFS post-order), so the result is
/// deterministic. `output` is always the last element.
///
/// The visit uses an explicit stack, so long chains do not grow the call stack.
///
/// # Errors
/// `InvalidNodeId` if `output` (or any operand reached) is not part of `graph`.
pub fn topological_order<T: Scalar>(graph: &Graph<T>, output: NodeId) -> Result<Vec<NodeId>, AutodiffError> {
    graph.node(output)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<NodeId> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(NodeId, bool)> = vec![(output, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            trace!("[topological_order] Adding {} to sorted list", graph.name(id)?);
            sorted_list.push(id);
            continue;
        }
        if !visited.insert(id) {
            trace!("[topological_order] {} already visited", graph.name(id)?);
            continue;
        }
        stack.push((id, true));
        // Reversed so the first operand is popped, and therefore finished, first.
        for &operand in graph.node(id)?.operands().iter().rev() {
            if !visited.contains(&operand) {
                stack.push((operand, false));
            }
        }
    }

    Ok(sorted_list)
}

/// Exact reverse of [`topological_order`]: `output` first, every node before its operands.
pub fn reverse_topological_order<T: Scalar>(
    graph: &Graph<T>,
    output: NodeId,
) -> Result<Vec<NodeId>, AutodiffError> {
    let mut order = topological_order(graph, output)?;
    order.reverse();
    Ok(order)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
