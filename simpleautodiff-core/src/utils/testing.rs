use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that each node's adjoint is within `tolerance` of the expected value.
/// Panics with the node name on the first mismatch or on an invalid handle.
pub fn check_gradient_near(graph: &Graph, nodes: &[NodeId], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Node/expected length mismatch");

    for (&id, &e) in nodes.iter().zip(expected.iter()) {
        let (name, actual) = match (graph.name(id), graph.partial_derivative(id)) {
            (Ok(name), Ok(actual)) => (name, actual),
            (Err(err), _) | (_, Err(err)) => panic!("check_gradient_near: {}", err),
        };
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch for {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                name, actual, e, diff, tolerance
            );
        }
    }
}
