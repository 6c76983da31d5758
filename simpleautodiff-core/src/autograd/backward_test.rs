use super::*;
use crate::utils::testing::check_gradient_near;
use approx::assert_relative_eq;

#[test]
fn test_backward_sin_mul() -> Result<(), AutodiffError> {
    let mut graph: Graph = Graph::new();
    let x1 = graph.input(2.0);
    let x2 = graph.input(3.0);
    let v1 = graph.mul(x1, x2)?;
    let y = graph.sin(v1)?;

    backward(&mut graph, y)?;

    assert_relative_eq!(graph.partial_derivative(y)?, 1.0);
    assert_relative_eq!(graph.partial_derivative(v1)?, 6.0_f64.cos(), epsilon = 1e-12);
    assert_relative_eq!(graph.partial_derivative(x1)?, 6.0_f64.cos() * 3.0, epsilon = 1e-12);
    assert_relative_eq!(graph.partial_derivative(x2)?, 6.0_f64.cos() * 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_accumulates_over_paths() -> Result<(), AutodiffError> {
    // y = x*x + x  =>  dy/dx = 2x + 1
    let mut graph: Graph = Graph::new();
    let x = graph.input(4.0);
    let sq = graph.mul(x, x)?;
    let y = graph.add(sq, x)?;

    backward(&mut graph, y)?;
    assert_relative_eq!(graph.partial_derivative(x)?, 9.0);
    Ok(())
}

#[test]
fn test_backward_diamond() -> Result<(), AutodiffError> {
    // d = sin(a) + cos(a)  =>  dd/da = cos(a) - sin(a)
    let mut graph: Graph = Graph::new();
    let a = graph.input(0.7);
    let b = graph.sin(a)?;
    let c = graph.cos(a)?;
    let d = graph.add(b, c)?;

    backward(&mut graph, d)?;
    check_gradient_near(
        &graph,
        &[d, b, c, a],
        &[1.0, 1.0, 1.0, 0.7_f64.cos() - 0.7_f64.sin()],
        1e-12,
    );
    Ok(())
}

#[test]
fn test_backward_sub_div_neg_exp() -> Result<(), AutodiffError> {
    // y = exp(x1) / x2 - (-x1)  =>  dy/dx1 = exp(x1)/x2 + 1, dy/dx2 = -exp(x1)/x2^2
    let mut graph: Graph = Graph::new();
    let x1 = graph.input(0.5);
    let x2 = graph.input(2.0);
    let e = graph.exp(x1)?;
    let q = graph.div(e, x2)?;
    let n = graph.neg(x1)?;
    let y = graph.sub(q, n)?;

    let grads = gradient(&mut graph, y, &[x1, x2])?;
    let exp = 0.5_f64.exp();
    assert_relative_eq!(grads[0], exp / 2.0 + 1.0, epsilon = 1e-12);
    assert_relative_eq!(grads[1], -exp / 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_is_idempotent() -> Result<(), AutodiffError> {
    let mut graph: Graph = Graph::new();
    let x1 = graph.input(2.0);
    let x2 = graph.input(3.0);
    let v1 = graph.mul(x1, x2)?;
    let v2 = graph.log(x1)?;
    let y = graph.add(v1, v2)?;

    let first = gradient(&mut graph, y, &[x1, x2, v1, v2])?;
    let second = gradient(&mut graph, y, &[x1, x2, v1, v2])?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_backward_from_intermediate_clears_stale_adjoints() -> Result<(), AutodiffError> {
    let mut graph: Graph = Graph::new();
    let x1 = graph.input(2.0);
    let x2 = graph.input(3.0);
    let v1 = graph.mul(x1, x2)?;
    let y = graph.sin(v1)?;

    backward(&mut graph, y)?;
    backward(&mut graph, v1)?;

    assert_eq!(graph.partial_derivative(y)?, 0.0, "y is not reachable from v1");
    assert_eq!(graph.partial_derivative(v1)?, 1.0);
    assert_eq!(graph.partial_derivative(x1)?, 3.0);
    assert_eq!(graph.partial_derivative(x2)?, 2.0);
    Ok(())
}

#[test]
fn test_backward_leaves_tangents_alone() -> Result<(), AutodiffError> {
    let mut graph: Graph = Graph::new();
    let x = graph.input(1.5);
    let y = graph.exp(x)?;
    let tangent = graph.forward(x, y)?;
    backward(&mut graph, y)?;
    assert_eq!(graph.tangent(y)?, tangent);
    Ok(())
}

#[test]
fn test_backward_on_leaf() -> Result<(), AutodiffError> {
    let mut graph: Graph = Graph::new();
    let x = graph.input(5.0);
    backward(&mut graph, x)?;
    assert_eq!(graph.partial_derivative(x)?, 1.0);
    Ok(())
}

#[test]
fn test_gradient_invalid_input() {
    let mut graph: Graph = Graph::new();
    let x = graph.input(5.0);
    let y = graph.neg(x).unwrap();
    assert!(matches!(
        gradient(&mut graph, y, &[NodeId::new(10)]),
        Err(AutodiffError::InvalidNodeId { id: 10, .. })
    ));
}
