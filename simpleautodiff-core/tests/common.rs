use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simpleautodiff_core::{AutodiffError, Graph, NodeId};

// Not every test binary uses every helper.
#[allow(dead_code)]
pub fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// y = sin(x1 * x2)
#[allow(dead_code)]
pub fn sin_mul(graph: &mut Graph, x: &[NodeId]) -> Result<NodeId, AutodiffError> {
    let v1 = graph.mul(x[0], x[1])?;
    graph.sin(v1)
}

/// y = x1 + x2
#[allow(dead_code)]
pub fn add(graph: &mut Graph, x: &[NodeId]) -> Result<NodeId, AutodiffError> {
    graph.add(x[0], x[1])
}

/// y = x1 * x2 + log(x1)
#[allow(dead_code)]
pub fn mul_log(graph: &mut Graph, x: &[NodeId]) -> Result<NodeId, AutodiffError> {
    let v1 = graph.mul(x[0], x[1])?;
    let v2 = graph.log(x[0])?;
    graph.add(v1, v2)
}

/// A randomly shaped graph over `inputs.len()` leaves.
///
/// Values are kept within [-2, 2] by wrapping larger results in `sin`, which keeps
/// derivatives moderate and the central differences accurate. Earlier nodes are reused freely, which
/// produces diamonds and repeated operands.
#[allow(dead_code)]
pub struct RandomGraph {
    pub graph: Graph,
    pub inputs: Vec<NodeId>,
    pub output: NodeId,
}

#[allow(dead_code)]
pub fn random_inputs(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(-1.5..1.5)).collect()
}

/// Deterministic sequence of operation choices for `build_random`.
#[allow(dead_code)]
pub fn random_steps(seed: u64, len: usize) -> Vec<(u8, usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_mul(7919));
    (0..len)
        .map(|_| (rng.gen_range(0..8u8), rng.gen::<usize>(), rng.gen::<usize>()))
        .collect()
}

/// Replays `steps` on a fresh graph over `x`. Usable as a grad_check builder.
#[allow(dead_code)]
pub fn build_random(
    graph: &mut Graph,
    x: &[NodeId],
    steps: &[(u8, usize, usize)],
) -> Result<NodeId, AutodiffError> {
    let mut pool: Vec<NodeId> = x.to_vec();
    for &(op, i, j) in steps {
        let a = pool[i % pool.len()];
        let b = pool[j % pool.len()];
        let mut node = match op {
            0 => graph.add(a, b)?,
            1 => graph.sub(a, b)?,
            2 => graph.mul(a, b)?,
            3 => graph.sin(a)?,
            4 => graph.cos(a)?,
            5 => graph.neg(a)?,
            6 => {
                let s = graph.sin(b)?;
                let e = graph.exp(s)?;
                graph.div(a, e)?
            }
            _ => {
                let e = graph.exp(a)?;
                graph.log(e)?
            }
        };
        if graph.value(node)?.abs() > 2.0 {
            node = graph.sin(node)?;
        }
        pool.push(node);
    }
    pool.last()
        .copied()
        .ok_or_else(|| AutodiffError::InternalError("empty pool".to_string()))
}

#[allow(dead_code)]
pub fn random_graph(seed: u64, input_count: usize, len: usize) -> Result<RandomGraph, AutodiffError> {
    let values = random_inputs(seed, input_count);
    let steps = random_steps(seed, len);
    let mut graph: Graph = Graph::new();
    let inputs: Vec<NodeId> = values.iter().map(|&v| graph.input(v)).collect();
    let output = build_random(&mut graph, &inputs, &steps)?;
    Ok(RandomGraph {
        graph,
        inputs,
        output,
    })
}
