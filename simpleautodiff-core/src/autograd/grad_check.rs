//! Gradient checking against central finite differences.
//!
//! Every helper here takes the function under test as a graph *builder*
//! (`Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError>`) and builds a brand
//! new graph for each evaluation. Perturbing an input therefore never touches a graph
//! whose accumulators are already in use.

use crate::autograd::{backward, forward};
use crate::config::GradCheckConfig;
use crate::error::AutodiffError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::types::{cast, Scalar};
use approx::abs_diff_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check needs at least one input")]
    EmptyInputs,

    #[error("Building the graph failed during gradient check: {0}")]
    ForwardPassError(AutodiffError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutodiffError),

    #[error("Forward-mode sweep failed for input {input_index}: {source}")]
    TangentPassError {
        input_index: usize,
        source: AutodiffError,
    },

    #[error("Perturbed evaluation failed for input {input_index}: {source}")]
    NumericalPassError {
        input_index: usize,
        source: AutodiffError,
    },

    #[error("Forward and backward mode disagree for input {input_index}: forward {forward:?} != backward {backward:?}. Difference: {difference:?}")]
    ModeMismatch {
        input_index: usize,
        forward: f64,
        backward: f64,
        difference: f64,
    },

    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Autodiff error during gradient check: {0}")]
    Kernel(#[from] AutodiffError),
}

/// Every gradient estimate computed by [`check_grad`], indexed like the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientReport<T: Scalar = f64> {
    /// Function value at the unperturbed inputs.
    pub value: T,
    /// One reverse-mode sweep.
    pub backward: Vec<T>,
    /// One forward-mode sweep per input, each on a rebuilt graph.
    pub forward: Vec<T>,
    /// Central differences.
    pub numerical: Vec<T>,
}

impl<T: Scalar> GradientReport<T> {
    /// Largest absolute difference between the backward and numerical estimates.
    pub fn max_abs_difference(&self) -> T {
        self.backward
            .iter()
            .zip(self.numerical.iter())
            .map(|(&a, &n)| (a - n).abs())
            .fold(T::zero(), T::max)
    }
}

fn build<T, F>(func: &F, values: &[T]) -> Result<(Graph<T>, Vec<NodeId>, NodeId), AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    let mut graph = Graph::new();
    let inputs: Vec<NodeId> = values.iter().map(|&v| graph.input(v)).collect();
    let output = func(&mut graph, &inputs)?;
    Ok((graph, inputs, output))
}

/// Builds the graph for `values` and returns the output value.
pub fn evaluate<T, F>(func: &F, values: &[T]) -> Result<T, AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    let (graph, _, output) = build(func, values)?;
    graph.value(output)
}

/// Output value and the derivative with respect to every input, from one backward sweep.
pub fn backward_gradient<T, F>(func: &F, values: &[T]) -> Result<(T, Vec<T>), AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    let (mut graph, inputs, output) = build(func, values)?;
    let grads = backward::gradient(&mut graph, output, &inputs)?;
    Ok((graph.value(output)?, grads))
}

/// Derivative with respect to every input in forward mode.
///
/// A forward sweep only differentiates with respect to its seed, so the graph is rebuilt
/// and swept once per input.
pub fn forward_gradient<T, F>(func: &F, values: &[T]) -> Result<Vec<T>, AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    (0..values.len())
        .map(|index| forward_derivative(func, values, index))
        .collect()
}

fn forward_derivative<T, F>(func: &F, values: &[T], index: usize) -> Result<T, AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    let (mut graph, inputs, output) = build(func, values)?;
    forward::forward(&mut graph, inputs[index], output)
}

/// f(x + eps), f(x - eps) for input `index`, each on a freshly built graph.
fn perturbed_values<T, F>(func: &F, values: &[T], index: usize, epsilon: T) -> Result<(T, T), AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    let mut shifted = values.to_vec();
    shifted[index] = values[index] + epsilon;
    let plus = evaluate(func, &shifted)?;
    shifted[index] = values[index] - epsilon;
    let minus = evaluate(func, &shifted)?;
    Ok((plus, minus))
}

/// Central-difference estimate `(f(x + eps) - f(x - eps)) / (2 eps)` for every input.
pub fn numerical_gradient<T, F>(func: &F, values: &[T], epsilon: T) -> Result<Vec<T>, AutodiffError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    let two = T::one() + T::one();
    (0..values.len())
        .map(|index| {
            let (plus, minus) = perturbed_values(func, values, index, epsilon)?;
            Ok((plus - minus) / (two * epsilon))
        })
        .collect()
}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Checks analytical gradients against each other and against central differences.
///
/// Backward and forward mode must agree within `config.tolerance`, and the backward
/// gradient must match the numerical one within the same tolerance. The defaults
/// (`epsilon = 1e-6`, `tolerance = 1e-4`) are meant for `f64`; `f32` graphs need a larger
/// epsilon.
pub fn check_grad<T, F>(
    func: &F,
    values: &[T],
    config: &GradCheckConfig,
) -> Result<GradientReport<T>, GradCheckError>
where
    T: Scalar,
    F: Fn(&mut Graph<T>, &[NodeId]) -> Result<NodeId, AutodiffError> + ?Sized,
{
    if values.is_empty() {
        return Err(GradCheckError::EmptyInputs);
    }
    let epsilon: T = cast(config.epsilon)?;
    let two = T::one() + T::one();

    // --- Backward mode: one sweep for all inputs ---
    let (mut graph, inputs, output) = build(func, values).map_err(GradCheckError::ForwardPassError)?;
    let backward_grads =
        backward::gradient(&mut graph, output, &inputs).map_err(GradCheckError::BackwardPassError)?;
    let value = graph.value(output)?;

    let mut forward_grads = Vec::with_capacity(values.len());
    let mut numerical_grads = Vec::with_capacity(values.len());

    for (input_index, &analytical) in backward_grads.iter().enumerate() {
        // --- Forward mode: rebuilt graph seeded on this input ---
        let tangent = forward_derivative(func, values, input_index)
            .map_err(|source| GradCheckError::TangentPassError { input_index, source })?;

        // --- Central difference ---
        let (plus, minus) = perturbed_values(func, values, input_index, epsilon)
            .map_err(|source| GradCheckError::NumericalPassError { input_index, source })?;
        let numerical = (plus - minus) / (two * epsilon);

        let (analytical_f64, tangent_f64, numerical_f64) = (to_f64(analytical), to_f64(tangent), to_f64(numerical));
        debug!(
            "grad_check input {}: backward {}, forward {}, numerical {}",
            input_index, analytical_f64, tangent_f64, numerical_f64
        );

        for candidate in [analytical_f64, tangent_f64] {
            if !candidate.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index,
                    value: candidate,
                });
            }
        }
        if !numerical_f64.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus: to_f64(plus),
                loss_minus: to_f64(minus),
            });
        }
        if !abs_diff_eq!(tangent_f64, analytical_f64, epsilon = config.tolerance) {
            return Err(GradCheckError::ModeMismatch {
                input_index,
                forward: tangent_f64,
                backward: analytical_f64,
                difference: (tangent_f64 - analytical_f64).abs(),
            });
        }
        if !abs_diff_eq!(analytical_f64, numerical_f64, epsilon = config.tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad: analytical_f64,
                numerical_grad: numerical_f64,
                difference: (analytical_f64 - numerical_f64).abs(),
            });
        }

        forward_grads.push(tangent);
        numerical_grads.push(numerical);
    }

    Ok(GradientReport {
        value,
        backward: backward_grads,
        forward: forward_grads,
        numerical: numerical_grads,
    })
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
