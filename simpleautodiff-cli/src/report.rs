use crate::error::CliError;
use crate::functions::Function;
use clap::ValueEnum;
use log::{debug, info};
use simpleautodiff_core::autograd::grad_check::forward_gradient;
use simpleautodiff_core::{check_grad, AutodiffError, GradCheckConfig, Graph, NodeId};
use std::io::Write;

/// Which derivative sweeps to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Forward,
    Backward,
    Both,
}

impl Mode {
    fn runs_backward(self) -> bool {
        matches!(self, Mode::Backward | Mode::Both)
    }

    fn runs_forward(self) -> bool {
        matches!(self, Mode::Forward | Mode::Both)
    }
}

/// Writes the evaluation trace and the requested derivative tables for `function` at `values`.
pub fn run<W: Write>(
    out: &mut W,
    function: Function,
    values: &[f64],
    mode: Mode,
    config: &GradCheckConfig,
    check: bool,
) -> Result<(), CliError> {
    if values.len() != function.arity() {
        return Err(CliError::ArityMismatch {
            function: function.name().to_string(),
            expected: function.arity(),
            actual: values.len(),
        });
    }
    let build = |g: &mut Graph, x: &[NodeId]| match *x {
        [x1, x2] => function.compose(g, x1, x2),
        _ => Err(AutodiffError::InternalError(format!(
            "{} rebuilt with {} leaves",
            function,
            x.len()
        ))),
    };

    let mut graph: Graph = Graph::new();
    let inputs: Vec<NodeId> = values.iter().map(|&v| graph.input(v)).collect();
    let output = function.build(&mut graph, &inputs)?;
    info!("{}: built {} nodes", function, graph.len());

    writeln!(out, "Function: {}", function.formula())?;
    writeln!(out, "Evaluation trace:")?;
    for id in graph.topological_order(output)? {
        writeln!(out, "  {}", graph.describe(id)?)?;
    }
    let output_name = graph.name(output)?.to_string();
    writeln!(out, "y = {} = {}", output_name, graph.value(output)?)?;

    if mode.runs_backward() {
        let grads = graph.gradient(output, &inputs)?;
        writeln!(out)?;
        writeln!(out, "Backward Mode Results:")?;
        write_gradient(out, &graph, &inputs, &grads)?;
    }

    if mode.runs_forward() {
        debug!("forward mode: rebuilding the graph for each of {} seeds", inputs.len());
        let tangents = forward_gradient(&build, values)?;
        writeln!(out)?;
        writeln!(out, "Forward Mode Results:")?;
        write_gradient(out, &graph, &inputs, &tangents)?;
    }

    writeln!(out)?;
    writeln!(out, "Expected:")?;
    write_gradient(out, &graph, &inputs, &function.expected_gradient(values))?;

    if check {
        let report = check_grad(&build, values, config)?;
        writeln!(out)?;
        writeln!(out, "Numerical (finite differences, epsilon = {:e}):", config.epsilon)?;
        write_gradient(out, &graph, &inputs, &report.numerical)?;
        writeln!(
            out,
            "Gradient check passed (max |analytical - numerical| = {:.3e}, tolerance = {:e})",
            report.max_abs_difference(),
            config.tolerance
        )?;
    }
    Ok(())
}

fn write_gradient<W: Write>(out: &mut W, graph: &Graph, inputs: &[NodeId], grads: &[f64]) -> Result<(), CliError> {
    for (&id, grad) in inputs.iter().zip(grads.iter()) {
        writeln!(out, "  dy/d{} = {}", graph.name(id)?, grad)?;
    }
    Ok(())
}

/// Prints the catalog of built-in functions.
pub fn list<W: Write>(out: &mut W) -> Result<(), CliError> {
    for function in Function::ALL {
        writeln!(out, "{:<8} {}", function.name(), function.formula())?;
    }
    Ok(())
}
