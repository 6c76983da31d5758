use crate::error::CliError;
use simpleautodiff_core::{AutodiffError, Graph, NodeId};
use std::fmt;
use std::str::FromStr;

/// Built-in functions the driver can differentiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// y = sin(x1 * x2)
    SinMul,
    /// y = x1 + x2
    Add,
    /// y = x1 * x2 + log(x1)
    MulLog,
    /// y = cos(x1) - x2
    SubCos,
    /// y = exp(x1) / x2
    ExpDiv,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::SinMul,
        Function::Add,
        Function::MulLog,
        Function::SubCos,
        Function::ExpDiv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Function::SinMul => "sin_mul",
            Function::Add => "add",
            Function::MulLog => "mul_log",
            Function::SubCos => "sub_cos",
            Function::ExpDiv => "exp_div",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            Function::SinMul => "y = sin(x1 * x2)",
            Function::Add => "y = x1 + x2",
            Function::MulLog => "y = x1 * x2 + log(x1)",
            Function::SubCos => "y = cos(x1) - x2",
            Function::ExpDiv => "y = exp(x1) / x2",
        }
    }

    pub fn arity(&self) -> usize {
        2
    }

    /// Composes the function's nodes on top of the leaves `x` and returns the output node.
    ///
    /// # Errors
    /// * `ArityMismatch` if `x` does not hold `arity()` leaves.
    /// * `Autodiff` if an operation rejects its operands (e.g. `log` of a non-positive input).
    pub fn build(&self, graph: &mut Graph, x: &[NodeId]) -> Result<NodeId, CliError> {
        match *x {
            [x1, x2] => Ok(self.compose(graph, x1, x2)?),
            _ => Err(CliError::ArityMismatch {
                function: self.name().to_string(),
                expected: self.arity(),
                actual: x.len(),
            }),
        }
    }

    pub(crate) fn compose(&self, graph: &mut Graph, x1: NodeId, x2: NodeId) -> Result<NodeId, AutodiffError> {
        match self {
            Function::SinMul => {
                let v1 = graph.mul(x1, x2)?;
                graph.sin(v1)
            }
            Function::Add => graph.add(x1, x2),
            Function::MulLog => {
                let v1 = graph.mul(x1, x2)?;
                let v2 = graph.log(x1)?;
                graph.add(v1, v2)
            }
            Function::SubCos => {
                let v1 = graph.cos(x1)?;
                graph.sub(v1, x2)
            }
            Function::ExpDiv => {
                let v1 = graph.exp(x1)?;
                graph.div(v1, x2)
            }
        }
    }

    /// Closed-form partial derivatives at `values`, used as the "expected" column.
    pub fn expected_gradient(&self, values: &[f64]) -> Vec<f64> {
        let (x1, x2) = (values[0], values[1]);
        match self {
            Function::SinMul => {
                let c = (x1 * x2).cos();
                vec![c * x2, c * x1]
            }
            Function::Add => vec![1.0, 1.0],
            Function::MulLog => vec![x2 + 1.0 / x1, x1],
            Function::SubCos => vec![-x1.sin(), -1.0],
            Function::ExpDiv => {
                let e = x1.exp();
                vec![e / x2, -e / (x2 * x2)]
            }
        }
    }
}

impl FromStr for Function {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Function::ALL
            .iter()
            .copied()
            .find(|f| f.name() == wanted)
            .ok_or_else(|| CliError::UnknownOperation(s.trim().to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
