use crate::error::AutodiffError;
use crate::types::Scalar;
use std::fmt;

/// Tag identifying how a node was produced.
///
/// Each variant carries its own numeric function (`evaluate`) and its local
/// derivative rule (`local_partials`); both dispatch on the variant so the set of
/// supported operations stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Leaf,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Sin,
    Cos,
    Log,
    Exp,
}

impl Operation {
    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Leaf => 0,
            Operation::Neg | Operation::Sin | Operation::Cos | Operation::Log | Operation::Exp => 1,
            Operation::Add | Operation::Sub | Operation::Mul | Operation::Div => 2,
        }
    }

    /// Infix symbol for binary operations, function name otherwise.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Leaf => "leaf",
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Neg => "neg",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Log => "log",
            Operation::Exp => "exp",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Leaf => "leaf",
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Neg => "neg",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Log => "log",
            Operation::Exp => "exp",
        }
    }

    fn check_arity<T>(&self, operands: &[T]) -> Result<(), AutodiffError> {
        if operands.len() != self.arity() {
            return Err(AutodiffError::ArityMismatch {
                operation: *self,
                expected: self.arity(),
                actual: operands.len(),
            });
        }
        Ok(())
    }

    /// Applies the numeric function to the operand values.
    ///
    /// # Errors
    /// * `ArityMismatch` if `operands` does not hold exactly `arity()` values.
    /// * `DomainError` for `log` of a non-positive value.
    /// * `DivisionByZero` for `div` with a zero divisor.
    /// * `InternalError` for `Leaf`, which has no numeric function.
    pub fn evaluate<T: Scalar>(&self, operands: &[T]) -> Result<T, AutodiffError> {
        self.check_arity(operands)?;
        let value = match self {
            Operation::Leaf => {
                return Err(AutodiffError::InternalError(
                    "Leaf nodes are not evaluated from operands".to_string(),
                ))
            }
            Operation::Add => operands[0] + operands[1],
            Operation::Sub => operands[0] - operands[1],
            Operation::Mul => operands[0] * operands[1],
            Operation::Div => {
                if operands[1] == T::zero() {
                    return Err(AutodiffError::DivisionByZero { operation: *self });
                }
                operands[0] / operands[1]
            }
            Operation::Neg => -operands[0],
            Operation::Sin => operands[0].sin(),
            Operation::Cos => operands[0].cos(),
            Operation::Log => {
                let x = operands[0];
                // Also rejects NaN.
                if !(x > T::zero()) {
                    return Err(AutodiffError::DomainError {
                        operation: *self,
                        operand: x.to_f64().unwrap_or(f64::NAN),
                        message: "logarithm requires a strictly positive operand".to_string(),
                    });
                }
                x.ln()
            }
            Operation::Exp => operands[0].exp(),
        };
        Ok(value)
    }

    /// Partial derivative of the result with respect to each operand, in operand order.
    pub fn local_partials<T: Scalar>(&self, operands: &[T]) -> Result<Vec<T>, AutodiffError> {
        self.check_arity(operands)?;
        let one = T::one();
        let partials = match self {
            Operation::Leaf => Vec::new(),
            Operation::Add => vec![one, one],
            Operation::Sub => vec![one, -one],
            Operation::Mul => vec![operands[1], operands[0]],
            Operation::Div => {
                let (a, b) = (operands[0], operands[1]);
                if b == T::zero() {
                    return Err(AutodiffError::DivisionByZero { operation: *self });
                }
                vec![one / b, -a / (b * b)]
            }
            Operation::Neg => vec![-one],
            Operation::Sin => vec![operands[0].cos()],
            Operation::Cos => vec![-operands[0].sin()],
            Operation::Log => vec![one / operands[0]],
            Operation::Exp => vec![operands[0].exp()],
        };
        Ok(partials)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;
