use super::*;
use approx::assert_relative_eq;

#[test]
fn test_arity() {
    assert_eq!(Operation::Leaf.arity(), 0);
    assert_eq!(Operation::Sin.arity(), 1);
    assert_eq!(Operation::Log.arity(), 1);
    assert_eq!(Operation::Mul.arity(), 2);
    assert_eq!(Operation::Div.arity(), 2);
}

#[test]
fn test_evaluate_binary() -> Result<(), AutodiffError> {
    assert_eq!(Operation::Add.evaluate(&[2.0, 3.0])?, 5.0);
    assert_eq!(Operation::Sub.evaluate(&[2.0, 3.0])?, -1.0);
    assert_eq!(Operation::Mul.evaluate(&[2.0, 3.0])?, 6.0);
    assert_eq!(Operation::Div.evaluate(&[3.0, 2.0])?, 1.5);
    Ok(())
}

#[test]
fn test_evaluate_unary() -> Result<(), AutodiffError> {
    assert_relative_eq!(Operation::Sin.evaluate(&[6.0_f64])?, 6.0_f64.sin());
    assert_relative_eq!(Operation::Cos.evaluate(&[6.0_f64])?, 6.0_f64.cos());
    assert_relative_eq!(Operation::Log.evaluate(&[2.0_f64])?, std::f64::consts::LN_2);
    assert_relative_eq!(Operation::Exp.evaluate(&[1.0_f64])?, std::f64::consts::E);
    assert_eq!(Operation::Neg.evaluate(&[4.0])?, -4.0);
    Ok(())
}

#[test]
fn test_evaluate_f32() -> Result<(), AutodiffError> {
    assert_relative_eq!(Operation::Mul.evaluate(&[2.0_f32, 3.0])?, 6.0_f32);
    Ok(())
}

#[test]
fn test_log_rejects_non_positive() {
    for x in [0.0, -1.0, f64::NAN] {
        match Operation::Log.evaluate(&[x]) {
            Err(AutodiffError::DomainError { operation, .. }) => assert_eq!(operation, Operation::Log),
            other => panic!("Expected DomainError for log({}), got {:?}", x, other),
        }
    }
}

#[test]
fn test_div_by_zero() {
    assert_eq!(
        Operation::Div.evaluate(&[1.0, 0.0]),
        Err(AutodiffError::DivisionByZero { operation: Operation::Div })
    );
}

#[test]
fn test_arity_mismatch() {
    assert_eq!(
        Operation::Mul.evaluate(&[1.0]),
        Err(AutodiffError::ArityMismatch {
            operation: Operation::Mul,
            expected: 2,
            actual: 1,
        })
    );
    assert!(Operation::Sin.local_partials(&[1.0, 2.0]).is_err());
}

#[test]
fn test_leaf_is_not_evaluated() {
    assert!(matches!(
        Operation::Leaf.evaluate::<f64>(&[]),
        Err(AutodiffError::InternalError(_))
    ));
    assert_eq!(Operation::Leaf.local_partials::<f64>(&[]), Ok(vec![]));
}

#[test]
fn test_local_partials() -> Result<(), AutodiffError> {
    assert_eq!(Operation::Add.local_partials(&[2.0, 3.0])?, vec![1.0, 1.0]);
    assert_eq!(Operation::Sub.local_partials(&[2.0, 3.0])?, vec![1.0, -1.0]);
    assert_eq!(Operation::Mul.local_partials(&[2.0, 3.0])?, vec![3.0, 2.0]);
    assert_eq!(Operation::Neg.local_partials(&[2.0])?, vec![-1.0]);

    let div = Operation::Div.local_partials(&[3.0_f64, 2.0])?;
    assert_relative_eq!(div[0], 0.5);
    assert_relative_eq!(div[1], -0.75);

    assert_relative_eq!(Operation::Sin.local_partials(&[6.0_f64])?[0], 6.0_f64.cos());
    assert_relative_eq!(Operation::Cos.local_partials(&[6.0_f64])?[0], -(6.0_f64.sin()));
    assert_relative_eq!(Operation::Log.local_partials(&[2.0_f64])?[0], 0.5);
    assert_relative_eq!(Operation::Exp.local_partials(&[0.0_f64])?[0], 1.0);
    Ok(())
}

#[test]
fn test_display_uses_name() {
    assert_eq!(Operation::Mul.to_string(), "mul");
    assert_eq!(Operation::Mul.symbol(), "*");
    assert_eq!(Operation::Log.to_string(), "log");
}
