use crate::{
    ast::{BinaryOperation, Operator},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// Evaluation either produces a value of type `T` or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a binary operation.
///
/// The operator is guaranteed valid by construction: [`Operator`] is a
/// closed enum, so this match is exhaustive and no "unknown operator" branch
/// exists. Division by zero is checked explicitly before dividing.
///
/// # Parameters
/// - `operation`: The parsed operation to evaluate.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - [`EvalError::DivisionByZero`] if the operator is `/` and the right
///   operand is zero.
///
/// # Example
/// ```
/// use tally::interpreter::{evaluator::evaluate, parser::parse_expression};
///
/// let op = parse_expression("4 * 2.5").unwrap();
///
/// assert_eq!(evaluate(&op).unwrap(), 10.0);
/// ```
pub fn evaluate(operation: &BinaryOperation) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Sub};

    let BinaryOperation { left, op, right } = *operation;

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}
