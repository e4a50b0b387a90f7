/// Parsing errors.
///
/// Defines all error types that can occur while turning a raw input line into
/// a structured binary operation: malformed expressions, invalid operator
/// tokens, and operand tokens that are not numbers.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing the result of
/// an otherwise valid binary operation. Currently the only failure mode is
/// division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
