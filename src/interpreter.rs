/// Turns raw input text into tokens.
///
/// This module defines the `Token` enum recognized by the calculator: numeric
/// literals, the four operator symbols, and a catch-all for anything else so
/// the parser can report precisely which token was unacceptable.
pub mod lexer;
/// Turns tokens into a structured binary operation.
///
/// The parser accepts exactly the grammar `operand operator operand`, where
/// an operand is a numeric literal with an optional leading sign. Anything
/// else is rejected with a [`crate::error::ParseError`].
pub mod parser;
/// Computes the result of a binary operation.
///
/// The evaluator is a pure function from [`crate::ast::BinaryOperation`] to
/// `f64`, failing only on division by zero.
pub mod evaluator;
