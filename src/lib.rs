//! # tally
//!
//! tally is a minimal interactive calculator written in Rust.
//! It parses and evaluates binary arithmetic expressions of the form
//! `<number> <op> <number>` with the operators `+`, `-`, `*` and `/`, and
//! ships a small REPL plus a built-in self-test mode.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::interpreter::{evaluator::evaluate, parser::parse_expression};

/// Defines the structure of parsed input.
///
/// This module declares the `Operator` and `BinaryOperation` types that
/// represent a fully parsed expression. A `BinaryOperation` is built by the
/// parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of supported operators.
/// - Defines the immutable operand-operator-operand value type.
/// - Renders the canonical textual form for display and re-parsing.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an input line. The taxonomy is small and closed: three parse
/// error kinds and one evaluation error kind.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Carries the offending token where one exists.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing, and evaluation.
///
/// This module ties together the token definitions, the single-production
/// parser, and the evaluator that computes the numeric result.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Provides the entry points for parsing and evaluating user input.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// This module contains the session boundary: command recognition (`clear`,
/// `exit`, `quit`, `help`), the prompt loop, screen clearing, and rendering
/// of results and errors. It holds no state beyond "should the session
/// continue".
pub mod repl;
/// The built-in self-test battery behind `--test`.
///
/// Runs a fixed set of parse/evaluate assertions covering every operator and
/// every error kind, and reports a pass/fail summary.
pub mod selftest;
/// General display helpers.
///
/// Currently numeric formatting: integer-valued results print without a
/// trailing `.0`.
pub mod util;

/// Parses and evaluates one line of input.
///
/// This is the unified entry point used by the REPL and the self-test
/// battery: the line is parsed into a [`ast::BinaryOperation`] and then
/// evaluated, and either phase's error is boxed and returned.
///
/// # Errors
/// Returns an error if the line is not a well-formed binary expression or if
/// evaluating it divides by zero.
///
/// # Examples
/// ```
/// use tally::eval_line;
///
/// assert_eq!(eval_line("2 + 2").unwrap(), 4.0);
/// assert_eq!(eval_line("10 / 2").unwrap(), 5.0);
///
/// // Division by zero is an error value, not a crash.
/// assert!(eval_line("7 / 0").is_err());
/// ```
pub fn eval_line(source: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let operation = parse_expression(source)?;
    debug!("parsed '{source}' as '{operation}'");

    let value = evaluate(&operation)?;
    debug!("evaluated '{operation}' to {value}");

    Ok(value)
}
