use std::iter::Peekable;

use logos::Logos;

use crate::{
    ast::{BinaryOperation, Operator},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one input line into a binary operation.
///
/// This is the entry point for expression parsing. The input is lexed and
/// then matched against the only production in the grammar:
///
/// Grammar: `expression := operand operator operand`
///
/// where an operand is a numeric literal with an optional leading sign, so
/// `-2.5 * 4` parses with a left operand of `-2.5`. Whitespace carries no
/// meaning: `3+4` and ` 3  +   4 ` parse to equal operations.
///
/// # Parameters
/// - `text`: The raw input line.
///
/// # Returns
/// The parsed [`BinaryOperation`].
///
/// # Errors
/// - [`ParseError::MalformedExpression`] if the input does not have exactly
///   two operands around one operator.
/// - [`ParseError::InvalidOperator`] if the token in operator position is
///   not one of `+`, `-`, `*`, `/`.
/// - [`ParseError::InvalidNumber`] if a token in operand position is not a
///   number.
///
/// # Example
/// ```
/// use tally::{ast::Operator, interpreter::parser::parse_expression};
///
/// let op = parse_expression("12 + 3.5").unwrap();
///
/// assert_eq!(op.left, 12.0);
/// assert_eq!(op.op, Operator::Add);
/// assert_eq!(op.right, 3.5);
/// ```
pub fn parse_expression(text: &str) -> ParseResult<BinaryOperation> {
    let mut tokens = Vec::new();

    for token in Token::lexer(text) {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(ParseError::MalformedExpression),
        }
    }

    let mut iter = tokens.iter().peekable();

    let left = parse_operand(&mut iter)?;
    let op = parse_operator(&mut iter)?;
    let right = parse_operand(&mut iter)?;

    // Trailing tokens mean the expression had more than two operands.
    if iter.next().is_some() {
        return Err(ParseError::MalformedExpression);
    }

    Ok(BinaryOperation { left, op, right })
}

/// Parses a single operand: a numeric literal with an optional `+`/`-` sign.
///
/// # Errors
/// - [`ParseError::InvalidNumber`] if the token in operand position is not
///   numeric.
/// - [`ParseError::MalformedExpression`] if the input ends where an operand
///   was expected.
fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<f64>
    where I: Iterator<Item = &'a Token>
{
    let sign = match tokens.peek() {
        Some(Token::Minus) => {
            tokens.next();
            -1.0
        },
        Some(Token::Plus) => {
            tokens.next();
            1.0
        },
        _ => 1.0,
    };

    match tokens.next() {
        Some(Token::Number(n)) => Ok(sign * n),
        Some(Token::Word(w)) => Err(ParseError::InvalidNumber { token: w.clone() }),
        _ => Err(ParseError::MalformedExpression),
    }
}

/// Parses the operator between the two operands.
///
/// # Errors
/// - [`ParseError::InvalidOperator`] if the token in operator position is
///   not one of the four supported symbols.
/// - [`ParseError::MalformedExpression`] if a number sits in operator
///   position or the input ends early.
fn parse_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Operator>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Plus) => Ok(Operator::Add),
        Some(Token::Minus) => Ok(Operator::Sub),
        Some(Token::Star) => Ok(Operator::Mul),
        Some(Token::Slash) => Ok(Operator::Div),
        Some(Token::Word(w)) => Err(ParseError::InvalidOperator { token: w.clone() }),
        _ => Err(ParseError::MalformedExpression),
    }
}
