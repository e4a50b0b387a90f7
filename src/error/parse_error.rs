#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing an input line.
pub enum ParseError {
    /// The input does not have the shape "operand operator operand".
    MalformedExpression,
    /// The token in operator position is not one of `+`, `-`, `*`, `/`.
    InvalidOperator {
        /// The token encountered in operator position.
        token: String,
    },
    /// A token in operand position could not be parsed as a number.
    InvalidNumber {
        /// The token encountered in operand position.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression => {
                write!(f, "Invalid expression. Expected format: <number> <op> <number>.")
            },

            Self::InvalidOperator { token } => {
                write!(f, "Invalid operator '{token}'. Supported operators: + - * /.")
            },

            Self::InvalidNumber { token } => {
                write!(f, "Invalid number '{token}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
