/// The four supported arithmetic operators.
///
/// The set is closed: the parser rejects any other token in operator
/// position, so every constructed `Operator` is one of `+`, `-`, `*`, `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition, `+`.
    Add,
    /// Subtraction, `-`.
    Sub,
    /// Multiplication, `*`.
    Mul,
    /// Division, `/`.
    Div,
}

impl Operator {
    /// Returns the source symbol for `self`.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::Operator;
    ///
    /// assert_eq!(Operator::Mul.symbol(), '*');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The parsed, structured form of "operand operator operand".
///
/// A `BinaryOperation` is only ever constructed by a successful parse and is
/// consumed by a single evaluation. Its `Display` implementation renders the
/// canonical form, which re-parses to an equal value:
///
/// ```
/// use tally::interpreter::parser::parse_expression;
///
/// let op = parse_expression("3+4").unwrap();
/// assert_eq!(parse_expression(&op.to_string()).unwrap(), op);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryOperation {
    /// The left operand.
    pub left:  f64,
    /// The operator.
    pub op:    Operator,
    /// The right operand.
    pub right: f64,
}

impl std::fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}
