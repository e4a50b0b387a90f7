use tally::{
    ast::Operator,
    error::{EvalError, ParseError},
    eval_line,
    interpreter::{evaluator::evaluate, parser::parse_expression},
    repl::Command,
    util::num::format_number,
};

fn assert_result(src: &str, expected: f64) {
    match eval_line(src) {
        Ok(value) => {
            assert_eq!(value, expected, "'{src}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{src}' failed but was expected to evaluate to {expected}: {e}"),
    }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match parse_expression(src) {
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong parse error"),
        Ok(op) => panic!("'{src}' parsed as '{op}' but was expected to fail"),
    }
}

#[test]
fn each_operator_computes_correctly() {
    assert_result("2 + 2", 4.0);
    assert_result("5 - 3", 2.0);
    assert_result("4 * 2.5", 10.0);
    assert_result("10 / 2", 5.0);
    assert_result("9 / 2", 4.5);
}

#[test]
fn operands_may_be_signed_or_decimal() {
    assert_result("  -2.5 * 4", -10.0);
    assert_result(".5 + .5", 1.0);
    assert_result("3 - -4", 7.0);
    assert_result("+3 - 4", -1.0);
}

#[test]
fn whitespace_is_insignificant() {
    let compact = parse_expression("3+4").unwrap();
    let sprawling = parse_expression(" 3  +   4 ").unwrap();

    assert_eq!(compact, sprawling);
    assert_eq!(compact.left, 3.0);
    assert_eq!(compact.op, Operator::Add);
    assert_eq!(compact.right, 4.0);
}

#[test]
fn canonical_rendering_reparses_to_an_equal_operation() {
    for src in ["3 + 4", "12*3.5", "-1 / 8", "0 - 0"] {
        let op = parse_expression(src).unwrap();
        assert_eq!(parse_expression(&op.to_string()).unwrap(), op);
    }
}

#[test]
fn division_by_zero_is_an_error_value() {
    for src in ["7 / 0", "0 / 0", "-1 / 0"] {
        let op = parse_expression(src).unwrap();
        assert_eq!(evaluate(&op), Err(EvalError::DivisionByZero), "'{src}'");
    }

    // A zero left operand divides fine.
    assert_result("0 / 5", 0.0);
}

#[test]
fn invalid_operators_are_rejected() {
    assert_parse_error("3 ^ 4", &ParseError::InvalidOperator { token: "^".to_string() });
    assert_parse_error("3 % 4", &ParseError::InvalidOperator { token: "%".to_string() });
}

#[test]
fn invalid_numbers_are_rejected() {
    assert_parse_error("x + 4", &ParseError::InvalidNumber { token: "x".to_string() });
    assert_parse_error("1.2.3 + 1", &ParseError::InvalidNumber { token: "1.2.3".to_string() });
    assert_parse_error("foo", &ParseError::InvalidNumber { token: "foo".to_string() });
}

#[test]
fn malformed_expressions_are_rejected() {
    assert_parse_error("", &ParseError::MalformedExpression);
    assert_parse_error("1 +", &ParseError::MalformedExpression);
    assert_parse_error("1 2 3", &ParseError::MalformedExpression);
    assert_parse_error("1 + 2 + 3", &ParseError::MalformedExpression);
}

#[test]
fn commands_are_recognized_before_parsing() {
    assert_eq!(Command::from_input("clear"), Some(Command::Clear));
    assert_eq!(Command::from_input("  CLEAR "), Some(Command::Clear));
    assert_eq!(Command::from_input("exit"), Some(Command::Exit));
    assert_eq!(Command::from_input("QUIT"), Some(Command::Exit));
    assert_eq!(Command::from_input("Help"), Some(Command::Help));

    // Expressions and near-misses fall through to the parser.
    assert_eq!(Command::from_input("3 + 4"), None);
    assert_eq!(Command::from_input("clearly"), None);
}

#[test]
fn integral_results_format_without_a_trailing_zero() {
    assert_eq!(format_number(4.0), "4");
    assert_eq!(format_number(-10.0), "-10");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(2.5), "2.5");

    // Values outside the exactly-representable integer range keep the
    // default rendering instead of being cast through i64.
    assert_eq!(format_number(1e300), format!("{}", 1e300));
    assert!(!format_number(1e300).ends_with(".0"));
}
