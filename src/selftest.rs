use crate::{
    error::{EvalError, ParseError},
    interpreter::{evaluator::evaluate, parser::parse_expression},
};

/// The expected outcome of one self-test case.
#[derive(Debug)]
enum Expected {
    /// Parsing and evaluation succeed with this value.
    Value(f64),
    /// Parsing fails with this error.
    ParseFailure(ParseError),
    /// Parsing succeeds but evaluation fails with this error.
    EvalFailure(EvalError),
}

/// The fixed battery: every operator on the happy path, a signed operand,
/// whitespace insensitivity, and one case per error kind.
fn cases() -> Vec<(&'static str, Expected)> {
    use Expected::{EvalFailure, ParseFailure, Value};

    vec![("1 + 2", Value(3.0)),
         ("5 - 3", Value(2.0)),
         ("4 * 2.5", Value(10.0)),
         ("9 / 3", Value(3.0)),
         ("10 / 2", Value(5.0)),
         ("  -2.5 * 4", Value(-10.0)),
         ("3+4", Value(7.0)),
         (" 3  +   4 ", Value(7.0)),
         ("1 / 0", EvalFailure(EvalError::DivisionByZero)),
         ("3 ^ 4", ParseFailure(ParseError::InvalidOperator { token: "^".to_string() })),
         ("x + 4", ParseFailure(ParseError::InvalidNumber { token: "x".to_string() })),
         ("1 +", ParseFailure(ParseError::MalformedExpression))]
}

/// Runs the built-in self-test battery.
///
/// Each case is run to completion even if an earlier one fails; failing
/// cases are reported on stderr. The summary line
/// `Ran {total} tests: {passed} passed, {failed} failed` is printed at the
/// end.
///
/// # Returns
/// `true` iff every case passed.
#[must_use]
pub fn run() -> bool {
    let cases = cases();
    let total = cases.len();
    let mut passed = 0;

    for (input, expected) in &cases {
        match check(input, expected) {
            Ok(()) => passed += 1,
            Err(report) => eprintln!("FAILED '{input}': {report}"),
        }
    }

    println!("Ran {total} tests: {passed} passed, {} failed", total - passed);
    passed == total
}

fn check(input: &str, expected: &Expected) -> Result<(), String> {
    let parsed = parse_expression(input);

    match expected {
        Expected::Value(want) => match &parsed {
            Ok(operation) => match evaluate(operation) {
                Ok(got) if got == *want => Ok(()),
                Ok(got) => Err(format!("expected {want}, got {got}")),
                Err(e) => Err(format!("expected {want}, got evaluation error: {e}")),
            },
            Err(e) => Err(format!("expected {want}, got parse error: {e}")),
        },

        Expected::ParseFailure(want) => match &parsed {
            Err(e) if e == want => Ok(()),
            Err(e) => Err(format!("expected parse error '{want}', got '{e}'")),
            Ok(operation) => Err(format!("expected parse error '{want}', parsed {operation}")),
        },

        Expected::EvalFailure(want) => match &parsed {
            Ok(operation) => match evaluate(operation) {
                Err(e) if e == *want => Ok(()),
                Err(e) => Err(format!("expected evaluation error '{want}', got '{e}'")),
                Ok(got) => Err(format!("expected evaluation error '{want}', got {got}")),
            },
            Err(e) => Err(format!("expected evaluation error '{want}', got parse error: {e}")),
        },
    }
}
