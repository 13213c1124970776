use std::fs;

use reckon::{
    ast::{Expr, Function},
    error::{EvalError, ParseError, RuntimeError},
    evaluate_line, format_outcome,
    interpreter::{
        evaluator::core::Environment,
        parser::core::MAX_DEPTH,
        session::{Reply, Session},
    },
    reset_environment,
};
use walkdir::WalkDir;

#[test]
fn transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/transcripts").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for (number, (input, expected)) in extract_exchanges(&content).into_iter().enumerate() {
            count += 1;
            let reply = session.execute(&input);
            let matches = match &reply {
                Reply::Value(value) => value == &expected,
                Reply::Silent => expected.is_empty(),
                Reply::Error(message) => !expected.is_empty() && message.starts_with(&expected),
            };
            assert!(matches,
                    "Exchange {} in {:?} failed:\n{}\nExpected: {:?}\nGot: {:?}",
                    number + 1,
                    path,
                    input,
                    expected,
                    reply);
        }
    }

    assert!(count > 0, "No exchanges found in tests/transcripts");
}

/// Reads `input => expected` lines, skipping blank lines and `#` comments.
/// An empty expectation means the line prints nothing.
fn extract_exchanges(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(input, expected)| (input.to_string(), expected.trim().to_string()))
           .collect()
}

fn value_of(src: &str) -> f64 {
    let mut env = reset_environment();
    match evaluate_line(src, &mut env) {
        Ok(Some(value)) => value,
        other => panic!("Expression {src:?} did not produce a value: {other:?}"),
    }
}

fn error_of(src: &str) -> EvalError {
    let mut env = reset_environment();
    match evaluate_line(src, &mut env) {
        Err(e) => e,
        Ok(v) => panic!("Expression {src:?} succeeded with {v:?} but was expected to fail"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_eq!(value_of("2+3*4"), 14.0);
    assert_eq!(value_of("(2+3)*4"), 20.0);
    assert_eq!(value_of("20/2*5"), 50.0);
    assert_eq!(value_of("2*(3+(4-1))"), 12.0);
}

#[test]
fn unary_minus() {
    assert_eq!(value_of("-5+3"), -2.0);
    assert_eq!(value_of("3*-2"), -6.0);
    assert_eq!(value_of("(-4)*(-4)"), 16.0);
    assert_eq!(value_of("--5"), 5.0);
    assert_eq!(value_of("8/-(1+1)"), -4.0);
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert!(matches!(error_of("5/0"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { column: 2 })));
    assert!(matches!(error_of("5%0"),
                     EvalError::Runtime(RuntimeError::ModuloByZero { column: 2 })));
    assert!(matches!(error_of("1/(2-2)"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(error_of("div(4, 2, 0)"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { column: 1 })));
}

#[test]
fn assignment_round_trip_and_overwrite() {
    let mut env = reset_environment();

    assert_eq!(evaluate_line("x=10", &mut env).unwrap(), None);
    assert_eq!(evaluate_line("x*2", &mut env).unwrap(), Some(20.0));

    assert_eq!(evaluate_line("x = 3", &mut env).unwrap(), None);
    assert_eq!(evaluate_line("x*2", &mut env).unwrap(), Some(6.0));
    assert_eq!(env.len(), 1);
}

#[test]
fn failing_assignment_leaves_environment_untouched() {
    let mut env = reset_environment();
    evaluate_line("x = 1", &mut env).unwrap();

    assert!(evaluate_line("x = 1/0", &mut env).is_err());
    assert!(evaluate_line("x = y", &mut env).is_err());
    assert!(evaluate_line("z = (1", &mut env).is_err());

    assert_eq!(env.get("x"), Some(1.0));
    assert_eq!(env.get("z"), None);
}

#[test]
fn undefined_variable_is_reported_by_name() {
    match error_of("y+1") {
        EvalError::Runtime(RuntimeError::UndefinedVariable { name, column }) => {
            assert_eq!(name, "y");
            assert_eq!(column, 1);
        },
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn left_error_is_reported_before_right() {
    assert!(matches!(error_of("a + 1/0"),
                     EvalError::Runtime(RuntimeError::UndefinedVariable { .. })));
    assert!(matches!(error_of("1/0 + a"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(error_of("div(1, 0, a)"),
                     EvalError::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn functions_fold_left_to_right() {
    assert_eq!(value_of("sub(10,3,2)"), 5.0);
    assert_eq!(value_of("div(64,4,2)"), 8.0);
    assert_eq!(value_of("mod(17,10,4)"), 3.0);
    assert_eq!(value_of("mul(add(1,2),3)"), 9.0);
}

#[test]
fn trig_functions_take_degrees() {
    assert!((value_of("sin(90)") - 1.0).abs() < 1e-12);
    assert!((value_of("cos(0)") - 1.0).abs() < 1e-12);
    assert!((value_of("sin(30)") - 0.5).abs() < 1e-12);
    assert!((value_of("tan(45)") - 1.0).abs() < 1e-12);
    assert!(value_of("tan(90)").is_finite());
}

#[test]
fn nested_calls_and_unbalanced_input() {
    assert_eq!(value_of("add(mul(2, (1 + 2)), sub(5, 1))"), 10.0);
    assert!(matches!(error_of("(1+2"),
                     EvalError::Syntax(ParseError::ExpectedClosingParen { column: 1 })));
    assert!(matches!(error_of("add(1, (2, 3)"), EvalError::Syntax(_)));
}

#[test]
fn unknown_function_is_syntax_error() {
    assert!(matches!(error_of("pow(2, 3)"),
                     EvalError::Syntax(ParseError::UnknownFunction { .. })));
}

#[test]
fn re_evaluation_is_idempotent() {
    let mut env = reset_environment();
    evaluate_line("r = 2.5", &mut env).unwrap();
    let before = env.clone();

    let first = evaluate_line("r * r + sin(r)", &mut env).unwrap();
    for _ in 0..5 {
        assert_eq!(evaluate_line("r * r + sin(r)", &mut env).unwrap(), first);
    }
    assert_eq!(env, before);
}

#[test]
fn outcome_formatting() {
    let mut env = reset_environment();

    assert_eq!(format_outcome(&evaluate_line("2+3*4", &mut env)).as_deref(), Some("14.00"));
    assert_eq!(format_outcome(&evaluate_line("-5+3", &mut env)).as_deref(), Some("-2.00"));
    assert_eq!(format_outcome(&evaluate_line("x = 4", &mut env)), None);
    assert_eq!(format_outcome(&evaluate_line("y+1", &mut env)).as_deref(),
               Some("Error: Undefined variable 'y' at column 1."));
    assert_eq!(format_outcome(&evaluate_line("5%0", &mut env)).as_deref(),
               Some("Error: Modulo by zero at column 2."));
}

#[test]
fn overlong_chains_are_rejected_without_crashing() {
    let mut env = reset_environment();
    evaluate_line("x = 7", &mut env).unwrap();

    let chain = format!("{}1", "1+".repeat(100_000));
    assert!(matches!(evaluate_line(&chain, &mut env),
                     Err(EvalError::Syntax(ParseError::TooDeep { limit: MAX_DEPTH, .. }))));
    assert!(matches!(evaluate_line(&format!("x = {chain}"), &mut env),
                     Err(EvalError::Syntax(ParseError::TooDeep { .. }))));

    let calls = format!("{}1{}", "add(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(evaluate_line(&calls, &mut env),
                     Err(EvalError::Syntax(ParseError::TooDeep { .. }))));

    assert_eq!(env.get("x"), Some(7.0));
    assert_eq!(evaluate_line("x + 1", &mut env).unwrap(), Some(8.0));
}

#[test]
fn chains_up_to_the_limit_evaluate() {
    let longest = format!("{}1", "1+".repeat(MAX_DEPTH - 1));
    assert_eq!(value_of(&longest), MAX_DEPTH as f64);

    let one_more = format!("{}1", "1+".repeat(MAX_DEPTH));
    assert!(matches!(error_of(&one_more),
                     EvalError::Syntax(ParseError::TooDeep { .. })));
}

#[test]
fn hand_built_calls_check_their_arity() {
    let env = Environment::new();

    assert_eq!(env.eval_function_call(Function::Add, &[], 4),
               Err(RuntimeError::ArgumentCountMismatch { name:     "add".to_string(),
                                                         expected: "at least 1 argument".to_string(),
                                                         found:    0,
                                                         column:   5, }));

    let two = [Expr::literal(90.0), Expr::literal(0.0)];
    assert!(matches!(env.eval_function_call(Function::Sin, &two, 0),
                     Err(RuntimeError::ArgumentCountMismatch { found: 2, .. })));
    assert_eq!(env.eval_function_call(Function::Add, &two, 0), Ok(90.0));
}

#[test]
fn session_commands_cannot_be_assigned() {
    let mut env = reset_environment();
    for command in ["vars", "clear", "exit", "end"] {
        assert!(matches!(evaluate_line(&format!("{command} = 3"), &mut env),
                         Err(EvalError::Syntax(ParseError::IdentifierReserved { .. }))));
    }
    assert!(env.is_empty());

    evaluate_line("variable = 3", &mut env).unwrap();
    assert_eq!(env.get("variable"), Some(3.0));
}
