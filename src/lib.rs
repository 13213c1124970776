//! # reckon
//!
//! reckon is an interactive arithmetic expression evaluator written in Rust.
//! It tokenizes a line, builds a precedence-correct expression tree with the
//! shunting-yard algorithm and evaluates it against a session's variables.
//! Supported are numbers, parentheses, `+ - * / %`, assignment with `=`,
//! the folding builtins `add`, `sub`, `mul`, `div`, `mod` and the
//! trigonometric builtins `sin`, `cos`, `tan` over degrees.

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

use tracing::debug;

use crate::{
    ast::Statement,
    error::EvalError,
    interpreter::{evaluator::core::Environment, parser::statement::parse_statement},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent an
/// input line as a tree. The tree is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the four expression node kinds and the statement wrapper.
/// - Defines the binary operators with their precedence and the builtin
///   functions.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while building or
/// evaluating an expression. Every error carries enough detail to be shown
/// to the user as is.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax and runtime).
/// - Attaches columns and names for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of evaluating a line.
///
/// This module ties together lexing, parsing, evaluation and session
/// handling.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one input line against `env`.
///
/// A line of the form `name = expression` evaluates the expression, stores
/// the result under `name` and returns `Ok(None)`. Any other line is
/// evaluated as an expression and its value is returned as `Ok(Some(v))`.
///
/// Nothing is committed on failure: a failing assignment leaves `env`
/// untouched.
///
/// # Errors
/// Returns [`EvalError::Syntax`] if the line cannot be parsed and
/// [`EvalError::Runtime`] if evaluation fails.
///
/// # Examples
/// ```
/// use reckon::{evaluate_line, reset_environment};
///
/// let mut env = reset_environment();
///
/// assert_eq!(evaluate_line("2+3*4", &mut env).unwrap(), Some(14.0));
///
/// // Assignments store their value and produce nothing to print.
/// assert_eq!(evaluate_line("x = 10", &mut env).unwrap(), None);
/// assert_eq!(evaluate_line("x * 2", &mut env).unwrap(), Some(20.0));
///
/// // Unknown variables are an error.
/// assert!(evaluate_line("y + 1", &mut env).is_err());
/// ```
pub fn evaluate_line(raw: &str, env: &mut Environment) -> Result<Option<f64>, EvalError> {
    match parse_statement(raw)? {
        Statement::Expression(expr) => Ok(Some(env.eval(&expr)?)),
        Statement::Assignment { name, value } => {
            let value = env.eval(&value)?;
            debug!(%name, value, "assigning variable");
            env.assign(name, value);
            Ok(None)
        },
    }
}

/// Produces a fresh, empty environment for a new session.
#[must_use]
pub fn reset_environment() -> Environment {
    Environment::new()
}

/// Formats a value for display: fixed-point with exactly two decimals.
///
/// Values that round to zero are shown as `0.00`, never `-0.00`.
///
/// # Examples
/// ```
/// use reckon::format_value;
///
/// assert_eq!(format_value(14.0), "14.00");
/// assert_eq!(format_value(-2.0 / 3.0), "-0.67");
/// assert_eq!(format_value(-0.001), "0.00");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    let formatted = format!("{value:.2}");
    if formatted == "-0.00" { "0.00".to_string() } else { formatted }
}

/// Formats the outcome of [`evaluate_line`] for display.
///
/// Values are rendered with [`format_value`] and errors are prefixed with
/// `Error: `. Successful assignments have nothing to display.
///
/// # Examples
/// ```
/// use reckon::{evaluate_line, format_outcome, reset_environment};
///
/// let mut env = reset_environment();
///
/// let shown = format_outcome(&evaluate_line("5/0", &mut env));
/// assert!(shown.unwrap().starts_with("Error: Division by zero"));
///
/// assert_eq!(format_outcome(&evaluate_line("a = 1", &mut env)), None);
/// ```
#[must_use]
pub fn format_outcome(outcome: &Result<Option<f64>, EvalError>) -> Option<String> {
    match outcome {
        Ok(Some(value)) => Some(format_value(*value)),
        Ok(None) => None,
        Err(e) => Some(format!("Error: {e}")),
    }
}
