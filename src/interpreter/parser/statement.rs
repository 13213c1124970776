use tracing::debug;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::function::core::is_reserved_identifier,
        lexer::{tokenize, tokenize_at},
        parser::core::{ParseResult, build},
    },
};

/// Words the interactive session reads as commands. They cannot be
/// assigned to, so typing one never hides a variable.
pub const SESSION_COMMANDS: &[&str] = &["exit", "end", "vars", "clear"];

/// Parses a single input line.
///
/// A line is either an assignment or an expression. It is an assignment
/// when it contains an `=` outside of any parentheses: the trimmed text to
/// the left of the first such `=` names the variable and the text to the
/// right is the value expression. Everything else is an expression.
///
/// # Parameters
/// - `line`: The raw input line.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a `ParseError` if the assignment target is not a valid variable
/// name, is reserved for a builtin or a session command, or if the
/// expression fails to build.
///
/// # Example
/// ```
/// use reckon::{ast::Statement, interpreter::parser::statement::parse_statement};
///
/// let statement = parse_statement("rate = 2 * 3").unwrap();
/// assert!(matches!(statement, Statement::Assignment { ref name, .. } if name == "rate"));
///
/// assert!(parse_statement("sin = 1").is_err());
/// ```
pub fn parse_statement(line: &str) -> ParseResult<Statement> {
    let Some(eq) = find_assignment(line) else {
        let expr = build(&tokenize(line))?;
        debug!(%expr, "built expression");
        return Ok(Statement::Expression(expr));
    };

    let name = parse_target(&line[..eq])?;
    let value = build(&tokenize_at(&line[eq + 1..], line[..=eq].chars().count()))?;
    debug!(%name, %value, "built assignment");

    Ok(Statement::Assignment { name, value })
}

/// Finds the byte offset of the first `=` that is not nested in parentheses.
fn find_assignment(line: &str) -> Option<usize> {
    let mut depth = 0_usize;
    for (index, c) in line.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '=' if depth == 0 => return Some(index),
            _ => {},
        }
    }
    None
}

/// Validates the left side of an assignment and returns the variable name.
///
/// A variable name starts with an ASCII letter followed by ASCII letters or
/// digits, the same shape the lexer accepts for identifiers.
fn parse_target(raw: &str) -> ParseResult<String> {
    let target = raw.trim();

    let mut chars = target.chars();
    let well_formed = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                      && chars.all(|c| c.is_ascii_alphanumeric());
    if !well_formed {
        return Err(ParseError::InvalidAssignmentTarget { target: target.to_string() });
    }
    if is_reserved_identifier(target) || SESSION_COMMANDS.contains(&target) {
        return Err(ParseError::IdentifierReserved { name: target.to_string() });
    }

    Ok(target.to_string())
}
