/// Parsing errors.
///
/// Defines every syntax error the expression builder can raise: unbalanced
/// parentheses, empty expressions, missing operands, unknown functions and
/// malformed assignments.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a built expression: undefined
/// variables and zero divisors.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure produced while handling one input line.
///
/// Syntax problems are detected before evaluation starts, so a line that
/// fails with [`EvalError::Syntax`] never touches the environment.
pub enum EvalError {
    /// The line could not be turned into an expression tree.
    Syntax(ParseError),
    /// The expression tree could not be evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
