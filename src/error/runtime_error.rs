#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The column where the variable is referenced.
        column: usize,
    },
    /// The right operand of `/` (or a `div` argument) evaluated to zero.
    DivisionByZero {
        /// The column of the operator or function.
        column: usize,
    },
    /// The right operand of `%` (or a `mod` argument) evaluated to zero.
    ModuloByZero {
        /// The column of the operator or function.
        column: usize,
    },
    /// A call node holds an argument count its function does not accept.
    /// Only trees built by hand can get here.
    ArgumentCountMismatch {
        /// The function name.
        name:     String,
        /// A description of the accepted argument count.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The column of the function name.
        column:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, column } => {
                write!(f, "Undefined variable '{name}' at column {column}.")
            },
            Self::DivisionByZero { column } => write!(f, "Division by zero at column {column}."),
            Self::ModuloByZero { column } => write!(f, "Modulo by zero at column {column}."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          column, } => write!(f,
                                                              "Function '{name}' expects {expected}, but {found} given at column {column}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
