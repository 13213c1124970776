#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building an expression.
///
/// Columns are 1-based character positions in the input line, so
/// `é+1` reports the `+` at column 2.
pub enum ParseError {
    /// The line (or a parenthesised group) contained no tokens.
    EmptyExpression,
    /// Found a token that cannot appear at this point.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// An operator was found with nothing to apply it to.
    MissingOperand {
        /// The operator lacking an operand.
        operator: String,
        /// The column of the operator.
        column:   usize,
    },
    /// Two operands followed each other without an operator in between.
    MissingOperator {
        /// The column of the second operand.
        column: usize,
    },
    /// An opening parenthesis `(` was never closed.
    ExpectedClosingParen {
        /// The column of the unclosed parenthesis.
        column: usize,
    },
    /// A closing parenthesis `)` had no matching opening one.
    UnmatchedClosingParen {
        /// The column of the stray parenthesis.
        column: usize,
    },
    /// Call syntax was used with a name that is not a built-in function.
    UnknownFunction {
        /// The name that was called.
        name:   String,
        /// The column of the name.
        column: usize,
    },
    /// A built-in function received the wrong number of arguments.
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
    /// One argument in a call's argument list was empty.
    EmptyArgument {
        /// The function name.
        name:   String,
        /// The column of the function name.
        column: usize,
    },
    /// The left side of an assignment is not a valid variable name.
    InvalidAssignmentTarget {
        /// The text found left of `=`.
        target: String,
    },
    /// The expression nests deeper than the builder accepts.
    TooDeep {
        /// The deepest accepted tree.
        limit:  usize,
        /// The column of the operator or call that went past the limit.
        column: usize,
    },
    /// Tried to assign to the name of a built-in function or a session
    /// command.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Syntax error: Empty expression."),

            Self::UnexpectedToken { token, column } => {
                write!(f, "Syntax error at column {column}: Unexpected token '{token}'.")
            },

            Self::MissingOperand { operator, column } => write!(f,
                                                                "Syntax error at column {column}: Operator '{operator}' is missing an operand."),

            Self::MissingOperator { column } => write!(f,
                                                       "Syntax error at column {column}: Expected an operator between operands."),

            Self::ExpectedClosingParen { column } => write!(f,
                                                            "Syntax error at column {column}: Expected closing parenthesis ')' but none found."),

            Self::UnmatchedClosingParen { column } => write!(f,
                                                             "Syntax error at column {column}: Closing parenthesis ')' has no matching '('."),

            Self::UnknownFunction { name, column } => {
                write!(f, "Syntax error at column {column}: Unknown function '{name}'.")
            },

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          column, } => write!(f,
                                                              "Syntax error at column {column}: Function '{name}' expects {expected}, but {found} given."),

            Self::EmptyArgument { name, column } => write!(f,
                                                           "Syntax error at column {column}: Empty argument in call to '{name}'."),

            Self::TooDeep { limit, column } => write!(f,
                                                      "Syntax error at column {column}: Expression nests deeper than {limit} levels."),

            Self::InvalidAssignmentTarget { target } => {
                write!(f, "Syntax error: '{target}' is not a valid variable name.")
            },

            Self::IdentifierReserved { name } => {
                write!(f, "Syntax error: Identifier '{name}' is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
