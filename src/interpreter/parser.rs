/// Core expression building.
///
/// Implements the shunting-yard builder that turns a token slice into an
/// expression tree, honouring operator precedence and parentheses.
pub mod core;

/// Function call parsing.
///
/// Splits a builtin call's argument list on top-level commas and builds each
/// argument separately.
pub mod call;

/// Statement parsing.
///
/// Detects assignment syntax on a raw line and dispatches the remaining text
/// to the expression builder.
pub mod statement;
