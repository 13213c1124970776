/// Core evaluation logic and the variable environment.
///
/// Contains the tree-walking evaluator and the name-to-value mapping that
/// persists across lines of one session.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic shared by infix operators and the folding
/// builtins, including the zero-divisor checks.
pub mod binary;

/// Function evaluation.
///
/// Holds the builtin table and evaluates calls to aggregators and
/// trigonometric functions.
pub mod function;
