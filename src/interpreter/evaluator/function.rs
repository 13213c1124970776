/// Trigonometric builtin implementations.
///
/// `sin`, `cos` and `tan` over arguments measured in degrees.
pub mod builtin;

/// The builtin table and call evaluation.
///
/// Maps names to builtins with their arity and folds aggregator arguments.
pub mod core;
