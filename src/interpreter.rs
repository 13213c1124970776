/// The evaluator module executes expression trees and computes results.
///
/// The evaluator walks the tree against the session's variable environment
/// and produces a number or a runtime error.
///
/// # Responsibilities
/// - Evaluates every node kind, including builtin calls.
/// - Resolves variables against the environment.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes input lines for further parsing.
///
/// The lexer reads the raw text and produces a sequence of tokens: numbers,
/// identifiers, operators, parentheses and commas. It also decides whether a
/// `-` is a sign or a subtraction.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Detects assignment syntax on a raw line.
/// - Converts tokens into a precedence-correct tree with the shunting-yard
///   algorithm.
/// - Validates calls against the builtin table.
pub mod parser;
/// Line-at-a-time session handling for interactive front ends.
///
/// Owns the environment, formats replies and appends to the optional
/// calculation log and history.
pub mod session;
