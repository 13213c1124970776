use std::collections::HashMap;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variables of one session.
///
/// An `Environment` maps variable names to the last value assigned to them.
/// It lives for a whole session, is only mutated by successful assignments
/// and never forgets a name.
///
/// ## Usage
///
/// Evaluation only needs shared access, so evaluating an expression can
/// never change the environment. Assignment goes through
/// [`Environment::assign`] once the value has been computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value last assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, replacing any earlier value.
    pub fn assign(&mut self, name: impl Into<String>, value: f64) {
        self.variables.insert(name.into(), value);
    }

    /// Number of assigned variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All variables, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, f64)> {
        let mut variables: Vec<_> = self.variables
                                        .iter()
                                        .map(|(name, value)| (name.as_str(), *value))
                                        .collect();
        variables.sort_by(|a, b| a.0.cmp(b.0));
        variables
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the node kind: literals yield their value, variables
    /// are looked up, binary operations evaluate the left operand before the
    /// right one, and function calls are handed to
    /// [`Environment::eval_function_call`].
    ///
    /// # Errors
    /// Returns the first `RuntimeError` encountered: an undefined variable,
    /// a division by zero or a modulo by zero.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     evaluator::core::Environment, lexer::tokenize, parser::core::build,
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 4.0);
    ///
    /// let expr = build(&tokenize("x * (2 + 1)")).unwrap();
    /// assert_eq!(env.eval(&expr).unwrap(), 12.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value } => Ok(*value),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_scalar_op(*op, left, right, *position)
            },
            Expr::FunctionCall { function,
                                 arguments,
                                 position, } => {
                self.eval_function_call(*function, arguments, *position)
            },
        }
    }

    /// Resolves a variable reference.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if nothing was assigned to `name`.
    pub fn eval_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name:   name.to_string(),
                                                             column: position + 1, })
    }
}
