use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Environment, EvalResult},
};

impl Environment {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Division and modulo check their right operand explicitly, so a zero
    /// divisor is reported as an error and never yields infinity or NaN.
    /// Modulo is the truncated remainder and takes the sign of the left
    /// operand.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Character offset of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// let result = Environment::eval_scalar_op(BinaryOperator::Mod, -7.0, 3.0, 0).unwrap();
    /// assert_eq!(result, -1.0);
    ///
    /// assert!(Environment::eval_scalar_op(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          position: usize)
                          -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        Ok(match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { column: position + 1 });
                }
                left / right
            },
            Mod => {
                if right == 0.0 {
                    return Err(RuntimeError::ModuloByZero { column: position + 1 });
                }
                left % right
            },
        })
    }
}
