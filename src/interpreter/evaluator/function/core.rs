use crate::{
    ast::{BinaryOperator, Expr, Function},
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Environment, EvalResult},
        function::builtin,
    },
};

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (qualifier, n) = match self {
            Self::Exact(n) => ("exactly", n),
            Self::AtLeast(n) => ("at least", n),
        };
        let noun = if *n == 1 { "argument" } else { "arguments" };
        write!(f, "{qualifier} {n} {noun}")
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the [`Function`] it resolves to,
/// - an arity specification.
///
/// The macro produces:
/// - `BuiltinDef` (metadata for one builtin),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                function: $function:path,
                arity: $arity:expr $(,)?
            }
        ),* $(,)?
    ) => {
        impl Function {
            /// How many arguments the function accepts.
            #[must_use]
            #[allow(clippy::match_same_arms)]
            pub const fn arity(self) -> Arity {
                match self {
                    $($function => $arity,)*
                }
            }
        }

        /// Metadata for one builtin function.
        #[derive(Debug)]
        pub struct BuiltinDef {
            pub name:     &'static str,
            pub function: Function,
            pub arity:    Arity,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, function: $function, arity: $arity },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "add" => { function: Function::Add, arity: Arity::AtLeast(1) },
    "sub" => { function: Function::Sub, arity: Arity::AtLeast(1) },
    "mul" => { function: Function::Mul, arity: Arity::AtLeast(1) },
    "div" => { function: Function::Div, arity: Arity::AtLeast(1) },
    "mod" => { function: Function::Mod, arity: Arity::AtLeast(1) },
    "sin" => { function: Function::Sin, arity: Arity::Exact(1) },
    "cos" => { function: Function::Cos, arity: Arity::Exact(1) },
    "tan" => { function: Function::Tan, arity: Arity::Exact(1) },
}

/// Looks up a builtin by the name it is called with.
///
/// # Example
/// ```
/// use reckon::{
///     ast::Function,
///     interpreter::evaluator::function::core::{Arity, find_builtin},
/// };
///
/// let builtin = find_builtin("sub").unwrap();
/// assert_eq!(builtin.function, Function::Sub);
/// assert_eq!(builtin.arity, Arity::AtLeast(1));
///
/// assert!(find_builtin("pow").is_none());
/// ```
#[must_use]
pub fn find_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Whether `name` is reserved for a builtin and cannot be assigned to.
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

impl Environment {
    /// Evaluates a builtin function call.
    ///
    /// Aggregators (`add`, `sub`, `mul`, `div`, `mod`) take the first
    /// argument as the running value and fold the remaining ones into it left
    /// to right, so `sub(10, 3, 2)` is `(10 - 3) - 2`. Each argument is only
    /// evaluated when the fold reaches it, which means an error in an earlier
    /// step is reported before a later argument is looked at.
    ///
    /// Trigonometric functions evaluate their single argument as degrees.
    ///
    /// # Parameters
    /// - `function`: The builtin being called.
    /// - `arguments`: Argument expressions. The parser already rejects
    ///   calls that do not fit [`Function::arity`]; hand-built calls are
    ///   checked again here.
    /// - `position`: Character offset of the call for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::{BinaryOperator, Expr, Function},
    ///     interpreter::evaluator::core::Environment,
    /// };
    ///
    /// let env = Environment::new();
    /// let args = vec![Expr::literal(10.0), Expr::literal(3.0), Expr::literal(2.0)];
    ///
    /// assert_eq!(env.eval_function_call(Function::Sub, &args, 0).unwrap(), 5.0);
    /// assert!(env.eval_function_call(Function::Sin, &args, 0).is_err());
    /// ```
    ///
    /// # Errors
    /// Returns `ArgumentCountMismatch` if the argument count does not fit the
    /// function's arity, and otherwise the first error of an argument or of
    /// a fold step.
    pub fn eval_function_call(&self,
                              function: Function,
                              arguments: &[Expr],
                              position: usize)
                              -> EvalResult<f64> {
        let arity = function.arity();
        let mismatch = || RuntimeError::ArgumentCountMismatch { name:     function.name().to_string(),
                                                                expected: arity.to_string(),
                                                                found:    arguments.len(),
                                                                column:   position + 1, };
        if !arity.check(arguments.len()) {
            return Err(mismatch());
        }
        let (first, rest) = arguments.split_first().ok_or_else(mismatch)?;
        let first = self.eval(first)?;

        let op = match function {
            Function::Sin => return Ok(builtin::sin(first)),
            Function::Cos => return Ok(builtin::cos(first)),
            Function::Tan => return Ok(builtin::tan(first)),
            Function::Add => BinaryOperator::Add,
            Function::Sub => BinaryOperator::Sub,
            Function::Mul => BinaryOperator::Mul,
            Function::Div => BinaryOperator::Div,
            Function::Mod => BinaryOperator::Mod,
        };

        let mut accumulator = first;
        for expr in rest {
            let value = self.eval(expr)?;
            accumulator = Self::eval_scalar_op(op, accumulator, value, position)?;
        }
        Ok(accumulator)
    }
}
