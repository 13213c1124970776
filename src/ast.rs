/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` is a closed set of four node kinds. Each node owns its children
/// outright, so a tree is torn down recursively when it goes out of scope.
/// Variables are kept by name and only resolved against an environment at
/// evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Character offset of the name in the source line.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Character offset of the operator in the source line.
        position: usize,
    },
    /// Built-in function call expression (e.g. `add(1, 2, 3)` or `sin(x)`).
    FunctionCall {
        /// The function being called.
        function:  Function,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Character offset of the function name in the source line.
        position:  usize,
    },
}

impl Expr {
    /// Convenience constructor for a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Convenience constructor for a binary node.
    ///
    /// ## Example
    /// ```
    /// use reckon::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::literal(1.0), BinaryOperator::Add, Expr::literal(2.0), 1);
    ///
    /// assert_eq!(expr.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, position: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         position }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

impl BinaryOperator {
    /// Binding strength used by the shunting-yard builder.
    ///
    /// `+` and `-` bind at 1; `*`, `/` and `%` bind at 2. Operators of equal
    /// precedence associate to the left.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
        }
    }
}

/// The built-in functions recognised in call syntax.
///
/// The five arithmetic aggregators fold their arguments left to right with
/// the matching [`BinaryOperator`]. The trigonometric functions take a single
/// argument measured in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// `add(a, b, ...)`
    Add,
    /// `sub(a, b, ...)`
    Sub,
    /// `mul(a, b, ...)`
    Mul,
    /// `div(a, b, ...)`
    Div,
    /// `mod(a, b, ...)`
    Mod,
    /// `sin(deg)`
    Sin,
    /// `cos(deg)`
    Cos,
    /// `tan(deg)`
    Tan,
}

impl Function {
    /// The name the function is called by.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Renders the tree fully parenthesised, which makes the grouping chosen by
/// the builder visible in logs and tests.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { function,
                                 arguments,
                                 .. } => {
                write!(f, "{function}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents one parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`: evaluate and store, producing no printable value.
    Assignment {
        /// The variable being assigned.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}
