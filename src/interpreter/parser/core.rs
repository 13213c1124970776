use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::Token, parser::call::parse_call},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Binding strength of prefix negation; tighter than every binary operator.
const NEGATE_PRECEDENCE: u8 = 3;

/// Deepest expression tree the builder accepts.
///
/// Evaluating and dropping a tree recurses once per level, so every level
/// costs stack. A chain of `n` operators such as `1+1+...+1` is `n + 1`
/// levels deep, and so is a call nested `n` times.
pub const MAX_DEPTH: usize = 256;

/// A built operand together with the depth of its tree.
type Operand = (Expr, usize);

/// An entry on the builder's operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// A binary operator and its character offset.
    Operator(BinaryOperator, usize),
    /// A prefix `-` applied to a non-literal operand.
    Negate(usize),
    /// An opening parenthesis that has not been closed yet.
    LParen(usize),
}

impl Pending {
    /// Precedence of an operator entry; parentheses have none and are never
    /// reduced by precedence.
    const fn precedence(self) -> Option<u8> {
        match self {
            Self::Operator(op, _) => Some(op.precedence()),
            Self::Negate(_) => Some(NEGATE_PRECEDENCE),
            Self::LParen(_) => None,
        }
    }
}

/// Builds an expression tree from a token slice.
///
/// This is the shunting-yard algorithm with an operand stack and an operator
/// stack:
/// - numbers and variables push an operand,
/// - a name directly followed by `(` is a function call and its whole
///   argument list is consumed by [`parse_call`],
/// - `(` pushes onto the operator stack and `)` reduces back to it,
/// - a binary operator first reduces every pending operator of greater or
///   equal precedence, so equal precedence associates to the left,
/// - the end of input reduces whatever is left.
///
/// A reduction pops one operator and its two most recent operands (right
/// first) and pushes the combined [`Expr::BinaryOp`].
///
/// # Errors
/// Returns a `ParseError` for empty input, unbalanced parentheses,
/// operators without operands, adjacent operands, unknown functions and
/// stray tokens, and `TooDeep` for a tree deeper than [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::core::build};
///
/// let expr = build(&tokenize("2+3*4-1")).unwrap();
/// assert_eq!(expr.to_string(), "((2 + (3 * 4)) - 1)");
///
/// assert!(build(&tokenize("(1+2")).is_err());
/// ```
pub fn build(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    build_operand(tokens, 0).map(|(expr, _)| expr)
}

/// Builds a tree that sits `nesting` calls deep and reports its depth.
pub(in crate::interpreter::parser) fn build_operand(tokens: &[(Token, usize)],
                                                    nesting: usize)
                                                    -> ParseResult<Operand> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut operands: Vec<Operand> = Vec::new();
    let mut operators: Vec<Pending> = Vec::new();
    let mut expect_operand = true;
    let mut index = 0;

    while let Some((token, position)) = tokens.get(index) {
        let position = *position;
        index += 1;

        match token {
            Token::Number(value) => {
                require_operand_slot(expect_operand, position)?;
                operands.push((Expr::literal(*value), 1));
                expect_operand = false;
            },
            Token::Identifier(name) => {
                require_operand_slot(expect_operand, position)?;
                if matches!(tokens.get(index), Some((Token::LParen, _))) {
                    let (call, next) = parse_call(name, position, tokens, index, nesting)?;
                    operands.push(call);
                    index = next;
                } else {
                    operands.push((Expr::Variable { name: name.clone(),
                                                    position },
                                   1));
                }
                expect_operand = false;
            },
            Token::LParen => {
                require_operand_slot(expect_operand, position)?;
                operators.push(Pending::LParen(position));
            },
            Token::RParen => {
                if expect_operand {
                    return Err(missing_operand(operators.last(), token, position));
                }
                loop {
                    match operators.pop() {
                        Some(Pending::LParen(_)) => break,
                        Some(pending) => reduce(pending, &mut operands)?,
                        None => {
                            return Err(ParseError::UnmatchedClosingParen { column:
                                                                               position + 1 });
                        },
                    }
                }
            },
            Token::Operator(op) => {
                if expect_operand {
                    return Err(ParseError::MissingOperand { operator: op.to_string(),
                                                            column:   position + 1, });
                }
                while let Some(&top) = operators.last()
                      && let Some(precedence) = top.precedence()
                      && precedence >= op.precedence()
                {
                    operators.pop();
                    reduce(top, &mut operands)?;
                }
                operators.push(Pending::Operator(*op, position));
                expect_operand = true;
            },
            Token::Negate => {
                require_operand_slot(expect_operand, position)?;
                operands.push((Expr::literal(-1.0), 1));
                operators.push(Pending::Negate(position));
            },
            Token::Comma | Token::Unrecognized(_) => {
                return Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                         column: position + 1, });
            },
        }
    }

    if expect_operand {
        return Err(match operators.last() {
                       Some(Pending::LParen(position)) => {
                           ParseError::ExpectedClosingParen { column: position + 1 }
                       },
                       Some(&Pending::Operator(op, position)) => {
                           ParseError::MissingOperand { operator: op.to_string(),
                                                        column:   position + 1, }
                       },
                       Some(Pending::Negate(position)) => {
                           ParseError::MissingOperand { operator: "-".to_string(),
                                                        column:   position + 1, }
                       },
                       None => ParseError::EmptyExpression,
                   });
    }

    while let Some(pending) = operators.pop() {
        if let Pending::LParen(position) = pending {
            return Err(ParseError::ExpectedClosingParen { column: position + 1 });
        }
        reduce(pending, &mut operands)?;
    }

    let operand = operands.pop().ok_or(ParseError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(ParseError::MissingOperator { column: 1 });
    }
    Ok(operand)
}

/// Fails when an operand appears where an operator was expected, as in
/// `2 3` or `2 (3)`.
fn require_operand_slot(expect_operand: bool, position: usize) -> ParseResult<()> {
    if expect_operand {
        Ok(())
    } else {
        Err(ParseError::MissingOperator { column: position + 1 })
    }
}

/// Describes a `)` found where an operand was expected.
fn missing_operand(top: Option<&Pending>, token: &Token, position: usize) -> ParseError {
    match top {
        Some(&Pending::Operator(op, at)) => ParseError::MissingOperand { operator: op.to_string(),
                                                                         column:   at + 1, },
        Some(Pending::Negate(at)) => ParseError::MissingOperand { operator: "-".to_string(),
                                                                  column:   at + 1, },
        Some(Pending::LParen(_)) | None => {
            ParseError::UnexpectedToken { token:  token.to_string(),
                                          column: position + 1, }
        },
    }
}

/// Pops two operands, combines them with `pending` and pushes the result.
///
/// Fails with `TooDeep` instead of growing the tree past [`MAX_DEPTH`].
fn reduce(pending: Pending, operands: &mut Vec<Operand>) -> ParseResult<()> {
    let (op, position) = match pending {
        Pending::Operator(op, position) => (op, position),
        Pending::Negate(position) => (BinaryOperator::Mul, position),
        Pending::LParen(position) => {
            return Err(ParseError::ExpectedClosingParen { column: position + 1 });
        },
    };

    let missing = || ParseError::MissingOperand { operator: op.to_string(),
                                                  column:   position + 1, };
    let (right, right_depth) = operands.pop().ok_or_else(missing)?;
    let (left, left_depth) = operands.pop().ok_or_else(missing)?;

    let depth = left_depth.max(right_depth) + 1;
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit:  MAX_DEPTH,
                                         column: position + 1, });
    }

    trace!(%op, depth, "reducing");
    operands.push((Expr::binary(left, op, right, position), depth));
    Ok(())
}
