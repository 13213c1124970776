use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        evaluator::function::core::find_builtin,
        lexer::Token,
        parser::core::{MAX_DEPTH, ParseResult, build_operand},
    },
};

/// Token slice of a single call argument.
type Argument<'a> = &'a [(Token, usize)];

/// Parses a builtin call whose name has already been consumed.
///
/// `open` is the index of the `(` following the name. The argument list up
/// to the matching `)` is split on top-level commas and every argument is
/// built on its own, one call deeper than `nesting`.
///
/// # Parameters
/// - `name`: The called name.
/// - `position`: Character offset of the name.
/// - `tokens`: The full token slice.
/// - `open`: Index of the opening parenthesis in `tokens`.
/// - `nesting`: How many calls enclose this one.
///
/// # Returns
/// The [`Expr::FunctionCall`] node with the depth of its tree, and the index
/// of the first token after the closing parenthesis.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is not a builtin,
/// - the argument list is never closed,
/// - an argument is empty or fails to build,
/// - the number of arguments does not fit the builtin's arity,
/// - the call would nest deeper than [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn parse_call(name: &str,
                                                 position: usize,
                                                 tokens: &[(Token, usize)],
                                                 open: usize,
                                                 nesting: usize)
                                                 -> ParseResult<((Expr, usize), usize)> {
    let too_deep = || ParseError::TooDeep { limit:  MAX_DEPTH,
                                            column: position + 1, };
    if nesting + 1 >= MAX_DEPTH {
        return Err(too_deep());
    }

    let builtin = find_builtin(name).ok_or_else(|| ParseError::UnknownFunction { name:   name.to_string(),
                                                                                  column: position + 1, })?;

    let (raw_arguments, close) = split_arguments(tokens, open)?;

    let mut arguments = Vec::with_capacity(raw_arguments.len());
    let mut depth = 1;
    for argument in raw_arguments {
        if argument.is_empty() {
            return Err(ParseError::EmptyArgument { name:   name.to_string(),
                                                   column: position + 1, });
        }
        let (expr, argument_depth) = build_operand(argument, nesting + 1)?;
        depth = depth.max(argument_depth + 1);
        arguments.push(expr);
    }
    if depth > MAX_DEPTH {
        return Err(too_deep());
    }

    if !builtin.arity.check(arguments.len()) {
        return Err(ParseError::ArgumentCountMismatch { name:     name.to_string(),
                                                       expected: builtin.arity.to_string(),
                                                       found:    arguments.len(),
                                                       column:   position + 1, });
    }

    Ok(((Expr::FunctionCall { function: builtin.function,
                              arguments,
                              position },
         depth),
        close + 1))
}

/// Splits the parenthesised list starting at `open` on top-level commas.
///
/// Commas nested inside inner parentheses do not split. An immediately
/// closed list `()` produces no arguments, while `(1,)` produces an empty
/// trailing argument for the caller to reject.
///
/// # Returns
/// The argument slices and the index of the matching `)`.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the list is never closed.
fn split_arguments(tokens: &[(Token, usize)], open: usize) -> ParseResult<(Vec<Argument<'_>>, usize)> {
    let mut arguments = Vec::new();
    let mut depth = 0_usize;
    let mut start = open + 1;

    for (index, (token, _)) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    if index > open + 1 || !arguments.is_empty() {
                        arguments.push(&tokens[start..index]);
                    }
                    return Ok((arguments, index));
                }
            },
            Token::Comma if depth == 1 => {
                arguments.push(&tokens[start..index]);
                start = index + 1;
            },
            _ => {},
        }
    }

    let column = tokens.get(open).map_or(1, |(_, position)| position + 1);
    Err(ParseError::ExpectedClosingParen { column })
}
