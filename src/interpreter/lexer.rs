use logos::Logos;
use tracing::trace;

use crate::ast::BinaryOperator;

/// Represents a lexical token in an input line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace is skipped entirely.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`. A sign merged
    /// in by [`tokenize`] makes the value negative.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `+ - * / %`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("%", |_| BinaryOperator::Mod)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// A `-` in sign position that is not followed by a number, as in `-x`
    /// or `-(1 + 2)`.
    Negate,
    /// Text that forms no valid token, such as `@` or `1.2.3`.
    Unrecognized(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Negate => write!(f, "-"),
            Self::Unrecognized(text) => write!(f, "{text}"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the run of digits and points is a
///   valid number.
/// - `None`: For runs like `.` or `1.2.3`, which the lexer then reports as an
///   error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an input line.
///
/// Each token is paired with the character offset where it starts in
/// `input`. This never fails: text that forms no valid token becomes
/// [`Token::Unrecognized`] and is rejected later by the builder.
///
/// A `-` is a sign rather than a subtraction when it starts the input or
/// follows an operator, `(` or `,`. A sign directly followed by a number is
/// folded into that number; any other sign becomes [`Token::Negate`].
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens: Vec<Token> = tokenize("3*-2").into_iter().map(|(t, _)| t).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(BinaryOperator::Mul),
///                 Token::Number(-2.0)]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<(Token, usize)> {
    tokenize_at(input, 0)
}

/// Tokenizes `input` as if it started at character `offset` of a longer
/// line.
///
/// Used for the right-hand side of an assignment so that reported columns
/// refer to the whole line.
#[must_use]
pub fn tokenize_at(input: &str, offset: usize) -> Vec<(Token, usize)> {
    let mut columns = CharColumns::new(input, offset);
    let mut raw = Token::lexer(input).spanned()
                                     .map(|(token, span)| {
                                         let token = token.unwrap_or_else(|()| {
                                                              let text = String::from_utf8_lossy(&input.as_bytes()[span.clone()]);
                                                              Token::Unrecognized(text.into_owned())
                                                          });
                                         (token, columns.at(span.start))
                                     })
                                     .peekable();

    let mut tokens: Vec<(Token, usize)> = Vec::new();

    while let Some((token, position)) = raw.next() {
        if token == Token::Operator(BinaryOperator::Sub) && is_sign_position(tokens.last()) {
            if let Some((Token::Number(value), _)) = raw.peek() {
                let value = -*value;
                raw.next();
                tokens.push((Token::Number(value), position));
            } else {
                tokens.push((Token::Negate, position));
            }
            continue;
        }
        tokens.push((token, position));
    }

    trace!(count = tokens.len(), "tokenized input");
    tokens
}

/// Converts increasing byte offsets of one input into character offsets.
///
/// Counts the bytes that start a character, so offsets that fall inside a
/// multi-byte character still convert.
struct CharColumns<'a> {
    input: &'a str,
    byte:  usize,
    chars: usize,
}

impl<'a> CharColumns<'a> {
    const fn new(input: &'a str, offset: usize) -> Self {
        Self { input,
               byte: 0,
               chars: offset }
    }

    /// Character offset of byte `byte`; calls must not go backwards.
    fn at(&mut self, byte: usize) -> usize {
        if byte > self.byte {
            self.chars += self.input
                              .as_bytes()
                              .get(self.byte..byte)
                              .map_or(0, |skipped| skipped.iter().filter(|&&b| !is_continuation(b)).count());
            self.byte = byte;
        }
        self.chars
    }
}

/// Whether `byte` continues a multi-byte UTF-8 sequence rather than
/// starting a character.
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Whether a `-` following `previous` is a sign.
fn is_sign_position(previous: Option<&(Token, usize)>) -> bool {
    matches!(previous,
             None | Some((Token::Operator(_) | Token::LParen | Token::Comma | Token::Negate, _)))
}
