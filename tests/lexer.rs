use reckon::{
    ast::BinaryOperator,
    interpreter::lexer::{Token, tokenize, tokenize_at},
};

fn kinds(src: &str) -> Vec<Token> {
    tokenize(src).into_iter().map(|(token, _)| token).collect()
}

#[test]
fn numbers_identifiers_and_punctuation() {
    assert_eq!(kinds("add(x1, 2.5)"),
               vec![Token::Identifier("add".to_string()),
                    Token::LParen,
                    Token::Identifier("x1".to_string()),
                    Token::Comma,
                    Token::Number(2.5),
                    Token::RParen]);
    assert_eq!(kinds("7 % .5"),
               vec![Token::Number(7.0), Token::Operator(BinaryOperator::Mod), Token::Number(0.5)]);
}

#[test]
fn leading_minus_is_a_sign() {
    assert_eq!(kinds("-5+3"),
               vec![Token::Number(-5.0), Token::Operator(BinaryOperator::Add), Token::Number(3.0)]);
}

#[test]
fn minus_after_operand_is_subtraction() {
    assert_eq!(kinds("x-1"),
               vec![Token::Identifier("x".to_string()),
                    Token::Operator(BinaryOperator::Sub),
                    Token::Number(1.0)]);
    assert_eq!(kinds("(2)-1"),
               vec![Token::LParen,
                    Token::Number(2.0),
                    Token::RParen,
                    Token::Operator(BinaryOperator::Sub),
                    Token::Number(1.0)]);
}

#[test]
fn minus_after_operator_paren_or_comma_is_a_sign() {
    assert_eq!(kinds("5 - -3"),
               vec![Token::Number(5.0), Token::Operator(BinaryOperator::Sub), Token::Number(-3.0)]);
    assert_eq!(kinds("(-3)"), vec![Token::LParen, Token::Number(-3.0), Token::RParen]);
    assert_eq!(kinds("sub(1,-2)"),
               vec![Token::Identifier("sub".to_string()),
                    Token::LParen,
                    Token::Number(1.0),
                    Token::Comma,
                    Token::Number(-2.0),
                    Token::RParen]);
}

#[test]
fn sign_before_non_number_is_negation() {
    assert_eq!(kinds("-x"), vec![Token::Negate, Token::Identifier("x".to_string())]);
    assert_eq!(kinds("2*-(1)"),
               vec![Token::Number(2.0),
                    Token::Operator(BinaryOperator::Mul),
                    Token::Negate,
                    Token::LParen,
                    Token::Number(1.0),
                    Token::RParen]);
    assert_eq!(kinds("--5"), vec![Token::Negate, Token::Number(-5.0)]);
}

#[test]
fn unknown_text_never_fails() {
    assert_eq!(kinds("2 @ 3"),
               vec![Token::Number(2.0), Token::Unrecognized("@".to_string()), Token::Number(3.0)]);
    assert_eq!(kinds("1.2.3"), vec![Token::Unrecognized("1.2.3".to_string())]);
    assert_eq!(kinds("x = 1"),
               vec![Token::Identifier("x".to_string()),
                    Token::Unrecognized("=".to_string()),
                    Token::Number(1.0)]);
    assert!(kinds("").is_empty());
    assert!(kinds("   ").is_empty());
}

#[test]
fn tokens_carry_character_offsets() {
    let positions: Vec<usize> = tokenize(" 12 + x").into_iter().map(|(_, p)| p).collect();
    assert_eq!(positions, vec![1, 4, 6]);

    let shifted: Vec<usize> = tokenize_at("1+2", 4).into_iter().map(|(_, p)| p).collect();
    assert_eq!(shifted, vec![4, 5, 6]);
}

#[test]
fn offsets_count_characters_not_bytes() {
    let positions: Vec<usize> = tokenize("é+1").into_iter().map(|(_, p)| p).collect();
    assert_eq!(positions.last(), Some(&2));
    assert_eq!(positions[positions.len() - 2], 1);

    let shifted: Vec<usize> = tokenize_at("ü * 2", 3).into_iter().map(|(_, p)| p).collect();
    assert_eq!(shifted.last(), Some(&7));
}
