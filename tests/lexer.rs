use anscalc::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn kinds(src: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(src);
    let mut kinds = Vec::new();
    while let Some(token) = lexer.next().unwrap() {
        kinds.push(token.kind);
    }
    kinds
}

fn single(src: &str) -> Token<'_> {
    let mut lexer = Lexer::new(src);
    let token = lexer.next().unwrap().expect("expected a token");
    assert!(lexer.next().unwrap().is_none(), "{src:?} produced more than one token");
    token
}

#[test]
fn operators_and_parentheses() {
    use TokenKind::*;
    assert_eq!(kinds("+-*/()"), vec![Plus, Minus, Star, Slash, LParen, RParen]);
    assert_eq!(kinds("2(ans)"), vec![Number, LParen, Ans, RParen]);
}

#[test]
fn whitespace_is_skipped() {
    use TokenKind::*;
    assert_eq!(kinds(" \t1 \n+\r\n 2 "), vec![Number, Plus, Number]);
    assert!(kinds("   ").is_empty());
    assert!(kinds("").is_empty());
}

#[test]
fn number_forms() {
    for src in ["123", "123.", ".123", "123.456", "1e10", "1E-3", "2.5e+2", "1.e5", "0"] {
        let token = single(src);
        assert_eq!(token.kind, TokenKind::Number, "{src:?}");
        assert_eq!(token.text, src);
    }
}

#[test]
fn tokens_keep_their_text_and_offset() {
    let mut lexer = Lexer::new("12.5 * ans");

    let number = lexer.next().unwrap().unwrap();
    assert_eq!((number.kind, number.text, number.position), (TokenKind::Number, "12.5", 0));

    let star = lexer.next().unwrap().unwrap();
    assert_eq!((star.kind, star.text, star.position), (TokenKind::Star, "*", 5));

    let ans = lexer.next().unwrap().unwrap();
    assert_eq!((ans.kind, ans.text, ans.position), (TokenKind::Ans, "ans", 7));
}

#[test]
fn sign_is_a_separate_token() {
    use TokenKind::*;
    assert_eq!(kinds("-1e-3"), vec![Minus, Number]);
    assert_eq!(kinds("1-2"), vec![Number, Minus, Number]);
}

#[test]
fn putback_is_last_in_first_out() {
    let mut lexer = Lexer::new("1 + 2");
    let one = lexer.next().unwrap().unwrap();
    let plus = lexer.next().unwrap().unwrap();

    lexer.putback(one);
    lexer.putback(plus);

    assert_eq!(lexer.next().unwrap().unwrap(), plus);
    assert_eq!(lexer.next().unwrap().unwrap(), one);
    assert_eq!(lexer.next().unwrap().unwrap().text, "2");
    assert!(lexer.next().unwrap().is_none());
}

#[test]
fn putback_after_end_of_input() {
    let mut lexer = Lexer::new("ans");
    let ans = lexer.next().unwrap().unwrap();
    assert!(lexer.next().unwrap().is_none());

    lexer.putback(ans);
    assert_eq!(lexer.next().unwrap().unwrap(), ans);
    assert!(lexer.next().unwrap().is_none());
}

#[test]
fn unrecognized_characters() {
    let mut lexer = Lexer::new("1 + @2");
    lexer.next().unwrap();
    lexer.next().unwrap();
    assert_eq!(lexer.next(),
               Err(LexError::UnrecognizedToken { token:    "@".to_string(),
                                                 position: 4, }));

    for src in ["x", "an", "#", "^", "."] {
        assert!(Lexer::new(src).next().is_err(), "{src:?} should not lex");
    }
}

#[test]
fn numbers_must_end_at_a_boundary() {
    for src in ["1.2.3", "4e", "1.5e", "7e+", "1..2"] {
        let mut lexer = Lexer::new(src);
        assert!(matches!(lexer.next(), Err(LexError::UnrecognizedToken { position: 0, .. })),
                "{src:?} should be rejected at its start");
    }
}

#[test]
fn token_display() {
    assert_eq!(single("ans").to_string(), r#"{ "type": "_", "value": "ans" }"#);
    assert_eq!(single("2.5").to_string(), r#"{ "type": "N", "value": "2.5" }"#);
    assert_eq!(single("(").to_string(), r#"{ "type": "(", "value": "(" }"#);
}

#[test]
fn every_kind_has_a_distinct_tag() {
    use TokenKind::*;
    let kinds = [Ignore, Plus, Minus, Star, Slash, LParen, RParen, Ans, Number];
    let tags: Vec<char> = kinds.iter().map(|k| k.tag()).collect();
    assert_eq!(tags, vec!['\0', '+', '-', '*', '/', '(', ')', '_', 'N']);
}
