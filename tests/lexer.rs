use rill::{
    error::ParseError,
    interpreter::lexer::{Lexer, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).scan_all()
                      .into_iter()
                      .map(|token| token.kind)
                      .collect()
}

#[test]
fn single_character_tokens() {
    assert_eq!(kinds("( ) { } , . - + ; / *"),
               vec![TokenKind::LParen,
                    TokenKind::RParen,
                    TokenKind::LBrace,
                    TokenKind::RBrace,
                    TokenKind::Comma,
                    TokenKind::Dot,
                    TokenKind::Minus,
                    TokenKind::Plus,
                    TokenKind::Semicolon,
                    TokenKind::Slash,
                    TokenKind::Star,
                    TokenKind::Eof]);
}

#[test]
fn one_or_two_character_operators() {
    assert_eq!(kinds("! != = == < <= > >="),
               vec![TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Equal,
                    TokenKind::EqualEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Eof]);
}

#[test]
fn two_character_operators_lex_greedily() {
    // '==' must not lex as two '=' tokens.
    assert_eq!(kinds("==="),
               vec![TokenKind::EqualEqual, TokenKind::Equal, TokenKind::Eof]);
    assert_eq!(kinds("!=="),
               vec![TokenKind::BangEqual, TokenKind::Equal, TokenKind::Eof]);
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(kinds("and class else fun for if nil or print return super this var while"),
               vec![TokenKind::And,
                    TokenKind::Class,
                    TokenKind::Else,
                    TokenKind::Fun,
                    TokenKind::For,
                    TokenKind::If,
                    TokenKind::Nil,
                    TokenKind::Or,
                    TokenKind::Print,
                    TokenKind::Return,
                    TokenKind::Super,
                    TokenKind::This,
                    TokenKind::Var,
                    TokenKind::While,
                    TokenKind::Eof]);
}

#[test]
fn identifiers_may_contain_keywords() {
    assert_eq!(kinds("iffy variable _x x1"),
               vec![TokenKind::Identifier("iffy".to_string()),
                    TokenKind::Identifier("variable".to_string()),
                    TokenKind::Identifier("_x".to_string()),
                    TokenKind::Identifier("x1".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn boolean_literals_carry_their_value() {
    assert_eq!(kinds("true false"),
               vec![TokenKind::Bool(true), TokenKind::Bool(false), TokenKind::Eof]);
}

#[test]
fn number_literals() {
    assert_eq!(kinds("42 3.14 0.5 0"),
               vec![TokenKind::Number(42.0),
                    TokenKind::Number(3.14),
                    TokenKind::Number(0.5),
                    TokenKind::Number(0.0),
                    TokenKind::Eof]);
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    assert_eq!(kinds("1."),
               vec![TokenKind::Number(1.0), TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn string_literals_are_dequoted() {
    let tokens = Lexer::new("\"hello\"").scan_all();
    assert_eq!(tokens[0].kind, TokenKind::Str("hello".to_string()));
    // The lexeme keeps the quotes even though the literal drops them.
    assert_eq!(tokens[0].lexeme, "\"hello\"");
}

#[test]
fn strings_may_contain_non_ascii_bytes() {
    assert_eq!(kinds("\"héllo → wörld\""),
               vec![TokenKind::Str("héllo → wörld".to_string()), TokenKind::Eof]);
}

#[test]
fn multi_line_strings_advance_the_line_counter() {
    let tokens = Lexer::new("\"a\nb\" x").scan_all();
    assert_eq!(tokens[0].kind, TokenKind::Str("a\nb".to_string()));
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    // 'x' sits on line 2; its column counts from the start of that line.
    assert_eq!(tokens[1].kind, TokenKind::Identifier("x".to_string()));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

#[test]
fn unterminated_string_is_one_invalid_token() {
    let mut lexer = Lexer::new("\"abc");
    let tokens = lexer.scan_all();
    assert_eq!(tokens.iter().map(|t| &t.kind).collect::<Vec<_>>(),
               vec![&TokenKind::Invalid, &TokenKind::Eof]);
    assert_eq!(lexer.take_errors(),
               vec![ParseError::UnterminatedString { line: 1, column: 1 }]);
}

#[test]
fn unexpected_character_is_reported_and_skipped() {
    let mut lexer = Lexer::new("@ 1");
    let tokens = lexer.scan_all();
    assert_eq!(tokens.iter().map(|t| &t.kind).collect::<Vec<_>>(),
               vec![&TokenKind::Invalid, &TokenKind::Number(1.0), &TokenKind::Eof]);
    assert_eq!(lexer.take_errors(),
               vec![ParseError::UnexpectedCharacter { character: '@',
                                                      line:      1,
                                                      column:    1, }]);
}

#[test]
fn non_ascii_outside_strings_is_an_error() {
    let mut lexer = Lexer::new("ä");
    lexer.scan_all();
    assert!(matches!(lexer.take_errors().as_slice(),
                     [ParseError::UnexpectedCharacter { character: 'ä', .. }]));
}

#[test]
fn comments_are_skipped_to_end_of_line() {
    let tokens = Lexer::new("1 // one\n2 // two").scan_all();
    assert_eq!(tokens.iter().map(|t| &t.kind).collect::<Vec<_>>(),
               vec![&TokenKind::Number(1.0), &TokenKind::Number(2.0), &TokenKind::Eof]);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn tokens_carry_exact_positions() {
    let tokens = Lexer::new("var x =\n  x + 1;").scan_all();
    let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(positions,
               vec![(1, 1), // var
                    (1, 5), // x
                    (1, 7), // =
                    (2, 3), // x
                    (2, 5), // +
                    (2, 7), // 1
                    (2, 8), // ;
                    (2, 9)  /* end of input */]);
}

#[test]
fn eof_column_is_one_past_the_last_character() {
    let tokens = Lexer::new("ab").scan_all();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!((eof.line, eof.column), (1, 3));
}

#[test]
fn lexeme_round_trip_preserves_the_token_stream() {
    let source = "fun add(a, b) { return a + b; } // helper\n\
                  var one = 1.5;\n\
                  print add(one, 2) * 3 >= 4 != true and \"str\" or nil;";
    let tokens = Lexer::new(source).scan_all();

    let joined = tokens.iter()
                       .map(|token| token.lexeme.as_str())
                       .collect::<Vec<_>>()
                       .join(" ");
    let relexed = Lexer::new(&joined).scan_all();

    assert_eq!(tokens.iter().map(|t| &t.kind).collect::<Vec<_>>(),
               relexed.iter().map(|t| &t.kind).collect::<Vec<_>>());
}

#[test]
fn pull_interface_keeps_yielding_eof() {
    let mut lexer = Lexer::new(";");
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}
