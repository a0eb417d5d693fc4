use logos::Logos;

use crate::error::ParseError;

/// Represents the kind of a lexical token, including any literal payload.
///
/// This enum defines all recognized tokens in the language. Literal-carrying
/// kinds (`Number`, `Str`, `Bool`, `Identifier`) store their parsed payload
/// directly; everything else is identified by the variant alone.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// A trailing dot is not part of the number: `1.` lexes as the number
    /// `1` followed by a `Dot` token.
    #[regex(r"[0-9]+(\.[0-9]+)?", lex_number)]
    Number(f64),
    /// String literal tokens. The payload is the de-quoted content; strings
    /// may span multiple lines.
    #[regex(r#""[^"]*""#, lex_string)]
    Str(String),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", lex_bool)]
    #[token("false", lex_bool)]
    Bool(bool),
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,

    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// Line breaks; skipped while the line counters advance.
    #[token("\n", lex_newline)]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,

    /// End-of-input sentinel, appended once the source is exhausted.
    Eof,
    /// Produced for input that forms no valid token: an unterminated string
    /// or a character outside the language's alphabet. The corresponding
    /// diagnostic is recorded in [`LexerExtras::errors`].
    #[regex(r#""[^"]*"#, lex_unterminated_string)]
    Invalid,
}

impl TokenKind {
    /// Tests whether `self` and `other` are the same kind of token,
    /// disregarding any literal payload.
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::lexer::TokenKind;
    ///
    /// assert!(TokenKind::Number(1.0).same_kind(&TokenKind::Number(2.0)));
    /// assert!(!TokenKind::Number(1.0).same_kind(&TokenKind::Semicolon));
    /// ```
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of that line's first
/// character, so every token can be stamped with an exact line and column.
/// Lexical errors are collected here as well, because token callbacks have
/// no other channel to report through.
pub struct LexerExtras {
    /// The current 1-based line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
    /// Lexical diagnostics recorded so far.
    pub errors:     Vec<ParseError>,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0,
               errors:     Vec::new(), }
    }
}

/// A single lexical token: its kind, the exact source text it came from, and
/// its position. Tokens are immutable once emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any literal payload.
    pub kind:   TokenKind,
    /// The exact source substring that produced this token.
    pub lexeme: String,
    /// 1-based source line of the token's first character.
    pub line:   usize,
    /// 1-based column of the token's first character within its line.
    pub column: usize,
}

/// A pull-style tokenizer over a source string.
///
/// `Lexer` wraps the generated token machinery and exposes one token per
/// [`next_token`](Self::next_token) call, stamping each with its lexeme and
/// position. Lexing never aborts: malformed input produces
/// [`TokenKind::Invalid`] tokens and recorded diagnostics, and the stream
/// always ends with [`TokenKind::Eof`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer_with_extras(source, LexerExtras::default()) }
    }

    /// Scans, consumes, and returns the next token.
    ///
    /// Whitespace and comments are skipped. Once the source is exhausted,
    /// every further call returns an [`TokenKind::Eof`] token positioned one
    /// column past the last character.
    pub fn next_token(&mut self) -> Token {
        let Some(result) = self.inner.next() else {
            let offset = self.inner.source().len();
            return Token { kind:   TokenKind::Eof,
                           lexeme: String::new(),
                           line:   self.inner.extras.line,
                           column: offset - self.inner.extras.line_start + 1, };
        };

        let span = self.inner.span();
        let slice = self.inner.slice();
        let line = self.inner.extras.line;
        let column = span.start - self.inner.extras.line_start + 1;

        let kind = match result {
            Ok(kind) => kind,
            Err(()) => {
                let character = slice.chars().next().unwrap_or('\0');
                self.inner
                    .extras
                    .errors
                    .push(ParseError::UnexpectedCharacter { character,
                                                            line,
                                                            column });
                TokenKind::Invalid
            },
        };

        // Catch up the line counters after a multi-line string literal.
        if let Some(offset) = slice.rfind('\n') {
            self.inner.extras.line += slice.matches('\n').count();
            self.inner.extras.line_start = span.start + offset + 1;
        }

        Token { kind,
                lexeme: slice.to_string(),
                line,
                column }
    }

    /// Scans and consumes all remaining tokens, including the final
    /// [`TokenKind::Eof`].
    ///
    /// # Example
    /// ```
    /// use rill::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let kinds: Vec<TokenKind> = Lexer::new("var x = 1;").scan_all()
    ///                                                     .into_iter()
    ///                                                     .map(|token| token.kind)
    ///                                                     .collect();
    ///
    /// assert_eq!(kinds,
    ///            vec![TokenKind::Var,
    ///                 TokenKind::Identifier("x".to_string()),
    ///                 TokenKind::Equal,
    ///                 TokenKind::Number(1.0),
    ///                 TokenKind::Semicolon,
    ///                 TokenKind::Eof]);
    /// ```
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Takes the lexical diagnostics recorded so far, leaving the internal
    /// list empty.
    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.inner.extras.errors)
    }
}

/// Parses a numeric literal from the current token slice.
fn lex_number(lex: &mut logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes off a string literal.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Parses a boolean literal from the current token slice.
fn lex_bool(lex: &mut logos::Lexer<TokenKind>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Skips a line break while advancing the line counters.
fn lex_newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// Records the diagnostic for a string literal that is still open at the end
/// of the input. The matched text becomes a single `Invalid` token.
fn lex_unterminated_string(lex: &mut logos::Lexer<TokenKind>) {
    let line = lex.extras.line;
    let column = lex.span().start - lex.extras.line_start + 1;
    lex.extras
       .errors
       .push(ParseError::UnterminatedString { line, column });
}
