use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Program, UnaryOperator},
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Binding strength of expression operators, weakest to strongest.
///
/// `Lowest` is the floor handed to `parse_expression` when no operator is
/// pending; every real operator binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    /// No binding at all.
    Lowest,
    /// `and`, `or`
    Logic,
    /// `==`, `!=`
    Equals,
    /// `<`, `<=`, `>`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `-` and `!`
    Prefix,
    /// `(` after an identifier
    Call,
}

/// Maps a token kind to the precedence it has in infix position.
///
/// Total over all kinds; anything that is not an infix operator maps to
/// [`Precedence::Lowest`], which makes the expression loop stop in front of
/// it.
const fn precedence_of(kind: &TokenKind) -> Precedence {
    match kind {
        TokenKind::And | TokenKind::Or => Precedence::Logic,
        TokenKind::EqualEqual | TokenKind::BangEqual => Precedence::Equals,
        TokenKind::Less
        | TokenKind::LessEqual
        | TokenKind::Greater
        | TokenKind::GreaterEqual => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Star | TokenKind::Slash => Precedence::Product,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// Renders a token for use inside diagnostic messages.
pub(crate) fn describe(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "end of input".to_string()
    } else {
        format!("'{}'", token.lexeme)
    }
}

/// A recursive-descent parser with Pratt expression parsing.
///
/// The parser pulls tokens from the lexer one at a time, keeping the current
/// token and a single lookahead token. Errors do not abort parsing: each is
/// recorded, the stream is resynchronized at the next statement boundary,
/// and [`parse_program`](Self::parse_program) always returns a (possibly
/// partial) [`Program`]. The caller inspects
/// [`into_errors`](Self::into_errors) to decide whether the program may be
/// evaluated.
pub struct Parser<'src> {
    lexer:                 Lexer<'src>,
    pub(crate) cur_token:  Token,
    pub(crate) peek_token: Token,
    pub(crate) errors:     Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `lexer`, priming the two-token lookahead
    /// window.
    #[must_use]
    pub fn new(mut lexer: Lexer<'src>) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self { lexer,
               cur_token,
               peek_token,
               errors: Vec::new() }
    }

    /// Parses the whole token stream into a program.
    ///
    /// Statements that fail to parse are dropped after recovery; everything
    /// that parsed is kept, so a partial program comes back even when errors
    /// were recorded.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while self.cur_token.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }
        Program { statements }
    }

    /// Consumes the parser and returns every diagnostic recorded during the
    /// run, lexical ones included.
    #[must_use]
    pub fn into_errors(mut self) -> Vec<ParseError> {
        let mut errors = self.lexer.take_errors();
        errors.append(&mut self.errors);
        errors
    }

    /// Advances the lookahead window by one token.
    pub(crate) fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances if the lookahead token has the expected kind; otherwise
    /// records an error and stays put.
    ///
    /// `description` is the human-readable spelling used in the diagnostic.
    pub(crate) fn expect_peek(&mut self, expected: &TokenKind, description: &str) -> bool {
        if self.peek_token.kind.same_kind(expected) {
            self.next_token();
            true
        } else {
            self.errors
                .push(ParseError::ExpectedToken { expected: description.to_string(),
                                                  found:    describe(&self.peek_token),
                                                  line:     self.peek_token.line,
                                                  column:   self.peek_token.column, });
            false
        }
    }

    /// Advances past an expected identifier and returns its name, or records
    /// an error and stays put.
    pub(crate) fn expect_peek_identifier(&mut self) -> Option<String> {
        if let TokenKind::Identifier(name) = &self.peek_token.kind {
            let name = name.clone();
            self.next_token();
            Some(name)
        } else {
            self.errors
                .push(ParseError::ExpectedToken { expected: "an identifier".to_string(),
                                                  found:    describe(&self.peek_token),
                                                  line:     self.peek_token.line,
                                                  column:   self.peek_token.column, });
            None
        }
    }

    /// Parses one full expression starting at the current token.
    ///
    /// Classic Pratt loop: parse a prefix expression, then keep folding in
    /// infix operators for as long as the lookahead token binds tighter than
    /// `precedence`. On return the current token is the last token of the
    /// expression.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;
        while precedence < precedence_of(&self.peek_token.kind) {
            self.next_token();
            left = self.parse_infix(left)?;
        }
        Some(left)
    }

    /// Dispatches on the current token as the start of an expression.
    fn parse_prefix(&mut self) -> Option<Expr> {
        let line = self.cur_token.line;
        match &self.cur_token.kind {
            TokenKind::Identifier(name) => Some(Expr::Variable { name: name.clone(),
                                                                 line }),
            TokenKind::Number(value) => Some(Expr::Literal { value: LiteralValue::Number(*value),
                                                             line }),
            TokenKind::Str(value) => Some(Expr::Literal { value: LiteralValue::Str(value.clone()),
                                                          line }),
            TokenKind::Bool(value) => Some(Expr::Literal { value: LiteralValue::Bool(*value),
                                                           line }),
            TokenKind::Nil => Some(Expr::Literal { value: LiteralValue::Nil,
                                                   line }),
            TokenKind::Bang => self.parse_unary(UnaryOperator::Not),
            TokenKind::Minus => self.parse_unary(UnaryOperator::Negate),
            TokenKind::LParen => self.parse_grouped(),
            // Already reported by the lexer.
            TokenKind::Invalid => None,
            _ => {
                self.errors
                    .push(ParseError::NoPrefixParse { token:  describe(&self.cur_token),
                                                      line,
                                                      column: self.cur_token.column, });
                None
            },
        }
    }

    /// Parses a unary operation; the current token is the operator.
    fn parse_unary(&mut self, op: UnaryOperator) -> Option<Expr> {
        let line = self.cur_token.line;
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::UnaryOp { op,
                             right: Box::new(right),
                             line })
    }

    /// Parses a parenthesized expression; the current token is `(`.
    ///
    /// Grouping exists only in the source text. The inner expression is
    /// returned directly, so no AST node marks the parentheses.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(&TokenKind::RParen, "')'") {
            return None;
        }
        Some(expr)
    }

    /// Dispatches on the current token as an infix operator, with `left`
    /// already parsed.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.cur_token.kind {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Sub,
            TokenKind::Star => BinaryOperator::Mul,
            TokenKind::Slash => BinaryOperator::Div,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::LessEqual => BinaryOperator::LessEqual,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
            TokenKind::EqualEqual => BinaryOperator::Equal,
            TokenKind::BangEqual => BinaryOperator::NotEqual,
            TokenKind::And => BinaryOperator::And,
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::LParen => return self.parse_call(left),
            // Only tokens with an infix precedence reach this point.
            _ => unreachable!(),
        };

        let line = self.cur_token.line;
        let precedence = precedence_of(&self.cur_token.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::BinaryOp { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line })
    }

    /// Parses a call expression; the current token is the `(` following the
    /// callee.
    ///
    /// The language has no function-valued expressions, so anything other
    /// than a plain identifier in callee position is an error.
    fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let Expr::Variable { name, line } = callee else {
            self.errors
                .push(ParseError::CalleeNotIdentifier { line:   self.cur_token.line,
                                                        column: self.cur_token.column, });
            self.advance_past_semicolon();
            return None;
        };

        let arguments = self.parse_call_arguments()?;
        Some(Expr::FunctionCall { callee: name,
                                  arguments,
                                  line })
    }

    /// Parses a comma-separated argument list up to the closing `)`.
    ///
    /// Grammar: `arguments := "(" (expression ("," expression)* ","?)? ")"`
    ///
    /// A trailing comma is allowed. On an unexpected token the parser
    /// records an error and resynchronizes at the statement boundary.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut arguments = Vec::new();
        if self.peek_token.kind == TokenKind::RParen {
            self.next_token();
            return Some(arguments);
        }

        loop {
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);

            match self.peek_token.kind {
                TokenKind::Comma => {
                    self.next_token();
                    if self.peek_token.kind == TokenKind::RParen {
                        self.next_token();
                        return Some(arguments);
                    }
                },
                TokenKind::RParen => {
                    self.next_token();
                    return Some(arguments);
                },
                TokenKind::Eof => {
                    self.errors
                        .push(ParseError::UnexpectedEndOfInput { line:   self.peek_token.line,
                                                                 column: self.peek_token.column, });
                    return None;
                },
                _ => {
                    self.errors
                        .push(ParseError::ExpectedToken { expected: "',' or ')'".to_string(),
                                                          found:    describe(&self.peek_token),
                                                          line:     self.peek_token.line,
                                                          column:   self.peek_token.column, });
                    self.advance_past_semicolon();
                    return None;
                },
            }
        }
    }
}
