use crate::{
    ast::{Block, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence, describe},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// A statement may be one of:
    /// - a variable declaration (`var`),
    /// - a function declaration (`fun`),
    /// - a free-standing block (`{`),
    /// - `if`, `while`, `return`, or `print`,
    /// - an assignment (identifier followed by `=`),
    /// - an expression used as a statement.
    ///
    /// On success the current token is the statement's last token (`;` or
    /// `}`). On failure the error has been recorded, the stream has been
    /// resynchronized, and `None` is returned.
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match &self.cur_token.kind {
            TokenKind::Var => self.parse_variable_declaration(),
            TokenKind::Fun => self.parse_function_declaration(),
            TokenKind::LBrace => self.parse_block().map(Statement::Block),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Identifier(_) if self.peek_token.kind == TokenKind::Equal => {
                self.parse_assignment()
            },
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a declaration of the form `var NAME = EXPR ;`.
    ///
    /// Every declaration carries an initializer; the language has no
    /// uninitialized variables.
    fn parse_variable_declaration(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;

        let Some(name) = self.expect_peek_identifier() else {
            self.advance_past_semicolon();
            return None;
        };
        if !self.expect_peek(&TokenKind::Equal, "'='") {
            self.advance_past_semicolon();
            return None;
        }

        self.next_token();
        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };

        self.finish_statement();
        Some(Statement::VariableDeclaration { name, value, line })
    }

    /// Parses an assignment of the form `NAME = EXPR ;`.
    ///
    /// Only reached when the lookahead already confirmed `NAME =`, which is
    /// what distinguishes an assignment from an expression statement.
    fn parse_assignment(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;
        let TokenKind::Identifier(name) = &self.cur_token.kind else {
            unreachable!()
        };
        let name = name.clone();

        self.next_token(); // onto '='
        self.next_token(); // onto the value expression

        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };

        self.finish_statement();
        Some(Statement::Assignment { name, value, line })
    }

    /// Parses a declaration of the form `fun NAME ( PARAMS ) BLOCK`.
    ///
    /// Parameters are comma-separated identifiers with an optional trailing
    /// comma. A repeated parameter name is recorded as an error, but parsing
    /// carries on so later mistakes are still reported.
    fn parse_function_declaration(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;

        let Some(name) = self.expect_peek_identifier() else {
            self.advance_past_semicolon();
            return None;
        };
        if !self.expect_peek(&TokenKind::LParen, "'('") {
            self.advance_past_semicolon();
            return None;
        }

        let params = self.parse_parameter_list(&name)?;

        if !self.expect_peek(&TokenKind::LBrace, "'{'") {
            self.advance_past_semicolon();
            return None;
        }
        let body = self.parse_block()?;

        Some(Statement::Function(FunctionDef { name,
                                               params,
                                               body,
                                               line }))
    }

    /// Parses the parameter list of a function declaration; the current
    /// token is `(`.
    fn parse_parameter_list(&mut self, function: &str) -> Option<Vec<String>> {
        let mut params = Vec::new();
        if self.peek_token.kind == TokenKind::RParen {
            self.next_token();
            return Some(params);
        }

        loop {
            let Some(param) = self.expect_peek_identifier() else {
                self.advance_past_semicolon();
                return None;
            };
            if params.contains(&param) {
                self.errors
                    .push(ParseError::DuplicateParameter { name:     param.clone(),
                                                           function: function.to_string(),
                                                           line:     self.cur_token.line,
                                                           column:   self.cur_token.column, });
            }
            params.push(param);

            match self.peek_token.kind {
                TokenKind::Comma => {
                    self.next_token();
                    if self.peek_token.kind == TokenKind::RParen {
                        self.next_token();
                        return Some(params);
                    }
                },
                TokenKind::RParen => {
                    self.next_token();
                    return Some(params);
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

    /// Parses a brace-delimited block; the current token is `{`.
    ///
    /// On success the current token is the closing `}`.
    pub(crate) fn parse_block(&mut self) -> Option<Block> {
        let line = self.cur_token.line;
        let mut statements = Vec::new();

        loop {
            match self.peek_token.kind {
                TokenKind::RBrace => {
                    self.next_token();
                    return Some(Block { statements, line });
                },
                TokenKind::Eof => {
                    self.errors
                        .push(ParseError::ExpectedToken { expected: "'}'".to_string(),
                                                          found:    describe(&self.peek_token),
                                                          line:     self.peek_token.line,
                                                          column:   self.peek_token.column, });
                    return None;
                },
                _ => {
                    self.next_token();
                    if let Some(statement) = self.parse_statement() {
                        statements.push(statement);
                    }
                },
            }
        }
    }

    /// Parses `if EXPR BLOCK (else BLOCK)?`.
    ///
    /// The condition needs no parentheses, though a parenthesized condition
    /// parses fine through the grouping rule.
    fn parse_if(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;
        self.next_token();

        let Some(condition) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };
        if !self.expect_peek(&TokenKind::LBrace, "'{'") {
            self.advance_past_semicolon();
            return None;
        }
        let on_true = self.parse_block()?;

        let mut on_false = None;
        if self.peek_token.kind == TokenKind::Else {
            self.next_token();
            if !self.expect_peek(&TokenKind::LBrace, "'{'") {
                self.advance_past_semicolon();
                return None;
            }
            on_false = Some(self.parse_block()?);
        }

        Some(Statement::If { condition,
                             on_true,
                             on_false,
                             line })
    }

    /// Parses `while EXPR BLOCK`.
    fn parse_while(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;
        self.next_token();

        let Some(condition) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };
        if !self.expect_peek(&TokenKind::LBrace, "'{'") {
            self.advance_past_semicolon();
            return None;
        }
        let body = self.parse_block()?;

        Some(Statement::While { condition, body, line })
    }

    /// Parses `return EXPR? ;`.
    fn parse_return(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;

        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token();
            return Some(Statement::Return { value: None, line });
        }

        self.next_token();
        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };

        self.finish_statement();
        Some(Statement::Return { value: Some(value),
                                 line })
    }

    /// Parses `print EXPR ;`.
    fn parse_print(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;
        self.next_token();

        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };

        self.finish_statement();
        Some(Statement::Print { value, line })
    }

    /// Parses a bare expression used as a statement.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let line = self.cur_token.line;

        let Some(expr) = self.parse_expression(Precedence::Lowest) else {
            self.advance_past_semicolon();
            return None;
        };

        self.finish_statement();
        Some(Statement::Expression { expr, line })
    }

    /// Consumes the terminating `;` of a simple statement.
    ///
    /// A missing semicolon is a recoverable error: it is recorded, the
    /// stream resynchronizes, and the statement itself is still kept.
    fn finish_statement(&mut self) {
        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token();
        } else {
            self.errors
                .push(ParseError::ExpectedToken { expected: "';'".to_string(),
                                                  found:    describe(&self.peek_token),
                                                  line:     self.peek_token.line,
                                                  column:   self.peek_token.column, });
            self.advance_past_semicolon();
        }
    }

    /// Consumes tokens up to and including the next `;`.
    ///
    /// Stops early in front of a `}` (so an enclosing block still sees its
    /// closing brace) and at the end of input.
    pub(crate) fn advance_past_semicolon(&mut self) {
        while !matches!(self.cur_token.kind, TokenKind::Semicolon | TokenKind::Eof) {
            if self.peek_token.kind == TokenKind::RBrace {
                break;
            }
            self.next_token();
        }
    }
}
