use crate::{
    ast::{Block, CaseClause, Identifier, Statement},
    interpreter::{
        parser::core::{Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl Parser<'_> {
    /// Parses one statement, dispatching on the current token.
    ///
    /// Anything that does not start with a statement keyword is parsed as
    /// an expression statement. A trailing `;` is consumed when present but
    /// never required.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Mut | TokenKind::Const => self.parse_variable_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Switch => self.parse_switch_statement(),
            TokenKind::Break => self.parse_break_statement(),
            TokenKind::Continue => self.parse_continue_statement(),
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Throw => self.parse_throw_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `mut NAME = EXPR;` or `const NAME = EXPR;`
    fn parse_variable_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Variable { token, name, value })
    }

    /// `return;` or `return EXPR;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            return Some(Statement::Return { token, value: None });
        }
        if self.peek_token_is(TokenKind::RBrace) {
            return Some(Statement::Return { token, value: None });
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { token, value: Some(value) })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { token, expression })
    }

    /// Parses statements up to the closing `}` of the current block.
    pub(crate) fn parse_block_statement(&mut self) -> Block {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Block { token, statements }
    }

    /// `if (EXPR) BLOCK [else if ... | else BLOCK]`
    ///
    /// An `else if` is parsed recursively and wrapped in a single-statement
    /// block, so the evaluator only ever sees plain alternatives.
    fn parse_if_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let mut alternative = None;
        if self.peek_token_is(TokenKind::Else) {
            self.next_token();

            if self.peek_token_is(TokenKind::If) {
                self.next_token();
                let nested_token = self.cur_token.clone();
                let nested = self.parse_if_statement()?;
                alternative = Some(Block { token:      nested_token,
                                           statements: vec![nested], });
            } else {
                if !self.expect_peek(TokenKind::LBrace) {
                    return None;
                }
                alternative = Some(self.parse_block_statement());
            }
        }

        Some(Statement::If { token,
                             condition,
                             consequence,
                             alternative })
    }

    /// `while (EXPR) BLOCK`
    fn parse_while_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Statement::While { token, condition, body })
    }

    /// `for (INIT?; COND?; UPDATE?) BLOCK` and both for-in forms.
    ///
    /// `in` is not a keyword (it also names an intrinsic), so the for-in
    /// forms are recognized contextually: a loop variable followed by `in`,
    /// or a pair of loop variables followed by `in`.
    fn parse_for_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let mut init = None;
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        } else {
            self.next_token();
            if self.cur_token_is(TokenKind::Ident) && self.looks_like_for_in() {
                return self.parse_for_in_statement(token);
            }
            init = Some(Box::new(self.parse_statement()?));
        }

        let mut condition = None;
        if !self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
            condition = Some(self.parse_expression(Precedence::Lowest)?);
        }
        if !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }

        let mut update = None;
        if !self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            update = Some(self.parse_expression(Precedence::Lowest)?);
        }
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Statement::For { token,
                              init,
                              condition,
                              update,
                              body })
    }

    fn looks_like_for_in(&self) -> bool {
        self.peek_token_is(TokenKind::Comma)
        || (self.peek_token_is(TokenKind::Ident) && self.peek_token.literal == "in")
    }

    /// Continues a for-in header; the current token is the loop variable.
    fn parse_for_in_statement(&mut self, token: Token) -> Option<Statement> {
        let key = Identifier::from_token(self.cur_token.clone());

        let mut value = None;
        if self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            value = Some(Identifier::from_token(self.cur_token.clone()));
        }

        if !(self.peek_token_is(TokenKind::Ident) && self.peek_token.literal == "in") {
            self.peek_error(TokenKind::Ident);
            return None;
        }
        self.next_token();
        self.next_token();
        let iterable = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Statement::ForIn { token,
                                key,
                                value,
                                iterable,
                                body })
    }

    /// `switch (EXPR) { (case EXPR: BLOCK)* (default: BLOCK)? }`
    fn parse_switch_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        self.next_token();

        let mut cases = Vec::new();
        let mut default = None;

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            if self.cur_token_is(TokenKind::Case) {
                let case_token = self.cur_token.clone();

                self.next_token();
                let case_value = self.parse_expression(Precedence::Lowest)?;

                if !self.expect_peek(TokenKind::Colon) {
                    return None;
                }
                if !self.expect_peek(TokenKind::LBrace) {
                    return None;
                }
                let body = self.parse_block_statement();

                cases.push(CaseClause { token: case_token,
                                        value: case_value,
                                        body });
                self.next_token();
            } else if self.cur_token_is(TokenKind::Default) {
                if !self.expect_peek(TokenKind::Colon) {
                    return None;
                }
                if !self.expect_peek(TokenKind::LBrace) {
                    return None;
                }
                default = Some(self.parse_block_statement());
                self.next_token();
            } else {
                self.next_token();
            }
        }

        Some(Statement::Switch { token,
                                 value,
                                 cases,
                                 default })
    }

    fn parse_break_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Break { token })
    }

    fn parse_continue_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Continue { token })
    }

    /// `try BLOCK catch (NAME) BLOCK`
    fn parse_try_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let try_block = self.parse_block_statement();

        if !self.expect_peek(TokenKind::Catch) {
            return None;
        }
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let catch_param = Identifier::from_token(self.cur_token.clone());

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let catch_block = self.parse_block_statement();

        Some(Statement::Try { token,
                              try_block,
                              catch_param,
                              catch_block })
    }

    /// `throw EXPR;`
    fn parse_throw_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Throw { token, value })
    }
}
