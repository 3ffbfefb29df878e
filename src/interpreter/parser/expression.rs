use crate::{
    ast::{Expression, Identifier},
    interpreter::{
        parser::core::{Parser, Precedence},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// `!EXPR` or `-EXPR`
    pub(crate) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { token,
                                  operator,
                                  right: Box::new(right) })
    }

    /// `(EXPR)` - grouping is transparent and leaves no node behind.
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }

    /// `NAME = EXPR`, entered with the `=` as the current token.
    ///
    /// The right side is parsed at assignment precedence, so a chained
    /// `a = b = c` does not associate; the grammar accepts a single
    /// assignment per expression.
    pub(crate) fn parse_assign_expression(&mut self, name: Identifier) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Assign)?;

        Some(Expression::Assign { token,
                                  name,
                                  value: Box::new(value) })
    }

    /// `CONTAINER[INDEX] = EXPR`, entered with the `=` as the current
    /// token after an index expression has been re-shaped into its parts.
    pub(crate) fn parse_index_assign_expression(&mut self,
                                                left: Box<Expression>,
                                                index: Box<Expression>)
                                                -> Option<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Assign)?;

        Some(Expression::IndexAssign { token,
                                       left,
                                       index,
                                       value: Box::new(value) })
    }

    /// `LEFT OP RIGHT` for the binary operators.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { token,
                                 left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// `CALLEE(ARGS...)`, entered with the `(` as the current token.
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call { token,
                                function: Box::new(function),
                                arguments })
    }

    /// `func [NAME](PARAMS) => BLOCK`
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        let mut name = None;
        if self.peek_token_is(TokenKind::Ident) {
            self.next_token();
            name = Some(Identifier::from_token(self.cur_token.clone()));
        }

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::Arrow) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function { token,
                                    name,
                                    parameters,
                                    body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(Identifier::from_token(self.cur_token.clone()));

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(Identifier::from_token(self.cur_token.clone()));
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(identifiers)
    }

    /// `[EXPR, ...]`
    pub(crate) fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expression::Array { token, elements })
    }

    /// Comma-separated expressions up to `end`, used for array elements and
    /// call arguments. Trailing commas are not supported.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    /// `CONTAINER[INDEX]`, entered with the `[` as the current token.
    pub(crate) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expression::Index { token,
                                 left: Box::new(left),
                                 index: Box::new(index) })
    }

    /// `{ EXPR: EXPR, ... }` - at expression position `{` always begins a
    /// map, never a block.
    pub(crate) fn parse_map_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let mut pairs = Vec::new();

        while !self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expression::MapLit { token, pairs })
    }
}
