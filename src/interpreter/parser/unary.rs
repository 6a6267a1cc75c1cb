use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        function::core::lookup,
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions form the base of the expression grammar. The
    /// current token selects the production:
    ///
    /// ```text
    ///     primary := number
    ///              | identifier                       reference
    ///              | identifier "(" arguments ")"     call
    ///              | "(" expression ")"
    ///              | operator primary                 prefix operator
    ///              | ")" | ","                        empty, consumed
    ///              | end of input                     empty
    /// ```
    ///
    /// # Returns
    /// The parsed node, or `None` when there is no expression at this
    /// position.
    pub fn parse_primary(&mut self) -> ParseResult<Option<Expr>> {
        self.nested(Self::parse_primary_token)
    }

    fn parse_primary_token(&mut self) -> ParseResult<Option<Expr>> {
        let position = self.lexer.span().start;

        match self.lexer.current() {
            Token::Number(value) => {
                let value = *value;
                self.lexer.advance();
                Ok(Some(Expr::literal(value)))
            },
            Token::Identifier(name) => {
                let name = name.clone();
                self.lexer.advance();
                self.parse_identifier_or_call(name, position).map(Some)
            },
            Token::OpenGroup => self.parse_grouping(position),
            Token::CloseGroup | Token::Delimiter => {
                self.lexer.advance();
                Ok(None)
            },
            Token::EndOfInput => Ok(None),
            Token::Operator(symbol) => {
                let op = UnaryOperator::from(*symbol);
                self.lexer.advance();
                self.parse_prefix(op, position)
            },
        }
    }

    /// Parses the operand of a prefix operator.
    ///
    /// The operator applies to a single primary, so `-2 ^ 2` is `(-2) ^ 2`
    /// and `-x + 1` is `(-x) + 1`. Prefix operators nest: `--x` is `-(-x)`.
    fn parse_prefix(&mut self, op: UnaryOperator, position: usize) -> ParseResult<Option<Expr>> {
        let Some(operand) = self.parse_primary()? else {
            return Ok(None);
        };

        self.check_height(1 + operand.depth(), position)?;
        Ok(Some(Expr::unary(op, operand)))
    }

    /// Parses a parenthesized expression.
    ///
    /// Expected form `( expression )`; the opening parenthesis is current.
    ///
    /// # Returns
    /// The inner expression as-is (no wrapper node), or `None` if the group
    /// is empty.
    ///
    /// # Errors
    /// `ParseError::ExpectedClosingParen` if the expression is not followed
    /// by `)`.
    fn parse_grouping(&mut self, position: usize) -> ParseResult<Option<Expr>> {
        self.lexer.advance();

        // An empty inner expression has already consumed the `)`.
        let Some(inner) = self.parse_expression()? else {
            return Ok(None);
        };

        match self.lexer.current() {
            Token::CloseGroup => {
                self.lexer.advance();
                Ok(Some(inner))
            },
            _ => Err(ParseError::ExpectedClosingParen { position }),
        }
    }

    /// Parses what follows an identifier.
    ///
    /// Without a following `(` the identifier is a variable and is resolved
    /// against the environment right away. With one it is a call: the name
    /// must be a builtin and the argument count must match one of its
    /// overloads.
    ///
    /// # Errors
    /// - `ParseError::UnboundReference` for an unbound variable.
    /// - `ParseError::UnknownFunction` for an unknown function name.
    /// - `ParseError::UnmatchedOverload` for a bad argument count.
    /// - `ParseError::ExpectedClosingParen` if the argument list is not
    ///   closed.
    fn parse_identifier_or_call(&mut self, name: String, position: usize) -> ParseResult<Expr> {
        if *self.lexer.current() != Token::OpenGroup {
            let binding = self.environment
                              .binding(&name)
                              .ok_or_else(|| ParseError::UnboundReference { name: name.clone(),
                                                                            position })?;
            return Ok(Expr::Reference { name, binding });
        }

        let open_position = self.lexer.span().start;
        self.lexer.advance();

        let definition =
            lookup(&name).ok_or_else(|| ParseError::UnknownFunction { name: name.clone(),
                                                                       position })?;

        let arguments = self.parse_arguments(open_position)?;

        if definition.overload(arguments.len()).is_none() {
            return Err(ParseError::UnmatchedOverload { name,
                                                       arity: arguments.len(),
                                                       position });
        }

        let height = 1 + arguments.iter().map(Expr::depth).max().unwrap_or(0);
        self.check_height(height, position)?;

        Ok(Expr::Call { name, arguments })
    }

    /// Parses call arguments up to and including the closing `)`.
    ///
    /// Each argument is a full expression. A `,` is not a valid
    /// continuation of an expression, so each argument stops in front of it
    /// and the next round consumes it as an empty primary. Empty results are
    /// skipped, which makes `f()` a zero-argument call.
    fn parse_arguments(&mut self, open_position: usize) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        loop {
            match self.lexer.current() {
                Token::CloseGroup => {
                    self.lexer.advance();
                    return Ok(arguments);
                },
                Token::EndOfInput => {
                    return Err(ParseError::ExpectedClosingParen { position: open_position });
                },
                _ => {
                    if let Some(argument) = self.parse_expression()? {
                        arguments.push(argument);
                    }
                },
            }
        }
    }
}
