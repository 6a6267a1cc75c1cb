use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::{Lexer, Token},
    },
};

/// Result type used by the parser.
///
/// All parsing functions return either a value of type `T` or a
/// `ParseError` describing the failure.
pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings that shape a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// How deeply primaries and operator chains may nest, and how tall the
    /// resulting tree may grow, before the parse fails with
    /// [`ParseError::TooDeep`].
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl ParseOptions {
    /// Returns a copy with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Recursive-descent parser for a single expression.
///
/// A `Parser` owns its [`Lexer`] exclusively and borrows the environment
/// only to resolve references. The only state carried between productions
/// is the lexer's current token; it moves strictly left to right.
///
/// Productions return `Ok(None)` for "no expression here", for instance an
/// empty argument list or a trailing delimiter. That is not an error;
/// callers decide what emptiness means in their position.
pub struct Parser<'src, 'env> {
    pub(in crate::interpreter::parser) lexer:       Lexer<'src>,
    pub(in crate::interpreter::parser) environment: &'env Environment,
    options:                                        ParseOptions,
    depth:                                          usize,
}

impl<'src, 'env> Parser<'src, 'env> {
    /// Creates a parser positioned at the first token of `source`.
    #[must_use]
    pub fn new(source: &'src str, environment: &'env Environment, options: ParseOptions) -> Self {
        Self { lexer: Lexer::start(source),
               environment,
               options,
               depth: 0 }
    }

    /// Parses the whole source as one expression.
    ///
    /// # Errors
    /// Any [`ParseError`]. In addition to the errors raised by the
    /// productions, the whole input is rejected when:
    /// - the lexer stopped at an unrecognized character,
    /// - no expression was found at all,
    /// - tokens remain after the expression.
    ///
    /// # Example
    /// ```
    /// use mathparser::{
    ///     Environment,
    ///     interpreter::parser::core::{ParseOptions, Parser},
    /// };
    ///
    /// let env = Environment::new();
    /// let tree = Parser::new("2 + 3 * 4", &env, ParseOptions::default()).parse().unwrap();
    ///
    /// assert_eq!(tree.evaluate().unwrap(), 14.0);
    /// ```
    pub fn parse(mut self) -> ParseResult<Expr> {
        let parsed = self.parse_expression();

        if let Some(unrecognized) = self.lexer.unrecognized() {
            return Err(ParseError::UnrecognizedCharacter { character: unrecognized.character,
                                                           position:  unrecognized.position, });
        }

        let tree = parsed?.ok_or(ParseError::EmptyExpression)?;

        match self.lexer.current() {
            Token::EndOfInput => Ok(tree),
            _ => Err(ParseError::UnexpectedTrailingTokens { token:    self.lexer
                                                                          .slice()
                                                                          .to_string(),
                                                            position: self.lexer.span().start, }),
        }
    }

    /// Parses a full expression: one primary followed by any chain of
    /// binary operators.
    ///
    /// Grammar: `expression := primary (operator primary)*`
    ///
    /// # Returns
    /// `None` when the leading primary is empty, or when an operator is not
    /// followed by an operand.
    pub fn parse_expression(&mut self) -> ParseResult<Option<Expr>> {
        let Some(left) = self.parse_primary()? else {
            return Ok(None);
        };

        self.parse_binary_right(0, left)
    }

    /// Runs `production` one nesting level deeper.
    ///
    /// # Errors
    /// [`ParseError::TooDeep`] when the configured limit is reached.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    production: impl FnOnce(&mut Self)
                                                                            -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::TooDeep { max_depth: self.options.max_depth,
                                             position:  self.lexer.span().start, });
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Rejects a tree of `height` nodes built at `position`.
    ///
    /// Evaluating, cloning and dropping a tree recurse once per level, so
    /// every accepted tree stays within the nesting limit.
    ///
    /// # Errors
    /// [`ParseError::TooDeep`] when `height` exceeds the limit.
    pub(in crate::interpreter::parser) const fn check_height(&self,
                                                             height: usize,
                                                             position: usize)
                                                             -> ParseResult<()> {
        if height > self.options.max_depth {
            return Err(ParseError::TooDeep { max_depth: self.options.max_depth,
                                             position });
        }

        Ok(())
    }
}
