use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for the operator tokens `+ - * / ^` and
/// `None` for all other tokens.
///
/// # Example
/// ```
/// use mathparser::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator('+')),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Operator('%')), None);
/// assert_eq!(token_to_binary_operator(&Token::Delimiter), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Operator(symbol) => BinaryOperator::from_char(*symbol),
        _ => None,
    }
}

/// Returns the precedence of `token` as a binary operator.
///
/// `+ -` bind at 20, `* /` at 40 and `^` at 60. Every other token,
/// including end of input, `)` and `,`, has precedence `-1` and so ends an
/// operator chain.
///
/// # Example
/// ```
/// use mathparser::interpreter::{lexer::Token, parser::binary::precedence};
///
/// assert_eq!(precedence(&Token::Operator('*')), 40);
/// assert_eq!(precedence(&Token::CloseGroup), -1);
/// ```
#[must_use]
pub const fn precedence(token: &Token) -> i32 {
    match token_to_binary_operator(token) {
        Some(op) => op.precedence(),
        None => -1,
    }
}

impl Parser<'_, '_> {
    /// Folds the operator chain following `left` into a tree.
    ///
    /// Consumes operators whose precedence is at least `min_precedence`.
    /// After each right operand, any following operator that binds tighter
    /// (higher precedence, or equal precedence and right-associative) is
    /// absorbed into the right operand first. Equal-precedence `+ - * /`
    /// therefore group to the left and `^` groups to the right:
    ///
    /// ```text
    /// 8 - 3 - 2   =>  (8 - 3) - 2
    /// 2 ^ 3 ^ 2   =>  2 ^ (3 ^ 2)
    /// 2 + 3 * 4   =>  2 + (3 * 4)
    /// ```
    ///
    /// # Returns
    /// `None` if an operator is not followed by an operand, such as in
    /// `2 +`; the partial tree is discarded.
    ///
    /// # Errors
    /// `ParseError::TooDeep` once the chain is taller than the configured
    /// limit.
    pub(crate) fn parse_binary_right(&mut self,
                                     min_precedence: i32,
                                     left: Expr)
                                     -> ParseResult<Option<Expr>> {
        self.nested(|parser| parser.climb(min_precedence, left))
    }

    /// The height of `left` is tracked as the chain grows; a flat chain such
    /// as `1 + 1 + ... + 1` never recurses here, so the tree itself is checked
    /// against the nesting limit.
    fn climb(&mut self, min_precedence: i32, mut left: Expr) -> ParseResult<Option<Expr>> {
        let mut height = left.depth();

        while let Some(op) = token_to_binary_operator(self.lexer.current())
              && op.precedence() >= min_precedence
        {
            let position = self.lexer.span().start;
            self.lexer.advance();

            let Some(mut right) = self.parse_primary()? else {
                return Ok(None);
            };

            while let Some(next) = token_to_binary_operator(self.lexer.current())
                  && binds_tighter(next, op)
            {
                let Some(absorbed) = self.parse_binary_right(next.precedence(), right)? else {
                    return Ok(None);
                };
                right = absorbed;
            }

            height = 1 + height.max(right.depth());
            self.check_height(height, position)?;
            left = Expr::binary(op, left, right);
        }

        Ok(Some(left))
    }
}

/// Whether `next` must be applied before `current` when it follows
/// `current`'s right operand.
const fn binds_tighter(next: BinaryOperator, current: BinaryOperator) -> bool {
    next.precedence() > current.precedence()
    || (next.precedence() == current.precedence() && next.is_right_associative())
}
