use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are byte offsets into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An identifier was used as a value but nothing is bound to it.
    #[error("Error at offset {position}: no binding with name '{name}'.")]
    UnboundReference {
        /// The unbound name.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// An identifier was called but is not a built-in function.
    #[error("Error at offset {position}: no definition found with the name '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// The function exists but takes a different number of arguments.
    #[error("Error at offset {position}: no overload found for definition '{name}' that takes {arity} arguments.")]
    UnmatchedOverload {
        /// The name of the function.
        name:     String,
        /// The number of arguments supplied.
        arity:    usize,
        /// Where the identifier starts.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at offset {position}: expected ')'.")]
    ExpectedClosingParen {
        /// Where the unmatched `(` is.
        position: usize,
    },
    /// The lexer reached a character it cannot classify.
    #[error("Error at offset {position}: unrecognized character {character:?}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where the character is.
        position:  usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Error at offset {position}: extra tokens after expression: '{token}'.")]
    UnexpectedTrailingTokens {
        /// Source text of the first extra token.
        token:    String,
        /// Where the extra token starts.
        position: usize,
    },
    /// The input contains no expression at all.
    #[error("Error: the input does not contain an expression.")]
    EmptyExpression,
    /// Nesting went deeper than the configured limit.
    #[error("Error at offset {position}: expression nesting exceeds the maximum depth of {max_depth}.")]
    TooDeep {
        /// The configured limit.
        max_depth: usize,
        /// Where the limit was hit.
        position:  usize,
    },
}

impl ParseError {
    /// Byte offset the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnboundReference { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::UnmatchedOverload { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::UnrecognizedCharacter { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::TooDeep { position, .. } => Some(*position),
            Self::EmptyExpression => None,
        }
    }
}
