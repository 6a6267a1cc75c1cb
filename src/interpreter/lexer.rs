use std::ops::Range;

use logos::Logos;

/// Byte range of a token inside the source string.
pub type Span = Range<usize>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// Spaces, tabs and line breaks separate tokens and are skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f\v]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `42`.
    ///
    /// There is no exponent notation and no sign; a leading `-` is lexed as
    /// an operator and handled by the parser as negation.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    OpenGroup,
    /// `)`
    #[token(")")]
    CloseGroup,
    /// `,`
    #[token(",")]
    Delimiter,
    /// Any other printable ASCII punctuation character, such as `+` or `^`.
    #[regex(r"[!-'*+\-/:-@\[-^`{-~]", parse_operator)]
    Operator(char),
    /// Produced once the input is exhausted, or after an unrecognized
    /// character stopped tokenization.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "Number [{value}]"),
            Self::Identifier(name) => write!(f, "Identifier [{name}]"),
            Self::OpenGroup => write!(f, "Open Group"),
            Self::CloseGroup => write!(f, "Close Group"),
            Self::Delimiter => write!(f, "Delimiter"),
            Self::Operator(op) => write!(f, "Operator [{op}]"),
            Self::EndOfInput => write!(f, "End Of Input"),
        }
    }
}

/// A character the lexer could not classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unrecognized {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub position:  usize,
}

/// Pull-based tokenizer with exactly one token of lookahead.
///
/// The lexer owns nothing but a cursor into the borrowed source and the
/// current token. Each parse creates its own `Lexer`, so independent parses
/// never observe each other's position.
///
/// Tokenization never fails. When an unrecognized character is reached the
/// lexer records it (see [`Lexer::unrecognized`]) and reports
/// [`Token::EndOfInput`] from then on.
///
/// # Example
/// ```
/// use mathparser::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::start("pow(x, 2)");
/// assert_eq!(lexer.current(), &Token::Identifier("pow".to_string()));
/// assert_eq!(lexer.advance(), &Token::OpenGroup);
/// assert_eq!(lexer.advance(), &Token::Identifier("x".to_string()));
/// assert_eq!(lexer.advance(), &Token::Delimiter);
/// assert_eq!(lexer.advance(), &Token::Number(2.0));
/// assert_eq!(lexer.advance(), &Token::CloseGroup);
/// assert_eq!(lexer.advance(), &Token::EndOfInput);
/// ```
pub struct Lexer<'src> {
    inner:        logos::Lexer<'src, Token>,
    current:      Token,
    span:         Span,
    unrecognized: Option<Unrecognized>,
}

impl<'src> Lexer<'src> {
    /// Positions a fresh lexer at the beginning of `source` and produces the
    /// first token.
    #[must_use]
    pub fn start(source: &'src str) -> Self {
        let mut lexer = Self { inner:        Token::lexer(source),
                               current:      Token::EndOfInput,
                               span:         0..0,
                               unrecognized: None, };
        lexer.advance();
        lexer
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns the byte range of the current token.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span.clone()
    }

    /// Returns the source text of the current token.
    #[must_use]
    pub fn slice(&self) -> &'src str {
        self.inner.source().get(self.span()).unwrap_or_default()
    }

    /// Returns the character that stopped tokenization, if any.
    #[must_use]
    pub const fn unrecognized(&self) -> Option<Unrecognized> {
        self.unrecognized
    }

    /// Consumes the current token and produces the next one.
    pub fn advance(&mut self) -> &Token {
        let end = self.inner.source().len();

        if self.unrecognized.is_some() {
            self.current = Token::EndOfInput;
            return &self.current;
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                self.current = token;
                self.span = self.inner.span();
            },
            Some(Err(())) => {
                let position = self.inner.span().start;
                let character = self.inner
                                    .source()
                                    .get(position..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                self.unrecognized = Some(Unrecognized { character, position });
                self.current = Token::EndOfInput;
                self.span = position..position;
            },
            None => {
                self.current = Token::EndOfInput;
                self.span = end..end;
            },
        }

        &self.current
    }

    /// Consumes the current token, returning it by value.
    pub fn take(&mut self) -> Token {
        let token = std::mem::replace(&mut self.current, Token::EndOfInput);
        self.advance();
        token
    }
}

/// Iterator over the tokens of a source string, ending before
/// [`Token::EndOfInput`].
///
/// Created by [`crate::tokenize`].
pub struct Tokens<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Tokens<'src> {
    /// Starts tokenizing `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Lexer::start(source) }
    }

    /// Returns the character that stopped tokenization, if one has been
    /// reached so far.
    #[must_use]
    pub const fn unrecognized(&self) -> Option<Unrecognized> {
        self.lexer.unrecognized()
    }
}

impl Iterator for Tokens<'_> {
    type Item = (Token, Span);

    fn next(&mut self) -> Option<Self::Item> {
        if *self.lexer.current() == Token::EndOfInput {
            return None;
        }
        let span = self.lexer.span();
        Some((self.lexer.take(), span))
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid decimal number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Extracts the single operator character from the current token slice.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}
