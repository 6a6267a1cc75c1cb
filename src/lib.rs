//! # mathparser
//!
//! mathparser is an embeddable arithmetic expression parser and evaluator.
//! It turns text such as `2 + 3 * (13.2 - x)` into a tree and reduces the
//! tree to an `f64`, with support for variables supplied by the host,
//! grouping, unary minus and built-in functions like `sin`, `sqrt` and
//! `pow`.
//!
//! ```
//! use mathparser::{Environment, parse};
//!
//! let mut env = Environment::new();
//! env.bind("x", 1.0);
//!
//! let tree = parse("pow(2, 10) - x", &env).unwrap();
//! assert_eq!(tree.evaluate().unwrap(), 1023.0);
//!
//! env.bind("x", 24.0);
//! assert_eq!(tree.evaluate().unwrap(), 1000.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that
/// represent an expression as a tree. The AST is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines the five node kinds and the operator enums.
/// - Carries operator precedence and associativity.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating an expression, carrying the offending name and source offset
/// where one exists.
///
/// # Responsibilities
/// - Defines error enums for each phase and a crate-level wrapper.
/// - Integrates with `std::error::Error` via `thiserror`.
pub mod error;
/// Orchestrates the process of turning text into a number.
///
/// This module ties together the lexer, parser, function registry,
/// environment and evaluator.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// This module provides helpers that are not specific to a single phase,
/// such as formatting results for display.
pub mod util;

pub use ast::Expr;
pub use error::{Error, EvalError, ParseError};
pub use interpreter::{
    environment::{Binding, Environment},
    lexer::{Token, Tokens},
    parser::core::{DEFAULT_MAX_DEPTH, ParseOptions, Parser},
};

/// Parses `source` into a tree, resolving variables against `environment`.
///
/// Uses [`ParseOptions::default`]. The returned tree holds live handles to
/// the environment's bindings; keep the environment alive while the tree
/// is in use.
///
/// # Errors
/// Returns a [`ParseError`] for unbound variables, unknown functions, bad
/// argument counts, unbalanced parentheses, unrecognized characters, extra
/// tokens, empty input or excessive nesting.
///
/// # Examples
/// ```
/// use mathparser::{Environment, ParseError, parse};
///
/// let env = Environment::new();
/// assert!(parse("(2 + 3) * 4", &env).is_ok());
///
/// // 'y' is not bound.
/// let err = parse("y + 1", &env).unwrap_err();
/// assert!(matches!(err, ParseError::UnboundReference { .. }));
/// ```
pub fn parse(source: &str, environment: &Environment) -> Result<Expr, ParseError> {
    parse_with(source, environment, ParseOptions::default())
}

/// Parses `source` with explicit [`ParseOptions`].
///
/// # Errors
/// See [`parse`].
///
/// # Examples
/// ```
/// use mathparser::{Environment, ParseError, ParseOptions, parse_with};
///
/// let options = ParseOptions::default().with_max_depth(8);
/// let err = parse_with("((((((((((1))))))))))", &Environment::new(), options).unwrap_err();
///
/// assert!(matches!(err, ParseError::TooDeep { max_depth: 8, .. }));
/// ```
pub fn parse_with(source: &str,
                  environment: &Environment,
                  options: ParseOptions)
                  -> Result<Expr, ParseError> {
    Parser::new(source, environment, options).parse()
}

/// Evaluates a tree built by [`parse`].
///
/// Equivalent to [`Expr::evaluate`]; references read their environment
/// cells directly, so no environment argument is needed.
///
/// # Errors
/// Returns [`EvalError::ReleasedBinding`] if a referenced binding no longer
/// exists.
pub fn evaluate(tree: &Expr) -> Result<f64, EvalError> {
    tree.evaluate()
}

/// Parses and evaluates `source` in one step.
///
/// # Errors
/// Returns an [`Error`] wrapping the parse or evaluation failure.
///
/// # Examples
/// ```
/// use mathparser::{Environment, eval_str};
///
/// let env: Environment = [("x", 11.7889)].into_iter().collect();
/// let value = eval_str("2 + 3 * (13.2 - 1) - x", &env).unwrap();
///
/// assert!((value - 24.8111).abs() < 1e-9);
/// ```
pub fn eval_str(source: &str, environment: &Environment) -> Result<f64, Error> {
    Ok(parse(source, environment)?.evaluate()?)
}

/// Returns an iterator over the classified tokens of `source`.
///
/// Tokenization never fails: iteration ends at the end of the input or at
/// the first unrecognized character, which [`Tokens::unrecognized`] then
/// reports.
///
/// # Examples
/// ```
/// use mathparser::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("sin(x)").map(|(token, _)| token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Identifier("sin".to_string()),
///                 Token::OpenGroup,
///                 Token::Identifier("x".to_string()),
///                 Token::CloseGroup]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}
