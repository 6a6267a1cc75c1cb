/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// tree: unknown names, bad argument counts, unbalanced grouping and
/// malformed input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the error types that can be raised while reducing a tree to a
/// number. Numeric edge cases such as division by zero are not errors; they
/// produce IEEE infinities or NaN.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// Any failure produced while parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source could not be turned into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be reduced to a number.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
