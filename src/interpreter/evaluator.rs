/// Core evaluation logic.
///
/// Contains the exhaustive dispatch over node kinds and the result type
/// shared by the evaluator.
pub mod core;

/// Unary operator evaluation.
///
/// Handles prefix operators: negation, and the degenerate result of any
/// other prefix character.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements IEEE arithmetic and exponentiation.
pub mod binary;

/// Function call evaluation.
///
/// Evaluates arguments in order and dispatches to the function registry.
pub mod function;
