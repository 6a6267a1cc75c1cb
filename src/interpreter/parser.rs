/// Parser state, options and the expression entry points.
pub mod core;

/// Precedence climbing over binary operators.
pub mod binary;

/// Primary expressions: literals, references, calls, groups and prefix
/// operators.
pub mod unary;
