/// Built-in function implementations.
///
/// Contains the pure numeric functions available to every expression. They
/// index their argument slice directly and are reached only through the
/// registry, which passes exactly as many arguments as the overload's arity.
mod builtin;

/// The function registry.
///
/// Maps each function name to its arity-specific implementations and
/// answers the lookups made by the parser and the evaluator.
pub mod core;
