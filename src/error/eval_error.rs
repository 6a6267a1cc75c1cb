use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A reference outlived its environment binding.
    #[error("Error: the binding for '{name}' was released before evaluation.")]
    ReleasedBinding {
        /// The name the reference was resolved from.
        name: String,
    },
    /// A call node names an overload the registry does not have.
    ///
    /// The parser never builds such a node; only hand-assembled trees can
    /// reach this.
    #[error("Error: no overload found for definition '{name}' that takes {arity} arguments.")]
    MissingOverload {
        /// The name of the function.
        name:  String,
        /// The number of arguments in the call node.
        arity: usize,
    },
}
