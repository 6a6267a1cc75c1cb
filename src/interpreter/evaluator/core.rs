use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Expr {
    /// Evaluates the tree and returns the resulting number.
    ///
    /// Children are evaluated left to right. References read their
    /// environment cell at the time of the call, so evaluating the same tree
    /// after updating a binding yields the updated result.
    ///
    /// Division by zero and undefined powers are not errors; they produce
    /// IEEE infinities or NaN.
    ///
    /// # Errors
    /// - [`EvalError::ReleasedBinding`] if a referenced binding has been
    ///   removed from its environment, or the environment dropped.
    /// - [`EvalError::MissingOverload`] for a hand-built call node with no
    ///   matching registry overload.
    ///
    /// # Example
    /// ```
    /// use mathparser::{Environment, parse};
    ///
    /// let env = Environment::new();
    /// let tree = parse("1 / 0", &env).unwrap();
    ///
    /// assert_eq!(tree.evaluate().unwrap(), f64::INFINITY);
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Literal { value } => Ok(*value),
            Self::Reference { name, binding } => {
                binding.get()
                       .ok_or_else(|| EvalError::ReleasedBinding { name: name.clone() })
            },
            Self::Unary { op, operand } => Self::eval_unary(*op, operand.evaluate()?),
            Self::Binary { left, op, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Self::Call { name, arguments } => Self::eval_call(name, arguments),
        }
    }
}
