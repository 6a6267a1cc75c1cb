use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, function::core::call},
};

impl Expr {
    /// Evaluates a function call.
    ///
    /// Every argument is evaluated left to right into a temporary list, then
    /// the registry implementation selected by `(name, argument count)` is
    /// invoked. The parser has already validated that selection, so a miss
    /// only happens for hand-built trees.
    ///
    /// # Errors
    /// - Any error raised while evaluating an argument.
    /// - [`EvalError::MissingOverload`] if the registry has no overload.
    pub(crate) fn eval_call(name: &str, arguments: &[Self]) -> EvalResult<f64> {
        let values = arguments.iter()
                              .map(Self::evaluate)
                              .collect::<EvalResult<Vec<f64>>>()?;

        call(name, &values).ok_or_else(|| EvalError::MissingOverload { name:  name.to_string(),
                                                                        arity: values.len(), })
    }
}
