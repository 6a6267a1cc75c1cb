use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::EvalResult,
};

impl Expr {
    /// Applies a prefix operator to an evaluated operand.
    ///
    /// `Negate` flips the sign. Any other prefix character has no meaning
    /// and yields `0.0`; the operand has still been evaluated by the caller,
    /// so a released binding inside it is reported.
    ///
    /// # Example
    /// ```
    /// use mathparser::ast::{Expr, UnaryOperator};
    ///
    /// assert_eq!(Expr::eval_unary(UnaryOperator::Negate, 5.0).unwrap(), -5.0);
    /// assert_eq!(Expr::eval_unary(UnaryOperator::Other('!'), 5.0).unwrap(), 0.0);
    /// ```
    #[allow(clippy::unnecessary_wraps)]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> EvalResult<f64> {
        match op {
            UnaryOperator::Negate => Ok(-value),
            UnaryOperator::Other(_) => Ok(0.0),
        }
    }
}
