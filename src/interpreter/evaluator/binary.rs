use crate::ast::{BinaryOperator, Expr};

impl Expr {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// Arithmetic follows IEEE 754: `x / 0` is an infinity or NaN and `^`
    /// uses `powf`, so a negative base with a fractional exponent is NaN.
    ///
    /// # Example
    /// ```
    /// use mathparser::ast::{BinaryOperator, Expr};
    ///
    /// assert_eq!(Expr::eval_binary(BinaryOperator::Sub, 8.0, 3.0), 5.0);
    /// assert_eq!(Expr::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(Expr::eval_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
