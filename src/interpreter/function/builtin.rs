//! Every function here receives its arguments already counted: the registry
//! only dispatches a slice whose length matches the overload's arity.

/// Generates a one-argument builtin that forwards to an `f64` method.
macro_rules! real_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[doc = concat!("Applies `f64::", stringify!($real_fn), "` to the single argument.")]
            #[must_use]
            pub fn $fname(args: &[f64]) -> f64 {
                args[0].$real_fn()
            }
        )*
    };
}

real_builtin! {
    sin   => sin,
    cos   => cos,
    tan   => tan,
    asin  => asin,
    acos  => acos,
    atan  => atan,
    ln    => ln,
    lg    => log2,
    log   => log10,
    exp   => exp,
    sqrt  => sqrt,
    floor => floor,
    ceil  => ceil,
    abs   => abs,
}

/// Secant, `1 / cos(x)`.
#[must_use]
pub fn sec(args: &[f64]) -> f64 {
    args[0].cos().recip()
}

/// Cosecant, `1 / sin(x)`.
#[must_use]
pub fn csc(args: &[f64]) -> f64 {
    args[0].sin().recip()
}

/// Cotangent, `1 / tan(x)`.
#[must_use]
pub fn cot(args: &[f64]) -> f64 {
    args[0].tan().recip()
}

/// Returns `-1` for negative input and `1` otherwise.
///
/// Zero, negative zero and NaN all map to `1`.
#[must_use]
pub fn sign(args: &[f64]) -> f64 {
    if args[0] < 0.0 { -1.0 } else { 1.0 }
}

/// The smaller of two values; a NaN operand is ignored.
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    args[0].min(args[1])
}

/// The larger of two values; a NaN operand is ignored.
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    args[0].max(args[1])
}

/// Raises the first argument to the power of the second.
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}
