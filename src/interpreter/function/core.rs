use crate::interpreter::function::builtin;

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated arguments whose length equals the
/// overload's arity.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// One arity-specific implementation of a function.
#[derive(Debug, Clone, Copy)]
pub struct Overload {
    /// Number of arguments the implementation takes.
    pub arity: usize,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// A registry entry: a function name and all of its overloads.
#[derive(Debug)]
pub struct Definition {
    /// The function name as written in expressions.
    pub name:      &'static str,
    /// Implementations keyed by arity; arities are unique within an entry.
    pub overloads: &'static [Overload],
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name followed by one or more
/// `arity => function` overloads.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (builtin names, exposed through [`names`]).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => { $( $arity:literal => $func:expr ),+ $(,)? }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Definition] = &[
            $(
                Definition { name:      $name,
                             overloads: &[ $( Overload { arity: $arity, func: $func } ),+ ] },
            )*
        ];
        const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => { 1 => builtin::sin },
    "cos"   => { 1 => builtin::cos },
    "tan"   => { 1 => builtin::tan },
    "sec"   => { 1 => builtin::sec },
    "csc"   => { 1 => builtin::csc },
    "cot"   => { 1 => builtin::cot },
    "asin"  => { 1 => builtin::asin },
    "acos"  => { 1 => builtin::acos },
    "atan"  => { 1 => builtin::atan },
    "ln"    => { 1 => builtin::ln },
    "lg"    => { 1 => builtin::lg },
    "log"   => { 1 => builtin::log },
    "exp"   => { 1 => builtin::exp },
    "sqrt"  => { 1 => builtin::sqrt },
    "floor" => { 1 => builtin::floor },
    "ceil"  => { 1 => builtin::ceil },
    "abs"   => { 1 => builtin::abs },
    "sign"  => { 1 => builtin::sign },
    "min"   => { 2 => builtin::min },
    "max"   => { 2 => builtin::max },
    "pow"   => { 2 => builtin::pow },
}

impl Definition {
    /// Selects the implementation taking `arity` arguments.
    ///
    /// ## Example
    /// ```
    /// use mathparser::interpreter::function::core::lookup;
    ///
    /// let pow = lookup("pow").unwrap();
    /// assert!(pow.overload(2).is_some());
    /// assert!(pow.overload(1).is_none());
    /// ```
    #[must_use]
    pub fn overload(&self, arity: usize) -> Option<BuiltinFn> {
        self.overloads
            .iter()
            .find(|overload| overload.arity == arity)
            .map(|overload| overload.func)
    }

    /// The argument counts this function accepts.
    pub fn arities(&self) -> impl Iterator<Item = usize> + '_ {
        self.overloads.iter().map(|overload| overload.arity)
    }
}

/// Finds the registry entry for `name`.
///
/// Names are case-sensitive; `Sin` is not `sin`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Definition> {
    BUILTIN_TABLE.iter().find(|definition| definition.name == name)
}

/// All registry entries, in registry order.
#[must_use]
pub fn definitions() -> &'static [Definition] {
    BUILTIN_TABLE
}

/// Names of every builtin, in registry order.
///
/// ## Example
/// ```
/// use mathparser::interpreter::function::core::names;
///
/// assert_eq!(names().len(), 21);
/// assert!(names().contains(&"sqrt"));
/// ```
#[must_use]
pub const fn names() -> &'static [&'static str] {
    BUILTIN_FUNCTIONS
}

/// Calls the implementation of `name` selected by the length of `args`.
///
/// Returns `None` if the registry has no such overload; an argument count
/// that matches no arity is never passed to an implementation.
///
/// ## Example
/// ```
/// use mathparser::interpreter::function::core::call;
///
/// assert_eq!(call("pow", &[2.0, 10.0]), Some(1024.0));
/// assert_eq!(call("sign", &[0.0]), Some(1.0));
/// assert_eq!(call("sin", &[1.0, 2.0]), None);
/// assert_eq!(call("sqrt", &[]), None);
/// ```
#[must_use]
pub fn call(name: &str, args: &[f64]) -> Option<f64> {
    lookup(name).and_then(|definition| definition.overload(args.len()))
                .map(|func| func(args))
}
