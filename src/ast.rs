use crate::interpreter::environment::Binding;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of five variants. Each node owns its children
/// exclusively; the only link leaving the tree is the [`Binding`] held by
/// [`Expr::Reference`], which points into the caller's environment without
/// owning it.
///
/// A tree is built once by the parser and may be evaluated any number of
/// times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A variable, resolved against the environment at parse time.
    Reference {
        /// Name the binding was resolved from, kept for error reporting.
        name:    String,
        /// Handle on the environment cell.
        binding: Binding,
    },
    /// A prefix operator applied to one operand.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Built-in function call (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments, in source order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds a binary node from two operands.
    ///
    /// ## Example
    /// ```
    /// use mathparser::ast::{BinaryOperator, Expr};
    ///
    /// let tree = Expr::binary(BinaryOperator::Pow, Expr::literal(2.0), Expr::literal(8.0));
    /// assert_eq!(tree.evaluate().unwrap(), 256.0);
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// ## Example
    /// ```
    /// use mathparser::{Environment, parse};
    ///
    /// let tree = parse("1 + 2 * 3", &Environment::new()).unwrap();
    /// assert_eq!(tree.depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } | Self::Reference { .. } => 1,
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::Call { arguments, .. } => {
                1 + arguments.iter().map(Self::depth).max().unwrap_or(0)
            },
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Maps an operator character to its binary operator, if it is one.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Binding strength used by precedence climbing. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> i32 {
        match self {
            Self::Add | Self::Sub => 20,
            Self::Mul | Self::Div => 40,
            Self::Pow => 60,
        }
    }

    /// Whether a chain of this operator groups from the right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// Represents a prefix operator.
///
/// Any operator character may appear in prefix position. Only `-` has a
/// defined meaning; the others are carried as [`UnaryOperator::Other`] and
/// evaluate to zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// A prefix character without evaluation semantics (e.g. `+x`, `!x`).
    Other(char),
}

impl From<char> for UnaryOperator {
    fn from(symbol: char) -> Self {
        match symbol {
            '-' => Self::Negate,
            other => Self::Other(other),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Other(symbol) => write!(f, "{symbol}"),
        }
    }
}
