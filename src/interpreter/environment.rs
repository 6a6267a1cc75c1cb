use std::{
    cell::Cell,
    collections::HashMap,
    rc::{Rc, Weak},
};

/// Stores the variable bindings supplied by the host program.
///
/// Each name owns a shared numeric cell. Trees built against an environment
/// keep a [`Binding`] to that cell rather than a copy of the value, so
/// updating a variable with [`Environment::bind`] is observed by every
/// later evaluation of an existing tree (live binding).
///
/// Names are case-sensitive. The environment must outlive the trees built
/// against it: once a binding is removed with [`Environment::unbind`], or
/// the environment is dropped, evaluating a reference to it fails.
///
/// ## Example
/// ```
/// use mathparser::{Environment, parse};
///
/// let mut env = Environment::new();
/// env.bind("x", 2.0);
///
/// let tree = parse("x * 10", &env).unwrap();
/// assert_eq!(tree.evaluate().unwrap(), 20.0);
///
/// env.bind("x", 3.5);
/// assert_eq!(tree.evaluate().unwrap(), 35.0);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    cells: HashMap<String, Rc<Cell<f64>>>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// An existing binding is updated in place, so trees that already refer
    /// to `name` observe the new value.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.cells.get(&name) {
            Some(cell) => cell.set(value),
            None => {
                self.cells.insert(name, Rc::new(Cell::new(value)));
            },
        }
    }

    /// Returns the current value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.cells.get(name).map(|cell| cell.get())
    }

    /// Removes the binding for `name`, returning its last value.
    ///
    /// Trees that refer to the removed binding fail to evaluate afterwards,
    /// even if `name` is bound again later: a new binding is a new cell.
    pub fn unbind(&mut self, name: &str) -> Option<f64> {
        self.cells.remove(name).map(|cell| cell.get())
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the bound names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Resolves `name` to a non-owning handle on its cell.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<Binding> {
        self.cells
            .get(name)
            .map(|cell| Binding { cell: Rc::downgrade(cell) })
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Environment {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut env = Self::new();
        for (name, value) in iter {
            env.bind(name, value);
        }
        env
    }
}

/// A non-owning handle on one [`Environment`] cell.
///
/// Reading through the handle yields the cell's value at the time of the
/// read. The handle does not keep the cell alive.
#[derive(Clone)]
pub struct Binding {
    cell: Weak<Cell<f64>>,
}

impl Binding {
    /// Returns the current value, or `None` if the binding was released.
    ///
    /// ## Example
    /// ```
    /// use mathparser::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.bind("rate", 0.25);
    ///
    /// let binding = env.binding("rate").unwrap();
    /// assert_eq!(binding.get(), Some(0.25));
    ///
    /// env.unbind("rate");
    /// assert_eq!(binding.get(), None);
    /// ```
    #[must_use]
    pub fn get(&self) -> Option<f64> {
        self.cell.upgrade().map(|cell| cell.get())
    }

    /// Returns `true` while the environment still holds the cell.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.cell.strong_count() > 0
    }
}

impl PartialEq for Binding {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.cell, &other.cell)
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(value) => write!(f, "Binding({value})"),
            None => write!(f, "Binding(<released>)"),
        }
    }
}
