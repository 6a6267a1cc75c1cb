/// The environment module holds the host's variable bindings.
///
/// Variables are stored as shared numeric cells. Trees keep non-owning
/// handles to those cells, which gives references live-binding semantics:
/// each evaluation reads the value current at that moment.
///
/// # Responsibilities
/// - Binds, updates and removes named values on behalf of the host.
/// - Hands out [`environment::Binding`] handles to the parser.
pub mod environment;
/// The evaluator module reduces a tree to a number.
///
/// The evaluator walks the tree with a single exhaustive match, applying
/// IEEE arithmetic, reading environment cells and calling builtins.
///
/// # Responsibilities
/// - Evaluates every node kind.
/// - Reports released bindings as errors; numeric edge cases are not errors.
pub mod evaluator;
/// The function module is the registry of built-in functions.
///
/// Each function name maps to one or more implementations keyed by the
/// number of arguments they take. The registry is fixed at compile time.
///
/// # Responsibilities
/// - Implements the numeric builtins.
/// - Answers name and arity lookups for the parser and the evaluator.
pub mod function;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw source and produces numbers, identifiers,
/// grouping and delimiter tokens, and single-character operators, one at a
/// time.
///
/// # Responsibilities
/// - Classifies the input into tokens with byte spans.
/// - Stops at, and records, the first character it cannot classify.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser combines recursive descent for primaries with precedence
/// climbing for binary operators. Names are resolved while parsing, so a
/// finished tree never refers to an unknown variable or function.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Validates variable names and call arities, reporting errors with
///   source offsets.
/// - Bounds recursion depth.
pub mod parser;
