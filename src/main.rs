use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mathparser::{
    DEFAULT_MAX_DEPTH, Environment, ParseOptions,
    interpreter::function::core::definitions,
    parse_with, tokenize,
    util::num::{DEFAULT_PRECISION, format_significant},
};

/// mathparser parses and evaluates arithmetic expressions with variables and
/// built-in functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the classified token stream of an expression, one token per
    /// line.
    Lex {
        /// The expression to tokenize.
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Parses and evaluates an expression and prints the result.
    Eval {
        /// The expression to evaluate.
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Binds a variable before parsing. May be repeated.
        #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
        vars: Vec<(String, f64)>,

        /// Maximum expression nesting depth.
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Number of significant digits in the printed result.
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },
    /// Lists the built-in functions and the argument counts they accept.
    Functions,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::Lex { expression } => lex(&expression),
        Command::Eval { expression,
                        vars,
                        max_depth,
                        precision, } => eval(&expression, vars, max_depth, precision),
        Command::Functions => functions(),
    }
}

fn lex(expression: &str) -> ExitCode {
    let mut tokens = tokenize(expression);

    for (token, _) in tokens.by_ref() {
        println!("{token}");
    }

    if let Some(unrecognized) = tokens.unrecognized() {
        eprintln!("Stopped at unrecognized character {:?} at offset {}.",
                  unrecognized.character, unrecognized.position);
    }

    ExitCode::SUCCESS
}

fn eval(expression: &str, vars: Vec<(String, f64)>, max_depth: usize, precision: usize) -> ExitCode {
    let env: Environment = vars.into_iter().collect();
    let options = ParseOptions::default().with_max_depth(max_depth);

    let result = parse_with(expression, &env, options).map_err(mathparser::Error::from)
                                                       .and_then(|tree| {
                                                           tree.evaluate()
                                                               .map_err(mathparser::Error::from)
                                                       });

    match result {
        Ok(value) => {
            println!("{}", format_significant(value, precision));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn functions() -> ExitCode {
    for definition in definitions() {
        let arities = definition.arities()
                                .map(|arity| arity.to_string())
                                .collect::<Vec<_>>()
                                .join(", ");
        println!("{} ({arities})", definition.name);
    }

    ExitCode::SUCCESS
}

/// Parses a `NAME=VALUE` command-line binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("expected NAME=VALUE, found '{binding}'"))?;
    let name = name.trim();

    let mut chars = name.chars();
    let valid_start = chars.next()
                           .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("'{name}' is not a valid variable name"));
    }

    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;

    Ok((name.to_string(), value))
}
