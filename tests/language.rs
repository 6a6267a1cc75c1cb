use std::fs;

use mathparser::{
    Environment, Error, EvalError, Expr, ParseError, ParseOptions, eval_str,
    interpreter::function::core::{definitions, lookup, names},
    parse, parse_with,
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_blocks(&content).into_iter().enumerate() {
            for line in block.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let (source, expected) =
                    line.rsplit_once("=>")
                        .unwrap_or_else(|| panic!("Example {} in {path:?} lacks '=>': {line}", i + 1));
                let result = eval_str(source.trim(), &Environment::new());

                match (expected.trim(), result) {
                    ("error", Err(_)) => {},
                    ("error", Ok(v)) => {
                        panic!("Example {} in {path:?} should fail: {source} gave {v}", i + 1)
                    },
                    (expected, Ok(v)) => {
                        let expected: f64 = expected.parse()
                                                    .unwrap_or_else(|e| panic!("Bad expectation {expected}: {e}"));
                        assert!(close(v, expected),
                                "Example {} in {path:?}: {source} gave {v}, expected {expected}",
                                i + 1);
                    },
                    (_, Err(e)) => panic!("Example {} in {path:?} failed:\n{source}\nError: {e}", i + 1),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```mathparser") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn close(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

fn assert_value(src: &str, expected: f64) {
    assert_value_with(src, &Environment::new(), expected);
}

fn assert_value_with(src: &str, env: &Environment, expected: f64) {
    match eval_str(src, env) {
        Ok(v) => assert!(close(v, expected), "{src} gave {v}, expected {expected}"),
        Err(e) => panic!("Expression failed: {src}: {e}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match parse(src, &Environment::new()) {
        Ok(tree) => panic!("Expression parsed but was expected to fail: {src} => {tree:?}"),
        Err(e) => e,
    }
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 ^ 3 ^ 2", 512.0);
    assert_value("2 * 3 ^ 2", 18.0);
    assert_value("2 + 3 * 4 ^ 2 - 1", 49.0);
    assert_value("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn equal_precedence_groups_left() {
    assert_value("8 - 3 - 2", 3.0);
    assert_value("64 / 4 / 2", 8.0);
    assert_value("10 - 2 + 3", 11.0);
    assert_value("12 / 3 * 2", 8.0);
}

#[test]
fn unary_minus() {
    assert_value("-2 + 3", 1.0);
    assert_value("3 - -2", 5.0);
    assert_value("--4", 4.0);
    assert_value("-(2 + 3)", -5.0);
    assert_value("2 * -3", -6.0);
    // The prefix operator takes a single primary.
    assert_value("-2 ^ 2", 4.0);
}

#[test]
fn other_prefix_operators_evaluate_to_zero() {
    assert_value("+5", 0.0);
    assert_value("1 + !7", 1.0);
    assert_value("-(+5)", 0.0);
}

#[test]
fn numeric_literals() {
    assert_value("42", 42.0);
    assert_value(".5 + .25", 0.75);
    assert_value("5. * 2", 10.0);
    assert_value("  3.25\t", 3.25);
}

#[test]
fn builtin_functions() {
    assert_value("pow(2, 10)", 1024.0);
    assert_value("sqrt(16)", 4.0);
    assert_value("sin(0)", 0.0);
    assert_value("cos(0)", 1.0);
    assert_value("sec(0)", 1.0);
    assert_value("ln(exp(2))", 2.0);
    assert_value("lg(8)", 3.0);
    assert_value("log(1000)", 3.0);
    assert_value("floor(-2.5) + ceil(2.5)", 0.0);
    assert_value("abs(-7)", 7.0);
    assert_value("min(3, -4)", -4.0);
    assert_value("max(3, -4)", 3.0);
    assert_value("atan(1) * 4", std::f64::consts::PI);
    assert_value("tan(atan(0.5))", 0.5);
    assert_value("sec(acos(0.5))", 2.0);
    assert_value("csc(asin(0.5))", 2.0);
    assert_value("cot(atan(2))", 0.5);
    assert_value("asin(sin(0.3)) + acos(cos(0.4))", 0.7);
}

#[test]
fn registry_lists_every_builtin() {
    let listed = names();
    assert_eq!(listed.len(), definitions().len());

    for name in listed {
        let definition = lookup(name).unwrap_or_else(|| panic!("{name} is listed but not found"));
        let arity = definition.arities().next().unwrap();
        let source = format!("{name}({})", vec!["0.5"; arity].join(", "));
        assert!(eval_str(&source, &Environment::new()).is_ok(), "{source} failed");
    }
}

#[test]
fn sign_maps_zero_to_one() {
    assert_value("sign(-42)", -1.0);
    assert_value("sign(0)", 1.0);
    assert_value("sign(11)", 1.0);
    assert_value("sign(0 / 0)", 1.0);
}

#[test]
fn nested_calls_and_arguments() {
    assert_value("pow(1 + 1, sqrt(9) * 2)", 64.0);
    assert_value("max(min(1, 2), min(3, 4))", 3.0);
    assert_value("2 * pow(2, 2) + 1", 9.0);
}

#[test]
fn ieee_results_are_not_errors() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);
    assert_value("0 / 0", f64::NAN);
    assert_value("(-8) ^ 0.5", f64::NAN);
    assert_value("sqrt(-1)", f64::NAN);
}

#[test]
fn variables_are_substituted() {
    let env: Environment = [("x", 11.7889)].into_iter().collect();
    assert_value_with("2 + 3 * (13.2 - 1) - x", &env, 24.8111);

    let env: Environment = [("Rate", 2.0), ("rate", 3.0), ("_n1", 4.0)].into_iter().collect();
    assert_value_with("Rate * rate + _n1", &env, 10.0);
}

#[test]
fn unbound_name_is_error() {
    match parse_failure("y + 1") {
        ParseError::UnboundReference { name, position } => {
            assert_eq!(name, "y");
            assert_eq!(position, 0);
        },
        other => panic!("unexpected error {other:?}"),
    }

    let err = parse_failure("1 + y").to_string();
    assert!(err.contains("no binding with name 'y'"), "got: {err}");
}

#[test]
fn unknown_function_is_error() {
    let err = parse_failure("foo(1)");
    assert!(matches!(err, ParseError::UnknownFunction { ref name, .. } if name == "foo"));
    assert!(err.to_string().contains("no definition found with the name 'foo'"));

    // Names are case-sensitive.
    assert!(matches!(parse_failure("Sin(1)"), ParseError::UnknownFunction { .. }));
}

#[test]
fn wrong_function_arity_is_error() {
    let err = parse_failure("sin(1, 2)");
    assert_eq!(err,
               ParseError::UnmatchedOverload { name:     "sin".to_string(),
                                               arity:    2,
                                               position: 0, });
    assert!(err.to_string()
               .contains("no overload found for definition 'sin' that takes 2 arguments"));

    assert!(matches!(parse_failure("pow(2)"), ParseError::UnmatchedOverload { arity: 1, .. }));
    assert!(matches!(parse_failure("sqrt()"), ParseError::UnmatchedOverload { arity: 0, .. }));
}

#[test]
fn stray_delimiters_are_skipped_in_arguments() {
    assert_value("pow(2,,10)", 1024.0);
    assert_value("pow(2, 10,)", 1024.0);
    assert_value("max(, 1, 5)", 5.0);
}

#[test]
fn unbalanced_grouping_is_error() {
    assert!(matches!(parse_failure("(2 + 3"), ParseError::ExpectedClosingParen { position: 0 }));
    assert!(matches!(parse_failure("pow(2, 3"), ParseError::ExpectedClosingParen { position: 3 }));
    assert!(parse_failure("(1").to_string().contains("expected ')'"));
}

#[test]
fn empty_input_is_error() {
    assert_eq!(parse_failure(""), ParseError::EmptyExpression);
    assert_eq!(parse_failure("   "), ParseError::EmptyExpression);
    assert_eq!(parse_failure("()"), ParseError::EmptyExpression);
    assert_eq!(parse_failure("2 +"), ParseError::EmptyExpression);
    assert_eq!(parse_failure(","), ParseError::EmptyExpression);
}

#[test]
fn trailing_tokens_are_error() {
    assert_eq!(parse_failure("2 3"),
               ParseError::UnexpectedTrailingTokens { token:    "3".to_string(),
                                                      position: 2, });
    assert!(matches!(parse_failure("(1 + 2))"), ParseError::UnexpectedTrailingTokens { .. }));
    assert!(matches!(parse_failure("2 % 3"),
                     ParseError::UnexpectedTrailingTokens { ref token, .. } if token == "%"));
}

#[test]
fn unrecognized_character_is_error() {
    assert_eq!(parse_failure("1 + 2 é"),
               ParseError::UnrecognizedCharacter { character: 'é',
                                                   position:  6, });
    assert!(matches!(parse_failure("1 + \u{7}2"),
                     ParseError::UnrecognizedCharacter { character: '\u{7}', .. }));
    assert!(matches!(parse_failure("(2 . 3)"),
                     ParseError::UnrecognizedCharacter { character: '.', .. }));
}

#[test]
fn crate_error_wraps_both_phases() {
    let env = Environment::new();
    assert!(matches!(eval_str("q", &env), Err(Error::Parse(_))));

    let mut env = Environment::new();
    env.bind("q", 1.0);
    let tree = parse("q", &env).unwrap();
    env.unbind("q");
    let err = tree.evaluate().map_err(Error::from).unwrap_err();
    assert_eq!(err,
               Error::Eval(EvalError::ReleasedBinding { name: "q".to_string() }));
}

#[test]
fn hand_built_call_without_overload_fails() {
    let tree = Expr::Call { name:      "sqrt".to_string(),
                            arguments: vec![Expr::literal(1.0), Expr::literal(2.0)], };

    assert_eq!(tree.evaluate(),
               Err(EvalError::MissingOverload { name:  "sqrt".to_string(),
                                                arity: 2, }));
}

#[test]
fn nesting_limit_is_configurable() {
    let deep = format!("{}1{}", "(".repeat(270), ")".repeat(270));
    assert!(matches!(parse_failure(&deep), ParseError::TooDeep { max_depth: 256, .. }));

    let options = ParseOptions::default().with_max_depth(1024);
    let tree = parse_with(&deep, &Environment::new(), options).unwrap();
    assert_eq!(tree.evaluate().unwrap(), 1.0);
}

#[test]
fn long_flat_chain_is_rejected_without_overflow() {
    let flat = format!("{}1", "1+".repeat(100_000));
    match parse_failure(&flat) {
        ParseError::TooDeep { max_depth, position } => {
            assert_eq!(max_depth, 256);
            // The 256th `+` would make the tree 257 levels tall.
            assert_eq!(position, 2 * 255 + 1);
        },
        other => panic!("unexpected error {other:?}"),
    }

    let unary = format!("{}1", "-".repeat(100_000));
    assert!(matches!(parse_failure(&unary), ParseError::TooDeep { .. }));

    let power = format!("{}2", "2^".repeat(100_000));
    assert!(matches!(parse_failure(&power), ParseError::TooDeep { .. }));
}

#[test]
fn chain_within_limit_is_accepted() {
    let chain = format!("{}1", "1+".repeat(255));
    assert_value(&chain, 256.0);

    let tree = parse(&chain, &Environment::new()).unwrap();
    assert_eq!(tree.depth(), 256);

    let options = ParseOptions::default().with_max_depth(16);
    let err = parse_with("1+1+1+1+1+1+1+1+1+1+1+1+1+1+1+1+1", &Environment::new(), options);
    assert!(matches!(err, Err(ParseError::TooDeep { max_depth: 16, .. })));
}

#[test]
fn errors_report_their_offset() {
    assert_eq!(parse_failure("1 + y").position(), Some(4));
    assert_eq!(parse_failure("2 * foo(1)").position(), Some(4));
    assert_eq!(parse_failure("pow(2, 3").position(), Some(3));
    assert_eq!(parse_failure("1 + 2 é").position(), Some(6));
    assert_eq!(parse_failure("2 3").position(), Some(2));
    assert_eq!(parse_failure("").position(), None);
}
