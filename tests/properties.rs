use mathparser::{Environment, ParseOptions, eval_str, parse, parse_with, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parsing_arbitrary_text_never_panics(src in "\\PC{0,64}") {
        let _ = parse(&src, &Environment::new());
    }

    #[test]
    fn parsing_expression_like_text_never_panics(src in "[0-9a-z+\\-*/^(),. ]{0,64}") {
        let env: Environment = [("x", 1.0), ("y", -2.5)].into_iter().collect();
        if let Ok(tree) = parse(&src, &env) {
            prop_assert!(tree.evaluate().is_ok());
        }
    }

    #[test]
    fn every_token_consumes_input(src in "[0-9a-z+\\-*/^(),. \t]{0,64}") {
        let count = tokenize(&src).count();
        prop_assert!(count <= src.len());
    }

    #[test]
    fn sums_match_float_arithmetic(a in 0.0f64..1e6, b in 0.0f64..1e6) {
        let value = eval_str(&format!("{a} + {b}"), &Environment::new()).unwrap();
        prop_assert_eq!(value.to_bits(), (a + b).to_bits());
    }

    #[test]
    fn products_bind_tighter_than_sums(a in 0.0f64..1e3, b in 0.0f64..1e3, c in 0.0f64..1e3) {
        let value = eval_str(&format!("{a} + {b} * {c}"), &Environment::new()).unwrap();
        prop_assert_eq!(value.to_bits(), (a + b * c).to_bits());
    }

    #[test]
    fn subtraction_groups_left(a in 0.0f64..1e3, b in 0.0f64..1e3, c in 0.0f64..1e3) {
        let value = eval_str(&format!("{a} - {b} - {c}"), &Environment::new()).unwrap();
        prop_assert_eq!(value.to_bits(), ((a - b) - c).to_bits());
    }

    #[test]
    fn nesting_within_the_limit_parses(depth in 1usize..64) {
        let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        let options = ParseOptions::default().with_max_depth(1024);
        let tree = parse_with(&src, &Environment::new(), options).unwrap();
        prop_assert_eq!(tree.evaluate().unwrap(), 1.0);
    }
}
