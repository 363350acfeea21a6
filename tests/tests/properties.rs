use calc::{evaluate, evaluate_with_steps, ErrorKind};
use proptest::prelude::*;
use tests::{expr, same_value};

proptest! {
    #[test]
    fn well_formed_expressions_never_underflow(tree in expr()) {
        for source in [tree.bare(), tree.parenthesized()] {
            match evaluate(&source) {
                Ok(_) => {}
                Err(e) => prop_assert_ne!(e.kind(), ErrorKind::StackUnderflow, "{}", source),
            }
            prop_assert!(evaluate(&source).is_ok(), "{} failed", source);
        }
    }

    #[test]
    fn fully_parenthesized_matches_the_tree(tree in expr()) {
        let value = evaluate(&tree.parenthesized()).unwrap();
        prop_assert!(same_value(value, tree.value()), "{} != {}", value, tree.value());
    }

    #[test]
    fn evaluation_is_idempotent(tree in expr()) {
        let source = tree.bare();
        let first = evaluate(&source).unwrap();
        let second = evaluate(&source).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn steps_agree_with_plain_evaluation(tree in expr()) {
        let source = tree.bare();
        let traced = evaluate_with_steps(&source).unwrap();
        prop_assert_eq!(traced.value.to_bits(), evaluate(&source).unwrap().to_bits());

        let operators = source.chars().filter(|c| "+-*/^".contains(*c)).count();
        prop_assert_eq!(traced.steps.len(), operators);
        if let Some(last) = traced.steps.last() {
            prop_assert_eq!(last.result.to_bits(), traced.value.to_bits());
        }
    }

    #[test]
    fn arbitrary_text_fails_cleanly(source in "\\PC{0,40}") {
        // Any outcome is fine as long as it is a value or a typed error
        let _ = evaluate(&source);
    }
}
