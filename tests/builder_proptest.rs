//! Property-based tests for the tree builder and evaluator
//!
//! These pin the structural guarantees: balanced inputs always build and
//! preserve their structural tokens in order, unbalanced inputs always
//! fail, single-line inputs are always clean, and evaluation is pure.

use proptest::prelude::*;

use wraplint::ast::{Node, TokenClass};
use wraplint::lexer::tokenize;
use wraplint::parser::build;
use wraplint::rules::evaluate;

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("foo".to_string()),
        Just("123".to_string()),
        Just("\"abc\"".to_string()),
        Just(",".to_string()),
        Just("\n".to_string()),
        Just("+".to_string()),
    ]
}

fn single_line_atom() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("foo".to_string()),
        Just("123".to_string()),
        Just("\"abc\"".to_string()),
        Just(",".to_string()),
        Just("+".to_string()),
    ]
}

fn element_from(leaves: impl Strategy<Value = String> + 'static) -> BoxedStrategy<String> {
    leaves
        .prop_recursive(4, 64, 8, |inner| {
            (
                prop_oneof![Just(('(', ')')), Just(('[', ']')), Just(('{', '}'))],
                prop::collection::vec(inner, 0..6),
            )
                .prop_map(|((open, close), parts)| {
                    format!("{}{}{}", open, parts.join(" "), close)
                })
        })
        .boxed()
}

fn balanced_source() -> impl Strategy<Value = String> {
    prop::collection::vec(element_from(atom()), 0..8).prop_map(|parts| parts.join(" "))
}

fn single_line_source() -> impl Strategy<Value = String> {
    prop::collection::vec(element_from(single_line_atom()), 0..8)
        .prop_map(|parts| parts.join(" "))
}

/// Pre-order collection of every leaf token text in the tree, including
/// each group's brackets.
fn collect_leaf_texts(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Container(container) => {
            for child in container.children() {
                collect_leaf_texts(child, out);
            }
        }
        Node::Group(group) => {
            out.push(group.open().token().text.clone());
            for child in group.children() {
                collect_leaf_texts(child, out);
            }
            out.push(group.close().token().text.clone());
        }
        Node::Leaf(leaf) => out.push(leaf.token().text.clone()),
        Node::Run(_) => {}
    }
}

proptest! {
    #[test]
    fn balanced_sources_always_build(source in balanced_source()) {
        let tokens = tokenize(&source).expect("generated sources lex");
        prop_assert!(build(tokens).is_ok());
    }

    #[test]
    fn structural_tokens_survive_in_order(source in balanced_source()) {
        let tokens = tokenize(&source).expect("generated sources lex");
        let expected: Vec<String> = tokens
            .iter()
            .filter(|token| TokenClass::classify(token).is_structural())
            .map(|token| token.text.clone())
            .collect();

        let tree = build(tokens).expect("balanced sources build");
        let mut actual = Vec::new();
        collect_leaf_texts(&tree, &mut actual);

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn extra_closer_always_fails(source in balanced_source()) {
        let tokens = tokenize(&format!("{})", source)).expect("generated sources lex");
        prop_assert!(build(tokens).is_err());
    }

    #[test]
    fn missing_closer_always_fails(source in balanced_source()) {
        let tokens = tokenize(&format!("({}", source)).expect("generated sources lex");
        prop_assert!(build(tokens).is_err());
    }

    #[test]
    fn mismatched_pair_always_fails(source in balanced_source()) {
        let tokens = tokenize(&format!("[{})", source)).expect("generated sources lex");
        prop_assert!(build(tokens).is_err());
    }

    #[test]
    fn single_line_sources_are_always_clean(source in single_line_source()) {
        let tokens = tokenize(&source).expect("generated sources lex");
        let tree = build(tokens).expect("balanced sources build");
        prop_assert_eq!(evaluate(&tree), Vec::new());
    }

    #[test]
    fn evaluation_is_idempotent(source in balanced_source()) {
        let tokens = tokenize(&source).expect("generated sources lex");
        let tree = build(tokens).expect("balanced sources build");
        prop_assert_eq!(evaluate(&tree), evaluate(&tree));
    }
}
