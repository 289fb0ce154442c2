mod common;

use common::{compound, ids_of, pseudo, sample_tree};
use cssquery::{MatchOp, PseudoClass, compile, query_selector_all};
use rstest::rstest;

#[rstest]
fn first_child_per_parent() {
    let (root, f) = sample_tree();
    let matches = query_selector_all(
        &root,
        &compound(vec![pseudo(PseudoClass::FirstChild)]),
        f.registry(),
    )
    .unwrap();
    assert_eq!(ids_of(&matches), ["g1", "c1", "c3"]);
}

#[rstest]
fn last_child_per_parent() {
    let (root, f) = sample_tree();
    let matches = query_selector_all(
        &root,
        &compound(vec![pseudo(PseudoClass::LastChild)]),
        f.registry(),
    )
    .unwrap();
    assert_eq!(ids_of(&matches), ["r1", "c3", "r2"]);
}

#[rstest]
fn only_child_needs_exactly_one_sibling_slot() {
    let (root, f) = sample_tree();
    let matches = query_selector_all(
        &root,
        &compound(vec![pseudo(PseudoClass::OnlyChild)]),
        f.registry(),
    )
    .unwrap();
    assert_eq!(ids_of(&matches), ["c3"]);
}

#[rstest]
fn empty_selects_leaves() {
    let (root, f) = sample_tree();
    let matches =
        query_selector_all(&root, &compound(vec![pseudo(PseudoClass::Empty)]), f.registry())
            .unwrap();
    assert_eq!(ids_of(&matches), ["c1", "c2", "r1", "c3", "r2"]);
}

// Legacy formula: matched 0-based positions are {a*i + b : 0 <= i < count/a}.
// With a=2, b=0 a three-child parent yields only position 0 (count/a == 1).
#[rstest]
fn nth_child_uses_the_legacy_bound() {
    let (root, f) = sample_tree();
    let matches = query_selector_all(
        &root,
        &compound(vec![pseudo(PseudoClass::NthChild(2, 0))]),
        f.registry(),
    )
    .unwrap();
    assert_eq!(ids_of(&matches), ["g1", "c1"]);
}

#[rstest]
fn nth_child_offset_walks_later_positions() {
    let (root, f) = sample_tree();
    let matches = query_selector_all(
        &root,
        &compound(vec![pseudo(PseudoClass::NthChild(1, 1))]),
        f.registry(),
    )
    .unwrap();
    assert_eq!(ids_of(&matches), ["c2", "r1", "g2", "r2"]);
}

#[rstest]
fn nth_child_negative_step_matches_nothing() {
    let (root, f) = sample_tree();
    let matches = query_selector_all(
        &root,
        &compound(vec![pseudo(PseudoClass::NthChild(-1, 0))]),
        f.registry(),
    )
    .unwrap();
    assert!(matches.is_empty());
}

#[rstest]
#[should_panic(expected = "nth-child step must be non-zero")]
fn nth_child_zero_step_is_a_programming_error() {
    let _ = MatchOp::nth_child(0, 1);
}

// Nodes without a parent satisfy first/last/only-child. The executor's seed
// never contains the root, so drive the compiled pipeline directly.
#[rstest]
fn parentless_node_counts_as_first_last_and_only() {
    let (root, f) = sample_tree();
    for p in [
        PseudoClass::FirstChild,
        PseudoClass::LastChild,
        PseudoClass::OnlyChild,
    ] {
        let compiled = compile(&compound(vec![pseudo(p)]), f.registry()).unwrap();
        let out: Vec<_> = compiled.run([root.clone()].into_iter()).collect();
        assert_eq!(out, [root.clone()]);
    }
}
