use std::collections::BTreeSet;

use proptest::prelude::*;
use vf2_isomorphism::prelude::*;

use crate::graph::brute::{assignment, brute_force};
use crate::graph::fixtures::*;
use crate::graph::strategy::arb_graph;
use crate::harness::setup_test_logging;

#[test]
fn triangle_has_six_automorphisms() {
    setup_test_logging();
    let g = triangle();
    let inspector = Vf2Inspector::isomorphism(&g, &g);

    let mut expected: BTreeSet<&str> = [
        "[v1=v1 v2=v2 v3=v3]",
        "[v1=v1 v2=v3 v3=v2]",
        "[v1=v2 v2=v1 v3=v3]",
        "[v1=v2 v2=v3 v3=v1]",
        "[v1=v3 v2=v1 v3=v2]",
        "[v1=v3 v2=v2 v3=v1]",
    ]
    .into_iter()
    .collect();

    let mut mappings = inspector.mappings();
    for _ in 0..6 {
        let m = mappings.next().expect("six automorphisms");
        assert!(expected.remove(m.to_string().as_str()), "unexpected {m}");
    }
    assert!(mappings.next().is_none());
    assert!(expected.is_empty());
}

#[test]
fn converging_path_has_two_automorphisms() {
    let g = converging_path();
    let inspector = Vf2Inspector::isomorphism(&g, &g);

    let found: BTreeSet<String> = inspector.mappings().map(|m| m.to_string()).collect();
    let expected: BTreeSet<String> = ["[1=1 2=2 3=3]", "[1=3 2=2 3=1]"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(found, expected);
    assert_eq!(inspector.mappings().count(), 2);
}

#[test]
fn directed_path_is_rigid() {
    let p = path(6);
    let inspector = Vf2Inspector::isomorphism(&p, &p);
    let mappings: Vec<_> = inspector.mappings().collect();

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].core2(), &[Some(0), Some(1), Some(2), Some(3), Some(4), Some(5)]);
}

proptest! {
    /// Every graph has at least the identity automorphism, and the search finds all of them.
    #[test]
    fn automorphisms_include_identity(g in arb_graph(6)) {
        let inspector = Vf2Inspector::isomorphism(&g, &g);
        let found: BTreeSet<Vec<usize>> = inspector.mappings().map(|m| assignment(&m)).collect();

        let identity: Vec<usize> = (0..g.node_count()).collect();
        prop_assert!(found.contains(&identity));
        prop_assert_eq!(found, brute_force(&g, &g, MatchMode::Isomorphism));
    }
}
