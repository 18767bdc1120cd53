use std::collections::BTreeSet;

use proptest::prelude::*;
use vf2_isomorphism::prelude::*;

use crate::graph::brute::{assert_sound, assignment, brute_force, Assignment};
use crate::graph::fixtures::*;
use crate::graph::strategy::*;

#[test]
fn gem_embeds_into_gem_with_isolated_vertex() {
    let (gem, other) = (gem(), gem_with_isolated_vertex());

    assert!(is_subgraph_isomorphic(&other, &gem));
    assert!(!is_subgraph_isomorphic(&gem, &other));
}

#[test]
fn equal_sizes_reduce_to_isomorphism() {
    let (a, b) = (degree_mismatch_a(), degree_mismatch_b());
    assert!(!Vf2Inspector::subgraph(&a, &b).isomorphism_exists());
}

#[test]
fn embeddings_must_be_induced() {
    // a triangle contains a path on three vertices, but not as an induced subgraph
    let triangle = build(3, false, [(0, 1), (1, 2), (2, 0)]);
    let path = build(3, false, [(0, 1), (1, 2)]);
    assert!(!is_subgraph_isomorphic(&triangle, &path));

    let square = build(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    let embeddings = Vf2Inspector::subgraph(&square, &path).mappings().count();
    // four choices of middle vertex, two orientations each
    assert_eq!(embeddings, 8);
}

#[test]
fn isolated_pattern_vertices_avoid_host_edges() {
    let host = build(3, true, [(0, 1)]);
    let pattern = build(2, true, []);
    let inspector = Vf2Inspector::subgraph(&host, &pattern);

    let found: BTreeSet<Assignment> = inspector.mappings().map(|m| assignment(&m)).collect();
    let expected: BTreeSet<Assignment> =
        [vec![0, 2], vec![2, 0], vec![1, 2], vec![2, 1]].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn empty_pattern_has_one_embedding() {
    let host = path(4);
    let pattern = empty(true);
    let inspector = Vf2Inspector::subgraph(&host, &pattern);
    let mappings: Vec<_> = inspector.mappings().collect();

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].to_string(), "[0=~~ 1=~~ 2=~~ 3=~~]");
}

#[test]
fn edge_counts_gate_the_search() {
    let host = build(4, true, [(0, 1)]);
    let pattern = build(2, true, [(0, 1), (1, 0)]);
    assert!(!is_subgraph_isomorphic(&host, &pattern));
}

#[test]
fn embedding_reports_counterparts() {
    let host = random_graph(10, 30);
    let keep = vec![3, 8, 1, 6];
    let pattern = induced(&host, &keep);
    let inspector = Vf2Inspector::subgraph(&host, &pattern);

    let m = inspector
        .mappings()
        .find(|m| assignment(m) == keep)
        .expect("the inclusion is one of the embeddings");
    for (k, &h) in keep.iter().enumerate() {
        assert_eq!(m.vertex_correspondence(NodeId(k), false), Some(NodeId(h)));
        assert_eq!(m.vertex_correspondence(NodeId(h), true), Some(NodeId(k)));
    }
    for e in pattern.edge_ids() {
        let counterpart = m.edge_correspondence(e, false).expect("edges are preserved");
        let (s, t) = host.endpoints(counterpart);
        let (ps, pt) = pattern.endpoints(e);
        assert_eq!((s.0, t.0), (keep[ps.0], keep[pt.0]));
    }
}

proptest! {
    /// An induced subgraph always embeds, via at least the inclusion it was cut out by.
    #[test]
    fn induced_subgraphs_embed((g, h, keep) in arb_induced(7)) {
        let inspector = Vf2Inspector::subgraph(&g, &h);
        let found: BTreeSet<Assignment> = inspector.mappings().map(|m| assignment(&m)).collect();
        prop_assert!(found.contains(&keep));
    }

    /// Every embedding found is sound, and none is found twice.
    #[test]
    fn embeddings_are_sound_and_distinct((g, h, _) in arb_induced(6)) {
        let mut seen = BTreeSet::new();
        for m in Vf2Inspector::subgraph(&g, &h).mappings() {
            assert_sound(&m, MatchMode::Subgraph);
            prop_assert!(seen.insert(assignment(&m)));
        }
    }

    /// The search finds exactly the embeddings an exhaustive search does.
    #[test]
    fn agrees_with_brute_force((g, h, _) in arb_induced(6)) {
        let inspector = Vf2Inspector::subgraph(&g, &h);
        let found: BTreeSet<Assignment> = inspector.mappings().map(|m| assignment(&m)).collect();
        prop_assert_eq!(found, brute_force(&g, &h, MatchMode::Subgraph));
    }

    /// The same, for patterns that need not occur in the host.
    #[test]
    fn agrees_with_brute_force_on_unrelated_graphs((g1, g2) in arb_graph_pair(5)) {
        let inspector = Vf2Inspector::subgraph(&g1, &g2);
        let found: BTreeSet<Assignment> = inspector.mappings().map(|m| assignment(&m)).collect();
        prop_assert_eq!(found, brute_force(&g1, &g2, MatchMode::Subgraph));
    }

    /// A graph is a subgraph of itself exactly as often as it is isomorphic to itself.
    #[test]
    fn subgraph_of_itself(g in arb_graph(5)) {
        let iso = Vf2Inspector::isomorphism(&g, &g).mappings().count();
        let sub = Vf2Inspector::subgraph(&g, &g).mappings().count();
        prop_assert_eq!(iso, sub);
    }
}
