use proptest::collection::vec;
use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};

use vf2_isomorphism::prelude::*;

/// Node weights are the node's index in the graph it was generated as, so mappings print as
/// index pairs.
pub type TestGraph = Graph<usize, ()>;

pub fn empty(directed: bool) -> TestGraph {
    if directed {
        Graph::directed()
    } else {
        Graph::undirected()
    }
}

/// A graph on `0..n` with the given edges.
pub fn build(n: usize, directed: bool, edges: impl IntoIterator<Item = (usize, usize)>) -> TestGraph {
    let mut g = empty(directed);
    for i in 0..n {
        g.new_node(i);
    }
    for (s, t) in edges {
        g.add_edge(NodeId(s), NodeId(t));
    }
    g
}

/// Move node `i` of `g` to position `perm[i]`, keeping its weight.
pub fn permute(g: &TestGraph, perm: &[usize]) -> TestGraph {
    assert_eq!(perm.len(), g.node_count());
    let mut weights = vec![0; g.node_count()];
    for (i, &p) in perm.iter().enumerate() {
        weights[p] = g.nodes[i];
    }

    let mut h = empty(g.is_directed());
    for w in weights {
        h.new_node(w);
    }
    for &(s, t) in &g.adjacency {
        h.add_edge(NodeId(perm[s.0]), NodeId(perm[t.0]));
    }
    h
}

/// The subgraph of `g` induced by `keep`, with `keep[k]` becoming node `k`.
pub fn induced(g: &TestGraph, keep: &[usize]) -> TestGraph {
    let position = |v: NodeId| keep.iter().position(|&k| k == v.0);
    let edges: Vec<_> = g
        .adjacency
        .iter()
        .filter_map(|&(s, t)| Some((position(s)?, position(t)?)))
        .collect();
    build(keep.len(), g.is_directed(), edges)
}

/// A graph on exactly `n` nodes in which each possible edge is present with probability
/// `density`. Self-loops appear only if `loops`.
pub fn arb_graph_of(
    n: usize,
    directed: bool,
    density: f64,
    loops: bool,
) -> BoxedStrategy<TestGraph> {
    vec(prop::bool::weighted(density), n * n)
        .prop_map(move |cells| {
            let edges: Vec<(usize, usize)> = (0..n)
                .flat_map(|i| (0..n).map(move |j| (i, j)))
                .zip(cells)
                .filter(|&((i, j), on)| on && (directed || i <= j) && (loops || i != j))
                .map(|(ij, _)| ij)
                .collect();
            build(n, directed, edges)
        })
        .boxed()
}

/// Small graphs of either kind, with up to `max_nodes` nodes.
pub fn arb_graph(max_nodes: usize) -> BoxedStrategy<TestGraph> {
    (0..=max_nodes, any::<bool>())
        .prop_flat_map(|(n, directed)| arb_graph_of(n, directed, 0.4, true))
        .boxed()
}

/// Two independent graphs of the same kind.
pub fn arb_graph_pair(max_nodes: usize) -> BoxedStrategy<(TestGraph, TestGraph)> {
    (0..=max_nodes, 0..=max_nodes, any::<bool>())
        .prop_flat_map(|(n1, n2, directed)| {
            (
                arb_graph_of(n1, directed, 0.4, true),
                arb_graph_of(n2, directed, 0.4, true),
            )
        })
        .boxed()
}

/// A graph, a permutation of its nodes, and the graph relabelled by it.
pub fn arb_permuted(max_nodes: usize) -> BoxedStrategy<(TestGraph, TestGraph, Vec<usize>)> {
    arb_graph(max_nodes)
        .prop_flat_map(|g| {
            let n = g.node_count();
            (Just(g), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
        .prop_map(|(g, perm)| {
            let h = permute(&g, &perm);
            (g, h, perm)
        })
        .boxed()
}

/// A graph together with one of its induced subgraphs, nodes taken in random order.
pub fn arb_induced(max_nodes: usize) -> BoxedStrategy<(TestGraph, TestGraph, Vec<usize>)> {
    arb_graph(max_nodes)
        .prop_flat_map(|g| {
            let n = g.node_count();
            let keep = prop::sample::subsequence((0..n).collect::<Vec<_>>(), 0..=n).prop_shuffle();
            (Just(g), keep)
        })
        .prop_map(|(g, keep)| {
            let h = induced(&g, &keep);
            (g, h, keep)
        })
        .boxed()
}

/// A directed graph on `n` nodes with roughly a third of all possible edges, together with a
/// random induced subgraph on `k` of its nodes, taken in random order.
pub fn arb_sized_induced(
    n: usize,
    k: usize,
) -> BoxedStrategy<(TestGraph, TestGraph, Vec<usize>)> {
    let keep = prop::sample::subsequence((0..n).collect::<Vec<_>>(), k).prop_shuffle();
    (arb_graph_of(n, true, 1.0 / 3.0, false), keep)
        .prop_map(|(g, keep)| {
            let h = induced(&g, &keep);
            (g, h, keep)
        })
        .boxed()
}
