//! Enumerating mappings.
//!
//! [`Vf2Inspector`] indexes both graphs once and hands out lazy [`Mappings`] iterators. Each
//! iterator runs its own depth-first search and suspends after every complete mapping; asking
//! for the next item resumes exactly where the previous one was found.
use core::iter::FusedIterator;

use tracing::debug;

use crate::feasibility::MatchMode;
use crate::graph::GraphView;
use crate::mapping::GraphMapping;
use crate::ordering::GraphOrdering;
use crate::state::{EdgeMatch, NodeMatch, Vf2State};
use crate::trace::{MatchEvent, MatchTrace, NOOP_TRACE};

/// A VF2 search over a pair of graphs.
///
/// In [`MatchMode::Subgraph`] mode, mappings embed the second graph into the first.
///
/// ```rust
/// use vf2_isomorphism::prelude::*;
///
/// let mut triangle: Graph<&str, ()> = Graph::undirected();
/// let a = triangle.new_node("a");
/// let b = triangle.new_node("b");
/// let c = triangle.new_node("c");
/// triangle.add_edge(a, b);
/// triangle.add_edge(b, c);
/// triangle.add_edge(c, a);
///
/// let inspector = Vf2Inspector::isomorphism(&triangle, &triangle);
/// assert_eq!(inspector.mappings().count(), 6);
/// ```
pub struct Vf2Inspector<'a, G: GraphView> {
    g1: GraphOrdering<'a, G>,
    g2: GraphOrdering<'a, G>,
    mode: MatchMode,
    node_match: Box<NodeMatch<'a, G::NodeWeight>>,
    edge_match: Box<EdgeMatch<'a, G::EdgeWeight>>,
    trace: &'a dyn MatchTrace,
}

impl<'a, G: GraphView> Vf2Inspector<'a, G> {
    /// A purely structural search: every node and edge weight matches every other.
    pub fn new(g1: &'a G, g2: &'a G, mode: MatchMode) -> Self {
        Vf2Inspector {
            g1: GraphOrdering::new(g1),
            g2: GraphOrdering::new(g2),
            mode,
            node_match: Box::new(always::<G::NodeWeight>),
            edge_match: Box::new(always::<G::EdgeWeight>),
            trace: &NOOP_TRACE,
        }
    }

    /// Search for isomorphisms between `g1` and `g2`.
    pub fn isomorphism(g1: &'a G, g2: &'a G) -> Self {
        Self::new(g1, g2, MatchMode::Isomorphism)
    }

    /// Search for embeddings of `g2` into `g1`.
    pub fn subgraph(g1: &'a G, g2: &'a G) -> Self {
        Self::new(g1, g2, MatchMode::Subgraph)
    }

    /// Only match nodes for which `f(first graph weight, second graph weight)` holds.
    pub fn with_node_match<F>(mut self, f: F) -> Self
    where
        F: Fn(&G::NodeWeight, &G::NodeWeight) -> bool + 'a,
    {
        self.node_match = Box::new(f);
        self
    }

    /// Only match edges for which `f(first graph weight, second graph weight)` holds.
    pub fn with_edge_match<F>(mut self, f: F) -> Self
    where
        F: Fn(&G::EdgeWeight, &G::EdgeWeight) -> bool + 'a,
    {
        self.edge_match = Box::new(f);
        self
    }

    pub fn with_trace(mut self, trace: &'a dyn MatchTrace) -> Self {
        self.trace = trace;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn graph1(&self) -> &GraphOrdering<'a, G> {
        &self.g1
    }

    pub fn graph2(&self) -> &GraphOrdering<'a, G> {
        &self.g2
    }

    /// A fresh search over all mappings. Each call starts from scratch.
    pub fn mappings(&self) -> Mappings<'_, G> {
        Mappings {
            state: Vf2State::new(
                &self.g1,
                &self.g2,
                self.mode,
                &*self.node_match,
                &*self.edge_match,
                self.trace,
            ),
            phase: Phase::Fresh,
        }
    }

    /// Whether at least one mapping exists; stops at the first one found.
    pub fn isomorphism_exists(&self) -> bool {
        self.mappings().next().is_some()
    }
}

fn always<W>(_: &W, _: &W) -> bool {
    true
}

/// `true` if `g1` and `g2` are isomorphic, ignoring weights.
pub fn is_isomorphic<G: GraphView>(g1: &G, g2: &G) -> bool {
    Vf2Inspector::isomorphism(g1, g2).isomorphism_exists()
}

/// `true` if `g2` is isomorphic to an induced subgraph of `g1`, ignoring weights.
pub fn is_subgraph_isomorphic<G: GraphView>(g1: &G, g2: &G) -> bool {
    Vf2Inspector::subgraph(g1, g2).isomorphism_exists()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing has been searched yet.
    Fresh,
    /// Stopped at a complete mapping, which must be undone before continuing.
    Suspended,
    Done,
}

/// Lazily enumerated mappings; see [`Vf2Inspector::mappings`].
pub struct Mappings<'a, G: GraphView> {
    state: Vf2State<'a, G>,
    phase: Phase,
}

impl<'a, G: GraphView> Mappings<'a, G> {
    fn finish(&mut self) -> Option<GraphMapping<'a, G>> {
        self.phase = Phase::Done;
        self.state.trace.on_event(MatchEvent::Exhausted);
        None
    }

    fn solution(&mut self) -> Option<GraphMapping<'a, G>> {
        self.state.trace.on_event(MatchEvent::Solution {
            depth: self.state.core_len(),
        });
        Some(self.state.current_mapping())
    }
}

impl<'a, G: GraphView> Iterator for Mappings<'a, G> {
    type Item = GraphMapping<'a, G>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Done => return None,
            Phase::Fresh => {
                if !self.state.sizes_compatible() {
                    debug!(mode = ?self.state.mode(), "graph sizes rule out any mapping");
                    return self.finish();
                }
                if self.state.is_goal() {
                    // an empty second graph has exactly one, empty, mapping
                    self.phase = Phase::Done;
                    return self.solution();
                }
            }
            Phase::Suspended => self.state.backtrack(),
        }

        loop {
            while self.state.next_pair() {
                if self.state.is_feasible_pair() {
                    self.state.add_pair();
                    if self.state.is_goal() {
                        self.phase = Phase::Suspended;
                        return self.solution();
                    }
                }
            }

            if self.state.core_len() == 0 {
                debug!("search space exhausted");
                return self.finish();
            }
            self.state.backtrack();
        }
    }
}

impl<G: GraphView> FusedIterator for Mappings<'_, G> {}
