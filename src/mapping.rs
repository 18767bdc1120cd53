//! Mappings produced by a search.
use core::fmt;

use crate::graph::GraphView;
use crate::ordering::GraphOrdering;

/// A snapshot of a (usually complete) vertex correspondence between two graphs.
///
/// The mapping owns copies of the search's core arrays, so it stays valid after the search moves
/// on; it borrows only the two read-only orderings.
pub struct GraphMapping<'a, G: GraphView> {
    g1: &'a GraphOrdering<'a, G>,
    g2: &'a GraphOrdering<'a, G>,
    core1: Vec<Option<usize>>,
    core2: Vec<Option<usize>>,
}

impl<'a, G: GraphView> GraphMapping<'a, G> {
    pub(crate) fn new(
        g1: &'a GraphOrdering<'a, G>,
        g2: &'a GraphOrdering<'a, G>,
        core1: Vec<Option<usize>>,
        core2: Vec<Option<usize>>,
    ) -> Self {
        GraphMapping {
            g1,
            g2,
            core1,
            core2,
        }
    }

    pub fn graph1(&self) -> &'a GraphOrdering<'a, G> {
        self.g1
    }

    pub fn graph2(&self) -> &'a GraphOrdering<'a, G> {
        self.g2
    }

    /// For each first-graph index, the second-graph index it is mapped to.
    pub fn core1(&self) -> &[Option<usize>] {
        &self.core1
    }

    /// For each second-graph index, the first-graph index it is mapped to.
    pub fn core2(&self) -> &[Option<usize>] {
        &self.core2
    }

    /// The vertex `v` corresponds to: a second-graph vertex if `forward`, else a first-graph one.
    ///
    /// # Panics
    ///
    /// If `v` is not a vertex of the graph it is looked up in.
    pub fn vertex_correspondence(&self, v: G::NodeId, forward: bool) -> Option<G::NodeId> {
        let Direction { from, to, core } = self.direction(forward);
        let i = match from.index_of(v) {
            Ok(i) => i,
            Err(err) => panic!("{err}"),
        };
        core[i].map(|j| to.vertex_at(j))
    }

    /// The edge `e` corresponds to, if both of its endpoints are mapped and the counterpart
    /// edge exists.
    ///
    /// # Panics
    ///
    /// If `e` is not an edge of the graph it is looked up in.
    pub fn edge_correspondence(&self, e: G::EdgeId, forward: bool) -> Option<G::EdgeId> {
        let Direction { from, to, core } = self.direction(forward);
        let (i, j) = match from.edge_indices(e) {
            Ok(ij) => ij,
            Err(err) => panic!("{err}"),
        };
        to.edge_at(core[i]?, core[j]?)
    }

    /// Whether first-graph vertex `v` is mapped.
    pub fn has_vertex_correspondence(&self, v: G::NodeId) -> bool {
        self.vertex_correspondence(v, true).is_some()
    }

    /// Whether first-graph edge `e` has a counterpart.
    pub fn has_edge_correspondence(&self, e: G::EdgeId) -> bool {
        self.edge_correspondence(e, true).is_some()
    }

    fn direction(&self, forward: bool) -> Direction<'_, 'a, G> {
        if forward {
            Direction {
                from: self.g1,
                to: self.g2,
                core: &self.core1,
            }
        } else {
            Direction {
                from: self.g2,
                to: self.g1,
                core: &self.core2,
            }
        }
    }
}

/// One side of a mapping: look up in `from`, translate through `core`, answer in `to`.
struct Direction<'m, 'a, G: GraphView> {
    from: &'a GraphOrdering<'a, G>,
    to: &'a GraphOrdering<'a, G>,
    core: &'m [Option<usize>],
}

impl<G: GraphView> Clone for GraphMapping<'_, G> {
    fn clone(&self) -> Self {
        GraphMapping {
            g1: self.g1,
            g2: self.g2,
            core1: self.core1.clone(),
            core2: self.core2.clone(),
        }
    }
}

/// Two mappings are equal when every vertex of `self`'s second graph has the same counterpart
/// in both.
///
/// # Panics
///
/// If `other` is over a second graph that lacks some of those vertices.
impl<G: GraphView> PartialEq for GraphMapping<'_, G> {
    fn eq(&self, other: &Self) -> bool {
        self.g2.vertex_count() == other.g2.vertex_count()
            && (0..self.g2.vertex_count()).all(|i| {
                let v = self.g2.vertex_at(i);
                self.vertex_correspondence(v, false) == other.vertex_correspondence(v, false)
            })
    }
}

impl<G: GraphView> fmt::Debug for GraphMapping<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphMapping")
            .field("core1", &self.core1)
            .field("core2", &self.core2)
            .finish()
    }
}

/// `[k1=v1 k2=v2 ...]` over the vertices of the first graph, printed by node weight and sorted
/// by that text, with `~~` for vertices that are not mapped.
impl<G> fmt::Display for GraphMapping<'_, G>
where
    G: GraphView,
    G::NodeWeight: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(String, Option<String>)> = (0..self.g1.vertex_count())
            .map(|i| {
                let key = self.g1.node_weight_at(i).to_string();
                let value = self.core1[i].map(|j| self.g2.node_weight_at(j).to_string());
                (key, value)
            })
            .collect();
        entries.sort();

        write!(f, "[")?;
        for (n, (key, value)) in entries.iter().enumerate() {
            if n > 0 {
                write!(f, " ")?;
            }
            match value {
                Some(value) => write!(f, "{key}={value}")?,
                None => write!(f, "{key}=~~")?,
            }
        }
        write!(f, "]")
    }
}
