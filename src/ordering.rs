//! Dense integer indexing of a graph.
//!
//! A [`GraphOrdering`] numbers the vertices of a graph `0..n` in the order reported by
//! [`GraphView::node_ids`] and precomputes, for every index, the sorted lists of predecessor
//! and successor indices together with a table from index pairs to edges.
//! It is immutable once built, so one ordering can back any number of searches.
use std::collections::HashMap;

use crate::error::OrderingError;
use crate::graph::GraphView;

pub struct GraphOrdering<'g, G: GraphView> {
    graph: &'g G,
    vertices: Vec<G::NodeId>,
    index: HashMap<G::NodeId, usize>,
    edges: HashMap<(usize, usize), G::EdgeId>,
    edge_indices: HashMap<G::EdgeId, (usize, usize)>,
    in_neighbors: Vec<Vec<usize>>,
    out_neighbors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<'g, G: GraphView> GraphOrdering<'g, G> {
    /// Index `graph`.
    ///
    /// Parallel edges joining the same ordered pair (or, for undirected graphs, the same
    /// unordered pair) collapse onto the first such edge: the adapter models simple graphs.
    ///
    /// # Panics
    ///
    /// If an edge has an endpoint that [`GraphView::node_ids`] does not report.
    pub fn new(graph: &'g G) -> Self {
        let vertices: Vec<G::NodeId> = graph.node_ids().collect();
        let index: HashMap<G::NodeId, usize> =
            vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();

        let n = vertices.len();
        let directed = graph.is_directed();
        let mut in_neighbors = vec![Vec::new(); n];
        let mut out_neighbors = vec![Vec::new(); n];
        let mut edges = HashMap::new();
        let mut edge_indices = HashMap::new();
        let mut edge_count = 0;

        for e in graph.edge_ids() {
            let (s, t) = graph.endpoints(e);
            let (Some(&i), Some(&j)) = (index.get(&s), index.get(&t)) else {
                panic!(
                    "edge {e:?} joins {s:?} and {t:?}, which are not both nodes of the graph"
                );
            };
            edge_indices.insert(e, (i, j));
            if edges.contains_key(&(i, j)) {
                continue;
            }
            edge_count += 1;
            edges.insert((i, j), e);
            out_neighbors[i].push(j);
            in_neighbors[j].push(i);
            if !directed {
                edges.entry((j, i)).or_insert(e);
                out_neighbors[j].push(i);
                in_neighbors[i].push(j);
            }
        }

        for list in in_neighbors.iter_mut().chain(out_neighbors.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }

        GraphOrdering {
            graph,
            vertices,
            index,
            edges,
            edge_indices,
            in_neighbors,
            out_neighbors,
            edge_count,
        }
    }

    /// The graph this ordering was built from.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges after parallel edges have been collapsed.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertex(&self, index: usize) -> Result<G::NodeId, OrderingError> {
        self.check(index)?;
        Ok(self.vertices[index])
    }

    pub fn index_of(&self, vertex: G::NodeId) -> Result<usize, OrderingError> {
        self.index
            .get(&vertex)
            .copied()
            .ok_or_else(|| OrderingError::UnknownVertex(format!("{vertex:?}")))
    }

    /// The edge from vertex `i` to vertex `j`, if there is one.
    pub fn edge(&self, i: usize, j: usize) -> Result<Option<G::EdgeId>, OrderingError> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.edges.get(&(i, j)).copied())
    }

    pub fn has_edge(&self, i: usize, j: usize) -> Result<bool, OrderingError> {
        Ok(self.edge(i, j)?.is_some())
    }

    /// The `(source, target)` indices of `edge`.
    pub fn edge_indices(&self, edge: G::EdgeId) -> Result<(usize, usize), OrderingError> {
        self.edge_indices
            .get(&edge)
            .copied()
            .ok_or_else(|| OrderingError::UnknownEdge(format!("{edge:?}")))
    }

    /// Indices of the vertices with an edge into `i`, ascending.
    pub fn in_neighbors(&self, i: usize) -> Result<&[usize], OrderingError> {
        self.check(i)?;
        Ok(&self.in_neighbors[i])
    }

    /// Indices of the vertices `i` has an edge into, ascending.
    pub fn out_neighbors(&self, i: usize) -> Result<&[usize], OrderingError> {
        self.check(i)?;
        Ok(&self.out_neighbors[i])
    }

    fn check(&self, index: usize) -> Result<(), OrderingError> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(OrderingError::VertexIndexOutOfRange {
                index,
                count: self.vertices.len(),
            })
        }
    }

    // Unchecked accessors for the search, which only ever holds in-range indices.

    pub(crate) fn preds(&self, i: usize) -> &[usize] {
        &self.in_neighbors[i]
    }

    pub(crate) fn succs(&self, i: usize) -> &[usize] {
        &self.out_neighbors[i]
    }

    pub(crate) fn contains_edge(&self, i: usize, j: usize) -> bool {
        self.edges.contains_key(&(i, j))
    }

    pub(crate) fn edge_at(&self, i: usize, j: usize) -> Option<G::EdgeId> {
        self.edges.get(&(i, j)).copied()
    }

    pub(crate) fn vertex_at(&self, index: usize) -> G::NodeId {
        self.vertices[index]
    }

    pub(crate) fn node_weight_at(&self, index: usize) -> &'g G::NodeWeight {
        self.graph.node_weight(self.vertices[index])
    }
}
