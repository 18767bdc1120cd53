use super::GraphView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A [`Graph`] stores node weights, edge weights and edge endpoints in flat vectors, indexed by
/// [`NodeId`] and [`EdgeId`] respectively.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    /// Node weights. Defines a finite map from [`NodeId`] to node weight
    pub nodes: Vec<N>,

    /// Edge weights. Defines a finite map from [`EdgeId`] to edge weight
    pub edges: Vec<E>,

    /// `(source, target)` of each edge, parallel to `edges`.
    pub adjacency: Vec<(NodeId, NodeId)>,

    directed: bool,
}

impl<N, E> Graph<N, E> {
    /// The empty directed graph.
    pub fn directed() -> Self {
        Graph {
            nodes: vec![],
            edges: vec![],
            adjacency: vec![],
            directed: true,
        }
    }

    /// The empty undirected graph.
    pub fn undirected() -> Self {
        Graph {
            directed: false,
            ..Self::directed()
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Add a single node weighted `w` to the [`Graph`]
    pub fn new_node(&mut self, w: N) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(w);
        NodeId(index)
    }

    /// Add an edge weighted `w` from `source` to `target`, returning its [`EdgeId`].
    ///
    /// # Panics
    ///
    /// If either endpoint is not a node of this graph.
    pub fn new_edge(&mut self, source: NodeId, target: NodeId, w: E) -> EdgeId {
        assert!(
            source.0 < self.nodes.len() && target.0 < self.nodes.len(),
            "edge ({}, {}) refers to a missing node",
            source.0,
            target.0
        );
        let edge_idx = self.edges.len();
        self.edges.push(w);
        self.adjacency.push((source, target));
        EdgeId(edge_idx)
    }

    /// The first edge joining `source` to `target`, if any.
    /// In an undirected graph the endpoints may be given in either order.
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.adjacency
            .iter()
            .position(|&(s, t)| {
                (s == source && t == target) || (!self.directed && s == target && t == source)
            })
            .map(EdgeId)
    }

    pub fn contains_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.find_edge(source, target).is_some()
    }
}

impl<N> Graph<N, ()> {
    /// Add an unweighted edge.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.new_edge(source, target, ())
    }
}

impl<N, E> GraphView for Graph<N, E> {
    type NodeId = NodeId;
    type EdgeId = EdgeId;
    type NodeWeight = N;
    type EdgeWeight = E;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.adjacency[edge.0]
    }

    fn node_weight(&self, node: NodeId) -> &N {
        &self.nodes[node.0]
    }

    fn edge_weight(&self, edge: EdgeId) -> &E {
        &self.edges[edge.0]
    }
}
