//! The graphs a search runs over.
//!
//! The search engine never touches a graph directly: it reads it once through [`GraphView`]
//! when building a [`crate::ordering::GraphOrdering`], and only uses dense indices afterwards.
//! [`Graph`] is a small adjacency-list implementation for callers without a graph type of their
//! own.
use core::fmt::Debug;
use core::hash::Hash;

pub mod simple;

pub use simple::*;

/// Read-only access to a directed or undirected graph with weighted nodes and edges.
///
/// Node and edge handles must be stable for as long as a search over the graph is alive;
/// mutating a graph while one of its orderings is in use is not supported.
pub trait GraphView {
    type NodeId: Copy + Eq + Hash + Debug;
    type EdgeId: Copy + Eq + Hash + Debug;
    type NodeWeight;
    type EdgeWeight;

    /// Undirected edges are visible from both endpoints.
    fn is_directed(&self) -> bool;

    /// All nodes, in the order that determines their index.
    fn node_ids(&self) -> impl Iterator<Item = Self::NodeId> + '_;

    fn edge_ids(&self) -> impl Iterator<Item = Self::EdgeId> + '_;

    /// The `(source, target)` pair of an edge. For undirected graphs the order is arbitrary.
    fn endpoints(&self, edge: Self::EdgeId) -> (Self::NodeId, Self::NodeId);

    fn node_weight(&self, node: Self::NodeId) -> &Self::NodeWeight;

    fn edge_weight(&self, edge: Self::EdgeId) -> &Self::EdgeWeight;
}
