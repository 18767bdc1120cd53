//! # VF2 Isomorphism
//!
//! Enumerate the isomorphisms between two graphs, or the embeddings of one graph into another,
//! with the VF2 algorithm of Cordella, Foggia, Sansone and Vento.
//!
//! A mapping sends each vertex of the second graph to a distinct vertex of the first so that
//! edges (and, since subgraphs are *induced*, non-edges) between mapped vertices agree, and
//! node and edge weights satisfy caller-supplied equality rules. Matching a graph against
//! itself enumerates its automorphisms.
//!
//! ```rust
//! use vf2_isomorphism::prelude::*;
//!
//! // 1 ---> 2 <--- 3
//! let mut g: Graph<u32, ()> = Graph::directed();
//! let v1 = g.new_node(1);
//! let v2 = g.new_node(2);
//! let v3 = g.new_node(3);
//! g.add_edge(v1, v2);
//! g.add_edge(v3, v2);
//!
//! let inspector = Vf2Inspector::isomorphism(&g, &g);
//! let mut found: Vec<String> = inspector.mappings().map(|m| m.to_string()).collect();
//! found.sort();
//! assert_eq!(found, vec!["[1=1 2=2 3=3]", "[1=3 2=2 3=1]"]);
//! ```
//!
//! # Structure
//!
//! The search only sees graphs through a [`GraphOrdering`](crate::ordering::GraphOrdering),
//! which numbers vertices `0..n` and precomputes adjacency by index.
//! A single [`Vf2State`](crate::state::Vf2State) is then grown and shrunk in place as the
//! search descends and backtracks, with the pruning rules of
//! [`MatchMode`](crate::feasibility::MatchMode) deciding which pairs may be added.
//! [`Vf2Inspector::mappings`](crate::search::Vf2Inspector::mappings) drives the state lazily,
//! producing one [`GraphMapping`](crate::mapping::GraphMapping) at a time.
//!
//! Graphs must not change while a search over them is alive.

pub mod error;
pub mod graph;
pub mod ordering;

pub mod feasibility;
pub mod state;

pub mod mapping;
pub mod search;
pub mod trace;

pub mod prelude {
    //! The types needed to run a search.
    pub use crate::error::OrderingError;
    pub use crate::feasibility::MatchMode;
    pub use crate::graph::{EdgeId, Graph, GraphView, NodeId};
    pub use crate::mapping::GraphMapping;
    pub use crate::ordering::GraphOrdering;
    pub use crate::search::{is_isomorphic, is_subgraph_isomorphic, Mappings, Vf2Inspector};
    pub use crate::trace::{MatchEvent, MatchTrace, NoopTrace};
}
