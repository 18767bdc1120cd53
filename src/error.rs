//! Errors raised by the index adapter.
use thiserror::Error;

/// A lookup on a [`crate::ordering::GraphOrdering`] that falls outside the graph it was built from.
///
/// These are caller bugs rather than search outcomes: an empty set of mappings is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("vertex index {index} out of range for a graph with {count} vertices")]
    VertexIndexOutOfRange { index: usize, count: usize },

    #[error("vertex {0} does not belong to the graph")]
    UnknownVertex(String),

    #[error("edge {0} does not belong to the graph")]
    UnknownEdge(String),
}
