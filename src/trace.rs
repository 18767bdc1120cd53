//! Hooks for observing a search as it runs.
//!
//! Indices in events are [`crate::ordering::GraphOrdering`] indices: `host` is a vertex of the
//! first graph, `pattern` a vertex of the second, and `depth` the number of pairs matched when
//! the event fired.

pub trait MatchTrace {
    fn on_event(&self, _event: MatchEvent) {}
}

pub struct NoopTrace;

impl MatchTrace for NoopTrace {}

pub(crate) static NOOP_TRACE: NoopTrace = NoopTrace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// A pair was proposed by the candidate generator.
    Candidate {
        host: usize,
        pattern: usize,
        depth: usize,
    },
    /// A proposed pair failed the feasibility check.
    Prune {
        host: usize,
        pattern: usize,
        reason: &'static str,
        depth: usize,
    },
    /// A pair was committed to the mapping.
    Extend {
        host: usize,
        pattern: usize,
        depth: usize,
    },
    /// A committed pair was removed again.
    Backtrack {
        host: usize,
        pattern: usize,
        depth: usize,
    },
    /// A complete mapping was produced.
    Solution { depth: usize },
    /// The search space is empty or used up.
    Exhausted,
}
