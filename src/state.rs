//! The VF2 search state.
//!
//! A [`Vf2State`] is one mutable node of the search tree. The driver walks the tree by calling
//! [`Vf2State::next_pair`], [`Vf2State::is_feasible_pair`] and [`Vf2State::add_pair`] on the way
//! down and [`Vf2State::backtrack`] on the way up; nothing is ever copied.
//!
//! Terminal sets are not stored as sets. Each vertex instead carries two *generation stamps*,
//! one for the in-terminal set and one for the out-terminal set, holding the depth at which it
//! joined that set (zero if it has not). Undoing a step then only needs to clear the stamps
//! equal to the current depth, and only around the vertex being removed.
use std::collections::VecDeque;

use tracing::trace;

use crate::feasibility::MatchMode;
use crate::graph::GraphView;
use crate::mapping::GraphMapping;
use crate::ordering::GraphOrdering;
use crate::trace::{MatchEvent, MatchTrace};

/// Semantic equality on node weights: `(first graph weight, second graph weight)`.
pub type NodeMatch<'a, W> = dyn Fn(&W, &W) -> bool + 'a;

/// Semantic equality on edge weights: `(first graph weight, second graph weight)`.
pub type EdgeMatch<'a, W> = dyn Fn(&W, &W) -> bool + 'a;

/// Where the candidates for the next level come from, relative to the pair just added.
///
/// `All` means no neighbourhood of the last pair is usable and the whole frontier is scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Candidates {
    #[default]
    All,
    InPred,
    OutPred,
    InSucc,
    OutSucc,
    NewPred,
    NewSucc,
}

impl Candidates {
    /// Whether the category is drawn from predecessors (rather than successors).
    pub(crate) fn is_pred(self) -> bool {
        matches!(
            self,
            Candidates::InPred | Candidates::OutPred | Candidates::NewPred
        )
    }

    /// Whether an unmatched vertex with these stamps belongs to the category.
    pub(crate) fn admits(self, in_stamp: usize, out_stamp: usize) -> bool {
        match self {
            Candidates::All => true,
            Candidates::InPred | Candidates::InSucc => in_stamp > 0,
            Candidates::OutPred | Candidates::OutSucc => out_stamp > 0,
            Candidates::NewPred | Candidates::NewSucc => in_stamp == 0 && out_stamp == 0,
        }
    }
}

/// Candidate pairs handed from a feasibility check to the level it opens:
/// every vertex of `hosts` is tried against the single `pattern` vertex.
#[derive(Debug, Default)]
pub(crate) struct CandidateSet {
    pub(crate) from: Candidates,
    pub(crate) hosts: VecDeque<usize>,
    pub(crate) pattern: Option<usize>,
}

/// Per-level bookkeeping. `frames[d]` belongs to the level where `d` pairs are matched.
#[derive(Debug, Default)]
struct Frame {
    memo: CandidateSet,
    /// The pair under consideration at this level; once the level is extended, the pair
    /// that was committed.
    cursor: Option<(usize, usize)>,
}

/// Which part of the frontier the full scan draws from, most constrained first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frontier {
    Both,
    Out,
    In,
    Any,
}

impl Frontier {
    fn admits(self, side: &Terminals, v: usize) -> bool {
        side.core[v].is_none()
            && match self {
                Frontier::Both => side.ins[v] > 0 && side.outs[v] > 0,
                Frontier::Out => side.outs[v] > 0,
                Frontier::In => side.ins[v] > 0,
                Frontier::Any => true,
            }
    }
}

/// Mapping and terminal-set stamps for one of the two graphs.
#[derive(Debug, Clone)]
pub(crate) struct Terminals {
    /// `core[v] = Some(u)` when `v` is matched to vertex `u` of the other graph.
    pub(crate) core: Vec<Option<usize>>,
    pub(crate) ins: Vec<usize>,
    pub(crate) outs: Vec<usize>,
    in_len: usize,
    out_len: usize,
    both_len: usize,
}

impl Terminals {
    fn new(n: usize) -> Self {
        Terminals {
            core: vec![None; n],
            ins: vec![0; n],
            outs: vec![0; n],
            in_len: 0,
            out_len: 0,
            both_len: 0,
        }
    }

    fn stamp_in(&mut self, v: usize, depth: usize) {
        if self.ins[v] == 0 {
            self.ins[v] = depth;
            self.in_len += 1;
            if self.outs[v] > 0 {
                self.both_len += 1;
            }
        }
    }

    fn stamp_out(&mut self, v: usize, depth: usize) {
        if self.outs[v] == 0 {
            self.outs[v] = depth;
            self.out_len += 1;
            if self.ins[v] > 0 {
                self.both_len += 1;
            }
        }
    }

    fn unstamp_in(&mut self, v: usize, depth: usize) {
        if self.ins[v] == depth {
            self.ins[v] = 0;
            self.in_len -= 1;
            if self.outs[v] > 0 {
                self.both_len -= 1;
            }
        }
    }

    fn unstamp_out(&mut self, v: usize, depth: usize) {
        if self.outs[v] == depth {
            self.outs[v] = 0;
            self.out_len -= 1;
            if self.ins[v] > 0 {
                self.both_len -= 1;
            }
        }
    }

    /// Match `v` to `partner` at `depth`, pulling `v` and its neighbours into the terminal sets.
    fn extend<G: GraphView>(
        &mut self,
        graph: &GraphOrdering<'_, G>,
        v: usize,
        partner: usize,
        depth: usize,
    ) {
        self.stamp_in(v, depth);
        self.stamp_out(v, depth);
        self.core[v] = Some(partner);
        for &other in graph.preds(v) {
            self.stamp_in(other, depth);
        }
        for &other in graph.succs(v) {
            self.stamp_out(other, depth);
        }
    }

    /// Undo [`Terminals::extend`]. Stamps from shallower depths stay: those vertices are still
    /// adjacent to a matched vertex.
    fn retract<G: GraphView>(&mut self, graph: &GraphOrdering<'_, G>, v: usize, depth: usize) {
        self.unstamp_in(v, depth);
        for &other in graph.preds(v) {
            self.unstamp_in(other, depth);
        }
        self.unstamp_out(v, depth);
        for &other in graph.succs(v) {
            self.unstamp_out(other, depth);
        }
        self.core[v] = None;
    }

    pub(crate) fn is_matched(&self, v: usize) -> bool {
        self.core[v].is_some()
    }
}

/// The VF2 state for matching the second graph into the first.
///
/// A state is owned by exactly one search; independent searches over the same orderings each
/// build their own.
pub struct Vf2State<'a, G: GraphView> {
    pub(crate) g1: &'a GraphOrdering<'a, G>,
    pub(crate) g2: &'a GraphOrdering<'a, G>,
    pub(crate) mode: MatchMode,
    pub(crate) node_match: &'a NodeMatch<'a, G::NodeWeight>,
    pub(crate) edge_match: &'a EdgeMatch<'a, G::EdgeWeight>,
    pub(crate) trace: &'a dyn MatchTrace,

    pub(crate) t1: Terminals,
    pub(crate) t2: Terminals,
    pub(crate) core_len: usize,

    frames: Vec<Frame>,
    /// Candidates chosen by the last successful feasibility check, handed to the next level
    /// when that pair is added.
    pub(crate) next_candidates: CandidateSet,
}

impl<'a, G: GraphView> Vf2State<'a, G> {
    pub fn new(
        g1: &'a GraphOrdering<'a, G>,
        g2: &'a GraphOrdering<'a, G>,
        mode: MatchMode,
        node_match: &'a NodeMatch<'a, G::NodeWeight>,
        edge_match: &'a EdgeMatch<'a, G::EdgeWeight>,
        trace: &'a dyn MatchTrace,
    ) -> Self {
        Vf2State {
            g1,
            g2,
            mode,
            node_match,
            edge_match,
            trace,
            t1: Terminals::new(g1.vertex_count()),
            t2: Terminals::new(g2.vertex_count()),
            core_len: 0,
            frames: vec![Frame::default()],
            next_candidates: CandidateSet::default(),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Number of matched pairs, i.e. the current search depth.
    pub fn core_len(&self) -> usize {
        self.core_len
    }

    /// The pair under consideration, as `(first graph index, second graph index)`.
    pub fn candidate(&self) -> Option<(usize, usize)> {
        self.top().cursor
    }

    /// `true` when every vertex of the second graph is matched.
    pub fn is_goal(&self) -> bool {
        self.core_len == self.g2.vertex_count()
    }

    /// Whether the graph sizes allow any mapping at all in this state's mode.
    pub fn sizes_compatible(&self) -> bool {
        self.mode.sizes_compatible(self.g1, self.g2)
    }

    /// Advance to the next untried candidate pair at the current depth.
    ///
    /// Returns `false`, leaving no candidate, once this level has nothing left to offer.
    pub fn next_pair(&mut self) -> bool {
        let (from, cursor) = {
            let frame = self.top();
            (frame.memo.from, frame.cursor)
        };

        let next = if from != Candidates::All {
            let memo = &mut self.top_mut().memo;
            match (memo.pattern, memo.hosts.pop_front()) {
                (Some(v2), Some(v1)) => Some((v1, v2)),
                _ => None,
            }
        } else {
            self.scan(cursor)
        };

        self.top_mut().cursor = next;
        match next {
            Some((host, pattern)) => {
                trace!(depth = self.core_len, host, pattern, "next candidate pair");
                self.trace.on_event(MatchEvent::Candidate {
                    host,
                    pattern,
                    depth: self.core_len,
                });
                true
            }
            None => {
                trace!(depth = self.core_len, "no more candidate pairs");
                false
            }
        }
    }

    /// Scan the frontier in index order, continuing after `cursor`.
    ///
    /// Only one vertex of the second graph is tried per level: the first unmatched one in the
    /// most constrained frontier that is non-empty in both graphs.
    fn scan(&self, cursor: Option<(usize, usize)>) -> Option<(usize, usize)> {
        let (n1, n2) = (self.g1.vertex_count(), self.g2.vertex_count());
        let (mut v1, mut v2) = match cursor {
            None => (0, 0),
            Some((v1, v2)) => (v1 + 1, v2),
        };

        let frontier = self.frontier();
        while v2 < n2 && !frontier.admits(&self.t2, v2) {
            v2 += 1;
            v1 = 0;
        }
        while v1 < n1 && !frontier.admits(&self.t1, v1) {
            v1 += 1;
        }

        (v1 < n1 && v2 < n2).then_some((v1, v2))
    }

    fn frontier(&self) -> Frontier {
        // Matched vertices are stamped in both directions, so each length exceeds `core_len`
        // exactly when some unmatched vertex is in that set.
        let len = self.core_len;
        if self.t1.both_len > len && self.t2.both_len > len {
            Frontier::Both
        } else if self.t1.out_len > len && self.t2.out_len > len {
            Frontier::Out
        } else if self.t1.in_len > len && self.t2.in_len > len {
            Frontier::In
        } else {
            Frontier::Any
        }
    }

    /// Commit the current candidate pair and open the next level.
    ///
    /// # Panics
    ///
    /// If there is no candidate pair.
    pub fn add_pair(&mut self) {
        let (v1, v2) = self
            .top()
            .cursor
            .expect("add_pair called without a candidate pair");

        self.core_len += 1;
        let depth = self.core_len;
        self.t1.extend(self.g1, v1, v2, depth);
        self.t2.extend(self.g2, v2, v1, depth);

        let memo = std::mem::take(&mut self.next_candidates);
        self.frames.push(Frame { memo, cursor: None });

        trace!(depth, host = v1, pattern = v2, "pair added");
        self.trace.on_event(MatchEvent::Extend {
            host: v1,
            pattern: v2,
            depth,
        });
    }

    /// Undo the last [`Vf2State::add_pair`], returning to the level it was made from with the
    /// removed pair as that level's cursor.
    ///
    /// # Panics
    ///
    /// If no pair is matched.
    pub fn backtrack(&mut self) {
        assert!(self.core_len > 0, "backtrack called on an empty matching");
        self.frames.pop();
        let (v1, v2) = self
            .top()
            .cursor
            .expect("a matched level always records the pair it committed");

        let depth = self.core_len;
        self.t1.retract(self.g1, v1, depth);
        self.t2.retract(self.g2, v2, depth);
        self.core_len -= 1;

        trace!(depth, host = v1, pattern = v2, "pair removed");
        self.trace.on_event(MatchEvent::Backtrack {
            host: v1,
            pattern: v2,
            depth,
        });
    }

    /// Forget the current candidate so the next [`Vf2State::next_pair`] starts over.
    pub fn reset_add_vertices(&mut self) {
        self.top_mut().cursor = None;
    }

    /// Snapshot the current (possibly partial) mapping.
    pub fn current_mapping(&self) -> GraphMapping<'a, G> {
        GraphMapping::new(self.g1, self.g2, self.t1.core.clone(), self.t2.core.clone())
    }

    fn top(&self) -> &Frame {
        self.frames
            .last()
            .expect("the root frame is never popped")
    }

    fn top_mut(&mut self) -> &mut Frame {
        self.frames
            .last_mut()
            .expect("the root frame is never popped")
    }
}
