//! Pruning rules for candidate pairs.
//!
//! Both modes share the same checks and differ only in how the counts of a pair's unmatched
//! neighbours must compare: a full isomorphism needs them equal, a subgraph isomorphism only
//! needs the first graph to offer at least as many as the second requires.
//!
//! Subgraph matching here is *induced*: an edge between two matched vertices of the first graph
//! must exist between their counterparts in the second graph too.
use std::collections::VecDeque;

use tracing::trace;

use crate::graph::GraphView;
use crate::ordering::GraphOrdering;
use crate::state::{CandidateSet, Candidates, Terminals, Vf2State};
use crate::trace::MatchEvent;

/// What kind of mapping a search looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// A bijection between the vertices of both graphs preserving adjacency and non-adjacency.
    Isomorphism,
    /// An injection of the second graph's vertices into the first graph, onto an induced
    /// subgraph.
    Subgraph,
}

impl MatchMode {
    /// Cheap necessary condition on graph sizes, checked before any search is run.
    pub fn sizes_compatible<G: GraphView>(
        self,
        g1: &GraphOrdering<'_, G>,
        g2: &GraphOrdering<'_, G>,
    ) -> bool {
        match self {
            MatchMode::Isomorphism => {
                g1.vertex_count() == g2.vertex_count() && g1.edge_count() == g2.edge_count()
            }
            MatchMode::Subgraph => {
                g2.vertex_count() <= g1.vertex_count() && g2.edge_count() <= g1.edge_count()
            }
        }
    }

    fn admits(self, host: &Tally, pattern: &Tally) -> bool {
        match self {
            MatchMode::Isomorphism => host == pattern,
            MatchMode::Subgraph => {
                host.term_in >= pattern.term_in
                    && host.term_out >= pattern.term_out
                    && host.new >= pattern.new
            }
        }
    }
}

/// `(first graph, second graph)` tallies for one direction.
type Tallies = (Tally, Tally);

/// Unmatched neighbours of a vertex in one direction, by terminal-set membership.
/// A vertex stamped both ways counts toward both `term_in` and `term_out`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    term_in: usize,
    term_out: usize,
    new: usize,
}

impl Tally {
    fn count(&mut self, side: &Terminals, v: usize) {
        let (i, o) = (side.ins[v], side.outs[v]);
        if i > 0 {
            self.term_in += 1;
        }
        if o > 0 {
            self.term_out += 1;
        }
        if i == 0 && o == 0 {
            self.new += 1;
        }
    }
}

impl<'a, G: GraphView> Vf2State<'a, G> {
    /// Decide whether the current candidate pair can extend the mapping.
    ///
    /// On success the candidates for the level below are chosen as well, and handed down by
    /// the following [`Vf2State::add_pair`].
    ///
    /// # Panics
    ///
    /// If there is no candidate pair.
    pub fn is_feasible_pair(&mut self) -> bool {
        let (v1, v2) = self
            .candidate()
            .expect("is_feasible_pair called without a candidate pair");
        self.next_candidates = CandidateSet::default();

        match self.check(v1, v2) {
            Ok((pred, succ)) => {
                self.next_candidates = self.select_candidates(v1, v2, &pred, &succ);
                trace!(
                    depth = self.core_len,
                    host = v1,
                    pattern = v2,
                    next = ?self.next_candidates.from,
                    "pair fits"
                );
                true
            }
            Err(reason) => {
                trace!(
                    depth = self.core_len,
                    host = v1,
                    pattern = v2,
                    reason,
                    "pair does not fit the current matching"
                );
                self.trace.on_event(MatchEvent::Prune {
                    host: v1,
                    pattern: v2,
                    reason,
                    depth: self.core_len,
                });
                false
            }
        }
    }

    /// Returns the `(host, pattern)` tallies of predecessors and successors, or why the pair
    /// was rejected.
    fn check(&self, v1: usize, v2: usize) -> Result<(Tallies, Tallies), &'static str> {
        if !(self.node_match)(self.g1.node_weight_at(v1), self.g2.node_weight_at(v2)) {
            return Err("node_mismatch");
        }
        if !self.loops_agree(v1, v2) {
            return Err("self_loop_mismatch");
        }

        let (mut succ1, mut succ2) = (Tally::default(), Tally::default());

        for &other2 in self.g2.succs(v2) {
            if other2 == v2 {
                continue;
            }
            match self.t2.core[other2] {
                Some(other1) if !self.g1.contains_edge(v1, other1) => {
                    return Err("successor_missing_in_first_graph");
                }
                Some(_) => {}
                None => succ2.count(&self.t2, other2),
            }
        }

        for &other1 in self.g1.succs(v1) {
            if other1 == v1 {
                continue;
            }
            match self.t1.core[other1] {
                Some(other2) if !self.edges_agree((v1, other1), (v2, other2)) => {
                    return Err("successor_missing_in_second_graph");
                }
                Some(_) => {}
                None => succ1.count(&self.t1, other1),
            }
        }

        if !self.mode.admits(&succ1, &succ2) {
            return Err("successor_terminal_counts");
        }

        let (mut pred1, mut pred2) = (Tally::default(), Tally::default());

        for &other2 in self.g2.preds(v2) {
            if other2 == v2 {
                continue;
            }
            match self.t2.core[other2] {
                Some(other1) if !self.g1.contains_edge(other1, v1) => {
                    return Err("predecessor_missing_in_first_graph");
                }
                Some(_) => {}
                None => pred2.count(&self.t2, other2),
            }
        }

        for &other1 in self.g1.preds(v1) {
            if other1 == v1 {
                continue;
            }
            match self.t1.core[other1] {
                Some(other2) if !self.edges_agree((other1, v1), (other2, v2)) => {
                    return Err("predecessor_missing_in_second_graph");
                }
                Some(_) => {}
                None => pred1.count(&self.t1, other1),
            }
        }

        if !self.mode.admits(&pred1, &pred2) {
            return Err("predecessor_terminal_counts");
        }

        Ok(((pred1, pred2), (succ1, succ2)))
    }

    /// Both edges exist and their weights match.
    fn edges_agree(&self, (a1, b1): (usize, usize), (a2, b2): (usize, usize)) -> bool {
        match (self.g1.edge_at(a1, b1), self.g2.edge_at(a2, b2)) {
            (Some(e1), Some(e2)) => (self.edge_match)(
                self.g1.graph().edge_weight(e1),
                self.g2.graph().edge_weight(e2),
            ),
            _ => false,
        }
    }

    /// A loop on either vertex must be matched by a loop on the other.
    fn loops_agree(&self, v1: usize, v2: usize) -> bool {
        match (self.g1.contains_edge(v1, v1), self.g2.contains_edge(v2, v2)) {
            (false, false) => true,
            (true, true) => self.edges_agree((v1, v1), (v2, v2)),
            _ => false,
        }
    }

    /// Pick the neighbourhood of `(v1, v2)` with the fewest first-graph candidates.
    ///
    /// Categories are tried in the order in-pred, in-succ, out-pred, out-succ, new-succ,
    /// new-pred, and a later one only wins with a strictly smaller count. A category is only
    /// eligible if the second graph has a vertex in it; the first graph then has at least as
    /// many, so every eligible count is non-zero.
    fn select_candidates(
        &self,
        v1: usize,
        v2: usize,
        (pred1, pred2): &Tallies,
        (succ1, succ2): &Tallies,
    ) -> CandidateSet {
        let categories = [
            (Candidates::InPred, pred1.term_in, pred2.term_in),
            (Candidates::InSucc, succ1.term_in, succ2.term_in),
            (Candidates::OutPred, pred1.term_out, pred2.term_out),
            (Candidates::OutSucc, succ1.term_out, succ2.term_out),
            (Candidates::NewSucc, succ1.new, succ2.new),
            (Candidates::NewPred, pred1.new, pred2.new),
        ];

        let mut best: Option<(Candidates, usize)> = None;
        for (from, host, pattern) in categories {
            if pattern > 0 && best.map_or(true, |(_, min)| host < min) {
                best = Some((from, host));
            }
        }

        let Some((from, _)) = best else {
            return CandidateSet::default();
        };

        let (neighbors1, neighbors2) = if from.is_pred() {
            (self.g1.preds(v1), self.g2.preds(v2))
        } else {
            (self.g1.succs(v1), self.g2.succs(v2))
        };

        let in_category = |side: &Terminals, v: usize, other: usize| {
            other != v && !side.is_matched(other) && from.admits(side.ins[other], side.outs[other])
        };

        let hosts: VecDeque<usize> = neighbors1
            .iter()
            .copied()
            .filter(|&other| in_category(&self.t1, v1, other))
            .collect();
        let pattern = neighbors2
            .iter()
            .copied()
            .find(|&other| in_category(&self.t2, v2, other));

        CandidateSet {
            from,
            hosts,
            pattern,
        }
    }
}
