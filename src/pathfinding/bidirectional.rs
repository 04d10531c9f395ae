use super::cost::Cost;
use super::graph::{Reversed, SearchGraph, walk_cost};
use super::outcome::SearchOutcome;
use super::state::{SearchState, Step};
use std::hash::Hash;
use tracing::{debug, trace};

/// A* run from both ends at once, stopping as soon as the two searches
/// touch.
///
/// Each direction is limited to two thirds of the caller's budget. Two
/// halves would fail whenever one side advances faster than the other,
/// while the full budget on each side could stitch together a path close to
/// twice the budget. A stitched route that still costs `max_cost` or more
/// is reported as [`SearchOutcome::BudgetExhausted`].
pub struct BidirectionalAStar<N, C> {
    forward: SearchState<N, C>,
    backward: SearchState<N, C>,
}

impl<N, C> Default for BidirectionalAStar<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> BidirectionalAStar<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    pub fn new() -> Self {
        Self {
            forward: SearchState::new(),
            backward: SearchState::new(),
        }
    }

    pub fn find_path<G>(&mut self, max_cost: C, from: N, to: N, graph: &G) -> Vec<N>
    where
        G: SearchGraph<N, Cost = C>,
    {
        self.search(max_cost, from, to, graph).into_path()
    }

    pub fn search<G>(&mut self, max_cost: C, from: N, to: N, graph: &G) -> SearchOutcome<N, C>
    where
        G: SearchGraph<N, Cost = C>,
    {
        if graph.state_cost(&from).is_none() || graph.state_cost(&to).is_none() {
            debug!("bidirectional search skipped: endpoint impassable");
            return SearchOutcome::EndpointBlocked;
        }

        let partial_max_cost = max_cost.two_thirds();
        let reversed = Reversed::new(graph);

        self.forward
            .reset(from.clone(), graph.heuristic(&from, &to));
        self.backward
            .reset(to.clone(), graph.heuristic(&to, &from));

        let outcome = loop {
            let forward_step = self.forward.pop_next(partial_max_cost);
            let backward_step = self.backward.pop_next(partial_max_cost);

            let (forward_current, backward_current) = match (forward_step, backward_step) {
                (Step::Node(f), Step::Node(b)) => (f, b),
                (Step::Cutoff, _) | (_, Step::Cutoff) => break SearchOutcome::BudgetExhausted,
                _ => break SearchOutcome::Unreachable,
            };

            if let Some((midpoint, link_cost)) =
                self.meeting_point(forward_current.clone(), backward_current.clone())
            {
                trace!(?link_cost, "forward and backward searches met");
                let path = self.stitch_paths(&midpoint, &to);
                let cost = walk_cost(graph, &from, &path).unwrap_or(link_cost);
                // Each side stays under two thirds of the budget, so the
                // stitched route can still overshoot it.
                if cost >= max_cost {
                    break SearchOutcome::BudgetExhausted;
                }
                break SearchOutcome::Found { path, cost };
            }

            self.forward
                .generate_neighbors(&forward_current, graph, |node| graph.heuristic(node, &to));
            self.backward
                .generate_neighbors(&backward_current, &reversed, |node| {
                    graph.heuristic(node, &from)
                });
        };

        debug!(
            outcome = outcome.as_str(),
            nodes_explored = self.nodes_explored(),
            "bidirectional search finished"
        );
        outcome
    }

    /// Combined forward and backward cost through `node`, if both searches
    /// have reached it.
    fn link_cost(&self, node: &N) -> Option<C> {
        Some(self.forward.path_cost(node)? + self.backward.path_cost(node)?)
    }

    /// Picks the node this step's searches meet at. When both freshly
    /// finalized nodes link up, the cheaper one wins and ties go forward.
    fn meeting_point(&self, forward_current: N, backward_current: N) -> Option<(N, C)> {
        let forward_link = self.link_cost(&forward_current);
        let backward_link = self.link_cost(&backward_current);

        match (forward_link, backward_link) {
            (Some(f_cost), Some(b_cost)) if b_cost < f_cost => Some((backward_current, b_cost)),
            (Some(f_cost), _) => Some((forward_current, f_cost)),
            (None, Some(b_cost)) => Some((backward_current, b_cost)),
            (None, None) => None,
        }
    }

    fn stitch_paths(&self, midpoint: &N, to: &N) -> Vec<N> {
        let mut path = self.forward.path_to(midpoint);
        let mut backward_path = self.backward.path_to(midpoint);

        // The midpoint is the goal itself.
        if backward_path.is_empty() {
            return path;
        }

        // The backward search never lists its own start, the goal.
        backward_path.pop();
        path.extend(backward_path.into_iter().rev());
        path.push(to.clone());
        path
    }

    /// Nodes finalized by both directions during the last search.
    pub fn nodes_explored(&self) -> usize {
        self.forward.visited_count() + self.backward.visited_count()
    }

    pub fn forward_state(&self) -> &SearchState<N, C> {
        &self.forward
    }

    pub fn backward_state(&self) -> &SearchState<N, C> {
        &self.backward
    }
}
