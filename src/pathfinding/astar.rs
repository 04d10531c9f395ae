use super::cost::Cost;
use super::graph::SearchGraph;
use super::outcome::SearchOutcome;
use super::state::{SearchState, Step};
use std::hash::Hash;
use tracing::debug;

/// Single-direction A* search. Reusable: every query starts from a reset
/// state while keeping the frontier's allocation.
pub struct AStar<N, C> {
    state: SearchState<N, C>,
}

impl<N, C> Default for AStar<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> AStar<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    pub fn new() -> Self {
        Self {
            state: SearchState::new(),
        }
    }

    /// Path from `from` to `to` (start excluded, goal included), or an
    /// empty path when none exists within `max_cost`.
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
            debug!("unidirectional search skipped: endpoint impassable");
            return SearchOutcome::EndpointBlocked;
        }

        let initial_cost = graph.heuristic(&from, &to);
        self.state.reset(from, initial_cost);

        let outcome = loop {
            let current = match self.state.pop_next(max_cost) {
                Step::Node(node) => node,
                Step::Cutoff => break SearchOutcome::BudgetExhausted,
                Step::Exhausted => break SearchOutcome::Unreachable,
            };

            if current == to {
                break SearchOutcome::Found {
                    path: self.state.path_to(&to),
                    cost: self.state.path_cost(&to).unwrap_or(C::ZERO),
                };
            }

            self.state
                .generate_neighbors(&current, graph, |node| graph.heuristic(node, &to));
        };

        debug!(
            outcome = outcome.as_str(),
            nodes_explored = self.state.visited_count(),
            "unidirectional search finished"
        );
        outcome
    }

    /// Nodes finalized by the last search.
    pub fn nodes_explored(&self) -> usize {
        self.state.visited_count()
    }

    pub fn state(&self) -> &SearchState<N, C> {
        &self.state
    }
}
