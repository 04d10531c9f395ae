use super::cost::Cost;
use super::graph::SearchGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, hash::Hash};

const FRONTIER_CAPACITY: usize = 1024;

struct FrontierEntry<N, C> {
    estimate: C,
    node: N,
}

impl<N, C: Ord> PartialEq for FrontierEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate
    }
}

impl<N, C: Ord> Eq for FrontierEntry<N, C> {}

impl<N, C: Ord> PartialOrd for FrontierEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for FrontierEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other.estimate.cmp(&self.estimate)
    }
}

/// Result of pulling the next node off the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<N> {
    /// A node that was just finalized.
    Node(N),
    /// The cheapest remaining estimate reached the cost budget.
    Cutoff,
    /// Nothing left to explore.
    Exhausted,
}

impl<N> Step<N> {
    pub fn into_node(self) -> Option<N> {
        match self {
            Step::Node(node) => Some(node),
            Step::Cutoff | Step::Exhausted => None,
        }
    }
}

/// Working set of one directional search.
///
/// The frontier never has keys decreased. A cheaper path to a node pushes a
/// second entry, and whichever entry is popped later is discarded because
/// the node is already finalized by then.
pub struct SearchState<N, C> {
    frontier: BinaryHeap<FrontierEntry<N, C>>,
    best_paths: FxHashMap<N, (C, N)>,
    visited: FxHashSet<N>,
}

impl<N, C> Default for SearchState<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, C> SearchState<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
{
    pub fn new() -> Self {
        Self {
            frontier: BinaryHeap::with_capacity(FRONTIER_CAPACITY),
            best_paths: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    /// Starts a new search from `start`. `initial_cost` is the frontier
    /// priority of the start node, normally its heuristic estimate.
    pub fn reset(&mut self, start: N, initial_cost: C) {
        self.visited.clear();
        self.best_paths.clear();
        self.frontier.clear();
        self.frontier.reserve(FRONTIER_CAPACITY);

        self.best_paths.insert(start.clone(), (C::ZERO, start.clone()));
        self.frontier.push(FrontierEntry {
            estimate: initial_cost,
            node: start,
        });
    }

    /// Pops frontier entries until one names a node that is not finalized
    /// yet, finalizes it and returns it.
    pub fn pop_next(&mut self, max_cost: C) -> Step<N> {
        while let Some(FrontierEntry { estimate, node }) = self.frontier.pop() {
            if estimate >= max_cost {
                return Step::Cutoff;
            }

            if !self.visited.insert(node.clone()) {
                continue;
            }

            return Step::Node(node);
        }

        Step::Exhausted
    }

    /// Like [`pop_next`](Self::pop_next), folding cutoff and exhaustion
    /// into `None`.
    pub fn get_next(&mut self, max_cost: C) -> Option<N> {
        self.pop_next(max_cost).into_node()
    }

    /// Relaxes every neighbor of the finalized node `current`.
    ///
    /// `heuristic` estimates the remaining cost from a node to wherever this
    /// search is heading.
    pub fn generate_neighbors<G, H>(&mut self, current: &N, graph: &G, heuristic: H)
    where
        G: SearchGraph<N, Cost = C>,
        H: Fn(&N) -> C,
    {
        let Some((current_cost, parent)) = self.best_paths.get(current).cloned() else {
            return;
        };

        graph.neighbors(&parent, current, &mut |neighbor| {
            self.visit_neighbor(neighbor, current, current_cost, graph, &heuristic);
        });
    }

    fn visit_neighbor<G, H>(
        &mut self,
        neighbor: N,
        current: &N,
        current_cost: C,
        graph: &G,
        heuristic: &H,
    ) where
        G: SearchGraph<N, Cost = C>,
        H: Fn(&N) -> C,
    {
        if self.visited.contains(&neighbor) {
            return;
        }

        // An impassable node stays impassable from every direction.
        let Some(state_cost) = graph.state_cost(&neighbor) else {
            self.visited.insert(neighbor);
            return;
        };

        // A blocked edge says nothing about other ways into the neighbor.
        let Some(transition_cost) = graph.transition_cost(current, &neighbor) else {
            return;
        };

        let new_cost = current_cost + state_cost + transition_cost;
        let best_cost = self
            .best_paths
            .get(&neighbor)
            .map_or(C::INFINITY, |&(cost, _)| cost);

        if new_cost >= best_cost {
            return;
        }

        self.best_paths
            .insert(neighbor.clone(), (new_cost, current.clone()));
        self.frontier.push(FrontierEntry {
            estimate: new_cost + heuristic(&neighbor),
            node: neighbor,
        });
    }

    pub fn has_path_to(&self, node: &N) -> bool {
        self.best_paths.contains_key(node)
    }

    /// Best known cost from the start to `node`, if it was ever reached.
    pub fn path_cost(&self, node: &N) -> Option<C> {
        self.best_paths.get(node).map(|&(cost, _)| cost)
    }

    /// Nodes from the start to `node`, excluding the start itself. Empty if
    /// `node` was never reached or is the start.
    pub fn path_to(&self, node: &N) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = node;

        while let Some((_, parent)) = self.best_paths.get(current) {
            if parent == current {
                break;
            }
            path.push(current.clone());
            current = parent;
        }

        path.reverse();
        path
    }

    pub fn is_finalized(&self, node: &N) -> bool {
        self.visited.contains(node)
    }

    /// Number of finalized nodes, impassable neighbors included.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
