use crate::pathfinding::{AStar, BidirectionalAStar, Cost, SearchGraph, SearchOutcome};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Which pathfinder a search runs with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Unidirectional,
    Bidirectional,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Unidirectional => "unidirectional",
            Algorithm::Bidirectional => "bidirectional",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "bidirectional" | "bi" => Algorithm::Bidirectional,
            _ => Algorithm::Unidirectional,
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Algorithm::from(s.as_str())
    }
}

/// Configuration for a pathfinding query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig<C> {
    /// Searches give up once the cheapest estimate reaches this cost
    pub max_cost: C,
    pub algorithm: Algorithm,
}

impl<C: Cost> SearchConfig<C> {
    pub fn new(max_cost: C, algorithm: Algorithm) -> Self {
        Self {
            max_cost,
            algorithm,
        }
    }

    /// Runs a fresh pathfinder of the configured kind.
    pub fn run<N, G>(&self, from: N, to: N, graph: &G) -> (SearchOutcome<N, C>, usize)
    where
        N: Clone + Eq + Hash,
        G: SearchGraph<N, Cost = C>,
    {
        match self.algorithm {
            Algorithm::Unidirectional => {
                let mut astar = AStar::new();
                let outcome = astar.search(self.max_cost, from, to, graph);
                (outcome, astar.nodes_explored())
            }
            Algorithm::Bidirectional => {
                let mut astar = BidirectionalAStar::new();
                let outcome = astar.search(self.max_cost, from, to, graph);
                (outcome, astar.nodes_explored())
            }
        }
    }
}

impl<C: Cost> Default for SearchConfig<C> {
    fn default() -> Self {
        Self {
            max_cost: C::INFINITY,
            algorithm: Algorithm::default(),
        }
    }
}
