use crate::pathfinding::{SearchGraph, SearchOutcome};
use crate::search_config::{Algorithm, SearchConfig};
use serde::Serialize;
use std::{hash::Hash, time::Instant};

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult<C> {
    pub algorithm: Algorithm,
    pub outcome: &'static str,
    pub path_cost: Option<C>,
    pub path_length: usize,
    pub nodes_explored: usize,
    pub total_time_us: u128,
}

impl<N, C: Copy> From<(Algorithm, &SearchOutcome<N, C>, usize, u128)> for BenchmarkResult<C> {
    fn from(
        (algorithm, outcome, nodes_explored, total_time_us): (
            Algorithm,
            &SearchOutcome<N, C>,
            usize,
            u128,
        ),
    ) -> Self {
        let path_length = match outcome {
            SearchOutcome::Found { path, .. } => path.len(),
            _ => 0,
        };

        Self {
            algorithm,
            outcome: outcome.as_str(),
            path_cost: outcome.cost().copied(),
            path_length,
            nodes_explored,
            total_time_us,
        }
    }
}

/// Runs the same query through both pathfinders, each on a fresh instance.
pub fn compare_algorithms<N, G>(
    graph: &G,
    from: N,
    to: N,
    max_cost: G::Cost,
) -> Vec<BenchmarkResult<G::Cost>>
where
    N: Clone + Eq + Hash,
    G: SearchGraph<N>,
{
    [Algorithm::Unidirectional, Algorithm::Bidirectional]
        .into_iter()
        .map(|algorithm| {
            let config = SearchConfig::new(max_cost, algorithm);
            let search_timer = Instant::now();
            let (outcome, nodes_explored) = config.run(from.clone(), to.clone(), graph);
            let elapsed = search_timer.elapsed().as_micros();
            BenchmarkResult::from((algorithm, &outcome, nodes_explored, elapsed))
        })
        .collect()
}

pub fn format_table<C: std::fmt::Debug>(results: &[BenchmarkResult<C>]) -> String {
    let mut table = format!(
        "{:<16} {:<18} {:>8} {:>8} {:>10} {:>10}\n",
        "algorithm", "outcome", "cost", "length", "explored", "time (us)"
    );

    for result in results {
        let cost = result
            .path_cost
            .as_ref()
            .map_or_else(|| "-".to_string(), |cost| format!("{cost:?}"));
        table.push_str(&format!(
            "{:<16} {:<18} {:>8} {:>8} {:>10} {:>10}\n",
            result.algorithm.as_str(),
            result.outcome,
            cost,
            result.path_length,
            result.nodes_explored,
            result.total_time_us
        ));
    }

    table
}
