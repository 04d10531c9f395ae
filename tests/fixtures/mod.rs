#![allow(dead_code)]

use astar_pathfinding::{Grid, Point, SearchGraph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cell::RefCell;

/// Small hand-built graph over `char` nodes with a zero heuristic.
///
/// Every node costs 1 to enter unless weighted or walled off; every edge is
/// free unless priced or blocked.
#[derive(Default)]
pub struct EdgeGraph {
    edges: FxHashMap<char, Vec<char>>,
    walls: FxHashSet<char>,
    weights: FxHashMap<char, u32>,
    edge_costs: FxHashMap<(char, char), u32>,
    blocked_edges: FxHashSet<(char, char)>,
    pub neighbor_calls: RefCell<Vec<(char, char)>>,
}

impl EdgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Undirected edge.
    pub fn edge(mut self, a: char, b: char) -> Self {
        self.edges.entry(a).or_default().push(b);
        self.edges.entry(b).or_default().push(a);
        self
    }

    pub fn wall(mut self, node: char) -> Self {
        self.walls.insert(node);
        self
    }

    pub fn weight(mut self, node: char, cost: u32) -> Self {
        self.weights.insert(node, cost);
        self
    }

    /// Prices the directed edge `from -> to`.
    pub fn edge_cost(mut self, from: char, to: char, cost: u32) -> Self {
        self.edge_costs.insert((from, to), cost);
        self
    }

    /// Blocks the directed edge `from -> to`.
    pub fn block_edge(mut self, from: char, to: char) -> Self {
        self.blocked_edges.insert((from, to));
        self
    }
}

impl SearchGraph<char> for EdgeGraph {
    type Cost = u32;

    fn state_cost(&self, node: &char) -> Option<u32> {
        if self.walls.contains(node) {
            return None;
        }
        Some(self.weights.get(node).copied().unwrap_or(1))
    }

    fn transition_cost(&self, from: &char, to: &char) -> Option<u32> {
        if self.blocked_edges.contains(&(*from, *to)) {
            return None;
        }
        Some(self.edge_costs.get(&(*from, *to)).copied().unwrap_or(0))
    }

    fn heuristic(&self, _from: &char, _to: &char) -> u32 {
        0
    }

    fn neighbors(&self, parent: &char, current: &char, emit: &mut dyn FnMut(char)) {
        self.neighbor_calls.borrow_mut().push((*parent, *current));
        for &neighbor in self.edges.get(current).into_iter().flatten() {
            emit(neighbor);
        }
    }
}

/// A grid searched without a heuristic (plain Dijkstra).
pub struct ZeroHeuristic<'a>(pub &'a Grid);

impl SearchGraph<Point> for ZeroHeuristic<'_> {
    type Cost = u32;

    fn state_cost(&self, node: &Point) -> Option<u32> {
        self.0.state_cost(node)
    }

    fn transition_cost(&self, from: &Point, to: &Point) -> Option<u32> {
        self.0.transition_cost(from, to)
    }

    fn heuristic(&self, _from: &Point, _to: &Point) -> u32 {
        0
    }

    fn neighbors(&self, parent: &Point, current: &Point, emit: &mut dyn FnMut(Point)) {
        self.0.neighbors(parent, current, emit)
    }
}

pub fn point(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

pub fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Asserts that `path` is a walk of single steps from `from` ending at `to`.
pub fn assert_walk(from: Point, to: Point, path: &[Point], diagonal: bool) {
    let mut previous = from;
    for &step in path {
        let dx = previous.x.abs_diff(step.x);
        let dy = previous.y.abs_diff(step.y);
        let adjacent = if diagonal {
            dx.max(dy) == 1
        } else {
            dx + dy == 1
        };
        assert!(adjacent, "{previous} -> {step} is not a single step");
        previous = step;
    }
    assert_eq!(previous, to);
}
