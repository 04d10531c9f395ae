//! Tile maps as search graphs.
//!
//! Entering a tile costs the tile's terrain cost and moving between tiles is
//! free, so with every tile costing at least 1 the Manhattan distance (or
//! Chebyshev distance with diagonals) never overestimates.

pub mod parsing;

pub use parsing::GridError;

use crate::pathfinding::SearchGraph;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// Orthogonal steps first, then diagonals.
const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidPoint(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor(u8),
    Wall,
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    start: Option<Point>,
    goal: Option<Point>,
    diagonal: bool,
}

impl Grid {
    /// An open `width` x `height` map where every tile costs 1.
    pub fn open(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            tiles: vec![Tile::Floor(1); width as usize * height as usize],
            start: None,
            goal: None,
            diagonal: false,
        }
    }

    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    pub fn get(&self, point: Point) -> Option<Tile> {
        if !self.in_bounds(point) {
            return None;
        }
        self.tiles
            .get((point.y * self.width + point.x) as usize)
            .copied()
    }

    /// Replaces one tile. Floor costs must be `1..=9`, the same range a map
    /// file can express.
    pub fn set(&mut self, point: Point, tile: Tile) -> Result<(), GridError> {
        if !self.in_bounds(point) {
            return Err(GridError::OutOfBounds(point));
        }
        if let Tile::Floor(cost @ (0 | 10..)) = tile {
            return Err(GridError::InvalidCost(cost));
        }
        self.tiles[(point.y * self.width + point.x) as usize] = tile;
        Ok(())
    }

    pub fn check_point(&self, point: Point) -> Result<Point, GridError> {
        if self.in_bounds(point) {
            Ok(point)
        } else {
            Err(GridError::OutOfBounds(point))
        }
    }

    fn is_passable(&self, point: Point) -> bool {
        matches!(self.get(point), Some(Tile::Floor(_)))
    }

    /// Draws the map with `from` as `S`, the last path tile as `G` and the
    /// rest of `path` as `*`.
    pub fn render_path(&self, from: Point, path: &[Point]) -> String {
        let mut canvas: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| match self.get(Point::new(x, y)) {
                        Some(Tile::Floor(1)) => '.',
                        Some(Tile::Floor(cost)) => {
                            char::from_digit(u32::from(cost), 10).unwrap_or('?')
                        }
                        _ => '#',
                    })
                    .collect()
            })
            .collect();

        let mut mark = |point: Point, symbol: char| {
            if self.in_bounds(point) {
                canvas[point.y as usize][point.x as usize] = symbol;
            }
        };

        for &point in path {
            mark(point, '*');
        }
        if let Some(&goal) = path.last() {
            mark(goal, 'G');
        }
        mark(from, 'S');

        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SearchGraph<Point> for Grid {
    type Cost = u32;

    fn state_cost(&self, node: &Point) -> Option<u32> {
        match self.get(*node)? {
            Tile::Floor(cost) => Some(u32::from(cost)),
            Tile::Wall => None,
        }
    }

    fn transition_cost(&self, from: &Point, to: &Point) -> Option<u32> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        // No squeezing diagonally between two walls.
        if dx != 0 && dy != 0 {
            let horizontal = Point::new(from.x + dx, from.y);
            let vertical = Point::new(from.x, from.y + dy);
            if !self.is_passable(horizontal) && !self.is_passable(vertical) {
                return None;
            }
        }

        Some(0)
    }

    fn heuristic(&self, from: &Point, to: &Point) -> u32 {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        if self.diagonal { dx.max(dy) } else { dx + dy }
    }

    fn neighbors(&self, parent: &Point, current: &Point, emit: &mut dyn FnMut(Point)) {
        let directions = if self.diagonal {
            &DIRECTIONS[..]
        } else {
            &DIRECTIONS[..4]
        };

        for &direction in directions {
            let next = current.offset(direction);
            // Never step straight back to where we came from.
            if next == *parent || !self.in_bounds(next) {
                continue;
            }
            emit(next);
        }
    }
}
