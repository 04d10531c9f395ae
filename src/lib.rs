pub mod benchmark;
pub mod grid;
pub mod pathfinding;
pub mod search_config;

// Re-export commonly used items
pub use grid::{Grid, GridError, Point, Tile};
pub use pathfinding::{
    AStar, BidirectionalAStar, Cost, FnGraph, SearchGraph, SearchOutcome, SearchState, Step,
};
pub use search_config::{Algorithm, SearchConfig};
