pub mod astar;
pub mod bidirectional;
pub mod cost;
pub mod graph;
pub mod outcome;
pub mod state;

// Re-export the public types
pub use astar::AStar;
pub use bidirectional::BidirectionalAStar;
pub use cost::Cost;
pub use graph::{FnGraph, Reversed, SearchGraph, walk_cost};
pub use outcome::SearchOutcome;
pub use state::{SearchState, Step};
