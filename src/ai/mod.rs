//! The computer opponent: a deterministic, priority-ordered rule list with a
//! random fallback. One ply of lookahead, no search tree.

mod heuristic;

pub use heuristic::HeuristicOpponent;
