//! Branch-and-bound search engine for the grid walk puzzle.
//!
//! Owns everything downstream of an immutable `gridwalk_core::Board`: the
//! per-worker [`SearchState`], the composable pruning predicates, the four
//! DFS kernel variants, the root splitter, and the [`ThreadPool`]
//! coordinator that shards the search across workers and reduces their
//! results.

pub mod best;
pub mod coordinator;
pub mod kernel;
pub mod pruner;
pub mod result;
pub mod splitter;
pub mod state;

pub use best::{GlobalBest, SENTINEL_BEST_SCORE};
pub use coordinator::ThreadPool;
pub use result::SearchResult;
pub use state::SearchState;
