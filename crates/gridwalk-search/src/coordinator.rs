//! Worker pool, shared best-score broadcast, and result reduction.
//!
//! Owns no per-worker `Arc` (the `Board` and the shared best-score atomic
//! are both borrowed for the duration of `std::thread::scope`), spawns
//! `T-1` helper threads and runs one bucket of shards inline on the calling
//! thread, and joins implicitly at scope exit.

use tracing::{debug, info};

use gridwalk_core::Board;

use crate::best::{GlobalBest, SENTINEL_BEST_SCORE};
use crate::kernel;
use crate::result::SearchResult;
use crate::splitter;
use crate::state::SearchState;

/// Runs the sharded branch-and-bound search across a fixed-size worker pool.
pub struct ThreadPool {
    num_threads: usize,
}

impl ThreadPool {
    /// Create a pool with `num_threads` workers (clamped to at least 1).
    pub fn new(num_threads: usize) -> ThreadPool {
        ThreadPool {
            num_threads: num_threads.max(1),
        }
    }

    /// The pool's worker count.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Run the full search and return the best score/path across every
    /// shard, plus the total node count.
    ///
    /// `start == goal` is handled as the trivial walk of zero edges: no
    /// shard is dispatched, the result is `(pre_score, [start])` directly.
    pub fn solve(&self, board: &Board) -> SearchResult {
        if board.start() == board.goal() {
            debug!("start equals goal, returning the trivial zero-edge walk");
            return SearchResult {
                best_score: board.pre_score(),
                best_path: vec![board.start()],
                nodes: 0,
            };
        }

        let shards = splitter::split(board, self.num_threads);
        info!(
            threads = self.num_threads,
            shards = shards.len(),
            corner_goal = board.corner_goal(),
            parity_odd = board.parity_odd(),
            "starting sharded search"
        );

        let global_best = GlobalBest::new(SENTINEL_BEST_SCORE);
        let buckets = bucket_shards(shards, self.num_threads);

        let result = std::thread::scope(|scope| {
            let mut buckets = buckets;
            let inline_bucket = buckets.pop();

            let handles: Vec<_> = buckets
                .into_iter()
                .map(|bucket| {
                    let global_best = &global_best;
                    scope.spawn(move || run_bucket(board, bucket, global_best))
                })
                .collect();

            let mut total = inline_bucket
                .map(|bucket| run_bucket(board, bucket, &global_best))
                .unwrap_or_else(|| SearchResult::none(SENTINEL_BEST_SCORE));

            for handle in handles {
                let shard_result = handle.join().expect("search worker thread panicked");
                total.combine(shard_result);
            }

            total
        });

        info!(
            best_score = result.best_score,
            nodes = result.nodes,
            "search complete"
        );
        result
    }
}

impl Default for ThreadPool {
    fn default() -> ThreadPool {
        ThreadPool::new(1)
    }
}

/// Distribute shards round-robin across `num_threads` buckets, one bucket
/// per worker. A worker with multiple shards runs them one after another.
fn bucket_shards(shards: Vec<SearchState>, num_threads: usize) -> Vec<Vec<SearchState>> {
    let num_buckets = num_threads.min(shards.len()).max(1);
    let mut buckets: Vec<Vec<SearchState>> = (0..num_buckets).map(|_| Vec::new()).collect();
    for (i, shard) in shards.into_iter().enumerate() {
        buckets[i % num_buckets].push(shard);
    }
    buckets
}

/// Run every shard assigned to one worker, reducing to that worker's best.
fn run_bucket(board: &Board, shards: Vec<SearchState>, global_best: &GlobalBest) -> SearchResult {
    let mut total = SearchResult::none(SENTINEL_BEST_SCORE);
    for shard in shards {
        let shard_result = kernel::run(board, shard, global_best);
        total.combine(shard_result);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::parse_problem;

    #[test]
    fn single_thread_solves_a_strip() {
        let board = parse_problem("3 1\n+2 *3\n", 0, 2).unwrap();
        let pool = ThreadPool::new(1);
        let result = pool.solve(&board);
        assert!(result.found());
        assert_eq!(result.best_score, (1 + 2) * 3);
    }

    #[test]
    fn start_equal_to_goal_is_the_trivial_walk() {
        let board = parse_problem("2 1\n+1\n", 0, 0).unwrap();
        let pool = ThreadPool::new(4);
        let result = pool.solve(&board);
        assert_eq!(result.best_score, board.pre_score());
        assert_eq!(result.best_path, vec![board.start()]);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn worker_count_does_not_change_the_optimal_score() {
        let board = parse_problem("3 2\n+1 +1\n+1 +1 +1\n+1 +1\n", 0, 5).unwrap();
        let single = ThreadPool::new(1).solve(&board);
        let quad = ThreadPool::new(4).solve(&board);
        assert_eq!(single.best_score, quad.best_score);
    }

    #[test]
    fn two_by_two_all_plus_one_uses_every_edge() {
        let board = parse_problem("2 2\n+1\n+1 +1\n+1\n", 0, 3).unwrap();
        let pool = ThreadPool::new(2);
        let result = pool.solve(&board);
        assert!(result.found());
        assert_eq!(result.best_score, 1 + (result.best_path.len() as i64 - 1));
    }
}
