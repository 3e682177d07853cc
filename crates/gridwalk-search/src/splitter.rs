//! Breadth-first expansion of the root into a fan-out of partial
//! [`SearchState`]s, one per worker, with no duplicated work between them.

use std::collections::VecDeque;

use gridwalk_core::Board;

use crate::state::SearchState;

/// Expand the root state by live outgoing edges from each shard's current
/// head cell until at least `fan_out` partial states are queued.
///
/// Each returned state already has its prefix walked (some edges marked
/// used, `score` advanced); the head cell of each is where that worker's
/// DFS resumes. The union of completions of the returned states equals
/// the full search starting from `Board::start()`.
pub fn split(board: &Board, fan_out: usize) -> Vec<SearchState> {
    let fan_out = fan_out.max(1);

    let mut queue: VecDeque<SearchState> = VecDeque::new();
    queue.push_back(SearchState::from_root(board));

    // A shard whose head cell has no live outgoing edge left can never
    // expand further; once every queued shard has been seen in that state
    // without the queue growing, stop rather than looping forever below
    // `fan_out`.
    let mut stalled = 0;
    while queue.len() < fan_out && stalled < queue.len() {
        let parent = queue.pop_front().expect("loop guard ensures queue is non-empty");
        let head = parent.head();
        let live: Vec<_> = board
            .one_step(head)
            .iter()
            .copied()
            .filter(|step| !parent.is_used(step.edge))
            .collect();

        if live.is_empty() {
            queue.push_back(parent);
            stalled += 1;
            continue;
        }

        stalled = 0;
        for step in &live {
            let mut child = parent.clone();
            child.push_one(board, step.to, step.edge);
            queue.push_back(child);
        }
    }

    queue.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::parse_problem;

    #[test]
    fn single_shard_when_fan_out_is_one() {
        let board = parse_problem("3 1\n+1 +1\n", 0, 2).unwrap();
        let shards = split(&board, 1);
        assert_eq!(shards.len(), 1);
        assert_eq!(shards[0].path(), &[board.start()]);
    }

    #[test]
    fn fan_out_reaches_requested_shard_count_on_a_branchy_grid() {
        // 3x2 grid: start (cell 0) has degree 2, so one round of expansion
        // already produces 2 shards.
        let board = parse_problem("3 2\n+1 +1\n+1 +1 +1\n+1 +1\n", 0, 5).unwrap();
        let shards = split(&board, 2);
        assert!(shards.len() >= 2);
    }

    #[test]
    fn shard_prefixes_are_live_one_step_walks() {
        let board = parse_problem("3 2\n+1 +1\n+1 +1 +1\n+1 +1\n", 0, 5).unwrap();
        let shards = split(&board, 2);
        for shard in &shards {
            for window in shard.path().windows(2) {
                let (from, to) = (window[0], window[1]);
                assert!(board.one_step(from).iter().any(|s| s.to == to));
            }
        }
    }

    #[test]
    fn stalls_without_looping_forever_on_a_dead_end_shard() {
        // A 2-cell strip: once the single edge is consumed, the only shard
        // is a dead end, so `split` must stop well short of `fan_out`.
        let board = parse_problem("2 1\n+1\n", 0, 1).unwrap();
        let shards = split(&board, 8);
        assert!(!shards.is_empty());
    }
}
