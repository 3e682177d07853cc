//! Cross-cutting property: the optimal score does not depend on worker
//! count, the same property a Lazy SMP search's determinism test checks
//! (best move/score agreement across thread counts).

use gridwalk_core::parse_problem;
use gridwalk_search::ThreadPool;

/// Helper: solve `text` with a pool of `threads` workers.
fn solve_with_threads(text: &str, start: i64, goal: i64, threads: usize) -> i64 {
    let board = parse_problem(text, start, goal).unwrap();
    ThreadPool::new(threads).solve(&board).best_score
}

const BRANCHY_GRID: &str = "4 3\n+1 +1 +1\n+2 +1 +1 +1\n+1 *2 +1\n+1 +3 +1 +1\n+1 +1 +1\n";

#[test]
fn best_score_agrees_across_thread_counts_on_a_branchy_grid() {
    let baseline = solve_with_threads(BRANCHY_GRID, 0, 11, 1);
    for threads in [1, 2, 3, 4, 8] {
        let score = solve_with_threads(BRANCHY_GRID, 0, 11, threads);
        assert_eq!(
            score, baseline,
            "thread count {threads} disagreed with single-threaded baseline"
        );
    }
}

#[test]
fn best_score_agrees_across_thread_counts_on_a_corner_goal_grid() {
    // 3x3, goal at the opposite corner (a corner-goal case).
    let text = "3 3\n+1 +1\n+1 +1 +1\n*2 +1\n+1 +1 +1\n+1 +1\n";
    let baseline = solve_with_threads(text, 0, 8, 1);
    for threads in [1, 2, 4, 6] {
        let score = solve_with_threads(text, 0, 8, threads);
        assert_eq!(score, baseline, "thread count {threads} disagreed on corner-goal grid");
    }
}

#[test]
fn multi_thread_reports_positive_node_count() {
    let board = parse_problem(BRANCHY_GRID, 0, 11).unwrap();
    let single = ThreadPool::new(1).solve(&board);
    let quad = ThreadPool::new(4).solve(&board);
    assert!(single.nodes > 0, "single-thread search should visit at least one node");
    assert!(quad.nodes > 0, "multi-thread search should visit at least one node");
}

#[test]
fn linear_strip_score_is_one_plus_additive_length() {
    // A pure additive strip has exactly one edge-simple walk start-to-goal.
    let text = "6 1\n+1 +1 +1 +1 +1\n";
    let score = solve_with_threads(text, 0, 5, 3);
    assert_eq!(score, 1 + 5);
}
