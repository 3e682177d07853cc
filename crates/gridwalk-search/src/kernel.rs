//! The four DFS variants, dispatched once at the root by two booleans
//! (corner-goal, parity) and selected by direct function reference — no
//! trait object, no `dyn Fn` — plain functions over a `Prune`/`Eval` trait
//! in the search hot loop.

use gridwalk_core::Board;

use crate::best::GlobalBest;
use crate::pruner::{bound_exceeded, edge_used, would_strand};
use crate::result::SearchResult;
use crate::state::SearchState;

/// Run the appropriate DFS variant to completion from `state`, returning
/// this call's local best. `state` is consumed — callers that need the
/// board's `SearchState` for anything else should clone it first.
pub fn run(board: &Board, mut state: SearchState, global_best: &GlobalBest) -> SearchResult {
    let mut local = SearchResult::none(crate::best::SENTINEL_BEST_SCORE);
    match (board.corner_goal(), board.parity_odd()) {
        (true, true) => dfs_cg_odd(board, &mut state, global_best, &mut local),
        (true, false) => dfs_cg_even(board, &mut state, global_best, &mut local),
        (false, true) => dfs_odd(board, &mut state, global_best, &mut local),
        (false, false) => dfs_even(board, &mut state, global_best, &mut local),
    }
    local
}

/// Non-corner goal, odd start/goal parity: one-step stride, records at the
/// goal but keeps searching (the walk may legally pass through and return).
fn dfs_odd(board: &Board, state: &mut SearchState, global_best: &GlobalBest, local: &mut SearchResult) {
    local.nodes += 1;
    record_if_improved(board, state, global_best, local);
    if bound_exceeded(state, global_best.load()) {
        return;
    }

    let head = state.head();
    for i in 0..board.one_step(head).len() {
        let step = board.one_step(head)[i];
        if edge_used(state, step.edge) || would_strand(state, step.to) {
            continue;
        }
        state.push_one(board, step.to, step.edge);
        dfs_odd(board, state, global_best, local);
        state.pop_one(board, step.edge);
    }
}

/// Non-corner goal, even start/goal parity: two-step stride over the
/// precomputed `two_step` table, halving recursion depth on bipartite
/// grids where start and goal share a color class.
fn dfs_even(board: &Board, state: &mut SearchState, global_best: &GlobalBest, local: &mut SearchResult) {
    local.nodes += 1;
    record_if_improved(board, state, global_best, local);
    if bound_exceeded(state, global_best.load()) {
        return;
    }

    let head = state.head();
    for i in 0..board.two_step(head).len() {
        let ts = board.two_step(head)[i];
        if edge_used(state, ts.edge1) || edge_used(state, ts.edge2) || would_strand(state, ts.to) {
            continue;
        }
        state.push_two(board, ts.mid, ts.to, ts.edge1, ts.edge2);
        dfs_even(board, state, global_best, local);
        state.pop_two(board, ts.edge1, ts.edge2, ts.mid);
    }
}

/// Corner-goal, odd parity: one-step stride; returns immediately after
/// recording a goal-arrival, since a corner goal's single remaining edge
/// cannot extend into anything useful.
fn dfs_cg_odd(board: &Board, state: &mut SearchState, global_best: &GlobalBest, local: &mut SearchResult) {
    local.nodes += 1;
    if record_if_improved(board, state, global_best, local) {
        return;
    }
    if bound_exceeded(state, global_best.load()) {
        return;
    }

    let head = state.head();
    for i in 0..board.one_step(head).len() {
        let step = board.one_step(head)[i];
        if edge_used(state, step.edge) || would_strand(state, step.to) {
            continue;
        }
        state.push_one(board, step.to, step.edge);
        dfs_cg_odd(board, state, global_best, local);
        state.pop_one(board, step.edge);
    }
}

/// Corner-goal, even parity: two-step stride, same early-return rule as
/// [`dfs_cg_odd`].
fn dfs_cg_even(board: &Board, state: &mut SearchState, global_best: &GlobalBest, local: &mut SearchResult) {
    local.nodes += 1;
    if record_if_improved(board, state, global_best, local) {
        return;
    }
    if bound_exceeded(state, global_best.load()) {
        return;
    }

    let head = state.head();
    for i in 0..board.two_step(head).len() {
        let ts = board.two_step(head)[i];
        if edge_used(state, ts.edge1) || edge_used(state, ts.edge2) || would_strand(state, ts.to) {
            continue;
        }
        state.push_two(board, ts.mid, ts.to, ts.edge1, ts.edge2);
        dfs_cg_even(board, state, global_best, local);
        state.pop_two(board, ts.edge1, ts.edge2, ts.mid);
    }
}

/// Shared terminal test: if at the goal with an improved score, record it
/// locally and publish to the shared best. Returns `true` iff `state` is
/// currently at the goal, so corner-goal variants know to return.
fn record_if_improved(board: &Board, state: &SearchState, global_best: &GlobalBest, local: &mut SearchResult) -> bool {
    if state.head() != board.goal() {
        return false;
    }
    if state.score() > local.best_score {
        local.best_score = state.score();
        local.best_path = state.path().to_vec();
        global_best.publish(state.score());
    }
    true
}
