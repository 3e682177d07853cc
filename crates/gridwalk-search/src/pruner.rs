//! Composable pruning predicates, called inline from the DFS kernel's hot
//! loop as plain functions — no `Prune` trait, no `dyn Fn`.

use gridwalk_core::{Cell, EdgeId};

use crate::state::SearchState;

/// `true` if `edge` has already been traversed in this walk.
#[inline]
pub fn edge_used(state: &SearchState, edge: EdgeId) -> bool {
    state.is_used(edge)
}

/// `true` if entering `cell` would immediately strand the walk there: its
/// remaining degree (after the entering edge is consumed) would be zero and
/// it is not the goal. Checked *before* consuming the edge, so a remaining
/// degree of `1` is the rejection threshold.
#[inline]
pub fn would_strand(state: &SearchState, cell: Cell) -> bool {
    state.deg(cell) <= 1
}

/// `true` if the optimistic upper bound on any extension from `state` is
/// already below `best_score` — nothing reachable from here can improve on
/// the shared best, so the branch is dead.
#[inline]
pub fn bound_exceeded(state: &SearchState, best_score: i64) -> bool {
    state.upper_bound() < best_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::{parse_problem, Board};

    fn strip_board() -> Board {
        parse_problem("3 1\n+2 *3\n", 0, 2).unwrap()
    }

    #[test]
    fn fresh_edge_is_not_used() {
        let board = strip_board();
        let state = SearchState::from_root(&board);
        let step = board.one_step(board.start())[0];
        assert!(!edge_used(&state, step.edge));
    }

    #[test]
    fn degree_one_cell_would_strand() {
        let board = strip_board();
        let state = SearchState::from_root(&board);
        // Cell 2 is the goal: initial_degree carries the +1 sentinel, so it
        // does not read as stranding even though it has a single live edge.
        assert!(!would_strand(&state, board.goal()));
    }

    #[test]
    fn bound_exceeded_is_false_for_a_generous_target() {
        let board = strip_board();
        let state = SearchState::from_root(&board);
        assert!(!bound_exceeded(&state, i64::MIN));
        assert!(bound_exceeded(&state, i64::MAX));
    }
}
