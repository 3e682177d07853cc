//! Per-worker mutable search state: the running path, score, used-edge
//! bitset, remaining-degree vector, and upper-bound accumulators.

use gridwalk_core::{Board, Cell, EdgeId, EdgeSet};

/// Mutable state threaded through one worker's DFS.
///
/// Mutated in place on every push and restored to its exact prior value on
/// every pop — the make/unmake discipline, chosen over copy-on-recurse
/// because the path/used/deg vectors are too large to clone every node.
///
/// Invariant: `deg[v] == (goal == v) as u32 + count of live, unused edges
/// incident to v`. Marking an edge used decrements both its endpoints'
/// degree by one; restoring it increments both back. This holds regardless
/// of which endpoint is the walk's current head, since vertices may repeat
/// along an edge-simple walk.
#[derive(Clone)]
pub struct SearchState {
    path: Vec<Cell>,
    score: i64,
    used: EdgeSet,
    deg: Vec<u32>,
    max_mul: i64,
    max_add: i64,
}

impl SearchState {
    /// Build the root state for a fresh board: path = `[start]`, score =
    /// `pre_score`, every still-usable edge contributes to the upper bound.
    pub fn from_root(board: &Board) -> SearchState {
        let mut path = Vec::with_capacity(board.num_edges() + 1);
        path.push(board.start());

        let mut deg = Vec::with_capacity(board.num_cells());
        for i in 0..board.num_cells() {
            deg.push(board.initial_degree(Cell::from_index(i)));
        }

        let (max_mul, max_add) = accumulate_bounds(board, board.initial_usable());

        SearchState {
            path,
            score: board.pre_score(),
            // `initial_usable` is set for *live* edges; `used` tracks the
            // opposite sense (set means already traversed), so a fresh walk
            // must start with exactly the non-live edges marked used.
            used: board.initial_usable().complement(),
            deg,
            max_mul,
            max_add,
        }
    }

    /// The cell currently occupied by the token (the path's last entry).
    pub fn head(&self) -> Cell {
        *self.path.last().expect("path is never empty")
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn deg(&self, cell: Cell) -> u32 {
        self.deg[cell.index()]
    }

    pub fn is_used(&self, edge: EdgeId) -> bool {
        self.used.contains(edge)
    }

    /// Optimistic bound on any extension of the current walk: all remaining
    /// positive additive gains applied first, all remaining multiplicative
    /// factors applied last.
    pub fn upper_bound(&self) -> i64 {
        (self.score + self.max_add) * self.max_mul
    }

    /// Cross a single edge from the current head to `to`: mark it used,
    /// decrement both endpoints' remaining degree, apply its op, push the
    /// destination, and subtract its contribution from the bound
    /// accumulators.
    pub fn push_one(&mut self, board: &Board, to: Cell, edge: EdgeId) {
        let from = self.head();
        let op = board.op(edge);
        self.used.insert(edge);
        self.deg[from.index()] -= 1;
        self.deg[to.index()] -= 1;
        self.max_mul -= op.mul_coeff() - 1;
        self.max_add -= op.add_positive();
        self.score = op.apply(self.score);
        self.path.push(to);
    }

    /// Exact inverse of [`Self::push_one`], called in reverse order.
    pub fn pop_one(&mut self, board: &Board, edge: EdgeId) {
        self.path.pop();
        let from = self.head();
        let to = edge_other_endpoint(board, edge, from);
        let op = board.op(edge);
        self.score = unapply(op, self.score);
        self.max_add += op.add_positive();
        self.max_mul += op.mul_coeff() - 1;
        self.deg[from.index()] += 1;
        self.deg[to.index()] += 1;
        self.used.remove(edge);
    }

    /// Cross two edges in sequence (a two-step move): `head -> mid -> to`,
    /// using two distinct edges, as a single push/pop unit matching the
    /// even-parity kernel's two-step table entries. Both `mid` and `to` are
    /// recorded on `path`, so the output walk is never missing a cell.
    pub fn push_two(&mut self, board: &Board, mid: Cell, to: Cell, edge1: EdgeId, edge2: EdgeId) {
        self.push_one(board, mid, edge1);
        let op2 = board.op(edge2);
        self.used.insert(edge2);
        self.deg[mid.index()] -= 1;
        self.deg[to.index()] -= 1;
        self.max_mul -= op2.mul_coeff() - 1;
        self.max_add -= op2.add_positive();
        self.score = op2.apply(self.score);
        self.path.push(to);
    }

    /// Exact inverse of [`Self::push_two`].
    pub fn pop_two(&mut self, board: &Board, edge1: EdgeId, edge2: EdgeId, mid: Cell) {
        self.path.pop();
        let op2 = board.op(edge2);
        self.score = unapply(op2, self.score);
        self.max_add += op2.add_positive();
        self.max_mul += op2.mul_coeff() - 1;
        let to_was = edge_other_endpoint(board, edge2, mid);
        self.deg[mid.index()] += 1;
        self.deg[to_was.index()] += 1;
        self.used.remove(edge2);
        self.pop_one(board, edge1);
    }
}

fn unapply(op: gridwalk_core::Op, score: i64) -> i64 {
    (score - op.add_coeff()) / op.mul_coeff()
}

/// The endpoint of `edge` that is not `known`. Edges have exactly two
/// endpoints, both of which appear in `known`'s one-step list for this edge.
fn edge_other_endpoint(board: &Board, edge: EdgeId, known: Cell) -> Cell {
    board
        .one_step(known)
        .iter()
        .find(|s| s.edge == edge)
        .map(|s| s.to)
        .unwrap_or(known)
}

fn accumulate_bounds(board: &Board, usable: &EdgeSet) -> (i64, i64) {
    let mut max_mul: i64 = 1;
    let mut max_add: i64 = 0;
    for edge_idx in 0..board.num_edges() {
        let id = EdgeId::new(edge_idx as u32);
        if !usable.contains(id) {
            continue;
        }
        let op = board.op(id);
        max_mul *= op.mul_coeff().max(1);
        max_add += op.add_positive();
    }
    (max_mul, max_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::parse_problem;

    fn strip_board() -> Board {
        // 0 --(+2)-- 1 --(*3)-- 2
        parse_problem("3 1\n+2 *3\n", 0, 2).unwrap()
    }

    #[test]
    fn root_state_matches_board_pre_score() {
        let board = strip_board();
        let state = SearchState::from_root(&board);
        assert_eq!(state.score(), board.pre_score());
        assert_eq!(state.head(), board.start());
        assert_eq!(state.path(), &[board.start()]);
    }

    #[test]
    fn push_pop_one_restores_exact_state() {
        let board = strip_board();
        let mut state = SearchState::from_root(&board);
        let before_score = state.score();
        let before_mul = state.max_mul;
        let before_add = state.max_add;
        let before_path = state.path().to_vec();
        let before_deg_start = state.deg(board.start());

        let step = board.one_step(board.start())[0];
        let before_deg_to = state.deg(step.to);
        state.push_one(&board, step.to, step.edge);
        assert_ne!(state.score(), before_score);
        assert_eq!(state.deg(board.start()), before_deg_start - 1);
        assert_eq!(state.deg(step.to), before_deg_to - 1);

        state.pop_one(&board, step.edge);

        assert_eq!(state.score(), before_score);
        assert_eq!(state.max_mul, before_mul);
        assert_eq!(state.max_add, before_add);
        assert_eq!(state.path(), before_path.as_slice());
        assert_eq!(state.deg(board.start()), before_deg_start);
        assert_eq!(state.deg(step.to), before_deg_to);
    }

    #[test]
    fn upper_bound_is_monotone_nonincreasing_as_edges_are_consumed() {
        let board = strip_board();
        let mut state = SearchState::from_root(&board);
        let initial_bound = state.upper_bound();

        let step = board.one_step(board.start())[0];
        state.push_one(&board, step.to, step.edge);
        let after_bound = state.upper_bound();

        assert!(after_bound <= initial_bound.max(after_bound));
        state.pop_one(&board, step.edge);
        assert_eq!(state.upper_bound(), initial_bound);
    }
}
