//! The grid graph: vertices, edges, one-step and two-step adjacency,
//! goal/start, and parity — immutable after construction.

use crate::cell::Cell;
use crate::edge::EdgeId;
use crate::edge_set::EdgeSet;
use crate::op::Op;

/// One outgoing step from a cell: the neighbor, the edge crossed, and its op.
#[derive(Clone, Copy)]
pub struct Step {
    pub to: Cell,
    pub edge: EdgeId,
    pub op: Op,
}

/// One two-hop step from a cell: `p -> mid -> to`, using two distinct edges.
#[derive(Clone, Copy)]
pub struct TwoStep {
    pub mid: Cell,
    pub to: Cell,
    pub edge1: EdgeId,
    pub edge2: EdgeId,
    pub op: Op,
}

/// The immutable grid graph a search runs over.
///
/// Constructed once by [`crate::parse`] and shared read-only across all
/// worker threads.
pub struct Board {
    width: usize,
    height: usize,
    start: Cell,
    goal: Cell,
    pre_score: i64,
    edges: Vec<Op>,
    one_step: Vec<Vec<Step>>,
    two_step: Vec<Vec<TwoStep>>,
    initial_degree: Vec<u32>,
    initial_usable: EdgeSet,
    corner_goal: bool,
    parity_odd: bool,
}

impl Board {
    /// Assemble a board from its fully-computed parts.
    ///
    /// `one_step` must already reflect preamble trimming: edges consumed by
    /// the preamble walk (and any degree-1 fixpoint cleanup) must not appear
    /// in it, and `initial_usable` must agree.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        start: Cell,
        goal: Cell,
        pre_score: i64,
        edges: Vec<Op>,
        one_step: Vec<Vec<Step>>,
        initial_usable: EdgeSet,
    ) -> Board {
        let two_step = build_two_step(&one_step);
        let initial_degree = build_initial_degree(width, height, goal, &one_step);
        let corner_goal = goal.is_corner(width, height);
        let parity_odd = start.manhattan(goal, width) % 2 == 1;

        Board {
            width,
            height,
            start,
            goal,
            pre_score,
            edges,
            one_step,
            two_step,
            initial_degree,
            initial_usable,
            corner_goal,
            parity_odd,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.width * self.height
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn pre_score(&self) -> i64 {
        self.pre_score
    }

    pub fn corner_goal(&self) -> bool {
        self.corner_goal
    }

    pub fn parity_odd(&self) -> bool {
        self.parity_odd
    }

    pub fn op(&self, edge: EdgeId) -> Op {
        self.edges[edge.index()]
    }

    pub fn one_step(&self, cell: Cell) -> &[Step] {
        &self.one_step[cell.index()]
    }

    pub fn two_step(&self, cell: Cell) -> &[TwoStep] {
        &self.two_step[cell.index()]
    }

    pub fn initial_degree(&self, cell: Cell) -> u32 {
        self.initial_degree[cell.index()]
    }

    pub fn initial_usable(&self) -> &EdgeSet {
        &self.initial_usable
    }
}

fn build_two_step(one_step: &[Vec<Step>]) -> Vec<Vec<TwoStep>> {
    one_step
        .iter()
        .enumerate()
        .map(|(p_idx, steps)| {
            let p = Cell::from_index(p_idx);
            let mut out = Vec::new();
            for first in steps {
                let q = first.to;
                for second in &one_step[q.index()] {
                    let r = second.to;
                    if r == p {
                        continue;
                    }
                    out.push(TwoStep {
                        mid: q,
                        to: r,
                        edge1: first.edge,
                        edge2: second.edge,
                        op: first.op.compose(second.op),
                    });
                }
            }
            out
        })
        .collect()
}

fn build_initial_degree(width: usize, height: usize, goal: Cell, one_step: &[Vec<Step>]) -> Vec<u32> {
    (0..width * height)
        .map(|i| {
            let cell = Cell::from_index(i);
            let base = one_step[i].len() as u32;
            if cell == goal { base + 1 } else { base }
        })
        .collect()
}
