//! Problem file parsing: board dimensions, edge list, and the optional
//! preamble tail — producing a fully preamble-trimmed [`Board`].
//!
//! File format (whitespace-separated tokens), per the external interface:
//!
//! ```text
//! W H
//! <W-1 horizontal ops on row 0>
//! <W   vertical   ops between rows 0 and 1>
//! <W-1 horizontal ops on row 1>
//! ...
//! <W-1 horizontal ops on row H-1>
//! [optional:] K p0 p1 ... p(K-1) G
//! ```

use tracing::debug;

use crate::board::{Board, Step};
use crate::cell::Cell;
use crate::edge::EdgeId;
use crate::edge_set::EdgeSet;
use crate::error::{BoardError, PreambleError};
use crate::op::Op;

/// Either stage of problem-file parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProblemError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Preamble(#[from] PreambleError),
}

/// Parse a problem file's text into a [`Board`], applying any preamble tail
/// and the CLI-supplied start/goal as fallbacks when no tail is present.
///
/// `start_cli`/`goal_cli` are clamped to `[0, W*H)`, falling back to `0` and
/// `W*H - 1` respectively when out of range — matching the reference
/// implementation's behavior for a bare (non-preamble) problem file.
pub fn parse_problem(text: &str, start_cli: i64, goal_cli: i64) -> Result<Board, ProblemError> {
    let mut tokens = text.split_whitespace();

    let width = next_int(&mut tokens, "width")?;
    let height = next_int(&mut tokens, "height")?;
    if width < 1 || height < 1 {
        return Err(BoardError::InvalidDimensions { width, height }.into());
    }
    let width = width as usize;
    let height = height as usize;
    let num_cells = width * height;

    let start_fallback = if start_cli >= 0 && (start_cli as usize) < num_cells {
        start_cli as usize
    } else {
        0
    };
    let goal_fallback = if goal_cli >= 0 && (goal_cli as usize) < num_cells {
        goal_cli as usize
    } else {
        num_cells - 1
    };

    let mut one_step: Vec<Vec<Step>> = vec![Vec::new(); num_cells];
    let mut edges: Vec<Op> = Vec::new();

    let expected_edges = 2 * width * height - width - height;
    for h in 0..(2 * height - 1) {
        let row_len = if h % 2 == 0 { width - 1 } else { width };
        for w in 0..row_len {
            let token = tokens.next().ok_or(BoardError::TruncatedEdges {
                expected: expected_edges,
                found: edges.len(),
            })?;
            let op = parse_op_token(token)?;
            let edge_id = EdgeId::new(edges.len() as u32);

            let (a, b) = if h % 2 == 0 {
                let (x, y) = (w, h / 2);
                let p = y * width + x;
                (p, p + 1)
            } else {
                let (x, y) = (w, (h - 1) / 2);
                let p = y * width + x;
                (p, p + width)
            };

            one_step[a].push(Step { to: Cell::from_index(b), edge: edge_id, op });
            one_step[b].push(Step { to: Cell::from_index(a), edge: edge_id, op });
            edges.push(op);
        }
    }

    let total_edges = edges.len();
    let mut usable = EdgeSet::full(total_edges);

    let (start, goal, pre_score) =
        apply_preamble(&mut tokens, &mut one_step, &mut usable, width, height, start_fallback, goal_fallback)?;

    debug!(width, height, start = start.index(), goal = goal.index(), pre_score, "parsed problem");

    Ok(Board::from_parts(
        width,
        height,
        start,
        goal,
        pre_score,
        edges,
        one_step,
        usable,
    ))
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, field: &'static str) -> Result<i64, BoardError> {
    let token = tokens.next().ok_or(BoardError::MissingDimension { field })?;
    token
        .parse::<i64>()
        .map_err(|_| BoardError::MissingDimension { field })
}

fn parse_op_token(token: &str) -> Result<Op, BoardError> {
    let mut chars = token.chars();
    let operator = chars.next().ok_or(BoardError::InvalidConstant {
        found: token.to_string(),
    })?;
    let rest: &str = &token[operator.len_utf8()..];
    let number: i64 = rest.parse().map_err(|_| BoardError::InvalidConstant {
        found: token.to_string(),
    })?;
    match operator {
        '+' => Ok(Op::add(number)),
        '-' => Ok(Op::add(-number)),
        '*' => Ok(Op::mul(number)),
        other => Err(BoardError::UnknownOperator { character: other }),
    }
}

/// Apply the preamble walk (if any tail tokens remain), then trim any
/// resulting non-goal degree-1 cell to a fixpoint.
fn apply_preamble<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    one_step: &mut [Vec<Step>],
    usable: &mut EdgeSet,
    width: usize,
    height: usize,
    start_fallback: usize,
    goal_fallback: usize,
) -> Result<(Cell, Cell, i64), PreambleError> {
    let num_cells = width * height;

    let Some(k_token) = tokens.next() else {
        return Ok((Cell::from_index(start_fallback), Cell::from_index(goal_fallback), 1));
    };
    let k: i64 = k_token.parse().unwrap_or(-1);
    if k < 0 {
        return Ok((Cell::from_index(start_fallback), Cell::from_index(goal_fallback), 1));
    }
    let k = k as usize;

    let mut pre_root: Vec<usize> = Vec::with_capacity(k);
    for _ in 0..k {
        let raw: i64 = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(PreambleError::NegativeIndex { found: -1 })?;
        if raw < 0 {
            return Err(PreambleError::NegativeIndex { found: raw });
        }
        let cell = raw as usize;
        if cell >= num_cells {
            return Err(PreambleError::OutOfBounds { found: cell, width, height });
        }
        pre_root.push(cell);
    }

    let goal_raw: i64 = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(PreambleError::NegativeGoal { found: -1 })?;
    if goal_raw < 0 {
        return Err(PreambleError::NegativeGoal { found: goal_raw });
    }
    let goal = goal_raw as usize;
    if goal >= num_cells {
        return Err(PreambleError::OutOfBounds { found: goal, width, height });
    }

    if pre_root.is_empty() {
        return Ok((Cell::from_index(start_fallback), Cell::from_index(goal), 1));
    }

    let start = *pre_root.last().unwrap();
    let mut pre_score: i64 = 1;

    // A single-cell preamble is a start override with no walk: no edge is
    // consumed, so the fixpoint trim below must not run either — otherwise
    // a start cell that merely happens to have degree 1 would be trimmed
    // even though nothing was walked, breaking idempotence with the
    // no-preamble case.
    if pre_root.len() > 1 {
        for pair in pre_root.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let edge = find_edge(one_step, from, to).ok_or(PreambleError::DisconnectedStep {
                step: from,
                from,
                to,
            })?;
            pre_score = edge.op.apply(pre_score);
            usable.remove(edge.edge);
            remove_edge(one_step, from, to);
        }

        trim_degree_one_fixpoint(one_step, usable, num_cells, Cell::from_index(goal));
    }

    Ok((Cell::from_index(start), Cell::from_index(goal), pre_score))
}

fn find_edge(one_step: &[Vec<Step>], from: usize, to: usize) -> Option<Step> {
    one_step[from].iter().find(|s| s.to.index() == to).copied()
}

fn remove_edge(one_step: &mut [Vec<Step>], a: usize, b: usize) {
    one_step[a].retain(|s| s.to.index() != b);
    one_step[b].retain(|s| s.to.index() != a);
}

fn trim_degree_one_fixpoint(one_step: &mut [Vec<Step>], usable: &mut EdgeSet, num_cells: usize, goal: Cell) {
    loop {
        let mut trimmed_any = false;
        for pos in 0..num_cells {
            if pos == goal.index() {
                continue;
            }
            if one_step[pos].len() == 1 {
                let neighbor = one_step[pos][0].to.index();
                let edge = one_step[pos][0].edge;
                usable.remove(edge);
                remove_edge(one_step, pos, neighbor);
                trimmed_any = true;
                break;
            }
        }
        if !trimmed_any {
            break;
        }
    }
}
