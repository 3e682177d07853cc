//! Box-drawing board pretty-printer. Debug-only (the `--render` flag);
//! never touches the single-line solver-mode output contract.

use gridwalk_core::{Board, Cell};

/// Render `board` as a box-drawing grid: corner/edge/junction glyphs, each
/// live edge labeled with its op (blank for a no-op `*1`), and `S`/`G`
/// markers at the start and goal cells (`S/G` if they coincide).
pub fn board_to_string(board: &Board) -> String {
    let w = board.width();
    let h = board.height();
    let mut grid = vec![vec![String::new(); w * 2 + 1]; h * 2 + 1];

    grid[0][0] = "┌".to_string();
    grid[0][w * 2] = "┐".to_string();
    grid[h * 2][0] = "└".to_string();
    grid[h * 2][w * 2] = "┘".to_string();
    for i in 0..w.saturating_sub(1) {
        grid[0][i * 2 + 2] = "┬".to_string();
        grid[h * 2][i * 2 + 2] = "┴".to_string();
    }
    for i in 0..h.saturating_sub(1) {
        grid[i * 2 + 2][0] = "├".to_string();
        grid[i * 2 + 2][w * 2] = "┤".to_string();
    }
    for j in 0..h.saturating_sub(1) {
        for i in 0..w.saturating_sub(1) {
            grid[j * 2 + 2][i * 2 + 2] = "┼".to_string();
        }
    }
    for j in 0..=h {
        for i in 0..w {
            grid[j * 2][i * 2 + 1] = "─".to_string();
        }
    }
    for j in 0..h {
        for i in 0..=w {
            grid[j * 2 + 1][i * 2] = "│".to_string();
        }
    }
    for j in 0..h {
        for i in 0..w {
            grid[j * 2 + 1][i * 2 + 1] = " ".to_string();
        }
    }

    for y in 0..h {
        for x in 0..w {
            let pos = Cell::new(y, x, w);
            for step in board.one_step(pos) {
                let label = step.op.to_string();
                if label.is_empty() {
                    continue;
                }
                if pos.index() == step.to.index() + w {
                    grid[y * 2][x * 2 + 1] = label.clone(); // up
                }
                if pos.index() + 1 == step.to.index() {
                    grid[y * 2 + 1][x * 2 + 2] = label.clone(); // right
                }
                if pos.index() + w == step.to.index() {
                    grid[y * 2 + 2][x * 2 + 1] = label.clone(); // down
                }
                if pos.index() == step.to.index() + 1 {
                    grid[y * 2 + 1][x * 2] = label; // left
                }
            }
        }
    }

    mark(&mut grid, board.start(), w, if board.start() == board.goal() { "S/G" } else { "S" });
    if board.start() != board.goal() {
        mark(&mut grid, board.goal(), w, "G");
    }

    let mut out = String::new();
    for row in grid {
        for cell in row {
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

fn mark(grid: &mut [Vec<String>], cell: Cell, width: usize, glyph: &str) {
    let (x, y) = (cell.col(width), cell.row(width));
    grid[y * 2 + 1][x * 2 + 1] = glyph.to_string();
}
