//! Line-of-five detection.
//!
//! Twelve scan lines: 5 rows, 5 columns and the two diagonals.

use crate::core::{Board, CellIndex, Symbol, BOARD_SIZE};

/// A full row, column or diagonal.
pub type Line = [CellIndex; BOARD_SIZE];

/// Every scan line: rows 0-4, columns 0-4, main diagonal, anti-diagonal.
pub const LINES: [Line; 12] = build_lines();

const fn build_lines() -> [Line; 12] {
    let mut lines = [[CellIndex::at(0, 0); BOARD_SIZE]; 12];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = CellIndex::at(i, j);
            lines[BOARD_SIZE + i][j] = CellIndex::at(j, i);
            j += 1;
        }
        lines[2 * BOARD_SIZE][i] = CellIndex::at(i, i);
        lines[2 * BOARD_SIZE + 1][i] = CellIndex::at(i, BOARD_SIZE - 1 - i);
        i += 1;
    }
    lines
}

/// Whether `symbol` fills any scan line. Neutral never wins.
#[must_use]
pub fn has_line(board: &Board, symbol: Symbol) -> bool {
    !symbol.is_neutral() && LINES.iter().any(|line| is_filled(board, line, symbol))
}

/// The scan lines `symbol` fills.
#[must_use]
pub fn winning_lines(board: &Board, symbol: Symbol) -> Vec<Line> {
    if symbol.is_neutral() {
        return Vec::new();
    }
    LINES
        .iter()
        .filter(|line| is_filled(board, line, symbol))
        .copied()
        .collect()
}

fn is_filled(board: &Board, line: &Line, symbol: Symbol) -> bool {
    line.iter().all(|&index| board[index].symbol == symbol)
}
