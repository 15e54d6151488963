//! The push mechanic.
//!
//! Take the row (LEFT/RIGHT) or column (TOP/BOTTOM) through the picked
//! cube, drop the picked cube, insert the new one at the head (LEFT/TOP)
//! or tail (RIGHT/BOTTOM) and write the line back. Every other cell keeps
//! its place.

use crate::core::{Board, Cell, CellIndex, Direction, Dot, Mode, PushAxis, PushEnd, Seat, BOARD_SIZE};
use crate::error::EngineError;

/// Board after a push.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushResult {
    pub board: Board,
    pub placed_index: CellIndex,
}

/// Push `placed` into the line through `index` from `direction`.
///
/// Does not check who may pick the cube; see
/// [`can_pick`](super::validator::can_pick).
pub fn push(
    board: &Board,
    index: CellIndex,
    direction: Direction,
    placed: Cell,
) -> Result<PushResult, EngineError> {
    if !direction.is_legal_from(index) {
        return Err(EngineError::InvalidDirection { index, direction });
    }

    let line: [CellIndex; BOARD_SIZE] = match direction.axis() {
        PushAxis::Row => std::array::from_fn(|col| CellIndex::at(index.row(), col)),
        PushAxis::Col => std::array::from_fn(|row| CellIndex::at(row, index.col())),
    };

    let mut cells: Vec<Cell> = line
        .iter()
        .filter(|&&i| i != index)
        .map(|&i| board[i])
        .collect();

    let placed_index = match direction.end() {
        PushEnd::Min => {
            cells.insert(0, placed);
            line[0]
        }
        PushEnd::Max => {
            cells.push(placed);
            line[BOARD_SIZE - 1]
        }
    };

    let mut next = board.clone();
    for (&i, cell) in line.iter().zip(cells) {
        next.set(i, cell);
    }

    Ok(PushResult {
        board: next,
        placed_index,
    })
}

/// The cube `seat` puts back on the board.
///
/// DUO cubes carry no dot; a supplied one is dropped. QUARTET cubes need a
/// dot on the seat's team axis.
pub fn placed_cell(mode: Mode, seat: Seat, dot: Option<Dot>) -> Result<Cell, EngineError> {
    let symbol = mode.symbol_of(seat);
    match mode {
        Mode::Duo => Ok(Cell::new(symbol, None)),
        Mode::Quartet => {
            let dot = dot.ok_or(EngineError::MissingDot(seat))?;
            if !seat.team().allows_dot(dot) {
                return Err(EngineError::InvalidDotAxis { seat, dot });
            }
            Ok(Cell::new(symbol, Some(dot)))
        }
    }
}
