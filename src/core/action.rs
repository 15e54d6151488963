//! Moves: pick a perimeter cube, push it back in from a side.
//!
//! A `Move` is what the caller proposes. A `MoveRecord` is what the engine
//! hands back after a successful push: everything the surrounding system
//! needs to persist the move and later replay it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::board::{Board, CellIndex, Dot, Symbol, BOARD_SIZE};
use super::seat::{Seat, Team};

/// The side a picked cube is pushed back in from.
///
/// `Left`/`Right` shift the cube's row, `Top`/`Bottom` its column. The new
/// cube lands at the named end of that line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    /// The line the push shifts.
    #[must_use]
    pub const fn axis(self) -> PushAxis {
        match self {
            Direction::Left | Direction::Right => PushAxis::Row,
            Direction::Top | Direction::Bottom => PushAxis::Col,
        }
    }

    /// The end of the line the new cube lands on.
    #[must_use]
    pub const fn end(self) -> PushEnd {
        match self {
            Direction::Left | Direction::Top => PushEnd::Min,
            Direction::Right | Direction::Bottom => PushEnd::Max,
        }
    }

    /// Whether a cube at `index` may be pushed this way. A cube cannot go
    /// back into the edge slot it already occupies.
    #[must_use]
    pub const fn is_legal_from(self, index: CellIndex) -> bool {
        match self {
            Direction::Left => index.col() != 0,
            Direction::Right => index.col() != BOARD_SIZE - 1,
            Direction::Top => index.row() != 0,
            Direction::Bottom => index.row() != BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Top => "TOP",
            Direction::Bottom => "BOTTOM",
        };
        f.write_str(s)
    }
}

/// Legal push directions for one cell (2 on corners, 3 on edges).
pub type Directions = SmallVec<[Direction; 3]>;

/// Every legal direction for a cube at `index`, in `Direction::ALL` order.
#[must_use]
pub fn legal_directions(index: CellIndex) -> Directions {
    Direction::ALL
        .into_iter()
        .filter(|d| d.is_legal_from(index))
        .collect()
}

/// Row or column push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushAxis {
    Row,
    Col,
}

/// Head (index 0) or tail (index 4) of the shifted line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushEnd {
    Min,
    Max,
}

/// A proposed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The perimeter cube to pick up.
    pub index: CellIndex,

    /// Where the cube is pushed back in.
    pub direction: Direction,

    /// Orientation of the placed cube. Required in QUARTET, ignored in DUO.
    pub dot: Option<Dot>,
}

impl Move {
    /// A move without a dot (DUO).
    #[must_use]
    pub const fn new(index: CellIndex, direction: Direction) -> Self {
        Self {
            index,
            direction,
            dot: None,
        }
    }

    /// A move with a dot orientation (QUARTET).
    #[must_use]
    pub const fn with_dot(index: CellIndex, direction: Direction, dot: Dot) -> Self {
        Self {
            index,
            direction,
            dot: Some(dot),
        }
    }
}

/// A completed move, ready for persistence.
///
/// Used for:
/// - The caller's move table (one row per record)
/// - Replay (each record carries the resulting board)
/// - Statistics
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number, 1-based. Equal to the turn the move was played on.
    pub sequence: u32,

    pub seat: Seat,

    /// `None` in DUO.
    pub team: Option<Team>,

    /// Symbol of the placed cube.
    pub symbol: Symbol,

    /// The picked cube.
    pub picked: CellIndex,

    /// 0-based row of the picked cube.
    pub removed_row: usize,

    /// 0-based column of the picked cube.
    pub removed_col: usize,

    pub direction: Direction,
    pub axis: PushAxis,
    pub end: PushEnd,

    /// Where the new cube landed.
    pub placed_index: CellIndex,

    /// Orientation of the placed cube (`None` in DUO).
    pub dot: Option<Dot>,

    /// The mover completed a line of their own symbol.
    pub caused_win: bool,

    /// The mover completed only the opponent's line and lost.
    pub caused_loss_by_opponent_line: bool,

    /// Board after the move.
    pub board: Board,
}

impl MoveRecord {
    /// The move that produced this record.
    #[must_use]
    pub fn as_move(&self) -> Move {
        Move {
            index: self.picked,
            direction: self.direction,
            dot: self.dot,
        }
    }

    /// Whether this move ended the game.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.caused_win || self.caused_loss_by_opponent_line
    }
}
