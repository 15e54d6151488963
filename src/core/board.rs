//! Board model: a fixed 5×5 grid of cells.
//!
//! ## Layout
//!
//! Cells are stored row-major: `index = row * 5 + col`, rows and columns
//! 0-based. Row 0 is the TOP edge, column 0 the LEFT edge.
//!
//! ## Perimeter
//!
//! The 16 cells with row ∈ {0, 4} or col ∈ {0, 4}. Only perimeter cells
//! can ever be picked up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use crate::error::{EngineError, HistoryError};

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The face shown by a cube.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    #[default]
    Neutral,
    /// Team A / TOP seat symbol.
    Circle,
    /// Team B / BOTTOM seat symbol in DUO.
    Cross,
}

impl Symbol {
    /// The rival symbol. Neutral has none.
    #[must_use]
    pub const fn opponent(self) -> Option<Symbol> {
        match self {
            Symbol::Neutral => None,
            Symbol::Circle => Some(Symbol::Cross),
            Symbol::Cross => Some(Symbol::Circle),
        }
    }

    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Symbol::Neutral)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Symbol::Neutral => "NEUTRAL",
            Symbol::Circle => "CIRCLE",
            Symbol::Cross => "CROSS",
        };
        f.write_str(s)
    }
}

/// Orientation marker on a played cube: the edge of the board it faces.
///
/// Only meaningful in QUARTET mode, where it decides which teammate may
/// pick the cube up again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dot {
    Up,
    Right,
    Down,
    Left,
}

impl Dot {
    /// All four orientations.
    pub const ALL: [Dot; 4] = [Dot::Up, Dot::Right, Dot::Down, Dot::Left];

    /// Whether the dot lies on the vertical (Up/Down) axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Dot::Up | Dot::Down)
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dot::Up => "UP",
            Dot::Right => "RIGHT",
            Dot::Down => "DOWN",
            Dot::Left => "LEFT",
        };
        f.write_str(s)
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: Symbol,
    /// `None` is the NONE marker (neutral cubes, and every cube in DUO).
    pub dot: Option<Dot>,
}

impl Cell {
    /// An untouched neutral cube.
    pub const NEUTRAL: Cell = Cell {
        symbol: Symbol::Neutral,
        dot: None,
    };

    #[must_use]
    pub const fn new(symbol: Symbol, dot: Option<Dot>) -> Self {
        Self { symbol, dot }
    }
}

/// A validated board index in `0..25`.
///
/// Out-of-range values are rejected at construction, so every `CellIndex`
/// addresses a real cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CellIndex(u8);

impl CellIndex {
    /// Validate a raw index.
    pub fn new(index: usize) -> Result<Self, EngineError> {
        if index < BOARD_CELLS {
            Ok(Self(index as u8))
        } else {
            Err(EngineError::InvalidIndex(index))
        }
    }

    /// Index of the cell at `(row, col)`.
    ///
    /// Off-board coordinates report their row-major position, raised to at
    /// least `BOARD_CELLS` so the error never names a real cell.
    pub fn from_row_col(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            let position = row.saturating_mul(BOARD_SIZE).saturating_add(col);
            return Err(EngineError::InvalidIndex(position.max(BOARD_CELLS)));
        }
        Ok(Self((row * BOARD_SIZE + col) as u8))
    }

    /// Only for `row, col < BOARD_SIZE`.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self((row * BOARD_SIZE + col) as u8)
    }

    /// The raw index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.get() / BOARD_SIZE
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.get() % BOARD_SIZE
    }

    /// Whether the cell sits on the outer ring.
    #[must_use]
    pub const fn is_perimeter(self) -> bool {
        let (row, col) = (self.row(), self.col());
        row == 0 || row == BOARD_SIZE - 1 || col == 0 || col == BOARD_SIZE - 1
    }

    /// Every index, in row-major order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..BOARD_CELLS as u8).map(CellIndex)
    }

    /// The 16 perimeter indices, in row-major order.
    pub fn perimeter() -> impl Iterator<Item = CellIndex> {
        Self::all().filter(|index| index.is_perimeter())
    }
}

impl TryFrom<u8> for CellIndex {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize)
    }
}

impl From<CellIndex> for u8 {
    fn from(index: CellIndex) -> Self {
        index.0
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 5×5 board.
///
/// A plain value: `clone()` yields a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// A fresh board: 25 neutral cubes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::NEUTRAL; BOARD_CELLS],
        }
    }

    /// Build a board from explicit cells.
    #[must_use]
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    pub fn set(&mut self, index: CellIndex, cell: Cell) {
        self.cells[index.get()] = cell;
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Number of cells showing `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|c| c.symbol == symbol).count()
    }

    /// Encode as an ordered JSON list of 25 `{symbol, dot}` objects.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(&self.cells[..])?)
    }

    /// Decode a snapshot produced by [`Board::to_json`].
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let cells: Vec<Cell> = serde_json::from_str(json)?;
        let len = cells.len();
        let cells: [Cell; BOARD_CELLS] = cells
            .try_into()
            .map_err(|_| HistoryError::SnapshotLength(len))?;
        Ok(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index.get()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell.symbol {
                    Symbol::Neutral => "·",
                    Symbol::Circle => "O",
                    Symbol::Cross => "X",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
