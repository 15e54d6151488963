//! Core engine types: board, seats and modes, moves, configuration, state.
//!
//! Everything here is a plain value. Rule logic lives in `rules`.

pub mod board;
pub mod seat;
pub mod action;
pub mod config;
pub mod state;

pub use board::{Board, Cell, CellIndex, Dot, Symbol, BOARD_CELLS, BOARD_SIZE};
pub use seat::{Mode, PlayerId, Seat, SeatMap, Team};
pub use action::{legal_directions, Direction, Directions, Move, MoveRecord, PushAxis, PushEnd};
pub use config::{GameConfig, Participant};
pub use state::{GameResult, GameStatus, Outcome, Position};
