//! Pick validation.
//!
//! Rules, in order (the first failure wins):
//! 1. the cube must sit on the perimeter;
//! 2. it must not show the opponent's symbol;
//! 3. during the first round it must be neutral;
//! 4. in QUARTET, an own-symbol cube must face the acting seat.

use serde::{Deserialize, Serialize};

use crate::core::{legal_directions, Board, CellIndex, Directions, Mode, Seat};
use crate::error::RuleViolation;

/// An approved pick and the directions it may be pushed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickApproval {
    pub index: CellIndex,
    pub legal_directions: Directions,
}

/// Decide whether `seat` may pick up the cube at `index` on `turn`.
pub fn can_pick(
    board: &Board,
    mode: Mode,
    seat: Seat,
    turn: u32,
    index: CellIndex,
) -> Result<PickApproval, RuleViolation> {
    if !index.is_perimeter() {
        return Err(RuleViolation::NotPerimeter(index));
    }

    let cell = board[index];
    let own = mode.symbol_of(seat);

    if own.opponent() == Some(cell.symbol) {
        return Err(RuleViolation::OpponentPiece);
    }

    if mode.is_first_round(turn) && !cell.symbol.is_neutral() {
        return Err(RuleViolation::MustBeNeutral);
    }

    if mode == Mode::Quartet && cell.symbol == own && cell.dot != Some(seat.facing_dot()) {
        return Err(RuleViolation::NotFacingYou);
    }

    Ok(PickApproval {
        index,
        legal_directions: legal_directions(index),
    })
}
