//! Rules engine trait and the Quixo implementation.
//!
//! The engine is a pure function of `(position, move)`:
//! - `can_pick` approves or refuses a pick
//! - `apply` validates, pushes, evaluates lines and returns the next
//!   position together with the record to persist
//! - `is_terminal` reports the result once a line is made

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::lines::{has_line, winning_lines};
use super::push::{placed_cell, push};
use super::validator::{can_pick, PickApproval};
use crate::core::{
    Board, CellIndex, GameResult, GameStatus, Mode, Move, MoveRecord, Outcome, Position, Seat, Symbol,
};
use crate::error::{EngineError, RuleViolation};

/// The position after a move and the record describing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub position: Position,
    pub record: MoveRecord,
    pub outcome: Outcome,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply` must not change its inputs, and must reject anything
///   `can_pick` would refuse
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// The game variant.
    fn mode(&self) -> Mode;

    /// The seat acting in `position`.
    fn seat_to_move(&self, position: &Position) -> Seat {
        self.mode().seat_for_turn(position.turn)
    }

    /// Decide whether the acting seat may pick up the cube at `index`.
    fn can_pick(&self, position: &Position, index: CellIndex) -> Result<PickApproval, RuleViolation>;

    /// Play a move.
    fn apply(&self, position: &Position, mv: &Move) -> Result<Transition, EngineError>;

    /// Check if the game is over.
    fn is_terminal(&self, position: &Position) -> Option<GameResult> {
        position.status.result()
    }

    // === Convenience Methods ===

    /// Enumerate every legal move for the acting seat.
    ///
    /// In QUARTET each pick and direction is listed once per dot on the
    /// seat's axis.
    fn legal_moves(&self, position: &Position) -> Vec<Move> {
        if self.is_terminal(position).is_some() {
            return Vec::new();
        }

        let seat = self.seat_to_move(position);
        let dots: Vec<_> = match self.mode() {
            Mode::Duo => vec![None],
            Mode::Quartet => seat.team().dots().into_iter().map(Some).collect(),
        };

        let mut moves = Vec::new();
        for index in CellIndex::perimeter() {
            let Ok(approval) = self.can_pick(position, index) else {
                continue;
            };
            for &direction in &approval.legal_directions {
                for &dot in &dots {
                    moves.push(Move {
                        index,
                        direction,
                        dot,
                    });
                }
            }
        }
        moves
    }
}

/// Quixo rules for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuixoRules {
    mode: Mode,
}

impl QuixoRules {
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Judge a board after the mover placed `symbol`. The mover's own line
    /// wins over an opponent line completed by the same push.
    #[must_use]
    pub fn evaluate(board: &Board, symbol: Symbol) -> Outcome {
        if has_line(board, symbol) {
            Outcome::WonByMover
        } else if symbol.opponent().is_some_and(|opponent| has_line(board, opponent)) {
            Outcome::WonByOpponentLine
        } else {
            Outcome::InProgress
        }
    }
}

impl RulesEngine for QuixoRules {
    fn mode(&self) -> Mode {
        self.mode
    }

    fn can_pick(&self, position: &Position, index: CellIndex) -> Result<PickApproval, RuleViolation> {
        let seat = self.seat_to_move(position);
        can_pick(&position.board, self.mode, seat, position.turn, index)
    }

    fn apply(&self, position: &Position, mv: &Move) -> Result<Transition, EngineError> {
        if position.is_finished() {
            return Err(EngineError::GameOver);
        }

        let seat = self.seat_to_move(position);
        self.can_pick(position, mv.index)?;
        let placed = placed_cell(self.mode, seat, mv.dot)?;
        let pushed = push(&position.board, mv.index, mv.direction, placed)?;

        let outcome = Self::evaluate(&pushed.board, placed.symbol);
        trace!(%seat, index = %mv.index, direction = %mv.direction, ?outcome, "push applied");

        let turn = match outcome {
            Outcome::InProgress => position
                .turn
                .checked_add(1)
                .ok_or(EngineError::TurnOverflow(position.turn))?,
            _ => {
                let lines = winning_lines(&pushed.board, placed.symbol).len()
                    + placed
                        .symbol
                        .opponent()
                        .map_or(0, |opponent| winning_lines(&pushed.board, opponent).len());
                trace!(%seat, lines, "line completed");
                position.turn
            }
        };

        let status = match outcome {
            Outcome::InProgress => GameStatus::InProgress,
            Outcome::WonByMover => GameStatus::Finished(GameResult {
                outcome,
                mover: seat,
                winner: placed.symbol,
            }),
            Outcome::WonByOpponentLine => GameStatus::Finished(GameResult {
                outcome,
                mover: seat,
                winner: placed.symbol.opponent().unwrap_or(Symbol::Neutral),
            }),
        };

        let record = MoveRecord {
            sequence: position.turn,
            seat,
            team: self.mode.team_of(seat),
            symbol: placed.symbol,
            picked: mv.index,
            removed_row: mv.index.row(),
            removed_col: mv.index.col(),
            direction: mv.direction,
            axis: mv.direction.axis(),
            end: mv.direction.end(),
            placed_index: pushed.placed_index,
            dot: placed.dot,
            caused_win: outcome == Outcome::WonByMover,
            caused_loss_by_opponent_line: outcome == Outcome::WonByOpponentLine,
            board: pushed.board.clone(),
        };

        Ok(Transition {
            position: Position {
                board: pushed.board,
                turn,
                status,
            },
            record,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Direction, Dot, Team};

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_duo_first_move() {
        let rules = QuixoRules::new(Mode::Duo);
        let position = Position::new();

        let t = rules.apply(&position, &Move::new(idx(0), Direction::Right)).unwrap();
        assert_eq!(t.outcome, Outcome::InProgress);
        assert_eq!(t.position.turn, 2);
        assert_eq!(t.position.board[idx(4)], Cell::new(Symbol::Circle, None));
        assert_eq!(t.record.sequence, 1);
        assert_eq!(t.record.seat, Seat::Top);
        assert_eq!(t.record.team, None);
        assert_eq!(t.record.placed_index, idx(4));
        assert_eq!(t.record.board, t.position.board);

        // input untouched
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_apply_rejects_refused_pick() {
        let rules = QuixoRules::new(Mode::Duo);
        let position = Position::new();
        assert_eq!(
            rules.apply(&position, &Move::new(idx(12), Direction::Left)),
            Err(EngineError::Rule(RuleViolation::NotPerimeter(idx(12))))
        );
    }

    #[test]
    fn test_apply_rejects_invalid_direction() {
        let rules = QuixoRules::new(Mode::Duo);
        assert!(matches!(
            rules.apply(&Position::new(), &Move::new(idx(0), Direction::Top)),
            Err(EngineError::InvalidDirection { .. })
        ));
    }

    #[test]
    fn test_quartet_requires_axis_dot() {
        let rules = QuixoRules::new(Mode::Quartet);
        let position = Position::new();

        assert_eq!(
            rules.apply(&position, &Move::with_dot(idx(0), Direction::Right, Dot::Left)),
            Err(EngineError::InvalidDotAxis { seat: Seat::Top, dot: Dot::Left })
        );
        assert_eq!(
            rules.apply(&position, &Move::new(idx(0), Direction::Right)),
            Err(EngineError::MissingDot(Seat::Top))
        );

        let t = rules
            .apply(&position, &Move::with_dot(idx(0), Direction::Right, Dot::Down))
            .unwrap();
        assert_eq!(t.position.board[idx(4)], Cell::new(Symbol::Circle, Some(Dot::Down)));
        assert_eq!(t.record.team, Some(Team::A));
        assert_eq!(rules.seat_to_move(&t.position), Seat::Right);
    }

    #[test]
    fn test_evaluate_precedence() {
        let mut board = Board::new();
        for i in 0..5 {
            board.set(idx(i), Cell::new(Symbol::Circle, None));
            board.set(idx(20 + i), Cell::new(Symbol::Cross, None));
        }
        assert_eq!(QuixoRules::evaluate(&board, Symbol::Circle), Outcome::WonByMover);
        assert_eq!(QuixoRules::evaluate(&board, Symbol::Cross), Outcome::WonByMover);

        let mut board = Board::new();
        for i in 0..5 {
            board.set(idx(20 + i), Cell::new(Symbol::Cross, None));
        }
        assert_eq!(QuixoRules::evaluate(&board, Symbol::Circle), Outcome::WonByOpponentLine);
        assert_eq!(QuixoRules::evaluate(&Board::new(), Symbol::Circle), Outcome::InProgress);
    }

    #[test]
    fn test_legal_moves_on_fresh_board() {
        // 4 corners × 2 + 12 edges × 3
        let duo = QuixoRules::new(Mode::Duo);
        assert_eq!(duo.legal_moves(&Position::new()).len(), 44);

        let quartet = QuixoRules::new(Mode::Quartet);
        assert_eq!(quartet.legal_moves(&Position::new()).len(), 88);
    }

    #[test]
    fn test_turn_counter_exhausted() {
        let rules = QuixoRules::new(Mode::Duo);
        let position = Position::resume(Board::new(), u32::MAX);

        assert_eq!(
            rules.apply(&position, &Move::new(idx(0), Direction::Right)),
            Err(EngineError::TurnOverflow(u32::MAX))
        );
    }

    #[test]
    fn test_finishing_move_on_last_turn() {
        let mut board = Board::new();
        for i in 0..4 {
            board.set(idx(i), Cell::new(Symbol::Circle, None));
        }
        // u32::MAX is odd, so TOP acts
        let position = Position::resume(board, u32::MAX);

        let t = rules_duo().apply(&position, &Move::new(idx(4), Direction::Left)).unwrap();
        assert_eq!(t.outcome, Outcome::WonByMover);
        assert_eq!(t.position.turn, u32::MAX);
    }

    fn rules_duo() -> QuixoRules {
        QuixoRules::new(Mode::Duo)
    }

    #[test]
    fn test_finished_position_rejects_moves() {
        let rules = QuixoRules::new(Mode::Duo);
        let mut position = Position::new();
        position.status = GameStatus::Finished(GameResult {
            outcome: Outcome::WonByMover,
            mover: Seat::Top,
            winner: Symbol::Circle,
        });

        assert_eq!(
            rules.apply(&position, &Move::new(idx(0), Direction::Right)),
            Err(EngineError::GameOver)
        );
        assert!(rules.legal_moves(&position).is_empty());
        assert!(rules.is_terminal(&position).is_some());
    }
}
