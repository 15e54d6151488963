//! A caller-held game session.
//!
//! `GameSession` bundles the configuration, the rules for its mode, the
//! current `Position` and the move history. Every operation is atomic:
//! on error the session is left exactly as it was.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::core::{
    Board, CellIndex, GameConfig, GameResult, GameStatus, Mode, Move, MoveRecord, Participant,
    Position, Seat, Symbol,
};
use crate::error::EngineError;
use crate::history::GameSummary;
use crate::rules::{has_line, PickApproval, QuixoRules, RulesEngine};

/// One game in progress (or finished).
///
/// Cloning is cheap: history is a persistent vector.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rules: QuixoRules,
    position: Position,
    history: Vector<MoveRecord>,
}

impl GameSession {
    /// Start a new game on a fresh board.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::resume(config, Board::new(), 1)
    }

    /// Continue a game from a board and turn held by the caller.
    ///
    /// A board that already holds a line of five is refused.
    pub fn resume(config: GameConfig, board: Board, turn: u32) -> Result<Self, EngineError> {
        config.validate()?;
        if let Some(symbol) = [Symbol::Circle, Symbol::Cross]
            .into_iter()
            .find(|&symbol| has_line(&board, symbol))
        {
            return Err(EngineError::BoardDecided(symbol));
        }
        let rules = QuixoRules::new(config.mode);
        Ok(Self {
            config,
            rules,
            position: Position::resume(board, turn),
            history: Vector::new(),
        })
    }

    /// Back to a fresh board on turn 1, same roster.
    pub fn restart(&mut self) {
        self.position = Position::new();
        self.history.clear();
        debug!(mode = %self.config.mode, "session restarted");
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    #[must_use]
    pub fn rules(&self) -> &QuixoRules {
        &self.rules
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.position.turn
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.position.status
    }

    #[must_use]
    pub fn seat_to_move(&self) -> Seat {
        self.rules.seat_to_move(&self.position)
    }

    #[must_use]
    pub fn symbol_to_move(&self) -> Symbol {
        self.mode().symbol_of(self.seat_to_move())
    }

    #[must_use]
    pub fn is_first_round(&self) -> bool {
        self.mode().is_first_round(self.position.turn)
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Every legal move for the acting seat.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.rules.legal_moves(&self.position)
    }

    /// Ask whether the acting seat may pick up the cube at `index`.
    #[instrument(level = "trace", skip(self), fields(turn = self.position.turn))]
    pub fn select(&self, index: usize) -> Result<PickApproval, EngineError> {
        if self.position.is_finished() {
            return Err(EngineError::GameOver);
        }
        let index = CellIndex::new(index)?;
        self.rules.can_pick(&self.position, index).map_err(|violation| {
            debug!(seat = %self.seat_to_move(), %index, code = violation.code(), "pick refused");
            EngineError::from(violation)
        })
    }

    /// Play a move for the acting seat.
    ///
    /// Returns the record to persist. The session advances to the next turn
    /// or finishes.
    #[instrument(level = "debug", skip(self), fields(turn = self.position.turn), err)]
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, EngineError> {
        let transition = self.rules.apply(&self.position, &mv)?;

        debug!(
            seat = %transition.record.seat,
            picked = %transition.record.picked,
            placed = %transition.record.placed_index,
            direction = %transition.record.direction,
            "move played"
        );

        if let GameStatus::Finished(result) = transition.position.status {
            info!(
                mode = %self.config.mode,
                winner = %result.winner,
                mover = %result.mover,
                outcome = ?result.outcome,
                moves = transition.record.sequence,
                "game finished"
            );
        }

        self.position = transition.position;
        self.history.push_back(transition.record.clone());
        Ok(transition.record)
    }

    /// The finished game, for statistics. `None` while in progress.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        let result: GameResult = self.position.status.result()?;
        Some(GameSummary {
            mode: self.config.mode,
            participants: self.participants(),
            result,
        })
    }

    /// The roster in turn order.
    #[must_use]
    pub fn participants(&self) -> Vec<Participant> {
        self.config.participants()
    }
}
