//! Game configuration: the mode and who sits where.
//!
//! - DUO needs TOP and BOTTOM, and no one at RIGHT or LEFT.
//! - QUARTET needs all four seats.
//!
//! Configs are validated on construction and when loaded from JSON.

use serde::{Deserialize, Serialize};

use super::board::Symbol;
use super::seat::{Mode, PlayerId, Seat, SeatMap, Team};
use crate::error::EngineError;

/// One seated player, as the surrounding system records it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub seat: Seat,
    pub player: PlayerId,

    /// `None` in DUO.
    pub team: Option<Team>,

    pub symbol: Symbol,

    /// 1-based position in the turn cycle.
    pub turn_order: u32,
}

/// Configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: Mode,

    /// Player seated at each side, if any.
    pub players: SeatMap<Option<PlayerId>>,
}

impl GameConfig {
    /// A DUO game.
    #[must_use]
    pub fn duo(top: PlayerId, bottom: PlayerId) -> Self {
        let mut players = SeatMap::default();
        players[Seat::Top] = Some(top);
        players[Seat::Bottom] = Some(bottom);
        Self {
            mode: Mode::Duo,
            players,
        }
    }

    /// A QUARTET game.
    #[must_use]
    pub fn quartet(top: PlayerId, right: PlayerId, bottom: PlayerId, left: PlayerId) -> Self {
        let mut players = SeatMap::default();
        players[Seat::Top] = Some(top);
        players[Seat::Right] = Some(right);
        players[Seat::Bottom] = Some(bottom);
        players[Seat::Left] = Some(left);
        Self {
            mode: Mode::Quartet,
            players,
        }
    }

    /// Seat (or unseat) a player.
    #[must_use]
    pub fn with_player(mut self, seat: Seat, player: Option<PlayerId>) -> Self {
        self.players[seat] = player;
        self
    }

    /// Load a config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the roster matches the mode.
    pub fn validate(&self) -> Result<(), EngineError> {
        for seat in Seat::ALL {
            let seated = self.players[seat].is_some();
            let expected = self.mode.has_seat(seat);
            if expected && !seated {
                return Err(EngineError::Config(format!(
                    "{} requires a player at {}",
                    self.mode, seat
                )));
            }
            if !expected && seated {
                return Err(EngineError::Config(format!(
                    "{} has no {} seat",
                    self.mode, seat
                )));
            }
        }
        Ok(())
    }

    /// The roster in turn order.
    #[must_use]
    pub fn participants(&self) -> Vec<Participant> {
        self.mode
            .seats()
            .iter()
            .zip(1u32..)
            .filter_map(|(&seat, turn_order)| {
                self.player_at(seat).map(|player| Participant {
                    seat,
                    player,
                    team: self.mode.team_of(seat),
                    symbol: self.mode.symbol_of(seat),
                    turn_order,
                })
            })
            .collect()
    }

    /// The player at `seat`, if any.
    #[must_use]
    pub fn player_at(&self, seat: Seat) -> Option<PlayerId> {
        self.players[seat]
    }
}
