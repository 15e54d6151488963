//! Win statistics over finished games.
//!
//! DUO is ranked per player, QUARTET per team. Effectiveness is
//! `wins / played * 100`, rounded to two decimals.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameResult, Mode, Participant, PlayerId, Team};

/// A finished game as the statistics see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub mode: Mode,
    pub participants: Vec<Participant>,
    pub result: GameResult,
}

impl GameSummary {
    /// Players seated on the winning side.
    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.participants
            .iter()
            .filter(|p| p.symbol == self.result.winner)
            .map(|p| p.player)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player: PlayerId,
    pub wins: u32,
    pub played: u32,
    pub effectiveness_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team: Team,
    pub wins: u32,
    pub played: u32,
    pub effectiveness_pct: f64,
}

#[derive(Default)]
struct Tally {
    wins: u32,
    played: u32,
}

fn effectiveness(wins: u32, played: u32) -> f64 {
    if played == 0 {
        return 0.0;
    }
    let pct = f64::from(wins) / f64::from(played) * 100.0;
    (pct * 100.0).round() / 100.0
}

/// Per-player ranking over DUO games, best first.
#[must_use]
pub fn duo_stats(games: &[GameSummary]) -> Vec<PlayerStats> {
    let mut tallies: FxHashMap<PlayerId, Tally> = FxHashMap::default();

    for game in games.iter().filter(|g| g.mode == Mode::Duo) {
        for participant in &game.participants {
            let tally = tallies.entry(participant.player).or_default();
            tally.played += 1;
            if participant.symbol == game.result.winner {
                tally.wins += 1;
            }
        }
    }

    let mut stats: Vec<_> = tallies
        .into_iter()
        .map(|(player, tally)| PlayerStats {
            player,
            wins: tally.wins,
            played: tally.played,
            effectiveness_pct: effectiveness(tally.wins, tally.played),
        })
        .collect();

    // player id breaks ties so the order does not depend on hashing
    stats.sort_by(|a, b| {
        b.effectiveness_pct
            .total_cmp(&a.effectiveness_pct)
            .then(b.wins.cmp(&a.wins))
            .then(a.player.cmp(&b.player))
    });
    stats
}

/// Per-team ranking over QUARTET games, best first.
///
/// Both teams play every QUARTET game, so `played` is the number of
/// finished QUARTET games for each.
#[must_use]
pub fn quartet_stats(games: &[GameSummary]) -> Vec<TeamStats> {
    let quartet: Vec<_> = games.iter().filter(|g| g.mode == Mode::Quartet).collect();
    let played = u32::try_from(quartet.len()).unwrap_or(u32::MAX);

    let mut stats: Vec<_> = [Team::A, Team::B]
        .into_iter()
        .map(|team| {
            let wins = quartet
                .iter()
                .filter(|g| g.result.winning_team(Mode::Quartet) == Some(team))
                .count();
            let wins = u32::try_from(wins).unwrap_or(u32::MAX);
            TeamStats {
                team,
                wins,
                played,
                effectiveness_pct: effectiveness(wins, played),
            }
        })
        .collect();

    stats.sort_by(|a, b| {
        b.effectiveness_pct
            .total_cmp(&a.effectiveness_pct)
            .then(b.wins.cmp(&a.wins))
    });
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Outcome, Seat, Symbol};

    fn duo_game(top: u64, bottom: u64, winner: Symbol) -> GameSummary {
        let config = GameConfig::duo(PlayerId::new(top), PlayerId::new(bottom));
        GameSummary {
            mode: Mode::Duo,
            participants: config.participants(),
            result: GameResult {
                outcome: Outcome::WonByMover,
                mover: Seat::Top,
                winner,
            },
        }
    }

    fn quartet_game(winner: Symbol) -> GameSummary {
        let config = GameConfig::quartet(
            PlayerId::new(1),
            PlayerId::new(2),
            PlayerId::new(3),
            PlayerId::new(4),
        );
        GameSummary {
            mode: Mode::Quartet,
            participants: config.participants(),
            result: GameResult {
                outcome: Outcome::WonByMover,
                mover: Seat::Right,
                winner,
            },
        }
    }

    #[test]
    fn test_effectiveness_rounding() {
        assert_eq!(effectiveness(0, 0), 0.0);
        assert_eq!(effectiveness(1, 3), 33.33);
        assert_eq!(effectiveness(2, 3), 66.67);
        assert_eq!(effectiveness(3, 3), 100.0);
    }

    #[test]
    fn test_duo_stats() {
        let games = vec![
            duo_game(1, 2, Symbol::Circle),
            duo_game(2, 1, Symbol::Circle),
            duo_game(1, 3, Symbol::Circle),
            quartet_game(Symbol::Cross),
        ];
        let stats = duo_stats(&games);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].player, PlayerId::new(1));
        assert_eq!(stats[0].wins, 2);
        assert_eq!(stats[0].played, 3);
        assert_eq!(stats[0].effectiveness_pct, 66.67);

        assert_eq!(stats[1].player, PlayerId::new(2));
        assert_eq!(stats[1].effectiveness_pct, 50.0);

        assert_eq!(stats[2].player, PlayerId::new(3));
        assert_eq!(stats[2].wins, 0);
        assert_eq!(stats[2].effectiveness_pct, 0.0);
    }

    #[test]
    fn test_quartet_stats() {
        let games = vec![
            quartet_game(Symbol::Cross),
            quartet_game(Symbol::Cross),
            quartet_game(Symbol::Circle),
            duo_game(1, 2, Symbol::Circle),
        ];
        let stats = quartet_stats(&games);

        assert_eq!(stats[0].team, Team::B);
        assert_eq!(stats[0].wins, 2);
        assert_eq!(stats[0].played, 3);
        assert_eq!(stats[0].effectiveness_pct, 66.67);
        assert_eq!(stats[1].team, Team::A);
        assert_eq!(stats[1].effectiveness_pct, 33.33);
    }

    #[test]
    fn test_no_games() {
        assert!(duo_stats(&[]).is_empty());
        let stats = quartet_stats(&[]);
        assert_eq!(stats.len(), 2);
        assert!(stats.iter().all(|s| s.played == 0 && s.effectiveness_pct == 0.0));
    }

    #[test]
    fn test_summary_winners() {
        let game = quartet_game(Symbol::Circle);
        let winners: Vec<_> = game.winners().collect();
        assert_eq!(winners, vec![PlayerId::new(1), PlayerId::new(3)]);
    }
}
