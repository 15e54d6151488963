//! Seats, teams, game modes and player identification.
//!
//! ## Seat
//!
//! The four sides of the table. In DUO, TOP plays the circle and BOTTOM
//! the cross. In QUARTET the symbol follows the team: TOP/BOTTOM play the
//! circle, RIGHT/LEFT the cross.
//!
//! ## Mode
//!
//! DUO seats TOP and BOTTOM only, without teams. QUARTET seats all four
//! in two teams: A = {TOP, BOTTOM}, B = {RIGHT, LEFT}.
//!
//! ## SeatMap
//!
//! Fixed per-seat storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use super::board::{Dot, Symbol};

/// Identifier of a human player, as known by the surrounding system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Seat {
    Top,
    Right,
    Bottom,
    Left,
}

impl Seat {
    /// QUARTET turn order.
    pub const ALL: [Seat; 4] = [Seat::Top, Seat::Right, Seat::Bottom, Seat::Left];

    /// The QUARTET team this seat belongs to.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Seat::Top | Seat::Bottom => Team::A,
            Seat::Right | Seat::Left => Team::B,
        }
    }

    /// The dot an own-symbol cube must show for this seat to pick it up.
    #[must_use]
    pub const fn facing_dot(self) -> Dot {
        match self {
            Seat::Top => Dot::Up,
            Seat::Right => Dot::Right,
            Seat::Bottom => Dot::Down,
            Seat::Left => Dot::Left,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Seat::Top => 0,
            Seat::Right => 1,
            Seat::Bottom => 2,
            Seat::Left => 3,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Seat::Top => "TOP",
            Seat::Right => "RIGHT",
            Seat::Bottom => "BOTTOM",
            Seat::Left => "LEFT",
        };
        f.write_str(s)
    }
}

/// QUARTET team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// TOP and BOTTOM, circle.
    A,
    /// RIGHT and LEFT, cross.
    B,
}

impl Team {
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        match self {
            Team::A => Symbol::Circle,
            Team::B => Symbol::Cross,
        }
    }

    /// The team playing `symbol`, if any.
    #[must_use]
    pub const fn of_symbol(symbol: Symbol) -> Option<Team> {
        match symbol {
            Symbol::Circle => Some(Team::A),
            Symbol::Cross => Some(Team::B),
            Symbol::Neutral => None,
        }
    }

    /// Whether `dot` lies on this team's axis (A: Up/Down, B: Left/Right).
    #[must_use]
    pub const fn allows_dot(self, dot: Dot) -> bool {
        match self {
            Team::A => dot.is_vertical(),
            Team::B => !dot.is_vertical(),
        }
    }

    /// The two dots this team may place.
    #[must_use]
    pub const fn dots(self) -> [Dot; 2] {
        match self {
            Team::A => [Dot::Up, Dot::Down],
            Team::B => [Dot::Left, Dot::Right],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => f.write_str("A"),
            Team::B => f.write_str("B"),
        }
    }
}

/// Game variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Two players, TOP (circle) against BOTTOM (cross).
    Duo,
    /// Four players in two teams.
    Quartet,
}

impl Mode {
    /// Seats in turn order.
    #[must_use]
    pub fn seats(self) -> &'static [Seat] {
        match self {
            Mode::Duo => &[Seat::Top, Seat::Bottom],
            Mode::Quartet => &Seat::ALL,
        }
    }

    #[must_use]
    pub fn seat_count(self) -> usize {
        self.seats().len()
    }

    /// Whether `seat` takes part in this mode.
    #[must_use]
    pub fn has_seat(self, seat: Seat) -> bool {
        self.seats().contains(&seat)
    }

    /// The seat acting on `turn` (1-based).
    ///
    /// DUO: odd turns TOP, even turns BOTTOM. QUARTET cycles
    /// TOP, RIGHT, BOTTOM, LEFT.
    #[must_use]
    pub fn seat_for_turn(self, turn: u32) -> Seat {
        let seats = self.seats();
        seats[(turn.max(1) as usize - 1) % seats.len()]
    }

    /// Whether `turn` falls in the first full cycle of seats.
    #[must_use]
    pub fn is_first_round(self, turn: u32) -> bool {
        (turn as usize) <= self.seat_count()
    }

    /// The symbol `seat` plays.
    #[must_use]
    pub const fn symbol_of(self, seat: Seat) -> Symbol {
        match (self, seat) {
            (Mode::Duo, Seat::Top) => Symbol::Circle,
            (Mode::Duo, _) => Symbol::Cross,
            (Mode::Quartet, seat) => seat.team().symbol(),
        }
    }

    /// The recorded team of `seat`. DUO has no teams.
    #[must_use]
    pub fn team_of(self, seat: Seat) -> Option<Team> {
        match self {
            Mode::Duo => None,
            Mode::Quartet => Some(seat.team()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Duo => f.write_str("DUO"),
            Mode::Quartet => f.write_str("QUARTET"),
        }
    }
}

/// Per-seat storage with O(1) access.
///
/// ```
/// use quixo_engine::core::{Seat, SeatMap};
///
/// let mut players: SeatMap<Option<u64>> = SeatMap::default();
/// players[Seat::Top] = Some(1);
/// assert_eq!(players[Seat::Top], Some(1));
/// assert_eq!(players[Seat::Left], None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 4],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.slot()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.slot()]
    }

    /// Iterate over `(Seat, &T)` in QUARTET turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
