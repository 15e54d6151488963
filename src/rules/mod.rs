//! Quixo rules.
//!
//! - `validator`: which perimeter cubes the acting seat may pick
//! - `push`: the pick-up/shift/insert mechanic
//! - `lines`: line-of-five detection
//! - `engine`: the `RulesEngine` trait tying them into turn transitions

pub mod engine;
pub mod lines;
pub mod push;
pub mod validator;

pub use engine::{QuixoRules, RulesEngine, Transition};
pub use lines::{has_line, winning_lines, Line, LINES};
pub use push::{placed_cell, push, PushResult};
pub use validator::{can_pick, PickApproval};
