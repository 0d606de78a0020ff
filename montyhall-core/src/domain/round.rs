use serde::{Deserialize, Serialize};
use std::fmt;

use super::door::{DoorAssignment, DoorIndex};

/// Whether the contestant keeps the first pick or takes the other closed door.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    #[default]
    Stay,
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => write!(f, "STAY"),
            Strategy::Switch => write!(f, "SWITCH"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub const ALL: [Outcome; 2] = [Outcome::Win, Outcome::Lose];
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Lose => write!(f, "LOSE"),
        }
    }
}

/// How one strategy fared in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundResult {
    pub strategy: Strategy,
    pub final_pick: DoorIndex,
    pub outcome: Outcome,
}

/// One full play-through.
///
/// Both strategies are judged against the same assignment, initial pick and
/// opened door, so `stay` and `switch` are paired draws rather than
/// independent trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub assignment: DoorAssignment,
    pub initial_pick: DoorIndex,
    pub opened_door: DoorIndex,
    pub stay: RoundResult,
    pub switch: RoundResult,
}

impl Round {
    /// Both results, stay first.
    pub fn results(&self) -> [RoundResult; 2] {
        [self.stay, self.switch]
    }

    pub fn result_for(&self, strategy: Strategy) -> &RoundResult {
        match strategy {
            Strategy::Stay => &self.stay,
            Strategy::Switch => &self.switch,
        }
    }
}
