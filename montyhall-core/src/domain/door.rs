use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GameError;

/// Number of doors on stage.
pub const DOOR_COUNT: usize = 3;

/// What stands behind a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Prize {
    Goat,
    Car,
}

impl fmt::Display for Prize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prize::Goat => write!(f, "GOAT"),
            Prize::Car => write!(f, "CAR"),
        }
    }
}

/// A door number, 1-based as announced on the show.
///
/// Only values in `1..=3` can be constructed, so every `DoorIndex` in the
/// program addresses a real door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DoorIndex(u8);

impl DoorIndex {
    pub const ONE: DoorIndex = DoorIndex(1);
    pub const TWO: DoorIndex = DoorIndex(2);
    pub const THREE: DoorIndex = DoorIndex(3);

    /// All doors in stage order.
    pub const ALL: [DoorIndex; DOOR_COUNT] = [Self::ONE, Self::TWO, Self::THREE];

    pub fn new(number: u8) -> Result<Self, GameError> {
        if (1..=DOOR_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(GameError::DoorOutOfRange(number))
        }
    }

    /// The 1-based door number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot into a `DoorAssignment`.
    pub fn position(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The two other doors, in stage order.
    pub fn others(self) -> [DoorIndex; 2] {
        match self.0 {
            1 => [Self::TWO, Self::THREE],
            2 => [Self::ONE, Self::THREE],
            _ => [Self::ONE, Self::TWO],
        }
    }

    /// The door that is neither `a` nor `b`, or `None` when they coincide.
    pub fn remaining(a: DoorIndex, b: DoorIndex) -> Option<DoorIndex> {
        if a == b {
            return None;
        }
        // 1 + 2 + 3 = 6
        Some(DoorIndex(6 - a.0 - b.0))
    }
}

impl TryFrom<u8> for DoorIndex {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<DoorIndex> for u8 {
    fn from(door: DoorIndex) -> u8 {
        door.0
    }
}

impl fmt::Display for DoorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The prizes behind the three doors for one round.
///
/// Always holds exactly one car and two goats; fixed once created. The car
/// door is recorded on construction alongside the prizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Prize; DOOR_COUNT]", into = "[Prize; DOOR_COUNT]")]
pub struct DoorAssignment {
    prizes: [Prize; DOOR_COUNT],
    car: DoorIndex,
}

impl DoorAssignment {
    pub fn new(prizes: [Prize; DOOR_COUNT]) -> Result<Self, GameError> {
        let cars = prizes.iter().filter(|p| **p == Prize::Car).count();
        let car = DoorIndex::ALL
            .into_iter()
            .find(|d| prizes[d.position()] == Prize::Car);
        match car {
            Some(car) if cars == 1 => Ok(Self { prizes, car }),
            _ => Err(GameError::MalformedAssignment { cars }),
        }
    }

    /// Build the assignment with the car behind `door` and goats elsewhere.
    pub fn with_car_at(door: DoorIndex) -> Self {
        let mut prizes = [Prize::Goat; DOOR_COUNT];
        prizes[door.position()] = Prize::Car;
        Self { prizes, car: door }
    }

    pub fn prize_at(&self, door: DoorIndex) -> Prize {
        self.prizes[door.position()]
    }

    pub fn car_door(&self) -> DoorIndex {
        self.car
    }

    pub fn prizes(&self) -> &[Prize; DOOR_COUNT] {
        &self.prizes
    }
}

impl TryFrom<[Prize; DOOR_COUNT]> for DoorAssignment {
    type Error = GameError;

    fn try_from(prizes: [Prize; DOOR_COUNT]) -> Result<Self, Self::Error> {
        Self::new(prizes)
    }
}

impl From<DoorAssignment> for [Prize; DOOR_COUNT] {
    fn from(assignment: DoorAssignment) -> Self {
        assignment.prizes
    }
}

impl fmt::Display for DoorAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.prizes;
        write!(f, "[{a}, {b}, {c}]")
    }
}
