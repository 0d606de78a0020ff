//! Invalid-input errors raised by the game model.

use thiserror::Error;

use crate::domain::DoorIndex;

/// Errors from constructing or playing a game.
///
/// Every variant is a caller bug: values produced by the game's own steps
/// are valid by construction and never hit these paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("door index {0} out of range (expected 1..=3)")]
    DoorOutOfRange(u8),
    #[error("assignment must hold exactly one car, found {cars}")]
    MalformedAssignment { cars: usize },
    #[error("cannot switch away from door {0}: the host opened the contestant's own door")]
    OpenedPickedDoor(DoorIndex),
}
