//! Domain types: doors, prizes, strategies, and per-round results.

pub mod door;
pub mod round;

pub use door::{DoorAssignment, DoorIndex, Prize, DOOR_COUNT};
pub use round::{Outcome, Round, RoundResult, Strategy};
