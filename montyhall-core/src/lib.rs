//! Monty Hall core — the game model.
//!
//! This crate contains everything needed to play a single round:
//! - Domain types (doors, prizes, strategies, outcomes, rounds)
//! - The five round steps plus `play_game`, which composes them
//! - Invalid-input errors for hand-built doors and assignments
//! - A BLAKE3-seeded RNG hierarchy for reproducible, order-free batches
//!
//! Randomness is always passed in explicitly; nothing here touches a global
//! generator.

pub mod domain;
pub mod error;
pub mod game;
pub mod rng;

pub use domain::{DoorAssignment, DoorIndex, Outcome, Prize, Round, RoundResult, Strategy};
pub use error::GameError;
pub use game::{change_door, create_game, determine_winner, open_goat_door, play_game, select_door};
pub use rng::RngHierarchy;
