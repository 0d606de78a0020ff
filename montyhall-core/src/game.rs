//! The steps of a single round.
//!
//! Each step is a pure function of its inputs plus an explicit random source:
//! 1. `create_game` hides the car behind a random door
//! 2. `select_door` makes the contestant's first pick
//! 3. `open_goat_door` has the host reveal a goat
//! 4. `change_door` applies the stay/switch strategy
//! 5. `determine_winner` judges the final pick
//!
//! `play_game` composes them and judges both strategies on the same draw.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::{
    DoorAssignment, DoorIndex, Outcome, Prize, Round, RoundResult, Strategy, DOOR_COUNT,
};
use crate::error::GameError;

/// Hide one car and two goats behind the three doors.
///
/// The doors are shuffled and the car goes behind the first one drawn, so
/// each of the three arrangements is equally likely.
pub fn create_game<R: Rng + ?Sized>(rng: &mut R) -> DoorAssignment {
    let mut doors = DoorIndex::ALL;
    doors.shuffle(rng);
    DoorAssignment::with_car_at(doors[0])
}

/// The contestant's first pick, uniform over the three doors.
pub fn select_door<R: Rng + ?Sized>(rng: &mut R) -> DoorIndex {
    DoorIndex::ALL[rng.gen_range(0..DOOR_COUNT)]
}

/// The door the host opens: never the contestant's pick, never the car.
///
/// If the pick hides the car, both other doors hide goats and the host picks
/// one of them with probability 1/2. Otherwise the host has no choice.
pub fn open_goat_door<R: Rng + ?Sized>(
    game: &DoorAssignment,
    pick: DoorIndex,
    rng: &mut R,
) -> DoorIndex {
    let [first, second] = pick.others();
    if game.prize_at(pick) == Prize::Car {
        if rng.gen_bool(0.5) {
            first
        } else {
            second
        }
    } else if game.prize_at(first) == Prize::Car {
        second
    } else {
        first
    }
}

/// The contestant's final door under `strategy`.
///
/// `Stay` returns `pick` whatever the host opened. `Switch` returns the one
/// door that is neither opened nor picked, and fails if those coincide.
pub fn change_door(
    strategy: Strategy,
    opened_door: DoorIndex,
    pick: DoorIndex,
) -> Result<DoorIndex, GameError> {
    match strategy {
        Strategy::Stay => Ok(pick),
        Strategy::Switch => {
            DoorIndex::remaining(opened_door, pick).ok_or(GameError::OpenedPickedDoor(pick))
        }
    }
}

/// `Win` if `final_pick` hides the car, `Lose` otherwise.
pub fn determine_winner(final_pick: DoorIndex, game: &DoorAssignment) -> Outcome {
    match game.prize_at(final_pick) {
        Prize::Car => Outcome::Win,
        Prize::Goat => Outcome::Lose,
    }
}

/// Play one round and judge both strategies against it.
pub fn play_game<R: Rng + ?Sized>(rng: &mut R) -> Result<Round, GameError> {
    let assignment = create_game(rng);
    let initial_pick = select_door(rng);
    let opened_door = open_goat_door(&assignment, initial_pick, rng);

    let judge = |strategy: Strategy| -> Result<RoundResult, GameError> {
        let final_pick = change_door(strategy, opened_door, initial_pick)?;
        Ok(RoundResult {
            strategy,
            final_pick,
            outcome: determine_winner(final_pick, &assignment),
        })
    };

    Ok(Round {
        assignment,
        initial_pick,
        opened_door,
        stay: judge(Strategy::Stay)?,
        switch: judge(Strategy::Switch)?,
    })
}
