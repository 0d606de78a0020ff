//! Batch runner: many independent rounds, tallied per strategy.
//!
//! Two entry points:
//! - `play_n_games()`: seeds every round from a BLAKE3 hierarchy, so the
//!   result is identical sequentially or on the rayon pool.
//! - `play_n_games_with()`: drives every round from one caller-supplied RNG.

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use montyhall_core::domain::{Round, RoundResult, Strategy};
use montyhall_core::error::GameError;
use montyhall_core::game::play_game;
use montyhall_core::rng::RngHierarchy;

use crate::config::{ConfigError, SimulationConfig};
use crate::summary::{OutcomeTable, Summary};

/// Current schema version for persisted batch results.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("round failed: {0}")]
    Game(#[from] GameError),
}

/// Every round of a batch plus its summary table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Master seed of the hierarchy; `None` when the caller supplied the RNG.
    pub seed: Option<u64>,
    pub rounds: Vec<Round>,
    pub summary: Summary,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl BatchResult {
    fn from_rounds(seed: Option<u64>, rounds: Vec<Round>, table: OutcomeTable) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            summary: table.summarize(),
            rounds,
        }
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// All `2n` results in play order: round 1 stay, round 1 switch, round 2 stay, ...
    pub fn results(&self) -> impl Iterator<Item = RoundResult> + '_ {
        self.rounds.iter().flat_map(|r| r.results())
    }

    pub fn results_for(&self, strategy: Strategy) -> impl Iterator<Item = &RoundResult> + '_ {
        self.rounds.iter().map(move |r| r.result_for(strategy))
    }
}

/// Play `config.rounds` independent rounds.
///
/// Round `i` draws from `RngHierarchy::rng_for(i)`. An unseeded config gets a
/// fresh master seed, which is logged and stored in the result for replay.
pub fn play_n_games(config: &SimulationConfig) -> Result<BatchResult, BatchError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let hierarchy = RngHierarchy::new(seed);

    log::info!(
        "playing {} rounds (seed {seed}, {})",
        config.rounds,
        if config.parallel { "parallel" } else { "sequential" }
    );

    let (rounds, table) = if config.parallel {
        let rounds = (0..config.rounds)
            .into_par_iter()
            .map(|i| play_game(&mut hierarchy.rng_for(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let table = rounds
            .par_iter()
            .fold(OutcomeTable::new, |mut table, round| {
                table.record_round(round);
                table
            })
            .reduce(OutcomeTable::new, OutcomeTable::merge);
        (rounds, table)
    } else {
        let rounds = (0..config.rounds)
            .map(|i| play_game(&mut hierarchy.rng_for(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let table = OutcomeTable::from_rounds(&rounds);
        (rounds, table)
    };

    let result = BatchResult::from_rounds(Some(seed), rounds, table);
    log_rates(&result.summary);
    Ok(result)
}

/// Play `rounds` rounds back to back from a single random stream.
pub fn play_n_games_with<R: Rng + ?Sized>(
    rng: &mut R,
    rounds: u64,
) -> Result<BatchResult, BatchError> {
    SimulationConfig::with_rounds(rounds).validate()?;
    log::info!("playing {rounds} rounds from caller RNG");

    let rounds = (0..rounds)
        .map(|_| play_game(&mut *rng))
        .collect::<Result<Vec<_>, _>>()?;
    let table = OutcomeTable::from_rounds(&rounds);

    let result = BatchResult::from_rounds(None, rounds, table);
    log_rates(&result.summary);
    Ok(result)
}

fn log_rates(summary: &Summary) {
    log::info!(
        "win rates: stay {:.2}, switch {:.2}",
        summary.win_rate(Strategy::Stay),
        summary.win_rate(Strategy::Switch)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use montyhall_core::domain::Outcome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_rounds_is_invalid() {
        let err = play_n_games(&SimulationConfig::with_rounds(0)).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Config(ConfigError::InvalidRoundCount(0))
        ));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(play_n_games_with(&mut rng, 0).is_err());
    }

    #[test]
    fn unseeded_run_records_its_seed() {
        let result = play_n_games(&SimulationConfig::with_rounds(10)).unwrap();
        let seed = result.seed.expect("seed recorded");

        let replay = play_n_games(&SimulationConfig::with_rounds(10).seeded(seed)).unwrap();
        assert_eq!(result.rounds, replay.rounds);
    }

    #[test]
    fn results_interleave_stay_and_switch() {
        let result = play_n_games(&SimulationConfig::with_rounds(5).seeded(3)).unwrap();
        let strategies: Vec<Strategy> = result.results().map(|r| r.strategy).collect();
        assert_eq!(strategies.len(), 10);
        for pair in strategies.chunks(2) {
            assert_eq!(pair, [Strategy::Stay, Strategy::Switch]);
        }
    }

    #[test]
    fn summary_matches_round_outcomes() {
        let result = play_n_games(&SimulationConfig::with_rounds(50).seeded(8)).unwrap();
        let stay_wins = result
            .results_for(Strategy::Stay)
            .filter(|r| r.outcome == Outcome::Win)
            .count() as u64;
        assert_eq!(result.summary.counts.count(Strategy::Stay, Outcome::Win), stay_wins);
    }

    #[test]
    fn caller_rng_batch_has_no_seed() {
        let mut rng = StdRng::seed_from_u64(21);
        let result = play_n_games_with(&mut rng, 20).unwrap();
        assert_eq!(result.seed, None);
        assert_eq!(result.round_count(), 20);
    }
}
