//! Outcome counting and the per-strategy proportion table.
//!
//! `OutcomeTable` is a plain `Strategy × Outcome` counter. Tables merge by
//! addition, so partial tables from parallel workers combine in any order.
//! `Summary` normalizes each strategy row into proportions rounded to two
//! decimals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use montyhall_core::domain::{Outcome, Round, RoundResult, Strategy};

/// Decimal places kept in summary proportions.
pub const PROPORTION_DECIMALS: i32 = 2;

/// Counts of each outcome per strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTable {
    counts: BTreeMap<Strategy, BTreeMap<Outcome, u64>>,
}

impl Default for OutcomeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeTable {
    /// A table with every cell at zero.
    pub fn new() -> Self {
        let counts = Strategy::ALL
            .into_iter()
            .map(|s| {
                let row: BTreeMap<Outcome, u64> = Outcome::ALL.into_iter().map(|o| (o, 0)).collect();
                (s, row)
            })
            .collect();
        Self { counts }
    }

    pub fn from_rounds(rounds: &[Round]) -> Self {
        let mut table = Self::new();
        for round in rounds {
            table.record_round(round);
        }
        table
    }

    pub fn record(&mut self, result: &RoundResult) {
        *self
            .counts
            .entry(result.strategy)
            .or_default()
            .entry(result.outcome)
            .or_insert(0) += 1;
    }

    pub fn record_round(&mut self, round: &Round) {
        for result in round.results() {
            self.record(&result);
        }
    }

    /// Cell-wise sum of two tables.
    pub fn merge(mut self, other: OutcomeTable) -> Self {
        for (strategy, row) in other.counts {
            let ours = self.counts.entry(strategy).or_default();
            for (outcome, n) in row {
                *ours.entry(outcome).or_insert(0) += n;
            }
        }
        self
    }

    pub fn count(&self, strategy: Strategy, outcome: Outcome) -> u64 {
        self.counts
            .get(&strategy)
            .and_then(|row| row.get(&outcome))
            .copied()
            .unwrap_or(0)
    }

    /// Rounds recorded for `strategy`.
    pub fn total(&self, strategy: Strategy) -> u64 {
        self.counts
            .get(&strategy)
            .map(|row| row.values().sum())
            .unwrap_or(0)
    }

    /// Unrounded share of `strategy`'s rounds ending in `outcome`; 0.0 for an empty row.
    pub fn fraction(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        let total = self.total(strategy);
        if total == 0 {
            return 0.0;
        }
        self.count(strategy, outcome) as f64 / total as f64
    }

    pub fn summarize(&self) -> Summary {
        let proportions = Strategy::ALL
            .into_iter()
            .map(|strategy| {
                let win = round_to(self.fraction(strategy, Outcome::Win), PROPORTION_DECIMALS);
                // LOSE is the complement so the row sums to exactly 1.00 even
                // when both raw fractions sit on a rounding boundary.
                let lose = if self.total(strategy) == 0 {
                    0.0
                } else {
                    round_to(1.0 - win, PROPORTION_DECIMALS)
                };
                let row = BTreeMap::from([(Outcome::Win, win), (Outcome::Lose, lose)]);
                (strategy, row)
            })
            .collect();

        Summary {
            counts: self.clone(),
            proportions,
        }
    }
}

/// Per-strategy outcome proportions.
///
/// Row = strategy, column = outcome, cell = share of that strategy's rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub counts: OutcomeTable,
    pub proportions: BTreeMap<Strategy, BTreeMap<Outcome, f64>>,
}

impl Summary {
    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> f64 {
        self.proportions
            .get(&strategy)
            .and_then(|row| row.get(&outcome))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn win_rate(&self, strategy: Strategy) -> f64 {
        self.proportion(strategy, Outcome::Win)
    }

    /// `(strategy, win, lose)` rows in strategy order.
    pub fn rows(&self) -> impl Iterator<Item = (Strategy, f64, f64)> + '_ {
        Strategy::ALL.into_iter().map(move |s| {
            (
                s,
                self.proportion(s, Outcome::Win),
                self.proportion(s, Outcome::Lose),
            )
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use montyhall_core::domain::DoorIndex;

    fn result(strategy: Strategy, outcome: Outcome) -> RoundResult {
        RoundResult {
            strategy,
            final_pick: DoorIndex::ONE,
            outcome,
        }
    }

    fn table_with(stay_wins: u64, stay_losses: u64) -> OutcomeTable {
        let mut table = OutcomeTable::new();
        for _ in 0..stay_wins {
            table.record(&result(Strategy::Stay, Outcome::Win));
            table.record(&result(Strategy::Switch, Outcome::Lose));
        }
        for _ in 0..stay_losses {
            table.record(&result(Strategy::Stay, Outcome::Lose));
            table.record(&result(Strategy::Switch, Outcome::Win));
        }
        table
    }

    #[test]
    fn new_table_is_all_zero() {
        let table = OutcomeTable::new();
        for s in Strategy::ALL {
            assert_eq!(table.total(s), 0);
            for o in Outcome::ALL {
                assert_eq!(table.count(s, o), 0);
            }
        }
    }

    #[test]
    fn counts_and_fractions() {
        let table = table_with(1, 3);
        assert_eq!(table.count(Strategy::Stay, Outcome::Win), 1);
        assert_eq!(table.count(Strategy::Switch, Outcome::Win), 3);
        assert_eq!(table.total(Strategy::Stay), 4);
        assert!((table.fraction(Strategy::Switch, Outcome::Win) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn merge_adds_cells() {
        let merged = table_with(1, 2).merge(table_with(3, 4));
        assert_eq!(merged, table_with(4, 6));
    }

    #[test]
    fn summary_rounds_to_two_decimals() {
        let summary = table_with(1, 2).summarize();
        assert_eq!(summary.win_rate(Strategy::Stay), 0.33);
        assert_eq!(summary.proportion(Strategy::Stay, Outcome::Lose), 0.67);
        assert_eq!(summary.win_rate(Strategy::Switch), 0.67);
        assert_eq!(summary.proportion(Strategy::Switch, Outcome::Lose), 0.33);
    }

    #[test]
    fn rows_sum_to_one_on_rounding_boundary() {
        // 67 / 200 = 0.335 and 133 / 200 = 0.665: rounding each cell
        // independently could give 1.01.
        let summary = table_with(67, 133).summarize();
        for (_, win, lose) in summary.rows() {
            assert!((win + lose - 1.0).abs() < 1e-9, "{win} + {lose} != 1");
        }
    }

    #[test]
    fn empty_row_summarizes_to_zero() {
        let summary = OutcomeTable::new().summarize();
        assert_eq!(summary.win_rate(Strategy::Stay), 0.0);
        assert_eq!(summary.proportion(Strategy::Stay, Outcome::Lose), 0.0);
    }

    #[test]
    fn summary_serializes_with_labels() {
        let json = serde_json::to_string(&table_with(1, 1).summarize()).unwrap();
        assert!(json.contains("\"STAY\""));
        assert!(json.contains("\"WIN\":0.5"));
    }
}
