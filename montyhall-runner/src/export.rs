//! Export — JSON and CSV artifacts for batch results.
//!
//! - **JSON**: full round-trip serialization with schema versioning
//! - **CSV**: one row per round, plus the strategy × outcome proportion table
//!
//! Unknown schema versions are rejected on load.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use montyhall_core::domain::Round;

use crate::batch::{BatchResult, SCHEMA_VERSION};
use crate::summary::Summary;

// ─── JSON export ────────────────────────────────────────────────────

pub fn export_json(result: &BatchResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize BatchResult to JSON")
}

/// Deserialize a `BatchResult` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<BatchResult> {
    let result: BatchResult =
        serde_json::from_str(json).context("failed to deserialize BatchResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Columns: round, assignment, initial_pick, opened_door, stay_pick,
/// stay_outcome, switch_pick, switch_outcome. Rounds are numbered from 1.
pub fn export_rounds_csv(rounds: &[Round]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "round",
        "assignment",
        "initial_pick",
        "opened_door",
        "stay_pick",
        "stay_outcome",
        "switch_pick",
        "switch_outcome",
    ])?;

    for (i, r) in rounds.iter().enumerate() {
        let prizes: Vec<String> = r.assignment.prizes().iter().map(|p| p.to_string()).collect();
        wtr.write_record([
            &(i + 1).to_string(),
            &prizes.join(" "),
            &r.initial_pick.to_string(),
            &r.opened_door.to_string(),
            &r.stay.final_pick.to_string(),
            &r.stay.outcome.to_string(),
            &r.switch.final_pick.to_string(),
            &r.switch.outcome.to_string(),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Proportion table with strategy, win, and lose columns.
pub fn export_summary_csv(summary: &Summary) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["strategy", "win", "lose"])?;
    for (strategy, win, lose) in summary.rows() {
        wtr.write_record([
            strategy.to_string(),
            format!("{:.2}", win),
            format!("{:.2}", lose),
        ])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for a batch.
///
/// Creates a directory named `{seed}_{timestamp}/` under `output_dir`
/// (`rng_{timestamp}/` for caller-seeded batches) containing:
/// - `batch.json` — the full `BatchResult`
/// - `rounds.csv` — one row per round
/// - `summary.csv` — proportion table
///
/// Returns the path to the created directory.
pub fn save_artifacts(result: &BatchResult, output_dir: &Path) -> Result<PathBuf> {
    let label = result
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "rng".to_string());
    let dirname = format!("{}_{}", label, chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let run_dir = output_dir.join(dirname);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    std::fs::write(run_dir.join("batch.json"), export_json(result)?)?;
    std::fs::write(run_dir.join("rounds.csv"), export_rounds_csv(&result.rounds)?)?;
    std::fs::write(run_dir.join("summary.csv"), export_summary_csv(&result.summary)?)?;

    log::debug!("saved batch artifacts to {}", run_dir.display());
    Ok(run_dir)
}

/// Load a `BatchResult` from an artifact directory's batch.json.
pub fn load_artifacts(dir: &Path) -> Result<BatchResult> {
    let path = dir.join("batch.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}
