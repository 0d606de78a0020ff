//! Monty Hall Runner — batch simulation, outcome tables, configuration, export.
//!
//! This crate builds on `montyhall-core` to provide:
//! - TOML-loadable batch configuration with documented defaults
//! - Batch runner, sequential or parallel, reproducible under a master seed
//! - Strategy × outcome counting and the rounded proportion table
//! - JSON and CSV artifacts

pub mod batch;
pub mod config;
pub mod export;
pub mod summary;

pub use batch::{play_n_games, play_n_games_with, BatchError, BatchResult, SCHEMA_VERSION};
pub use config::{ConfigError, SimulationConfig, DEFAULT_ROUNDS};
pub use export::{
    export_json, export_rounds_csv, export_summary_csv, import_json, load_artifacts,
    save_artifacts,
};
pub use summary::{OutcomeTable, Summary};
