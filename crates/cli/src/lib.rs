//! Command-line support for U-Sheetcut.
//!
//! This crate provides:
//! - A file-backed calculation history keyed by id and label
//! - Replay of stored request/result pairs
//! - The `sheetcut` binary

mod history;

pub use history::{CalculationRecord, HistoryEntry, HistoryStore, ReplayOutcome};

/// History file used when none is given on the command line.
pub const DEFAULT_HISTORY_FILE: &str = "sheetcut-history.json";
