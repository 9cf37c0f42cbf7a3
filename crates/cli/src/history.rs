//! Calculation history.
//!
//! Saved calculations are kept in a single JSON file. Each record stores the
//! request and the result as JSON text together with an opaque numeric id,
//! the time of saving and a user-supplied label.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use u_sheetcut_core::{Error, OptimizationRequest, OptimizationResult, Result};
use u_sheetcut_cutting::{CuttingConfig, SheetFillingScheduler};

/// A saved calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    /// Opaque identifier.
    pub id: u64,
    /// When the record was saved.
    pub date: DateTime<Utc>,
    /// Label given by the user.
    pub summary: String,
    /// The request as JSON.
    pub input_json: String,
    /// The result as JSON.
    pub result_json: String,
}

impl CalculationRecord {
    /// Parses the stored request.
    pub fn request(&self) -> Result<OptimizationRequest> {
        serde_json::from_str(&self.input_json).map_err(|e| {
            Error::ParseError(format!("record {} input: {}", self.id, e))
        })
    }

    /// Parses the stored result.
    pub fn result(&self) -> Result<OptimizationResult> {
        serde_json::from_str(&self.result_json).map_err(|e| {
            Error::ParseError(format!("record {} result: {}", self.id, e))
        })
    }
}

/// Lightweight listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Record identifier.
    pub id: u64,
    /// When the record was saved.
    pub date: DateTime<Utc>,
    /// Label given by the user.
    pub summary: String,
}

/// Outcome of re-running a stored request.
#[derive(Debug, Clone)]
pub struct ReplayOutcome {
    /// The replayed record.
    pub record_id: u64,
    /// Whether the fresh result equals the stored one.
    pub matches: bool,
    /// The freshly computed result.
    pub fresh: OptimizationResult,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryFile {
    next_id: u64,
    records: Vec<CalculationRecord>,
}

/// File-backed store of saved calculations.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    data: HistoryFile,
}

impl HistoryStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let text = fs::read_to_string(&path)?;
            serde_json::from_str(&text)
                .map_err(|e| Error::ParseError(format!("{}: {}", path.display(), e)))?
        } else {
            HistoryFile::default()
        };
        Ok(Self { path, data })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.data.records.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.data.records.is_empty()
    }

    /// Saves a calculation under `label` and returns its id.
    pub fn save(
        &mut self,
        label: &str,
        request: &OptimizationRequest,
        result: &OptimizationResult,
    ) -> Result<u64> {
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::InvalidInput("a label is required".to_string()));
        }

        let input_json =
            serde_json::to_string(request).map_err(|e| Error::Internal(e.to_string()))?;
        let result_json =
            serde_json::to_string(result).map_err(|e| Error::Internal(e.to_string()))?;

        self.data.next_id += 1;
        let id = self.data.next_id;
        self.data.records.push(CalculationRecord {
            id,
            date: Utc::now(),
            summary: label.to_string(),
            input_json,
            result_json,
        });
        self.persist()?;

        log::debug!("saved calculation {} as {:?}", id, label);
        Ok(id)
    }

    /// Lists saved calculations, newest first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = self
            .data
            .records
            .iter()
            .map(|r| HistoryEntry {
                id: r.id,
                date: r.date,
                summary: r.summary.clone(),
            })
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        entries
    }

    /// Returns a saved calculation.
    pub fn get(&self, id: u64) -> Result<&CalculationRecord> {
        self.data
            .records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("history record {}", id)))
    }

    /// Deletes a saved calculation.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let before = self.data.records.len();
        self.data.records.retain(|r| r.id != id);
        if self.data.records.len() == before {
            return Err(Error::NotFound(format!("history record {}", id)));
        }
        self.persist()
    }

    /// Re-runs a stored request and compares against the stored result.
    ///
    /// Saw sequences are derived again if the stored result carries them.
    pub fn replay(&self, id: u64) -> Result<ReplayOutcome> {
        let record = self.get(id)?;
        let stored = record.result()?;
        let saw = stored.sheets.iter().any(|s| s.saw_steps.is_some());
        let scheduler =
            SheetFillingScheduler::new(CuttingConfig::new().with_saw_instructions(saw));
        let fresh = scheduler.solve_request(&record.request()?)?;

        Ok(ReplayOutcome {
            record_id: id,
            matches: fresh == stored,
            fresh,
        })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::Internal(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
