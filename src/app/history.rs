// PlacePrep - app/history.rs
//
// Analysis history: a bounded, newest-first list of analyses persisted under
// one well-known storage key.
//
// Design principles:
// - Every operation is a full read-modify-write of one versioned JSON blob.
//   The backend makes writes atomic, so a failed write leaves the previous
//   history intact.
// - `list` never fails. An unparseable blob or a foreign schema version is
//   treated as an empty history; individual malformed entries are skipped.
//   Both cases are logged at WARN and nothing is rewritten until the next
//   successful mutation.
// - Mutations propagate backend read errors instead of writing over a
//   history they could not read.
// - Only the confidence map is caller-editable; every other field keeps its
//   stored value.
// - "Not found" is `None`, never an error.

use crate::core::model::{Analysis, Confidence};
use crate::core::scoring;
use crate::platform::storage::StorageBackend;
use crate::util::constants::{HISTORY_KEY, HISTORY_LIMIT, HISTORY_SCHEMA_VERSION};
use crate::util::error::StorageError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// On-disk layout
// =============================================================================

/// Envelope written to storage.
#[derive(Debug, Serialize)]
struct HistoryEnvelope<'a> {
    /// Schema version; must equal `HISTORY_SCHEMA_VERSION` to be accepted.
    version: u32,
    /// Newest first.
    analyses: &'a [Analysis],
}

/// Envelope as read back. Entries stay untyped so one bad entry cannot
/// poison the rest.
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    version: u32,
    #[serde(default)]
    analyses: Vec<Value>,
}

/// Decode a stored blob into analyses, skipping malformed entries.
///
/// Envelope-level problems are returned as errors; the caller decides how to
/// recover.
fn decode_history(raw: &str) -> Result<Vec<Analysis>, StorageError> {
    let envelope: RawEnvelope =
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt {
            key: HISTORY_KEY.to_string(),
            source: e,
        })?;

    if envelope.version != HISTORY_SCHEMA_VERSION {
        return Err(StorageError::SchemaVersion {
            key: HISTORY_KEY.to_string(),
            found: envelope.version,
            expected: HISTORY_SCHEMA_VERSION,
        });
    }

    let total = envelope.analyses.len();
    let analyses: Vec<Analysis> = envelope
        .analyses
        .into_iter()
        .filter_map(decode_entry)
        .collect();

    if analyses.len() < total {
        tracing::warn!(
            skipped = total - analyses.len(),
            kept = analyses.len(),
            "Skipped malformed history entries"
        );
    }
    Ok(analyses)
}

/// Accept an entry only if it has a non-empty `id` and `jobText` and decodes
/// into a full `Analysis`.
fn decode_entry(value: Value) -> Option<Analysis> {
    let non_empty = |field: &str| {
        value
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };
    if !non_empty("id") || !non_empty("jobText") {
        return None;
    }

    match serde_json::from_value::<Analysis>(value) {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            tracing::debug!(error = %e, "History entry does not decode");
            None
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// History of saved analyses over any `StorageBackend`.
#[derive(Debug)]
pub struct HistoryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> HistoryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Save a new analysis at the front of the history, evicting the oldest
    /// entries beyond `HISTORY_LIMIT`.
    pub fn create(&mut self, analysis: Analysis) -> Result<(), StorageError> {
        let mut analyses = self.load()?;
        tracing::info!(
            id = %analysis.id,
            company = %analysis.company,
            base_score = analysis.base_score,
            "Saving analysis"
        );
        analyses.insert(0, analysis);
        if analyses.len() > HISTORY_LIMIT {
            tracing::debug!(
                evicted = analyses.len() - HISTORY_LIMIT,
                "History limit reached, evicting oldest"
            );
            analyses.truncate(HISTORY_LIMIT);
        }
        self.persist(&analyses)
    }

    /// All valid saved analyses, newest first. Never fails.
    pub fn list(&self) -> Vec<Analysis> {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "History unreadable, treating as empty");
            Vec::new()
        })
    }

    pub fn get_by_id(&self, id: &str) -> Option<Analysis> {
        self.list().into_iter().find(|a| a.id == id)
    }

    /// Write back the confidence map of an edited analysis.
    ///
    /// Only `skill_confidence_map` is taken from `analysis`; every other field
    /// keeps its stored value. The final score is recomputed from the stored
    /// base score and `updated_at` is bumped. Returns the stored entry, or
    /// `None` without touching storage if no entry has this id.
    pub fn update(&mut self, analysis: Analysis) -> Result<Option<Analysis>, StorageError> {
        let mut analyses = self.load()?;
        let Some(slot) = analyses.iter_mut().find(|a| a.id == analysis.id) else {
            tracing::debug!(id = %analysis.id, "Update for unknown analysis ignored");
            return Ok(None);
        };

        slot.skill_confidence_map = analysis.skill_confidence_map;
        slot.final_score = scoring::final_score(slot.base_score, &slot.skill_confidence_map);
        slot.updated_at = Utc::now();
        let updated = slot.clone();

        self.persist(&analyses)?;
        tracing::info!(
            id = %updated.id,
            final_score = updated.final_score,
            marks = updated.skill_confidence_map.len(),
            "Analysis updated"
        );
        Ok(Some(updated))
    }

    /// Mark a detected skill (`Some`) or clear its mark (`None`), then
    /// `update`.
    ///
    /// The skill is matched case-insensitively against the analysis' extracted
    /// skills and stored under its canonical spelling. Returns `None` if the id
    /// or the skill is unknown.
    pub fn set_skill_confidence(
        &mut self,
        id: &str,
        skill: &str,
        confidence: Option<Confidence>,
    ) -> Result<Option<Analysis>, StorageError> {
        let Some(mut analysis) = self.load()?.into_iter().find(|a| a.id == id) else {
            return Ok(None);
        };
        let Some(canonical) = analysis
            .all_skills()
            .find(|s| s.eq_ignore_ascii_case(skill.trim()))
            .map(str::to_string)
        else {
            tracing::warn!(id, skill, "Skill is not part of this analysis");
            return Ok(None);
        };

        match confidence {
            Some(c) => {
                analysis.skill_confidence_map.insert(canonical, c);
            }
            None => {
                analysis.skill_confidence_map.remove(&canonical);
            }
        }
        self.update(analysis)
    }

    /// Remove the whole history.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.backend.remove(HISTORY_KEY)?;
        tracing::info!("History cleared");
        Ok(())
    }

    /// Read the stored history. Corrupt or foreign-version blobs decode to an
    /// empty list; backend read failures are returned.
    fn load(&self) -> Result<Vec<Analysis>, StorageError> {
        let Some(raw) = self.backend.read(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match decode_history(&raw) {
            Ok(analyses) => Ok(analyses),
            Err(e @ (StorageError::Corrupt { .. } | StorageError::SchemaVersion { .. })) => {
                tracing::warn!(error = %e, "History discarded, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn persist(&mut self, analyses: &[Analysis]) -> Result<(), StorageError> {
        let envelope = HistoryEnvelope {
            version: HISTORY_SCHEMA_VERSION,
            analyses,
        };
        let json = serde_json::to_string(&envelope).map_err(|e| StorageError::Serialize {
            key: HISTORY_KEY.to_string(),
            source: e,
        })?;
        self.backend.write(HISTORY_KEY, &json)
    }
}
