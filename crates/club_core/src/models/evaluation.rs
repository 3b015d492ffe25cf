//! Coach evaluations
//!
//! An evaluation is an immutable, dated record of a coach's updated ratings
//! for one player. Recording an evaluation applies its entries to the
//! player's attribute set and snapshots the resulting overall rating, so
//! historical reports stay stable even if the aggregation formula changes.

use crate::attributes::{overall, AttributeId};
use crate::error::{RatingError, Result};
use crate::models::player::Player;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The window of performance an evaluation covers. Invariant: start <= end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl EvaluationPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(RatingError::InvalidArgument(format!(
                "Evaluation period start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// One updated rating inside an evaluation. Order of entries is the coach's
/// evaluation order; the final state does not depend on it for distinct
/// attributes (last write wins for repeated ones).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationEntry {
    pub attribute: AttributeId,
    pub new_rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EvaluationEntry {
    pub fn new(attribute: AttributeId, new_rating: u8) -> Self {
        Self { attribute, new_rating, note: None }
    }

    pub fn with_note(attribute: AttributeId, new_rating: u8, note: impl Into<String>) -> Self {
        Self { attribute, new_rating, note: Some(note.into()) }
    }
}

/// Immutable, timestamped record of a coach's rating changes for a player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeEvaluation {
    pub id: String,
    pub player_id: String,
    pub entries: Vec<EvaluationEntry>,
    /// Computed at evaluation time and never recomputed.
    pub overall_rating: f32,
    pub period: EvaluationPeriod,
    pub evaluated_at: DateTime<Utc>,
}

impl AttributeEvaluation {
    /// Apply a coach's entries to `player` and record the evaluation.
    ///
    /// Unmentioned attributes keep their previous ratings; new ratings are
    /// clamped to 0..=99 by the set. The returned record carries the overall
    /// rating of the player's state after the change.
    pub fn record(
        player: &mut Player,
        entries: Vec<EvaluationEntry>,
        period: EvaluationPeriod,
    ) -> Result<AttributeEvaluation> {
        if entries.is_empty() {
            return Err(RatingError::InvalidArgument(
                "Evaluation must update at least one attribute".to_string(),
            ));
        }

        for entry in &entries {
            player.attributes.set(entry.attribute, entry.new_rating);
        }
        let snapshot = overall(&player.attributes)?;

        let evaluated_at = Utc::now();
        player.updated_at = evaluated_at;

        Ok(AttributeEvaluation {
            id: Uuid::new_v4().to_string(),
            player_id: player.id.clone(),
            entries,
            overall_rating: snapshot,
            period,
            evaluated_at,
        })
    }
}

/// Append-only log of evaluations, kept ordered by `evaluated_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EvaluationLog {
    evaluations: Vec<AttributeEvaluation>,
}

impl EvaluationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert preserving `evaluated_at` order. Out-of-order arrivals (e.g.
    /// an import of older records) land at their chronological position.
    pub fn append(&mut self, evaluation: AttributeEvaluation) {
        let at = self
            .evaluations
            .partition_point(|existing| existing.evaluated_at <= evaluation.evaluated_at);
        self.evaluations.insert(at, evaluation);
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeEvaluation> {
        self.evaluations.iter()
    }

    /// All evaluations for one player, oldest first.
    pub fn for_player<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = &'a AttributeEvaluation> {
        self.evaluations.iter().filter(move |e| e.player_id == player_id)
    }

    pub fn latest_for_player(&self, player_id: &str) -> Option<&AttributeEvaluation> {
        self.evaluations.iter().rev().find(|e| e.player_id == player_id)
    }
}
