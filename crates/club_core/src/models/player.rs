//! Player entity

use crate::attributes::{overall, AttributeSet};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A club member with exactly one attribute set.
///
/// Created with a complete baseline set; mutated only by applying coach
/// evaluations. Archiving is a flag, never a partial delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub attributes: AttributeSet,

    /// Archived players stay in the roster but are hidden from selection.
    #[serde(default)]
    pub archived: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// New player with every attribute at the baseline rating.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            attributes: AttributeSet::baseline(),
            archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_attributes(name: impl Into<String>, attributes: AttributeSet) -> Self {
        Self { attributes, ..Self::new(name) }
    }

    /// Current overall rating (mean of all ratings, one decimal).
    pub fn overall(&self) -> Result<f32> {
        overall(&self.attributes)
    }

    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    pub fn restore(&mut self) {
        self.archived = false;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeId;

    #[test]
    fn test_new_player_has_complete_baseline() {
        let player = Player::new("Test Player");
        assert!(player.attributes.is_complete());
        assert_eq!(player.attributes.get(AttributeId::Passing), Some(50));
        assert_eq!(player.overall().unwrap(), 50.0);
        assert!(!player.archived);
        assert!(!player.id.is_empty());
    }

    #[test]
    fn test_archive_and_restore() {
        let mut player = Player::new("Bench Player");
        let created = player.updated_at;
        player.archive();
        assert!(player.archived);
        assert!(player.updated_at >= created);
        player.restore();
        assert!(!player.archived);
    }
}
