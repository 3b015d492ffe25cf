//! # club_core - Player attribute and evaluation core
//!
//! This library provides the player-rating core of a club-management
//! application: a fixed taxonomy of rateable abilities grouped into three
//! categories, pure grouping/aggregation functions over a player's ratings,
//! and immutable coach-evaluation records with a JSON API for the
//! presentation layer.
//!
//! ## Features
//! - Closed attribute taxonomy with a static category registration table
//! - Deterministic grouping, overall rating, and top/bottom-N queries
//! - Append-only coach evaluations with stable overall-rating snapshots
//! - JSON API for easy integration

pub mod api;
pub mod attributes;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{player_report_json, submit_evaluation_json, ApiError, ApiResponse};

// Re-export attribute system types
pub use attributes::{
    bottom_n, group, overall, quality_of, top_n, Attribute, AttributeId, AttributeSet, Category,
    GroupedAttributes, Quality, MAX_RATING,
};

// Re-export model types
pub use models::{AttributeEvaluation, EvaluationEntry, EvaluationLog, EvaluationPeriod, Player};

pub use error::{RatingError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_report_flow_after_evaluation() {
        let player = Player::new("Academy Graduate");
        let player_id = player.id.clone();
        let mut players: HashMap<String, Player> = HashMap::new();
        players.insert(player_id.clone(), player);
        let mut log = EvaluationLog::new();

        let submission = json!({
            "player_id": player_id,
            "period_start": "2026-07-01",
            "period_end": "2026-07-31",
            "entries": [
                { "attribute": "dribbling", "new_rating": 86 },
                { "attribute": "decisions", "new_rating": 38 }
            ]
        })
        .to_string();
        let result = submit_evaluation_json(&submission, &mut players, &mut log);
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["success"], true);

        let report_request = json!({ "player_id": player_id, "highlight_count": 1 }).to_string();
        let report = player_report_json(&report_request, &players);
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(parsed["data"]["strongest"][0]["attribute"], "dribbling");
        assert_eq!(parsed["data"]["strongest"][0]["quality"], "excellent");
        assert_eq!(parsed["data"]["weakest"][0]["attribute"], "decisions");
        assert_eq!(parsed["data"]["weakest"][0]["quality"], "poor");
    }

    #[test]
    fn test_reported_overall_matches_core_aggregation() {
        let mut player = Player::new("Utility");
        player.attributes.set(AttributeId::Passing, 70);
        let expected = overall(&player.attributes).unwrap();
        assert_eq!(player.overall().unwrap(), expected);

        let grouped = group(&player.attributes).unwrap();
        assert_eq!(grouped.len(), AttributeId::COUNT);
    }
}
