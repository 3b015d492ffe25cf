//! JSON API for player reports and coach evaluations
//!
//! This module provides the JSON-based endpoints the presentation layer
//! consumes: a player report (grouped attributes, overall rating, strongest
//! and weakest abilities) and evaluation submission.

use crate::attributes::{bottom_n, group, quality_of, top_n, Attribute, Category, Quality};
use crate::error::RatingError;
use crate::models::{
    AttributeEvaluation, EvaluationEntry, EvaluationLog, EvaluationPeriod, Player,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }
}

impl From<RatingError> for ApiError {
    fn from(err: RatingError) -> Self {
        let code = match &err {
            RatingError::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            RatingError::EmptyAttributeSet => "EMPTY_ATTRIBUTE_SET",
            RatingError::InvalidArgument(_) => "INVALID_ARGUMENT",
            RatingError::PlayerNotFound { .. } => "PLAYER_NOT_FOUND",
        };
        ApiError::new(code, &err.to_string())
    }
}

/// Player report request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerReportRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
    /// Re-sort category lists by rating instead of declared order.
    pub sort_by_rating: Option<bool>,
    /// How many strongest/weakest attributes to highlight (default: 3).
    /// Arrives as i64 so negative counts can be rejected explicitly.
    pub highlight_count: Option<i64>,
}

impl PlayerReportRequest {
    fn validate(&self) -> Result<usize, ApiError> {
        match self.highlight_count {
            None => Ok(DEFAULT_HIGHLIGHT_COUNT),
            Some(n) if n < 0 => Err(RatingError::InvalidArgument(format!(
                "highlight_count must be non-negative, got {}",
                n
            ))
            .into()),
            Some(n) => Ok(n as usize),
        }
    }
}

const DEFAULT_HIGHLIGHT_COUNT: usize = 3;

/// One attribute as it appears in a report, with its quality band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAttribute {
    pub attribute: String,
    pub display_name: String,
    pub category: Category,
    pub rating: u8,
    pub quality: Quality,
}

impl From<Attribute> for ReportAttribute {
    fn from(attr: Attribute) -> Self {
        Self {
            attribute: attr.id.key().to_string(),
            display_name: attr.id.display_name().to_string(),
            category: attr.category,
            rating: attr.rating,
            quality: quality_of(attr.rating),
        }
    }
}

/// Player report response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerReportResponse {
    pub player_id: String,
    pub name: String,
    pub archived: bool,
    pub overall: f32,
    pub skills: Vec<ReportAttribute>,
    pub physical: Vec<ReportAttribute>,
    pub mental: Vec<ReportAttribute>,
    pub strongest: Vec<ReportAttribute>,
    pub weakest: Vec<ReportAttribute>,
}

/// Evaluation submission request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitEvaluationRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub entries: Vec<EvaluationEntry>,
}

/// Evaluation submission response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitEvaluationResponse {
    pub evaluation: AttributeEvaluation,
    pub previous_overall: f32,
    pub new_overall: f32,
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| json!({"success": false}).to_string())
}

/// Build a player report from a JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing PlayerReportRequest
/// * `players` - Reference to HashMap storing players by ID
///
/// # Returns
/// JSON string containing ApiResponse<PlayerReportResponse>
pub fn player_report_json(request_json: &str, players: &HashMap<String, Player>) -> String {
    debug!("Processing player report request");

    let request: PlayerReportRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse PlayerReportRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return to_json(&ApiResponse::<PlayerReportResponse>::error(error));
        }
    };

    let highlight_count = match request.validate() {
        Ok(n) => n,
        Err(error) => {
            warn!("Player report request validation failed: {}", error.message);
            return to_json(&ApiResponse::<PlayerReportResponse>::error(error));
        }
    };

    let player = match players.get(&request.player_id) {
        Some(p) => p,
        None => {
            let error: ApiError =
                RatingError::PlayerNotFound { id: request.player_id.clone() }.into();
            return to_json(&ApiResponse::<PlayerReportResponse>::error(error));
        }
    };

    match build_report(player, request.sort_by_rating.unwrap_or(false), highlight_count) {
        Ok(report) => {
            debug!("Built report for player {} ({})", player.name, player.id);
            to_json(&ApiResponse::success(report))
        }
        Err(err) => {
            warn!("Failed to build report for player {}: {}", player.id, err);
            to_json(&ApiResponse::<PlayerReportResponse>::error(err.into()))
        }
    }
}

fn build_report(
    player: &Player,
    sort_by_rating: bool,
    highlight_count: usize,
) -> crate::error::Result<PlayerReportResponse> {
    let mut grouped = group(&player.attributes)?;
    if sort_by_rating {
        grouped = grouped.sorted_by_rating();
    }
    let overall = player.overall()?;

    let to_report = |attrs: Vec<Attribute>| -> Vec<ReportAttribute> {
        attrs.into_iter().map(ReportAttribute::from).collect()
    };

    Ok(PlayerReportResponse {
        player_id: player.id.clone(),
        name: player.name.clone(),
        archived: player.archived,
        overall,
        skills: to_report(grouped.skills),
        physical: to_report(grouped.physical),
        mental: to_report(grouped.mental),
        strongest: to_report(top_n(&player.attributes, highlight_count)),
        weakest: to_report(bottom_n(&player.attributes, highlight_count)),
    })
}

/// Submit a coach evaluation from a JSON request string
///
/// Applies the evaluation to the player, appends the immutable record to the
/// log, and returns the before/after overall ratings.
///
/// # Arguments
/// * `request_json` - JSON string containing SubmitEvaluationRequest
/// * `players` - Mutable reference to HashMap storing players by ID
/// * `log` - Mutable reference to the club's evaluation log
///
/// # Returns
/// JSON string containing ApiResponse<SubmitEvaluationResponse>
pub fn submit_evaluation_json(
    request_json: &str,
    players: &mut HashMap<String, Player>,
    log: &mut EvaluationLog,
) -> String {
    info!("Processing evaluation submission");

    let request: SubmitEvaluationRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SubmitEvaluationRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return to_json(&ApiResponse::<SubmitEvaluationResponse>::error(error));
        }
    };

    let period = match EvaluationPeriod::new(request.period_start, request.period_end) {
        Ok(p) => p,
        Err(err) => {
            warn!("Evaluation period rejected: {}", err);
            return to_json(&ApiResponse::<SubmitEvaluationResponse>::error(err.into()));
        }
    };

    let player = match players.get_mut(&request.player_id) {
        Some(p) => p,
        None => {
            let error: ApiError =
                RatingError::PlayerNotFound { id: request.player_id.clone() }.into();
            return to_json(&ApiResponse::<SubmitEvaluationResponse>::error(error));
        }
    };

    let previous_overall = match player.overall() {
        Ok(o) => o,
        Err(err) => {
            return to_json(&ApiResponse::<SubmitEvaluationResponse>::error(err.into()));
        }
    };

    match AttributeEvaluation::record(player, request.entries, period) {
        Ok(evaluation) => {
            info!(
                "Recorded evaluation {} for player {} ({} -> {})",
                evaluation.id, player.name, previous_overall, evaluation.overall_rating
            );
            let response = SubmitEvaluationResponse {
                new_overall: evaluation.overall_rating,
                evaluation: evaluation.clone(),
                previous_overall,
            };
            log.append(evaluation);
            to_json(&ApiResponse::success(response))
        }
        Err(err) => {
            warn!("Evaluation rejected for player {}: {}", player.id, err);
            to_json(&ApiResponse::<SubmitEvaluationResponse>::error(err.into()))
        }
    }
}
