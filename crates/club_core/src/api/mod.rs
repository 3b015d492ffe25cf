//! JSON API for presentation-layer integration

pub mod report_json;

pub use report_json::{
    player_report_json, submit_evaluation_json, ApiError, ApiResponse, PlayerReportRequest,
    PlayerReportResponse, ReportAttribute, SubmitEvaluationRequest, SubmitEvaluationResponse,
    API_VERSION,
};
