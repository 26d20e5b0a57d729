use serde::Serialize;
use crate::models::domain::MatchResult;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub success: bool,
    pub matches: Vec<MatchResult>,
    pub message: String,
}

impl MatchResponse {
    pub fn new(matches: Vec<MatchResult>) -> Self {
        let message = format!("Found {} potential study partners for you!", matches.len());
        Self {
            success: true,
            matches,
            message,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
