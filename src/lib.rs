//! Study Match - synthetic study partner matching for the peer study matchmaker
//!
//! This library provides the single match endpoint: it accepts a student's
//! study-preference form and answers with a short, randomly generated list of
//! study partners ranked by similarity.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use self::core::{Matcher, SAMPLE_NAMES};
pub use error::ApiError;
pub use models::{MatchRequest, MatchResult, MatchResponse, StudyStyle, SimilarityBonuses};
pub use routes::{configure_routes, AppState};
