// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchResult, StudyStyle, SimilarityBonuses};
pub use requests::MatchRequest;
pub use responses::{MatchResponse, ErrorResponse};
