use actix_web::{web, HttpResponse, ResponseError};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use validator::Validate;
use crate::config::Settings;
use crate::core::Matcher;
use crate::error::{handle_json_payload_error, ApiError};
use crate::models::{MatchRequest, MatchResponse, SimilarityBonuses};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub processing_delay: Duration,
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(matcher: Matcher, processing_delay: Duration, seed: Option<u64>) -> Self {
        Self {
            matcher,
            processing_delay,
            seed,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Matcher::new(SimilarityBonuses::from(&settings.scoring.bonuses)),
            settings.matching.processing_delay(),
            settings.matching.seed,
        )
    }

    /// Fresh random source for one request
    fn request_rng(&self) -> Result<StdRng, rand::Error> {
        match self.seed {
            Some(seed) => Ok(StdRng::seed_from_u64(seed)),
            None => StdRng::from_rng(rand::thread_rng()),
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/match")
            .app_data(
                web::JsonConfig::default()
                    .content_type_required(false)
                    .error_handler(handle_json_payload_error),
            )
            .route(web::post().to(find_matches))
            .route(web::get().to(method_not_allowed))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Find study partners endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "year": "2",
///   "branch": "CSE",
///   "strongSubjects": ["Math"],
///   "helpSubjects": ["Chemistry"],
///   "studyStyle": "Quiet"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> Result<HttpResponse, ApiError> {
    let request_id = uuid::Uuid::new_v4();

    if let Err(errors) = req.validate() {
        tracing::info!(%request_id, "Validation failed for match request: field_errors={:?}", errors);
        return Err(ApiError::MissingRequiredFields);
    }

    tracing::info!(
        %request_id,
        "Finding study partners for year: {}, branch: {}",
        req.year,
        req.branch
    );

    if !state.processing_delay.is_zero() {
        tokio::time::sleep(state.processing_delay).await;
    }

    let mut rng = state.request_rng().map_err(|e| {
        tracing::error!(%request_id, "Error processing match request: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    let matches = state.matcher.generate_matches(&req, &mut rng);

    tracing::info!(%request_id, "Returning {} matches", matches.len());

    Ok(HttpResponse::Ok().json(MatchResponse::new(matches)))
}

/// Anything other than POST on the match resource
async fn method_not_allowed() -> HttpResponse {
    ApiError::MethodNotAllowed.error_response()
}
