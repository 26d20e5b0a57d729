// Integration tests for the match endpoint

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Duration;
use study_match::{configure_routes, AppState, Matcher, SAMPLE_NAMES};

const VALIDATION_MESSAGE: &str = "Year and branch are required fields";
const INTERNAL_MESSAGE: &str = "Failed to process your request. Please try again.";
const METHOD_MESSAGE: &str = "Method not allowed. Use POST to submit match requests.";

fn create_state(seed: Option<u64>) -> AppState {
    AppState::new(Matcher::default(), Duration::ZERO, seed)
}

fn sample_form() -> Value {
    json!({
        "year": "2",
        "branch": "CSE",
        "strongSubjects": ["Math", "Physics"],
        "helpSubjects": ["Chemistry"],
        "studyStyle": "Quiet",
        "groupSize": "3-4",
        "timeSlots": "evenings",
        "sessionPreference": "online",
        "location": "Central Library",
        "branchPreference": "any"
    })
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_integration_end_to_end_matching() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(sample_form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let matches = body["matches"].as_array().expect("matches array");
    assert!(
        (3..=5).contains(&matches.len()),
        "Expected 3-5 matches, got {}",
        matches.len()
    );
    assert_eq!(
        body["message"],
        format!("Found {} potential study partners for you!", matches.len())
    );

    let styles = ["Quiet", "Interactive", "Problem-solving", "Mixed"];
    let subjects = ["Math", "Physics", "Chemistry"];
    let mut names = HashSet::new();
    let mut previous = u64::MAX;

    for m in matches {
        let name = m["name"].as_str().unwrap();
        assert!(SAMPLE_NAMES.contains(&name));
        assert!(names.insert(name.to_string()), "Duplicate name {}", name);

        let similarity = m["similarity"].as_u64().unwrap();
        assert!((70..=98).contains(&similarity), "Similarity {} out of range", similarity);
        assert!(similarity <= previous, "Matches not sorted by similarity");
        previous = similarity;

        assert!(styles.contains(&m["studyStyle"].as_str().unwrap()));

        let common = m["commonSubjects"].as_array().unwrap();
        assert!(common.len() <= 4);
        for subject in common {
            assert!(subjects.contains(&subject.as_str().unwrap()));
        }
    }
}

#[actix_web::test]
async fn test_missing_year_rejected() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(json!({ "branch": "CSE" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": VALIDATION_MESSAGE }));
}

#[actix_web::test]
async fn test_missing_branch_rejected() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(json!({ "year": "3", "strongSubjects": ["Math"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], VALIDATION_MESSAGE);
}

#[actix_web::test]
async fn test_empty_year_rejected() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(json!({ "year": "", "branch": "CSE" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_not_allowed() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::get().uri("/api/match").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": METHOD_MESSAGE }));
}

#[actix_web::test]
async fn test_other_methods_not_allowed() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::put()
        .uri("/api/match")
        .set_json(sample_form())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], METHOD_MESSAGE);
}

#[actix_web::test]
async fn test_malformed_json_is_internal_error() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"year\": \"2\", \"branch\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": INTERNAL_MESSAGE }));
}

#[actix_web::test]
async fn test_body_without_content_type_accepted() {
    let app = init_app!(create_state(None));

    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_payload(sample_form().to_string())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_seeded_responses_repeat() {
    let app = init_app!(create_state(Some(1234)));

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/match")
            .set_json(sample_form())
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[actix_web::test]
async fn test_processing_delay_applied() {
    let state = AppState::new(Matcher::default(), Duration::from_millis(50), None);
    let app = init_app!(state);

    let started = std::time::Instant::now();
    let req = test::TestRequest::post()
        .uri("/api/match")
        .set_json(sample_form())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}
