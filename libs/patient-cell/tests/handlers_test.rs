use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use patient_cell::router::patient_routes;
use shared_models::ResourceKind;
use shared_utils::test_utils::{
    form_request, location, notice_from_location, MockClinicResponses, TestConfig,
};

fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", " Ana Lima "),
        ("dob", "1990-04-01"),
        ("email", "ana@example.com"),
        ("phone", "555-0100"),
    ]
}

#[tokio::test]
async fn create_patient_posts_api_schema_and_reloads() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_api(&mock_server.uri()).to_state();

    Mock::given(method("POST"))
        .and(path("/patients"))
        .and(body_json(json!({
            "name": "Ana Lima",
            "birthDate": "1990-04-01",
            "email": "ana@example.com",
            "phone": "555-0100"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            MockClinicResponses::patient_response("p1", "Ana Lima", "ana@example.com"),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "patients": [MockClinicResponses::patient_response("p1", "Ana Lima", "ana@example.com")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = patient_routes(state.clone())
        .oneshot(form_request("/patients", &valid_fields()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?tab=patients");

    let patients = state.store.patients().await;
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].name, "Ana Lima");
    assert_eq!(patients[0].birth_date, "1990-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn duplicate_email_becomes_readable_notice() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_api(&mock_server.uri()).to_state();

    Mock::given(method("POST"))
        .and(path("/patients"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(MockClinicResponses::duplicate_email_error("ana@example.com")),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let response = patient_routes(state.clone())
        .oneshot(form_request("/patients", &valid_fields()))
        .await
        .unwrap();

    assert_eq!(
        notice_from_location(&location(&response)).as_deref(),
        Some("Email already exists. Please use a different email.")
    );
    assert!(!state.store.is_loaded(ResourceKind::Patient).await);
}

#[tokio::test]
async fn server_message_is_shown_verbatim() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_api(&mock_server.uri()).to_state();

    Mock::given(method("POST"))
        .and(path("/patients"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(MockClinicResponses::error_response("phone must be numeric")),
        )
        .mount(&mock_server)
        .await;

    let response = patient_routes(state)
        .oneshot(form_request("/patients", &valid_fields()))
        .await
        .unwrap();

    assert_eq!(
        notice_from_location(&location(&response)).as_deref(),
        Some("phone must be numeric")
    );
}

#[tokio::test]
async fn missing_email_never_reaches_the_api() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_api(&mock_server.uri()).to_state();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let response = patient_routes(state)
        .oneshot(form_request(
            "/patients",
            &[("name", "Ana"), ("dob", "1990-04-01"), ("email", "   ")],
        ))
        .await
        .unwrap();

    assert_eq!(
        notice_from_location(&location(&response)).as_deref(),
        Some("Email is required.")
    );
}

#[tokio::test]
async fn invalid_birth_date_is_rejected_locally() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_api(&mock_server.uri()).to_state();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let response = patient_routes(state)
        .oneshot(form_request(
            "/patients",
            &[("name", "Ana"), ("dob", "01/04/1990"), ("email", "ana@example.com")],
        ))
        .await
        .unwrap();

    assert_eq!(
        notice_from_location(&location(&response)).as_deref(),
        Some("Invalid date of birth")
    );
}

#[tokio::test]
async fn overlapping_submission_is_refused() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_api(&mock_server.uri()).to_state();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let _in_flight = state.submit_guard.try_acquire(ResourceKind::Patient).unwrap();

    let response = patient_routes(state.clone())
        .oneshot(form_request("/patients", &valid_fields()))
        .await
        .unwrap();

    assert_eq!(
        notice_from_location(&location(&response)).as_deref(),
        Some("A patient submission is already in progress.")
    );
}
