use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{app, db::{establish_pool, test_pool}, AppState};
use crate::handlers::lead_handlers::{CONSULTATION_SUCCESS_MESSAGE, CONTACT_SUCCESS_MESSAGE};

fn seeded_state() -> Arc<AppState> {
    let state = Arc::new(AppState::new(test_pool()));
    state.site_repository.seed_sample_data().unwrap();
    state
}

async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn first_service_id(state: &Arc<AppState>) -> String {
    let (_, services) = send(app(state.clone()), Method::GET, "/api/services", None).await;
    services[0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = send(app(seeded_state()), Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn lists_seeded_services_with_all_fields() {
    let (status, body) = send(app(seeded_state()), Method::GET, "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);

    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 5);
    for service in services {
        for field in ["id", "title", "description", "price", "duration", "features"] {
            assert!(service.get(field).is_some(), "missing {field} in {service}");
        }
        assert_eq!(service["features"].as_array().unwrap().len(), 4);
    }
    assert_eq!(services[0]["title"], "Психоастрологическая консультация");
    assert_eq!(services[0]["features"][0], "Анализ натальной карты");
}

#[tokio::test]
async fn lists_seeded_testimonials() {
    let (status, body) = send(app(seeded_state()), Method::GET, "/api/testimonials", None).await;
    assert_eq!(status, StatusCode::OK);

    let testimonials = body.as_array().unwrap();
    assert_eq!(testimonials.len(), 3);
    assert!(testimonials.iter().all(|t| t["rating"] == 5));
    assert_eq!(testimonials[0]["name"], "Анна М.");
}

#[tokio::test]
async fn empty_database_returns_empty_lists() {
    let state = Arc::new(AppState::new(test_pool()));
    let (status, body) = send(app(state), Method::GET, "/api/services", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn accepts_consultation_request() {
    let state = seeded_state();
    let service_id = first_service_id(&state).await;

    let (status, body) = send(
        app(state.clone()),
        Method::POST,
        "/api/consultation-request",
        Some(json!({
            "name": "Мария",
            "email": "maria@example.com",
            "phone": "+7 900 000-00-00",
            "service_id": service_id,
            "message": "",
            "preferred_date": "2024-09-01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], CONSULTATION_SUCCESS_MESSAGE);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(state.lead_repository.count_consultation_requests().unwrap(), 1);
}

#[tokio::test]
async fn consultation_optional_fields_may_be_omitted() {
    let state = seeded_state();
    let service_id = first_service_id(&state).await;

    let (status, _) = send(
        app(state.clone()),
        Method::POST,
        "/api/consultation-request",
        Some(json!({
            "name": "Мария",
            "email": "maria@example.com",
            "phone": "+7 900 000-00-00",
            "service_id": service_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.lead_repository.count_consultation_requests().unwrap(), 1);
}

#[tokio::test]
async fn rejects_consultation_for_unknown_service() {
    let state = seeded_state();

    let (status, body) = send(
        app(state.clone()),
        Method::POST,
        "/api/consultation-request",
        Some(json!({
            "name": "Мария",
            "email": "maria@example.com",
            "phone": "+7 900 000-00-00",
            "service_id": "no-such-service"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Unknown service");
    assert_eq!(state.lead_repository.count_consultation_requests().unwrap(), 0);
}

#[tokio::test]
async fn rejects_consultation_with_blank_required_field() {
    let state = seeded_state();
    let service_id = first_service_id(&state).await;

    let (status, body) = send(
        app(state.clone()),
        Method::POST,
        "/api/consultation-request",
        Some(json!({
            "name": "   ",
            "email": "maria@example.com",
            "phone": "+7 900 000-00-00",
            "service_id": service_id
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid fields: name");
    assert_eq!(state.lead_repository.count_consultation_requests().unwrap(), 0);
}

#[tokio::test]
async fn rejects_consultation_missing_a_field() {
    let state = seeded_state();

    let (status, _) = send(
        app(state.clone()),
        Method::POST,
        "/api/consultation-request",
        Some(json!({ "name": "Мария", "email": "maria@example.com" })),
    )
    .await;

    assert!(status.is_client_error());
    assert_eq!(state.lead_repository.count_consultation_requests().unwrap(), 0);
}

#[tokio::test]
async fn accepts_contact_message() {
    let state = seeded_state();

    let (status, body) = send(
        app(state.clone()),
        Method::POST,
        "/api/contact",
        Some(json!({
            "name": "Игорь",
            "email": "igor@example.com",
            "subject": "Вопрос о консультации",
            "message": "Здравствуйте! Можно ли записаться на выходные?"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], CONTACT_SUCCESS_MESSAGE);
    assert_eq!(state.lead_repository.count_contact_messages().unwrap(), 1);
}

#[tokio::test]
async fn rejects_contact_with_bad_email() {
    let state = seeded_state();

    let (status, body) = send(
        app(state.clone()),
        Method::POST,
        "/api/contact",
        Some(json!({
            "name": "Игорь",
            "email": "igor at example",
            "subject": "Вопрос",
            "message": "Текст"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid fields: email");
    assert_eq!(state.lead_repository.count_contact_messages().unwrap(), 0);
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, "https://astro.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(seeded_state()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submissions_to_a_file_database_are_all_stored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("site.db");
    let pool = establish_pool(path.to_str().unwrap(), 10).unwrap();
    let state = Arc::new(AppState::new(pool));
    state.site_repository.seed_sample_data().unwrap();
    let service_id = first_service_id(&state).await;

    const CLIENTS: usize = 40;
    let mut handles = Vec::with_capacity(CLIENTS * 2);
    for i in 0..CLIENTS {
        let router = app(state.clone());
        let service_id = service_id.clone();
        handles.push(tokio::spawn(async move {
            send(
                router,
                Method::POST,
                "/api/consultation-request",
                Some(json!({
                    "name": format!("Клиент {i}"),
                    "email": format!("client{i}@example.com"),
                    "phone": "+7 900 000-00-00",
                    "service_id": service_id
                })),
            )
            .await
        }));

        let router = app(state.clone());
        handles.push(tokio::spawn(async move {
            send(
                router,
                Method::POST,
                "/api/contact",
                Some(json!({
                    "name": format!("Клиент {i}"),
                    "email": format!("client{i}@example.com"),
                    "subject": "Вопрос",
                    "message": "Когда можно записаться?"
                })),
            )
            .await
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK, "submission failed: {body}");
    }

    assert_eq!(state.lead_repository.count_consultation_requests().unwrap(), CLIENTS as i64);
    assert_eq!(state.lead_repository.count_contact_messages().unwrap(), CLIENTS as i64);
}
