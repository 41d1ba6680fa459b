use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use course_board::api::router;
use course_board::config::AdminCredentials;
use course_board::context::AppContext;
use course_board::models::AppContent;
use course_board::state::AppState;
use course_board::store::{PersistentStore, keys};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn setup_app(content: AppContent) -> (Router, PersistentStore) {
    let store = PersistentStore::in_memory();
    store.set(keys::CONTENT, &content).await;
    let context = AppContext::load(store.clone(), AdminCredentials::default()).await;
    (router(AppState::new(context)), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };
    (status, value)
}

async fn login_as_admin(app: &Router) {
    let creds = AdminCredentials::default();
    let (status, _) = send(
        app,
        "POST",
        "/session/admin",
        Some(json!({ "username": creds.username, "password": creds.password })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

fn course_body(title: &str) -> Value {
    json!({
        "title": title,
        "teacher": "T",
        "telegramLink": "https://t.me/example",
        "date": "2024-01-01",
        "description": "D"
    })
}

#[tokio::test]
async fn test_health() {
    let (app, _) = setup_app(AppContent::default()).await;
    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_flow_switches_screen() {
    let (app, _) = setup_app(AppContent::initial()).await;

    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert_eq!(screen["screen"], "login");

    // Blank names are rejected like the login form does
    let (status, _) = send(&app, "POST", "/session/user", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "POST", "/session/user", Some(json!({ "name": " Aung " }))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert_eq!(screen["screen"], "main");
    assert_eq!(screen["body"]["kind"], "courses");
}

#[tokio::test]
async fn test_admin_login_rejects_wrong_password() {
    let (app, _) = setup_app(AppContent::default()).await;
    send(&app, "POST", "/session/user", Some(json!({ "name": "Aung" }))).await;
    send(&app, "PUT", "/session/admin-login", Some(json!({ "open": true }))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/session/admin",
        Some(json!({ "username": "admin", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert!(screen["adminPanel"].is_null());
    assert_eq!(screen["adminLogin"]["open"], true);

    login_as_admin(&app).await;
    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert!(screen["adminPanel"].is_object());
    assert_eq!(screen["adminLogin"]["open"], false);
}

#[tokio::test]
async fn test_content_writes_require_admin() {
    let (app, _) = setup_app(AppContent::default()).await;

    let (status, _) = send(&app, "POST", "/content/courses", Some(course_body("A"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "PUT", "/content/history", Some(json!({ "value": "x" }))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_and_delete_course() {
    let (app, store) = setup_app(AppContent::default()).await;
    login_as_admin(&app).await;

    let (status, created) = send(&app, "POST", "/content/courses", Some(course_body("A"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_string();
    assert!(!id.is_empty());

    let stored = store.get(keys::CONTENT, AppContent::default()).await;
    assert_eq!(stored.courses.len(), 1);
    assert_eq!(stored.courses[0].id, id);

    // Without confirmation nothing happens
    let uri = format!("/content/courses/{}", id);
    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);

    let (_, body) = send(&app, "DELETE", &format!("{}?confirm=true", uri), None).await;
    assert_eq!(body["deleted"], true);

    let stored = store.get(keys::CONTENT, AppContent::initial()).await;
    assert!(stored.courses.is_empty());
}

#[tokio::test]
async fn test_back_to_back_adds_get_distinct_ids() {
    let (app, _) = setup_app(AppContent::default()).await;
    login_as_admin(&app).await;

    let (_, first) = send(&app, "POST", "/content/courses", Some(course_body("A"))).await;
    let (_, second) = send(&app, "POST", "/content/courses", Some(course_body("B"))).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_update_uses_path_id() {
    let (app, store) = setup_app(AppContent::initial()).await;
    login_as_admin(&app).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/content/teachers/seed-teacher-1",
        Some(json!({ "id": "ignored", "name": "Daw Hnin", "bio": "Updated bio" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let stored = store.get(keys::CONTENT, AppContent::default()).await;
    assert_eq!(stored.teachers[0].id, "seed-teacher-1");
    assert_eq!(stored.teachers[0].bio, "Updated bio");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (app, _) = setup_app(AppContent::initial()).await;
    login_as_admin(&app).await;

    let (status, _) = send(
        &app,
        "PUT",
        "/content/schedule/missing",
        Some(json!({ "day": "Monday", "time": "10:00", "topic": "Grammar" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_collection_is_bad_request() {
    let (app, _) = setup_app(AppContent::default()).await;
    login_as_admin(&app).await;

    let (status, _) = send(&app, "POST", "/content/gallery", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_course_link_redirects() {
    let (app, _) = setup_app(AppContent::initial()).await;

    let request = Request::builder()
        .uri("/courses/seed-course-1/link")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://t.me/courseboard_english"
    );

    let (status, _) = send(&app, "GET", "/courses/nope/link", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_course_link_with_control_characters_is_rejected() {
    let (app, store) = setup_app(AppContent::initial()).await;
    login_as_admin(&app).await;

    let mut body = course_body("Injected");
    body["telegramLink"] = json!("https://t.me/x\nSet-Cookie: a=b");
    let (status, _) = send(&app, "POST", "/content/courses", Some(body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "PUT", "/content/courses/seed-course-1", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let stored = store.get(keys::CONTENT, AppContent::default()).await;
    assert_eq!(stored, AppContent::initial());
}

#[tokio::test]
async fn test_stored_bad_course_link_does_not_redirect() {
    let mut content = AppContent::initial();
    content.courses[0].telegram_link = "https://t.me/x\r\nSet-Cookie: a=b".to_string();
    let (app, _) = setup_app(content).await;

    let (status, _) = send(&app, "GET", "/courses/seed-course-1/link", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preferences_and_view() {
    let (app, store) = setup_app(AppContent::initial()).await;
    send(&app, "POST", "/session/user", Some(json!({ "name": "Aung" }))).await;

    let (_, body) = send(&app, "POST", "/preferences/theme/toggle", None).await;
    assert_eq!(body["theme"], "dark");
    let (_, body) = send(&app, "POST", "/preferences/language/toggle", None).await;
    assert_eq!(body["language"], "my");
    assert_eq!(store.get(keys::LANGUAGE, String::new()).await, "my");

    send(&app, "PUT", "/view/gallery", None).await;
    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert_eq!(screen["body"]["kind"], "placeholder");
    let message = screen["body"]["message"].as_str().expect("placeholder message");
    assert!(message.starts_with("gallery "), "got {}", message);

    send(&app, "PUT", "/view/schedule", None).await;
    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert_eq!(screen["body"]["kind"], "schedule");
    assert_eq!(screen["body"]["contact"], "+95 9 000 000 000");
}

#[tokio::test]
async fn test_first_visit_and_toast() {
    let (app, _) = setup_app(AppContent::initial()).await;
    send(&app, "POST", "/session/user", Some(json!({ "name": "Aung" }))).await;

    let (_, body) = send(&app, "POST", "/visits", None).await;
    assert_eq!(body["firstVisit"], true);
    let (_, body) = send(&app, "POST", "/visits", None).await;
    assert_eq!(body["firstVisit"], false);

    send(&app, "POST", "/toast", Some(json!({ "title": "Hi", "message": "there" }))).await;
    let (_, screen) = send(&app, "GET", "/screen", None).await;
    assert_eq!(screen["toast"]["title"], "Hi");
}
