use axum::Json;
use axum::extract::{Path, Query};
use axum::http::HeaderValue;
use axum::response::Redirect;
use axum::routing::{post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::context::{AppContext, Deleted};
use crate::error::AppError;
use crate::i18n::Language;
use crate::models::{Collection, Item, NewItem, Theme};
use crate::state::AppState;
use crate::view::{self, Screen};

#[derive(Deserialize)]
struct LoginUserRequest {
    name: String,
}

#[derive(Deserialize)]
struct LoginAdminRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct AdminLoginModalRequest {
    open: bool,
}

#[derive(Deserialize)]
struct TextRequest {
    value: String,
}

#[derive(Deserialize)]
struct ToastRequest {
    title: String,
    message: String,
}

#[derive(Deserialize)]
struct DeleteParams {
    #[serde(default)]
    confirm: bool,
}

#[derive(Serialize)]
struct ThemeResponse {
    theme: Theme,
}

#[derive(Serialize)]
struct LanguageResponse {
    language: Language,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VisitResponse {
    first_visit: bool,
}

#[derive(Serialize)]
struct CreatedResponse {
    id: String,
}

#[derive(Serialize)]
struct DeleteResponse {
    deleted: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/screen", get(screen))
        .route("/visits", post(record_visit))
        .route("/session/user", post(login_user))
        .route("/session/admin", post(login_admin).delete(logout_admin))
        .route("/session/admin-login", put(set_admin_login))
        .route("/preferences/theme/toggle", post(toggle_theme))
        .route("/preferences/language/toggle", post(toggle_language))
        .route("/view/{view}", put(set_view))
        .route("/content/history", put(set_history))
        .route("/content/contact", put(set_contact))
        .route("/content/{collection}", post(add_item))
        .route("/content/{collection}/{id}", put(update_item).delete(delete_item))
        .route("/courses/{id}/link", get(course_link))
        .route("/toast", post(show_toast))
        .with_state(state)
}

fn require_admin(ctx: &AppContext) -> Result<(), AppError> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Admin login required".to_string()))
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn screen(State(state): State<AppState>) -> Json<Screen> {
    let ctx = state.context.lock().await;
    Json(view::render(&ctx))
}

async fn record_visit(State(state): State<AppState>) -> Json<VisitResponse> {
    let mut ctx = state.context.lock().await;
    Json(VisitResponse {
        first_visit: ctx.take_first_visit().await,
    })
}

async fn login_user(
    State(state): State<AppState>,
    Json(req): Json<LoginUserRequest>,
) -> Result<StatusCode, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name must not be empty".to_string()));
    }
    state.context.lock().await.login_user(name).await;
    Ok(StatusCode::NO_CONTENT)
}

async fn login_admin(
    State(state): State<AppState>,
    Json(req): Json<LoginAdminRequest>,
) -> Result<StatusCode, AppError> {
    let mut ctx = state.context.lock().await;
    if ctx.login_admin(&req.username, &req.password) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Unauthorized(ctx.t("invalidCredentials").to_string()))
    }
}

async fn logout_admin(State(state): State<AppState>) -> StatusCode {
    state.context.lock().await.logout_admin();
    StatusCode::NO_CONTENT
}

async fn set_admin_login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginModalRequest>,
) -> StatusCode {
    state.context.lock().await.set_admin_login_open(req.open);
    StatusCode::NO_CONTENT
}

async fn toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let theme = state.context.lock().await.toggle_theme().await;
    Json(ThemeResponse { theme })
}

async fn toggle_language(State(state): State<AppState>) -> Json<LanguageResponse> {
    let language = state.context.lock().await.toggle_language().await;
    Json(LanguageResponse { language })
}

async fn set_view(State(state): State<AppState>, Path(view): Path<String>) -> StatusCode {
    state.context.lock().await.select_view(&view);
    StatusCode::NO_CONTENT
}

async fn set_history(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<StatusCode, AppError> {
    let mut ctx = state.context.lock().await;
    require_admin(&ctx)?;
    ctx.set_history(req.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_contact(
    State(state): State<AppState>,
    Json(req): Json<TextRequest>,
) -> Result<StatusCode, AppError> {
    let mut ctx = state.context.lock().await;
    require_admin(&ctx)?;
    ctx.set_contact(req.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_item(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let mut ctx = state.context.lock().await;
    require_admin(&ctx)?;
    let collection = Collection::from_slug(&collection)?;
    let item = NewItem::from_json(collection, body)?;
    if let NewItem::Course(course) = &item {
        check_course_link(&course.telegram_link)?;
    }

    let id = ctx.add(item).await?;
    info!("added {} item {}", collection, id);
    let title = ctx.t("saved").to_string();
    let message = ctx.t("itemAdded").to_string();
    ctx.show_toast(title, message);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

async fn update_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Json(mut body): Json<Value>,
) -> Result<StatusCode, AppError> {
    let mut ctx = state.context.lock().await;
    require_admin(&ctx)?;
    let collection = Collection::from_slug(&collection)?;
    match body.as_object_mut() {
        // The path decides which item is replaced.
        Some(fields) => {
            fields.insert("id".to_string(), Value::String(id.clone()));
        }
        None => return Err(AppError::BadRequest("Expected a JSON object".to_string())),
    }
    let item = Item::from_json(collection, body)?;
    if let Item::Course(course) = &item {
        check_course_link(&course.telegram_link)?;
    }

    ctx.update(item).await?;
    info!("updated {} item {}", collection, id);
    let title = ctx.t("saved").to_string();
    let message = ctx.t("itemUpdated").to_string();
    ctx.show_toast(title, message);

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut ctx = state.context.lock().await;
    require_admin(&ctx)?;
    let collection = Collection::from_slug(&collection)?;

    let outcome = ctx.delete(collection, &id, || params.confirm).await?;
    let deleted = outcome == Deleted::Removed;
    if deleted {
        info!("deleted {} item {}", collection, id);
        let title = ctx.t("saved").to_string();
        let message = ctx.t("itemDeleted").to_string();
        ctx.show_toast(title, message);
    }

    Ok(Json(DeleteResponse { deleted }))
}

async fn course_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let ctx = state.context.lock().await;
    let course = ctx.content().find_course(&id).ok_or(AppError::NotFound)?;
    check_course_link(&course.telegram_link)?;
    Ok(Redirect::temporary(&course.telegram_link))
}

/// Course links end up in a `Location` header.
fn check_course_link(link: &str) -> Result<(), AppError> {
    HeaderValue::from_str(link)
        .map(|_| ())
        .map_err(|_| AppError::BadRequest(format!("Invalid course link: {:?}", link)))
}

async fn show_toast(State(state): State<AppState>, Json(req): Json<ToastRequest>) -> StatusCode {
    state.context.lock().await.show_toast(req.title, req.message);
    StatusCode::NO_CONTENT
}
