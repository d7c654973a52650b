use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::errors::Error;
use crate::users::{NewUser, User, UserStore, UserUpdate};

/// shared state of the user api
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Arc<RwLock<UserStore>>,
}

/// error body returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::UserNotFound { .. } => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Error::MissingUserFields => {
                (StatusCode::BAD_REQUEST, "Name and email are required".to_string())
            }
            Error::InvalidInput { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::InvalidConfiguration { .. } => {
                warn!(error = %self, "configuration error reached the api");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };
        (status, Json(ApiMessage { message })).into_response()
    }
}

/// `/api` user routes plus a health probe
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user));

    Router::new()
        .route("/healthz", get(healthz))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.read().await.list().to_vec())
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>, Error> {
    let users = state.users.read().await;
    Ok(Json(users.get(id)?.clone()))
}

async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), Error> {
    let user = state.users.write().await.create(body)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<UserUpdate>,
) -> Result<Json<User>, Error> {
    let user = state.users.write().await.update(id, body)?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, Error> {
    state.users.write().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
