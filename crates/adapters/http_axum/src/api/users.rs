//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use chorehub_app::ports::{
    ChoreHistoryStore, ChoreRepository, DiscoveryPublisher, StatePublisher, UserRepository,
};
use chorehub_domain::chore::Chore;
use chorehub_domain::id::UserId;
use chorehub_domain::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub shortname: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<User>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the per-user chores endpoint.
pub enum ChoresResponse {
    Ok(Json<Vec<Chore>>),
}

impl IntoResponse for ChoresResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/users`
pub async fn list<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
) -> Result<ListResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /api/users/:id`
pub async fn get<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let user = state.user_service.get_user(UserId::new(id)).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/users`
pub async fn create<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let mut builder = User::builder().name(req.name);
    if let Some(shortname) = req.shortname {
        builder = builder.shortname(shortname);
    }
    let user = builder.build()?;

    let created = state.user_service.create_user(user).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/users/:id/chores`
pub async fn chores<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
    Path(id): Path<i64>,
) -> Result<ChoresResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    // Resolve the user first so an unknown id maps to 404 rather than an
    // empty list.
    let user = state.user_service.get_user(UserId::new(id)).await?;
    let chores = state.chore_service.chores_for_user(user.id).await?;
    Ok(ChoresResponse::Ok(Json(chores)))
}

/// `DELETE /api/users/:id`
pub async fn delete<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    state.user_service.delete_user(UserId::new(id)).await?;
    Ok(DeleteResponse::NoContent)
}
