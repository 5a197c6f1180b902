//! JSON REST handlers for chores.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use chorehub_app::ports::{
    ChoreHistoryStore, ChoreRepository, DiscoveryPublisher, StatePublisher, UserRepository,
};
use chorehub_domain::chore::{Assignee, Chore, RecurrenceKind};
use chorehub_domain::chore_history::ChoreHistory;
use chorehub_domain::error::{ChoreHubError, NotFoundError, ValidationError};
use chorehub_domain::id::ChoreId;
use chorehub_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a chore.
#[derive(Deserialize)]
pub struct CreateChoreRequest {
    pub name: String,
    pub description: Option<String>,
    pub recurrence_kind: RecurrenceKind,
    pub recurrence_pattern: Option<String>,
    /// Name of an existing user to assign the chore to.
    pub assignee: Option<String>,
    pub next_due_at: Option<Timestamp>,
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Chore>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and mark-done endpoints.
pub enum GetResponse {
    Ok(Json<Chore>),
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
    Created(Json<Chore>),
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

/// Possible responses from the history endpoint.
pub enum HistoryResponse {
    Ok(Json<Vec<ChoreHistory>>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/chores`
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
    let chores = state.chore_service.list_chores().await?;
    Ok(ListResponse::Ok(Json(chores)))
}

/// `GET /api/chores/due` — chores due today or earlier.
pub async fn due<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
) -> Result<ListResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let chores = state.chore_service.due_chores().await?;
    Ok(ListResponse::Ok(Json(chores)))
}

/// `GET /api/chores/:id`
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
    let chore = state.chore_service.get_chore(ChoreId::new(id)).await?;
    Ok(GetResponse::Ok(Json(chore)))
}

/// `POST /api/chores`
pub async fn create<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
    Json(req): Json<CreateChoreRequest>,
) -> Result<CreateResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let assignee = match req.assignee {
        Some(name) => {
            let user = state
                .user_service
                .get_user_by_name(&name)
                .await?
                .ok_or_else(|| {
                    ApiError::from(ChoreHubError::Validation(ValidationError::UnknownAssignee {
                        name: name.clone(),
                    }))
                })?;
            Some(Assignee {
                id: user.id,
                name: user.name,
            })
        }
        None => None,
    };

    let mut builder = Chore::builder()
        .name(req.name)
        .recurrence_kind(req.recurrence_kind);
    if let Some(description) = req.description {
        builder = builder.description(description);
    }
    if let Some(pattern) = req.recurrence_pattern {
        builder = builder.recurrence_pattern(pattern);
    }
    if let Some(assignee) = assignee {
        builder = builder.assignee(assignee);
    }
    if let Some(next_due_at) = req.next_due_at {
        builder = builder.next_due_at(next_due_at);
    }
    let chore = builder.build()?;

    let created = state.chore_service.create_chore(chore).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `POST /api/chores/:id/done`
pub async fn mark_done<CR, H, SP, DP, UR>(
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
    let updated = state
        .chore_service
        .mark_chore_done(ChoreId::new(id))
        .await?
        .ok_or_else(|| {
            ApiError::from(ChoreHubError::NotFound(NotFoundError {
                entity: "Chore",
                id: id.to_string(),
            }))
        })?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `GET /api/chores/:id/history`
pub async fn history<CR, H, SP, DP, UR>(
    State(state): State<AppState<CR, H, SP, DP, UR>>,
    Path(id): Path<i64>,
) -> Result<HistoryResponse, ApiError>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    let entries = state.chore_service.chore_history(ChoreId::new(id)).await?;
    Ok(HistoryResponse::Ok(Json(entries)))
}

/// `DELETE /api/chores/:id`
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
    state.chore_service.delete_chore(ChoreId::new(id)).await?;
    Ok(DeleteResponse::NoContent)
}
