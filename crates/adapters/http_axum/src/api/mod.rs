//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod chores;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::{get, post};

use chorehub_app::ports::{
    ChoreHistoryStore, ChoreRepository, DiscoveryPublisher, StatePublisher, UserRepository,
};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<CR, H, SP, DP, UR>() -> Router<AppState<CR, H, SP, DP, UR>>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        // Chores
        .route(
            "/chores",
            get(chores::list::<CR, H, SP, DP, UR>).post(chores::create::<CR, H, SP, DP, UR>),
        )
        .route("/chores/due", get(chores::due::<CR, H, SP, DP, UR>))
        .route(
            "/chores/{id}",
            get(chores::get::<CR, H, SP, DP, UR>).delete(chores::delete::<CR, H, SP, DP, UR>),
        )
        .route(
            "/chores/{id}/done",
            post(chores::mark_done::<CR, H, SP, DP, UR>),
        )
        .route(
            "/chores/{id}/history",
            get(chores::history::<CR, H, SP, DP, UR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<CR, H, SP, DP, UR>).post(users::create::<CR, H, SP, DP, UR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<CR, H, SP, DP, UR>).delete(users::delete::<CR, H, SP, DP, UR>),
        )
        .route(
            "/users/{id}/chores",
            get(users::chores::<CR, H, SP, DP, UR>),
        )
}
