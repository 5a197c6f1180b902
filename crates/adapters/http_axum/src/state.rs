//! Shared application state for axum handlers.

use std::sync::Arc;

use chorehub_app::ports::{
    ChoreHistoryStore, ChoreRepository, DiscoveryPublisher, StatePublisher, UserRepository,
};
use chorehub_app::services::chore_service::ChoreService;
use chorehub_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and publisher types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<CR, H, SP, DP, UR> {
    /// Chore CRUD + broker synchronization service.
    pub chore_service: Arc<ChoreService<CR, H, SP, DP>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
}

impl<CR, H, SP, DP, UR> Clone for AppState<CR, H, SP, DP, UR> {
    fn clone(&self) -> Self {
        Self {
            chore_service: Arc::clone(&self.chore_service),
            user_service: Arc::clone(&self.user_service),
        }
    }
}

impl<CR, H, SP, DP, UR> AppState<CR, H, SP, DP, UR>
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        chore_service: ChoreService<CR, H, SP, DP>,
        user_service: UserService<UR>,
    ) -> Self {
        Self {
            chore_service: Arc::new(chore_service),
            user_service: Arc::new(user_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when services need to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arcs(
        chore_service: Arc<ChoreService<CR, H, SP, DP>>,
        user_service: Arc<UserService<UR>>,
    ) -> Self {
        Self {
            chore_service,
            user_service,
        }
    }
}
