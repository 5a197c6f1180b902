//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use chorehub_app::ports::{
    ChoreHistoryStore, ChoreRepository, DiscoveryPublisher, StatePublisher, UserRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<CR, H, SP, DP, UR>(state: AppState<CR, H, SP, DP, UR>) -> Router
where
    CR: ChoreRepository + Send + Sync + 'static,
    H: ChoreHistoryStore + Send + Sync + 'static,
    SP: StatePublisher + Send + Sync + 'static,
    DP: DiscoveryPublisher + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use chorehub_app::ports::sync::{NoopDiscoveryPublisher, NoopStatePublisher};
    use chorehub_app::services::chore_service::ChoreService;
    use chorehub_app::services::user_service::UserService;
    use chorehub_domain::chore::Chore;
    use chorehub_domain::chore_history::ChoreHistory;
    use chorehub_domain::error::ChoreHubError;
    use chorehub_domain::id::{ChoreId, HistoryId, UserId};
    use chorehub_domain::time::Timestamp;
    use chorehub_domain::user::User;

    use super::*;

    #[derive(Default)]
    struct InMemoryChoreRepo {
        chores: Mutex<HashMap<ChoreId, Chore>>,
        next_id: Mutex<i64>,
    }

    impl ChoreRepository for InMemoryChoreRepo {
        async fn create(&self, mut chore: Chore) -> Result<Chore, ChoreHubError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            chore.id = ChoreId::new(*next_id);
            self.chores.lock().unwrap().insert(chore.id, chore.clone());
            Ok(chore)
        }
        async fn get_by_id(&self, id: ChoreId) -> Result<Option<Chore>, ChoreHubError> {
            Ok(self.chores.lock().unwrap().get(&id).cloned())
        }
        async fn get_all(&self) -> Result<Vec<Chore>, ChoreHubError> {
            Ok(self.chores.lock().unwrap().values().cloned().collect())
        }
        async fn find_by_assignee(&self, user_id: UserId) -> Result<Vec<Chore>, ChoreHubError> {
            Ok(self
                .chores
                .lock()
                .unwrap()
                .values()
                .filter(|chore| {
                    chore
                        .assignee
                        .as_ref()
                        .is_some_and(|assignee| assignee.id == user_id)
                })
                .cloned()
                .collect())
        }
        async fn find_due_before(
            &self,
            threshold: Timestamp,
        ) -> Result<Vec<Chore>, ChoreHubError> {
            Ok(self
                .chores
                .lock()
                .unwrap()
                .values()
                .filter(|chore| chore.next_due_at.is_some_and(|due| due < threshold))
                .cloned()
                .collect())
        }
        async fn update(&self, chore: Chore) -> Result<Chore, ChoreHubError> {
            self.chores.lock().unwrap().insert(chore.id, chore.clone());
            Ok(chore)
        }
        async fn delete(&self, id: ChoreId) -> Result<(), ChoreHubError> {
            self.chores.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct InMemoryHistory {
        entries: Mutex<Vec<ChoreHistory>>,
    }

    impl ChoreHistoryStore for InMemoryHistory {
        async fn record(&self, mut entry: ChoreHistory) -> Result<ChoreHistory, ChoreHubError> {
            let mut entries = self.entries.lock().unwrap();
            entry.id = HistoryId::new(i64::try_from(entries.len()).unwrap() + 1);
            entries.push(entry.clone());
            Ok(entry)
        }
        async fn find_by_chore(
            &self,
            chore_id: ChoreId,
        ) -> Result<Vec<ChoreHistory>, ChoreHubError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|entry| entry.chore_id == chore_id)
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct InMemoryUserRepo {
        users: Mutex<HashMap<UserId, User>>,
        next_id: Mutex<i64>,
    }

    impl UserRepository for InMemoryUserRepo {
        async fn create(&self, mut user: User) -> Result<User, ChoreHubError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            user.id = UserId::new(*next_id);
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(user)
        }
        async fn get_by_id(&self, id: UserId) -> Result<Option<User>, ChoreHubError> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }
        async fn get_by_name(&self, name: &str) -> Result<Option<User>, ChoreHubError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|user| user.name == name)
                .cloned())
        }
        async fn get_all(&self) -> Result<Vec<User>, ChoreHubError> {
            Ok(self.users.lock().unwrap().values().cloned().collect())
        }
        async fn delete(&self, id: UserId) -> Result<(), ChoreHubError> {
            self.users.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    fn test_app() -> Router {
        let state = AppState::new(
            ChoreService::new(
                InMemoryChoreRepo::default(),
                InMemoryHistory::default(),
                NoopStatePublisher,
                NoopDiscoveryPublisher,
            ),
            UserService::new(InMemoryUserRepo::default()),
        );
        build(state)
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_create_chore_and_list_it() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/chores",
                r#"{"name": "Vacuum", "recurrence_kind": "one_time"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chores")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let chores: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(chores.as_array().unwrap().len(), 1);
        assert_eq!(chores[0]["name"], "Vacuum");
    }

    #[tokio::test]
    async fn should_reject_chore_with_unknown_assignee() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/chores",
                r#"{"name": "Vacuum", "recurrence_kind": "one_time", "assignee": "Nobody"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reject_chore_without_name() {
        let app = test_app();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/chores",
                r#"{"name": "", "recurrence_kind": "one_time"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_404_when_marking_unknown_chore_done() {
        let app = test_app();

        let response = app
            .oneshot(json_request("POST", "/api/chores/99/done", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_resolve_assignee_by_name_on_create() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/users",
                r#"{"name": "Alice"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/chores",
                r#"{"name": "Vacuum", "recurrence_kind": "one_time", "assignee": "Alice"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let chore: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(chore["assignee"]["name"], "Alice");
    }

    #[tokio::test]
    async fn should_mark_chore_done_and_record_history() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/chores",
                r#"{"name": "Vacuum", "recurrence_kind": "one_time"}"#,
            ))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request("POST", &format!("/api/chores/{id}/done"), ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/chores/{id}/history"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let entries: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(entries.as_array().unwrap().len(), 1);
    }
}
