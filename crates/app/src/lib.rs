//! # chorehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ChoreRepository` / `UserRepository` / `ChoreHistoryStore` — persistence
//!   - `BrokerGateway` — topic-addressed publish/subscribe transport
//!   - `StatePublisher` / `DiscoveryPublisher` — best-effort chore→broker sync
//! - Define the **inbound collaborator port** the broker side drives:
//!   - `ChoreStore` — list chores and mark one done (implemented by `ChoreService`)
//! - Provide the use-case services:
//!   - `ChoreService` — CRUD, mark-done, and the publish side effects
//!   - `UserService` — household member CRUD
//!
//! ## Dependency rule
//! Depends on `chorehub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
