//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

pub mod broker;
pub mod chore_store;
pub mod storage;
pub mod sync;

pub use broker::BrokerGateway;
pub use chore_store::ChoreStore;
pub use storage::{ChoreHistoryStore, ChoreRepository, UserRepository};
pub use sync::{DiscoveryPublisher, NoopDiscoveryPublisher, NoopStatePublisher, StatePublisher};
