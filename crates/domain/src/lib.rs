//! # chorehub-domain
//!
//! Pure domain model for the chorehub household chore tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Chores** (recurring tasks with due/completion timestamps)
//! - Define **Users** (household members chores can be assigned to)
//! - Define **ChoreHistory** (completion audit records)
//! - Derive a chore's display status (`done`/`due`/`overdue`) from its
//!   timestamps — never stored, always recomputed
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod chore;
pub mod chore_history;
pub mod user;
