//! Chore — a recurring household task and its derived display status.
//!
//! A chore carries a recurrence strategy, optional assignee, and the
//! timestamps from which its status is computed. The status itself is never
//! persisted: it is recomputed from `next_due_at` / `last_completed_at`
//! every time it is needed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChoreHubError, ValidationError};
use crate::id::{ChoreId, UserId};
use crate::time::Timestamp;

/// How a chore repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceKind {
    /// Happens once, never rescheduled.
    OneTime,
    /// Repeats on a fixed calendar schedule (cron-style pattern).
    FixedSchedule,
    /// Repeats a fixed offset after each completion (ISO-8601 duration pattern).
    AfterCompletion,
}

impl RecurrenceKind {
    /// Stable string form, matching the persisted representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::FixedSchedule => "fixed_schedule",
            Self::AfterCompletion => "after_completion",
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_time" => Ok(Self::OneTime),
            "fixed_schedule" => Ok(Self::FixedSchedule),
            "after_completion" => Ok(Self::AfterCompletion),
            other => Err(format!("unknown recurrence kind: {other}")),
        }
    }
}

/// Display status of a chore, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChoreStatus {
    Done,
    Due,
    Overdue,
}

impl ChoreStatus {
    /// Compute the status from a chore's timestamps at instant `now`.
    ///
    /// The branching is deliberately asymmetric: `Done` is only reachable
    /// after a completion, while `Overdue` is reachable both before and
    /// after the first completion. A due date exactly equal to `now` reads
    /// `Due` for a previously completed chore.
    #[must_use]
    pub fn evaluate(
        due_at: Option<Timestamp>,
        last_completed_at: Option<Timestamp>,
        now: Timestamp,
    ) -> Self {
        let Some(_completed) = last_completed_at else {
            // Never completed: it is at best due, at worst overdue.
            return match due_at {
                Some(due) if due < now => Self::Overdue,
                _ => Self::Due,
            };
        };

        match due_at {
            // Completed one-time chore with no further due date.
            None => Self::Done,
            Some(due) if due < now => Self::Overdue,
            Some(due) if due > now => Self::Done,
            // Due exactly now.
            Some(_) => Self::Due,
        }
    }

    /// Wire value published to the status topic.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Due => "due",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for ChoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user a chore is assigned to, carrying the display name so callers
/// never need a second lookup to render or publish it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: UserId,
    pub name: String,
}

/// A recurring household task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chore {
    pub id: ChoreId,
    pub name: String,
    pub description: Option<String>,
    pub recurrence_kind: RecurrenceKind,
    /// Opaque pattern string; syntax is validated at the API boundary.
    pub recurrence_pattern: Option<String>,
    pub assignee: Option<Assignee>,
    pub created_at: Timestamp,
    pub last_completed_at: Option<Timestamp>,
    pub next_due_at: Option<Timestamp>,
}

impl Chore {
    /// Create a builder for constructing a [`Chore`].
    #[must_use]
    pub fn builder() -> ChoreBuilder {
        ChoreBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::Validation`] when the name is empty or too
    /// long, the description is too long, or the recurrence pattern does not
    /// match the recurrence kind (absent for one-time, present otherwise).
    pub fn validate(&self) -> Result<(), ChoreHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.name.len() > 255 {
            return Err(ValidationError::NameTooLong.into());
        }
        if let Some(desc) = &self.description
            && desc.len() > 1000
        {
            return Err(ValidationError::DescriptionTooLong.into());
        }

        let has_pattern = self
            .recurrence_pattern
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty());
        match self.recurrence_kind {
            RecurrenceKind::OneTime if has_pattern => {
                return Err(ValidationError::PatternForbidden.into());
            }
            RecurrenceKind::FixedSchedule | RecurrenceKind::AfterCompletion if !has_pattern => {
                return Err(ValidationError::PatternRequired {
                    kind: match self.recurrence_kind {
                        RecurrenceKind::FixedSchedule => "fixed-schedule",
                        _ => "after-completion",
                    },
                }
                .into());
            }
            _ => {}
        }
        Ok(())
    }

    /// Record a completion at instant `now`.
    ///
    /// Only `last_completed_at` changes; `next_due_at` is left untouched
    /// (recurrence advancement is a separate concern).
    pub fn record_completion(&mut self, now: Timestamp) {
        self.last_completed_at = Some(now);
    }

    /// Derive the display status at instant `now`.
    #[must_use]
    pub fn status_at(&self, now: Timestamp) -> ChoreStatus {
        ChoreStatus::evaluate(self.next_due_at, self.last_completed_at, now)
    }
}

/// Step-by-step builder for [`Chore`].
#[derive(Debug, Default)]
pub struct ChoreBuilder {
    id: Option<ChoreId>,
    name: Option<String>,
    description: Option<String>,
    recurrence_kind: Option<RecurrenceKind>,
    recurrence_pattern: Option<String>,
    assignee: Option<Assignee>,
    created_at: Option<Timestamp>,
    last_completed_at: Option<Timestamp>,
    next_due_at: Option<Timestamp>,
}

impl ChoreBuilder {
    #[must_use]
    pub fn id(mut self, id: ChoreId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn recurrence_kind(mut self, kind: RecurrenceKind) -> Self {
        self.recurrence_kind = Some(kind);
        self
    }

    #[must_use]
    pub fn recurrence_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.recurrence_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn last_completed_at(mut self, last_completed_at: Timestamp) -> Self {
        self.last_completed_at = Some(last_completed_at);
        self
    }

    #[must_use]
    pub fn next_due_at(mut self, next_due_at: Timestamp) -> Self {
        self.next_due_at = Some(next_due_at);
        self
    }

    /// Consume the builder, validate, and return a [`Chore`].
    ///
    /// # Errors
    ///
    /// Returns [`ChoreHubError::Validation`] if any invariant fails.
    pub fn build(self) -> Result<Chore, ChoreHubError> {
        let chore = Chore {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description,
            recurrence_kind: self.recurrence_kind.unwrap_or(RecurrenceKind::OneTime),
            recurrence_pattern: self.recurrence_pattern,
            assignee: self.assignee,
            created_at: self.created_at.unwrap_or_else(crate::time::now),
            last_completed_at: self.last_completed_at,
            next_due_at: self.next_due_at,
        };
        chore.validate()?;
        Ok(chore)
    }
}
