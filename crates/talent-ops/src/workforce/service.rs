use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::attendance::{clock_event, ClockDirection};
use super::insights::{build, ActivityCounts, InsightRequest, WorkforceInsights};
use super::seed::{self, SeedSummary};
use crate::entities::{EntityKind, ValidationError};
use crate::store::{DocumentStore, Filter, StoredDocument};

pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Error raised by workforce operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkforceError {
    #[error("unknown entity kind '{0}'")]
    UnknownEntity(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] crate::store::StoreError),
}

/// Service composing the entity registry with an injected document store.
///
/// Generic over the store so routes and tests can run against any adapter.
pub struct WorkforceService<S> {
    store: Arc<S>,
}

impl<S: DocumentStore + 'static> WorkforceService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Direct store access for diagnostics endpoints.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generic create: resolve the kind name, validate, persist.
    pub fn create(&self, kind_name: &str, payload: Value) -> Result<String, WorkforceError> {
        let kind = self.resolve(kind_name)?;
        self.create_record(kind, payload)
    }

    /// Create for an already-resolved kind (quick-create endpoints).
    pub fn create_record(&self, kind: EntityKind, payload: Value) -> Result<String, WorkforceError> {
        let document = kind.validate(payload)?;
        Ok(self.store.insert(kind.collection(), document)?)
    }

    /// Generic list. Each document carries the store identifier as a public
    /// `id` string field.
    pub fn list(&self, kind_name: &str, limit: Option<usize>) -> Result<Vec<Value>, WorkforceError> {
        let kind = self.resolve(kind_name)?;
        let documents = self.store.query(
            kind.collection(),
            None,
            Some(limit.unwrap_or(DEFAULT_LIST_LIMIT)),
        )?;
        Ok(documents
            .into_iter()
            .map(StoredDocument::into_public)
            .collect())
    }

    /// Persist a check-in event. Always inserts a fresh Attendance document.
    pub fn check_in(&self, user_id: &str, time: Option<String>) -> Result<String, WorkforceError> {
        self.record_clock_event(user_id, ClockDirection::In, time)
    }

    /// Persist a check-out event. Never merges with a same-day check-in.
    pub fn check_out(&self, user_id: &str, time: Option<String>) -> Result<String, WorkforceError> {
        self.record_clock_event(user_id, ClockDirection::Out, time)
    }

    fn record_clock_event(
        &self,
        user_id: &str,
        direction: ClockDirection,
        time: Option<String>,
    ) -> Result<String, WorkforceError> {
        let record = clock_event(user_id, direction, time);
        let document = encode(EntityKind::Attendance, &record)?;
        Ok(self.store.insert(EntityKind::Attendance.collection(), document)?)
    }

    /// Aggregate store counts into the fixed-formula metrics summary.
    pub fn insights(&self, request: InsightRequest) -> Result<WorkforceInsights, WorkforceError> {
        request.validate()?;
        let counts = self.activity_counts()?;
        Ok(build(counts, request.horizon_days))
    }

    fn activity_counts(&self) -> Result<ActivityCounts, WorkforceError> {
        let employees = self
            .store
            .query(EntityKind::Employee.collection(), None, None)?
            .len() as u64;

        let tasks = self.store.query(EntityKind::Task.collection(), None, None)?;
        let tasks_total = tasks.len() as u64;
        let tasks_done = tasks
            .iter()
            .filter(|doc| status_of(doc) == Some("done"))
            .count() as u64;

        let open_roles = self
            .store
            .query(EntityKind::Job.collection(), None, None)?
            .iter()
            .filter(|doc| status_of(doc) == Some("open"))
            .count() as u64;

        let tickets_open = self
            .store
            .query(EntityKind::Ticket.collection(), None, None)?
            .iter()
            .filter(|doc| matches!(status_of(doc), Some("open" | "in_progress")))
            .count() as u64;

        let timesheet_hours = self
            .store
            .query(EntityKind::Timesheet.collection(), None, None)?
            .iter()
            .map(|doc| doc.body.get("hours").and_then(Value::as_f64).unwrap_or(0.0))
            .sum();

        Ok(ActivityCounts {
            employees,
            tasks_total,
            tasks_done,
            open_roles,
            tickets_open,
            timesheet_hours,
        })
    }

    /// Populate the fixed demo organization. Safe to call repeatedly.
    pub fn seed_demo(&self) -> Result<SeedSummary, WorkforceError> {
        seed::run(self)
    }

    /// Whether any user exists yet (startup auto-seed gate).
    pub fn has_users(&self) -> Result<bool, WorkforceError> {
        let users = self
            .store
            .query(EntityKind::User.collection(), None, Some(1))?;
        Ok(!users.is_empty())
    }

    pub(crate) fn find_one(
        &self,
        kind: EntityKind,
        filter: Filter,
    ) -> Result<Option<StoredDocument>, WorkforceError> {
        let mut matches = self.store.query(kind.collection(), Some(&filter), Some(1))?;
        Ok(if matches.is_empty() {
            None
        } else {
            Some(matches.swap_remove(0))
        })
    }

    fn resolve(&self, kind_name: &str) -> Result<EntityKind, WorkforceError> {
        EntityKind::parse(kind_name)
            .ok_or_else(|| WorkforceError::UnknownEntity(kind_name.to_string()))
    }
}

fn status_of(doc: &StoredDocument) -> Option<&str> {
    doc.body.get("status").and_then(Value::as_str)
}

pub(crate) fn encode<T: Serialize>(kind: EntityKind, record: &T) -> Result<Value, WorkforceError> {
    serde_json::to_value(record).map_err(|err| {
        WorkforceError::Validation(ValidationError::Shape {
            kind: kind.collection(),
            detail: err.to_string(),
        })
    })
}
