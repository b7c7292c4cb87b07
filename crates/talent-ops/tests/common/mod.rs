#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use talent_ops::store::{DocumentStore, Filter, StoreError, StoredDocument};
use talent_ops::workforce::WorkforceService;

/// Simple in-memory document store for exercising the service and routes.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<StoredDocument>>>,
    sequence: AtomicU64,
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let id = format!("{collection}-{seq:06}");
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        guard
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                body: document,
            });
        Ok(id)
    }

    fn query(
        &self,
        collection: &str,
        filter: Option<&Filter>,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        let documents = guard.get(collection).cloned().unwrap_or_default();
        let matching = documents
            .into_iter()
            .filter(|doc| filter.map_or(true, |f| f.matches(&doc.body)));
        Ok(match limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard.keys().cloned().collect())
    }
}

/// Store whose every operation fails, for server-error paths.
pub struct UnavailableStore;

impl DocumentStore for UnavailableStore {
    fn insert(&self, _collection: &str, _document: Value) -> Result<String, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn query(
        &self,
        _collection: &str,
        _filter: Option<&Filter>,
        _limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

pub fn memory_service() -> WorkforceService<MemoryStore> {
    WorkforceService::new(Arc::new(MemoryStore::default()))
}

pub fn unavailable_service() -> WorkforceService<UnavailableStore> {
    WorkforceService::new(Arc::new(UnavailableStore))
}

/// A schema-satisfying payload for each of the fifteen entity kinds.
pub fn valid_payload(kind: &str) -> Value {
    match kind {
        "user" => json!({
            "name": "Maya Ross",
            "email": "maya.ross@demo.co",
            "role": "team_lead",
            "department": "Engineering",
        }),
        "employee" => json!({
            "user_id": "user-000001",
            "employee_id": "EMP2001",
            "title": "Engineering Lead",
            "team": "Engineering",
            "location": "Remote",
            "salary": 180000.0,
        }),
        "team" => json!({
            "name": "Engineering",
            "lead_user_id": "user-000001",
            "members": ["user-000001", "user-000002"],
        }),
        "attendance" => json!({
            "user_id": "user-000001",
            "date": "2026-08-03",
            "status": "remote",
            "check_in": "09:00",
        }),
        "leave" => json!({
            "user_id": "user-000001",
            "start_date": "2026-08-10",
            "end_date": "2026-08-14",
            "type": "annual",
            "reason": "Summer break",
        }),
        "task" => json!({
            "title": "Ship onboarding flow",
            "assignee_id": "user-000002",
            "due_date": "2026-08-21",
            "tags": ["onboarding", "q3"],
        }),
        "timesheet" => json!({
            "user_id": "user-000002",
            "date": "2026-08-03",
            "hours": 7.5,
            "notes": "Pairing on the onboarding flow",
        }),
        "payroll" => json!({
            "user_id": "user-000002",
            "period_start": "2026-07-01",
            "period_end": "2026-07-31",
            "gross": 12500.0,
            "tax": 3100.0,
            "deductions": 400.0,
            "net": 9000.0,
        }),
        "job" => json!({
            "title": "Senior Platform Engineer",
            "department": "Engineering",
            "location": "Remote",
            "description": "Own the workforce platform backend",
        }),
        "application" => json!({
            "job_id": "job-000001",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+1 555 0100",
            "score": 87.5,
        }),
        "resumeparseresult" => json!({
            "application_id": "application-000001",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "skills": ["docker", "python"],
            "years_experience": 5.0,
        }),
        "performance" => json!({
            "user_id": "user-000002",
            "period": "2026-Q2",
            "goals": ["Ship onboarding flow", "Mentor one engineer"],
            "rating": 4.5,
        }),
        "announcement" => json!({
            "title": "Office closed Friday",
            "message": "The NYC office is closed for maintenance.",
            "audience": "all",
            "priority": "high",
        }),
        "ticket" => json!({
            "user_id": "user-000002",
            "subject": "Laptop battery failing",
            "message": "Battery drains within an hour.",
            "category": "hardware",
        }),
        "notification" => json!({
            "user_id": "user-000002",
            "type": "task_assigned",
            "title": "New task",
            "body": "You were assigned 'Ship onboarding flow'.",
        }),
        other => panic!("no fixture payload for entity kind '{other}'"),
    }
}

pub const ALL_KIND_NAMES: [&str; 15] = [
    "user",
    "employee",
    "team",
    "attendance",
    "leave",
    "task",
    "timesheet",
    "payroll",
    "job",
    "application",
    "resumeparseresult",
    "performance",
    "announcement",
    "ticket",
    "notification",
];
