use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use talent_ops::config::DatabaseConfig;
use talent_ops::store::{DocumentStore, Filter, StoreError, StoredDocument};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) database: DatabaseConfig,
}

/// Process-local document store adapter. Collections are created on first
/// insert; identifiers are `<collection>-<sequence>`.
#[derive(Default)]
pub(crate) struct InMemoryDocumentStore {
    collections: Mutex<BTreeMap<String, Vec<StoredDocument>>>,
    sequence: AtomicU64,
}

impl DocumentStore for InMemoryDocumentStore {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_assigns_sequential_collection_ids() {
        let store = InMemoryDocumentStore::default();
        let first = store
            .insert("user", json!({ "name": "Ava Patel" }))
            .expect("insert works");
        let second = store
            .insert("user", json!({ "name": "Liam Chen" }))
            .expect("insert works");
        assert_ne!(first, second);
        assert!(first.starts_with("user-"));
    }

    #[test]
    fn query_applies_filter_and_limit() {
        let store = InMemoryDocumentStore::default();
        for name in ["Ava", "Liam", "Maya"] {
            store
                .insert("user", json!({ "name": name, "active": true }))
                .expect("insert works");
        }

        let filtered = store
            .query("user", Some(&Filter::new().field("name", "Maya")), None)
            .expect("query works");
        assert_eq!(filtered.len(), 1);

        let limited = store.query("user", None, Some(2)).expect("query works");
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn collection_names_track_inserts() {
        let store = InMemoryDocumentStore::default();
        assert!(store.collection_names().expect("names").is_empty());
        store
            .insert("ticket", json!({ "subject": "vpn" }))
            .expect("insert works");
        assert_eq!(store.collection_names().expect("names"), vec!["ticket"]);
    }
}
