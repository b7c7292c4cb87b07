use std::collections::BTreeMap;

use serde_json::Value;

/// A document together with the identifier the store assigned at insert time.
///
/// The identifier is always surfaced as an opaque string so callers never see a
/// store-native id type.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub body: Value,
}

impl StoredDocument {
    /// Merge the store identifier into the document body as a public `id` field.
    pub fn into_public(self) -> Value {
        let mut body = self.body;
        if let Value::Object(ref mut fields) = body {
            fields.insert("id".to_string(), Value::String(self.id));
            body
        } else {
            // Documents are always objects in practice; wrap anything else.
            serde_json::json!({ "id": self.id, "document": body })
        }
    }
}

/// Equality filter over top-level document fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(BTreeMap<String, Value>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every filtered field is present in `body` with an equal value.
    pub fn matches(&self, body: &Value) -> bool {
        self.0
            .iter()
            .all(|(name, expected)| body.get(name) == Some(expected))
    }
}

/// Error enumeration for store adapter failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("document store rejected the operation: {0}")]
    Backend(String),
}

/// Storage abstraction owned by an external document database adapter.
///
/// The core never updates or deletes documents; the contract is insert plus
/// bounded equality-filtered reads. Consistency guarantees (or their absence)
/// belong entirely to the adapter.
pub trait DocumentStore: Send + Sync {
    /// Persist a document and return the store-assigned identifier.
    fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError>;

    /// Read documents from a collection, optionally filtered and bounded.
    /// Result order is adapter-defined.
    fn query(
        &self,
        collection: &str,
        filter: Option<&Filter>,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Names of the collections the store currently holds (diagnostics only).
    fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}
