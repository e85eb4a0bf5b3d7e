use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::backend::StoreBackend;
use super::filter::{lookup, Filter};
use super::schema::CollectionSchema;
use super::StoreError;
use crate::document::Document;

/// In-process backend. Used when no database is configured and in tests,
/// where `set_failing` and `with_delay` simulate an unreachable or slow
/// store.
#[derive(Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    failing: AtomicBool,
    delay: Duration,
    calls: AtomicU64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every call fails as unavailable.
    pub fn failing() -> Self {
        let backend = Self::default();
        backend.set_failing(true);
        backend
    }

    /// A backend that sleeps before answering each call.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of backend calls served so far, failed ones included.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    async fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "memory backend switched to failing".to_string(),
            ));
        }
        Ok(())
    }
}

fn unique_clash(schema: &CollectionSchema, existing: &[Document], doc: &Document) -> Option<String> {
    let candidate = doc.data_value();
    for field in schema.unique {
        let Some(value) = lookup(&candidate, field) else {
            continue;
        };
        let clash = existing
            .iter()
            .filter(|other| other.id != doc.id)
            .any(|other| lookup(&other.data_value(), field) == Some(value));
        if clash {
            return Some(format!("{} with {field} = {value} already exists", schema.slug));
        }
    }
    None
}

#[async_trait]
impl StoreBackend for MemoryBackend {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        self.enter().await?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(&doc.data_value()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn load_by_ids(&self, collection: &str, ids: &[String]) -> Result<Vec<Document>, StoreError> {
        self.enter().await?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| ids.contains(&doc.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert(&self, schema: &CollectionSchema, doc: Document) -> Result<Document, StoreError> {
        self.enter().await?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(schema.slug.to_string()).or_default();
        if let Some(reason) = unique_clash(schema, docs, &doc) {
            return Err(StoreError::Conflict(reason));
        }
        docs.push(doc.clone());
        Ok(doc)
    }

    async fn replace(&self, schema: &CollectionSchema, mut doc: Document) -> Result<Document, StoreError> {
        self.enter().await?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(schema.slug.to_string()).or_default();
        if let Some(reason) = unique_clash(schema, docs, &doc) {
            return Err(StoreError::Conflict(reason));
        }
        let Some(slot) = docs.iter_mut().find(|existing| existing.id == doc.id) else {
            return Err(StoreError::NotFound {
                collection: schema.slug.to_string(),
                id: doc.id,
            });
        };
        doc.created_at = slot.created_at;
        doc.updated_at = Utc::now();
        *slot = doc.clone();
        Ok(doc)
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        self.enter().await?;
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        Ok(docs.len() != before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::PAGE_CONTENT_SCHEMA;
    use serde_json::json;

    fn section(id: &str) -> Document {
        let data = json!({"sectionId": id, "title": {"en": id}});
        Document::new("page-content", data.as_object().cloned().unwrap())
    }

    #[tokio::test]
    async fn insert_load_remove() {
        let backend = MemoryBackend::new();
        let hero = backend.insert(&PAGE_CONTENT_SCHEMA, section("hero")).await.unwrap();
        backend.insert(&PAGE_CONTENT_SCHEMA, section("faq")).await.unwrap();

        let found = backend
            .load("page-content", &Filter::equals("sectionId", "hero"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, hero.id);

        assert!(backend.remove("page-content", &hero.id).await.unwrap());
        assert!(!backend.remove("page-content", &hero.id).await.unwrap());
        assert_eq!(backend.load("page-content", &Filter::All).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unique_fields_are_enforced() {
        let backend = MemoryBackend::new();
        backend.insert(&PAGE_CONTENT_SCHEMA, section("hero")).await.unwrap();
        let err = backend
            .insert(&PAGE_CONTENT_SCHEMA, section("hero"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn replace_keeps_creation_time() {
        let backend = MemoryBackend::new();
        let original = backend.insert(&PAGE_CONTENT_SCHEMA, section("team")).await.unwrap();
        let mut changed = original.clone();
        changed.data.insert("subtitle".into(), json!({"en": "People"}));
        let stored = backend.replace(&PAGE_CONTENT_SCHEMA, changed).await.unwrap();
        assert_eq!(stored.created_at, original.created_at);
        assert!(stored.updated_at >= original.updated_at);

        let missing = section("contact");
        assert!(matches!(
            backend.replace(&PAGE_CONTENT_SCHEMA, missing).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn failing_switch() {
        let backend = MemoryBackend::failing();
        assert!(matches!(backend.ping().await, Err(StoreError::Unavailable(_))));
        backend.set_failing(false);
        assert!(backend.ping().await.is_ok());
        assert_eq!(backend.call_count(), 2);
    }
}
