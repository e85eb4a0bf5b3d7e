//! Document store query layer.
//!
//! [`Cms`] is the query interface used by the rest of the crate. It loads raw
//! documents from a [`StoreBackend`], then sorts, limits, populates media
//! references and projects localized fields to a single locale, driven by the
//! collection's [`schema::CollectionSchema`].

pub mod backend;
pub mod filter;
pub mod memory;
pub mod postgres;
pub mod project;
pub mod schema;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::document::validate::{validate_required_fields, RecordError};
use crate::document::Document;
use crate::events::{ContentEvent, DocumentEvent, EventBus};
use crate::locale::Locale;

pub use backend::StoreBackend;
pub use filter::{Filter, Sort};
pub use memory::MemoryBackend;
pub use postgres::PgBackend;
use schema::CollectionSchema;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("unknown collection `{0}`")]
    UnknownCollection(String),

    #[error("{collection} document {id} not found")]
    NotFound { collection: String, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Invalid(#[from] RecordError),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

/// Arguments for [`Cms::find`].
#[derive(Debug, Clone)]
pub struct FindArgs {
    pub collection: String,
    pub filter: Filter,
    /// Project localized fields to this locale. `None` returns the stored
    /// locale maps.
    pub locale: Option<Locale>,
    /// `0` leaves media references as ids; anything higher inlines them.
    pub depth: u8,
    pub sort: Option<Sort>,
    pub limit: Option<usize>,
}

impl FindArgs {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            filter: Filter::All,
            locale: None,
            depth: 0,
            sort: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn sort(mut self, sort: &str) -> Self {
        self.sort = Some(Sort::parse(sort));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FindResult {
    pub docs: Vec<Value>,
    /// Matches before `limit` was applied.
    pub total_docs: usize,
}

/// The content store: a backend plus the query semantics on top of it.
#[derive(Clone)]
pub struct Cms {
    backend: Arc<dyn StoreBackend>,
    events: Option<EventBus>,
}

impl Cms {
    pub fn new(backend: Arc<dyn StoreBackend>) -> Self {
        Self {
            backend,
            events: None,
        }
    }

    /// Publish a [`ContentEvent`] on `events` after every successful write.
    pub fn with_events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    pub fn backend_tag(&self) -> &'static str {
        self.backend.backend_tag()
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.backend.ping().await
    }

    #[instrument(skip_all, fields(collection = %args.collection, backend = self.backend_tag()))]
    pub async fn find(&self, args: &FindArgs) -> Result<FindResult, StoreError> {
        let schema = schema::collection(&args.collection)?;
        let docs = self.backend.load(schema.slug, &args.filter).await?;

        let mut values: Vec<Value> = docs.iter().map(Document::to_value).collect();
        if let Some(sort) = &args.sort {
            values.sort_by(|a, b| sort.compare(a, b));
        }
        let total_docs = values.len();
        if let Some(limit) = args.limit {
            values.truncate(limit);
        }

        let docs = self.shape(schema, values, args.locale, args.depth).await?;
        tracing::debug!(returned = docs.len(), total_docs, "find");
        Ok(FindResult { docs, total_docs })
    }

    pub async fn find_one(&self, args: FindArgs) -> Result<Option<Value>, StoreError> {
        let result = self.find(&args.limit(1)).await?;
        Ok(result.docs.into_iter().next())
    }

    pub async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
        locale: Option<Locale>,
        depth: u8,
    ) -> Result<Option<Value>, StoreError> {
        let schema = schema::collection(collection)?;
        let docs = self
            .backend
            .load_by_ids(schema.slug, &[id.to_string()])
            .await?;
        let values = docs.iter().map(Document::to_value).collect();
        let shaped = self.shape(schema, values, locale, depth).await?;
        Ok(shaped.into_iter().next())
    }

    /// Create a document. With a `locale`, localized fields are given as
    /// plain values for that locale; without one they must already be
    /// locale maps.
    #[instrument(skip(self, data))]
    pub async fn create(
        &self,
        collection: &str,
        mut data: Value,
        locale: Option<Locale>,
    ) -> Result<Value, StoreError> {
        let schema = schema::collection(collection)?;
        if let Some(locale) = locale {
            project::localize_for_write(&mut data, None, schema.localized, locale);
        }
        let Value::Object(mut fields) = data else {
            return Err(RecordError::NotAnObject {
                collection: collection.to_string(),
            }
            .into());
        };
        schema.apply_defaults(&mut fields);
        validate_required_fields(schema.slug, schema.required, &fields)?;

        let stored = self
            .backend
            .insert(schema, Document::new(schema.slug, fields))
            .await?;
        tracing::info!(id = %stored.id, "document created");

        self.publish(|| match schema.slug {
            schema::CONTACT_MESSAGES => ContentEvent::ContactReceived {
                id: stored.id.clone(),
                timestamp: stored.created_at,
            },
            _ => ContentEvent::DocumentCreated(document_event(&stored)),
        });
        Ok(stored.to_value())
    }

    /// Merge `data`'s top-level fields into an existing document.
    #[instrument(skip(self, data))]
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        mut data: Value,
        locale: Option<Locale>,
    ) -> Result<Value, StoreError> {
        let schema = schema::collection(collection)?;
        let mut doc = self
            .backend
            .load_by_ids(schema.slug, &[id.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        if let Some(locale) = locale {
            let existing = doc.data_value();
            project::localize_for_write(&mut data, Some(&existing), schema.localized, locale);
        }
        let Value::Object(fields) = data else {
            return Err(RecordError::NotAnObject {
                collection: collection.to_string(),
            }
            .into());
        };
        doc.data.extend(fields);
        schema.apply_defaults(&mut doc.data);
        validate_required_fields(schema.slug, schema.required, &doc.data)?;

        let stored = self.backend.replace(schema, doc).await?;
        self.publish(|| ContentEvent::DocumentUpdated(document_event(&stored)));
        Ok(stored.to_value())
    }

    /// Swap every field of an existing document for `data`, keeping its id
    /// and creation time.
    #[instrument(skip(self, data))]
    pub async fn replace(&self, collection: &str, id: &str, data: Value) -> Result<Value, StoreError> {
        let schema = schema::collection(collection)?;
        let Value::Object(mut fields) = data else {
            return Err(RecordError::NotAnObject {
                collection: collection.to_string(),
            }
            .into());
        };
        schema.apply_defaults(&mut fields);
        validate_required_fields(schema.slug, schema.required, &fields)?;

        let mut doc = Document::new(schema.slug, fields);
        doc.id = id.to_string();
        let stored = self.backend.replace(schema, doc).await?;
        self.publish(|| ContentEvent::DocumentUpdated(document_event(&stored)));
        Ok(stored.to_value())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let schema = schema::collection(collection)?;
        if !self.backend.remove(schema.slug, id).await? {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        self.publish(|| {
            ContentEvent::DocumentDeleted(DocumentEvent::new(schema.slug, id, None))
        });
        Ok(())
    }

    /// Populate media references (depth > 0) and project locales.
    async fn shape(
        &self,
        schema: &CollectionSchema,
        mut values: Vec<Value>,
        locale: Option<Locale>,
        depth: u8,
    ) -> Result<Vec<Value>, StoreError> {
        if depth > 0 && !schema.uploads.is_empty() {
            let ids: BTreeSet<String> = values
                .iter()
                .flat_map(|v| project::referenced_ids(v, schema.uploads))
                .collect();
            if !ids.is_empty() {
                let ids: Vec<String> = ids.into_iter().collect();
                let media = self.backend.load_by_ids(schema::MEDIA, &ids).await?;
                let resolved: HashMap<String, Value> = media
                    .iter()
                    .map(|doc| {
                        let mut value = doc.to_value();
                        if let Some(locale) = locale {
                            project::project_locale(&mut value, schema::MEDIA_SCHEMA.localized, locale);
                        }
                        (doc.id.clone(), value)
                    })
                    .collect();
                for value in &mut values {
                    project::populate_references(value, schema.uploads, &resolved);
                }
            }
        }

        if let Some(locale) = locale {
            for value in &mut values {
                project::project_locale(value, schema.localized, locale);
            }
        }
        Ok(values)
    }

    fn publish(&self, event: impl FnOnce() -> ContentEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event());
        }
    }
}

fn document_event(doc: &Document) -> DocumentEvent {
    let section_id = (doc.collection == schema::PAGE_CONTENT)
        .then(|| doc.data.get("sectionId").and_then(Value::as_str).map(str::to_string))
        .flatten();
    DocumentEvent::new(&doc.collection, &doc.id, section_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cms() -> (Cms, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        (Cms::new(backend.clone()), backend)
    }

    #[tokio::test]
    async fn localized_create_then_find_with_fallback() {
        let (cms, _) = cms();
        cms.create(
            schema::PAGE_CONTENT,
            json!({"sectionId": "hero", "title": "Welcome", "subtitle": "We build"}),
            Some(Locale::En),
        )
        .await
        .unwrap();
        let created = cms
            .find_one(FindArgs::new(schema::PAGE_CONTENT).filter(Filter::equals("sectionId", "hero")))
            .await
            .unwrap()
            .unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        cms.update(schema::PAGE_CONTENT, &id, json!({"title": "Witamy"}), Some(Locale::Pl))
            .await
            .unwrap();

        let pl = cms
            .find_by_id(schema::PAGE_CONTENT, &id, Some(Locale::Pl), 0)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(pl["title"], "Witamy");
        assert_eq!(pl["subtitle"], "We build");

        let raw = cms.find_by_id(schema::PAGE_CONTENT, &id, None, 0).await.unwrap().unwrap();
        assert_eq!(raw["title"], json!({"en": "Welcome", "pl": "Witamy"}));
    }

    #[tokio::test]
    async fn find_sorts_limits_and_counts() {
        let (cms, _) = cms();
        for (section, order, show) in [("footer", 7, true), ("hero", 1, true), ("team", 5, false)] {
            cms.create(
                schema::PAGE_CONTENT,
                json!({
                    "sectionId": section,
                    "title": {"en": section},
                    "metadata": {"showSection": show, "order": order}
                }),
                None,
            )
            .await
            .unwrap();
        }
        let args = FindArgs::new(schema::PAGE_CONTENT)
            .filter(Filter::equals("metadata.showSection", true))
            .sort("metadata.order");
        let result = cms.find(&args).await.unwrap();
        let ids: Vec<_> = result.docs.iter().map(|d| d["sectionId"].clone()).collect();
        assert_eq!(ids, vec![json!("hero"), json!("footer")]);

        let limited = cms.find(&args.clone().limit(1)).await.unwrap();
        assert_eq!(limited.docs.len(), 1);
        assert_eq!(limited.total_docs, 2);
    }

    #[tokio::test]
    async fn depth_populates_media() {
        let (cms, _) = cms();
        let logo = cms
            .create(
                schema::MEDIA,
                json!({"filename": "codeious-logo.png", "url": "/api/media/file/codeious-logo.png"}),
                None,
            )
            .await
            .unwrap();
        cms.create(
            schema::PAGE_CONTENT,
            json!({"sectionId": "hero", "title": {"en": "Hi"}, "media": {"logo": logo["id"]}}),
            None,
        )
        .await
        .unwrap();

        let shallow = cms
            .find_one(FindArgs::new(schema::PAGE_CONTENT))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(shallow["media"]["logo"], logo["id"]);

        let deep = cms
            .find_one(FindArgs::new(schema::PAGE_CONTENT).depth(2).locale(Locale::Pl))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(deep["media"]["logo"]["filename"], "codeious-logo.png");
        assert_eq!(deep["title"], "Hi");
    }

    #[tokio::test]
    async fn create_and_update_apply_schema_defaults() {
        let (cms, _) = cms();
        let created = cms
            .create(
                schema::PAGE_CONTENT,
                json!({"sectionId": "faq", "title": {"en": "FAQ"}}),
                None,
            )
            .await
            .unwrap();
        assert_eq!(created["metadata"], json!({"showSection": true, "order": 0}));

        let id = created["id"].as_str().unwrap();
        let updated = cms
            .update(schema::PAGE_CONTENT, id, json!({"metadata": {"order": 3}}), None)
            .await
            .unwrap();
        assert_eq!(updated["metadata"], json!({"showSection": true, "order": 3}));
    }

    #[tokio::test]
    async fn replace_drops_fields_missing_from_new_data() {
        let (cms, _) = cms();
        let created = cms
            .create(
                schema::PAGE_CONTENT,
                json!({"sectionId": "team", "title": {"en": "Team"}, "subtitle": {"en": "Old"}}),
                None,
            )
            .await
            .unwrap();
        let id = created["id"].as_str().unwrap();
        let replaced = cms
            .replace(schema::PAGE_CONTENT, id, json!({"sectionId": "team", "title": {"en": "Crew"}}))
            .await
            .unwrap();
        assert_eq!(replaced["id"], id);
        assert_eq!(replaced["createdAt"], created["createdAt"]);
        assert!(replaced.get("subtitle").is_none());

        let missing = cms
            .replace(schema::PAGE_CONTENT, "nope", json!({"sectionId": "faq", "title": {"en": "x"}}))
            .await
            .unwrap_err();
        assert!(matches!(missing, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn create_rejects_missing_required_fields() {
        let (cms, _) = cms();
        let err = cms
            .create(schema::PAGE_CONTENT, json!({"title": {"en": "x"}}), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(RecordError::MissingField { .. })));

        let err = cms.create("users", json!({}), None).await.unwrap_err();
        assert!(matches!(err, StoreError::UnknownCollection(_)));
    }

    #[tokio::test]
    async fn writes_publish_events() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let (cms, _) = cms();
        let cms = cms.with_events(bus);

        let created = cms
            .create(schema::PAGE_CONTENT, json!({"sectionId": "faq", "title": {"en": "FAQ"}}), None)
            .await
            .unwrap();
        match rx.recv().await.unwrap() {
            ContentEvent::DocumentCreated(event) => {
                assert_eq!(event.section_id.as_deref(), Some("faq"));
            }
            other => panic!("unexpected event {other:?}"),
        }

        let id = created["id"].as_str().unwrap();
        cms.delete(schema::PAGE_CONTENT, id).await.unwrap();
        assert!(matches!(rx.recv().await.unwrap(), ContentEvent::DocumentDeleted(_)));
        assert!(matches!(
            cms.delete(schema::PAGE_CONTENT, id).await,
            Err(StoreError::NotFound { .. })
        ));
    }
}
