use async_trait::async_trait;

use super::filter::Filter;
use super::schema::CollectionSchema;
use super::StoreError;
use crate::document::Document;

/// Raw document persistence. Backends store and return documents exactly
/// as written; locale projection and reference population happen above
/// them, in [`super::Cms`].
#[async_trait]
pub trait StoreBackend: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// Every live document of `collection` matching `filter`, in insertion
    /// order.
    async fn load(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn load_by_ids(&self, collection: &str, ids: &[String]) -> Result<Vec<Document>, StoreError>;

    /// Insert a new document, rejecting it with [`StoreError::Conflict`] if
    /// it repeats a value of one of the schema's unique fields.
    async fn insert(&self, schema: &CollectionSchema, doc: Document) -> Result<Document, StoreError>;

    /// Overwrite an existing document's fields.
    async fn replace(&self, schema: &CollectionSchema, doc: Document) -> Result<Document, StoreError>;

    /// Returns `false` when there was nothing to delete.
    async fn remove(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
