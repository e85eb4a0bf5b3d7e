use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A document stored in one of the CMS collections.
///
/// `data` holds the collection fields exactly as stored: localized fields
/// are locale maps (`{"en": .., "pl": ..}`) and media references are media
/// document ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub collection: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub data: Map<String, Value>,
}

impl Document {
    /// A fresh document with a time-ordered id.
    pub fn new(collection: &str, data: Map<String, Value>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            collection: collection.to_string(),
            created_at: now,
            updated_at: now,
            data,
        }
    }

    /// The API shape of the document: its fields plus `id`, `createdAt` and
    /// `updatedAt`.
    pub fn to_value(&self) -> Value {
        let mut map = self.data.clone();
        map.insert("id".into(), Value::String(self.id.clone()));
        map.insert(
            "createdAt".into(),
            Value::String(self.created_at.to_rfc3339()),
        );
        map.insert(
            "updatedAt".into(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        Value::Object(map)
    }

    pub fn data_value(&self) -> Value {
        Value::Object(self.data.clone())
    }
}

/// Database row representation of a document.
/// Maps to the `documents` PostgreSQL table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: String,
    pub collection: String,
    pub content: sqlx::types::Json<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        let data = match row.content.0 {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Document {
            id: row.id,
            collection: row.collection,
            created_at: row.created_at,
            updated_at: row.updated_at,
            data,
        }
    }
}
