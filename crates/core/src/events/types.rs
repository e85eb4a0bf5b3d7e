use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events emitted after successful writes to the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentEvent {
    DocumentCreated(DocumentEvent),
    DocumentUpdated(DocumentEvent),
    DocumentDeleted(DocumentEvent),
    ContactReceived { id: String, timestamp: DateTime<Utc> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEvent {
    pub collection: String,
    pub document_id: String,
    /// Set for `page-content` documents.
    pub section_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DocumentEvent {
    pub fn new(collection: &str, document_id: &str, section_id: Option<String>) -> Self {
        Self {
            collection: collection.to_string(),
            document_id: document_id.to_string(),
            section_id,
            timestamp: Utc::now(),
        }
    }
}
