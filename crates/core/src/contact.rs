//! Contact form intake: validate a submission and store it as a
//! `contact-messages` record.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::store::schema::CONTACT_MESSAGES;
use crate::store::{Cms, StoreError};

pub const CONTACT_SOURCE: &str = "website-contact-form";

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name, email, and message are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A form submission as received. Absent fields are treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request details recorded with a message.
#[derive(Debug, Clone, Default)]
pub struct SubmitterMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    New,
    InProgress,
    Replied,
    Closed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// A validated, normalized `contact-messages` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    pub priority: ContactPriority,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("failed to store contact message: {0}")]
    Persistence(#[from] StoreError),
}

fn trimmed(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default().trim()
}

impl ContactSubmission {
    /// Check and normalize the submission: every field trimmed and
    /// non-empty, the email well-formed and lowercased.
    pub fn validate(&self, meta: SubmitterMeta) -> Result<NewContactMessage, ContactError> {
        let (name, email, message) = (trimmed(&self.name), trimmed(&self.email), trimmed(&self.message));
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::Validation(MISSING_FIELDS_MESSAGE));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ContactError::Validation(INVALID_EMAIL_MESSAGE));
        }
        Ok(NewContactMessage {
            name: name.to_string(),
            email: email.to_lowercase(),
            message: message.to_string(),
            status: ContactStatus::New,
            priority: ContactPriority::Normal,
            source: CONTACT_SOURCE.to_string(),
            ip_address: meta.ip_address.filter(|ip| !ip.is_empty()),
            user_agent: meta.user_agent.filter(|ua| !ua.is_empty()),
        })
    }
}

/// Validate a submission and insert it. No retries: each call that passes
/// validation writes one record.
#[instrument(skip_all, fields(backend = cms.backend_tag()))]
pub async fn submit_contact(
    cms: &Cms,
    submission: ContactSubmission,
    meta: SubmitterMeta,
) -> Result<ContactReceipt, ContactError> {
    let record = submission.validate(meta)?;
    let data = serde_json::to_value(&record).map_err(|err| {
        ContactError::Persistence(StoreError::Unavailable(format!("unserializable contact record: {err}")))
    })?;

    let stored = cms.create(CONTACT_MESSAGES, data, None).await?;
    let id = match stored.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    tracing::info!(%id, "contact message stored");
    Ok(ContactReceipt { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FindArgs, MemoryBackend};
    use std::sync::Arc;
    use tokio_test::{assert_err, assert_ok};

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    #[test]
    fn rejects_blank_fields() {
        for sub in [
            submission("", "a@b.com", "hi"),
            submission("A", "   ", "hi"),
            submission("A", "a@b.com", "\n"),
            ContactSubmission::default(),
        ] {
            let err = assert_err!(sub.validate(SubmitterMeta::default()));
            assert!(matches!(err, ContactError::Validation(MISSING_FIELDS_MESSAGE)));
        }
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["not-an-email", "a@b", "a b@c.com", "@b.com", "a@@b.com"] {
            let err = submission("A", email, "hi")
                .validate(SubmitterMeta::default())
                .unwrap_err();
            assert_eq!(err.to_string(), INVALID_EMAIL_MESSAGE, "{email}");
        }
    }

    #[test]
    fn normalizes_valid_submission() {
        let record = assert_ok!(submission("  Ada ", " Ada@Example.COM ", " hello\n").validate(
            SubmitterMeta {
                ip_address: Some("203.0.113.9".into()),
                user_agent: Some(String::new()),
            }
        ));
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.message, "hello");
        assert_eq!(record.status, ContactStatus::New);
        assert_eq!(record.priority, ContactPriority::Normal);
        assert_eq!(record.source, CONTACT_SOURCE);
        assert_eq!(record.ip_address.as_deref(), Some("203.0.113.9"));
        assert_eq!(record.user_agent, None);
    }

    #[tokio::test]
    async fn persists_one_record_per_submission() {
        let cms = Cms::new(Arc::new(MemoryBackend::new()));
        let meta = SubmitterMeta {
            ip_address: None,
            user_agent: Some("curl/8.0".into()),
        };
        let first = assert_ok!(submit_contact(&cms, submission("A", "A@B.com", "hi"), meta.clone()).await);
        let second = assert_ok!(submit_contact(&cms, submission("A", "A@B.com", "hi"), meta).await);
        assert_ne!(first.id, second.id);

        let stored = cms.find(&FindArgs::new(CONTACT_MESSAGES)).await.unwrap();
        assert_eq!(stored.docs.len(), 2);
        let doc = &stored.docs[0];
        assert_eq!(doc["email"], "a@b.com");
        assert_eq!(doc["status"], "new");
        assert_eq!(doc["priority"], "normal");
        assert_eq!(doc["source"], "website-contact-form");
        assert_eq!(doc["userAgent"], "curl/8.0");
        assert!(doc.get("ipAddress").is_none());
    }

    #[tokio::test]
    async fn store_failure_is_a_persistence_error() {
        let cms = Cms::new(Arc::new(MemoryBackend::failing()));
        let err = submit_contact(&cms, submission("A", "a@b.com", "hi"), SubmitterMeta::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ContactError::Persistence(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_store() {
        let backend = Arc::new(MemoryBackend::new());
        let cms = Cms::new(backend.clone());
        let _ = submit_contact(&cms, submission("A", "nope", "hi"), SubmitterMeta::default()).await;
        assert_eq!(backend.call_count(), 0);
    }
}
