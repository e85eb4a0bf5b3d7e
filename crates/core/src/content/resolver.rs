use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use tracing::instrument;

use super::model::{SectionContent, SectionId};
use crate::locale::Locale;
use crate::store::schema::PAGE_CONTENT;
use crate::store::{Cms, Filter, FindArgs, StoreError};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Upper bound on records returned by [`ContentResolver::list_visible`].
const LIST_LIMIT: usize = 100;

/// Outcome of looking a section up in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentLookup {
    Found(SectionContent),
    NotFound,
    /// The store failed or timed out.
    Unavailable(String),
}

impl ContentLookup {
    pub fn found(self) -> Option<SectionContent> {
        match self {
            ContentLookup::Found(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ContentLookup::Unavailable(_))
    }
}

/// Fetches section content from the store. Failures never escape: every
/// call degrades to an empty result and logs why.
#[derive(Clone)]
pub struct ContentResolver {
    cms: Cms,
    timeout: Duration,
}

impl ContentResolver {
    pub fn new(cms: Cms) -> Self {
        Self {
            cms,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cms(&self) -> &Cms {
        &self.cms
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T, StoreError>>) -> Result<T, StoreError> {
        tokio::time::timeout(self.timeout, call)
            .await
            .unwrap_or(Err(StoreError::Timeout(self.timeout)))
    }

    #[instrument(skip_all, fields(section = %section, locale = %locale))]
    pub async fn resolve(&self, section: SectionId, locale: Locale) -> ContentLookup {
        let args = FindArgs::new(PAGE_CONTENT)
            .filter(Filter::equals("sectionId", section.as_str()))
            .locale(locale)
            .depth(2)
            .limit(1);

        let result = match self.bounded(self.cms.find(&args)).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "content store unavailable");
                return ContentLookup::Unavailable(err.to_string());
            }
        };
        let Some(doc) = result.docs.first() else {
            tracing::debug!("no stored content");
            return ContentLookup::NotFound;
        };
        match SectionContent::from_document(doc) {
            Ok(content) => ContentLookup::Found(content),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed section record");
                ContentLookup::NotFound
            }
        }
    }

    /// Stored content for a section, or `None` when the store has none or
    /// cannot be reached.
    pub async fn get_content(&self, section: SectionId, locale: Locale) -> Option<SectionContent> {
        self.resolve(section, locale).await.found()
    }

    /// Sections flagged visible, ordered by `metadata.order`.
    #[instrument(skip_all, fields(locale = %locale))]
    pub async fn list_visible(&self, locale: Locale) -> Vec<SectionContent> {
        let args = FindArgs::new(PAGE_CONTENT)
            .filter(Filter::equals("metadata.showSection", true))
            .locale(locale)
            .depth(2)
            .sort("metadata.order")
            .limit(LIST_LIMIT);

        match self.bounded(self.cms.find(&args)).await {
            Ok(result) => parse_all(&result.docs),
            Err(err) => {
                tracing::warn!(error = %err, "failed to list visible sections");
                Vec::new()
            }
        }
    }

    /// Stored content for several sections in one query, keyed by section.
    /// Sections without a record are absent from the map.
    #[instrument(skip_all, fields(locale = %locale))]
    pub async fn get_many(&self, sections: &[SectionId], locale: Locale) -> BTreeMap<SectionId, SectionContent> {
        if sections.is_empty() {
            return BTreeMap::new();
        }
        let args = FindArgs::new(PAGE_CONTENT)
            .filter(Filter::in_list(
                "sectionId",
                sections.iter().map(|s| s.as_str()),
            ))
            .locale(locale)
            .depth(2);

        match self.bounded(self.cms.find(&args)).await {
            Ok(result) => parse_all(&result.docs)
                .into_iter()
                .map(|content| (content.section_id, content))
                .collect(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch sections");
                BTreeMap::new()
            }
        }
    }

    /// Look up every section concurrently. Each lookup degrades on its own.
    pub async fn resolve_page(&self, locale: Locale) -> Vec<(SectionId, ContentLookup)> {
        let lookups = join_all(
            SectionId::ALL
                .into_iter()
                .map(|section| self.resolve(section, locale)),
        )
        .await;
        SectionId::ALL.into_iter().zip(lookups).collect()
    }
}

fn parse_all(docs: &[serde_json::Value]) -> Vec<SectionContent> {
    docs.iter()
        .filter_map(|doc| match SectionContent::from_document(doc) {
            Ok(content) => Some(content),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed section record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::SectionMetadata;
    use crate::store::MemoryBackend;
    use serde_json::json;
    use std::sync::Arc;

    async fn seeded() -> (ContentResolver, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let cms = Cms::new(backend.clone());
        for (section, order, show) in [
            ("footer", 7.0, true),
            ("hero", 1.0, true),
            ("shopen-features", 3.5, true),
            ("team", 5.0, false),
        ] {
            cms.create(
                PAGE_CONTENT,
                json!({
                    "sectionId": section,
                    "title": {"en": format!("{section} en"), "pl": format!("{section} pl")},
                    "subtitle": {"en": "only english"},
                    "metadata": {"showSection": show, "order": order}
                }),
                None,
            )
            .await
            .unwrap();
        }
        (ContentResolver::new(cms), backend)
    }

    #[tokio::test]
    async fn found_with_per_field_fallback() {
        let (resolver, _) = seeded().await;
        let hero = resolver.get_content(SectionId::Hero, Locale::Pl).await.unwrap();
        assert_eq!(hero.title(), Some("hero pl"));
        assert_eq!(hero.subtitle(), Some("only english"));
    }

    #[tokio::test]
    async fn missing_section_is_not_found() {
        let (resolver, _) = seeded().await;
        assert_eq!(
            resolver.resolve(SectionId::Faq, Locale::En).await,
            ContentLookup::NotFound
        );
        assert_eq!(resolver.get_content(SectionId::Faq, Locale::En).await, None);
    }

    #[tokio::test]
    async fn failing_store_degrades_to_none() {
        let (resolver, backend) = seeded().await;
        backend.set_failing(true);
        let lookup = resolver.resolve(SectionId::Hero, Locale::En).await;
        assert!(lookup.is_unavailable());
        assert!(resolver.list_visible(Locale::En).await.is_empty());
        assert!(resolver
            .get_many(&[SectionId::Hero], Locale::En)
            .await
            .is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_store_times_out() {
        let backend = Arc::new(MemoryBackend::with_delay(Duration::from_secs(30)));
        let resolver =
            ContentResolver::new(Cms::new(backend)).with_timeout(Duration::from_millis(50));
        match resolver.resolve(SectionId::Hero, Locale::En).await {
            ContentLookup::Unavailable(reason) => assert!(reason.contains("timed out")),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_visible_orders_and_hides() {
        let (resolver, _) = seeded().await;
        let sections: Vec<_> = resolver
            .list_visible(Locale::En)
            .await
            .into_iter()
            .map(|c| c.section_id)
            .collect();
        assert_eq!(
            sections,
            vec![SectionId::Hero, SectionId::ShopenFeatures, SectionId::Footer]
        );
    }

    #[tokio::test]
    async fn get_many_keys_by_section() {
        let (resolver, backend) = seeded().await;
        let before = backend.call_count();
        let found = resolver
            .get_many(&[SectionId::Team, SectionId::Faq, SectionId::Hero], Locale::Pl)
            .await;
        assert_eq!(backend.call_count(), before + 1);
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![SectionId::Hero, SectionId::Team]);
        assert_eq!(found[&SectionId::Team].title(), Some("team pl"));
        assert!(resolver.get_many(&[], Locale::En).await.is_empty());
    }

    #[tokio::test]
    async fn record_without_metadata_is_listed_and_visible() {
        let cms = Cms::new(Arc::new(MemoryBackend::new()));
        cms.create(
            PAGE_CONTENT,
            json!({"sectionId": "hero", "title": {"en": "Hello"}}),
            None,
        )
        .await
        .unwrap();
        let resolver = ContentResolver::new(cms);

        let listed = resolver.list_visible(Locale::En).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].metadata, SectionMetadata::default());
        let hero = resolver.get_content(SectionId::Hero, Locale::En).await.unwrap();
        assert!(hero.metadata.show_section);
    }

    #[tokio::test]
    async fn malformed_record_is_absent() {
        let backend = Arc::new(MemoryBackend::new());
        let cms = Cms::new(backend);
        cms.create(
            PAGE_CONTENT,
            json!({"sectionId": "hero", "title": {"en": 42}}),
            None,
        )
        .await
        .unwrap();
        let resolver = ContentResolver::new(cms);
        assert_eq!(
            resolver.resolve(SectionId::Hero, Locale::En).await,
            ContentLookup::NotFound
        );
    }

    #[tokio::test]
    async fn page_resolution_covers_every_section() {
        let (resolver, _) = seeded().await;
        let page = resolver.resolve_page(Locale::En).await;
        assert_eq!(page.len(), SectionId::ALL.len());
        let found = page.iter().filter(|(_, l)| matches!(l, ContentLookup::Found(_))).count();
        assert_eq!(found, 4);
    }
}
