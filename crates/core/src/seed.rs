//! Load the bundled catalog into the document store.

use std::collections::HashMap;

use codeious_site_richtext::parse_markdown;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::instrument;

use crate::content::catalog_data::{CatalogEntry, CatalogItem, LocalizedText, CATALOG, MEDIA_FILES};
use crate::content::model::media_file_url;
use crate::store::schema::{MEDIA, PAGE_CONTENT};
use crate::store::{Cms, Filter, FindArgs, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    pub media_created: usize,
    pub media_existing: usize,
    pub sections_replaced: usize,
    pub sections_created: usize,
}

fn plain_map(text: LocalizedText) -> Value {
    let mut map = Map::new();
    map.insert("en".into(), Value::String(text.en.to_string()));
    if let Some(pl) = text.pl {
        map.insert("pl".into(), Value::String(pl.to_string()));
    }
    Value::Object(map)
}

fn rich_map(text: LocalizedText) -> Value {
    let mut map = Map::new();
    map.insert("en".into(), parse_markdown(text.en).to_value());
    if let Some(pl) = text.pl {
        map.insert("pl".into(), parse_markdown(pl).to_value());
    }
    Value::Object(map)
}

fn media_ref(filename: Option<&str>, media_ids: &HashMap<&str, String>) -> Option<Value> {
    filename
        .and_then(|name| media_ids.get(name))
        .map(|id| Value::String(id.clone()))
}

fn insert_some(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

fn item_record(item: &CatalogItem, media_ids: &HashMap<&str, String>) -> Value {
    let mut map = Map::new();
    insert_some(&mut map, "title", item.title.map(plain_map));
    insert_some(&mut map, "description", item.description.map(rich_map));
    insert_some(&mut map, "additionalText", item.additional_text.map(rich_map));
    insert_some(&mut map, "role", item.role.map(plain_map));
    insert_some(&mut map, "image", media_ref(item.image, media_ids));
    Value::Object(map)
}

/// The stored shape of a catalog entry: locale maps for every localized
/// field, media references as media ids.
pub fn section_record(entry: &CatalogEntry, media_ids: &HashMap<&str, String>) -> Value {
    let mut map = Map::new();
    map.insert("sectionId".into(), json!(entry.section));
    map.insert("title".into(), plain_map(entry.title));
    insert_some(&mut map, "subtitle", entry.subtitle.map(plain_map));
    insert_some(&mut map, "description", entry.description.map(rich_map));
    insert_some(&mut map, "additionalContent", entry.additional_content.map(rich_map));
    insert_some(&mut map, "ctaText", entry.cta_text.map(plain_map));

    let mut media = Map::new();
    insert_some(&mut media, "backgroundImage", media_ref(entry.media.background_image, media_ids));
    insert_some(&mut media, "sectionImage", media_ref(entry.media.section_image, media_ids));
    insert_some(&mut media, "logo", media_ref(entry.media.logo, media_ids));
    if !media.is_empty() {
        map.insert("media".into(), Value::Object(media));
    }

    if !entry.carousel_items.is_empty() {
        let items = entry
            .carousel_items
            .iter()
            .map(|item| item_record(item, media_ids))
            .collect();
        map.insert("carouselItems".into(), Value::Array(items));
    }
    map.insert(
        "metadata".into(),
        json!({"showSection": entry.show_section, "order": entry.order}),
    );
    Value::Object(map)
}

fn id_of(doc: &Value) -> Option<String> {
    doc.get("id").and_then(Value::as_str).map(str::to_string)
}

/// Register the bundled media files (existing filenames are kept), then
/// write every catalog section's `page-content` record, replacing an
/// existing record in place. Safe to run repeatedly.
#[instrument(skip_all, fields(backend = cms.backend_tag()))]
pub async fn seed_store(cms: &Cms) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();
    let mut media_ids: HashMap<&str, String> = HashMap::new();

    for file in MEDIA_FILES {
        let existing = cms
            .find_one(FindArgs::new(MEDIA).filter(Filter::equals("filename", file.filename)))
            .await?;
        let id = match existing.as_ref().and_then(id_of) {
            Some(id) => {
                report.media_existing += 1;
                id
            }
            None => {
                let created = cms
                    .create(
                        MEDIA,
                        json!({
                            "filename": file.filename,
                            "alt": file.alt,
                            "description": file.description,
                            "url": media_file_url(file.filename),
                        }),
                        None,
                    )
                    .await?;
                report.media_created += 1;
                id_of(&created).unwrap_or_default()
            }
        };
        media_ids.insert(file.filename, id);
    }

    for entry in CATALOG {
        let record = section_record(entry, &media_ids);
        let existing = cms
            .find_one(FindArgs::new(PAGE_CONTENT).filter(Filter::equals("sectionId", entry.section.as_str())))
            .await?;
        match existing.as_ref().and_then(id_of) {
            Some(id) => {
                cms.replace(PAGE_CONTENT, &id, record).await?;
                report.sections_replaced += 1;
            }
            None => {
                cms.create(PAGE_CONTENT, record, None).await?;
                report.sections_created += 1;
            }
        }
        tracing::info!(section = %entry.section, "seeded section");
    }

    tracing::info!(?report, "seeding complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentResolver, SectionId};
    use crate::locale::Locale;
    use crate::store::MemoryBackend;
    use codeious_site_richtext::extract_plain_text;
    use std::sync::Arc;

    #[tokio::test]
    async fn seeds_every_section_once_and_is_repeatable() {
        let cms = Cms::new(Arc::new(MemoryBackend::new()));

        let first = seed_store(&cms).await.unwrap();
        assert_eq!(first.media_created, MEDIA_FILES.len());
        assert_eq!(first.sections_created, CATALOG.len());
        assert_eq!(first.sections_replaced, 0);

        let second = seed_store(&cms).await.unwrap();
        assert_eq!(second.media_created, 0);
        assert_eq!(second.media_existing, MEDIA_FILES.len());
        assert_eq!(second.sections_replaced, CATALOG.len());

        assert_eq!(second.sections_created, 0);

        let all = cms.find(&FindArgs::new(PAGE_CONTENT)).await.unwrap();
        assert_eq!(all.total_docs, SectionId::ALL.len());
    }

    #[tokio::test]
    async fn reseeding_keeps_record_identity_and_drops_edits() {
        let cms = Cms::new(Arc::new(MemoryBackend::new()));
        seed_store(&cms).await.unwrap();
        let by_section = FindArgs::new(PAGE_CONTENT).filter(Filter::equals("sectionId", "hero"));
        let before = cms.find_one(by_section.clone()).await.unwrap().unwrap();
        let id = before["id"].as_str().unwrap();
        cms.update(PAGE_CONTENT, id, json!({"ctaText": {"en": "Edited"}}), None)
            .await
            .unwrap();

        seed_store(&cms).await.unwrap();
        let after = cms.find_one(by_section).await.unwrap().unwrap();
        assert_eq!(after["id"], before["id"]);
        assert_eq!(after["createdAt"], before["createdAt"]);
        assert!(after.get("ctaText").is_none());
    }

    #[tokio::test]
    async fn seeded_content_resolves_with_media_and_locales() {
        let cms = Cms::new(Arc::new(MemoryBackend::new()));
        seed_store(&cms).await.unwrap();
        let resolver = ContentResolver::new(cms);

        let hero = resolver.get_content(SectionId::Hero, Locale::Pl).await.unwrap();
        assert_eq!(hero.title(), Some("Witamy w codeious"));
        let logo = hero.media.logo.unwrap();
        assert_eq!(logo.src().as_deref(), Some("/api/media/file/codeious-logo.png"));
        assert_eq!(logo.alt_text(), Some("Codeious logo"));

        let team = resolver.get_content(SectionId::Team, Locale::En).await.unwrap();
        let member = &team.carousel_items[0];
        assert_eq!(member.image.as_ref().unwrap().filename, "ceo.png");
        assert!(extract_plain_text(member.description.as_ref()).starts_with("Patryk, a seasoned CEO"));

        let footer = resolver.get_content(SectionId::Footer, Locale::Pl).await.unwrap();
        assert_eq!(footer.title(), Some("Copyright @ Codeious 2025"));
    }
}
