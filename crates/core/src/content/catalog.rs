//! The static content catalog: bundled copy used when the store has nothing
//! to offer.

use std::collections::HashMap;

use codeious_site_richtext::parse_markdown;
use codeious_site_richtext::RichTextDocument;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::catalog_data::{CatalogEntry, CatalogItem, LocalizedText, CATALOG};
use super::model::{SectionId, SectionMetadata};
use crate::locale::Locale;

impl LocalizedText {
    /// The text for `locale`, else English, else nothing.
    pub fn resolve(&self, locale: Locale) -> Option<&'static str> {
        let requested = match locale {
            Locale::Pl => self.pl,
            Locale::En => Some(self.en),
        };
        requested
            .filter(|s| !s.is_empty())
            .or(Some(self.en))
            .filter(|s| !s.is_empty())
    }
}

/// Media filenames of a catalog section. Served from `/api/media/file/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackMedia {
    pub background_image: Option<&'static str>,
    pub section_image: Option<&'static str>,
    pub logo: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackCarouselItem {
    pub title: Option<&'static str>,
    pub description: Option<RichTextDocument>,
    pub additional_text: Option<RichTextDocument>,
    pub role: Option<&'static str>,
    pub image: Option<&'static str>,
}

/// A catalog section resolved for one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackContent {
    pub section_id: SectionId,
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub description: Option<RichTextDocument>,
    pub additional_content: Option<RichTextDocument>,
    pub cta_text: Option<&'static str>,
    pub media: FallbackMedia,
    pub metadata: SectionMetadata,
    pub carousel_items: Vec<FallbackCarouselItem>,
}

fn text(field: Option<LocalizedText>, locale: Locale) -> Option<&'static str> {
    field.and_then(|t| t.resolve(locale))
}

fn rich(field: Option<LocalizedText>, locale: Locale) -> Option<RichTextDocument> {
    text(field, locale)
        .map(parse_markdown)
        .filter(|doc| !doc.is_empty())
}

fn resolve_item(item: &CatalogItem, locale: Locale) -> FallbackCarouselItem {
    FallbackCarouselItem {
        title: text(item.title, locale),
        description: rich(item.description, locale),
        additional_text: rich(item.additional_text, locale),
        role: text(item.role, locale),
        image: item.image,
    }
}

fn resolve_entry(entry: &CatalogEntry, locale: Locale) -> FallbackContent {
    FallbackContent {
        section_id: entry.section,
        title: entry.title.resolve(locale),
        subtitle: text(entry.subtitle, locale),
        description: rich(entry.description, locale),
        additional_content: rich(entry.additional_content, locale),
        cta_text: text(entry.cta_text, locale),
        media: FallbackMedia {
            background_image: entry.media.background_image,
            section_image: entry.media.section_image,
            logo: entry.media.logo,
        },
        metadata: SectionMetadata {
            show_section: entry.show_section,
            order: entry.order,
        },
        carousel_items: entry
            .carousel_items
            .iter()
            .map(|item| resolve_item(item, locale))
            .collect(),
    }
}

static RESOLVED: Lazy<HashMap<(SectionId, Locale), FallbackContent>> = Lazy::new(|| {
    CATALOG
        .iter()
        .flat_map(|entry| {
            Locale::ALL
                .into_iter()
                .map(move |locale| ((entry.section, locale), resolve_entry(entry, locale)))
        })
        .collect()
});

/// Catalog content for `section` in `locale`, each field falling back to
/// English on its own.
pub fn get_fallback_content(section: SectionId, locale: Locale) -> Option<&'static FallbackContent> {
    RESOLVED.get(&(section, locale))
}

/// The raw catalog entry, with every locale's text.
pub fn catalog_entry(section: SectionId) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.section == section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeious_site_richtext::extract_plain_text;

    #[test]
    fn every_section_has_a_title_in_every_locale() {
        for section in SectionId::ALL {
            for locale in Locale::ALL {
                let content = get_fallback_content(section, locale)
                    .unwrap_or_else(|| panic!("{section} missing for {locale}"));
                assert_eq!(content.section_id, section);
                assert!(content.title.is_some_and(|t| !t.is_empty()));
            }
        }
    }

    #[test]
    fn polish_hero_is_translated() {
        let hero = get_fallback_content(SectionId::Hero, Locale::Pl).unwrap();
        assert_eq!(hero.title, Some("Witamy w codeious"));
        assert_eq!(hero.media.logo, Some("codeious-logo.png"));
    }

    #[test]
    fn missing_translation_falls_back_to_english() {
        let footer = get_fallback_content(SectionId::Footer, Locale::Pl).unwrap();
        assert_eq!(footer.title, Some("Copyright @ Codeious 2025"));

        let untranslated = LocalizedText::en("Only English");
        assert_eq!(untranslated.resolve(Locale::Pl), Some("Only English"));
        let blank = LocalizedText::both("", "");
        assert_eq!(blank.resolve(Locale::Pl), None);
    }

    #[test]
    fn rich_fields_are_parsed_from_markdown() {
        let about = get_fallback_content(SectionId::AboutUs, Locale::En).unwrap();
        assert_eq!(
            extract_plain_text(about.description.as_ref()),
            "We are a team of passionate developers and designers creating innovative eCommerce solutions."
        );

        let faq = get_fallback_content(SectionId::Faq, Locale::En).unwrap();
        assert_eq!(faq.carousel_items.len(), 5);
        let demo = extract_plain_text(faq.carousel_items[3].description.as_ref());
        assert!(demo.contains("our platform's capabilities"));
    }

    #[test]
    fn resolution_is_computed_once() {
        let first = get_fallback_content(SectionId::Team, Locale::Pl).unwrap();
        let second = get_fallback_content(SectionId::Team, Locale::Pl).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(catalog_entry(SectionId::Team).unwrap().order, 5.0);
    }
}
