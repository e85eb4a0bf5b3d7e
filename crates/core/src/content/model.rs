use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use codeious_site_richtext::RichTextDocument;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::document::validate::{parse_record, RecordError};
use crate::store::schema::PAGE_CONTENT;

/// Homepage sections. Closed: a record with any other `sectionId` does not
/// parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Hero,
    AboutUs,
    Shopen,
    ShopenFeatures,
    Technology,
    Team,
    Faq,
    Contact,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Hero,
        SectionId::AboutUs,
        SectionId::Shopen,
        SectionId::ShopenFeatures,
        SectionId::Technology,
        SectionId::Team,
        SectionId::Faq,
        SectionId::Contact,
        SectionId::Footer,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::AboutUs => "about-us",
            SectionId::Shopen => "shopen",
            SectionId::ShopenFeatures => "shopen-features",
            SectionId::Technology => "technology",
            SectionId::Team => "team",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Static path under which a media file is served when no media record
/// provides a URL.
pub fn media_file_url(filename: &str) -> String {
    format!("/api/media/file/{filename}")
}

/// A populated media reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl MediaAsset {
    /// The stored URL, else the static file path for the filename. `None`
    /// when neither is known.
    pub fn src(&self) -> Option<String> {
        if !self.url.is_empty() {
            Some(self.url.clone())
        } else if !self.filename.is_empty() {
            Some(media_file_url(&self.filename))
        } else {
            None
        }
    }

    pub fn alt_text(&self) -> Option<&str> {
        self.alt.as_deref().filter(|alt| !alt.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMedia {
    #[serde(default, deserialize_with = "lenient_asset", skip_serializing_if = "Option::is_none")]
    pub background_image: Option<MediaAsset>,
    #[serde(default, deserialize_with = "lenient_asset", skip_serializing_if = "Option::is_none")]
    pub section_image: Option<MediaAsset>,
    #[serde(default, deserialize_with = "lenient_asset", skip_serializing_if = "Option::is_none")]
    pub logo: Option<MediaAsset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetadata {
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub show_section: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: f64,
}

impl Default for SectionMetadata {
    fn default() -> Self {
        Self {
            show_section: true,
            order: 0.0,
        }
    }
}

fn default_true() -> bool {
    true
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselItem {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<RichTextDocument>,
    #[serde(default)]
    pub additional_text: Option<RichTextDocument>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient_asset")]
    pub image: Option<MediaAsset>,
}

/// One homepage section as resolved from the store, already projected to a
/// single locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub section_id: SectionId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<RichTextDocument>,
    #[serde(default)]
    pub additional_content: Option<RichTextDocument>,
    #[serde(default)]
    pub cta_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: SectionMedia,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: SectionMetadata,
    #[serde(default, deserialize_with = "null_as_default")]
    pub carousel_items: Vec<CarouselItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SectionContent {
    /// Parse a projected `page-content` document.
    pub fn from_document(value: &Value) -> Result<Self, RecordError> {
        parse_record(PAGE_CONTENT, value)
    }

    /// Non-empty title, if any.
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn subtitle(&self) -> Option<&str> {
        non_empty(self.subtitle.as_deref())
    }

    pub fn cta_text(&self) -> Option<&str> {
        non_empty(self.cta_text.as_deref())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids arrive as strings from the JSONB store and as numbers from SQL-backed
/// CMS exports.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// An unpopulated reference (a bare id) or a malformed asset is treated as
/// no asset.
fn lenient_asset<'de, D>(deserializer: D) -> Result<Option<MediaAsset>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| serde_json::from_value(v).ok()))
}
