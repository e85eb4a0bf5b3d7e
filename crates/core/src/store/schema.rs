use serde_json::{Map, Value};

use super::StoreError;

pub const PAGE_CONTENT: &str = "page-content";
pub const MEDIA: &str = "media";
pub const CONTACT_MESSAGES: &str = "contact-messages";

/// Static description of a collection: which fields are localized, which
/// are media references, and which must be present and unique.
///
/// Field paths are dotted; a segment that lands on an array applies to every
/// element (`carouselItems.title`).
#[derive(Debug)]
pub struct CollectionSchema {
    pub slug: &'static str,
    pub required: &'static [&'static str],
    pub unique: &'static [&'static str],
    pub localized: &'static [&'static str],
    /// Paths holding a reference to a document in `MEDIA`.
    pub uploads: &'static [&'static str],
    /// Values written when a path is absent or null.
    pub defaults: &'static [(&'static str, FieldDefault)],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl FieldDefault {
    fn to_value(self) -> Value {
        match self {
            FieldDefault::Bool(b) => Value::Bool(b),
            FieldDefault::Int(n) => Value::from(n),
            FieldDefault::Str(s) => Value::String(s.to_string()),
        }
    }
}

/// The object at `segments`, creating empty objects for missing or null
/// parents. `None` when a parent holds something else.
fn object_at<'a>(mut map: &'a mut Map<String, Value>, segments: &[&str]) -> Option<&'a mut Map<String, Value>> {
    for segment in segments {
        let slot = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
        map = slot.as_object_mut()?;
    }
    Some(map)
}

impl CollectionSchema {
    /// Fill in default values where a path is absent or null.
    pub fn apply_defaults(&self, fields: &mut Map<String, Value>) {
        for (path, default) in self.defaults {
            let segments: Vec<&str> = path.split('.').collect();
            let Some((leaf, parents)) = segments.split_last() else {
                continue;
            };
            let Some(target) = object_at(fields, parents) else {
                continue;
            };
            let slot = target.entry(leaf.to_string()).or_insert(Value::Null);
            if slot.is_null() {
                *slot = default.to_value();
            }
        }
    }
}

pub static PAGE_CONTENT_SCHEMA: CollectionSchema = CollectionSchema {
    slug: PAGE_CONTENT,
    required: &["sectionId", "title"],
    unique: &["sectionId"],
    localized: &[
        "title",
        "subtitle",
        "description",
        "additionalContent",
        "ctaText",
        "carouselItems.title",
        "carouselItems.description",
        "carouselItems.additionalText",
        "carouselItems.role",
    ],
    uploads: &[
        "media.backgroundImage",
        "media.sectionImage",
        "media.logo",
        "carouselItems.image",
    ],
    defaults: &[
        ("metadata.showSection", FieldDefault::Bool(true)),
        ("metadata.order", FieldDefault::Int(0)),
    ],
};

pub static MEDIA_SCHEMA: CollectionSchema = CollectionSchema {
    slug: MEDIA,
    required: &["filename", "url"],
    unique: &["filename"],
    localized: &[],
    uploads: &[],
    defaults: &[],
};

pub static CONTACT_MESSAGES_SCHEMA: CollectionSchema = CollectionSchema {
    slug: CONTACT_MESSAGES,
    required: &["name", "email", "message", "status"],
    unique: &[],
    localized: &[],
    uploads: &[],
    defaults: &[
        ("status", FieldDefault::Str("new")),
        ("priority", FieldDefault::Str("normal")),
        ("source", FieldDefault::Str("website-contact-form")),
    ],
};

pub fn collection(slug: &str) -> Result<&'static CollectionSchema, StoreError> {
    match slug {
        PAGE_CONTENT => Ok(&PAGE_CONTENT_SCHEMA),
        MEDIA => Ok(&MEDIA_SCHEMA),
        CONTACT_MESSAGES => Ok(&CONTACT_MESSAGES_SCHEMA),
        other => Err(StoreError::UnknownCollection(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn section_defaults_fill_missing_and_null_metadata() {
        let mut missing = fields(json!({"sectionId": "hero"}));
        PAGE_CONTENT_SCHEMA.apply_defaults(&mut missing);
        assert_eq!(missing["metadata"], json!({"showSection": true, "order": 0}));

        let mut nulls = fields(json!({"metadata": {"showSection": null, "order": 4.5}}));
        PAGE_CONTENT_SCHEMA.apply_defaults(&mut nulls);
        assert_eq!(nulls["metadata"], json!({"showSection": true, "order": 4.5}));

        let mut null_parent = fields(json!({"metadata": null}));
        PAGE_CONTENT_SCHEMA.apply_defaults(&mut null_parent);
        assert_eq!(null_parent["metadata"]["showSection"], true);
    }

    #[test]
    fn explicit_values_and_odd_parents_are_kept() {
        let mut hidden = fields(json!({"metadata": {"showSection": false}}));
        PAGE_CONTENT_SCHEMA.apply_defaults(&mut hidden);
        assert_eq!(hidden["metadata"], json!({"showSection": false, "order": 0}));

        let mut odd = fields(json!({"metadata": "legacy"}));
        PAGE_CONTENT_SCHEMA.apply_defaults(&mut odd);
        assert_eq!(odd["metadata"], "legacy");
    }

    #[test]
    fn contact_defaults() {
        let mut message = fields(json!({"name": "A", "priority": "high"}));
        CONTACT_MESSAGES_SCHEMA.apply_defaults(&mut message);
        assert_eq!(message["status"], "new");
        assert_eq!(message["priority"], "high");
        assert_eq!(message["source"], "website-contact-form");
    }
}
