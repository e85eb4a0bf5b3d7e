//! Locale projection and reference population for stored documents.

use std::collections::{BTreeSet, HashMap};

use serde_json::{Map, Value};

use crate::locale::Locale;

/// Apply `f` to the value at every location `path` reaches, descending into
/// arrays along the way. `f` receives the parent object and the final key.
fn visit_path_mut(value: &mut Value, path: &[&str], f: &mut dyn FnMut(&mut Map<String, Value>, &str)) {
    match value {
        Value::Array(items) => {
            for item in items {
                visit_path_mut(item, path, f);
            }
        }
        Value::Object(map) => match path {
            [] => {}
            [last] => f(map, *last),
            [head, rest @ ..] => {
                if let Some(child) = map.get_mut(*head) {
                    visit_path_mut(child, rest, f);
                }
            }
        },
        _ => {}
    }
}

fn visit_path<'a>(value: &'a Value, path: &[&str], out: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                visit_path(item, path, out);
            }
        }
        Value::Object(map) => match path {
            [] => {}
            [last] => {
                if let Some(v) = map.get(*last) {
                    out.push(v);
                }
            }
            [head, rest @ ..] => {
                if let Some(child) = map.get(*head) {
                    visit_path(child, rest, out);
                }
            }
        },
        _ => {}
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Choose `locale`'s entry from a locale map, falling back to the default
/// locale. Values that are not locale maps are returned unchanged.
pub fn pick_locale(value: &Value, locale: Locale) -> Value {
    let Value::Object(map) = value else {
        return value.clone();
    };
    if !Locale::ALL.iter().any(|l| map.contains_key(l.as_str())) {
        return value.clone();
    }
    map.get(locale.as_str())
        .filter(|v| is_present(v))
        .or_else(|| map.get(Locale::DEFAULT.as_str()).filter(|v| is_present(v)))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Collapse every localized field to the requested locale. Each field
/// falls back to the default locale on its own.
pub fn project_locale(data: &mut Value, localized: &[&str], locale: Locale) {
    for path in localized {
        visit_path_mut(data, &segments(path), &mut |map: &mut Map<String, Value>, key: &str| {
            if let Some(current) = map.get(key) {
                let picked = pick_locale(current, locale);
                map.insert(key.to_string(), picked);
            }
        });
    }
}

/// Turn plain values written for one locale into locale maps, merging with
/// the locale maps already stored in `existing` (matched by position inside
/// arrays).
pub fn localize_for_write(
    incoming: &mut Value,
    existing: Option<&Value>,
    localized: &[&str],
    locale: Locale,
) {
    for path in localized {
        wrap_localized(incoming, existing, &segments(path), locale);
    }
}

fn wrap_localized(incoming: &mut Value, existing: Option<&Value>, path: &[&str], locale: Locale) {
    match incoming {
        Value::Array(items) => {
            for (idx, item) in items.iter_mut().enumerate() {
                let previous = existing.and_then(|e| e.get(idx));
                wrap_localized(item, previous, path, locale);
            }
        }
        Value::Object(map) => match path {
            [] => {}
            [last] => {
                if let Some(slot) = map.get_mut(*last) {
                    let mut locales = existing
                        .and_then(|e| e.get(*last))
                        .and_then(Value::as_object)
                        .filter(|m| Locale::ALL.iter().any(|l| m.contains_key(l.as_str())))
                        .cloned()
                        .unwrap_or_default();
                    locales.insert(locale.as_str().to_string(), slot.take());
                    *slot = Value::Object(locales);
                }
            }
            [head, rest @ ..] => {
                if let Some(child) = map.get_mut(*head) {
                    let previous = existing.and_then(|e| e.get(*head));
                    wrap_localized(child, previous, rest, locale);
                }
            }
        },
        _ => {}
    }
}

/// Ids referenced from the given upload paths.
pub fn referenced_ids(data: &Value, uploads: &[&str]) -> BTreeSet<String> {
    let mut found = Vec::new();
    for path in uploads {
        visit_path(data, &segments(path), &mut found);
    }
    found
        .into_iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect()
}

/// Replace reference ids with the referenced documents. Ids without a
/// document become `null`.
pub fn populate_references(data: &mut Value, uploads: &[&str], resolved: &HashMap<String, Value>) {
    for path in uploads {
        visit_path_mut(data, &segments(path), &mut |map: &mut Map<String, Value>, key: &str| {
            if let Some(Value::String(id)) = map.get(key) {
                let replacement = resolved.get(id).cloned().unwrap_or(Value::Null);
                map.insert(key.to_string(), replacement);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LOCALIZED: &[&str] = &["title", "subtitle", "carouselItems.title"];

    #[test]
    fn projection_falls_back_per_field() {
        let mut doc = json!({
            "sectionId": "hero",
            "title": {"en": "Welcome", "pl": "Witamy"},
            "subtitle": {"en": "We build", "pl": ""},
            "carouselItems": [
                {"title": {"en": "One", "pl": "Jeden"}},
                {"title": {"en": "Two"}}
            ]
        });
        project_locale(&mut doc, LOCALIZED, Locale::Pl);
        assert_eq!(doc["title"], "Witamy");
        assert_eq!(doc["subtitle"], "We build");
        assert_eq!(doc["carouselItems"][0]["title"], "Jeden");
        assert_eq!(doc["carouselItems"][1]["title"], "Two");
        assert_eq!(doc["sectionId"], "hero");
    }

    #[test]
    fn missing_everywhere_is_null() {
        let mut doc = json!({"title": {"pl": null}});
        project_locale(&mut doc, LOCALIZED, Locale::Pl);
        assert_eq!(doc["title"], Value::Null);
    }

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(pick_locale(&json!("legacy"), Locale::Pl), json!("legacy"));
        let rich = json!({"root": {"children": []}});
        assert_eq!(pick_locale(&rich, Locale::Pl), rich);
    }

    #[test]
    fn writes_merge_into_existing_locale_maps() {
        let existing = json!({
            "title": {"en": "Welcome"},
            "carouselItems": [{"title": {"en": "One"}}]
        });
        let mut incoming = json!({
            "title": "Witamy",
            "carouselItems": [{"title": "Jeden"}, {"title": "Dwa"}]
        });
        localize_for_write(&mut incoming, Some(&existing), LOCALIZED, Locale::Pl);
        assert_eq!(incoming["title"], json!({"en": "Welcome", "pl": "Witamy"}));
        assert_eq!(
            incoming["carouselItems"][0]["title"],
            json!({"en": "One", "pl": "Jeden"})
        );
        assert_eq!(incoming["carouselItems"][1]["title"], json!({"pl": "Dwa"}));
    }

    #[test]
    fn references_are_collected_and_populated() {
        let uploads = &["media.logo", "carouselItems.image"];
        let mut doc = json!({
            "media": {"logo": "m1"},
            "carouselItems": [{"image": "m2"}, {"image": "gone"}, {}]
        });
        let ids = referenced_ids(&doc, uploads);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["gone", "m1", "m2"]);

        let mut resolved = HashMap::new();
        resolved.insert("m1".to_string(), json!({"id": "m1", "filename": "logo.png"}));
        resolved.insert("m2".to_string(), json!({"id": "m2", "filename": "ceo.png"}));
        populate_references(&mut doc, uploads, &resolved);
        assert_eq!(doc["media"]["logo"]["filename"], "logo.png");
        assert_eq!(doc["carouselItems"][0]["image"]["filename"], "ceo.png");
        assert_eq!(doc["carouselItems"][1]["image"], Value::Null);
    }
}
