use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display languages the site supports. `En` is the default and the
/// fallback for every localized field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pl];

    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pl => "pl",
        }
    }

    /// Browser-side detection from a language tag such as `pl-PL`.
    pub fn from_language_tag(tag: &str) -> Locale {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("pl") {
            Locale::Pl
        } else {
            Locale::En
        }
    }

    /// Server-side detection from an `Accept-Language` header: Polish as soon
    /// as the header mentions it at all.
    pub fn from_accept_language(header: Option<&str>) -> Locale {
        match header {
            Some(value) if value.contains("pl") => Locale::Pl,
            _ => Locale::En,
        }
    }
}

/// Pick the active locale from the `lang` query parameter. Only the exact
/// value `"pl"` selects Polish.
pub fn resolve_locale(raw: Option<&str>) -> Locale {
    match raw {
        Some("pl") => Locale::Pl,
        _ => Locale::En,
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "pl" => Ok(Locale::Pl),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}
