//! Content resolution for the codeious marketing site: locales, the CMS
//! document store, the bundled catalog, section views and contact intake.

pub mod contact;
pub mod content;
pub mod document;
pub mod events;
pub mod locale;
pub mod page;
pub mod seed;
pub mod store;

pub use locale::{resolve_locale, Locale};
