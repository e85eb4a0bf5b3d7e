pub mod catalog;
pub mod catalog_data;
pub mod model;
pub mod resolver;

pub use catalog::{get_fallback_content, FallbackContent};
pub use model::{CarouselItem, MediaAsset, SectionContent, SectionId, SectionMedia, SectionMetadata};
pub use resolver::{ContentLookup, ContentResolver};
