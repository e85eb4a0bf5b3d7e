//! Homepage section views.
//!
//! Each view is built from exactly one source record: the store record when
//! there is one, otherwise the catalog entry. Fields the chosen record leaves
//! empty are filled with the section's literal defaults.

use codeious_site_richtext::{extract_plain_text, parse_markdown, render_html, RichTextDocument};
use futures::future::join_all;
use serde::Serialize;

use crate::content::catalog::{get_fallback_content, FallbackContent};
use crate::content::model::{media_file_url, non_empty, MediaAsset, SectionContent, SectionId};
use crate::content::ContentResolver;
use crate::locale::Locale;

/// Sections rendered on the homepage, top to bottom.
pub const HOME_SECTIONS: [SectionId; 8] = [
    SectionId::Hero,
    SectionId::AboutUs,
    SectionId::Shopen,
    SectionId::ShopenFeatures,
    SectionId::Team,
    SectionId::Faq,
    SectionId::Contact,
    SectionId::Footer,
];

const ABOUT_BODY: &str = "Since 2015, our IT company has powered ecommerce success with a robust \
platform built on cutting-edge technology. Trusted by high-volume clients processing thousands of \
transactions daily, we deliver seamless, scalable solutions tailored to drive growth.";

const DEFAULT_MEMBER_IMAGE: &str = "ceo.png";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub background: ImageView,
    pub logo: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatView {
    pub value: &'static str,
    pub label: &'static str,
    pub text: &'static str,
}

pub const ABOUT_STATS: [StatView; 4] = [
    StatView {
        value: "12",
        label: "years",
        text: "With 15 years of experience, we've honed our expertise to deliver cutting-edge solutions in the ecommerce space.",
    },
    StatView {
        value: "1",
        label: "market",
        text: "Our focus on the e-grocery market ensures tailored, innovative platforms that meet the unique needs of online grocery businesses.",
    },
    StatView {
        value: "100k",
        label: "users",
        text: "Our platform seamlessly handles over 1 million daily operations, powering high-volume transactions with unmatched reliability.",
    },
    StatView {
        value: "1k+",
        label: "transactions",
        text: "Serving 10 million active users, we provide a scalable and secure experience for businesses and their customers.",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub title: String,
    pub body_html: String,
    pub stats: Vec<StatView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideView {
    pub title: String,
    pub main_html: Option<String>,
    pub additional_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopenView {
    pub title: String,
    pub slides: Vec<SlideView>,
    pub image: ImageView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureView {
    pub id: usize,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesView {
    pub title: String,
    pub features: Vec<FeatureView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologySlideView {
    pub id: usize,
    pub title: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyView {
    pub title: String,
    pub slides: Vec<TechnologySlideView>,
    pub cta_text: String,
    pub additional_html: Option<String>,
    pub background: ImageView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberView {
    pub id: usize,
    pub name: String,
    pub role: String,
    pub image: ImageView,
    pub bio: String,
    pub additional_bio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamView {
    pub title: String,
    pub members: Vec<TeamMemberView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntryView {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqView {
    pub title: String,
    pub entries: Vec<FaqEntryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub title: String,
    pub logo: Option<ImageView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", content = "view", rename_all = "kebab-case")]
pub enum SectionView {
    Hero(HeroView),
    AboutUs(AboutView),
    Shopen(ShopenView),
    ShopenFeatures(FeaturesView),
    Technology(TechnologyView),
    Team(TeamView),
    Faq(FaqView),
    Contact(ContactView),
    Footer(FooterView),
}

impl SectionView {
    pub fn section_id(&self) -> SectionId {
        match self {
            SectionView::Hero(_) => SectionId::Hero,
            SectionView::AboutUs(_) => SectionId::AboutUs,
            SectionView::Shopen(_) => SectionId::Shopen,
            SectionView::ShopenFeatures(_) => SectionId::ShopenFeatures,
            SectionView::Technology(_) => SectionId::Technology,
            SectionView::Team(_) => SectionId::Team,
            SectionView::Faq(_) => SectionId::Faq,
            SectionView::Contact(_) => SectionId::Contact,
            SectionView::Footer(_) => SectionId::Footer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub locale: Locale,
    pub sections: Vec<SectionView>,
}

struct Picture {
    src: String,
    alt: Option<String>,
}

impl Picture {
    fn from_asset(asset: Option<&MediaAsset>) -> Option<Self> {
        let asset = asset?;
        Some(Picture {
            src: asset.src()?,
            alt: asset.alt_text().map(str::to_string),
        })
    }

    fn from_filename(filename: Option<&str>) -> Option<Self> {
        filename.map(|name| Picture {
            src: media_file_url(name),
            alt: None,
        })
    }

    fn view(self, default_alt: impl FnOnce() -> String) -> ImageView {
        ImageView {
            src: self.src,
            alt: self.alt.unwrap_or_else(default_alt),
        }
    }
}

fn image_or(picture: Option<Picture>, default_filename: &str, default_alt: &str) -> ImageView {
    picture
        .unwrap_or_else(|| Picture {
            src: media_file_url(default_filename),
            alt: None,
        })
        .view(|| default_alt.to_string())
}

#[derive(Clone, Copy)]
enum MediaSlot {
    Background,
    Section,
    Logo,
}

struct ItemSource<'a> {
    title: Option<&'a str>,
    description: Option<&'a RichTextDocument>,
    additional_text: Option<&'a RichTextDocument>,
    role: Option<&'a str>,
    image: Option<Picture>,
}

/// The single record a view is built from.
#[derive(Clone, Copy)]
enum Source<'a> {
    Store(&'a SectionContent),
    Catalog(&'a FallbackContent),
    Missing,
}

impl<'a> Source<'a> {
    fn pick(live: Option<&'a SectionContent>, fallback: Option<&'a FallbackContent>) -> Self {
        match (live, fallback) {
            (Some(content), _) => Source::Store(content),
            (None, Some(fallback)) => Source::Catalog(fallback),
            (None, None) => Source::Missing,
        }
    }

    fn title(self) -> Option<&'a str> {
        match self {
            Source::Store(c) => c.title(),
            Source::Catalog(f) => non_empty(f.title),
            Source::Missing => None,
        }
    }

    fn subtitle(self) -> Option<&'a str> {
        match self {
            Source::Store(c) => c.subtitle(),
            Source::Catalog(f) => non_empty(f.subtitle),
            Source::Missing => None,
        }
    }

    fn cta_text(self) -> Option<&'a str> {
        match self {
            Source::Store(c) => c.cta_text(),
            Source::Catalog(f) => non_empty(f.cta_text),
            Source::Missing => None,
        }
    }

    fn description(self) -> Option<&'a RichTextDocument> {
        let doc = match self {
            Source::Store(c) => c.description.as_ref(),
            Source::Catalog(f) => f.description.as_ref(),
            Source::Missing => None,
        };
        doc.filter(|doc| !doc.is_empty())
    }

    fn additional_content(self) -> Option<&'a RichTextDocument> {
        let doc = match self {
            Source::Store(c) => c.additional_content.as_ref(),
            Source::Catalog(f) => f.additional_content.as_ref(),
            Source::Missing => None,
        };
        doc.filter(|doc| !doc.is_empty())
    }

    fn media(self, slot: MediaSlot) -> Option<Picture> {
        match self {
            Source::Store(c) => Picture::from_asset(match slot {
                MediaSlot::Background => c.media.background_image.as_ref(),
                MediaSlot::Section => c.media.section_image.as_ref(),
                MediaSlot::Logo => c.media.logo.as_ref(),
            }),
            Source::Catalog(f) => Picture::from_filename(match slot {
                MediaSlot::Background => f.media.background_image,
                MediaSlot::Section => f.media.section_image,
                MediaSlot::Logo => f.media.logo,
            }),
            Source::Missing => None,
        }
    }

    fn items(self) -> Vec<ItemSource<'a>> {
        match self {
            Source::Store(c) => c
                .carousel_items
                .iter()
                .map(|item| ItemSource {
                    title: non_empty(item.title.as_deref()),
                    description: item.description.as_ref(),
                    additional_text: item.additional_text.as_ref(),
                    role: non_empty(item.role.as_deref()),
                    image: Picture::from_asset(item.image.as_ref()),
                })
                .collect(),
            Source::Catalog(f) => f
                .carousel_items
                .iter()
                .map(|item| ItemSource {
                    title: non_empty(item.title),
                    description: item.description.as_ref(),
                    additional_text: item.additional_text.as_ref(),
                    role: non_empty(item.role),
                    image: Picture::from_filename(item.image),
                })
                .collect(),
            Source::Missing => Vec::new(),
        }
    }
}

fn or_literal(value: Option<&str>, literal: &str) -> String {
    value.unwrap_or(literal).to_string()
}

fn html(doc: Option<&RichTextDocument>) -> Option<String> {
    Some(render_html(doc)).filter(|s| !s.is_empty())
}

fn plain(doc: Option<&RichTextDocument>) -> String {
    extract_plain_text(doc)
}

pub fn hero_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> HeroView {
    let source = Source::pick(live, fallback);
    HeroView {
        title: or_literal(source.title(), "Welcome to codeious"),
        subtitle: or_literal(
            source.subtitle(),
            "We build next-gen, cloud-based eCommerce for Enterprise",
        ),
        background: image_or(source.media(MediaSlot::Background), "bg-image.png", "Hero background"),
        logo: source
            .media(MediaSlot::Logo)
            .map(|logo| logo.view(|| "Codeious logo".to_string())),
    }
}

pub fn about_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> AboutView {
    let source = Source::pick(live, fallback);
    AboutView {
        title: or_literal(source.title(), "About Us"),
        body_html: html(source.description()).unwrap_or_else(|| render_html(Some(&parse_markdown(ABOUT_BODY)))),
        stats: ABOUT_STATS.to_vec(),
    }
}

pub fn shopen_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> ShopenView {
    let source = Source::pick(live, fallback);
    let title = or_literal(source.title(), "Meet shopen, our new buddy.");
    let mut slides: Vec<SlideView> = source
        .items()
        .into_iter()
        .map(|item| SlideView {
            title: item.title.map(str::to_string).unwrap_or_else(|| title.clone()),
            main_html: html(item.description),
            additional_html: html(item.additional_text),
        })
        .collect();
    if slides.is_empty() {
        slides.push(SlideView {
            title: title.clone(),
            main_html: html(source.description()),
            additional_html: html(source.additional_content()),
        });
    }
    ShopenView {
        title,
        slides,
        image: image_or(
            source.media(MediaSlot::Section),
            "shopen-section-image.png",
            "Shopen platform interface on laptop",
        ),
    }
}

pub fn features_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> FeaturesView {
    let source = Source::pick(live, fallback);
    FeaturesView {
        title: or_literal(source.title(), "Shopen in a nutshell"),
        features: source
            .items()
            .into_iter()
            .enumerate()
            .map(|(idx, item)| FeatureView {
                id: idx + 1,
                title: or_literal(item.title, ""),
                description: plain(item.description),
            })
            .collect(),
    }
}

pub fn technology_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> TechnologyView {
    let source = Source::pick(live, fallback);
    TechnologyView {
        title: or_literal(source.title(), "Technology at the core of our operations"),
        slides: source
            .items()
            .into_iter()
            .enumerate()
            .map(|(idx, item)| TechnologySlideView {
                id: idx + 1,
                title: or_literal(item.title, ""),
                descriptions: [plain(item.description), plain(item.additional_text)]
                    .into_iter()
                    .filter(|text| !text.is_empty())
                    .collect(),
            })
            .collect(),
        cta_text: or_literal(source.cta_text(), "Let's GO!"),
        additional_html: html(source.additional_content()),
        background: image_or(
            source.media(MediaSlot::Background),
            "technology-background.png",
            "Technology background",
        ),
    }
}

pub fn team_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> TeamView {
    let source = Source::pick(live, fallback);
    TeamView {
        title: or_literal(source.title(), "Meet the team"),
        members: source
            .items()
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let name = or_literal(item.title, "");
                let role = or_literal(item.role, "");
                let image = image_or(item.image, DEFAULT_MEMBER_IMAGE, &format!("{name} - {role}"));
                TeamMemberView {
                    id: idx + 1,
                    image,
                    bio: plain(item.description),
                    additional_bio: plain(item.additional_text),
                    name,
                    role,
                }
            })
            .collect(),
    }
}

pub fn faq_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> FaqView {
    let source = Source::pick(live, fallback);
    FaqView {
        title: or_literal(source.title(), "FAQ - Find answers to your questions"),
        entries: source
            .items()
            .into_iter()
            .filter_map(|item| {
                Some(FaqEntryView {
                    question: item.title?.to_string(),
                    answer: plain(item.description),
                })
            })
            .collect(),
    }
}

pub fn contact_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> ContactView {
    let source = Source::pick(live, fallback);
    ContactView {
        title: or_literal(source.title(), "Get in touch"),
        subtitle: or_literal(source.subtitle(), "Connect with us"),
        cta_text: or_literal(source.cta_text(), "Send"),
    }
}

pub fn footer_view(live: Option<&SectionContent>, fallback: Option<&FallbackContent>) -> FooterView {
    let source = Source::pick(live, fallback);
    FooterView {
        title: or_literal(source.title(), "Copyright @ Codeious 2025"),
        logo: source
            .media(MediaSlot::Logo)
            .map(|logo| logo.view(|| "Codeious logo".to_string())),
    }
}

/// Build the view for `section` from its store record, if any, and its
/// catalog entry.
pub fn section_view(
    section: SectionId,
    live: Option<&SectionContent>,
    fallback: Option<&FallbackContent>,
) -> SectionView {
    match section {
        SectionId::Hero => SectionView::Hero(hero_view(live, fallback)),
        SectionId::AboutUs => SectionView::AboutUs(about_view(live, fallback)),
        SectionId::Shopen => SectionView::Shopen(shopen_view(live, fallback)),
        SectionId::ShopenFeatures => SectionView::ShopenFeatures(features_view(live, fallback)),
        SectionId::Technology => SectionView::Technology(technology_view(live, fallback)),
        SectionId::Team => SectionView::Team(team_view(live, fallback)),
        SectionId::Faq => SectionView::Faq(faq_view(live, fallback)),
        SectionId::Contact => SectionView::Contact(contact_view(live, fallback)),
        SectionId::Footer => SectionView::Footer(footer_view(live, fallback)),
    }
}

/// Resolve one section and render it. `None` when the store record hides
/// the section.
pub async fn render_section(resolver: &ContentResolver, section: SectionId, locale: Locale) -> Option<SectionView> {
    let live = resolver.get_content(section, locale).await;
    if live.as_ref().is_some_and(|c| !c.metadata.show_section) {
        tracing::debug!(%section, "section hidden by its store record");
        return None;
    }
    let fallback = get_fallback_content(section, locale);
    Some(section_view(section, live.as_ref(), fallback))
}

/// Resolve every homepage section concurrently and render them in page
/// order.
pub async fn build_home_page(resolver: &ContentResolver, locale: Locale) -> HomePage {
    let views = join_all(
        HOME_SECTIONS
            .into_iter()
            .map(|section| render_section(resolver, section, locale)),
    )
    .await;
    HomePage {
        locale,
        sections: views.into_iter().flatten().collect(),
    }
}
