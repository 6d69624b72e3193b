//! Fully-populated view models and the fallback-merge builders.
//!
//! The merge contract (spec'd once, applied everywhere):
//!
//! - Singleton sections coalesce per field: the CMS value is used when it
//!   is present and non-empty, otherwise the literal default.
//! - Collection sections substitute whole lists: an empty CMS list is
//!   replaced by the entire literal demo list; a non-empty CMS list is
//!   used exactly as returned. CMS and demo items are never mixed.

use serde::Serialize;

use crate::content::{
    AboutDoc, CategoryDoc, FaqDoc, HeroDoc, ImageRef, ProductDoc, ReviewDoc, SiteSettingsDoc,
    Specification, Stat,
};
use crate::{defaults, slug};

/// CMS value if present and non-empty, else the literal default.
fn coalesce(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Optional passthrough that treats empty strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsView {
    pub company_name: String,
    pub tagline: String,
    pub logo: Option<ImageRef>,
    pub favicon: Option<ImageRef>,
    pub phone_number: String,
    pub whatsapp_number: String,
    pub email: String,
    pub address: String,
    pub timings: String,
    pub google_map_embed_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
}

impl SettingsView {
    /// Field-level coalesce against the literal settings defaults. Social
    /// links and the map embed URL stay optional; the map falls back to a
    /// default embed at render time.
    pub fn merge(doc: Option<SiteSettingsDoc>) -> Self {
        let doc = doc.unwrap_or_default();
        Self {
            company_name: coalesce(doc.company_name, defaults::COMPANY_NAME),
            tagline: coalesce(doc.tagline, defaults::TAGLINE),
            logo: doc.logo,
            favicon: doc.favicon,
            phone_number: coalesce(doc.phone_number, defaults::PHONE_NUMBER),
            whatsapp_number: coalesce(doc.whatsapp_number, defaults::WHATSAPP_NUMBER),
            email: coalesce(doc.email, defaults::EMAIL),
            address: coalesce(doc.address, defaults::ADDRESS),
            timings: coalesce(doc.timings, defaults::TIMINGS),
            google_map_embed_url: non_empty(doc.google_map_embed_url),
            facebook_url: non_empty(doc.facebook_url),
            instagram_url: non_empty(doc.instagram_url),
            twitter_url: non_empty(doc.twitter_url),
            linkedin_url: non_empty(doc.linkedin_url),
            youtube_url: non_empty(doc.youtube_url),
        }
    }
}

// ---------------------------------------------------------------------------
// Hero section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub background_image: Option<ImageRef>,
    pub cta_primary_text: String,
    pub cta_primary_link: String,
    pub cta_secondary_text: String,
    pub cta_secondary_link: String,
}

impl HeroView {
    pub fn merge(doc: Option<HeroDoc>) -> Self {
        let doc = doc.unwrap_or_default();
        Self {
            title: coalesce(doc.title, defaults::HERO_TITLE),
            subtitle: coalesce(doc.subtitle, defaults::HERO_SUBTITLE),
            background_image: doc.background_image,
            cta_primary_text: coalesce(doc.cta_primary_text, defaults::HERO_CTA_PRIMARY_TEXT),
            cta_primary_link: coalesce(doc.cta_primary_link, defaults::HERO_CTA_PRIMARY_LINK),
            cta_secondary_text: coalesce(doc.cta_secondary_text, defaults::HERO_CTA_SECONDARY_TEXT),
            cta_secondary_link: coalesce(doc.cta_secondary_link, defaults::HERO_CTA_SECONDARY_LINK),
        }
    }
}

// ---------------------------------------------------------------------------
// About section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub section_title: String,
    pub heading: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub stats: Vec<Stat>,
    pub mission: String,
    pub vision: String,
    pub values: Vec<String>,
}

impl AboutView {
    /// Merge for the home-page teaser (shorter default copy).
    pub fn for_home(doc: Option<AboutDoc>) -> Self {
        Self::merge_with(
            doc,
            defaults::HOME_ABOUT_HEADING,
            defaults::HOME_ABOUT_DESCRIPTION,
        )
    }

    /// Merge for the full about page.
    pub fn for_about_page(doc: Option<AboutDoc>) -> Self {
        Self::merge_with(doc, defaults::ABOUT_HEADING, defaults::ABOUT_DESCRIPTION)
    }

    fn merge_with(doc: Option<AboutDoc>, heading: &str, description: &str) -> Self {
        let doc = doc.unwrap_or_default();
        // Stats and values are whole-list substitutions, not per-item merges.
        let stats = match doc.stats {
            Some(stats) if !stats.is_empty() => stats,
            _ => defaults::about_stats(),
        };
        let values = match doc.values {
            Some(values) if !values.is_empty() => values,
            _ => defaults::about_values(),
        };
        Self {
            section_title: coalesce(doc.section_title, defaults::ABOUT_SECTION_TITLE),
            heading: coalesce(doc.heading, heading),
            description: coalesce(doc.description, description),
            image: doc.image,
            stats,
            mission: coalesce(doc.mission, defaults::ABOUT_MISSION),
            vision: coalesce(doc.vision, defaults::ABOUT_VISION),
            values,
        }
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<ImageRef>,
    pub product_count: Option<i64>,
}

impl CategoryView {
    pub fn from_doc(doc: CategoryDoc) -> Self {
        let name = doc.name.unwrap_or_default();
        let slug = doc
            .slug
            .map(|s| s.current)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| slug::slugify(&name));
        Self {
            id: doc.id.unwrap_or_default(),
            name,
            slug,
            description: doc.description.unwrap_or_default(),
            image: doc.image,
            product_count: doc.product_count,
        }
    }

    /// Synthesized category for a demo-table slug with no CMS document.
    pub fn synthesized(slug_value: &str) -> Self {
        Self {
            id: String::new(),
            name: slug::capitalize(slug_value),
            slug: slug_value.to_string(),
            description: format!(
                "Premium quality {slug_value} products sourced from the best farms across India."
            ),
            image: None,
            product_count: None,
        }
    }
}

/// Home-page category grid: CMS list, else the six-entry demo list.
pub fn categories_or_demo(docs: Vec<CategoryDoc>) -> Vec<CategoryView> {
    if docs.is_empty() {
        defaults::demo_home_categories()
    } else {
        docs.into_iter().map(CategoryView::from_doc).collect()
    }
}

/// Products-index grid: CMS list, else the eight-entry catalog demo list.
pub fn catalog_or_demo(docs: Vec<CategoryDoc>) -> Vec<CategoryView> {
    if docs.is_empty() {
        defaults::demo_catalog_categories()
    } else {
        docs.into_iter().map(CategoryView::from_doc).collect()
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub image: Option<ImageRef>,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
}

impl ProductView {
    pub fn from_doc(doc: ProductDoc) -> Self {
        Self {
            id: doc.id.unwrap_or_default(),
            name: doc.name.unwrap_or_default(),
            slug: doc.slug.map(|s| s.current).filter(|s| !s.is_empty()),
            description: doc.description.unwrap_or_default(),
            image: doc.image,
            features: doc.features.unwrap_or_default(),
            specifications: doc.specifications.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub client_name: String,
    /// First letter of the client name, for the avatar badge.
    pub initial: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub rating: i64,
    pub review_text: String,
    pub image: Option<ImageRef>,
}

impl ReviewView {
    pub fn from_doc(doc: ReviewDoc) -> Self {
        let client_name = doc.client_name.unwrap_or_default();
        Self {
            initial: client_name.chars().next().map(String::from).unwrap_or_default(),
            client_name,
            company: non_empty(doc.company),
            location: non_empty(doc.location),
            // The schema enforces 1..=5 at write time, but direct API
            // writes can bypass the studio; the star row must still
            // render.
            rating: doc.rating.unwrap_or(5).clamp(0, 5),
            review_text: doc.review_text.unwrap_or_default(),
            image: doc.image,
        }
    }
}

pub fn reviews_or_demo(docs: Vec<ReviewDoc>) -> Vec<ReviewView> {
    if docs.is_empty() {
        defaults::demo_reviews()
    } else {
        docs.into_iter().map(ReviewView::from_doc).collect()
    }
}

// ---------------------------------------------------------------------------
// FAQs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqView {
    pub question: String,
    pub answer: String,
}

impl FaqView {
    pub fn from_doc(doc: FaqDoc) -> Self {
        Self {
            question: doc.question.unwrap_or_default(),
            answer: doc.answer.unwrap_or_default(),
        }
    }
}

pub fn faqs_or_default(docs: Vec<FaqDoc>) -> Vec<FaqView> {
    if docs.is_empty() {
        defaults::default_faqs()
    } else {
        docs.into_iter().map(FaqView::from_doc).collect()
    }
}

// ---------------------------------------------------------------------------
// Category detail page composition
// ---------------------------------------------------------------------------

/// Minimal category entry for the pill navigation strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNav {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPageView {
    pub category: CategoryView,
    pub products: Vec<ProductView>,
    pub nav: Vec<CategoryNav>,
}

/// Compose the category detail page, or `None` when the slug matches
/// neither a CMS category nor the demo-product table (route-level 404).
///
/// A known slug with no products in either source renders with an empty
/// product list ("products coming soon"), which is a legitimate state,
/// not an error.
pub fn category_page(
    slug_value: &str,
    category: Option<CategoryDoc>,
    products: Vec<ProductDoc>,
    all_categories: Vec<CategoryDoc>,
) -> Option<CategoryPageView> {
    let in_demo_table = defaults::demo_products(slug_value).is_some();
    if category.is_none() && !in_demo_table {
        return None;
    }

    let category = match category {
        Some(doc) => CategoryView::from_doc(doc),
        None => CategoryView::synthesized(slug_value),
    };

    let products = if products.is_empty() {
        defaults::demo_products(slug_value).unwrap_or_default()
    } else {
        products.into_iter().map(ProductView::from_doc).collect()
    };

    let nav = if all_categories.is_empty() {
        defaults::demo_category_nav()
    } else {
        all_categories
            .into_iter()
            .map(CategoryView::from_doc)
            .map(|c| CategoryNav {
                name: c.name,
                slug: c.slug,
            })
            .collect()
    };

    Some(CategoryPageView {
        category,
        products,
        nav,
    })
}
