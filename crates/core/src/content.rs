//! CMS document shapes.
//!
//! These mirror the result objects the content store returns for the
//! seven editable document types. Every field an editor can leave blank
//! is an `Option`; the fallback-merge builders in [`crate::view`] turn
//! these loose shapes into fully-populated view models.

use serde::{Deserialize, Serialize};

/// A slug value as stored by the content store (`{ "current": "wheat" }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlugField {
    #[serde(default)]
    pub current: String,
}

impl SlugField {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

/// An image reference (`{ "asset": { "_ref": "image-..." } }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// One `{value,label}` statistic pair from the about section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One `{label,value}` product specification pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// `siteSettings` singleton document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettingsDoc {
    pub company_name: Option<String>,
    pub tagline: Option<String>,
    pub logo: Option<ImageRef>,
    pub favicon: Option<ImageRef>,
    pub phone_number: Option<String>,
    pub whatsapp_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub timings: Option<String>,
    pub google_map_embed_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub youtube_url: Option<String>,
}

/// `heroSection` singleton document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroDoc {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background_image: Option<ImageRef>,
    pub cta_primary_text: Option<String>,
    pub cta_primary_link: Option<String>,
    pub cta_secondary_text: Option<String>,
    pub cta_secondary_link: Option<String>,
}

/// `aboutSection` singleton document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutDoc {
    pub section_title: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub stats: Option<Vec<Stat>>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values: Option<Vec<String>>,
}

/// `productCategory` collection document. The `product_count` field is a
/// query-time projection (count of referencing products), present only on
/// the products-index query.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDoc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<SlugField>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub order: Option<i64>,
    pub product_count: Option<i64>,
}

/// `product` collection document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDoc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<SlugField>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub features: Option<Vec<String>>,
    pub specifications: Option<Vec<Specification>>,
    pub order: Option<i64>,
}

/// `review` collection document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDoc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub client_name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub rating: Option<i64>,
    pub review_text: Option<String>,
    pub image: Option<ImageRef>,
    pub order: Option<i64>,
}

/// `faq` collection document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqDoc {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub order: Option<i64>,
}
