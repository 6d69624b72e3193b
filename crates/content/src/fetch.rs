//! Typed per-route fetchers.
//!
//! Each function runs one named-projection query against a
//! [`ContentSource`] and decodes the result into the loose document
//! structs from `agropure-core`. Absent sections decode to `None`/empty,
//! which is the fallback-merge layer's input contract.

use serde::Deserialize;
use serde_json::json;

use agropure_core::content::{
    AboutDoc, CategoryDoc, FaqDoc, HeroDoc, ProductDoc, ReviewDoc, SiteSettingsDoc,
};

use crate::client::ContentError;
use crate::query;
use crate::source::ContentSource;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HomeData {
    pub settings: Option<SiteSettingsDoc>,
    pub hero: Option<HeroDoc>,
    pub about: Option<AboutDoc>,
    pub categories: Vec<CategoryDoc>,
    pub reviews: Vec<ReviewDoc>,
    pub faqs: Vec<FaqDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AboutData {
    pub settings: Option<SiteSettingsDoc>,
    pub about: Option<AboutDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductsData {
    pub settings: Option<SiteSettingsDoc>,
    pub categories: Vec<CategoryDoc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryData {
    pub settings: Option<SiteSettingsDoc>,
    pub category: Option<CategoryDoc>,
    pub products: Vec<ProductDoc>,
    pub all_categories: Vec<CategoryDoc>,
}

/// Decode a projection result, treating `null` as an empty store.
fn decode_or_default<T: Default + serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, ContentError> {
    if value.is_null() {
        Ok(T::default())
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

pub async fn home_data(source: &dyn ContentSource) -> Result<HomeData, ContentError> {
    let value = source.query(query::HOME, &[]).await?;
    decode_or_default(value)
}

pub async fn about_data(source: &dyn ContentSource) -> Result<AboutData, ContentError> {
    let value = source.query(query::ABOUT, &[]).await?;
    decode_or_default(value)
}

/// The contact page needs the settings singleton only; the query returns
/// the document itself (or `null`), not a named projection.
pub async fn contact_data(
    source: &dyn ContentSource,
) -> Result<Option<SiteSettingsDoc>, ContentError> {
    let value = source.query(query::CONTACT, &[]).await?;
    Ok(serde_json::from_value(value)?)
}

pub async fn products_data(source: &dyn ContentSource) -> Result<ProductsData, ContentError> {
    let value = source.query(query::PRODUCTS, &[]).await?;
    decode_or_default(value)
}

pub async fn category_data(
    source: &dyn ContentSource,
    slug: &str,
) -> Result<CategoryData, ContentError> {
    let value = source
        .query(query::CATEGORY, &[("slug", json!(slug))])
        .await?;
    decode_or_default(value)
}

/// Identity fields for the shared layout chrome (navbar, page metadata).
pub async fn layout_data(
    source: &dyn ContentSource,
) -> Result<Option<SiteSettingsDoc>, ContentError> {
    let value = source.query(query::LAYOUT, &[]).await?;
    Ok(serde_json::from_value(value)?)
}
