//! Page handlers.
//!
//! Every route follows the same shape: fetch the route's projection,
//! apply the fallback merges, build a Tera context, render. The merge
//! layer guarantees a fully-populated page even against an empty store,
//! so handlers only fail on transport, decode, or template errors.

use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Datelike;
use tera::Context;

use agropure_content::fetch;
use agropure_core::error::CoreError;
use agropure_core::view::{
    self, AboutView, HeroView, SettingsView,
};
use agropure_core::{defaults, links};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Prefill text for the floating WhatsApp inquiry button.
const WHATSAPP_PREFILL: &str = "Hi, I'm interested in your products.";

/// Shared layout context: merged settings, precomputed outbound links,
/// and the footer year.
fn base_context(settings: &SettingsView) -> Context {
    let mut ctx = Context::new();
    ctx.insert("settings", settings);
    ctx.insert("site_title", defaults::SITE_TITLE);
    ctx.insert(
        "links",
        &serde_json::json!({
            "whatsapp": links::whatsapp_url(&settings.whatsapp_number, None),
            "whatsapp_inquiry":
                links::whatsapp_url(&settings.whatsapp_number, Some(WHATSAPP_PREFILL)),
            "tel": links::tel_url(&settings.phone_number),
            "mailto": links::mailto_url(&settings.email),
        }),
    );
    // The timings value is multi-line; templates render one line each.
    ctx.insert(
        "timings_lines",
        &settings.timings.lines().collect::<Vec<_>>(),
    );
    ctx.insert("year", &chrono::Utc::now().year());
    ctx
}

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let data = fetch::home_data(state.content.as_ref()).await?;

    let settings = SettingsView::merge(data.settings);
    let mut ctx = base_context(&settings);
    ctx.insert("hero", &HeroView::merge(data.hero));
    ctx.insert("about", &AboutView::for_home(data.about));
    ctx.insert("categories", &view::categories_or_demo(data.categories));
    ctx.insert("reviews", &view::reviews_or_demo(data.reviews));
    ctx.insert("faqs", &view::faqs_or_default(data.faqs));

    Ok(Html(state.templates.render("home.html", &ctx)?))
}

pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    let data = fetch::about_data(state.content.as_ref()).await?;

    let settings = SettingsView::merge(data.settings);
    let mut ctx = base_context(&settings);
    ctx.insert("about", &AboutView::for_about_page(data.about));

    Ok(Html(state.templates.render("about.html", &ctx)?))
}

pub async fn contact(State(state): State<AppState>) -> AppResult<Html<String>> {
    let doc = fetch::contact_data(state.content.as_ref()).await?;

    let settings = SettingsView::merge(doc);
    let mut ctx = base_context(&settings);
    // The map embed keeps a literal default so the section never renders
    // an empty iframe.
    let map_url = settings
        .google_map_embed_url
        .clone()
        .unwrap_or_else(|| defaults::MAP_EMBED_URL.to_string());
    ctx.insert("map_embed_url", &map_url);
    ctx.insert(
        "form_action",
        &format!("https://formsubmit.co/{}", settings.email),
    );
    ctx.insert(
        "form_subject",
        &format!("New inquiry from {} Website", settings.company_name),
    );

    Ok(Html(state.templates.render("contact.html", &ctx)?))
}

pub async fn products(State(state): State<AppState>) -> AppResult<Html<String>> {
    let data = fetch::products_data(state.content.as_ref()).await?;

    let settings = SettingsView::merge(data.settings);
    let mut ctx = base_context(&settings);
    ctx.insert("categories", &view::catalog_or_demo(data.categories));

    Ok(Html(state.templates.render("products.html", &ctx)?))
}

pub async fn category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Html<String>> {
    let data = fetch::category_data(state.content.as_ref(), &slug).await?;

    let settings = SettingsView::merge(data.settings);
    let page = view::category_page(&slug, data.category, data.products, data.all_categories)
        .ok_or(CoreError::NotFound {
            entity: "category",
            slug: slug.clone(),
        })?;

    let mut ctx = base_context(&settings);
    ctx.insert("category", &page.category);
    ctx.insert("products", &page.products);
    ctx.insert("nav", &page.nav);

    Ok(Html(state.templates.render("category.html", &ctx)?))
}

/// Editor link-out page. The CMS studio is hosted separately; this page
/// only points at it.
pub async fn admin(State(state): State<AppState>) -> AppResult<Html<String>> {
    let doc = fetch::layout_data(state.content.as_ref()).await?;

    let settings = SettingsView::merge(doc);
    let mut ctx = base_context(&settings);
    ctx.insert("studio_url", &state.config.studio_url);

    Ok(Html(state.templates.render("admin.html", &ctx)?))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "page",
        slug: String::new(),
    })
}
