//! Integration tests for the server-rendered pages.
//!
//! The central property under test: every page renders complete against
//! an empty content store (demo content fills every section), and
//! published CMS values replace exactly the fields they provide.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, StaticContent};
use serde_json::json;

use agropure_content::query;

// ---------------------------------------------------------------------------
// Home page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_renders_fully_from_empty_store() {
    let app = common::build_test_app(StaticContent::empty());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;

    // Identity and hero defaults.
    assert!(body.contains("AgroPure"));
    assert!(body.contains("Premium Grains &amp; Agricultural Excellence"));
    // Demo category grid (six entries on the home page).
    assert!(body.contains("Premium Wheat"));
    assert!(body.contains("/products/oilseeds"));
    // Demo reviews and stats.
    assert!(body.contains("Rajesh Kumar"));
    assert!(body.contains("Years Experience"));
    // Default FAQ set.
    assert!(body.contains("What is your minimum order quantity?"));
    // WhatsApp deep link built from the default number.
    assert!(body.contains("https://wa.me/919876543210"));
}

#[tokio::test]
async fn home_uses_published_settings_fields() {
    let store = StaticContent::empty().with(
        query::HOME,
        json!({
            "settings": {
                "companyName": "Golden Harvest",
                "whatsappNumber": "+91 11111 22222"
            },
            "hero": null,
            "about": null,
            "categories": [],
            "reviews": [],
            "faqs": []
        }),
    );
    let app = common::build_test_app(store);
    let body = body_text(get(app, "/").await).await;

    // Published fields replace the defaults.
    assert!(body.contains("Golden Harvest"));
    assert!(body.contains("https://wa.me/911111122222"));
    // Absent sections still fall back to demo content.
    assert!(body.contains("Premium Grains &amp; Agricultural Excellence"));
    assert!(body.contains("Rajesh Kumar"));
}

#[tokio::test]
async fn home_cms_categories_replace_demo_grid() {
    let store = StaticContent::empty().with(
        query::HOME,
        json!({
            "settings": null,
            "hero": null,
            "about": null,
            "categories": [
                { "_id": "c1", "name": "Barley", "slug": { "current": "barley" } }
            ],
            "reviews": [],
            "faqs": []
        }),
    );
    let app = common::build_test_app(store);
    let body = body_text(get(app, "/").await).await;

    assert!(body.contains("/products/barley"));
    // CMS and demo categories are never mixed.
    assert!(!body.contains("/products/oilseeds"));
}

#[tokio::test]
async fn layout_includes_language_selector_and_translate_mount() {
    let app = common::build_test_app(StaticContent::empty());
    let body = body_text(get(app, "/").await).await;

    // Third-party translation loader plus the hidden widget mount.
    assert!(body.contains("translate.google.com/translate_a/element.js"));
    assert!(body.contains(r#"id="google_translate_element""#));
    // Our own language dropdown with the supported languages.
    assert!(body.contains(r#"data-lang="hi""#));
    assert!(body.contains("हिन्दी (Hindi)"));
    assert!(body.contains(r#"data-lang="te""#));
}

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn about_page_merges_partial_document() {
    let store = StaticContent::empty().with(
        query::ABOUT,
        json!({
            "settings": null,
            "about": { "heading": "Foo" }
        }),
    );
    let app = common::build_test_app(store);
    let body = body_text(get(app, "/about").await).await;

    // Published heading wins, everything else defaults.
    assert!(body.contains("Foo"));
    assert!(body.contains("25+"));
    assert!(body.contains("Our Mission"));
}

#[tokio::test]
async fn about_page_renders_from_empty_store() {
    let app = common::build_test_app(StaticContent::empty());
    let body = body_text(get(app, "/about").await).await;

    assert!(body.contains("Your Trusted Partner for Premium Agricultural Raw Materials"));
    assert!(body.contains("Happy Clients"));
}

// ---------------------------------------------------------------------------
// Products index
// ---------------------------------------------------------------------------

#[tokio::test]
async fn products_index_shows_catalog_demo_grid() {
    let app = common::build_test_app(StaticContent::empty());
    let body = body_text(get(app, "/products").await).await;

    // Eight demo catalog entries, with product counts.
    assert!(body.contains("/products/wheat"));
    assert!(body.contains("/products/millets"));
    assert!(body.contains("8 products"));
}

// ---------------------------------------------------------------------------
// Category detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn known_demo_category_renders_products() {
    let app = common::build_test_app(StaticContent::empty());
    let response = get(app, "/products/oilseeds").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Oilseeds"));
    assert!(body.contains("Groundnut"));
    assert!(body.contains("Mustard Seeds"));
    assert!(body.contains("Sesame Seeds"));
}

#[tokio::test]
async fn unknown_category_slug_is_404() {
    let app = common::build_test_app(StaticContent::empty());
    let response = get(app, "/products/unknown-slug").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("Page Not Found"));
}

#[tokio::test]
async fn cms_category_without_products_is_coming_soon() {
    let store = StaticContent::empty().with(
        query::CATEGORY,
        json!({
            "settings": null,
            "category": { "_id": "c1", "name": "Barley", "slug": { "current": "barley" } },
            "products": [],
            "allCategories": [
                { "_id": "c1", "name": "Barley", "slug": { "current": "barley" } }
            ]
        }),
    );
    let app = common::build_test_app(store);
    let response = get(app, "/products/barley").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Barley"));
    assert!(body.contains("Products Coming Soon"));
}

// ---------------------------------------------------------------------------
// Contact page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_page_builds_form_from_merged_settings() {
    let app = common::build_test_app(StaticContent::empty());
    let body = body_text(get(app, "/contact").await).await;

    // Relay endpoint and subject derive from the merged settings.
    assert!(body.contains("https://formsubmit.co/info@agropure.com"));
    assert!(body.contains("New inquiry from AgroPure Website"));
    // Anti-spam fields.
    assert!(body.contains(r#"name="_captcha" value="false""#));
    assert!(body.contains(r#"name="_honey""#));
    // All visible fields the relay receives.
    for field in ["name", "phone", "email", "company", "product_interest", "message"] {
        assert!(
            body.contains(&format!(r#"name="{field}""#)),
            "missing form field {field}"
        );
    }
    assert!(body.contains(r#"<option value="Chana">Chickpeas</option>"#));
    // Default map embed.
    assert!(body.contains("https://www.google.com/maps/embed"));
}

#[tokio::test]
async fn contact_page_uses_published_email_for_relay() {
    let store = StaticContent::empty().with(
        query::CONTACT,
        json!({ "email": "sales@goldenharvest.in", "companyName": "Golden Harvest" }),
    );
    let app = common::build_test_app(store);
    let body = body_text(get(app, "/contact").await).await;

    assert!(body.contains("https://formsubmit.co/sales@goldenharvest.in"));
    assert!(body.contains("New inquiry from Golden Harvest Website"));
}

// ---------------------------------------------------------------------------
// Admin page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_page_links_out_to_studio() {
    let app = common::build_test_app(StaticContent::empty());
    let body = body_text(get(app, "/admin").await).await;

    assert!(body.contains("http://localhost:3333"));
    assert!(body.contains("Open Studio"));
}
