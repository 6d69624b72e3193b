use std::collections::HashMap;

use tera::{Tera, Value};

use agropure_content::image;
use agropure_core::content::ImageRef;

/// Build the compiled template set.
///
/// Templates are embedded at compile time so the binary is
/// self-contained; only the static asset directory is served from disk.
///
/// Registers one custom function, `image_url(image=...)`, which resolves
/// a content-store image reference to its CDN URL (or an empty string
/// when the reference is absent or malformed).
pub fn build(project_id: &str, dataset: &str) -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("about.html", include_str!("../templates/about.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("products.html", include_str!("../templates/products.html")),
        ("category.html", include_str!("../templates/category.html")),
        ("admin.html", include_str!("../templates/admin.html")),
    ])?;

    let project_id = project_id.to_string();
    let dataset = dataset.to_string();
    tera.register_function(
        "image_url",
        move |args: &HashMap<String, Value>| -> tera::Result<Value> {
            let Some(value) = args.get("image") else {
                return Ok(Value::String(String::new()));
            };
            let image: Option<ImageRef> = serde_json::from_value(value.clone())
                .map_err(|e| tera::Error::msg(format!("invalid image reference: {e}")))?;
            let url = image
                .as_ref()
                .and_then(|r| image::url_for(&project_id, &dataset, r))
                .unwrap_or_default();
            Ok(Value::String(url))
        },
    );

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    #[test]
    fn template_set_compiles() {
        build("35ik4q2e", "production").unwrap();
    }

    #[test]
    fn image_url_resolves_reference() {
        let tera = build("35ik4q2e", "production").unwrap();
        let mut ctx = Context::new();
        ctx.insert(
            "img",
            &serde_json::json!({ "asset": { "_ref": "image-abc123-800x600-jpg" } }),
        );
        let mut one_off = tera.clone();
        one_off
            .add_raw_template("t", "{{ image_url(image=img) }}")
            .unwrap();
        let out = one_off.render("t", &ctx).unwrap();
        assert_eq!(
            out,
            "https://cdn.sanity.io/images/35ik4q2e/production/abc123-800x600.jpg"
        );
    }

    #[test]
    fn image_url_absent_is_empty() {
        let tera = build("35ik4q2e", "production").unwrap();
        let mut one_off = tera.clone();
        one_off
            .add_raw_template("t", "{{ image_url() }}")
            .unwrap();
        let out = one_off.render("t", &Context::new()).unwrap();
        assert_eq!(out, "");
    }
}
