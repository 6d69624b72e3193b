//! Image CDN URL builder.
//!
//! Asset references look like `image-<id>-<width>x<height>-<ext>`; the
//! served URL is `https://cdn.sanity.io/images/<project>/<dataset>/<id>-<width>x<height>.<ext>`.

use std::sync::OnceLock;

use regex::Regex;

use agropure_core::content::ImageRef;

fn asset_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$").expect("valid pattern")
    })
}

/// Resolve an image reference to its CDN URL. Returns `None` for an
/// absent asset or a reference that does not parse.
pub fn url_for(project_id: &str, dataset: &str, image: &ImageRef) -> Option<String> {
    let asset = image.asset.as_ref()?;
    let captures = asset_ref_pattern().captures(&asset.reference)?;
    let (id, dimensions, ext) = (&captures[1], &captures[2], &captures[3]);
    Some(format!(
        "https://cdn.sanity.io/images/{project_id}/{dataset}/{id}-{dimensions}.{ext}"
    ))
}
