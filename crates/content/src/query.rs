//! GROQ query text, one constant per route.
//!
//! Each query requests a fixed projection; routes that take a parameter
//! receive it as a named `$param` value, never by string interpolation.

/// Home page: every section the page composes, ordered collections.
pub const HOME: &str = r#"{
  "settings": *[_type == "siteSettings"][0],
  "hero": *[_type == "heroSection"][0],
  "about": *[_type == "aboutSection"][0],
  "categories": *[_type == "productCategory"] | order(order asc),
  "reviews": *[_type == "review"] | order(order asc),
  "faqs": *[_type == "faq"] | order(order asc)
}"#;

/// About page: settings plus the about singleton.
pub const ABOUT: &str = r#"{
  "settings": *[_type == "siteSettings"][0],
  "about": *[_type == "aboutSection"][0]
}"#;

/// Contact page: the settings singleton only.
pub const CONTACT: &str = r#"*[_type == "siteSettings"][0]"#;

/// Products index: categories with a projected count of referencing
/// products.
pub const PRODUCTS: &str = r#"{
  "settings": *[_type == "siteSettings"][0],
  "categories": *[_type == "productCategory"] | order(order asc) {
    _id, name, slug, description, image,
    "productCount": count(*[_type == "product" && references(^._id)])
  }
}"#;

/// Category detail: the category matched by `$slug`, its products, and
/// all categories for the pill navigation.
pub const CATEGORY: &str = r#"{
  "settings": *[_type == "siteSettings"][0],
  "category": *[_type == "productCategory" && slug.current == $slug][0]{
    _id, name, slug, description, image
  },
  "products": *[_type == "product" && category->slug.current == $slug] | order(order asc) {
    _id, name, slug, description, image, features, specifications
  },
  "allCategories": *[_type == "productCategory"] | order(order asc) {
    _id, name, slug
  }
}"#;

/// Shared layout chrome: the identity fields only.
pub const LAYOUT: &str = r#"*[_type == "siteSettings"][0]{ companyName, tagline, logo }"#;
