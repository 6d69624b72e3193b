//! The seven editable document types.

use serde_json::json;

use super::{Direction, DocumentType, Field, FieldGroup, FieldType, Ordering};

fn order_asc() -> Vec<Ordering> {
    vec![Ordering {
        name: "orderAsc",
        title: "Display Order",
        field: "order",
        direction: Direction::Asc,
    }]
}

fn order_field() -> Field {
    Field::new("order", "Display Order", FieldType::Number { min: None, max: None }).initial(json!(0))
}

fn site_settings() -> DocumentType {
    DocumentType {
        name: "siteSettings",
        title: "Site Settings",
        singleton: true,
        groups: vec![
            FieldGroup { name: "general", title: "General Info" },
            FieldGroup { name: "contact", title: "Contact Details" },
            FieldGroup { name: "social", title: "Social Media" },
        ],
        fields: vec![
            Field::new("companyName", "Company Name", FieldType::String)
                .group("general")
                .required(),
            Field::new("tagline", "Tagline", FieldType::String)
                .group("general")
                .describe("A short slogan or tagline for the business"),
            Field::new("logo", "Company Logo", FieldType::Image).group("general"),
            Field::new("favicon", "Favicon", FieldType::Image).group("general"),
            Field::new("phoneNumber", "Phone Number", FieldType::String)
                .group("contact")
                .required(),
            Field::new("whatsappNumber", "WhatsApp Number (with Country Code)", FieldType::String)
                .group("contact")
                .describe("Include country code, e.g., 919876543210")
                .required(),
            Field::new("email", "Email Address", FieldType::String).group("contact"),
            Field::new("address", "Office Address", FieldType::Text { rows: 3 }).group("contact"),
            Field::new("timings", "Business Hours", FieldType::String)
                .group("contact")
                .describe("e.g., Mon-Sat: 9:00 AM - 6:00 PM"),
            Field::new("googleMapEmbedUrl", "Google Maps Embed URL", FieldType::Url)
                .group("contact")
                .describe("Go to Google Maps -> Share -> Embed a map -> Copy the URL inside src=\"\""),
            Field::new("facebookUrl", "Facebook URL", FieldType::Url).group("social"),
            Field::new("instagramUrl", "Instagram URL", FieldType::Url).group("social"),
            Field::new("twitterUrl", "Twitter/X URL", FieldType::Url).group("social"),
            Field::new("linkedinUrl", "LinkedIn URL", FieldType::Url).group("social"),
            Field::new("youtubeUrl", "YouTube URL", FieldType::Url).group("social"),
        ],
        orderings: vec![],
    }
}

fn hero_section() -> DocumentType {
    DocumentType {
        name: "heroSection",
        title: "Hero Section",
        singleton: true,
        groups: vec![],
        fields: vec![
            Field::new("title", "Hero Title", FieldType::String).required(),
            Field::new("subtitle", "Hero Subtitle", FieldType::Text { rows: 2 }),
            Field::new("backgroundImage", "Background Image", FieldType::Image)
                .describe("High-quality image of agricultural products/fields"),
            Field::new("ctaPrimaryText", "Primary CTA Button Text", FieldType::String)
                .initial(json!("Contact Us")),
            Field::new("ctaPrimaryLink", "Primary CTA Link", FieldType::String)
                .initial(json!("#contact")),
            Field::new("ctaSecondaryText", "Secondary CTA Button Text", FieldType::String)
                .initial(json!("View Products")),
            Field::new("ctaSecondaryLink", "Secondary CTA Link", FieldType::String)
                .initial(json!("/products")),
        ],
        orderings: vec![],
    }
}

fn about_section() -> DocumentType {
    DocumentType {
        name: "aboutSection",
        title: "About Section",
        singleton: true,
        groups: vec![],
        fields: vec![
            Field::new("sectionTitle", "Section Title", FieldType::String).initial(json!("About Us")),
            Field::new("heading", "Heading", FieldType::String).required(),
            Field::new("description", "Description", FieldType::Text { rows: 6 }).required(),
            Field::new("image", "About Image", FieldType::Image),
            Field::new(
                "stats",
                "Statistics",
                FieldType::ObjectArray {
                    fields: vec![
                        Field::new("value", "Value", FieldType::String),
                        Field::new("label", "Label", FieldType::String),
                    ],
                },
            ),
            Field::new("mission", "Our Mission", FieldType::Text { rows: 3 }),
            Field::new("vision", "Our Vision", FieldType::Text { rows: 3 }),
            Field::new("values", "Our Values", FieldType::StringArray)
                .describe("List of core values"),
        ],
        orderings: vec![],
    }
}

fn product_category() -> DocumentType {
    DocumentType {
        name: "productCategory",
        title: "Product Categories",
        singleton: false,
        groups: vec![],
        fields: vec![
            Field::new("name", "Category Name", FieldType::String).required(),
            Field::new("slug", "Slug", FieldType::Slug { source: "name", max_length: 96 })
                .required(),
            Field::new("description", "Description", FieldType::Text { rows: 3 }),
            Field::new("image", "Category Image", FieldType::Image),
            order_field(),
        ],
        orderings: order_asc(),
    }
}

fn product() -> DocumentType {
    DocumentType {
        name: "product",
        title: "Products",
        singleton: false,
        groups: vec![],
        fields: vec![
            Field::new("name", "Product Name", FieldType::String).required(),
            Field::new("slug", "Slug", FieldType::Slug { source: "name", max_length: 96 })
                .required(),
            Field::new("category", "Category", FieldType::Reference { to: "productCategory" })
                .required(),
            Field::new("description", "Description", FieldType::Text { rows: 4 }),
            Field::new("image", "Product Image", FieldType::Image),
            Field::new("features", "Key Features", FieldType::StringArray)
                .describe("List of key features or highlights"),
            Field::new(
                "specifications",
                "Specifications",
                FieldType::ObjectArray {
                    fields: vec![
                        Field::new("label", "Label", FieldType::String),
                        Field::new("value", "Value", FieldType::String),
                    ],
                },
            ),
            order_field(),
        ],
        orderings: order_asc(),
    }
}

fn review() -> DocumentType {
    DocumentType {
        name: "review",
        title: "Reviews",
        singleton: false,
        groups: vec![],
        fields: vec![
            Field::new("clientName", "Client Name", FieldType::String).required(),
            Field::new("company", "Company/Business Name", FieldType::String)
                .describe("Optional - Client's company or business name"),
            Field::new("location", "Location", FieldType::String)
                .describe("City or region of the client"),
            Field::new("rating", "Rating (1-5)", FieldType::Number { min: Some(1), max: Some(5) })
                .initial(json!(5))
                .required(),
            Field::new("reviewText", "Review Text", FieldType::Text { rows: 4 }).required(),
            Field::new("image", "Client Photo", FieldType::Image)
                .describe("Optional client photo"),
            order_field(),
        ],
        orderings: order_asc(),
    }
}

fn faq() -> DocumentType {
    DocumentType {
        name: "faq",
        title: "FAQs",
        singleton: false,
        groups: vec![],
        fields: vec![
            Field::new("question", "Question", FieldType::String).required(),
            Field::new("answer", "Answer", FieldType::Text { rows: 4 }).required(),
            order_field(),
        ],
        orderings: order_asc(),
    }
}

/// The full declarative schema, in registration order.
pub fn site_schema() -> Vec<DocumentType> {
    vec![
        site_settings(),
        hero_section(),
        about_section(),
        product_category(),
        product(),
        review(),
        faq(),
    ]
}
