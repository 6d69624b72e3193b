//! Literal default and demo content.
//!
//! Rendered whenever the content store has no data for a section. Demo
//! lists replace an empty CMS collection wholesale; they are never mixed
//! with CMS items.

use crate::content::Stat;
use crate::view::{CategoryNav, CategoryView, FaqView, ProductView, ReviewView};

// --- Site settings ---------------------------------------------------------

pub const COMPANY_NAME: &str = "AgroPure";
pub const SITE_TITLE: &str = "AgroPure Commodities";
pub const TAGLINE: &str = "Premium Quality Agricultural Raw Materials - Wheat, Chana, Pulses and more. Contact us for bulk orders.";
pub const PHONE_NUMBER: &str = "+91 98765 43210";
pub const WHATSAPP_NUMBER: &str = "919876543210";
pub const EMAIL: &str = "info@agropure.com";
pub const ADDRESS: &str =
    "123 Mandi Road, Agricultural Hub\nGrain Market, Sector 5\nNew Delhi - 110001, India";
pub const TIMINGS: &str = "Monday - Saturday: 9:00 AM - 6:00 PM\nSunday: Closed";

/// Map embed shown when no embed URL is configured.
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3671.9012755464685!2d72.5012!3d23.0145!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjPCsDAwJzUyLjIiTiA3MsKwMzAnMDQuMyJF!5e0!3m2!1sen!2sin!4v1234567890";

// --- Hero section ----------------------------------------------------------

pub const HERO_TITLE: &str = "Premium Grains & Agricultural Excellence";
pub const HERO_SUBTITLE: &str =
    "Sourcing the finest agricultural raw materials from trusted farms across India.";
pub const HERO_CTA_PRIMARY_TEXT: &str = "Contact Us";
pub const HERO_CTA_PRIMARY_LINK: &str = "#contact";
pub const HERO_CTA_SECONDARY_TEXT: &str = "View Products";
pub const HERO_CTA_SECONDARY_LINK: &str = "/products";

// --- About section ---------------------------------------------------------

pub const ABOUT_SECTION_TITLE: &str = "About Us";

/// Home-page teaser copy.
pub const HOME_ABOUT_HEADING: &str = "Trusted by Industry Leaders";
pub const HOME_ABOUT_DESCRIPTION: &str =
    "With decades of expertise in agricultural commodities, we deliver excellence in every grain.";

/// Full about-page copy.
pub const ABOUT_HEADING: &str = "Your Trusted Partner for Premium Agricultural Raw Materials";
pub const ABOUT_DESCRIPTION: &str = "With decades of experience in the agricultural commodities market, we have established ourselves as a reliable supplier of high-quality raw materials.";
pub const ABOUT_MISSION: &str = "To be the most trusted supplier of agricultural raw materials, ensuring quality, consistency, and fair pricing for all our partners.";
pub const ABOUT_VISION: &str = "To revolutionize the agricultural supply chain by creating lasting partnerships and delivering excellence in every grain.";

pub fn about_stats() -> Vec<Stat> {
    vec![
        Stat::new("25+", "Years Experience"),
        Stat::new("500+", "Happy Clients"),
        Stat::new("10K+", "Tons Monthly"),
        Stat::new("50+", "Product Types"),
    ]
}

pub fn about_values() -> Vec<String> {
    ["Quality First", "Transparency", "Customer Satisfaction", "Integrity", "Reliability"]
        .map(String::from)
        .to_vec()
}

// --- Categories ------------------------------------------------------------

fn category(id: &str, name: &str, slug: &str, description: &str, count: Option<i64>) -> CategoryView {
    CategoryView {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        image: None,
        product_count: count,
    }
}

/// Six-entry category grid for the home page.
pub fn demo_home_categories() -> Vec<CategoryView> {
    vec![
        category("1", "Premium Wheat", "wheat", "Sharbati, Lokwan & MP varieties", None),
        category("2", "Chickpeas", "chana", "Desi & Kabuli Chana grades", None),
        category("3", "Pulses", "pulses", "Moong, Toor, Masoor, Urad", None),
        category("4", "Basmati Rice", "rice", "Aromatic long-grain rice", None),
        category("5", "Spices", "spices", "Turmeric, Cumin, Coriander", None),
        category("6", "Oilseeds", "oilseeds", "Groundnut, Mustard, Sesame", None),
    ]
}

/// Eight-entry catalog for the products index, with product counts.
pub fn demo_catalog_categories() -> Vec<CategoryView> {
    vec![
        category(
            "1",
            "Premium Wheat",
            "wheat",
            "Sharbati, Lokwan, MP Wheat - Premium quality wheat varieties for flour mills and food processing.",
            Some(8),
        ),
        category(
            "2",
            "Chickpeas",
            "chana",
            "High-grade Desi & Kabuli Chana for dal manufacturing, exports, and food processing.",
            Some(6),
        ),
        category(
            "3",
            "Pulses & Lentils",
            "pulses",
            "Wide range including Moong, Toor, Masoor, Urad - split and whole varieties.",
            Some(12),
        ),
        category(
            "4",
            "Basmati Rice",
            "rice",
            "Premium aromatic long-grain and medium-grain rice for culinary excellence.",
            Some(10),
        ),
        category(
            "5",
            "Spices",
            "spices",
            "Quality whole and ground spices - turmeric, coriander, cumin, and red chili.",
            Some(15),
        ),
        category(
            "6",
            "Oilseeds",
            "oilseeds",
            "Groundnut, Mustard, Sesame, Soybean for oil extraction and food processing.",
            Some(7),
        ),
        category(
            "7",
            "Maize",
            "maize",
            "Yellow and white maize for food, feed, and industrial applications.",
            Some(4),
        ),
        category(
            "8",
            "Millets",
            "millets",
            "Nutritious Bajra, Jowar, Ragi, and Foxtail Millet for health-conscious consumers.",
            Some(6),
        ),
    ]
}

/// Pill navigation entries derived from the demo product table, in its
/// fixed key order.
pub fn demo_category_nav() -> Vec<CategoryNav> {
    DEMO_PRODUCT_SLUGS
        .iter()
        .map(|slug| CategoryNav {
            name: crate::slug::capitalize(slug),
            slug: (*slug).to_string(),
        })
        .collect()
}

// --- Reviews ---------------------------------------------------------------

fn review(client_name: &str, company: &str, review_text: &str) -> ReviewView {
    ReviewView {
        client_name: client_name.to_string(),
        initial: client_name.chars().next().map(String::from).unwrap_or_default(),
        company: Some(company.to_string()),
        location: None,
        rating: 5,
        review_text: review_text.to_string(),
        image: None,
    }
}

pub fn demo_reviews() -> Vec<ReviewView> {
    vec![
        review(
            "Rajesh Kumar",
            "Kumar Traders",
            "Exceptional quality and reliable service. The best supplier we have worked with in 15 years.",
        ),
        review(
            "Priya Sharma",
            "Sharma Foods",
            "Outstanding wheat quality. Their commitment to excellence is unmatched in the industry.",
        ),
        review(
            "Mohammed Ali",
            "Ali Enterprises",
            "Professional team, premium products. Highly recommend for bulk agricultural supplies.",
        ),
        review(
            "Anita Patel",
            "Patel Exports",
            "Consistent quality every single time. True partners in our success.",
        ),
    ]
}

// --- FAQs ------------------------------------------------------------------

fn faq(question: &str, answer: &str) -> FaqView {
    FaqView {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn default_faqs() -> Vec<FaqView> {
    vec![
        faq(
            "What is your minimum order quantity?",
            "Our minimum order varies by product category. For grains and pulses, we typically require a minimum of 1 metric ton. For smaller quantities, please contact us to discuss your specific needs.",
        ),
        faq(
            "Do you provide samples before bulk orders?",
            "Yes, we provide samples for quality assessment before bulk orders. Sample charges apply but are adjusted against your first order. Contact us on WhatsApp to request samples.",
        ),
        faq(
            "What are your payment terms?",
            "We offer flexible payment options including advance payment, letter of credit (LC), and credit terms for established customers. Specific terms are discussed based on order size and relationship.",
        ),
        faq(
            "Do you deliver across India?",
            "Yes, we deliver pan-India with reliable logistics partners. Delivery timelines depend on your location and order volume. Express delivery options are also available.",
        ),
        faq(
            "How do you ensure product quality?",
            "Every batch undergoes rigorous quality testing including moisture content, purity, and grade verification. We provide quality certificates and can arrange third-party inspections on request.",
        ),
    ]
}

// --- Demo products ---------------------------------------------------------

/// Fixed key order of the demo product table.
pub const DEMO_PRODUCT_SLUGS: [&str; 8] = [
    "wheat", "chana", "pulses", "rice", "spices", "oilseeds", "maize", "millets",
];

fn product(id: &str, name: &str, description: &str, features: &[&str]) -> ProductView {
    ProductView {
        id: id.to_string(),
        name: name.to_string(),
        slug: None,
        description: description.to_string(),
        image: None,
        features: features.iter().map(|f| f.to_string()).collect(),
        specifications: Vec::new(),
    }
}

/// Demo products keyed by category slug. `None` for a slug outside the
/// fixed table.
pub fn demo_products(slug: &str) -> Option<Vec<ProductView>> {
    let products = match slug {
        "wheat" => vec![
            product(
                "1",
                "Sharbati Wheat",
                "Premium quality Sharbati wheat known for its golden color and high gluten content. Ideal for making soft rotis and bread.",
                &["High Protein Content", "Golden Color", "Premium Grade", "MP Origin"],
            ),
            product(
                "2",
                "Lokwan Wheat",
                "Popular variety with excellent taste and aroma. Perfect for all-purpose flour and chapati making.",
                &["Aromatic", "Versatile Use", "Maharashtra Origin", "Consistent Quality"],
            ),
            product(
                "3",
                "MP Wheat",
                "High-quality wheat from Madhya Pradesh farms. Known for its purity and nutritional value.",
                &["Pure Quality", "High Yield", "Farm Fresh", "Bulk Available"],
            ),
            product(
                "4",
                "Durum Wheat",
                "Hard wheat variety ideal for pasta, semolina, and couscous production.",
                &["High Gluten", "Pasta Grade", "Export Quality", "Semolina Use"],
            ),
        ],
        "chana" => vec![
            product(
                "1",
                "Desi Chana",
                "Traditional brown chickpeas with rich flavor. Perfect for making chana dal and various Indian dishes.",
                &["Rich Taste", "High Protein", "Traditional Variety", "Uniform Size"],
            ),
            product(
                "2",
                "Kabuli Chana",
                "Large white chickpeas ideal for chole, salads, and Middle Eastern cuisines.",
                &["Large Size", "Creamy Texture", "Export Quality", "Premium Grade"],
            ),
            product(
                "3",
                "Chana Dal",
                "Split chickpeas ready for cooking. Quick-cooking and versatile for various recipes.",
                &["Split & Polished", "Quick Cooking", "Dal Grade", "Hygenic Processing"],
            ),
        ],
        "pulses" => vec![
            product(
                "1",
                "Toor Dal",
                "Yellow pigeon peas, also known as Arhar dal. Staple in Indian kitchens for sambar and dal.",
                &["Premium Quality", "Polished", "Quick Cooking", "Rich Protein"],
            ),
            product(
                "2",
                "Moong Dal",
                "Green gram split and skinless. Light and easy to digest, perfect for khichdi and soups.",
                &["Easy Digest", "High Nutrition", "Skinless", "Uniform Yellow"],
            ),
            product(
                "3",
                "Masoor Dal",
                "Red lentils that cook quickly. Popular for everyday dal preparation across India.",
                &["Fast Cooking", "Economical", "Split Variety", "Rich Iron"],
            ),
            product(
                "4",
                "Urad Dal",
                "Black gram used for making dal makhani, idli, and dosa batter.",
                &["South Indian Use", "High Protein", "Split/Whole", "Premium Quality"],
            ),
        ],
        "rice" => vec![
            product(
                "1",
                "Basmati Rice (1121)",
                "Extra-long grain aromatic rice. Premium export quality with excellent elongation.",
                &["20mm+ Length", "Aromatic", "Low GI", "Aged Rice"],
            ),
            product(
                "2",
                "Sona Masoori",
                "Lightweight and aromatic medium-grain rice. Popular in South Indian cuisine.",
                &["Medium Grain", "Light Weight", "Low Starch", "Daily Use"],
            ),
            product(
                "3",
                "Kolam Rice",
                "Short grain rice from Maharashtra. Soft and sticky when cooked.",
                &["Short Grain", "Soft Texture", "Regional Variety", "Affordable"],
            ),
        ],
        "spices" => vec![
            product(
                "1",
                "Turmeric (Haldi)",
                "High curcumin content turmeric from premium farms. Available in whole and powder form.",
                &["High Curcumin", "Sangli Origin", "Bright Color", "Export Quality"],
            ),
            product(
                "2",
                "Red Chili",
                "Dried red chilies with perfect heat level. Available in various grades and varieties.",
                &["Guntur Variety", "High Color", "Consistent Heat", "Sorted Quality"],
            ),
            product(
                "3",
                "Coriander Seeds",
                "Aromatic coriander seeds for grinding or whole use. Essential spice for Indian cooking.",
                &["Aromatic", "Clean Seeds", "MP Origin", "Bold Size"],
            ),
            product(
                "4",
                "Cumin Seeds",
                "Premium quality cumin with strong aroma. Essential for tempering and spice mixes.",
                &["Strong Aroma", "Gujarat Origin", "Singapore Quality", "Uniform Size"],
            ),
        ],
        "oilseeds" => vec![
            product(
                "1",
                "Groundnut",
                "High oil content groundnuts for oil extraction and food processing.",
                &["High Oil", "Bold Size", "Gujarat Origin", "HPS Quality"],
            ),
            product(
                "2",
                "Mustard Seeds",
                "Black and yellow mustard seeds for oil extraction and cooking.",
                &["High Oil", "Rajasthan Origin", "Clean Seeds", "Uniform Size"],
            ),
            product(
                "3",
                "Sesame Seeds",
                "White and black sesame seeds for oil, tahini, and culinary uses.",
                &["High Quality", "Hulled/Natural", "Export Grade", "Rich Oil"],
            ),
        ],
        "maize" => vec![
            product(
                "1",
                "Yellow Maize",
                "Feed and food grade yellow corn. Used for poultry feed, starch, and food products.",
                &["High Starch", "Feed Grade", "Food Grade", "Bulk Available"],
            ),
            product(
                "2",
                "White Maize",
                "Food grade white corn for human consumption and specialty products.",
                &["Human Grade", "Low Moisture", "Clean Kernels", "Export Quality"],
            ),
        ],
        "millets" => vec![
            product(
                "1",
                "Bajra (Pearl Millet)",
                "Nutritious pearl millet rich in iron and fiber. Popular in Rajasthan and Gujarat.",
                &["High Iron", "Gluten Free", "Traditional Grain", "Health Food"],
            ),
            product(
                "2",
                "Jowar (Sorghum)",
                "Versatile sorghum grain for flour, porridge, and animal feed.",
                &["Gluten Free", "High Fiber", "Multi Use", "Sustainable Crop"],
            ),
            product(
                "3",
                "Ragi (Finger Millet)",
                "Super nutritious millet rich in calcium. Excellent for health-conscious consumers.",
                &["High Calcium", "Diabetic Friendly", "Baby Food", "South Indian Staple"],
            ),
        ],
        _ => return None,
    };
    Some(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_table_covers_every_slug_in_order() {
        for slug in DEMO_PRODUCT_SLUGS {
            assert!(demo_products(slug).is_some(), "missing demo list for {slug}");
        }
        assert!(demo_products("unknown-slug").is_none());
    }

    #[test]
    fn nav_entries_match_table_order() {
        let nav = demo_category_nav();
        assert_eq!(nav.len(), 8);
        assert_eq!(nav[0].slug, "wheat");
        assert_eq!(nav[0].name, "Wheat");
        assert_eq!(nav[5].name, "Oilseeds");
    }

    #[test]
    fn demo_reviews_all_rate_five() {
        assert!(demo_reviews().iter().all(|r| r.rating == 5));
    }
}
