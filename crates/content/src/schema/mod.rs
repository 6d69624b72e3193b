//! Declarative content-schema model.
//!
//! The schema is data: each [`DocumentType`] lists its fields, validation
//! predicates, field groups, and orderings. The hosting CMS enforces the
//! rules at write time; [`validate`] applies the same rules here so a
//! document can be checked before it is pushed, and so the rules are
//! testable.

mod definitions;

pub use definitions::site_schema;

use serde::Serialize;
use serde_json::Value;

use agropure_core::error::CoreError;
use agropure_core::slug;

/// Primitive field types understood by the content store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldType {
    String,
    Text {
        rows: u8,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
    Image,
    Url,
    Slug {
        source: &'static str,
        max_length: usize,
    },
    Reference {
        to: &'static str,
    },
    /// Array of plain strings.
    StringArray,
    /// Array of inline objects with the given fields.
    ObjectArray {
        fields: Vec<Field>,
    },
}

/// One editable field of a document type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Value>,
}

impl Field {
    pub fn new(name: &'static str, title: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            title,
            field_type,
            required: false,
            description: None,
            group: None,
            initial_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    pub fn initial(mut self, value: Value) -> Self {
        self.initial_value = Some(value);
        self
    }
}

/// A named field group (editor UI tab).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldGroup {
    pub name: &'static str,
    pub title: &'static str,
}

/// A named default ordering for a collection type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ordering {
    pub name: &'static str,
    pub title: &'static str,
    pub field: &'static str,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// One editable document type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentType {
    pub name: &'static str,
    pub title: &'static str,
    /// At most one instance of a singleton type is meaningful; the front
    /// end always reads index 0 of the result set.
    pub singleton: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FieldGroup>,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub orderings: Vec<Ordering>,
}

impl DocumentType {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Validate a JSON document against a document type's write-time rules.
///
/// Checks: required fields present and non-empty, numeric min/max bounds,
/// slug shape. Unknown fields are ignored (the store tolerates them).
pub fn validate(doc_type: &DocumentType, document: &Value) -> Result<(), CoreError> {
    let object = document
        .as_object()
        .ok_or_else(|| CoreError::Validation(format!("{}: document must be an object", doc_type.name)))?;

    for field in &doc_type.fields {
        let value = object.get(field.name).filter(|v| !v.is_null());

        if field.required && !is_present(value) {
            return Err(CoreError::Validation(format!(
                "{}.{} is required",
                doc_type.name, field.name
            )));
        }

        let Some(value) = value else { continue };

        match &field.field_type {
            FieldType::Number { min, max } => {
                let n = value.as_i64().ok_or_else(|| {
                    CoreError::Validation(format!(
                        "{}.{} must be a number",
                        doc_type.name, field.name
                    ))
                })?;
                if min.is_some_and(|min| n < min) || max.is_some_and(|max| n > max) {
                    return Err(CoreError::Validation(format!(
                        "{}.{} must be between {} and {}",
                        doc_type.name,
                        field.name,
                        min.map_or_else(|| "-inf".into(), |m| m.to_string()),
                        max.map_or_else(|| "inf".into(), |m| m.to_string()),
                    )));
                }
            }
            FieldType::Slug { max_length, .. } => {
                let current = value
                    .get("current")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                if !slug::is_valid(current) || current.len() > *max_length {
                    return Err(CoreError::Validation(format!(
                        "{}.{} has an invalid slug: {current:?}",
                        doc_type.name, field.name
                    )));
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// A value counts as present when it is non-null and, for strings, has
/// non-whitespace content.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn doc_type(name: &str) -> DocumentType {
        site_schema()
            .into_iter()
            .find(|d| d.name == name)
            .expect("schema type missing")
    }

    #[test]
    fn schema_lists_all_seven_types() {
        let names: Vec<_> = site_schema().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            [
                "siteSettings",
                "heroSection",
                "aboutSection",
                "productCategory",
                "product",
                "review",
                "faq"
            ]
        );
    }

    #[test]
    fn singletons_are_marked() {
        for d in site_schema() {
            let expect = matches!(d.name, "siteSettings" | "heroSection" | "aboutSection");
            assert_eq!(d.singleton, expect, "{}", d.name);
        }
    }

    #[test]
    fn rating_outside_range_is_rejected() {
        let review = doc_type("review");
        let base = json!({
            "clientName": "Rajesh Kumar",
            "reviewText": "Great supplier.",
        });

        for rating in [1, 3, 5] {
            let mut doc = base.clone();
            doc["rating"] = json!(rating);
            assert!(validate(&review, &doc).is_ok(), "rating {rating}");
        }
        for rating in [0, 6, -1] {
            let mut doc = base.clone();
            doc["rating"] = json!(rating);
            assert_matches!(validate(&review, &doc), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn required_fields_must_be_non_empty() {
        let settings = doc_type("siteSettings");
        let missing = json!({ "phoneNumber": "+91 11 2345", "whatsappNumber": "911123456789" });
        assert_matches!(validate(&settings, &missing), Err(CoreError::Validation(_)));

        let blank = json!({
            "companyName": "   ",
            "phoneNumber": "+91 11 2345",
            "whatsappNumber": "911123456789"
        });
        assert_matches!(validate(&settings, &blank), Err(CoreError::Validation(_)));

        let ok = json!({
            "companyName": "AgroPure",
            "phoneNumber": "+91 11 2345",
            "whatsappNumber": "911123456789"
        });
        assert!(validate(&settings, &ok).is_ok());
    }

    #[test]
    fn slug_shape_is_checked() {
        let category = doc_type("productCategory");
        let bad = json!({ "name": "Premium Wheat", "slug": { "current": "Premium Wheat" } });
        assert_matches!(validate(&category, &bad), Err(CoreError::Validation(_)));

        let good = json!({ "name": "Premium Wheat", "slug": { "current": "premium-wheat" } });
        assert!(validate(&category, &good).is_ok());
    }

    #[test]
    fn product_requires_category_reference() {
        let product = doc_type("product");
        let doc = json!({ "name": "Sharbati Wheat", "slug": { "current": "sharbati-wheat" } });
        assert_matches!(validate(&product, &doc), Err(CoreError::Validation(_)));
    }

    #[test]
    fn schema_serializes_to_json() {
        let json = serde_json::to_value(site_schema()).unwrap();
        let review = &json[5];
        assert_eq!(review["name"], "review");
        let rating = review["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["name"] == "rating")
            .unwrap();
        assert_eq!(rating["min"], 1);
        assert_eq!(rating["max"], 5);
    }
}
