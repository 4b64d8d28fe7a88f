//! Product and attribute input types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{AttributeId, ProductId};

/// A product characteristic with an ordered list of option values
/// (e.g., Color: Red, Blue).
///
/// Unknown fields in incoming documents (`uid`, `position`, `visible`, ...)
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    /// Store-assigned attribute ID, absent for attributes still being edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AttributeId>,
    /// Attribute name (e.g., "Color").
    pub name: String,
    /// Option values in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<String>,
    /// Whether this attribute is used to build variations.
    #[serde(default)]
    pub variation: bool,
}

impl ProductAttribute {
    /// Create an attribute that does not take part in variations.
    pub fn new<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            name: name.into(),
            options: options.into_iter().map(Into::into).collect(),
            variation: false,
        }
    }

    /// Mark this attribute as a variation-attribute.
    pub fn for_variations(mut self) -> Self {
        self.variation = true;
        self
    }

    /// Set the store-assigned ID.
    pub fn with_id(mut self, id: AttributeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Check if this attribute contributes to variation generation.
    pub fn is_variation_attribute(&self) -> bool {
        self.variation
    }
}

/// The slice of a product that variation generation reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Product attributes in display order. Missing or `null` means none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attributes: Vec<ProductAttribute>,
}

impl Product {
    /// Create a product with no attributes.
    pub fn new(id: ProductId) -> Self {
        Self {
            id: Some(id),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, attribute: ProductAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Attributes flagged for variations, in input order.
    pub fn variation_attributes(&self) -> impl Iterator<Item = &ProductAttribute> + '_ {
        self.attributes
            .iter()
            .filter(|attribute| attribute.is_variation_attribute())
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
