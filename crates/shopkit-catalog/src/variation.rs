//! Variation generation.
//!
//! A variation is one purchasable combination of option values, one per
//! variation-attribute of the product. Generation enumerates every such
//! combination in odometer order: the last attribute's options advance
//! fastest.

use serde::{Deserialize, Serialize};

use crate::attribute::{Product, ProductAttribute};
use crate::error::CatalogError;

/// One attribute/option pairing inside a generated variation.
///
/// `name` is only set when the product has two or more variation-attributes.
/// Single-attribute products produce option-only selections, and downstream
/// consumers rely on that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariationAttribute {
    /// Source attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Selected option value.
    pub option: String,
}

impl VariationAttribute {
    /// Selection carrying only the option value.
    pub fn unnamed(option: impl Into<String>) -> Self {
        Self {
            name: None,
            option: option.into(),
        }
    }

    /// Selection tagged with its attribute name.
    pub fn named(name: impl Into<String>, option: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            option: option.into(),
        }
    }
}

/// A generated combination of option values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variation {
    /// Selections in the same order as the product's variation-attributes.
    pub attributes: Vec<VariationAttribute>,
}

impl Variation {
    pub fn new(attributes: Vec<VariationAttribute>) -> Self {
        Self { attributes }
    }

    /// Human-readable name, e.g. "Red / Small".
    pub fn display_name(&self) -> String {
        if self.attributes.is_empty() {
            "Default".to_string()
        } else {
            self.attributes
                .iter()
                .map(|a| a.option.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }
}

/// Cartesian product of `lists`, built as a left fold.
///
/// Each step combines the accumulated tuples with the next list, so the last
/// list varies fastest. No lists yields no tuples, and any empty list
/// collapses the whole product to nothing.
pub fn cartesian_product<T, L>(lists: &[L]) -> Vec<Vec<T>>
where
    T: Clone,
    L: AsRef<[T]>,
{
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };

    let seed: Vec<Vec<T>> = first.as_ref().iter().map(|item| vec![item.clone()]).collect();

    rest.iter().fold(seed, |acc, list| {
        let list = list.as_ref();
        let mut next = Vec::with_capacity(acc.len().saturating_mul(list.len()));
        for prefix in &acc {
            for item in list {
                let mut tuple = Vec::with_capacity(prefix.len() + 1);
                tuple.extend_from_slice(prefix);
                tuple.push(item.clone());
                next.push(tuple);
            }
        }
        next
    })
}

/// Generate every variation of `product`.
///
/// Only attributes flagged for variations participate. The input is not
/// modified and the returned variations own their data.
pub fn generate_variations(product: &Product) -> Vec<Variation> {
    let variation_attributes: Vec<&ProductAttribute> = product.variation_attributes().collect();

    let variations: Vec<Variation> = match variation_attributes.as_slice() {
        [] => Vec::new(),
        [single] => single
            .options
            .iter()
            .map(|option| Variation::new(vec![VariationAttribute::unnamed(option.as_str())]))
            .collect(),
        many => {
            let option_lists: Vec<&[String]> =
                many.iter().map(|a| a.options.as_slice()).collect();

            cartesian_product(&option_lists)
                .into_iter()
                .map(|combination| {
                    Variation::new(
                        combination
                            .into_iter()
                            .zip(many.iter())
                            .map(|(option, attribute)| {
                                VariationAttribute::named(attribute.name.as_str(), option)
                            })
                            .collect(),
                    )
                })
                .collect()
        }
    };

    tracing::debug!(
        variation_attributes = variation_attributes.len(),
        variations = variations.len(),
        "generated product variations"
    );

    variations
}

/// Lazy, odometer-ordered walk over a product's variations.
///
/// Yields the same sequence as [`generate_variations`] but builds one
/// variation per `next` call, so `.take(n)` on a product with a huge
/// combination count stays cheap.
#[derive(Debug, Clone)]
pub struct Variations<'a> {
    attributes: Vec<&'a ProductAttribute>,
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Variations<'a> {
    pub fn new(product: &'a Product) -> Self {
        let attributes: Vec<&ProductAttribute> = product.variation_attributes().collect();
        let done = attributes.is_empty() || attributes.iter().any(|a| a.options.is_empty());
        let indices = vec![0; attributes.len()];

        Self {
            attributes,
            indices,
            done,
        }
    }

    fn current(&self) -> Variation {
        let named = self.attributes.len() > 1;
        Variation::new(
            self.attributes
                .iter()
                .zip(&self.indices)
                .map(|(attribute, &i)| {
                    let option = attribute.options[i].as_str();
                    if named {
                        VariationAttribute::named(attribute.name.as_str(), option)
                    } else {
                        VariationAttribute::unnamed(option)
                    }
                })
                .collect(),
        )
    }

    /// Advance the last wheel, carrying leftwards.
    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.attributes[position].options.len() {
                return;
            }
            self.indices[position] = 0;
        }
        self.done = true;
    }
}

impl Iterator for Variations<'_> {
    type Item = Variation;

    fn next(&mut self) -> Option<Variation> {
        if self.done {
            return None;
        }
        let variation = self.current();
        self.advance();
        Some(variation)
    }
}

/// Iterate `product`'s variations without materializing them.
pub fn variations(product: &Product) -> Variations<'_> {
    Variations::new(product)
}

/// Number of variations `generate_variations` would return, without
/// building them. Saturates at `usize::MAX`.
pub fn variation_count(product: &Product) -> usize {
    let mut attributes = product.variation_attributes().peekable();
    if attributes.peek().is_none() {
        return 0;
    }
    attributes.fold(1usize, |count, attribute| {
        count.saturating_mul(attribute.options.len())
    })
}

/// Parse a product JSON document and return its variations as JSON.
pub fn generate_variations_json(product_json: &str) -> Result<String, CatalogError> {
    let product: Product = serde_json::from_str(product_json)?;
    let variations = generate_variations(&product);
    Ok(serde_json::to_string(&variations)?)
}
