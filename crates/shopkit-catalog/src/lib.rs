//! Product attribute and variation types for shopkit.
//!
//! This crate turns a product's attribute definitions into the list of
//! purchasable combinations (variations):
//!
//! - **Attributes**: named characteristics with ordered option values
//! - **Variations**: one option per variation-attribute, in odometer order
//!
//! # Example
//!
//! ```rust
//! use shopkit_catalog::prelude::*;
//!
//! let product = Product::new(ProductId::new(1))
//!     .with_attribute(ProductAttribute::new("Color", ["Red", "Blue"]).for_variations())
//!     .with_attribute(ProductAttribute::new("Size", ["Small"]).for_variations());
//!
//! let variations = generate_variations(&product);
//! assert_eq!(variations.len(), 2);
//! assert_eq!(variations[0].display_name(), "Red / Small");
//! ```

pub mod attribute;
pub mod error;
pub mod ids;
pub mod variation;

pub use attribute::{Product, ProductAttribute};
pub use error::CatalogError;
pub use ids::{AttributeId, ProductId};
pub use variation::{
    cartesian_product, generate_variations, generate_variations_json, variation_count,
    variations, Variation, VariationAttribute, Variations,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::attribute::{Product, ProductAttribute};
    pub use crate::error::CatalogError;
    pub use crate::ids::{AttributeId, ProductId};
    pub use crate::variation::{
        generate_variations, variation_count, variations, Variation, VariationAttribute,
        Variations,
    };
}
