//! Variation generation command.

use anyhow::{Context as _, Result};
use shopkit_catalog::{variation_count, variations, Product, Variation};

use super::VariationsArgs;
use crate::context::Context;

/// Run the variations command.
pub async fn run(args: VariationsArgs, ctx: &Context) -> Result<()> {
    let content = ctx.read_input(&args.product)?;
    let product: Product = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse product document: {}", args.product))?;

    let count = variation_count(&product);
    ctx.logger
        .builder(shopkit_observability::LogLevel::Info, "counted variations")
        .field("product", args.product.as_str())
        .field_u64("count", count as u64)
        .field_bool("limited", args.limit.is_some())
        .emit();

    if args.count {
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "count": count }));
        } else {
            println!("{}", count);
        }
        return Ok(());
    }

    let threshold = ctx.config.variations.warn_threshold;
    if count > threshold {
        ctx.output.warn(&format!(
            "Product produces {} variations (threshold {})",
            count, threshold
        ));
    }

    let variations = collect_variations(&product, args.limit);

    if ctx.output.is_json() {
        ctx.output.json(&variations);
        return Ok(());
    }

    if variations.is_empty() {
        ctx.output.info("Product has no variation attributes.");
        return Ok(());
    }

    ctx.output.header(&format!("Variations ({})", count));
    ctx.output.table_row(&["#", "NAME", "ATTRIBUTES"], &[5, 30, 40]);
    for (i, variation) in variations.iter().enumerate() {
        let index = (i + 1).to_string();
        ctx.output.table_row(
            &[&index, &variation.display_name(), &describe(variation)],
            &[5, 30, 40],
        );
    }

    if variations.len() < count {
        ctx.output
            .info(&format!("Showing {} of {}", variations.len(), count));
    }

    Ok(())
}

/// Build at most `limit` variations; only the listed ones are materialized.
fn collect_variations(product: &Product, limit: Option<usize>) -> Vec<Variation> {
    match limit {
        Some(limit) => variations(product).take(limit).collect(),
        None => variations(product).collect(),
    }
}

/// `Color=Red, Size=Small`, or just the options when unnamed.
fn describe(variation: &Variation) -> String {
    variation
        .attributes
        .iter()
        .map(|a| match &a.name {
            Some(name) => format!("{}={}", name, a.option),
            None => a.option.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkit_catalog::{ProductAttribute, ProductId, VariationAttribute};

    #[test]
    fn test_limit_stops_early_on_large_product() {
        let sizes = ["XS", "S", "M", "L", "XL", "XXL", "3XL", "4XL"];
        let product = (0..10).fold(Product::new(ProductId::new(7)), |product, i| {
            let axis = ProductAttribute::new(format!("Axis{}", i), sizes).for_variations();
            product.with_attribute(axis)
        });
        assert_eq!(variation_count(&product), 1 << 30);

        let listed = collect_variations(&product, Some(2));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].attributes[9], VariationAttribute::named("Axis9", "S"));
    }

    #[test]
    fn test_no_limit_lists_all() {
        let product = Product::new(ProductId::new(7))
            .with_attribute(ProductAttribute::new("Color", ["Red", "Blue"]).for_variations());
        assert_eq!(collect_variations(&product, None).len(), 2);
        assert!(collect_variations(&product, Some(0)).is_empty());
    }

    #[test]
    fn test_describe_named() {
        let variation = Variation::new(vec![
            VariationAttribute::named("Color", "Red"),
            VariationAttribute::named("Size", "Small"),
        ]);
        assert_eq!(describe(&variation), "Color=Red, Size=Small");
    }

    #[test]
    fn test_describe_unnamed() {
        let variation = Variation::new(vec![VariationAttribute::unnamed("Blue")]);
        assert_eq!(describe(&variation), "Blue");
    }
}
