//! Product catalog generation

use crate::sampling::{pick_uniform, round_to_cents};
use rand::Rng;
use sd_core::{price_range, Column, CoreResult, ProductCategory, ProductId, TableRecord, Value};
use serde::Serialize;

/// A generated product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: ProductCategory,
    pub price: f64,
    pub cost: f64,
}

impl TableRecord for Product {
    const TABLE_NAME: &'static str = "products";

    fn columns() -> Vec<Column> {
        vec![
            Column::identifier("product_id"),
            Column::new("product_name"),
            Column::new("category"),
            Column::new("price"),
            Column::new("cost"),
        ]
    }

    fn to_row(&self) -> Vec<Option<Value>> {
        vec![
            Some(self.product_id.as_str().into()),
            Some(self.product_name.as_str().into()),
            Some(self.category.as_str().into()),
            Some(self.price.into()),
            Some(self.cost.into()),
        ]
    }
}

/// Generate `count` products with ids `PROD_00000` onwards.
///
/// Each product picks a category uniformly, then a price uniformly within
/// that category's range and a cost uniformly within
/// [`sd_core::PriceRange::cost_bounds`], both rounded to cents. Cost is not
/// forced below price.
pub fn generate_products<R: Rng + ?Sized>(count: usize, rng: &mut R) -> CoreResult<Vec<Product>> {
    log::info!("Generating {} products", count);

    let mut products = Vec::with_capacity(count);
    for i in 0..count {
        let category = pick_uniform(&ProductCategory::ALL, rng);
        let range = price_range(category)?;
        let (cost_low, cost_high) = range.cost_bounds();

        let price = round_to_cents(rng.gen_range(range.min..=range.max));
        let cost = round_to_cents(rng.gen_range(cost_low..=cost_high));

        products.push(Product {
            product_id: ProductId::from_index(i),
            product_name: format!("{} Product {}", category, i),
            category,
            price,
            cost,
        });
    }

    let underwater = products.iter().filter(|p| p.cost > p.price).count();
    if underwater > 0 {
        log::debug!("{} products priced below cost", underwater);
    }

    Ok(products)
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
