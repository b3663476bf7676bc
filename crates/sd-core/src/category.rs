//! Product categories and their price ranges
//!
//! The price table is an explicit constant. [`validate_price_ranges`] is run
//! once before generation starts so that a category added to
//! [`ProductCategory::ALL`] without a matching price range fails loudly
//! instead of surfacing as a lookup failure halfway through a run.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Books,
    Beauty,
    Toys,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
}

impl ProductCategory {
    /// All categories, in catalog order.
    pub const ALL: [ProductCategory; 8] = [
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::HomeAndGarden,
        ProductCategory::Sports,
        ProductCategory::Books,
        ProductCategory::Beauty,
        ProductCategory::Toys,
        ProductCategory::FoodAndBeverage,
    ];

    /// Display name used in the generated tables
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
            ProductCategory::HomeAndGarden => "Home & Garden",
            ProductCategory::Sports => "Sports",
            ProductCategory::Books => "Books",
            ProductCategory::Beauty => "Beauty",
            ProductCategory::Toys => "Toys",
            ProductCategory::FoodAndBeverage => "Food & Beverage",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price bounds for a category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Lower bound of the cost range, as a fraction of the minimum price
    pub const COST_LOW_FACTOR: f64 = 0.4;
    /// Upper bound of the cost range, as a fraction of the minimum price
    pub const COST_HIGH_FACTOR: f64 = 0.7;

    /// Bounds of the unit cost: `[0.4 * min, 0.7 * min]`.
    ///
    /// Cost is derived from the minimum price only, so a cheap draw in a
    /// wide category can end up below its own cost.
    pub fn cost_bounds(&self) -> (f64, f64) {
        (
            self.min * Self::COST_LOW_FACTOR,
            self.min * Self::COST_HIGH_FACTOR,
        )
    }

    /// Whether `price` falls inside this range
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Price range per category.
pub const PRICE_RANGES: &[(ProductCategory, PriceRange)] = &[
    (ProductCategory::Electronics, PriceRange { min: 50.0, max: 2000.0 }),
    (ProductCategory::Clothing, PriceRange { min: 15.0, max: 200.0 }),
    (ProductCategory::HomeAndGarden, PriceRange { min: 20.0, max: 500.0 }),
    (ProductCategory::Sports, PriceRange { min: 25.0, max: 400.0 }),
    (ProductCategory::Books, PriceRange { min: 10.0, max: 50.0 }),
    (ProductCategory::Beauty, PriceRange { min: 15.0, max: 150.0 }),
    (ProductCategory::Toys, PriceRange { min: 10.0, max: 100.0 }),
    (ProductCategory::FoodAndBeverage, PriceRange { min: 5.0, max: 80.0 }),
];

/// Look up the price range for a category in [`PRICE_RANGES`]
pub fn price_range(category: ProductCategory) -> CoreResult<PriceRange> {
    lookup(PRICE_RANGES, category)
}

fn lookup(
    table: &[(ProductCategory, PriceRange)],
    category: ProductCategory,
) -> CoreResult<PriceRange> {
    table
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, range)| *range)
        .ok_or_else(|| CoreError::MissingPriceRange {
            category: category.to_string(),
        })
}

/// Check that `table` has exactly one usable range for every category.
pub fn validate_price_ranges(table: &[(ProductCategory, PriceRange)]) -> CoreResult<()> {
    for category in ProductCategory::ALL {
        let matches = table.iter().filter(|(c, _)| *c == category).count();
        if matches > 1 {
            return Err(CoreError::DuplicatePriceRange {
                category: category.to_string(),
            });
        }

        let range = lookup(table, category)?;
        if !(range.min.is_finite() && range.max.is_finite())
            || range.min <= 0.0
            || range.min > range.max
        {
            return Err(CoreError::InvalidPriceRange {
                category: category.to_string(),
                min: range.min,
                max: range.max,
            });
        }
    }

    log::debug!(
        "Validated price ranges for {} categories",
        ProductCategory::ALL.len()
    );
    Ok(())
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
