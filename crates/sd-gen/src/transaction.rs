//! Transaction table generation
//!
//! Transactions reference customers and products by id. Customers are drawn
//! from a skewed distribution (a per-customer exponential weight, fixed for
//! the whole call) so that some customers buy far more often than others;
//! products are drawn uniformly.

use crate::customer::Customer;
use crate::error::{GenError, GenResult};
use crate::product::Product;
use crate::sampling::{pick_weighted, round_to_cents};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Exp1;
use sd_core::{Column, CustomerId, ProductId, TableRecord, TransactionId, Value};
use serde::Serialize;

/// Scale (mean) of the exponential customer-weight distribution
pub const CUSTOMER_WEIGHT_SCALE: f64 = 1.5;

/// First day of the transaction window
pub const WINDOW_START: (i32, u32, u32) = (2023, 1, 1);

/// Last day of the transaction window
pub const WINDOW_END: (i32, u32, u32) = (2024, 12, 31);

/// Quantity distribution: most orders are for a single unit
pub const QUANTITY_WEIGHTS: [(u8, f64); 5] =
    [(1, 0.70), (2, 0.15), (3, 0.08), (4, 0.05), (5, 0.02)];

/// Share of transactions that carry a discount
pub const DISCOUNT_PROBABILITY: f64 = 0.2;

/// Bounds of a non-zero discount fraction
pub const DISCOUNT_RANGE: (f64, f64) = (0.05, 0.3);

/// A generated transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub transaction_date: NaiveDateTime,
    pub quantity: u8,
    /// Product price at the time of the draw
    pub unit_price: f64,
    pub discount_pct: f64,
    pub total_amount: f64,
}

impl Transaction {
    /// `unit_price * quantity * (1 - discount_pct)`, rounded to cents
    pub fn expected_total(unit_price: f64, quantity: u8, discount_pct: f64) -> f64 {
        let subtotal = unit_price * f64::from(quantity);
        round_to_cents(subtotal - subtotal * discount_pct)
    }
}

impl TableRecord for Transaction {
    const TABLE_NAME: &'static str = "transactions";

    fn columns() -> Vec<Column> {
        vec![
            Column::identifier("transaction_id"),
            Column::identifier("customer_id"),
            Column::identifier("product_id"),
            Column::new("transaction_date"),
            Column::new("quantity"),
            Column::new("unit_price"),
            Column::new("discount_pct"),
            Column::new("total_amount"),
        ]
    }

    fn to_row(&self) -> Vec<Option<Value>> {
        vec![
            Some(self.transaction_id.as_str().into()),
            Some(self.customer_id.as_str().into()),
            Some(self.product_id.as_str().into()),
            Some(self.transaction_date.into()),
            Some(i64::from(self.quantity).into()),
            Some(self.unit_price.into()),
            Some(self.discount_pct.into()),
            Some(self.total_amount.into()),
        ]
    }
}

fn calendar_day((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn window_bounds() -> (NaiveDateTime, i64) {
    let start = calendar_day(WINDOW_START);
    let span_days = (calendar_day(WINDOW_END) - start).num_days();
    (start.and_time(NaiveTime::default()), span_days)
}

/// Draw one exponential weight per customer and normalize them to sum to 1.
pub fn customer_weights<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
    let raw: Vec<f64> = (0..count)
        .map(|_| {
            let unit: f64 = Exp1.sample(rng);
            unit * CUSTOMER_WEIGHT_SCALE
        })
        .collect();
    let total: f64 = raw.iter().sum();
    if total > 0.0 {
        raw.into_iter().map(|w| w / total).collect()
    } else {
        vec![1.0 / count as f64; count]
    }
}

fn draw_discount<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen::<f64>() > DISCOUNT_PROBABILITY {
        0.0
    } else {
        let (low, high) = DISCOUNT_RANGE;
        round_to_cents(rng.gen_range(low..=high))
    }
}

/// Generate `count` transactions over the given customers and products.
///
/// Both inputs must be non-empty. Customer weights are drawn once per call.
/// Each transaction then draws, in order: customer, product, timestamp
/// (day, hour, minute), quantity, discount.
pub fn generate_transactions<R: Rng + ?Sized>(
    customers: &[Customer],
    products: &[Product],
    count: usize,
    rng: &mut R,
) -> GenResult<Vec<Transaction>> {
    if customers.is_empty() {
        return Err(GenError::EmptyInput {
            target: "transactions".to_string(),
            table: "customers".to_string(),
        });
    }
    if products.is_empty() {
        return Err(GenError::EmptyInput {
            target: "transactions".to_string(),
            table: "products".to_string(),
        });
    }

    log::info!(
        "Generating {} transactions over {} customers and {} products",
        count,
        customers.len(),
        products.len()
    );

    let weights = customer_weights(customers.len(), rng);
    let customer_dist = WeightedIndex::new(&weights).map_err(|e| GenError::InvalidWeights {
        what: "customers".to_string(),
        reason: e.to_string(),
    })?;
    let (window_start, span_days) = window_bounds();

    let mut transactions = Vec::with_capacity(count);
    for i in 0..count {
        let customer = &customers[customer_dist.sample(rng)];
        let product = &products[rng.gen_range(0..products.len())];

        let transaction_date = window_start
            + Duration::days(rng.gen_range(0..=span_days))
            + Duration::hours(rng.gen_range(0..=23))
            + Duration::minutes(rng.gen_range(0..=59));

        let quantity = pick_weighted(&QUANTITY_WEIGHTS, rng);
        let discount_pct = draw_discount(rng);
        let unit_price = product.price;

        transactions.push(Transaction {
            transaction_id: TransactionId::from_index(i),
            customer_id: customer.customer_id.clone(),
            product_id: product.product_id.clone(),
            transaction_date,
            quantity,
            unit_price,
            discount_pct,
            total_amount: Transaction::expected_total(unit_price, quantity, discount_pct),
        });
    }

    Ok(transactions)
}

#[cfg(test)]
#[path = "transaction_test.rs"]
mod tests;
