//! Customer table generation

use crate::sampling::{pick_uniform, pick_weighted};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use sd_core::{Column, CustomerId, TableRecord, Value};
use serde::Serialize;
use std::fmt;

/// Earliest registration date
pub const REGISTRATION_START: (i32, u32, u32) = (2022, 1, 1);

/// Registration dates fall within `REGISTRATION_START + 0..=700` days
pub const REGISTRATION_WINDOW_DAYS: i64 = 700;

/// Customer country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Germany,
    France,
    Canada,
    Australia,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Usa,
        Country::Uk,
        Country::Germany,
        Country::France,
        Country::Canada,
        Country::Australia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    New,
    Regular,
    #[serde(rename = "VIP")]
    Vip,
}

impl Segment {
    /// Prior probability of each segment
    pub const WEIGHTS: [(Segment, f64); 3] = [
        (Segment::New, 0.40),
        (Segment::Regular, 0.45),
        (Segment::Vip, 0.15),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::New => "New",
            Segment::Regular => "Regular",
            Segment::Vip => "VIP",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub registration_date: NaiveDate,
    pub country: Country,
    pub segment: Segment,
}

impl TableRecord for Customer {
    const TABLE_NAME: &'static str = "customers";

    fn columns() -> Vec<Column> {
        vec![
            Column::identifier("customer_id"),
            Column::new("registration_date"),
            Column::new("country"),
            Column::new("segment"),
        ]
    }

    fn to_row(&self) -> Vec<Option<Value>> {
        vec![
            Some(self.customer_id.as_str().into()),
            Some(self.registration_date.into()),
            Some(self.country.as_str().into()),
            Some(self.segment.as_str().into()),
        ]
    }
}

fn registration_start() -> NaiveDate {
    let (y, m, d) = REGISTRATION_START;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Generate `count` customers with ids `CUST_00000` onwards.
///
/// Each field is drawn independently per record: registration date uniform
/// over the window, country uniform, segment by [`Segment::WEIGHTS`].
pub fn generate_customers<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Customer> {
    log::info!("Generating {} customers", count);

    let start = registration_start();
    (0..count)
        .map(|i| {
            let offset = rng.gen_range(0..=REGISTRATION_WINDOW_DAYS);
            Customer {
                customer_id: CustomerId::from_index(i),
                registration_date: start + Duration::days(offset),
                country: pick_uniform(&Country::ALL, rng),
                segment: pick_weighted(&Segment::WEIGHTS, rng),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "customer_test.rs"]
mod tests;
