//! Strongly-typed row identifiers.

use crate::newtype_id::define_sequential_id;

define_sequential_id! {
    /// A customer identifier, `CUST_00000` onwards.
    pub struct CustomerId = ("CUST", 5);
}

define_sequential_id! {
    /// A product identifier, `PROD_00000` onwards.
    pub struct ProductId = ("PROD", 5);
}

define_sequential_id! {
    /// A transaction identifier, `TXN_000000` onwards.
    pub struct TransactionId = ("TXN", 6);
}
