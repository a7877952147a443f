use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product line of an order submission, the anchor from which
/// billing period resolution begins.
///
/// `price` is the product's per-period list price, resolved from master
/// data by the calling service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub discount_id: Option<String>,
    pub start_date: NaiveDate,
    /// Defaults to 1 when unset
    pub quantity: Option<i32>,
    pub price: Decimal,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, start_date: NaiveDate, price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            discount_id: None,
            start_date,
            quantity: None,
            price,
        }
    }

    pub fn with_discount(mut self, discount_id: impl Into<String>) -> Self {
        self.discount_id = Some(discount_id.into());
        self
    }
}
