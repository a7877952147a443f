use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::discounts::models::DiscountAmountType;
use crate::modules::taxes::models::TaxCategory;

/// Tax sub-record attached to every billing item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBillItem {
    pub tax_id: String,
    pub tax_percentage: Decimal,
    pub tax_category: TaxCategory,
    pub tax_amount: Decimal,
}

/// Discount sub-record attached to a billing item the discount covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountBillItem {
    pub discount_id: String,
    pub discount_amount_type: DiscountAmountType,
    pub discount_amount_value: Decimal,
    pub discount_amount: Decimal,
}

/// One computed (or client-submitted) bill line for a billing period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingItem {
    pub product_id: String,
    pub billing_schedule_period_id: String,
    /// Period price after proration, before discount
    pub price: Decimal,
    pub quantity: i32,
    pub tax_item: TaxBillItem,
    pub discount_item: Option<DiscountBillItem>,
    /// Price after discount; inclusive tax is embedded within it
    pub final_price: Decimal,
}

/// The server-computed billing expectation for one order item: the
/// period due for immediate charge (at most one) and every later period.
/// The two collections never share a period id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedBillingItems {
    pub billed_at_order: Vec<BillingItem>,
    pub upcoming: Vec<BillingItem>,
}
