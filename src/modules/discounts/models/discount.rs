use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a discount's amount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountAmountType {
    /// `amount_value` is subtracted from the price as-is
    FixedAmount,
    /// `amount_value` is a percentage of the price
    Percentage,
}

impl DiscountAmountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedAmount => "fixed_amount",
            Self::Percentage => "percentage",
        }
    }
}

impl std::fmt::Display for DiscountAmountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for DiscountAmountType {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "fixed_amount" => Ok(Self::FixedAmount),
            "percentage" => Ok(Self::Percentage),
            _ => Err(format!("Invalid discount amount type: {}", value)),
        }
    }
}

/// Master-data discount record referenced by an order item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    pub discount_id: String,
    pub name: String,
    pub amount_type: DiscountAmountType,
    pub amount_value: Decimal,
    /// Number of leading billing periods the discount covers;
    /// `None` applies it to every resolved period
    pub recurring_valid_duration: Option<u32>,
    pub available_from: NaiveDate,
    pub available_until: NaiveDate,
}

impl Discount {
    /// Whether the discount may be attached to an order starting on `date`
    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.available_from <= date && date <= self.available_until
    }

    /// Whether the discount still covers the period at `period_index`
    /// (0 = first resolved period)
    pub fn covers_period(&self, period_index: usize) -> bool {
        match self.recurring_valid_duration {
            Some(duration) => (period_index as u32) < duration,
            None => true,
        }
    }
}
