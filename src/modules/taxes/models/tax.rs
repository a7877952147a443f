use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether tax is embedded in the quoted price or charged on top of it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    /// Tax is already part of the price and is extracted from it
    Inclusive,
    /// Tax is added on top of the price
    Exclusive,
}

impl TaxCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inclusive => "inclusive",
            Self::Exclusive => "exclusive",
        }
    }
}

impl std::fmt::Display for TaxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for TaxCategory {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            _ => Err(format!("Invalid tax category: {}", value)),
        }
    }
}

/// Master-data tax record associated with a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRecord {
    pub tax_id: String,
    pub percentage: Decimal,
    pub category: TaxCategory,
}

impl TaxRecord {
    pub fn new(tax_id: impl Into<String>, percentage: Decimal, category: TaxCategory) -> Self {
        Self {
            tax_id: tax_id.into(),
            percentage,
            category,
        }
    }
}
