use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Japanese Yen (no decimal places)
    JPY,
    /// US Dollar (2 decimal places)
    USD,
    /// Vietnamese Dong (no decimal places)
    VND,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - JPY/VND: 0 (no decimals)
    /// - USD: 2 (2 decimal places)
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY | Currency::VND => 0,
            Currency::USD => 2,
        }
    }

    /// Rounds a monetary amount to this currency's scale.
    ///
    /// Uses `round_dp`'s banker's rounding (round-half-even), the single
    /// rounding rule applied everywhere in the pricing pipeline.
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Returns the smallest representable unit for this currency
    pub fn smallest_unit(&self) -> Decimal {
        match self {
            Currency::JPY | Currency::VND => Decimal::ONE,
            Currency::USD => Decimal::new(1, 2), // 0.01
        }
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        let scale = self.scale();
        if scale == 0 {
            format!("{} {}", self, amount.round_dp(0))
        } else {
            format!("{} {:.width$}", self, amount, width = scale as usize)
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::JPY => write!(f, "JPY"),
            Currency::USD => write!(f, "USD"),
            Currency::VND => write!(f, "VND"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JPY" => Ok(Currency::JPY),
            "USD" => Ok(Currency::USD),
            "VND" => Ok(Currency::VND),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
