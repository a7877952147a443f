use rust_decimal::Decimal;

use crate::core::Currency;
use crate::modules::taxes::models::{TaxCategory, TaxRecord};

/// Computes the tax amount carried by a billing item's final price.
pub struct TaxCalculator;

impl TaxCalculator {
    /// Compute the tax amount for a (possibly discounted, possibly
    /// prorated) final price.
    ///
    /// Inclusive tax is the portion already embedded in the price:
    /// `price - price / (1 + p/100)`. Exclusive tax is charged on top:
    /// `price * p/100`; it never changes the final price itself. Both
    /// are rounded to the currency's scale.
    pub fn tax_amount(final_price: Decimal, tax: &TaxRecord, currency: Currency) -> Decimal {
        let rate = tax.percentage / Decimal::ONE_HUNDRED;
        let amount = match tax.category {
            TaxCategory::Inclusive => final_price - final_price / (Decimal::ONE + rate),
            TaxCategory::Exclusive => final_price * rate,
        };
        currency.round(amount)
    }
}
