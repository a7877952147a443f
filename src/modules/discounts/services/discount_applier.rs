use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{BillingError, Currency, Result};
use crate::modules::discounts::models::{Discount, DiscountAmountType};

/// Result of applying a discount to one period's price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedDiscount {
    pub discount_amount: Decimal,
    pub final_price: Decimal,
}

/// Applies a discount record to a single billing period's price.
pub struct DiscountApplier;

impl DiscountApplier {
    /// Compute the discount amount and discounted price for the period
    /// at `period_index` (0 = first resolved period).
    ///
    /// Returns `None` when no discount is given or the discount's valid
    /// duration has run out for this period, in which case the caller
    /// bills the full price. A discount amount larger than the price is
    /// rejected with `MaximumDiscountExceeded`; an amount equal to the
    /// price (a 100% discount) is allowed and yields a zero final price.
    pub fn apply(
        product_id: &str,
        price: Decimal,
        discount: Option<&Discount>,
        period_index: usize,
        currency: Currency,
    ) -> Result<Option<AppliedDiscount>> {
        let discount = match discount {
            Some(d) if d.covers_period(period_index) => d,
            _ => return Ok(None),
        };

        let discount_amount = match discount.amount_type {
            DiscountAmountType::FixedAmount => discount.amount_value,
            DiscountAmountType::Percentage => {
                currency.round(price * discount.amount_value / Decimal::ONE_HUNDRED)
            }
        };

        if discount_amount > price {
            return Err(BillingError::MaximumDiscountExceeded {
                product_id: product_id.to_string(),
                discount_id: discount.discount_id.clone(),
                discount_amount,
                price,
            });
        }

        debug!(
            "discount {} on product {} period {}: {} off {}",
            discount.discount_id, product_id, period_index, discount_amount, price
        );

        Ok(Some(AppliedDiscount {
            discount_amount,
            final_price: price - discount_amount,
        }))
    }
}
