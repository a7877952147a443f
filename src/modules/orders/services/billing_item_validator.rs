use tracing::warn;

use crate::core::{BillingError, Currency, Result};
use crate::modules::orders::models::{BillingItem, ComputedBillingItems};

/// Checks a client-submitted order payload against the server-computed
/// billing expectation.
///
/// The order is validated as a whole: the first mismatch found rejects
/// it, and the caller is expected to roll back the enclosing
/// transaction. Checks run in a fixed sequence: billed count, upcoming
/// count, then per ordinal position the period id, price, tax
/// percentage, tax amount, and final price. Monetary comparisons round
/// both sides to the currency's scale first.
pub struct BillingItemValidator;

impl BillingItemValidator {
    pub fn validate(
        submitted_billed: &[BillingItem],
        submitted_upcoming: &[BillingItem],
        expected: &ComputedBillingItems,
        currency: Currency,
    ) -> Result<()> {
        if submitted_billed.len() != expected.billed_at_order.len() {
            return Self::reject(BillingError::BilledItemsCountMismatch {
                expected: expected.billed_at_order.len(),
                actual: submitted_billed.len(),
            });
        }

        if submitted_upcoming.len() != expected.upcoming.len() {
            return Self::reject(BillingError::UpcomingItemsCountMismatch {
                expected: expected.upcoming.len(),
                actual: submitted_upcoming.len(),
            });
        }

        // an upcoming item must not claim the period already billed at order
        if let Some(billed) = expected.billed_at_order.first() {
            if submitted_upcoming
                .iter()
                .any(|i| i.billing_schedule_period_id == billed.billing_schedule_period_id)
            {
                return Self::reject(BillingError::UpcomingItemsCountMismatch {
                    expected: expected.upcoming.len(),
                    actual: submitted_upcoming.len(),
                });
            }
        }

        for (submitted, expected) in submitted_billed.iter().zip(&expected.billed_at_order) {
            Self::check_item(submitted, expected, currency)?;
        }
        for (submitted, expected) in submitted_upcoming.iter().zip(&expected.upcoming) {
            Self::check_item(submitted, expected, currency)?;
        }

        Ok(())
    }

    fn check_item(
        submitted: &BillingItem,
        expected: &BillingItem,
        currency: Currency,
    ) -> Result<()> {
        if submitted.billing_schedule_period_id != expected.billing_schedule_period_id {
            return Self::reject(BillingError::WrongBillingPeriodReferenced {
                product_id: expected.product_id.clone(),
                expected: expected.billing_schedule_period_id.clone(),
                actual: submitted.billing_schedule_period_id.clone(),
            });
        }

        if currency.round(submitted.price) != currency.round(expected.price) {
            return Self::reject(BillingError::RatioMismatch {
                product_id: expected.product_id.clone(),
                expected: expected.price,
                actual: submitted.price,
            });
        }

        if submitted.tax_item.tax_percentage != expected.tax_item.tax_percentage {
            return Self::reject(BillingError::TaxPercentageMismatch {
                product_id: expected.product_id.clone(),
                expected: expected.tax_item.tax_percentage,
                actual: submitted.tax_item.tax_percentage,
            });
        }

        if currency.round(submitted.tax_item.tax_amount)
            != currency.round(expected.tax_item.tax_amount)
        {
            return Self::reject(BillingError::TaxAmountMismatch {
                product_id: expected.product_id.clone(),
                expected: expected.tax_item.tax_amount,
                actual: submitted.tax_item.tax_amount,
            });
        }

        if currency.round(submitted.final_price) != currency.round(expected.final_price) {
            return Self::reject(BillingError::FinalPriceMismatch {
                product_id: expected.product_id.clone(),
                expected: expected.final_price,
                actual: submitted.final_price,
            });
        }

        Ok(())
    }

    fn reject(error: BillingError) -> Result<()> {
        warn!("billing item validation failed: {}", error);
        Err(error)
    }
}
