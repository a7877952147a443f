use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::Currency;
use crate::modules::schedules::models::BillingSchedulePeriod;

/// Prorates the first billing period's charge for mid-period starts.
///
/// Uses whole-day granularity: the ratio is the days remaining from the
/// order start to the period end over the full period length. Only the
/// billed (first) period is ever prorated; upcoming periods always carry
/// the full price.
pub struct ProrationCalculator;

impl ProrationCalculator {
    /// Compute the prorated price for the billed period.
    ///
    /// Returns `full_price` unchanged when prorating is disabled or the
    /// order starts on the period's first day. The caller guarantees
    /// `order_start_date` lies inside the period, so the ratio is
    /// always in (0, 1].
    pub fn prorate(
        full_price: Decimal,
        period: &BillingSchedulePeriod,
        order_start_date: NaiveDate,
        prorating_enabled: bool,
        currency: Currency,
    ) -> Decimal {
        if !prorating_enabled || order_start_date <= period.start_date {
            return full_price;
        }

        let remaining_days = (period.end_date - order_start_date).num_days();
        let total_days = period.length_days();
        let ratio = Decimal::from(remaining_days) / Decimal::from(total_days);
        let prorated = currency.round(full_price * ratio);
        debug!(
            "prorated period {}: {}/{} days, {} -> {}",
            period.billing_schedule_period_id, remaining_days, total_days, full_price, prorated
        );
        prorated
    }
}
