use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::{BillingError, Currency, Result};
use crate::modules::discounts::models::Discount;
use crate::modules::discounts::services::DiscountApplier;
use crate::modules::orders::models::{
    BillingItem, ComputedBillingItems, DiscountBillItem, OrderItem, TaxBillItem,
};
use crate::modules::schedules::models::{BillingSchedule, BillingSchedulePeriod};
use crate::modules::schedules::services::{BillingSchedulePeriodResolver, ProrationCalculator};
use crate::modules::taxes::models::TaxRecord;
use crate::modules::taxes::services::TaxCalculator;

/// Builds the server-side billing expectation for one order item.
///
/// Pipeline per period: resolve the period set, prorate the billed
/// period, apply the discount at the period's index, compute tax on the
/// post-discount price, assemble the item. Pure over its arguments, so
/// repeated builds with the same inputs produce identical collections.
pub struct BillingItemBuilder;

impl BillingItemBuilder {
    pub fn build(
        order_item: &OrderItem,
        schedule: &BillingSchedule,
        discount: Option<&Discount>,
        tax: &TaxRecord,
        order_date: NaiveDate,
        currency: Currency,
    ) -> Result<ComputedBillingItems> {
        let resolved =
            BillingSchedulePeriodResolver::resolve(schedule, order_item.start_date, order_date)?;

        // the discount argument counts only when the order item asks for it
        let discount = match &order_item.discount_id {
            Some(id) => discount.filter(|d| &d.discount_id == id),
            None => None,
        };
        if let Some(d) = discount {
            if !d.is_available(order_item.start_date) {
                return Err(BillingError::DiscountNotAvailable {
                    discount_id: d.discount_id.clone(),
                    date: order_item.start_date,
                });
            }
        }

        let mut billed_at_order = Vec::new();
        let mut upcoming = Vec::with_capacity(resolved.upcoming.len());
        let mut period_index = 0usize;

        if let Some(period) = &resolved.billed {
            let price = ProrationCalculator::prorate(
                order_item.price,
                period,
                order_item.start_date,
                schedule.prorating_enabled,
                currency,
            );
            billed_at_order.push(Self::build_item(
                order_item,
                period,
                price,
                discount,
                tax,
                period_index,
                currency,
            )?);
            period_index += 1;
        }

        for period in &resolved.upcoming {
            upcoming.push(Self::build_item(
                order_item,
                period,
                order_item.price,
                discount,
                tax,
                period_index,
                currency,
            )?);
            period_index += 1;
        }

        info!(
            "built billing items for product {}: {} billed at order, {} upcoming",
            order_item.product_id,
            billed_at_order.len(),
            upcoming.len()
        );

        Ok(ComputedBillingItems {
            billed_at_order,
            upcoming,
        })
    }

    fn build_item(
        order_item: &OrderItem,
        period: &BillingSchedulePeriod,
        price: Decimal,
        discount: Option<&Discount>,
        tax: &TaxRecord,
        period_index: usize,
        currency: Currency,
    ) -> Result<BillingItem> {
        let applied = DiscountApplier::apply(
            &order_item.product_id,
            price,
            discount,
            period_index,
            currency,
        )?;

        let (final_price, discount_item) = match applied {
            Some(applied) => {
                let item = discount.map(|d| DiscountBillItem {
                    discount_id: d.discount_id.clone(),
                    discount_amount_type: d.amount_type,
                    discount_amount_value: d.amount_value,
                    discount_amount: applied.discount_amount,
                });
                (applied.final_price, item)
            }
            None => (price, None),
        };

        let tax_item = TaxBillItem {
            tax_id: tax.tax_id.clone(),
            tax_percentage: tax.percentage,
            tax_category: tax.category,
            tax_amount: TaxCalculator::tax_amount(final_price, tax, currency),
        };

        Ok(BillingItem {
            product_id: order_item.product_id.clone(),
            billing_schedule_period_id: period.billing_schedule_period_id.clone(),
            price,
            quantity: order_item.quantity.unwrap_or(1),
            tax_item,
            discount_item,
            final_price,
        })
    }
}
