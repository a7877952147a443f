// Property-based tests for first-period proration.
//
// For any period and any start date inside it, the prorated price must
// stay within [0, full_price], equal the full price when the order
// starts on the period's first day, and ignore the start date entirely
// when prorating is disabled.

use billwise::core::Currency;
use billwise::schedules::models::BillingSchedulePeriod;
use billwise::schedules::services::ProrationCalculator;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn period_of(start: NaiveDate, length_days: u64) -> BillingSchedulePeriod {
    BillingSchedulePeriod {
        billing_schedule_period_id: "period-0".to_string(),
        billing_schedule_id: "schedule-1".to_string(),
        start_date: start,
        end_date: start + Days::new(length_days),
        billing_date: start,
    }
}

proptest! {
    #[test]
    fn prorated_price_stays_within_bounds(
        price in 1u64..10_000_000u64,
        length_days in 1u64..366u64,
        offset in 0u64..366u64,
    ) {
        let offset = offset % length_days;
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let period = period_of(start, length_days);
        let full_price = Decimal::from(price);

        let prorated = ProrationCalculator::prorate(
            full_price,
            &period,
            start + Days::new(offset),
            true,
            Currency::USD,
        );

        prop_assert!(prorated >= Decimal::ZERO, "prorated {} below zero", prorated);
        prop_assert!(prorated <= full_price, "prorated {} above full {}", prorated, full_price);
    }

    #[test]
    fn start_on_period_start_yields_full_price(
        price in 1u64..10_000_000u64,
        length_days in 1u64..366u64,
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let period = period_of(start, length_days);
        let full_price = Decimal::from(price);

        let prorated =
            ProrationCalculator::prorate(full_price, &period, start, true, Currency::USD);

        prop_assert_eq!(prorated, full_price);
    }

    #[test]
    fn disabled_prorating_ignores_the_start_date(
        price in 1u64..10_000_000u64,
        length_days in 1u64..366u64,
        offset in 0u64..366u64,
    ) {
        let offset = offset % length_days;
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let period = period_of(start, length_days);
        let full_price = Decimal::from(price);

        let prorated = ProrationCalculator::prorate(
            full_price,
            &period,
            start + Days::new(offset),
            false,
            Currency::USD,
        );

        prop_assert_eq!(prorated, full_price);
    }

    #[test]
    fn proration_is_deterministic(
        price in 1u64..10_000_000u64,
        length_days in 1u64..366u64,
        offset in 0u64..366u64,
    ) {
        let offset = offset % length_days;
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let period = period_of(start, length_days);
        let full_price = Decimal::from(price);
        let order_start = start + Days::new(offset);

        let first =
            ProrationCalculator::prorate(full_price, &period, order_start, true, Currency::USD);
        let second =
            ProrationCalculator::prorate(full_price, &period, order_start, true, Currency::USD);

        prop_assert_eq!(first, second);
    }
}
