// Property-based tests for inclusive-tax extraction.
//
// The inclusive tax amount is the portion already embedded in the final
// price, so removing it and adding it back must recover that price
// within rounding tolerance, and the amount can never exceed the price.

use billwise::core::Currency;
use billwise::taxes::models::{TaxCategory, TaxRecord};
use billwise::taxes::services::TaxCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;

proptest! {
    #[test]
    fn inclusive_tax_round_trips_within_tolerance(
        price in 0u64..1_000_000_000u64,
        tax_percent in 0u8..=100u8,
    ) {
        let tax = TaxRecord::new("tax-1", Decimal::from(tax_percent), TaxCategory::Inclusive);
        let final_price = Decimal::from(price);

        let tax_amount = TaxCalculator::tax_amount(final_price, &tax, Currency::USD);
        let price_without_tax = final_price - tax_amount;

        // round-trip: untaxed portion plus tax recovers the final price
        let round_trip = price_without_tax + tax_amount;
        prop_assert_eq!(round_trip, final_price);

        // the untaxed portion times (1 + rate) must land back on the
        // final price within one smallest currency unit
        let rate = Decimal::from(tax_percent) / Decimal::from(100);
        let rebuilt = price_without_tax * (Decimal::ONE + rate);
        let diff = (rebuilt - final_price).abs();
        prop_assert!(
            diff <= Currency::USD.smallest_unit() * (Decimal::ONE + rate),
            "rebuilt {} deviates from {} by {}",
            rebuilt,
            final_price,
            diff
        );
    }

    #[test]
    fn inclusive_tax_never_exceeds_the_price(
        price in 0u64..1_000_000_000u64,
        tax_percent in 0u8..=100u8,
    ) {
        let tax = TaxRecord::new("tax-1", Decimal::from(tax_percent), TaxCategory::Inclusive);
        let amount = TaxCalculator::tax_amount(Decimal::from(price), &tax, Currency::USD);

        prop_assert!(amount >= Decimal::ZERO, "tax amount {} below zero", amount);
        prop_assert!(
            amount <= Decimal::from(price),
            "inclusive tax {} above price {}",
            amount,
            price
        );
    }

    #[test]
    fn zero_percentage_produces_zero_tax(price in 0u64..1_000_000_000u64) {
        let tax = TaxRecord::new("tax-1", Decimal::ZERO, TaxCategory::Inclusive);
        let amount = TaxCalculator::tax_amount(Decimal::from(price), &tax, Currency::USD);
        prop_assert_eq!(amount, Decimal::ZERO);
    }

    #[test]
    fn exclusive_tax_is_proportional_to_the_price(
        price in 0u64..1_000_000_000u64,
        tax_percent in 0u8..=100u8,
    ) {
        let tax = TaxRecord::new("tax-1", Decimal::from(tax_percent), TaxCategory::Exclusive);
        let amount = TaxCalculator::tax_amount(Decimal::from(price), &tax, Currency::USD);

        let expected = (Decimal::from(price) * Decimal::from(tax_percent)
            / Decimal::from(100))
        .round_dp(Currency::USD.scale());
        prop_assert_eq!(amount, expected);
    }
}
