pub mod period_resolver;
pub mod proration_calculator;

pub use period_resolver::{BillingSchedulePeriodResolver, ResolvedPeriods};
pub use proration_calculator::ProrationCalculator;
