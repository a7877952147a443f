pub mod models;
pub mod services;

pub use models::{BillingSchedule, BillingSchedulePeriod};
pub use services::{BillingSchedulePeriodResolver, ProrationCalculator, ResolvedPeriods};
