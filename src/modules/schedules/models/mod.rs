pub mod billing_schedule;

pub use billing_schedule::{BillingSchedule, BillingSchedulePeriod};
