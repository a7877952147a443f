//! Billwise Order Pricing & Billing-Schedule Engine
//!
//! Given an order item (product, optional discount, start date) and the
//! product's recurring billing schedule, this library computes the
//! per-period bill items due now and upcoming, with proration ratios,
//! discount application, and inclusive tax, and validates a
//! client-submitted payload against that expectation.
//!
//! The crate is a pure library: all master data arrives as function
//! arguments and the computation is deterministic and side-effect-free.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::discounts;
pub use modules::orders;
pub use modules::schedules;
pub use modules::taxes;
