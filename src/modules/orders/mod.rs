pub mod models;
pub mod services;

pub use models::{BillingItem, ComputedBillingItems, DiscountBillItem, OrderItem, TaxBillItem};
pub use services::{BillingItemBuilder, BillingItemValidator};
