pub mod models;
pub mod services;

pub use models::{Discount, DiscountAmountType};
pub use services::{AppliedDiscount, DiscountApplier};
