pub mod discount;

pub use discount::{Discount, DiscountAmountType};
