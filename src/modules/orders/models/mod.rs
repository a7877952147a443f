pub mod billing_item;
pub mod order_item;

pub use billing_item::{BillingItem, ComputedBillingItems, DiscountBillItem, TaxBillItem};
pub use order_item::OrderItem;
