pub mod billing_item_builder;
pub mod billing_item_validator;

pub use billing_item_builder::BillingItemBuilder;
pub use billing_item_validator::BillingItemValidator;
