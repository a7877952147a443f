pub mod models;
pub mod services;

pub use models::{TaxCategory, TaxRecord};
pub use services::TaxCalculator;
