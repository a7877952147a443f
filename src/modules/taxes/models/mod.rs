pub mod tax;

pub use tax::{TaxCategory, TaxRecord};
