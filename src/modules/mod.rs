pub mod discounts;
pub mod orders;
pub mod schedules;
pub mod taxes;
