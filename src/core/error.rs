use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors raised while computing or validating an order's billing items.
///
/// Mismatch variants always carry the product id plus the expected and
/// actual values, in that order, so the calling service can format a
/// client-facing message without re-deriving anything.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BillingError {
    /// Order start date falls outside every period of the schedule
    #[error("order start date {start_date} is outside the billing schedule range")]
    OutOfScheduleRange { start_date: NaiveDate },

    /// New order attempted against an archived billing schedule
    #[error("billing schedule {schedule_id} is archived and cannot be used for a new order")]
    ArchivedScheduleUsed { schedule_id: String },

    /// Discount amount would exceed the item's pre-discount price
    #[error(
        "product {product_id}: discount {discount_id} amount {discount_amount} exceeds price {price}"
    )]
    MaximumDiscountExceeded {
        product_id: String,
        discount_id: String,
        discount_amount: Decimal,
        price: Decimal,
    },

    /// Referenced discount is outside its availability window
    #[error("discount {discount_id} is not available on {date}")]
    DiscountNotAvailable { discount_id: String, date: NaiveDate },

    /// Submitted billed-at-order item count differs from the server expectation
    #[error("expected {expected} billed at order item(s), got {actual}")]
    BilledItemsCountMismatch { expected: usize, actual: usize },

    /// Submitted upcoming item count differs, or an upcoming item
    /// references the period already billed at order
    #[error("expected {expected} upcoming billing item(s), got {actual}")]
    UpcomingItemsCountMismatch { expected: usize, actual: usize },

    /// Submitted item references the wrong billing schedule period
    #[error("product {product_id}: wrong billing schedule period, expected {expected}, got {actual}")]
    WrongBillingPeriodReferenced {
        product_id: String,
        expected: String,
        actual: String,
    },

    /// Submitted price does not reflect the correct billing ratio
    #[error("product {product_id}: incorrect billing ratio applied, expected price {expected}, got {actual}")]
    RatioMismatch {
        product_id: String,
        expected: Decimal,
        actual: Decimal,
    },

    /// Submitted tax percentage differs from the product's tax record
    #[error("product {product_id}: incorrect tax percentage, expected {expected}, got {actual}")]
    TaxPercentageMismatch {
        product_id: String,
        expected: Decimal,
        actual: Decimal,
    },

    /// Submitted tax amount differs from the recomputed value
    #[error("product {product_id}: incorrect tax amount, expected {expected}, got {actual}")]
    TaxAmountMismatch {
        product_id: String,
        expected: Decimal,
        actual: Decimal,
    },

    /// Submitted final price differs, commonly from a missing or
    /// incorrectly applied discount
    #[error("product {product_id}: incorrect final price, expected {expected}, got {actual}")]
    FinalPriceMismatch {
        product_id: String,
        expected: Decimal,
        actual: Decimal,
    },
}
