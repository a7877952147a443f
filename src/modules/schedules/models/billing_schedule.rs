use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named recurring billing schedule and its ordered periods
///
/// Periods are contiguous, non-overlapping, and ordered by start date.
/// Archived schedules are master data kept for existing orders only and
/// cannot back a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingSchedule {
    pub billing_schedule_id: String,
    pub name: String,
    /// Archived schedules reject new orders
    pub is_archived: bool,
    /// When disabled, a partial first period is charged at full price
    pub prorating_enabled: bool,
    pub periods: Vec<BillingSchedulePeriod>,
}

impl BillingSchedule {
    pub fn new(billing_schedule_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            billing_schedule_id: billing_schedule_id.into(),
            name: name.into(),
            is_archived: false,
            prorating_enabled: true,
            periods: Vec::new(),
        }
    }
}

/// One half-open billing interval `[start_date, end_date)` of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingSchedulePeriod {
    pub billing_schedule_period_id: String,
    pub billing_schedule_id: String,
    pub start_date: NaiveDate,
    /// Exclusive upper bound
    pub end_date: NaiveDate,
    /// Date on which this period becomes due for charging; a period is
    /// billed at order time only once its billing date has arrived
    pub billing_date: NaiveDate,
}

impl BillingSchedulePeriod {
    /// Whether `date` falls inside this period's half-open interval
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date < self.end_date
    }

    /// Full period length in whole days
    pub fn length_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
