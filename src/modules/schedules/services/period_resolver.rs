use chrono::NaiveDate;
use tracing::debug;

use crate::core::{BillingError, Result};
use crate::modules::schedules::models::{BillingSchedule, BillingSchedulePeriod};

/// Periods an order resolves to: the one due for immediate charge (if
/// any) and every later period of the schedule, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriods {
    pub billed: Option<BillingSchedulePeriod>,
    pub upcoming: Vec<BillingSchedulePeriod>,
}

/// Locates the billing periods applicable to an order start date.
pub struct BillingSchedulePeriodResolver;

impl BillingSchedulePeriodResolver {
    /// Resolve the billed and upcoming periods for an order.
    ///
    /// `start_date` anchors the resolution; `order_date` is the order
    /// submission date and decides whether the first resolved period is
    /// already due. Both are explicit arguments, so the same inputs
    /// always resolve to the same period set.
    ///
    /// The period containing `start_date` is billed at order time only
    /// when its billing date is on or before `order_date`; otherwise no
    /// charge is due yet and that period heads the upcoming list.
    pub fn resolve(
        schedule: &BillingSchedule,
        start_date: NaiveDate,
        order_date: NaiveDate,
    ) -> Result<ResolvedPeriods> {
        if schedule.is_archived {
            return Err(BillingError::ArchivedScheduleUsed {
                schedule_id: schedule.billing_schedule_id.clone(),
            });
        }

        let last_end = match schedule.periods.last() {
            Some(last) => last.end_date,
            None => return Err(BillingError::OutOfScheduleRange { start_date }),
        };
        let first_start = schedule.periods[0].start_date;
        if start_date < first_start || start_date >= last_end {
            return Err(BillingError::OutOfScheduleRange { start_date });
        }

        let index = schedule
            .periods
            .iter()
            .position(|p| p.contains(start_date))
            .ok_or(BillingError::OutOfScheduleRange { start_date })?;

        let current = &schedule.periods[index];
        let due = current.billing_date <= order_date;
        debug!(
            "resolved schedule {} period {} for start date {} (due: {})",
            schedule.billing_schedule_id,
            current.billing_schedule_period_id,
            start_date,
            due
        );

        let (billed, upcoming_from) = if due {
            (Some(current.clone()), index + 1)
        } else {
            (None, index)
        };

        Ok(ResolvedPeriods {
            billed,
            upcoming: schedule.periods[upcoming_from..].to_vec(),
        })
    }
}
