//! Billing period and bill breakdown models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billing period delimited by two calendar dates
///
/// Period length is a whole-day calendar difference. No timezones,
/// no fractional days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// First day of the period (date of the initial meter reading)
    pub start_date: NaiveDate,

    /// Last day of the period (date of the final meter reading)
    pub end_date: NaiveDate,
}

impl BillingPeriod {
    /// Create a period from its two dates
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Period length in whole days
    ///
    /// Negative or zero when `end_date <= start_date`; such periods are
    /// rejected by the bill calculation before any division happens.
    #[inline]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Consumption and cost breakdown for one billing period
///
/// All fields are derived from the inputs and the tariff; the record has
/// no identity and is never persisted. No rounding is applied here —
/// two-decimal rounding is a presentation concern of the callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBreakdown {
    /// Gas consumed over the period (m³)
    pub consumption_m3: Decimal,

    /// Average consumption per day (m³)
    pub daily_consumption_m3: Decimal,

    /// Daily consumption projected onto a standard-length month (m³)
    pub monthly_projected_consumption_m3: Decimal,

    /// Energy delivered over the period (kWh)
    pub energy_consumed_kwh: Decimal,

    /// Average cost per day, tax included
    pub daily_cost: Decimal,

    /// Daily cost projected onto a standard-length month
    pub projected_monthly_cost: Decimal,

    /// Total cost for the period, tax included
    pub total_cost_for_period: Decimal,
}
