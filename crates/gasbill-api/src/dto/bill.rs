//! Bill calculation DTOs
//!
//! Request and response types for the bill calculation endpoint.

use chrono::NaiveDate;
use gasbill_core::{BillBreakdown, BillingPeriod};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Bill calculation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculateBillRequest {
    /// Initial meter reading (m³)
    #[validate(custom(function = validate_reading))]
    pub first_index: Decimal,

    /// Final meter reading (m³)
    #[validate(custom(function = validate_reading))]
    pub last_index: Decimal,

    /// First day of the billing period (YYYY-MM-DD)
    pub start_date: NaiveDate,

    /// Last day of the billing period (YYYY-MM-DD)
    pub end_date: NaiveDate,

    /// Opaque language tag supplied by the caller; logged, never
    /// interpreted by the server.
    #[validate(length(max = 35))]
    pub language: Option<String>,
}

fn validate_reading(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut err = ValidationError::new("negative_reading");
        err.message = Some("meter readings must be non-negative".into());
        return Err(err);
    }
    Ok(())
}

impl CalculateBillRequest {
    /// The billing period carried by this request
    pub fn period(&self) -> BillingPeriod {
        BillingPeriod::new(self.start_date, self.end_date)
    }
}

/// Bill breakdown as returned on the wire
///
/// Amounts are serialized as decimal strings at full precision;
/// two-decimal rounding is left to the consumer.
#[derive(Debug, Clone, Serialize)]
pub struct BillBreakdownDto {
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

impl From<BillBreakdown> for BillBreakdownDto {
    fn from(bill: BillBreakdown) -> Self {
        Self {
            consumption_m3: bill.consumption_m3,
            daily_consumption_m3: bill.daily_consumption_m3,
            monthly_projected_consumption_m3: bill.monthly_projected_consumption_m3,
            energy_consumed_kwh: bill.energy_consumed_kwh,
            daily_cost: bill.daily_cost,
            projected_monthly_cost: bill.projected_monthly_cost,
            total_cost_for_period: bill.total_cost_for_period,
        }
    }
}

/// Bill calculation response envelope
///
/// Always carries a `success` flag; a rejected calculation is still an
/// answered request, so it is reported here rather than raised past the
/// boundary.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateBillResponse {
    /// Whether the calculation ran
    pub success: bool,

    /// The computed breakdown, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill: Option<BillBreakdownDto>,

    /// Human-readable rejection reason, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculateBillResponse {
    /// Successful calculation
    pub fn ok(bill: BillBreakdown) -> Self {
        Self {
            success: true,
            bill: Some(bill.into()),
            error: None,
        }
    }

    /// Failed calculation or rejected request
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            bill: None,
            error: Some(reason.into()),
        }
    }
}
