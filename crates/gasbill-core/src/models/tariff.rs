//! Gas tariff model
//!
//! Holds the physical and commercial constants of the supply contract
//! and performs the bill calculation itself.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::bill::{BillBreakdown, BillingPeriod};
use crate::AppResult;

/// Gas tariff constants
///
/// Immutable configuration: loaded once at startup, passed by reference,
/// never mutated. Deployments with different figures override individual
/// fields via the configuration layer rather than code variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasTariff {
    /// Factor adjusting metered volume to standard temperature/pressure
    #[serde(default = "default_correction_coefficient")]
    pub correction_coefficient: Decimal,

    /// Upper calorific value of the delivered gas (kcal/m³)
    #[serde(default = "default_upper_calorific_value")]
    pub upper_calorific_value: Decimal,

    /// Kilocalories per kilowatt-hour
    #[serde(default = "default_kcal_per_kwh")]
    pub kcal_per_kwh: Decimal,

    /// Retail price per kWh of delivered energy, before tax
    #[serde(default = "default_retail_energy_price")]
    pub retail_energy_price: Decimal,

    /// Tax rate as a fraction (0.2 = 20%)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Month length used for monthly projections, in days
    #[serde(default = "default_standard_month_days")]
    pub standard_month_days: u32,
}

fn default_correction_coefficient() -> Decimal {
    dec!(1.00089)
}

fn default_upper_calorific_value() -> Decimal {
    dec!(9396.0129)
}

fn default_kcal_per_kwh() -> Decimal {
    dec!(860.42)
}

fn default_retail_energy_price() -> Decimal {
    dec!(0.797288)
}

fn default_tax_rate() -> Decimal {
    dec!(0.2)
}

fn default_standard_month_days() -> u32 {
    30
}

impl GasTariff {
    /// Calculate the bill for one period from two meter readings
    ///
    /// Validation happens before any arithmetic: a period whose end is
    /// not after its start, or a final reading below the initial one,
    /// is rejected with `AppError::InvalidInput` and produces no
    /// partial result.
    ///
    /// The monthly figures are a flat projection of the daily rate onto
    /// `standard_month_days`, regardless of the actual period length.
    pub fn calculate_bill(
        &self,
        first_index: Decimal,
        last_index: Decimal,
        period: &BillingPeriod,
    ) -> AppResult<BillBreakdown> {
        if period.end_date <= period.start_date {
            return Err(AppError::InvalidInput(
                "end date must be after start date".to_string(),
            ));
        }
        if last_index < first_index {
            return Err(AppError::InvalidInput(
                "final meter reading must not be less than the initial reading".to_string(),
            ));
        }

        let consumption = last_index - first_index;
        let days = Decimal::from(period.days());
        let month_days = Decimal::from(self.standard_month_days);

        let daily_consumption = consumption / days;
        let monthly_consumption = daily_consumption * month_days;

        // Volume to energy: correct to standard conditions, then apply
        // the calorific value expressed in kWh per cubic meter.
        let adjusted_consumption = consumption * self.correction_coefficient;
        let kwh_per_m3 = self.upper_calorific_value / self.kcal_per_kwh;
        let energy_consumed = adjusted_consumption * kwh_per_m3;

        let base_cost = energy_consumed * self.retail_energy_price;
        let total_cost = base_cost * (Decimal::ONE + self.tax_rate);
        let daily_cost = total_cost / days;
        let projected_monthly_cost = daily_cost * month_days;

        Ok(BillBreakdown {
            consumption_m3: consumption,
            daily_consumption_m3: daily_consumption,
            monthly_projected_consumption_m3: monthly_consumption,
            energy_consumed_kwh: energy_consumed,
            daily_cost,
            projected_monthly_cost,
            total_cost_for_period: total_cost,
        })
    }

    /// Calorific value converted to kWh per cubic meter
    #[inline]
    pub fn kwh_per_m3(&self) -> Decimal {
        self.upper_calorific_value / self.kcal_per_kwh
    }
}

impl Default for GasTariff {
    fn default() -> Self {
        Self {
            correction_coefficient: default_correction_coefficient(),
            upper_calorific_value: default_upper_calorific_value(),
            kcal_per_kwh: default_kcal_per_kwh(),
            retail_energy_price: default_retail_energy_price(),
            tax_rate: default_tax_rate(),
            standard_month_days: default_standard_month_days(),
        }
    }
}
