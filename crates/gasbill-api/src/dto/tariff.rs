//! Tariff DTOs

use gasbill_core::GasTariff;
use rust_decimal::Decimal;
use serde::Serialize;

/// Read-only view of the active tariff constants
#[derive(Debug, Clone, Serialize)]
pub struct TariffResponse {
    /// Factor adjusting metered volume to standard conditions
    pub correction_coefficient: Decimal,

    /// Upper calorific value of the delivered gas (kcal/m³)
    pub upper_calorific_value: Decimal,

    /// Kilocalories per kilowatt-hour
    pub kcal_per_kwh: Decimal,

    /// Retail price per kWh, before tax
    pub retail_energy_price: Decimal,

    /// Tax rate as a fraction
    pub tax_rate: Decimal,

    /// Month length used for monthly projections, in days
    pub standard_month_days: u32,
}

impl From<GasTariff> for TariffResponse {
    fn from(tariff: GasTariff) -> Self {
        Self {
            correction_coefficient: tariff.correction_coefficient,
            upper_calorific_value: tariff.upper_calorific_value,
            kcal_per_kwh: tariff.kcal_per_kwh,
            retail_energy_price: tariff.retail_energy_price,
            tax_rate: tariff.tax_rate,
            standard_month_days: tariff.standard_month_days,
        }
    }
}
