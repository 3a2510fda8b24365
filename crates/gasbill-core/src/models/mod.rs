//! Domain models for GasBill

pub mod bill;
pub mod tariff;

pub use bill::{BillBreakdown, BillingPeriod};
pub use tariff::GasTariff;
