//! HTTP request handlers

pub mod bill;
pub mod tariff;

pub use bill::configure as configure_bills;
pub use tariff::configure as configure_tariff;
