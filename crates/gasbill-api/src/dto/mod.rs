//! Data Transfer Objects (DTOs) for API requests and responses

pub mod bill;
pub mod tariff;

pub use bill::*;
pub use tariff::*;
