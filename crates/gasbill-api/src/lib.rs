//! API layer for GasBill
//!
//! HTTP DTOs and handlers for the bill calculation and tariff endpoints.

#![forbid(unsafe_code)]

pub mod dto;
pub mod handlers;

pub use handlers::{configure_bills, configure_tariff};
