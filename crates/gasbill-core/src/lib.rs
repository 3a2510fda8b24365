//! GasBill Core Library
//!
//! This crate provides the foundational types and logic for the GasBill
//! system. It includes:
//!
//! - Domain models (GasTariff, BillingPeriod, BillBreakdown)
//! - The bill calculation itself (pure, no I/O)
//! - Unified error handling with HTTP response mapping
//! - Application configuration

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::AppError;
pub use models::{BillBreakdown, BillingPeriod, GasTariff};

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
