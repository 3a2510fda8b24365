//! Tariff handlers
//!
//! Read-only introspection of the active tariff constants.

use actix_web::{web, HttpResponse};
use gasbill_core::{AppError, GasTariff};
use tracing::instrument;

use crate::dto::tariff::TariffResponse;

/// Get the active tariff constants
///
/// GET /api/v1/tariff
#[instrument(skip(tariff))]
pub async fn get_tariff(tariff: web::Data<GasTariff>) -> Result<HttpResponse, AppError> {
    let response = TariffResponse::from(tariff.get_ref().clone());
    Ok(HttpResponse::Ok().json(response))
}

/// Configure tariff routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/tariff").route("", web::get().to(get_tariff)));
}
