//! Bill calculation handlers
//!
//! HTTP handlers for the /bills API.

use actix_web::{web, HttpResponse};
use gasbill_core::{AppError, GasTariff};
use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::dto::bill::{CalculateBillRequest, CalculateBillResponse};

/// Calculate a bill from two meter readings and a billing period
///
/// POST /api/v1/bills/calculate
///
/// A calculation rejected by the core (backward period, decreasing
/// reading) is an answered request: it returns 200 with `success: false`.
/// Malformed bodies and negative readings are 400s.
#[instrument(skip(tariff, req))]
pub async fn calculate_bill(
    tariff: web::Data<GasTariff>,
    req: web::Json<CalculateBillRequest>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = req.validate() {
        warn!("Bill request validation failed: {}", e);
        return Ok(
            HttpResponse::BadRequest().json(CalculateBillResponse::failure(e.to_string()))
        );
    }

    if let Some(lang) = &req.language {
        debug!(language = %lang, "Language tag received (not interpreted)");
    }

    debug!(
        first_index = %req.first_index,
        last_index = %req.last_index,
        start_date = %req.start_date,
        end_date = %req.end_date,
        "Calculating bill"
    );

    let response = match tariff.calculate_bill(req.first_index, req.last_index, &req.period()) {
        Ok(bill) => CalculateBillResponse::ok(bill),
        Err(e) => {
            warn!("Bill calculation rejected: {}", e);
            CalculateBillResponse::failure(e.to_string())
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Configure bill routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/bills").route("/calculate", web::post().to(calculate_bill)));
}
