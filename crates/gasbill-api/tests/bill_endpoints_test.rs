//! Endpoint tests for the bill calculation API
//!
//! The handlers are pure (no database, no cache), so these tests assert
//! complete responses.

use actix_web::{test, web, App};
use gasbill_api::{configure_bills, configure_tariff};
use gasbill_core::GasTariff;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

fn decimal_field(body: &serde_json::Value, name: &str) -> Decimal {
    let field = &body["bill"][name];
    match field {
        serde_json::Value::String(s) => Decimal::from_str(s).unwrap(),
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("unexpected value for {}: {:?}", name, other),
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(GasTariff::default()))
                .service(
                    web::scope("/api/v1")
                        .configure(configure_bills)
                        .configure(configure_tariff),
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_calculate_31_day_period() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 7648,
            "last_index": 7679,
            "start_date": "2024-10-14",
            "end_date": "2024-11-14"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!(true));

    assert_eq!(decimal_field(&body, "consumption_m3"), dec!(31));
    assert_eq!(decimal_field(&body, "daily_consumption_m3"), dec!(1));
    assert_eq!(decimal_field(&body, "monthly_projected_consumption_m3"), dec!(30));

    // Expected figures via the formula chain with the default tariff.
    let energy = dec!(31) * dec!(1.00089) * (dec!(9396.0129) / dec!(860.42));
    let total = energy * dec!(0.797288) * dec!(1.2);
    assert_eq!(decimal_field(&body, "energy_consumed_kwh"), energy);
    assert_eq!(decimal_field(&body, "total_cost_for_period"), total);
    assert_eq!(decimal_field(&body, "daily_cost"), total / dec!(31));
}

#[actix_web::test]
async fn test_calculate_zero_consumption() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 100,
            "last_index": 100,
            "start_date": "2024-01-01",
            "end_date": "2024-02-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(decimal_field(&body, "consumption_m3"), Decimal::ZERO);
    assert_eq!(decimal_field(&body, "energy_consumed_kwh"), Decimal::ZERO);
    assert_eq!(decimal_field(&body, "total_cost_for_period"), Decimal::ZERO);
}

#[actix_web::test]
async fn test_calculate_rejects_empty_period() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 100,
            "last_index": 150,
            "start_date": "2024-01-01",
            "end_date": "2024-01-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    // The request was answerable; the answer is a rejection.
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!(false));
    assert!(body["error"].as_str().unwrap().contains("end date"));
    assert!(body.get("bill").is_none() || body["bill"].is_null());
}

#[actix_web::test]
async fn test_calculate_rejects_decreasing_reading() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 50,
            "last_index": 40,
            "start_date": "2024-01-01",
            "end_date": "2024-02-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!(false));
    assert!(body["error"].as_str().unwrap().contains("meter reading"));
}

#[actix_web::test]
async fn test_calculate_rejects_negative_reading() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": -5,
            "last_index": 40,
            "start_date": "2024-01-01",
            "end_date": "2024-02-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!(false));
}

#[actix_web::test]
async fn test_calculate_missing_field_is_client_error() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 100,
            "start_date": "2024-01-01",
            "end_date": "2024-02-01"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_calculate_malformed_date_is_client_error() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 100,
            "last_index": 150,
            "start_date": "14/10/2024",
            "end_date": "2024-11-14"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_language_tag_is_accepted_and_ignored() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/bills/calculate")
        .set_json(serde_json::json!({
            "first_index": 0,
            "last_index": 10,
            "start_date": "2024-01-01",
            "end_date": "2024-01-11",
            "language": "ro"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], serde_json::json!(true));
    assert_eq!(decimal_field(&body, "daily_consumption_m3"), dec!(1));
}

#[actix_web::test]
async fn test_get_tariff() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/v1/tariff").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["standard_month_days"], serde_json::json!(30));
    let price = match &body["retail_energy_price"] {
        serde_json::Value::String(s) => Decimal::from_str(s).unwrap(),
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).unwrap(),
        other => panic!("unexpected retail_energy_price: {:?}", other),
    };
    assert_eq!(price, dec!(0.797288));
}
