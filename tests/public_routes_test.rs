mod common;

use actix_web::test;
use serde_json::json;

use common::TestApp;

#[actix_rt::test]
async fn test_health_check() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "OK");
}

#[actix_rt::test]
async fn test_fleet_returns_full_catalog() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get().uri("/api/fleet").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let fleet = body.as_array().unwrap();
    assert_eq!(fleet.len(), 6);

    let slugs: Vec<&str> = fleet
        .iter()
        .map(|v| v["slug"].as_str().unwrap())
        .collect();
    assert!(slugs.contains(&"toyota-commuter-vip"));
    assert!(slugs.contains(&"toyota-alphard-executive"));
}

#[actix_rt::test]
async fn test_quote_airport_transfer_with_estimate() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/quote")
        .set_json(json!({
            "service_type": "airport",
            "airport": "สุวรรณภูมิ (BKK)",
            "destination": "กรุงเทพ ในเมือง",
            "passengers": 4
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["estimate"]["sedan_price"], 1200);
    assert_eq!(body["estimate"]["van_price"], 1800);
    assert_eq!(body["estimate"]["travel_time"], "~45 นาที");
    assert_eq!(body["top_pick"]["slug"], "toyota-alphard-executive");
    assert_eq!(body["recommended"].as_array().unwrap().len(), 6);
}

#[actix_rt::test]
async fn test_quote_other_destination_has_no_estimate() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/quote")
        .set_json(json!({
            "service_type": "airport",
            "airport": "สุวรรณภูมิ (BKK)",
            "destination": "อื่นๆ",
            "passengers": 8
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["estimate"].is_null());
    assert_eq!(body["top_pick"]["slug"], "toyota-commuter-vip");
}

#[actix_rt::test]
async fn test_quote_daily_rental_has_no_estimate() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/quote")
        .set_json(json!({
            "service_type": "daily",
            "passengers": 12
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["estimate"].is_null());
    assert_eq!(body["top_pick"]["slug"], "toyota-commuter-standard");
    assert_eq!(body["recommended"][0]["slug"], "toyota-commuter-standard");
}

#[actix_rt::test]
async fn test_quote_oversize_group_gets_nothing() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/quote")
        .set_json(json!({
            "service_type": "tour",
            "passengers": 20
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["top_pick"].is_null());
    assert_eq!(body["recommended"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_quote_clamps_zero_passengers() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/quote")
        .set_json(json!({
            "service_type": "daily",
            "passengers": 0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Clamped to one passenger, so the small-group pick applies.
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["top_pick"]["slug"], "toyota-alphard-executive");
}

#[actix_rt::test]
async fn test_chat_rejects_empty_conversation() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": [] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["response"], "ข้อความไม่ถูกต้อง");
}

#[actix_rt::test]
async fn test_chat_rejects_oversized_message() {
    let app = test::init_service(TestApp::create_app()).await;

    let long_message = "ก".repeat(501);
    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({
            "messages": [{ "role": "user", "content": long_message }]
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["response"].as_str().unwrap().contains("500"));
}

#[actix_rt::test]
async fn test_chat_full_history_gets_canned_handoff() {
    let app = test::init_service(TestApp::create_app()).await;

    let messages: Vec<serde_json::Value> = (0..51)
        .map(|i| json!({ "role": "user", "content": format!("message {}", i) }))
        .collect();
    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "messages": messages }))
        .to_request();

    // Over-long conversations get a polite handoff, not an error status.
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["response"].as_str().unwrap().contains("LINE"));
}

#[actix_rt::test]
async fn test_settings_endpoints_served() {
    let app = test::init_service(TestApp::create_app()).await;

    for uri in ["/api/settings/social", "/api/settings/tracking"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body.is_object());
    }
}

#[actix_rt::test]
async fn test_routes_table_served() {
    let app = test::init_service(TestApp::create_app()).await;

    let req = test::TestRequest::get().uri("/api/routes").to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}
