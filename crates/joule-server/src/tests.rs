//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(None, ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn entry_body(date: &str, ac: f64, fridge: f64) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "housing_type": "flat",
        "base_kwh": 2.4,
        "usage": { "ac": ac, "refrigerator": fridge }
    })
}

// ========== Entry API Tests ==========

#[tokio::test]
async fn test_create_and_list_entries() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/entries",
            entry_body("2024-01-01", 5.0, 2.0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["date"], "2024-01-01");
    assert_eq!(json["housing_type"], "flat");
    assert_eq!(json["usage"]["ac"], 5.0);

    let response = app.oneshot(get("/api/entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], "2024-01-01");
}

#[tokio::test]
async fn test_create_entry_rejects_negative_value() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/entries",
            entry_body("2024-01-01", -1.0, 0.0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("negative"));

    // The rejected entry left the session untouched.
    let response = app.oneshot(get("/api/entries")).await.unwrap();
    let json = get_body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_entry_rejects_missing_date() {
    let app = setup_test_app();

    let body = serde_json::json!({ "housing_type": "flat", "base_kwh": 2.4 });
    let response = app
        .oneshot(json_request("POST", "/api/entries", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn test_clear_entries() {
    let app = setup_test_app();

    for day in ["2024-01-01", "2024-01-02"] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/entries", entry_body(day, 2.0, 1.0)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/entries")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);

    let response = app.oneshot(get("/api/entries")).await.unwrap();
    let json = get_body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let app = setup_test_app();

    let mut request = json_request("POST", "/api/entries", entry_body("2024-01-01", 5.0, 2.0));
    request
        .headers_mut()
        .insert("x-session-id", "alice".parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Alice sees her entry.
    let mut request = get("/api/entries");
    request
        .headers_mut()
        .insert("x-session-id", "alice".parse().unwrap());
    let json = get_body_json(app.clone().oneshot(request).await.unwrap()).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // The default session does not.
    let json = get_body_json(app.oneshot(get("/api/entries")).await.unwrap()).await;
    assert!(json.as_array().unwrap().is_empty());
}

// ========== Summary and Dashboard Tests ==========

#[tokio::test]
async fn test_summary_worked_example() {
    let app = setup_test_app();

    for (day, ac) in [("2024-01-01", 5.0), ("2024-01-02", 3.0)] {
        let body = serde_json::json!({
            "date": day,
            "housing_type": "flat",
            "usage": { "ac": ac, "refrigerator": 2.0 }
        });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/entries", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/api/summary")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["days_tracked"], 2);
    assert_eq!(json["appliance_totals"]["ac"], 8.0);
    assert_eq!(json["appliance_totals"]["refrigerator"], 4.0);
    assert_eq!(json["average_per_day_kwh"], 6.0);

    let series = json["daily_series"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["date"], "2024-01-01");
    assert_eq!(series[0]["kwh"], 7.0);
    assert_eq!(series[1]["kwh"], 5.0);
}

#[tokio::test]
async fn test_dashboard_empty_session() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["days_tracked"], 0);
    assert_eq!(json["average_per_day_kwh"], 0.0);
    assert_eq!(json["highest_day_kwh"], 0.0);
    assert_eq!(json["estimated_monthly_cost"], 0.0);
}

#[tokio::test]
async fn test_dashboard_monthly_projection() {
    let app = setup_test_app();

    for (day, ac) in [("2024-01-01", 5.0), ("2024-01-02", 3.0)] {
        let body = serde_json::json!({
            "date": day,
            "housing_type": "flat",
            "usage": { "ac": ac, "refrigerator": 2.0 }
        });
        app.clone()
            .oneshot(json_request("POST", "/api/entries", body))
            .await
            .unwrap();
    }

    let json = get_body_json(app.oneshot(get("/api/dashboard")).await.unwrap()).await;
    assert_eq!(json["monthly_estimate_kwh"], 180.0);
    assert_eq!(json["estimated_monthly_cost"], 900.0);
    assert_eq!(json["highest_day_kwh"], 7.0);
}

// ========== Tips Tests ==========

#[tokio::test]
async fn test_tips_flag_high_ac_use() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/entries",
            entry_body("2024-01-01", 6.0, 2.0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(app.oneshot(get("/api/tips")).await.unwrap()).await;

    let kinds: Vec<&str> = json["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"high_ac_use"));

    // Score badge is present once a day is tracked.
    assert!(json["score"]["stars"].as_u64().is_some());
}

#[tokio::test]
async fn test_tips_empty_session_has_no_score() {
    let app = setup_test_app();

    let json = get_body_json(app.oneshot(get("/api/tips")).await.unwrap()).await;
    assert!(json["score"].is_null());
    assert!(json["tips"].as_array().unwrap().is_empty());
}

// ========== Profile Tests ==========

#[tokio::test]
async fn test_profile_round_trip() {
    let app = setup_test_app();

    let response = app.clone().oneshot(get("/api/profile")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({
        "name": "Asha",
        "age": 31,
        "city": "Pune",
        "area": "Kothrud",
        "housing_type": "flat",
        "apartment_size": "2bhk"
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/profile", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(app.oneshot(get("/api/profile")).await.unwrap()).await;
    assert_eq!(json["name"], "Asha");
    assert_eq!(json["apartment_size"], "2bhk");
}

#[tokio::test]
async fn test_profile_rejects_invalid_age() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "name": "Asha",
        "age": 0,
        "city": "Pune",
        "area": "Kothrud",
        "housing_type": "flat",
        "apartment_size": "2bhk"
    });
    let response = app
        .oneshot(json_request("PUT", "/api/profile", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Appliance and Estimate Tests ==========

#[tokio::test]
async fn test_appliance_catalog() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/appliances")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let catalog = json.as_array().unwrap();
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog[0]["name"], "ac");
    assert_eq!(catalog[0]["rated_kwh"], 3.0);
    assert_eq!(catalog[0]["hour_adjustable"], true);
    assert_eq!(catalog[1]["label"], "Refrigerator");
    assert_eq!(catalog[1]["hour_adjustable"], false);
}

#[tokio::test]
async fn test_estimate_endpoint() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "apartment_size": "1bhk",
        "appliances": ["ac", "refrigerator"],
        "usage_hours": { "ac": 4.0 }
    });
    let response = app
        .oneshot(json_request("POST", "/api/estimate", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!((json["base_kwh"].as_f64().unwrap() - 2.4).abs() < 1e-9);
    assert!((json["appliance_kwh"].as_f64().unwrap() - 4.5).abs() < 1e-9);
    assert!((json["total_kwh"].as_f64().unwrap() - 6.9).abs() < 1e-9);
}

#[tokio::test]
async fn test_estimate_rejects_invalid_hours() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "apartment_size": "1bhk",
        "appliances": ["ac"],
        "usage_hours": { "ac": 30.0 }
    });
    let response = app
        .oneshot(json_request("POST", "/api/estimate", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ========== Export Tests ==========

#[tokio::test]
async fn test_export_entries_csv() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/entries",
            entry_body("2024-01-01", 5.0, 2.0),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/export/entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers()["content-disposition"]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"energy-log-"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("Date,Housing Type"));
    assert!(lines.next().unwrap().starts_with("2024-01-01,Flat,2.40"));
}

#[tokio::test]
async fn test_security_headers_present() {
    let app = setup_test_app();

    let response = app.oneshot(get("/api/appliances")).await.unwrap();
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}
